//! CLI support for the `citrine` binary.

pub mod args;
pub mod commands;
pub mod context;
mod output;
pub mod query;
