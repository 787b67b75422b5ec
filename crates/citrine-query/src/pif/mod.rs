//! Queries against PIF (Physical Information File) records.
//!
//! A PIF describes a physical system: its names, formula, composition, measured
//! properties, preparation history, references and nested sub-systems. Each query
//! type here mirrors one part of that record with one list of operations per
//! attribute.

mod composition;
mod reference;
mod system;
mod value;

pub use composition::CompositionQuery;
pub use reference::{NameQuery, ReferenceQuery};
pub use system::SystemQuery;
pub use value::{ProcessStepQuery, PropertiesQuery, ValueQuery};
