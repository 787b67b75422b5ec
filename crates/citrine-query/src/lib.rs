//! Query builder for the Citrination search API.
//!
//! Queries are trees of plain builder structs that serialize to the JSON the
//! search engine accepts:
//!
//! - **Filters**: `Filter::equal("PbTe")`, `Filter::range("0", "1.5")`, nested groups
//! - **Field operations**: extract a value under an alias, filter and sort on it
//! - **Domain queries**: systems, properties, compositions, datasets and files
//! - **Top-level queries**: paging, scope entries and named analyses
//!
//! # Example
//!
//! ```
//! use citrine_query::{
//!     DataQuery, FieldOperation, Filter, PifQuery, ReturningQuery, SystemQuery,
//! };
//!
//! let query = PifQuery::new().with_size(10).add_query(
//!     DataQuery::new().add_system(
//!         SystemQuery::new()
//!             .add_chemical_formula(FieldOperation::new("formula", Filter::equal("PbTe"))),
//!     ),
//! );
//! let json = serde_json::to_value(&query).unwrap();
//! assert_eq!(json["query"][0]["system"][0]["chemicalFormula"][0]["extractAs"], "formula");
//! ```

#![warn(missing_docs)]

#[macro_use]
mod accessors;
pub mod vocabulary;
pub mod wire;

mod analysis;
mod dataset;
mod field;
mod file;
mod filter;
pub mod pif;
mod query;

pub use analysis::{
    Analysis, AnalysisRange, CategoricalAnalysis, HistogramAnalysis, RangesAnalysis,
    StatisticsAnalysis,
};
pub use dataset::DatasetQuery;
pub use field::FieldOperation;
pub use file::FileQuery;
pub use filter::{Filter, FilterGroup};
pub use pif::{
    CompositionQuery, NameQuery, ProcessStepQuery, PropertiesQuery, ReferenceQuery, SystemQuery,
    ValueQuery,
};
pub use query::{
    BaseQuery, DataQuery, DatasetReturningQuery, FileReturningQuery, MultiQuery, PifQuery,
    ReturningQuery,
};
pub use vocabulary::{Logic, MatchType, Sort, TraversalMode, Units, Vocabulary, VocabularyError};
