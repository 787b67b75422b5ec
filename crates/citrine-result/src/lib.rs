//! Search results for the Citrination search API.
//!
//! Every endpoint answers with a [`SearchResult`] envelope over its own hit type.
//! Batched queries answer with a [`MultiSearchResult`] whose elements each report
//! their own [`Status`]. Consecutive pages of one query combine with
//! [`SearchResult::add`].
//!
//! # Example
//!
//! ```
//! use citrine_result::PifSearchResult;
//!
//! let page: PifSearchResult =
//!     serde_json::from_str(r#"{"totalNumHits": 3, "hits": [{"id": "1/1/1"}]}"#).unwrap();
//! assert_eq!(page.hit(0).unwrap().id, "1/1/1");
//! assert!(page.hit(1).is_err());
//! ```

#![warn(missing_docs)]

mod analysis;
mod envelope;
mod error;
mod hit;
mod multi;

pub use analysis::{
    AnalysisResult, CategoricalResult, HistogramBucket, HistogramResult, RangeBucket,
    RangesResult, StatisticsResult, ValueBucket,
};
pub use envelope::{DatasetSearchResult, FileSearchResult, PifSearchResult, SearchResult};
pub use error::ResultError;
pub use hit::{DatasetSearchHit, FileSearchHit, PifSearchHit};
pub use multi::{MultiSearchResult, MultiSearchResultElement, Status};
