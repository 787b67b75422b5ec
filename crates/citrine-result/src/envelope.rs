//! Search result envelopes and page merging.

use std::{collections::BTreeMap, slice};

use serde::{Deserialize, Serialize};

use citrine_query::wire;

use crate::{
    analysis::AnalysisResult,
    error::ResultError,
    hit::{DatasetSearchHit, FileSearchHit, PifSearchHit},
};

/// One page of hits plus timing, totals and analysis results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    default,
    rename_all = "camelCase",
    bound(serialize = "H: Serialize", deserialize = "H: Deserialize<'de>")
)]
pub struct SearchResult<H> {
    /// Engine execution time in milliseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    took: Option<u64>,
    /// Total matches, which may exceed the hits returned.
    #[serde(skip_serializing_if = "Option::is_none")]
    total_num_hits: Option<u64>,
    /// Highest score among all matches.
    #[serde(skip_serializing_if = "Option::is_none")]
    max_score: Option<f64>,
    /// Hits in engine order.
    #[serde(with = "wire::list", skip_serializing_if = "Vec::is_empty")]
    hits: Vec<H>,
    /// Named analysis results.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    analysis: BTreeMap<String, AnalysisResult>,
}

/// Result of a PIF search.
pub type PifSearchResult = SearchResult<PifSearchHit>;

/// Result of a dataset search.
pub type DatasetSearchResult = SearchResult<DatasetSearchHit>;

/// Result of a file search.
pub type FileSearchResult = SearchResult<FileSearchHit>;

impl<H> Default for SearchResult<H> {
    fn default() -> Self {
        Self {
            took: None,
            total_num_hits: None,
            max_score: None,
            hits: Vec::new(),
            analysis: BTreeMap::new(),
        }
    }
}

impl<H> SearchResult<H> {
    /// Creates a result holding `hits` and nothing else.
    pub fn new(hits: Vec<H>) -> Self {
        Self {
            hits,
            ..Self::default()
        }
    }

    /// Sets the execution time.
    #[must_use]
    pub fn with_took(mut self, took: u64) -> Self {
        self.took = Some(took);
        self
    }

    /// Sets the total match count.
    #[must_use]
    pub fn with_total_num_hits(mut self, total: u64) -> Self {
        self.total_num_hits = Some(total);
        self
    }

    /// Sets the maximum score.
    #[must_use]
    pub fn with_max_score(mut self, max_score: f64) -> Self {
        self.max_score = Some(max_score);
        self
    }

    /// Adds or replaces a named analysis result.
    #[must_use]
    pub fn with_analysis(mut self, name: impl Into<String>, result: AnalysisResult) -> Self {
        self.analysis.insert(name.into(), result);
        self
    }

    /// Engine execution time in milliseconds.
    pub fn took(&self) -> Option<u64> {
        self.took
    }

    /// Total number of matches reported by the engine.
    pub fn total_num_hits(&self) -> Option<u64> {
        self.total_num_hits
    }

    /// Highest score among the matches.
    pub fn max_score(&self) -> Option<f64> {
        self.max_score
    }

    /// Hits in engine order.
    pub fn hits(&self) -> &[H] {
        &self.hits
    }

    /// Consumes the result, returning its hits.
    pub fn into_hits(self) -> Vec<H> {
        self.hits
    }

    /// The hit at `index`.
    ///
    /// Fails with [`ResultError::HitOutOfRange`] past the end, including on an
    /// empty hit list.
    pub fn hit(&self, index: usize) -> Result<&H, ResultError> {
        self.hits.get(index).ok_or(ResultError::HitOutOfRange {
            index,
            len: self.hits.len(),
        })
    }

    /// Number of hits held.
    pub fn len(&self) -> usize {
        self.hits.len()
    }

    /// True when no hits are held.
    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }

    /// Keeps at most `len` hits, dropping the rest.
    pub fn truncate(&mut self, len: usize) {
        self.hits.truncate(len);
    }

    /// Named analysis results.
    pub fn analysis(&self) -> &BTreeMap<String, AnalysisResult> {
        &self.analysis
    }

    /// Combines this page with the page that follows it.
    #[must_use]
    pub fn add(mut self, next: Self) -> Self {
        self.merge(next);
        self
    }

    /// Appends the page that follows this one.
    ///
    /// Times add up, the total is taken from `next` when it reports one, the
    /// maximum score is the larger of the two, and hits keep page order. Analysis
    /// results from `next` replace same-named ones.
    pub fn merge(&mut self, next: Self) {
        self.took = match (self.took, next.took) {
            (Some(lhs), Some(rhs)) => Some(lhs.saturating_add(rhs)),
            (lhs, rhs) => lhs.or(rhs),
        };
        if next.total_num_hits.is_some() {
            self.total_num_hits = next.total_num_hits;
        }
        self.max_score = match (self.max_score, next.max_score) {
            (Some(lhs), Some(rhs)) => Some(lhs.max(rhs)),
            (lhs, rhs) => lhs.or(rhs),
        };
        self.hits.extend(next.hits);
        self.analysis.extend(next.analysis);
    }
}

impl<'a, H> IntoIterator for &'a SearchResult<H> {
    type Item = &'a H;
    type IntoIter = slice::Iter<'a, H>;

    fn into_iter(self) -> Self::IntoIter {
        self.hits.iter()
    }
}
