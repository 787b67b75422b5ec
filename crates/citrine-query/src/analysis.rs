//! Aggregation requests attached to a query.
//!
//! An [`Analysis`] is internally tagged by `"type"` with one of `histogram`,
//! `ranges`, `statistics` or `values`. Any other tag is rejected on input; it is
//! never coerced into one of the known kinds.
//!
//! Histogram, ranges and categorical analyses may nest further analyses under
//! `analysis`; the engine evaluates those within each bucket.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{
    vocabulary::{MatchType, TraversalMode},
    wire,
};

/// A requested aggregation over one field path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Analysis {
    /// Fixed-width numeric buckets.
    Histogram(HistogramAnalysis),
    /// Explicit numeric ranges.
    Ranges(RangesAnalysis),
    /// Summary statistics.
    Statistics(StatisticsAnalysis),
    /// Buckets per distinct categorical value.
    #[serde(rename = "values")]
    Categorical(CategoricalAnalysis),
}

impl Analysis {
    /// The wire tag of this analysis.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Histogram(_) => "histogram",
            Self::Ranges(_) => "ranges",
            Self::Statistics(_) => "statistics",
            Self::Categorical(_) => "values",
        }
    }

    /// The analysed field path.
    pub fn path(&self) -> &str {
        match self {
            Self::Histogram(a) => &a.path,
            Self::Ranges(a) => &a.path,
            Self::Statistics(a) => &a.path,
            Self::Categorical(a) => &a.path,
        }
    }
}

/// Buckets values into fixed-width intervals.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HistogramAnalysis {
    /// Field path to analyse.
    pub path: String,
    /// Bucket width.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interval: Option<f64>,
    /// Shift applied to bucket boundaries.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<f64>,
    /// Buckets with fewer documents are dropped.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_count: Option<u64>,
    /// Value used for documents missing the field.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub missing: Option<f64>,
    /// Analyses evaluated within each bucket.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub analysis: BTreeMap<String, Analysis>,
}

impl HistogramAnalysis {
    /// Creates a histogram over `path` with the given bucket width.
    pub fn new(path: impl Into<String>, interval: f64) -> Self {
        Self {
            path: path.into(),
            interval: Some(interval),
            ..Self::default()
        }
    }

    /// Shifts bucket boundaries.
    #[must_use]
    pub fn with_offset(mut self, offset: f64) -> Self {
        self.offset = Some(offset);
        self
    }

    /// Drops buckets with fewer than `min_count` documents.
    #[must_use]
    pub fn with_min_count(mut self, min_count: u64) -> Self {
        self.min_count = Some(min_count);
        self
    }

    /// Nests an analysis inside each bucket.
    #[must_use]
    pub fn add_analysis(mut self, name: impl Into<String>, analysis: impl Into<Analysis>) -> Self {
        self.analysis.insert(name.into(), analysis.into());
        self
    }
}

/// One explicit range. Either bound may be open.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisRange {
    /// Bucket label.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    /// Inclusive lower bound.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<f64>,
    /// Exclusive upper bound.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<f64>,
}

impl AnalysisRange {
    /// Creates a range `[from, to)`.
    pub fn new(from: Option<f64>, to: Option<f64>) -> Self {
        Self {
            key: None,
            from,
            to,
        }
    }

    /// Labels the range.
    #[must_use]
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }
}

/// Buckets values into caller-supplied ranges.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RangesAnalysis {
    /// Field path to analyse.
    pub path: String,
    /// Ranges in the order their buckets are returned.
    #[serde(with = "wire::list", skip_serializing_if = "Vec::is_empty")]
    pub ranges: Vec<AnalysisRange>,
    /// Value used for documents missing the field.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub missing: Option<f64>,
    /// Analyses evaluated within each bucket.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub analysis: BTreeMap<String, Analysis>,
}

impl RangesAnalysis {
    /// Creates a ranges analysis over `path` with no ranges yet.
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            ..Self::default()
        }
    }

    /// Appends a range.
    #[must_use]
    pub fn add_range(mut self, range: AnalysisRange) -> Self {
        self.ranges.push(range);
        self
    }

    /// Nests an analysis inside each bucket.
    #[must_use]
    pub fn add_analysis(mut self, name: impl Into<String>, analysis: impl Into<Analysis>) -> Self {
        self.analysis.insert(name.into(), analysis.into());
        self
    }
}

/// Computes count, min, max, sum and optionally variance over a numeric field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StatisticsAnalysis {
    /// Field path to analyse.
    pub path: String,
    /// Also compute sum of squares, variance and standard deviation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extended: Option<bool>,
    /// Value used for documents missing the field.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub missing: Option<f64>,
}

impl StatisticsAnalysis {
    /// Creates a statistics analysis over `path`.
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            ..Self::default()
        }
    }

    /// Requests extended statistics.
    #[must_use]
    pub fn extended(mut self) -> Self {
        self.extended = Some(true);
        self
    }
}

/// Counts documents per distinct value of a categorical field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CategoricalAnalysis {
    /// Field path to analyse.
    pub path: String,
    /// Maximum number of buckets returned.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
    /// Buckets with fewer documents are dropped.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_count: Option<u64>,
    /// Value used for documents missing the field.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub missing: Option<String>,
    /// Which occurrences of a repeated field are counted.
    #[serde(
        deserialize_with = "wire::lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub traversal_mode: Option<TraversalMode>,
    /// How values are matched into buckets.
    #[serde(
        deserialize_with = "wire::lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub match_type: Option<MatchType>,
    /// Analyses evaluated within each bucket.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub analysis: BTreeMap<String, Analysis>,
}

impl CategoricalAnalysis {
    /// Creates a categorical analysis over `path`.
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            ..Self::default()
        }
    }

    /// Limits the number of buckets.
    #[must_use]
    pub fn with_size(mut self, size: u32) -> Self {
        self.size = Some(size);
        self
    }

    /// Sets the traversal mode.
    #[must_use]
    pub fn with_traversal_mode(mut self, mode: TraversalMode) -> Self {
        self.traversal_mode = Some(mode);
        self
    }

    /// Sets the match type.
    #[must_use]
    pub fn with_match_type(mut self, match_type: MatchType) -> Self {
        self.match_type = Some(match_type);
        self
    }

    /// Nests an analysis inside each bucket.
    #[must_use]
    pub fn add_analysis(mut self, name: impl Into<String>, analysis: impl Into<Analysis>) -> Self {
        self.analysis.insert(name.into(), analysis.into());
        self
    }
}

impl From<HistogramAnalysis> for Analysis {
    fn from(analysis: HistogramAnalysis) -> Self {
        Self::Histogram(analysis)
    }
}

impl From<RangesAnalysis> for Analysis {
    fn from(analysis: RangesAnalysis) -> Self {
        Self::Ranges(analysis)
    }
}

impl From<StatisticsAnalysis> for Analysis {
    fn from(analysis: StatisticsAnalysis) -> Self {
        Self::Statistics(analysis)
    }
}

impl From<CategoricalAnalysis> for Analysis {
    fn from(analysis: CategoricalAnalysis) -> Self {
        Self::Categorical(analysis)
    }
}
