//! Results of named analyses, mirroring the analysis requests tag for tag.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use citrine_query::wire;

/// A computed analysis, tagged on `"type"` like its request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum AnalysisResult {
    /// Fixed-width buckets.
    Histogram(HistogramResult),
    /// Caller-defined ranges.
    Ranges(RangesResult),
    /// Summary statistics.
    Statistics(StatisticsResult),
    /// Most frequent categorical values.
    #[serde(rename = "values")]
    Categorical(CategoricalResult),
}

impl AnalysisResult {
    /// The wire tag of this result.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Histogram(_) => "histogram",
            Self::Ranges(_) => "ranges",
            Self::Statistics(_) => "statistics",
            Self::Categorical(_) => "values",
        }
    }

    /// The statistics, when this is a statistics result.
    pub fn as_statistics(&self) -> Option<&StatisticsResult> {
        match self {
            Self::Statistics(stats) => Some(stats),
            _ => None,
        }
    }

    /// Total documents counted across all buckets. Statistics report their own count.
    pub fn total_count(&self) -> u64 {
        match self {
            Self::Histogram(h) => h.buckets.iter().map(|b| b.count).fold(0, u64::saturating_add),
            Self::Ranges(r) => r.buckets.iter().map(|b| b.count).fold(0, u64::saturating_add),
            Self::Statistics(s) => s.count.unwrap_or(0),
            Self::Categorical(c) => c
                .buckets
                .iter()
                .map(|b| b.count)
                .fold(c.other_count.unwrap_or(0), u64::saturating_add),
        }
    }
}

/// One histogram bucket.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HistogramBucket {
    /// Lower bound of the bucket.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<f64>,
    /// Documents in the bucket.
    pub count: u64,
    /// Sub-analyses computed within the bucket.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub analysis: BTreeMap<String, AnalysisResult>,
}

/// Histogram buckets in ascending key order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HistogramResult {
    /// Buckets in ascending key order.
    #[serde(with = "wire::list", skip_serializing_if = "Vec::is_empty")]
    pub buckets: Vec<HistogramBucket>,
}

/// One range bucket.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RangeBucket {
    /// Range key, as requested or generated by the engine.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    /// Inclusive lower bound.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<f64>,
    /// Exclusive upper bound.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<f64>,
    /// Documents in the range.
    pub count: u64,
    /// Sub-analyses computed within the range.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub analysis: BTreeMap<String, AnalysisResult>,
}

/// Range buckets in request order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RangesResult {
    /// One bucket per requested range.
    #[serde(with = "wire::list", skip_serializing_if = "Vec::is_empty")]
    pub buckets: Vec<RangeBucket>,
}

/// Summary statistics over a numeric field.
///
/// The extended members (`sum_of_squares`, `variance`, `std_deviation`) are only
/// present when extended statistics were requested.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StatisticsResult {
    /// Documents with a value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<u64>,
    /// Smallest value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    /// Largest value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    /// Mean value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg: Option<f64>,
    /// Sum of values.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sum: Option<f64>,
    /// Sum of squared values.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sum_of_squares: Option<f64>,
    /// Population variance.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variance: Option<f64>,
    /// Population standard deviation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub std_deviation: Option<f64>,
}

/// One categorical bucket.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValueBucket {
    /// The categorical value.
    pub value: String,
    /// Documents with this value.
    pub count: u64,
    /// Sub-analyses computed within the bucket.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub analysis: BTreeMap<String, AnalysisResult>,
}

/// Most frequent values, most frequent first.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CategoricalResult {
    /// Buckets, most frequent first.
    #[serde(with = "wire::list", skip_serializing_if = "Vec::is_empty")]
    pub buckets: Vec<ValueBucket>,
    /// Documents whose value fell outside the returned buckets.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub other_count: Option<u64>,
}
