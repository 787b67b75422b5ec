//! Top-level queries: the data scope, paging, analyses and response shaping.
//!
//! [`BaseQuery`] holds what every search endpoint accepts. The endpoint-specific
//! queries ([`PifQuery`], [`DatasetReturningQuery`], [`FileReturningQuery`])
//! compose it, flattened into the same JSON object, and share its builder
//! methods through [`ReturningQuery`].

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{
    analysis::Analysis, dataset::DatasetQuery, file::FileQuery, pif::SystemQuery,
    vocabulary::Logic, wire,
};

/// The scope searched by one query entry.
///
/// System, dataset and file constraints live in separate lists; the relative
/// order of different kinds carries no meaning, while order within a list does.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DataQuery {
    /// How this entry combines with its siblings.
    #[serde(
        deserialize_with = "wire::lenient",
        skip_serializing_if = "Option::is_none"
    )]
    logic: Option<Logic>,
    /// Free-text query applied across all fields.
    #[serde(skip_serializing_if = "Option::is_none")]
    simple: Option<String>,
    /// Constraints on the physical system.
    #[serde(with = "wire::list", skip_serializing_if = "Vec::is_empty")]
    system: Vec<SystemQuery>,
    /// Constraints on the containing dataset.
    #[serde(with = "wire::list", skip_serializing_if = "Vec::is_empty")]
    dataset: Vec<DatasetQuery>,
    /// Constraints on dataset files.
    #[serde(with = "wire::list", skip_serializing_if = "Vec::is_empty")]
    file: Vec<FileQuery>,
}

impl DataQuery {
    /// Creates an empty scope.
    pub fn new() -> Self {
        Self::default()
    }

    logic_accessors!(logic);

    /// The free-text query, if any.
    pub fn simple(&self) -> Option<&str> {
        self.simple.as_deref()
    }

    /// Sets the free-text query.
    #[must_use]
    pub fn with_simple(mut self, simple: impl Into<String>) -> Self {
        self.simple = Some(simple.into());
        self
    }

    list_accessors! {
        system @ system: SystemQuery => set_system, add_system, push_system, has_system;
        dataset @ dataset: DatasetQuery => set_dataset, add_dataset, push_dataset, has_dataset;
        file @ file: FileQuery => set_file, add_file, push_file, has_file;
    }
}

impl From<SystemQuery> for DataQuery {
    fn from(system: SystemQuery) -> Self {
        Self::new().add_system(system)
    }
}

impl From<DatasetQuery> for DataQuery {
    fn from(dataset: DatasetQuery) -> Self {
        Self::new().add_dataset(dataset)
    }
}

impl From<FileQuery> for DataQuery {
    fn from(file: FileQuery) -> Self {
        Self::new().add_file(file)
    }
}

/// Paging, scope and analyses shared by every search endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BaseQuery {
    /// Index of the first hit to return.
    #[serde(skip_serializing_if = "Option::is_none")]
    from: Option<u64>,
    /// Maximum number of hits to return.
    #[serde(skip_serializing_if = "Option::is_none")]
    size: Option<u64>,
    /// Engine-side time limit in milliseconds. Not enforced by the client.
    #[serde(skip_serializing_if = "Option::is_none")]
    timeout: Option<u64>,
    /// Whether hits are scored by relevance.
    #[serde(skip_serializing_if = "Option::is_none")]
    score_relevance: Option<bool>,
    /// Whether the result reports the maximum score.
    #[serde(skip_serializing_if = "Option::is_none")]
    return_max_score: Option<bool>,
    /// Return hits in random order.
    #[serde(skip_serializing_if = "Option::is_none")]
    random_results: Option<bool>,
    /// Seed for `random_results`.
    #[serde(skip_serializing_if = "Option::is_none")]
    random_seed: Option<i64>,
    /// Scope entries.
    #[serde(with = "wire::list", skip_serializing_if = "Vec::is_empty")]
    query: Vec<DataQuery>,
    /// Named analyses.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    analysis: BTreeMap<String, Analysis>,
}

impl BaseQuery {
    /// Creates an empty query.
    pub fn new() -> Self {
        Self::default()
    }

    /// Index of the first hit, if set.
    pub fn from(&self) -> Option<u64> {
        self.from
    }

    /// Page size, if set.
    pub fn size(&self) -> Option<u64> {
        self.size
    }

    /// Engine-side timeout in milliseconds, if set.
    pub fn timeout(&self) -> Option<u64> {
        self.timeout
    }

    /// Whether relevance scoring was requested.
    pub fn score_relevance(&self) -> Option<bool> {
        self.score_relevance
    }

    /// Whether the maximum score was requested.
    pub fn return_max_score(&self) -> Option<bool> {
        self.return_max_score
    }

    /// Whether random ordering was requested.
    pub fn random_results(&self) -> Option<bool> {
        self.random_results
    }

    /// The random ordering seed, if set.
    pub fn random_seed(&self) -> Option<i64> {
        self.random_seed
    }

    /// Scope entries in insertion order.
    pub fn query(&self) -> &[DataQuery] {
        &self.query
    }

    /// Named analyses.
    pub fn analysis(&self) -> &BTreeMap<String, Analysis> {
        &self.analysis
    }
}

/// Builder methods shared by every query that wraps a [`BaseQuery`].
pub trait ReturningQuery: Sized + Clone {
    /// The shared part of the query.
    fn base(&self) -> &BaseQuery;

    /// Mutable access to the shared part of the query.
    fn base_mut(&mut self) -> &mut BaseQuery;

    /// Sets the index of the first hit.
    #[must_use]
    fn with_from(mut self, from: u64) -> Self {
        self.base_mut().from = Some(from);
        self
    }

    /// Sets the page size.
    #[must_use]
    fn with_size(mut self, size: u64) -> Self {
        self.base_mut().size = Some(size);
        self
    }

    /// Sets the engine-side timeout in milliseconds.
    #[must_use]
    fn with_timeout(mut self, millis: u64) -> Self {
        self.base_mut().timeout = Some(millis);
        self
    }

    /// Toggles relevance scoring.
    #[must_use]
    fn with_score_relevance(mut self, score_relevance: bool) -> Self {
        self.base_mut().score_relevance = Some(score_relevance);
        self
    }

    /// Toggles reporting of the maximum score.
    #[must_use]
    fn with_return_max_score(mut self, return_max_score: bool) -> Self {
        self.base_mut().return_max_score = Some(return_max_score);
        self
    }

    /// Requests random ordering with an optional seed.
    #[must_use]
    fn with_random_results(mut self, seed: Option<i64>) -> Self {
        let base = self.base_mut();
        base.random_results = Some(true);
        base.random_seed = seed;
        self
    }

    /// Appends a scope entry.
    #[must_use]
    fn add_query(mut self, query: impl Into<DataQuery>) -> Self {
        self.base_mut().query.push(query.into());
        self
    }

    /// Replaces the scope entries.
    #[must_use]
    fn set_query(mut self, queries: Vec<DataQuery>) -> Self {
        self.base_mut().query = queries;
        self
    }

    /// Adds or replaces a named analysis.
    #[must_use]
    fn add_analysis(mut self, name: impl Into<String>, analysis: impl Into<Analysis>) -> Self {
        self.base_mut()
            .analysis
            .insert(name.into(), analysis.into());
        self
    }

    /// Returns a copy of this query advanced by one page.
    ///
    /// Returns `None` when no positive page size is set, since the next offset is
    /// then unknown.
    fn next_page(&self) -> Option<Self> {
        let size = self.base().size.filter(|size| *size > 0)?;
        let from = self.base().from.unwrap_or(0);
        let mut next = self.clone();
        next.base_mut().from = Some(from + size);
        Some(next)
    }
}

impl ReturningQuery for BaseQuery {
    fn base(&self) -> &BaseQuery {
        self
    }

    fn base_mut(&mut self) -> &mut BaseQuery {
        self
    }
}

/// A query returning PIF records.
///
/// Documents in the older flat shape, with a top-level `system` field instead of
/// a `query` list, are upgraded on input: the `system` entries become one extra
/// scope entry appended after any existing ones. The flat shape is never written.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "FlatPifQuery")]
pub struct PifQuery {
    /// Paging, scope and analyses.
    #[serde(flatten)]
    base: BaseQuery,
    /// Include the full record on each hit.
    #[serde(skip_serializing_if = "Option::is_none")]
    return_system: Option<bool>,
    /// Include the path of each extracted value.
    #[serde(skip_serializing_if = "Option::is_none")]
    return_extracted_path: Option<bool>,
    /// Render chemical formulas as LaTeX in extracted values.
    #[serde(skip_serializing_if = "Option::is_none")]
    add_latex: Option<bool>,
}

/// Input shape of [`PifQuery`], including the legacy `system` field.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct FlatPifQuery {
    /// Paging, scope and analyses.
    #[serde(flatten)]
    base: BaseQuery,
    /// See [`PifQuery`].
    return_system: Option<bool>,
    /// See [`PifQuery`].
    return_extracted_path: Option<bool>,
    /// See [`PifQuery`].
    add_latex: Option<bool>,
    /// Legacy scope: systems given directly at the top level.
    #[serde(deserialize_with = "wire::list::deserialize")]
    system: Vec<SystemQuery>,
}

impl From<FlatPifQuery> for PifQuery {
    fn from(flat: FlatPifQuery) -> Self {
        let mut base = flat.base;
        if !flat.system.is_empty() {
            base.query.push(DataQuery::new().set_system(flat.system));
        }
        Self {
            base,
            return_system: flat.return_system,
            return_extracted_path: flat.return_extracted_path,
            add_latex: flat.add_latex,
        }
    }
}

impl PifQuery {
    /// Creates an empty PIF query.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether full records were requested.
    pub fn return_system(&self) -> Option<bool> {
        self.return_system
    }

    /// Whether extracted paths were requested.
    pub fn return_extracted_path(&self) -> Option<bool> {
        self.return_extracted_path
    }

    /// Whether LaTeX formulas were requested.
    pub fn add_latex(&self) -> Option<bool> {
        self.add_latex
    }

    /// Toggles returning full records.
    #[must_use]
    pub fn with_return_system(mut self, return_system: bool) -> Self {
        self.return_system = Some(return_system);
        self
    }

    /// Toggles returning extracted paths.
    #[must_use]
    pub fn with_return_extracted_path(mut self, return_extracted_path: bool) -> Self {
        self.return_extracted_path = Some(return_extracted_path);
        self
    }

    /// Toggles LaTeX formulas.
    #[must_use]
    pub fn with_add_latex(mut self, add_latex: bool) -> Self {
        self.add_latex = Some(add_latex);
        self
    }
}

impl ReturningQuery for PifQuery {
    fn base(&self) -> &BaseQuery {
        &self.base
    }

    fn base_mut(&mut self) -> &mut BaseQuery {
        &mut self.base
    }
}

/// A query returning datasets.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DatasetReturningQuery {
    /// Paging, scope and analyses.
    #[serde(flatten)]
    base: BaseQuery,
    /// Report the number of matching records per dataset.
    #[serde(skip_serializing_if = "Option::is_none")]
    count_pifs: Option<bool>,
}

impl DatasetReturningQuery {
    /// Creates an empty dataset query.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether per-dataset record counts were requested.
    pub fn count_pifs(&self) -> Option<bool> {
        self.count_pifs
    }

    /// Toggles per-dataset record counts.
    #[must_use]
    pub fn with_count_pifs(mut self, count_pifs: bool) -> Self {
        self.count_pifs = Some(count_pifs);
        self
    }
}

impl ReturningQuery for DatasetReturningQuery {
    fn base(&self) -> &BaseQuery {
        &self.base
    }

    fn base_mut(&mut self) -> &mut BaseQuery {
        &mut self.base
    }
}

/// A query returning dataset files.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FileReturningQuery {
    /// Paging, scope and analyses.
    #[serde(flatten)]
    base: BaseQuery,
    /// Maximum number of content highlights per hit.
    #[serde(skip_serializing_if = "Option::is_none")]
    max_content_highlights: Option<u32>,
    /// Markup inserted before each highlight.
    #[serde(skip_serializing_if = "Option::is_none")]
    highlight_pre_tag: Option<String>,
    /// Markup inserted after each highlight.
    #[serde(skip_serializing_if = "Option::is_none")]
    highlight_post_tag: Option<String>,
}

impl FileReturningQuery {
    /// Creates an empty file query.
    pub fn new() -> Self {
        Self::default()
    }

    /// Maximum highlights per hit, if set.
    pub fn max_content_highlights(&self) -> Option<u32> {
        self.max_content_highlights
    }

    /// Highlight markup, if set.
    pub fn highlight_tags(&self) -> (Option<&str>, Option<&str>) {
        (
            self.highlight_pre_tag.as_deref(),
            self.highlight_post_tag.as_deref(),
        )
    }

    /// Requests up to `max` content highlights per hit.
    #[must_use]
    pub fn with_max_content_highlights(mut self, max: u32) -> Self {
        self.max_content_highlights = Some(max);
        self
    }

    /// Sets the highlight markup.
    #[must_use]
    pub fn with_highlight_tags(mut self, pre: impl Into<String>, post: impl Into<String>) -> Self {
        self.highlight_pre_tag = Some(pre.into());
        self.highlight_post_tag = Some(post.into());
        self
    }
}

impl ReturningQuery for FileReturningQuery {
    fn base(&self) -> &BaseQuery {
        &self.base
    }

    fn base_mut(&mut self) -> &mut BaseQuery {
        &mut self.base
    }
}

/// Independent queries submitted in one round trip.
///
/// Each query succeeds or fails on its own; see the multi-result types.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MultiQuery<Q> {
    /// Queries in submission order.
    queries: Vec<Q>,
}

impl<Q> Default for MultiQuery<Q> {
    fn default() -> Self {
        Self {
            queries: Vec::new(),
        }
    }
}

impl<Q> MultiQuery<Q> {
    /// Creates an empty batch.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a query.
    #[must_use]
    pub fn add_query(mut self, query: Q) -> Self {
        self.queries.push(query);
        self
    }

    /// Queries in submission order.
    pub fn queries(&self) -> &[Q] {
        &self.queries
    }

    /// Number of queries in the batch.
    pub fn len(&self) -> usize {
        self.queries.len()
    }

    /// True when the batch is empty.
    pub fn is_empty(&self) -> bool {
        self.queries.is_empty()
    }
}

impl<Q> FromIterator<Q> for MultiQuery<Q> {
    fn from_iter<I: IntoIterator<Item = Q>>(iter: I) -> Self {
        Self {
            queries: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::{analysis::StatisticsAnalysis, field::FieldOperation, filter::Filter};

    /// A system scope filtering on chemical formula.
    fn formula_scope(formula: &str) -> SystemQuery {
        SystemQuery::new()
            .add_chemical_formula(FieldOperation::new("formula", Filter::equal(formula)))
    }

    #[test]
    fn empty_query_is_empty_object() {
        assert_eq!(serde_json::to_value(PifQuery::new()).unwrap(), json!({}));
    }

    #[test]
    fn pif_query_flattens_base() {
        let query = PifQuery::new()
            .with_from(10)
            .with_size(5)
            .with_return_system(false)
            .add_query(formula_scope("PbTe"))
            .add_analysis("gap", StatisticsAnalysis::new("properties.value"));

        assert_eq!(
            serde_json::to_value(&query).unwrap(),
            json!({
                "from": 10,
                "size": 5,
                "query": [{"system": [{"chemicalFormula": [
                    {"extractAs": "formula", "filter": [{"equal": "PbTe"}]}
                ]}]}],
                "analysis": {"gap": {"type": "statistics", "path": "properties.value"}},
                "returnSystem": false
            })
        );
    }

    #[test]
    fn pif_query_round_trips() {
        let query = PifQuery::new()
            .with_size(3)
            .with_timeout(5_000)
            .with_add_latex(true)
            .add_query(DataQuery::new().with_simple("thermoelectric"));
        let json = serde_json::to_string(&query).unwrap();
        let back: PifQuery = serde_json::from_str(&json).unwrap();
        assert_eq!(back, query);
    }

    #[test]
    fn legacy_system_field_is_upgraded() {
        let legacy: PifQuery = serde_json::from_value(json!({
            "size": 2,
            "system": {"chemicalFormula": {"filter": {"equal": "PbTe"}}}
        }))
        .unwrap();

        let modern: PifQuery = serde_json::from_value(json!({
            "size": 2,
            "query": [{"system": [{"chemicalFormula": [{"filter": [{"equal": "PbTe"}]}]}]}]
        }))
        .unwrap();

        assert_eq!(legacy, modern);
        assert_eq!(legacy.base().query().len(), 1);
        assert!(
            serde_json::to_value(&legacy)
                .unwrap()
                .get("system")
                .is_none()
        );
    }

    #[test]
    fn legacy_system_appends_after_query_entries() {
        let query: PifQuery = serde_json::from_value(json!({
            "query": [{"simple": "first"}],
            "system": [{"names": {"extractAs": "name"}}]
        }))
        .unwrap();
        let scopes = query.base().query();
        assert_eq!(scopes.len(), 2);
        assert_eq!(scopes[0].simple(), Some("first"));
        assert!(scopes[1].has_system());
    }

    #[test]
    fn next_page_advances_from() {
        let query = PifQuery::new().with_size(10);
        let second = query.next_page().unwrap();
        assert_eq!(second.base().from(), Some(10));
        let third = second.next_page().unwrap();
        assert_eq!(third.base().from(), Some(20));
        assert_eq!(query.base().from(), None);
    }

    #[test]
    fn next_page_needs_a_size() {
        assert!(PifQuery::new().next_page().is_none());
        assert!(PifQuery::new().with_size(0).next_page().is_none());
    }

    #[test]
    fn scope_kinds_are_independent_lists() {
        let system = formula_scope("Al2O3");
        let dataset = DatasetQuery::new().add_id(Filter::equal("42"));

        let lhs = DataQuery::new()
            .add_system(system.clone())
            .add_dataset(dataset.clone());
        let rhs = DataQuery::new().add_dataset(dataset);
        assert_ne!(lhs, rhs);

        let rhs = rhs.add_system(system);
        assert_eq!(lhs, rhs);
    }

    #[test]
    fn file_query_highlights() {
        let query = FileReturningQuery::new()
            .with_max_content_highlights(3)
            .with_highlight_tags("<b>", "</b>");
        let json = serde_json::to_value(&query).unwrap();
        assert_eq!(json["maxContentHighlights"], 3);
        assert_eq!(json["highlightPreTag"], "<b>");
        assert_eq!(query.highlight_tags(), (Some("<b>"), Some("</b>")));
    }

    #[test]
    fn dataset_query_count_pifs() {
        let query = DatasetReturningQuery::new()
            .with_count_pifs(true)
            .add_query(DatasetQuery::new().add_name(Filter::equal("thermo")));
        let back: DatasetReturningQuery =
            serde_json::from_value(serde_json::to_value(&query).unwrap()).unwrap();
        assert_eq!(back, query);
        assert_eq!(back.count_pifs(), Some(true));
    }

    #[test]
    fn multi_query_preserves_order() {
        let batch: MultiQuery<PifQuery> = ["a", "b"]
            .into_iter()
            .map(|simple| PifQuery::new().add_query(DataQuery::new().with_simple(simple)))
            .collect();
        let json = serde_json::to_value(&batch).unwrap();
        assert_eq!(json["queries"][0]["query"][0]["simple"], "a");
        assert_eq!(json["queries"][1]["query"][0]["simple"], "b");
        assert_eq!(batch.len(), 2);
    }
}
