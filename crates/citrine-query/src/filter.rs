//! Predicate nodes applied to extracted field values.
//!
//! A [`Filter`] with nested children is a grouping combined by its own logic; a
//! filter without children is a leaf predicate. Bounds are carried as strings and
//! never interpreted client-side, so `min > max` is accepted and left to the engine.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{vocabulary::Logic, wire};

/// A leaf or composite predicate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Filter {
    /// Value to match. Fuzzy unless `exact` is set.
    #[serde(skip_serializing_if = "Option::is_none")]
    equal: Option<String>,
    /// Inclusive lower bound.
    #[serde(skip_serializing_if = "Option::is_none")]
    min: Option<String>,
    /// Inclusive upper bound.
    #[serde(skip_serializing_if = "Option::is_none")]
    max: Option<String>,
    /// Literal rather than folded matching of `equal`.
    #[serde(skip_serializing_if = "Option::is_none")]
    exact: Option<bool>,
    /// Matches on field presence (or absence when false).
    #[serde(skip_serializing_if = "Option::is_none")]
    exists: Option<bool>,
    /// How this node combines with its siblings.
    #[serde(
        deserialize_with = "wire::lenient",
        skip_serializing_if = "Option::is_none"
    )]
    logic: Option<Logic>,
    /// Nested predicates combined under `logic`.
    #[serde(with = "wire::list", skip_serializing_if = "Vec::is_empty")]
    filter: Vec<Self>,
}

impl Filter {
    /// Creates an empty filter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Matches values equal to `value` (case- and accent-insensitive).
    pub fn equal(value: impl Into<String>) -> Self {
        Self {
            equal: Some(value.into()),
            ..Self::default()
        }
    }

    /// Matches values equal to `value` literally.
    pub fn exact(value: impl Into<String>) -> Self {
        Self::equal(value).with_exact(true)
    }

    /// Matches values within the inclusive range `[min, max]`.
    pub fn range(min: impl Into<String>, max: impl Into<String>) -> Self {
        Self {
            min: Some(min.into()),
            max: Some(max.into()),
            ..Self::default()
        }
    }

    /// Matches values greater than or equal to `min`.
    pub fn min(min: impl Into<String>) -> Self {
        Self {
            min: Some(min.into()),
            ..Self::default()
        }
    }

    /// Matches values less than or equal to `max`.
    pub fn max(max: impl Into<String>) -> Self {
        Self {
            max: Some(max.into()),
            ..Self::default()
        }
    }

    /// Matches on presence of the field.
    pub fn exists(exists: bool) -> Self {
        Self {
            exists: Some(exists),
            ..Self::default()
        }
    }

    /// Groups `children` under `logic`.
    pub fn group(logic: Logic, children: Vec<Self>) -> Self {
        Self {
            logic: Some(logic),
            filter: children,
            ..Self::default()
        }
    }

    logic_accessors!(logic);

    /// Sets literal matching.
    #[must_use]
    pub fn with_exact(mut self, exact: bool) -> Self {
        self.exact = Some(exact);
        self
    }

    /// Sets the value to match.
    #[must_use]
    pub fn with_equal(mut self, value: impl Into<String>) -> Self {
        self.equal = Some(value.into());
        self
    }

    /// Sets the inclusive lower bound.
    #[must_use]
    pub fn with_min(mut self, min: impl Into<String>) -> Self {
        self.min = Some(min.into());
        self
    }

    /// Sets the inclusive upper bound.
    #[must_use]
    pub fn with_max(mut self, max: impl Into<String>) -> Self {
        self.max = Some(max.into());
        self
    }

    list_accessors! {
        filters @ filter: Self => set_filters, add_filter, push_filter, has_filters;
    }

    /// The value to match, if any.
    pub fn equal_value(&self) -> Option<&str> {
        self.equal.as_deref()
    }

    /// The lower bound, if any.
    pub fn min_value(&self) -> Option<&str> {
        self.min.as_deref()
    }

    /// The upper bound, if any.
    pub fn max_value(&self) -> Option<&str> {
        self.max.as_deref()
    }

    /// The presence constraint, if any.
    pub fn exists_value(&self) -> Option<bool> {
        self.exists
    }

    /// Whether `equal` is matched literally. Absent reads as false.
    pub fn is_exact(&self) -> bool {
        self.exact.unwrap_or(false)
    }

    /// True when this filter has no nested children.
    pub fn is_leaf(&self) -> bool {
        self.filter.is_empty()
    }
}

/// An ordered list of filters with no logic of its own.
///
/// Written as a bare JSON array; a single filter object is accepted on input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterGroup {
    /// Filters in insertion order.
    filters: Vec<Filter>,
}

impl FilterGroup {
    /// Creates an empty group.
    pub fn new() -> Self {
        Self::default()
    }

    list_accessors! {
        filters @ filters: Filter => set_filters, add_filter, push_filter, has_filters;
    }

    /// Number of filters in the group.
    pub fn len(&self) -> usize {
        self.filters.len()
    }

    /// True when the group holds no filters.
    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }
}

impl From<Filter> for FilterGroup {
    fn from(filter: Filter) -> Self {
        Self {
            filters: vec![filter],
        }
    }
}

impl From<Vec<Filter>> for FilterGroup {
    fn from(filters: Vec<Filter>) -> Self {
        Self { filters }
    }
}

impl FromIterator<Filter> for FilterGroup {
    fn from_iter<I: IntoIterator<Item = Filter>>(iter: I) -> Self {
        Self {
            filters: iter.into_iter().collect(),
        }
    }
}

impl Serialize for FilterGroup {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        wire::list::serialize(&self.filters, serializer)
    }
}

impl<'de> Deserialize<'de> for FilterGroup {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        wire::list::deserialize(deserializer).map(|filters| Self { filters })
    }
}
