//! Field operations: extract a named attribute and filter it.

use serde::{Deserialize, Serialize};

use crate::{
    filter::{Filter, FilterGroup},
    vocabulary::Sort,
    wire,
};

/// Extracts a field (optionally at an index, optionally under an alias) and
/// applies a group of filters to it.
///
/// Extracted values come back on each hit keyed by `extract_as`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FieldOperation {
    /// Alias under which the extracted value is returned.
    #[serde(skip_serializing_if = "Option::is_none")]
    extract_as: Option<String>,
    /// Index of the value to extract when the field repeats.
    #[serde(skip_serializing_if = "Option::is_none")]
    extract_offset: Option<u32>,
    /// Return every matching value instead of one.
    #[serde(skip_serializing_if = "Option::is_none")]
    extract_all: Option<bool>,
    /// Ordering of extracted values.
    #[serde(
        deserialize_with = "wire::lenient",
        skip_serializing_if = "Option::is_none"
    )]
    sort: Option<Sort>,
    /// Filters applied to the field.
    #[serde(rename = "filter", skip_serializing_if = "Option::is_none")]
    filter_group: Option<FilterGroup>,
}

impl FieldOperation {
    /// Creates an operation that extracts under `alias` and applies `filters`.
    pub fn new(alias: impl Into<String>, filters: impl Into<FilterGroup>) -> Self {
        Self {
            extract_as: Some(alias.into()),
            filter_group: Some(filters.into()),
            ..Self::default()
        }
    }

    /// Creates an operation that only extracts the field under `alias`.
    pub fn extract_as(alias: impl Into<String>) -> Self {
        Self {
            extract_as: Some(alias.into()),
            ..Self::default()
        }
    }

    /// Creates an operation that only filters the field.
    pub fn filtered(filters: impl Into<FilterGroup>) -> Self {
        Self {
            filter_group: Some(filters.into()),
            ..Self::default()
        }
    }

    /// Sets the extraction alias.
    #[must_use]
    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.extract_as = Some(alias.into());
        self
    }

    /// Extracts the value at `offset` when the field repeats.
    #[must_use]
    pub fn with_offset(mut self, offset: u32) -> Self {
        self.extract_offset = Some(offset);
        self
    }

    /// Requests every matching value.
    #[must_use]
    pub fn with_extract_all(mut self, extract_all: bool) -> Self {
        self.extract_all = Some(extract_all);
        self
    }

    /// Orders extracted values.
    #[must_use]
    pub fn with_sort(mut self, sort: Sort) -> Self {
        self.sort = Some(sort);
        self
    }

    /// Appends a filter, creating the group on first use.
    #[must_use]
    pub fn add_filter(mut self, filter: Filter) -> Self {
        self.filter_group
            .get_or_insert_with(FilterGroup::new)
            .push_filter(filter);
        self
    }

    /// The extraction alias, if any.
    pub fn alias(&self) -> Option<&str> {
        self.extract_as.as_deref()
    }

    /// The extraction offset, if any.
    pub fn offset(&self) -> Option<u32> {
        self.extract_offset
    }

    /// Whether every matching value is requested.
    pub fn extract_all(&self) -> Option<bool> {
        self.extract_all
    }

    /// The ordering, if any.
    pub fn sort(&self) -> Option<Sort> {
        self.sort
    }

    /// The attached filters, if any.
    pub fn filter_group(&self) -> Option<&FilterGroup> {
        self.filter_group.as_ref()
    }
}

impl From<FilterGroup> for FieldOperation {
    fn from(filters: FilterGroup) -> Self {
        Self::filtered(filters)
    }
}

impl From<Filter> for FieldOperation {
    fn from(filter: Filter) -> Self {
        Self::filtered(filter)
    }
}
