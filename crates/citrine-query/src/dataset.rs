//! Queries against dataset metadata.

use serde::{Deserialize, Serialize};

use crate::{field::FieldOperation, vocabulary::Logic, wire};

/// Query against the dataset a record belongs to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DatasetQuery {
    /// How this node combines with its siblings.
    #[serde(
        deserialize_with = "wire::lenient",
        skip_serializing_if = "Option::is_none"
    )]
    logic: Option<Logic>,
    /// Dataset identifier.
    #[serde(with = "wire::list", skip_serializing_if = "Vec::is_empty")]
    id: Vec<FieldOperation>,
    /// Whether the dataset is featured.
    #[serde(with = "wire::list", skip_serializing_if = "Vec::is_empty")]
    is_featured: Vec<FieldOperation>,
    /// Dataset name.
    #[serde(with = "wire::list", skip_serializing_if = "Vec::is_empty")]
    name: Vec<FieldOperation>,
    /// Dataset description.
    #[serde(with = "wire::list", skip_serializing_if = "Vec::is_empty")]
    description: Vec<FieldOperation>,
    /// Owner's display name.
    #[serde(with = "wire::list", skip_serializing_if = "Vec::is_empty")]
    owner: Vec<FieldOperation>,
    /// Owner's email address.
    #[serde(with = "wire::list", skip_serializing_if = "Vec::is_empty")]
    email: Vec<FieldOperation>,
    /// Last update time, as an engine-understood date string.
    #[serde(with = "wire::list", skip_serializing_if = "Vec::is_empty")]
    updated_at: Vec<FieldOperation>,
}

impl DatasetQuery {
    /// Creates an empty dataset query.
    pub fn new() -> Self {
        Self::default()
    }

    logic_accessors!(logic);

    list_accessors! {
        id @ id: FieldOperation => set_id, add_id, push_id, has_id;
        is_featured @ is_featured: FieldOperation => set_is_featured, add_is_featured, push_is_featured, has_is_featured;
        name @ name: FieldOperation => set_name, add_name, push_name, has_name;
        description @ description: FieldOperation => set_description, add_description, push_description, has_description;
        owner @ owner: FieldOperation => set_owner, add_owner, push_owner, has_owner;
        email @ email: FieldOperation => set_email, add_email, push_email, has_email;
        updated_at @ updated_at: FieldOperation => set_updated_at, add_updated_at, push_updated_at, has_updated_at;
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::filter::Filter;

    #[test]
    fn dataset_id_filter() {
        let query = DatasetQuery::new().add_id(Filter::equal("1160"));
        assert_eq!(
            serde_json::to_value(&query).unwrap(),
            json!({"id": [{"filter": [{"equal": "1160"}]}]})
        );
    }

    #[test]
    fn featured_and_updated_fields_use_camel_case() {
        let query = DatasetQuery::new()
            .add_is_featured(Filter::equal("true"))
            .add_updated_at(Filter::min("2017-01-01"));
        let json = serde_json::to_value(&query).unwrap();
        assert!(json.get("isFeatured").is_some());
        assert!(json.get("updatedAt").is_some());
    }
}
