//! Queries against files attached to datasets.

use serde::{Deserialize, Serialize};

use crate::{field::FieldOperation, vocabulary::Logic, wire};

/// Query against a dataset file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FileQuery {
    /// How this node combines with its siblings.
    #[serde(
        deserialize_with = "wire::lenient",
        skip_serializing_if = "Option::is_none"
    )]
    logic: Option<Logic>,
    /// File identifier.
    #[serde(with = "wire::list", skip_serializing_if = "Vec::is_empty")]
    id: Vec<FieldOperation>,
    /// File name without directories.
    #[serde(with = "wire::list", skip_serializing_if = "Vec::is_empty")]
    name: Vec<FieldOperation>,
    /// Path within the dataset.
    #[serde(with = "wire::list", skip_serializing_if = "Vec::is_empty")]
    path: Vec<FieldOperation>,
    /// File extension without the dot.
    #[serde(with = "wire::list", skip_serializing_if = "Vec::is_empty")]
    extension: Vec<FieldOperation>,
    /// Extracted text content.
    #[serde(with = "wire::list", skip_serializing_if = "Vec::is_empty")]
    content: Vec<FieldOperation>,
    /// Last update time.
    #[serde(with = "wire::list", skip_serializing_if = "Vec::is_empty")]
    updated_at: Vec<FieldOperation>,
}

impl FileQuery {
    /// Creates an empty file query.
    pub fn new() -> Self {
        Self::default()
    }

    logic_accessors!(logic);

    list_accessors! {
        id @ id: FieldOperation => set_id, add_id, push_id, has_id;
        name @ name: FieldOperation => set_name, add_name, push_name, has_name;
        path @ path: FieldOperation => set_path, add_path, push_path, has_path;
        extension @ extension: FieldOperation => set_extension, add_extension, push_extension, has_extension;
        content @ content: FieldOperation => set_content, add_content, push_content, has_content;
        updated_at @ updated_at: FieldOperation => set_updated_at, add_updated_at, push_updated_at, has_updated_at;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::Filter;

    #[test]
    fn content_and_extension() {
        let query = FileQuery::new()
            .add_content(Filter::equal("thermoelectric"))
            .add_extension(Filter::exact("csv"));
        assert!(query.has_content());
        assert!(query.has_extension());
        assert!(!query.has_path());

        let back: FileQuery =
            serde_json::from_str(&serde_json::to_string(&query).unwrap()).unwrap();
        assert_eq!(back, query);
    }
}
