//! Per-domain search hits.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize, de::DeserializeOwned};
use serde_json::Value;
use tracing::warn;

use citrine_query::wire;

/// A matched PIF record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PifSearchHit {
    /// Record identifier.
    pub id: String,
    /// Identifier of the containing dataset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dataset: Option<String>,
    /// Version of the containing dataset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dataset_version: Option<u64>,
    /// Relevance score.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
    /// Last update time as reported by the engine.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    /// The full record, when it was requested.
    #[serde(
        deserialize_with = "embedded_record",
        skip_serializing_if = "Option::is_none"
    )]
    pub system: Option<Value>,
    /// Extracted values keyed by alias.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub extracted: BTreeMap<String, Value>,
    /// Record path of each extracted value, keyed by alias.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub extracted_path: BTreeMap<String, String>,
}

impl PifSearchHit {
    /// The value extracted under `alias`.
    pub fn extracted(&self, alias: &str) -> Option<&Value> {
        self.extracted.get(alias)
    }

    /// Decodes the embedded record into a caller-supplied type.
    ///
    /// Returns `None` when no record is present or it does not match `T`.
    pub fn system_as<T: DeserializeOwned>(&self) -> Option<T> {
        let system = self.system.as_ref()?;
        T::deserialize(system)
            .map_err(|err| warn!(id = %self.id, error = %err, "embedded record does not match"))
            .ok()
    }
}

/// Reads the embedded record, which the engine sends either as an object or as a
/// JSON-encoded string.
fn embedded_record<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(encoded)) => match serde_json::from_str(&encoded) {
            Ok(record) => Ok(Some(record)),
            Err(err) => {
                warn!(error = %err, "dropping unparseable embedded record");
                Ok(None)
            }
        },
        Some(Value::Null) | None => Ok(None),
        Some(record) => Ok(Some(record)),
    }
}

/// A matched dataset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DatasetSearchHit {
    /// Dataset identifier.
    pub id: String,
    /// Relevance score.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
    /// Whether the dataset is featured.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_featured: Option<bool>,
    /// Dataset name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Dataset description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Owner's display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    /// Owner's email address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Number of records in the dataset matching the query.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_pifs: Option<u64>,
    /// Last update time as reported by the engine.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// A matched dataset file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FileSearchHit {
    /// File identifier.
    pub id: String,
    /// Identifier of the containing dataset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dataset_id: Option<String>,
    /// Identifier of the dataset version the file belongs to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dataset_version_id: Option<String>,
    /// File name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Path within the dataset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// File extension.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<String>,
    /// Relevance score.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
    /// Content snippets with matches wrapped in the highlight tags.
    #[serde(with = "wire::list", skip_serializing_if = "Vec::is_empty")]
    pub highlights: Vec<String>,
    /// Last update time as reported by the engine.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}
