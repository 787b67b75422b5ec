//! Serde helpers for the JSON wire conventions.
//!
//! - Absent values are omitted, never written as `null`.
//! - List fields are always written as arrays, and accept either an array, a
//!   single bare element, or `null` on input.
//! - Vocabulary fields soft-fail: an unrecognized name reads as "not set".

use serde::{Deserialize, Deserializer};
use tracing::debug;

use crate::vocabulary::Vocabulary;

/// `#[serde(with = "wire::list")]` for `Vec<T>` fields.
pub mod list {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    /// Either wire form of a list. The array form is tried first, so `[]` is an
    /// empty list even when `T` would accept an empty array as a default value.
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrList<T> {
        /// A JSON array.
        Many(Vec<T>),
        /// A single bare element.
        One(T),
    }

    /// Writes the list as a JSON array, including single-element lists.
    #[allow(clippy::ptr_arg)]
    pub fn serialize<S, T>(items: &Vec<T>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
        T: Serialize,
    {
        serializer.collect_seq(items)
    }

    /// Reads an array, a single element, or `null` (as an empty list).
    pub fn deserialize<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
    where
        D: Deserializer<'de>,
        T: Deserialize<'de>,
    {
        Ok(match Option::<OneOrList<T>>::deserialize(deserializer)? {
            Some(OneOrList::Many(items)) => items,
            Some(OneOrList::One(item)) => vec![item],
            None => Vec::new(),
        })
    }
}

/// Deserializes an optional vocabulary value, mapping unknown names to `None`.
pub fn lenient<'de, D, V>(deserializer: D) -> Result<Option<V>, D::Error>
where
    D: Deserializer<'de>,
    V: Vocabulary,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.and_then(|name| {
        let parsed = V::parse(&name);
        if parsed.is_none() {
            debug!(kind = V::KIND, value = %name, "ignoring unrecognized name");
        }
        parsed
    }))
}

#[cfg(test)]
mod tests {
    use serde::{Deserialize, Serialize};

    use super::*;
    use crate::vocabulary::Logic;

    /// Minimal document exercising both helpers.
    #[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
    #[serde(default)]
    struct Doc {
        /// A list field.
        #[serde(with = "list", skip_serializing_if = "Vec::is_empty")]
        items: Vec<u32>,
        /// A vocabulary field.
        #[serde(deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
        logic: Option<Logic>,
    }

    #[test]
    fn list_accepts_scalar_array_and_null() {
        let scalar: Doc = serde_json::from_str(r#"{"items": 7}"#).unwrap();
        assert_eq!(scalar.items, vec![7]);

        let array: Doc = serde_json::from_str(r#"{"items": [1, 2]}"#).unwrap();
        assert_eq!(array.items, vec![1, 2]);

        let null: Doc = serde_json::from_str(r#"{"items": null}"#).unwrap();
        assert!(null.items.is_empty());
    }

    /// Element type that accepts anything map- or sequence-shaped as its default.
    #[derive(Debug, Default, PartialEq, Deserialize)]
    #[serde(default)]
    struct Entry {
        /// Optional name.
        name: Option<String>,
    }

    /// Document with a list of defaulted structs.
    #[derive(Debug, Default, Deserialize)]
    #[serde(default)]
    struct Entries {
        /// The list under test.
        #[serde(with = "list")]
        entries: Vec<Entry>,
    }

    #[test]
    fn empty_array_of_structs_is_empty() {
        let doc: Entries = serde_json::from_str(r#"{"entries": []}"#).unwrap();
        assert!(doc.entries.is_empty());

        let doc: Entries = serde_json::from_str(r#"{"entries": {"name": "a"}}"#).unwrap();
        assert_eq!(doc.entries.len(), 1);

        let doc: Entries = serde_json::from_str(r#"{"entries": [{}, {"name": "b"}]}"#).unwrap();
        assert_eq!(doc.entries.len(), 2);
        assert_eq!(doc.entries[1].name.as_deref(), Some("b"));
    }

    #[test]
    fn list_writes_single_element_as_array() {
        let doc = Doc {
            items: vec![3],
            logic: None,
        };
        assert_eq!(serde_json::to_string(&doc).unwrap(), r#"{"items":[3]}"#);
    }

    #[test]
    fn lenient_drops_unknown_names() {
        let doc: Doc = serde_json::from_str(r#"{"logic": "sometimes"}"#).unwrap();
        assert_eq!(doc.logic, None);

        let doc: Doc = serde_json::from_str(r#"{"logic": "must"}"#).unwrap();
        assert_eq!(doc.logic, Some(Logic::Must));
    }

    #[test]
    fn empty_document_serializes_to_empty_object() {
        assert_eq!(serde_json::to_string(&Doc::default()).unwrap(), "{}");
    }
}
