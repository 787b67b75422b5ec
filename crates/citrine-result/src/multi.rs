//! Results of batched queries, one independently reported element per query.
//!
//! A failed sub-query is data, not an error: decoding a batch never fails because
//! one of its elements did.

use std::{slice, vec};

use serde::{Deserialize, Deserializer, Serialize, de::DeserializeOwned};
use serde_json::Value;
use tracing::{debug, warn};

use citrine_query::{Vocabulary, wire};

use crate::error::ResultError;

citrine_query::vocabulary! {
    /// Outcome of one sub-query in a batch.
    pub enum Status {
        /// The sub-query ran and its result is usable.
        Success => "SUCCESS",
        /// The sub-query failed.
        Error => "ERROR",
        /// The sub-query was never run.
        NotExecuted => "NOT_EXECUTED",
    }
}

/// The outcome of one sub-query.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MultiSearchResultElement<T> {
    /// The decoded result, present only when it was usable.
    #[serde(skip_serializing_if = "Option::is_none")]
    result: Option<T>,
    /// Reported status.
    status: Status,
    /// Error detail, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl<T> MultiSearchResultElement<T> {
    /// A successful element.
    pub fn success(result: T) -> Self {
        Self {
            result: Some(result),
            status: Status::Success,
            error: None,
        }
    }

    /// A failed element.
    pub fn failure(status: Status, error: Option<String>) -> Self {
        Self {
            result: None,
            status,
            error,
        }
    }

    /// The reported status.
    pub fn status(&self) -> Status {
        self.status
    }

    /// True when the sub-query succeeded.
    pub fn is_success(&self) -> bool {
        self.status == Status::Success
    }

    /// The result, only for successful elements.
    pub fn result(&self) -> Option<&T> {
        if self.is_success() {
            self.result.as_ref()
        } else {
            None
        }
    }

    /// Error detail reported for this element.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Converts into the result, or the reason there is none.
    pub fn into_result(self) -> Result<T, ResultError> {
        match (self.status, self.result) {
            (Status::Success, Some(result)) => Ok(result),
            (Status::Success, None) => Err(ResultError::MissingResult),
            (status, _) => Err(ResultError::Failed {
                status,
                message: self.error,
            }),
        }
    }
}

/// Element as sent by the engine, before the result payload is decoded.
#[derive(Default, Deserialize)]
#[serde(default)]
struct RawElement {
    /// Undecoded result payload.
    result: Option<Value>,
    /// Status name.
    status: Option<String>,
    /// Error detail, as a string or an object.
    #[serde(alias = "exception")]
    error: Option<Value>,
}

impl<'de, T: DeserializeOwned> Deserialize<'de> for MultiSearchResultElement<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Value::deserialize(deserializer).map(element_from_value)
    }
}

/// Decodes one batch element. Anything unusable becomes an `ERROR` element.
fn element_from_value<T: DeserializeOwned>(value: Value) -> MultiSearchResultElement<T> {
    match RawElement::deserialize(value) {
        Ok(raw) => element_from_raw(raw),
        Err(err) => {
            warn!(error = %err, "malformed sub-query element");
            MultiSearchResultElement::failure(
                Status::Error,
                Some(format!("malformed element: {err}")),
            )
        }
    }
}

/// Resolves the status of a well-formed element and decodes its payload.
fn element_from_raw<T: DeserializeOwned>(raw: RawElement) -> MultiSearchResultElement<T> {
    let payload = raw.result.filter(|value| !value.is_null());
    let mut error = raw.error.and_then(|value| match value {
        Value::Null => None,
        Value::String(message) => Some(message),
        other => Some(other.to_string()),
    });

    let mut status = match raw.status {
        Some(name) => Status::parse(&name).unwrap_or_else(|| {
            debug!(status = %name, "unrecognized status, treating as error");
            Status::Error
        }),
        None if payload.is_some() => Status::Success,
        None => Status::NotExecuted,
    };

    let result = match payload.map(serde_json::from_value::<T>) {
        Some(Ok(result)) => Some(result),
        Some(Err(err)) => {
            if status == Status::Success {
                warn!(error = %err, "malformed sub-query result");
                status = Status::Error;
                error = Some(format!("malformed result: {err}"));
            }
            None
        }
        None => None,
    };

    MultiSearchResultElement {
        result,
        status,
        error,
    }
}

/// Reads the `results` list one JSON value at a time, so a bad entry only
/// affects its own element.
fn decode_elements<'de, D, T>(
    deserializer: D,
) -> Result<Vec<MultiSearchResultElement<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let values: Vec<Value> = wire::list::deserialize(deserializer)?;
    Ok(values.into_iter().map(element_from_value).collect())
}

/// The outcomes of a batch, in submission order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    default,
    bound(serialize = "T: Serialize", deserialize = "T: DeserializeOwned")
)]
pub struct MultiSearchResult<T> {
    /// Total engine execution time in milliseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    took: Option<u64>,
    /// One element per submitted query.
    #[serde(
        serialize_with = "wire::list::serialize",
        deserialize_with = "decode_elements"
    )]
    results: Vec<MultiSearchResultElement<T>>,
}

impl<T> Default for MultiSearchResult<T> {
    fn default() -> Self {
        Self {
            took: None,
            results: Vec::new(),
        }
    }
}

impl<T> MultiSearchResult<T> {
    /// Builds a batch result from its elements.
    pub fn new(results: Vec<MultiSearchResultElement<T>>) -> Self {
        Self {
            took: None,
            results,
        }
    }

    /// Total engine execution time in milliseconds.
    pub fn took(&self) -> Option<u64> {
        self.took
    }

    /// Elements in submission order.
    pub fn results(&self) -> &[MultiSearchResultElement<T>] {
        &self.results
    }

    /// Walks the elements in submission order.
    pub fn iter(&self) -> slice::Iter<'_, MultiSearchResultElement<T>> {
        self.results.iter()
    }

    /// Results of the successful elements, in submission order.
    pub fn successes(&self) -> impl Iterator<Item = &T> {
        self.results.iter().filter_map(MultiSearchResultElement::result)
    }

    /// Elements that did not succeed, with their positions.
    pub fn failures(&self) -> impl Iterator<Item = (usize, &MultiSearchResultElement<T>)> {
        self.results
            .iter()
            .enumerate()
            .filter(|(_, element)| !element.is_success())
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// True when the batch holds no elements.
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

impl<'a, T> IntoIterator for &'a MultiSearchResult<T> {
    type Item = &'a MultiSearchResultElement<T>;
    type IntoIter = slice::Iter<'a, MultiSearchResultElement<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for MultiSearchResult<T> {
    type Item = MultiSearchResultElement<T>;
    type IntoIter = vec::IntoIter<MultiSearchResultElement<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.results.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::envelope::PifSearchResult;

    #[test]
    fn partial_failure_is_data() {
        let batch: MultiSearchResult<PifSearchResult> = serde_json::from_value(json!({
            "took": 20,
            "results": [
                {"status": "SUCCESS", "result": {"hits": [{"id": "1/1/1", "score": 0.5}]}},
                {"status": "ERROR", "error": "query timed out"}
            ]
        }))
        .unwrap();

        assert_eq!(batch.iter().count(), 2);
        let ok = &batch.results()[0];
        let failed = &batch.results()[1];
        assert_eq!(ok.result().map(PifSearchResult::len), Some(1));
        assert_eq!(ok.result().unwrap().hit(0).unwrap().score, Some(0.5));
        assert_eq!(failed.status(), Status::Error);
        assert!(failed.result().is_none());
        assert_eq!(failed.error(), Some("query timed out"));
        assert_eq!(batch.successes().count(), 1);
        assert_eq!(batch.failures().map(|(i, _)| i).collect::<Vec<_>>(), [1]);
    }

    #[test]
    fn non_object_entries_fail_alone() {
        let batch: MultiSearchResult<PifSearchResult> = serde_json::from_value(json!({
            "results": [
                {"status": "SUCCESS", "result": {"hits": [{"id": "a"}]}},
                null,
                "oops"
            ]
        }))
        .unwrap();

        assert_eq!(batch.len(), 3);
        let first = batch.results()[0].result().unwrap();
        assert_eq!(first.hits()[0].id, "a");
        for element in &batch.results()[1..] {
            assert_eq!(element.status(), Status::Error);
            assert!(element.error().is_some_and(|e| e.starts_with("malformed element")));
        }
        assert_eq!(batch.failures().map(|(index, _)| index).collect::<Vec<_>>(), [1, 2]);
    }

    #[test]
    fn empty_results_is_empty_batch() {
        let batch: MultiSearchResult<PifSearchResult> =
            serde_json::from_value(json!({"took": 1, "results": []})).unwrap();
        assert!(batch.is_empty());
    }

    #[test]
    fn malformed_payload_downgrades_element() {
        let batch: MultiSearchResult<PifSearchResult> = serde_json::from_value(json!({
            "results": [
                {"status": "SUCCESS", "result": {"hits": "not a hit"}},
                {"status": "SUCCESS", "result": {"hits": []}}
            ]
        }))
        .unwrap();
        let first = &batch.results()[0];
        assert_eq!(first.status(), Status::Error);
        assert!(first.error().unwrap().starts_with("malformed result"));
        assert!(batch.results()[1].is_success());
    }

    #[test]
    fn status_defaults() {
        let batch: MultiSearchResult<PifSearchResult> = serde_json::from_value(json!({
            "results": [
                {"result": {"took": 1}},
                {},
                {"status": "exploded"},
                {"status": "not_executed"}
            ]
        }))
        .unwrap();
        let statuses: Vec<Status> = batch.iter().map(MultiSearchResultElement::status).collect();
        assert_eq!(
            statuses,
            [
                Status::Success,
                Status::NotExecuted,
                Status::Error,
                Status::NotExecuted
            ]
        );
    }

    #[test]
    fn error_objects_are_kept_as_text() {
        let element: MultiSearchResultElement<PifSearchResult> = serde_json::from_value(json!({
            "status": "ERROR",
            "exception": {"message": "bad field"}
        }))
        .unwrap();
        assert_eq!(element.error(), Some(r#"{"message":"bad field"}"#));
    }

    #[test]
    fn into_result_reports_status() {
        let failed: MultiSearchResultElement<u32> =
            MultiSearchResultElement::failure(Status::NotExecuted, None);
        assert_eq!(
            failed.into_result(),
            Err(ResultError::Failed {
                status: Status::NotExecuted,
                message: None
            })
        );
        assert_eq!(MultiSearchResultElement::success(3_u32).into_result(), Ok(3));
    }

    #[test]
    fn serializes_status_names() {
        let batch = MultiSearchResult::new(vec![
            MultiSearchResultElement::success(1_u32),
            MultiSearchResultElement::failure(Status::Error, Some("boom".to_string())),
        ]);
        assert_eq!(
            serde_json::to_value(&batch).unwrap(),
            json!({"results": [
                {"result": 1, "status": "SUCCESS"},
                {"status": "ERROR", "error": "boom"}
            ]})
        );
    }
}
