//! Client behaviour against a scripted transport.

#![allow(clippy::tests_outside_test_module)]

use std::{cell::RefCell, collections::VecDeque};

use citrine_client::{ClientError, PIF_SEARCH_PATH, SearchClient, Transport, TransportError};
use citrine_config::SearchSettings;
use citrine_query::{DataQuery, MultiQuery, PifQuery, ReturningQuery};
use citrine_result::Status;
use serde_json::{Value, json};

/// Transport that replays queued responses and records every request.
#[derive(Default)]
struct Scripted {
    /// Responses in the order they will be returned.
    responses: RefCell<VecDeque<Result<String, TransportError>>>,
    /// Requests as (path, decoded body).
    requests: RefCell<Vec<(String, Value)>>,
}

impl Scripted {
    /// Queues a successful response.
    fn answer(self, body: Value) -> Self {
        self.responses.borrow_mut().push_back(Ok(body.to_string()));
        self
    }

    /// Queues a failure.
    fn fail(self, error: TransportError) -> Self {
        self.responses.borrow_mut().push_back(Err(error));
        self
    }

    /// The `from` offsets of every recorded request.
    fn offsets(&self) -> Vec<Option<u64>> {
        self.requests
            .borrow()
            .iter()
            .map(|(_, body)| body.get("from").and_then(Value::as_u64))
            .collect()
    }
}

impl Transport for Scripted {
    fn post_json(&self, path: &str, body: &str) -> Result<String, TransportError> {
        let decoded = serde_json::from_str(body).unwrap();
        self.requests
            .borrow_mut()
            .push((path.to_string(), decoded));
        self.responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Ok("{}".to_string()))
    }
}

/// A result page with `count` hits numbered from `start`.
fn page(start: usize, count: usize, total: u64) -> Value {
    let hits: Vec<Value> = (start..start + count)
        .map(|i| json!({"id": format!("1/1/{i}"), "score": 1.0}))
        .collect();
    json!({"took": 3, "totalNumHits": total, "hits": hits})
}

/// Settings with the given paging values.
fn settings(page_size: u64, max_hits: u64) -> SearchSettings {
    SearchSettings {
        page_size,
        max_hits,
    }
}

#[test]
fn query_is_posted_as_json() {
    let transport = Scripted::default().answer(page(0, 1, 1));
    let client = SearchClient::new(&transport);
    let query = PifQuery::new()
        .with_size(5)
        .add_query(DataQuery::new().with_simple("PbTe"));

    let result = client.pif_search(&query).unwrap();

    assert_eq!(result.len(), 1);
    let requests = transport.requests.borrow();
    assert_eq!(requests[0].0, PIF_SEARCH_PATH);
    assert_eq!(
        requests[0].1,
        json!({"size": 5, "query": [{"simple": "PbTe"}]})
    );
}

#[test]
fn paging_stops_at_reported_total() {
    let transport = Scripted::default()
        .answer(page(0, 2, 5))
        .answer(page(2, 2, 5))
        .answer(page(4, 1, 5));
    let client = SearchClient::with_settings(&transport, settings(2, 100));

    let result = client.pif_search_pages(&PifQuery::new(), None).unwrap();

    assert_eq!(result.len(), 5);
    assert_eq!(result.took(), Some(9));
    assert_eq!(transport.offsets(), [None, Some(2), Some(4)]);
    assert_eq!(result.hit(4).unwrap().id, "1/1/4");
}

#[test]
fn paging_stops_at_max_hits_and_truncates() {
    let transport = Scripted::default()
        .answer(page(0, 4, 100))
        .answer(page(4, 4, 100));
    let client = SearchClient::with_settings(&transport, settings(4, 1000));

    let result = client
        .pif_search_pages(&PifQuery::new(), Some(6))
        .unwrap();

    assert_eq!(result.len(), 6);
    assert_eq!(result.total_num_hits(), Some(100));
    assert_eq!(transport.requests.borrow().len(), 2);
}

#[test]
fn paging_stops_on_empty_page() {
    let transport = Scripted::default()
        .answer(page(0, 3, 50))
        .answer(page(3, 0, 50));
    let client = SearchClient::new(&transport);

    let query = PifQuery::new().with_size(3).with_from(10);
    let result = client.pif_search_pages(&query, None).unwrap();

    assert_eq!(result.len(), 3);
    assert_eq!(transport.offsets(), [Some(10), Some(13)]);
}

#[test]
fn transport_errors_propagate_with_endpoint() {
    let transport = Scripted::default().fail(TransportError::Status {
        url: "https://citrination.com/api/search/pif_search".to_string(),
        status: 401,
        body: "unauthorized".to_string(),
    });
    let client = SearchClient::new(&transport);

    let err = client.pif_search(&PifQuery::new()).unwrap_err();

    assert!(matches!(
        err,
        ClientError::Transport {
            endpoint: PIF_SEARCH_PATH,
            source: TransportError::Status { status: 401, .. }
        }
    ));
    assert!(err.to_string().contains(PIF_SEARCH_PATH));
}

#[test]
fn multi_search_reports_each_element() {
    let transport = Scripted::default().answer(json!({
        "results": [
            {"status": "SUCCESS", "result": page(0, 1, 1)},
            {"status": "ERROR", "error": "bad query"}
        ]
    }));
    let client = SearchClient::new(&transport);
    let batch: MultiQuery<PifQuery> = (0..2).map(|_| PifQuery::new()).collect();

    let result = client.pif_multi_search(&batch).unwrap();

    let statuses: Vec<Status> = result.iter().map(|e| e.status()).collect();
    assert_eq!(statuses, [Status::Success, Status::Error]);
    assert_eq!(
        transport.requests.borrow()[0].1["queries"]
            .as_array()
            .map(Vec::len),
        Some(2)
    );
}
