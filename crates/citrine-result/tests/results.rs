//! Page merging and batch decoding against realistic engine responses.

#![allow(clippy::tests_outside_test_module)]

use citrine_result::{
    MultiSearchResult, PifSearchHit, PifSearchResult, ResultError, SearchResult, Status,
};
use serde_json::json;

/// A page of `count` hits with ids prefixed by `prefix`.
fn page(prefix: &str, count: usize, total: Option<u64>) -> PifSearchResult {
    let hits = (0..count)
        .map(|i| PifSearchHit {
            id: format!("{prefix}{i}"),
            ..PifSearchHit::default()
        })
        .collect();
    let result = SearchResult::new(hits);
    match total {
        Some(total) => result.with_total_num_hits(total),
        None => result,
    }
}

#[test]
fn merged_length_is_the_sum_of_pages() {
    for (lhs, rhs) in [(0, 0), (0, 3), (2, 0), (4, 5)] {
        let merged = page("a", lhs, None).add(page("b", rhs, None));
        assert_eq!(merged.len(), lhs + rhs, "pages of {lhs} and {rhs}");
    }
}

#[test]
fn merged_total_follows_the_later_page() {
    let merged = page("a", 1, Some(40)).add(page("b", 1, Some(39)));
    assert_eq!(merged.total_num_hits(), Some(39));

    let merged = page("a", 1, Some(40)).add(page("b", 1, None));
    assert_eq!(merged.total_num_hits(), Some(40));
}

#[test]
fn in_place_merge_matches_add() {
    let mut accumulated = page("a", 2, Some(5));
    accumulated.merge(page("b", 2, Some(5)));
    accumulated.merge(page("c", 1, Some(5)));

    let added = page("a", 2, Some(5))
        .add(page("b", 2, Some(5)))
        .add(page("c", 1, Some(5)));
    assert_eq!(accumulated, added);
    assert_eq!(
        accumulated.hit(5),
        Err(ResultError::HitOutOfRange { index: 5, len: 5 })
    );
}

#[test]
fn batch_with_one_failure() {
    let batch: MultiSearchResult<PifSearchResult> = serde_json::from_str(
        r#"{
            "results": [
                {"status": "SUCCESS", "result": {"totalNumHits": 1, "hits": [{"id": "7/1/3", "score": 0.5}]}},
                {"status": "ERROR"}
            ]
        }"#,
    )
    .unwrap();

    let elements: Vec<_> = batch.iter().collect();
    assert_eq!(elements.len(), 2);

    let hits = elements[0].result().map(PifSearchResult::hits).unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].score, Some(0.5));

    assert_eq!(elements[1].status(), Status::Error);
    assert!(elements[1].result().is_none());
}

#[test]
fn batch_results_convert_individually() {
    let batch: MultiSearchResult<PifSearchResult> = serde_json::from_value(json!({
        "results": [
            {"status": "NOT_EXECUTED"},
            {"status": "SUCCESS", "result": {"hits": []}}
        ]
    }))
    .unwrap();
    let converted: Vec<Result<PifSearchResult, ResultError>> = batch
        .into_iter()
        .map(|element| element.into_result())
        .collect();
    assert!(matches!(
        converted[0],
        Err(ResultError::Failed {
            status: Status::NotExecuted,
            ..
        })
    ));
    assert!(converted[1].as_ref().is_ok_and(SearchResult::is_empty));
}
