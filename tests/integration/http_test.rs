//! Integration tests for mapping outcomes onto HTTP responses.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::Value;

use ndb_abstraction::ndb_results::http::status_code;
use ndb_abstraction::prelude::*;

use crate::helpers::TestExecutor;

async fn read_json(response: axum::response::Response) -> (StatusCode, Value) {
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    (status, serde_json::from_slice(&bytes).expect("json body"))
}

#[tokio::test]
async fn test_paged_list_response() {
    let request = ListRequest::new().with_paging(PagingRequest::new(2, 2));
    let outcome = TestExecutor::new().list(&request);

    let (status, body) = read_json(outcome.into_response()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["Status"], "Success");
    assert_eq!(body["Items"].as_array().map(Vec::len), Some(2));
    assert_eq!(
        body["PageInfo"],
        serde_json::json!({ "Page": 2, "PageSize": 2, "TotalItems": 5, "TotalPages": 3 })
    );
}

#[tokio::test]
async fn test_missing_entity_response() {
    let outcome = TestExecutor::new().get(77);

    let (status, body) = read_json(outcome.into_response()).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["Message"], "Customer 77 not found");
    assert!(body.get("Data").is_none());
}

#[test]
fn test_every_status_has_a_code() {
    for status in ResultStatus::ALL {
        let code = status_code(status);
        assert_eq!(code.is_success(), status.is_success(), "{status}");
    }
}
