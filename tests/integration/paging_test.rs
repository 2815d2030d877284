//! Integration tests for list requests and paging.

use ndb_abstraction::ndb_core::config::paging::PagingConfig;
use ndb_abstraction::prelude::*;

use crate::helpers::TestExecutor;

#[test]
fn test_second_page_of_filtered_sorted_list() {
    let executor = TestExecutor::new();
    let request = ListRequest::new()
        .filter(FilterRequest::equals("city", "Oslo"))
        .sort(SortRequest::desc("name"))
        .with_paging(PagingRequest::new(2, 2));

    let outcome = executor.list(&request);

    assert!(outcome.succeeded());
    let names: Vec<_> = outcome.items().iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Alice"]);
    assert_eq!(outcome.page_info().total_items(), 3);
    assert_eq!(outcome.page_info().total_pages(), 2);
    assert!(!outcome.page_info().has_next());
}

#[test]
fn test_sorts_apply_in_order() {
    let executor = TestExecutor::new();
    let request = ListRequest::new()
        .sort(SortRequest::asc("city"))
        .sort(SortRequest::desc("name"));

    let outcome = executor.list(&request);

    let ids: Vec<_> = outcome.items().iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![2, 5, 3, 1, 4]);
}

#[test]
fn test_zero_page_size_takes_default() {
    let executor = TestExecutor::new();
    let request = ListRequest::new().with_paging(PagingRequest::new(1, 0));

    let outcome = executor.list(&request);

    assert_eq!(outcome.len(), 5);
    assert_eq!(outcome.page_info().page_size(), 0);
    assert_eq!(outcome.page_info().total_pages(), 0);
}

#[test]
fn test_normalized_request_reports_real_window() {
    let executor = TestExecutor::new();
    let config = PagingConfig {
        default_page_size: 2,
        max_page_size: Some(10),
    };
    let request = ListRequest::new().with_paging(config.normalize(PagingRequest::new(0, 0)));

    let outcome = executor.list(&request);

    assert_eq!(outcome.len(), 2);
    assert_eq!(outcome.page_info(), &PageInfo::create(1, 2, 5));
    assert_eq!(outcome.page_info().total_pages(), 3);
}

#[test]
fn test_search_narrows_results() {
    let executor = TestExecutor::new();
    let request = ListRequest::new().with_search("ar");

    let outcome = executor.list(&request);

    let names: Vec<_> = outcome.items().iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Carol"]);
}

#[test]
fn test_invalid_filter_is_rejected_by_executor() {
    let executor = TestExecutor::new();
    let request = ListRequest::new()
        .filter(FilterRequest::contains("name", ""))
        .sort(SortRequest::asc(" "));

    let validation = executor.validate(&request);
    assert_eq!(validation.status(), ResultStatus::BadRequest);
    assert_eq!(validation.errors().len(), 2);

    let outcome = executor.list(&request);
    assert_eq!(outcome.status(), ResultStatus::BadRequest);
    assert!(outcome.is_empty());
    assert_eq!(outcome.page_info(), &PageInfo::ZEROED);
}

#[test]
fn test_request_decoded_from_json() {
    let executor = TestExecutor::new();
    let request: ListRequest = serde_json::from_str(
        r#"{
            "Filters": [{ "Field": "city", "Value": "O", "Operator": "StartsWith" }],
            "Sorts": [{ "Field": "name" }],
            "Paging": { "Page": 1, "PageSize": 2 }
        }"#,
    )
    .expect("deserialize");

    let outcome = executor.list(&request);

    let names: Vec<_> = outcome.items().iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Alice", "Carol"]);
    assert_eq!(outcome.page_info().total_pages(), 2);
}
