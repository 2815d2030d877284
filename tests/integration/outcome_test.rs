//! Integration tests for the outcome family.

use serde::Serialize;
use serde::de::DeserializeOwned;

use ndb_abstraction::ndb_core::types::LookupItem;
use ndb_abstraction::prelude::*;

use crate::helpers::{Customer, TestExecutor};

fn reencode<T: Serialize + DeserializeOwned>(value: &T) -> T {
    let json = serde_json::to_string(value).expect("serialize");
    serde_json::from_str(&json).expect("deserialize")
}

#[test]
fn test_every_variant_survives_encoding() {
    let simple = SimpleOutcome::fail(ResultStatus::Forbidden, "no access");
    assert_eq!(reencode(&simple), simple);

    let found = TestExecutor::new().get(3);
    assert_eq!(reencode(&found), found);

    let missing = TestExecutor::new().get(99);
    assert_eq!(reencode(&missing), missing);

    let list = ListOutcome::ok_with_total(vec![LookupItem::new(1, "One")], 12);
    assert_eq!(reencode(&list), list);

    let paged = PagedOutcome::ok(vec!["a".to_string(), "b".to_string()], 2, 2, 5);
    assert_eq!(reencode(&paged), paged);

    let failed_page = PagedOutcome::<String>::error("boom");
    assert_eq!(reencode(&failed_page), failed_page);

    let unit = DataOutcome::ok(());
    assert_eq!(reencode(&unit), unit);

    let validation = ValidationOutcome::from_errors(vec![ValidationError::new("Name", "Required")]);
    assert_eq!(reencode(&validation), validation);
}

#[test]
fn test_get_missing_customer() {
    let outcome = TestExecutor::new().get(42);
    assert_eq!(outcome.status(), ResultStatus::NotFound);
    assert_eq!(outcome.message(), "Customer 42 not found");
    assert!(outcome.data().is_none());

    let json = serde_json::to_value(&outcome).expect("serialize");
    assert!(json.get("Data").is_none());
}

#[test]
fn test_failure_factories_share_status_across_variants() {
    fn check<O: Outcome>(expected: ResultStatus, outcome: O) {
        assert!(!outcome.succeeded());
        assert_eq!(outcome.status(), expected);
        assert_eq!(outcome.to_simple().status(), expected);
    }

    check(ResultStatus::BadRequest, DataOutcome::<Customer>::bad_request("x"));
    check(ResultStatus::Unauthorized, ListOutcome::<Customer>::unauthorized("x"));
    check(ResultStatus::NotFound, PagedOutcome::<Customer>::not_found("x"));
    check(ResultStatus::Error, ValidationOutcome::error("x"));
    check(
        ResultStatus::Conflict,
        SimpleOutcome::fail(ResultStatus::Conflict, "x"),
    );
}

#[test]
fn test_contract_error_becomes_outcome() {
    let result: ContractResult<Customer> = Err(ContractError::forbidden("Read-only tenant"));
    let outcome = DataOutcome::from(result);
    assert_eq!(outcome.status(), ResultStatus::Forbidden);

    let config_err = ContractsConfig::from_toml_str("paging = [").unwrap_err();
    assert_eq!(config_err.kind, ErrorKind::Configuration);
    let list = ListOutcome::<Customer>::from_error(&config_err);
    assert_eq!(list.status(), ResultStatus::Error);
    assert_eq!(list.total_count(), 0);
}

#[test]
fn test_list_projection_keeps_total() {
    let customers = TestExecutor::new()
        .list(&ListRequest::new().with_paging(PagingRequest::new(1, 2)))
        .into_items();
    let outcome = ListOutcome::ok_with_total(customers, 5)
        .map_items(|c| LookupItem::new(c.id, c.name));

    assert_eq!(outcome.total_count(), 5);
    assert_eq!(outcome.items()[1], LookupItem::new(2, "Bob"));
}

#[test]
fn test_failed_outcomes_with_payloads_do_not_decode() {
    assert!(serde_json::from_str::<DataOutcome<Customer>>(
        r#"{"Status":"NotFound","Data":{"id":1,"name":"Ann","city":"Oslo"}}"#
    )
    .is_err());
    assert!(serde_json::from_str::<ListOutcome<u32>>(r#"{"Status":"Error","Items":[1]}"#).is_err());
    assert!(
        serde_json::from_str::<PagedOutcome<u32>>(
            r#"{"Status":"Unauthorized","PageInfo":{"Page":1,"PageSize":0,"TotalItems":0}}"#
        )
        .is_err()
    );
}
