//! Shared test helpers for integration tests.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use ndb_abstraction::prelude::*;

/// Row type served by the test executor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub id: u32,
    pub name: String,
    pub city: String,
}

/// Fixed data set of five customers.
pub fn customers() -> Vec<Customer> {
    [
        (1, "Alice", "Oslo"),
        (2, "Bob", "Bergen"),
        (3, "Carol", "Oslo"),
        (4, "Dave", "Trondheim"),
        (5, "Eve", "Oslo"),
    ]
    .into_iter()
    .map(|(id, name, city)| Customer {
        id,
        name: name.to_string(),
        city: city.to_string(),
    })
    .collect()
}

fn field<'a>(customer: &'a Customer, name: &str) -> Option<&'a str> {
    match name {
        "name" => Some(&customer.name),
        "city" => Some(&customer.city),
        _ => None,
    }
}

fn matches(customer: &Customer, filter: &FilterRequest) -> bool {
    let Some(value) = field(customer, &filter.field) else {
        return false;
    };
    match filter.operator {
        FilterOperator::Equals => value == filter.value,
        FilterOperator::Contains => value.contains(&filter.value),
        FilterOperator::StartsWith => value.starts_with(&filter.value),
        FilterOperator::EndsWith => value.ends_with(&filter.value),
        FilterOperator::GreaterThan => value > filter.value.as_str(),
        FilterOperator::LessThan => value < filter.value.as_str(),
    }
}

/// Minimal in-memory query executor standing in for a real data source.
///
/// Rejects requests with invalid filters or sorts, applies filters and
/// sorts in order, then pages with `skip`/`take`.
pub struct TestExecutor {
    rows: Vec<Customer>,
}

impl TestExecutor {
    pub fn new() -> Self {
        Self { rows: customers() }
    }

    pub fn validate(&self, request: &ListRequest) -> ValidationOutcome {
        ValidationOutcome::from_errors(request.validation_errors())
    }

    pub fn list(&self, request: &ListRequest) -> PagedOutcome<Customer> {
        let validation = self.validate(request);
        if !validation.succeeded() {
            return PagedOutcome::bad_request(validation.message());
        }

        let mut rows: Vec<Customer> = self
            .rows
            .iter()
            .filter(|c| request.filters.iter().all(|f| matches(c, f)))
            .filter(|c| match request.search.as_deref() {
                Some(term) if request.has_search() => c.name.contains(term.trim()),
                _ => true,
            })
            .cloned()
            .collect();

        rows.sort_by(|a, b| {
            request.sorts.iter().fold(Ordering::Equal, |acc, sort| {
                acc.then_with(|| {
                    let ordering = field(a, &sort.field).cmp(&field(b, &sort.field));
                    match sort.direction {
                        SortDirection::Asc => ordering,
                        SortDirection::Desc => ordering.reverse(),
                    }
                })
            })
        });

        let total = rows.len() as i64;
        let page: Vec<Customer> = rows
            .into_iter()
            .skip(request.paging.skip() as usize)
            .take(request.paging.take() as usize)
            .collect();

        PagedOutcome::from_request(page, &request.paging, total)
    }

    pub fn get(&self, id: u32) -> DataOutcome<Customer> {
        match self.rows.iter().find(|c| c.id == id) {
            Some(customer) => DataOutcome::ok(customer.clone()),
            None => DataOutcome::not_found(format!("Customer {id} not found")),
        }
    }
}
