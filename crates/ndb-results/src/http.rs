//! Maps outcomes to HTTP responses.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use ndb_core::status::ResultStatus;

use crate::data::DataOutcome;
use crate::list::ListOutcome;
use crate::outcome::{Outcome, SimpleOutcome};
use crate::paged::PagedOutcome;
use crate::validation::ValidationOutcome;

/// HTTP status code for an outcome status.
pub fn status_code(status: ResultStatus) -> StatusCode {
    match status {
        ResultStatus::Success => StatusCode::OK,
        ResultStatus::BadRequest => StatusCode::BAD_REQUEST,
        ResultStatus::Unauthorized => StatusCode::UNAUTHORIZED,
        ResultStatus::Forbidden => StatusCode::FORBIDDEN,
        ResultStatus::NotFound => StatusCode::NOT_FOUND,
        ResultStatus::Conflict => StatusCode::CONFLICT,
        ResultStatus::Error => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn respond<O: Outcome + Serialize>(outcome: O) -> Response {
    if outcome.status() == ResultStatus::Error {
        tracing::error!(reason = %outcome.message(), "Outcome reported an internal error");
    }
    (status_code(outcome.status()), Json(outcome)).into_response()
}

impl IntoResponse for SimpleOutcome {
    fn into_response(self) -> Response {
        respond(self)
    }
}

impl<T: Serialize> IntoResponse for DataOutcome<T> {
    fn into_response(self) -> Response {
        respond(self)
    }
}

impl<T: Serialize> IntoResponse for ListOutcome<T> {
    fn into_response(self) -> Response {
        respond(self)
    }
}

impl<T: Serialize> IntoResponse for PagedOutcome<T> {
    fn into_response(self) -> Response {
        respond(self)
    }
}

impl IntoResponse for ValidationOutcome {
    fn into_response(self) -> Response {
        respond(self)
    }
}
