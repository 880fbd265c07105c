//! Typed failure handling for invoice mutations
//!
//! Two recoverable error kinds exist, and only two:
//!
//! - **validation failure**: field-level, returned to the submitter as a
//!   structured `errors` map so the form can be corrected and resubmitted;
//! - **persistence failure**: any fault from the storage write, logged at
//!   the operation boundary and folded into a generic user-facing message.
//!
//! Both are carried by [`State`], the caller-facing feedback object. The
//! HTTP layer adds one more case of its own ([`ApiError::InvalidInvoiceId`])
//! for malformed route ids, which never reach validation.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use std::fmt;

use crate::core::validation::FieldErrors;

/// Caller-facing feedback for a form mutation.
///
/// On validation failure both `errors` and `message` are set; on a
/// persistence failure only `message` is. A successful delete also answers
/// with a bare message ("Deleted Invoice.").
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct State {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<FieldErrors>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl State {
    /// Feedback carrying only a message (persistence failures, delete
    /// confirmation).
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            errors: None,
            message: Some(message.into()),
        }
    }

    /// Feedback for a failed validation: the per-field messages plus the
    /// operation's top-level message.
    pub fn invalid(errors: FieldErrors, message: impl Into<String>) -> Self {
        Self {
            errors: Some(errors),
            message: Some(message.into()),
        }
    }
}

/// Failure of a mutation operation, by kind.
///
/// `Invalid` means the submitter can fix and resubmit; `Database` means the
/// write faulted and the detail has already been logged.
#[derive(Debug, Clone, PartialEq)]
pub enum ActionFailure {
    Invalid(State),
    Database(State),
}

impl ActionFailure {
    pub fn state(&self) -> &State {
        match self {
            ActionFailure::Invalid(state) => state,
            ActionFailure::Database(state) => state,
        }
    }

    pub fn into_state(self) -> State {
        match self {
            ActionFailure::Invalid(state) => state,
            ActionFailure::Database(state) => state,
        }
    }
}

impl fmt::Display for ActionFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = self.state().message.as_deref().unwrap_or("mutation failed");
        write!(f, "{}", message)
    }
}

impl std::error::Error for ActionFailure {}

/// Error type for the HTTP surface.
///
/// Wraps the two operation failure kinds and adds the one request-level
/// case the router produces itself: an invoice id path segment that does
/// not parse as a UUID.
#[derive(Debug)]
pub enum ApiError {
    /// Form validation failed; body carries the field errors.
    Invalid(State),

    /// The storage write faulted; body carries the generic message.
    Database(State),

    /// The `{id}` path segment is not a valid invoice id.
    InvalidInvoiceId(String),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Invalid(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::InvalidInvoiceId(_) => StatusCode::BAD_REQUEST,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            ApiError::Invalid(_) => "VALIDATION_FAILED",
            ApiError::Database(_) => "DATABASE_ERROR",
            ApiError::InvalidInvoiceId(_) => "INVALID_INVOICE_ID",
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Invalid(state) | ApiError::Database(state) => {
                write!(f, "{}", state.message.as_deref().unwrap_or("mutation failed"))
            }
            ApiError::InvalidInvoiceId(id) => {
                write!(f, "Invalid invoice id: '{}'", id)
            }
        }
    }
}

impl std::error::Error for ApiError {}

impl From<ActionFailure> for ApiError {
    fn from(failure: ActionFailure) -> Self {
        match failure {
            ActionFailure::Invalid(state) => ApiError::Invalid(state),
            ActionFailure::Database(state) => ApiError::Database(state),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match self {
            // The State object IS the response body the form consumes.
            ApiError::Invalid(state) | ApiError::Database(state) => {
                (status, Json(state)).into_response()
            }
            err @ ApiError::InvalidInvoiceId(_) => {
                let body = Json(serde_json::json!({ "error": err.to_string() }));
                (status, body).into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_message_serializes_without_errors_key() {
        let state = State::message("Deleted Invoice.");
        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(json["message"], "Deleted Invoice.");
        assert!(json.get("errors").is_none());
    }

    #[test]
    fn state_invalid_serializes_errors_and_message() {
        let errors = FieldErrors {
            amount: vec!["Please enter an amount greater than $0".to_string()],
            ..Default::default()
        };
        let state = State::invalid(errors, "Missing fields. Failed to create invoice.");
        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(json["message"], "Missing fields. Failed to create invoice.");
        assert_eq!(
            json["errors"]["amount"][0],
            "Please enter an amount greater than $0"
        );
    }

    #[test]
    fn action_failure_display_uses_state_message() {
        let failure = ActionFailure::Database(State::message(
            "Database Error: Failed to create invoice",
        ));
        assert_eq!(failure.to_string(), "Database Error: Failed to create invoice");
    }

    #[test]
    fn api_error_status_codes() {
        let invalid = ApiError::Invalid(State::default());
        assert_eq!(invalid.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(invalid.error_code(), "VALIDATION_FAILED");

        let database = ApiError::Database(State::default());
        assert_eq!(database.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(database.error_code(), "DATABASE_ERROR");

        let bad_id = ApiError::InvalidInvoiceId("abc".to_string());
        assert_eq!(bad_id.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(bad_id.error_code(), "INVALID_INVOICE_ID");
    }

    #[test]
    fn api_error_from_action_failure() {
        let failure = ActionFailure::Invalid(State::default());
        let api: ApiError = failure.into();
        assert!(matches!(api, ApiError::Invalid(_)));
    }

    #[test]
    fn invalid_invoice_id_display_names_the_id() {
        let err = ApiError::InvalidInvoiceId("not-a-uuid".to_string());
        assert!(err.to_string().contains("not-a-uuid"));
    }

    #[test]
    fn invalid_into_response_is_422() {
        let err = ApiError::Invalid(State::message("Missing fields. Failed to update invoice."));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn invalid_invoice_id_into_response_is_400() {
        let err = ApiError::InvalidInvoiceId("xyz".to_string());
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
