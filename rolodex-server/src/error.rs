//! API error responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use rolodex_store::StoreError;
use rolodex_validate::ValidationReport;
use serde::Serialize;
use std::collections::BTreeMap;
use thiserror::Error;

/// Error body shape shared with the HTTP store client.
#[derive(Debug, Serialize)]
struct ErrorBody {
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    errors: Option<BTreeMap<&'static str, String>>,
}

/// Failures a handler or the guard middleware can surface.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Field validation rejected the draft; carries per-field messages.
    #[error("validation failed")]
    Validation(ValidationReport),
}

impl ApiError {
    /// A duplicate-guard rejection with the given message.
    #[must_use]
    pub fn conflict(message: &str) -> Self {
        Self::Store(StoreError::Conflict(message.to_string()))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            Self::Store(StoreError::Conflict(message)) => (
                StatusCode::BAD_REQUEST,
                ErrorBody {
                    message,
                    errors: None,
                },
            ),
            Self::Store(StoreError::NotFound(id)) => (
                StatusCode::NOT_FOUND,
                ErrorBody {
                    message: format!("Customer {id} not found"),
                    errors: None,
                },
            ),
            Self::Store(StoreError::Validation(message)) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                ErrorBody {
                    message,
                    errors: None,
                },
            ),
            Self::Store(error) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorBody {
                    message: error.to_string(),
                    errors: None,
                },
            ),
            Self::Validation(report) => {
                let errors = report
                    .errors()
                    .map(|(field, message)| (field.as_str(), message.to_string()))
                    .collect();
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    ErrorBody {
                        message: "Validation failed".to_string(),
                        errors: Some(errors),
                    },
                )
            }
        };
        (status, Json(body)).into_response()
    }
}
