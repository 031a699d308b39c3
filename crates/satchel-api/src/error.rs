//! API error handling
//!
//! Every failure path is converted to the JSON envelope `{error, raw?}`;
//! nothing propagates as a non-JSON response.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use satchel_core::RelayError;
use serde::Serialize;
use serde_json::Value;

/// Wire-format error envelope
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Human-readable message
    pub error: String,

    /// Raw provider payload, kept for diagnostics on upstream failures
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw: Option<Value>,
}

/// Application error type
#[derive(Debug)]
pub enum AppError {
    /// Inbound method was neither POST nor OPTIONS
    MethodNotAllowed,

    /// Body had no truthy `question` field
    MissingQuestion,

    /// The completion provider answered with a non-success status
    Provider { message: String, raw: Value },

    /// Malformed body, transport failure, or any other unexpected fault
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::MethodNotAllowed => (
                StatusCode::METHOD_NOT_ALLOWED,
                ErrorBody {
                    error: "Use POST".to_string(),
                    raw: None,
                },
            ),
            AppError::MissingQuestion => (
                StatusCode::BAD_REQUEST,
                ErrorBody {
                    error: "Missing question".to_string(),
                    raw: None,
                },
            ),
            AppError::Provider { message, raw } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorBody {
                    error: message,
                    raw: Some(raw),
                },
            ),
            AppError::Internal(message) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorBody {
                    error: message,
                    raw: None,
                },
            ),
        };

        (status, Json(body)).into_response()
    }
}

impl From<RelayError> for AppError {
    fn from(err: RelayError) -> Self {
        match err {
            RelayError::Provider { message, raw } => AppError::Provider { message, raw },
            other => AppError::Internal(other.to_string()),
        }
    }
}
