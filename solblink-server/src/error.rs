//! Error types for the action server.

use axum::Json;
use axum::extract::rejection::QueryRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use solblink::action::ActionErrorBody;
use solblink::params::InvalidParameterError;
use solblink_svm::TransferError;

/// Errors returned by the action endpoints.
///
/// Every variant is reported to the client as `400 Bad Request` with a
/// `{"error": "..."}` body.
#[derive(Debug, thiserror::Error)]
pub enum ActionServerError {
    /// The query string could not be decoded.
    #[error("invalid query string: {0}")]
    InvalidQuery(#[from] QueryRejection),

    /// A query parameter failed validation.
    #[error(transparent)]
    InvalidParameter(#[from] InvalidParameterError),

    /// JSON deserialization of the request body failed.
    #[error("invalid request body: {0}")]
    InvalidBody(#[from] serde_json::Error),

    /// The transfer transaction could not be built.
    #[error(transparent)]
    Transfer(#[from] TransferError),
}

impl IntoResponse for ActionServerError {
    fn into_response(self) -> Response {
        match &self {
            Self::Transfer(TransferError::Chain(e)) => {
                tracing::error!(error = %e, "Chain request failed");
            }
            _ => tracing::warn!(error = %self, "Rejected action request"),
        }
        let body = ActionErrorBody {
            error: self.to_string(),
        };
        (StatusCode::BAD_REQUEST, Json(body)).into_response()
    }
}
