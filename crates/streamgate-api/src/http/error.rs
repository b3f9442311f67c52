//! Application error type mapping to HTTP status codes.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use streamgate_types::error::GatewayError;

/// Application-level error that maps to HTTP responses.
///
/// Only errors raised before streaming begins reach this type; once the
/// response body has started, failures terminate the stream instead.
#[derive(Debug)]
pub enum AppError {
    /// Malformed request payload.
    Validation(String),
    /// Gateway failure in the resolving phase.
    Gateway(GatewayError),
}

impl From<GatewayError> for AppError {
    fn from(e: GatewayError) -> Self {
        AppError::Gateway(e)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::Gateway(GatewayError::Configuration(msg)) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "CONFIGURATION_ERROR",
                msg.clone(),
            ),
            AppError::Gateway(err @ GatewayError::Provider { .. }) => {
                (StatusCode::BAD_GATEWAY, "PROVIDER_ERROR", err.to_string())
            }
            AppError::Gateway(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                err.to_string(),
            ),
        };

        let body = json!({
            "errors": [{
                "code": code,
                "message": message,
            }]
        });

        (
            status,
            [(axum::http::header::CONTENT_TYPE, "application/json")],
            body.to_string(),
        )
            .into_response()
    }
}
