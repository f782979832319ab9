//! JSON error body shared by every endpoint.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::domain::foundation::{DomainError, ErrorCode, ProviderId, ValidationError};

/// Error response body.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code: code.to_string(),
            message: message.into(),
            details: None,
        }
    }

    /// 404 body for a provider id that parsed but is not listed.
    pub fn provider_not_found(id: ProviderId) -> Self {
        Self::new(
            ErrorCode::ProviderNotFound,
            format!("Provider not found: {}", id),
        )
    }

    /// Attaches the offending form field.
    pub fn with_field(mut self, field: &str) -> Self {
        self.details = Some(serde_json::json!({ "field": field }));
        self
    }

    pub fn into_response_with(self, status: StatusCode) -> Response {
        (status, Json(self)).into_response()
    }
}

/// Maps a failed provider read onto a 500. The port's code and details
/// are logged, never returned.
pub fn domain_error_response(error: DomainError) -> Response {
    tracing::error!(
        code = %error.code,
        error = %error.message,
        details = ?error.details,
        "Provider read failed"
    );
    ErrorResponse::new(ErrorCode::InternalError, "Provider listing is unavailable")
        .into_response_with(StatusCode::INTERNAL_SERVER_ERROR)
}

/// 400 for a provider id that is not a positive integer.
pub fn invalid_provider_id(raw: &str, error: &ValidationError) -> Response {
    ErrorResponse::new(error.code(), format!("Invalid provider ID: {}", raw))
        .with_field(error.field())
        .into_response_with(StatusCode::BAD_REQUEST)
}
