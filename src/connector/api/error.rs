use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use super::types::ErrorResponse;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Body failed to deserialize; carries the extractor's status (4xx).
    #[error("Invalid request: {detail}")]
    InvalidRequest { status: StatusCode, detail: String },

    /// Failure that escaped the gateway task.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn invalid_request(status: StatusCode, detail: impl Into<String>) -> Self {
        Self::InvalidRequest {
            status,
            detail: detail.into(),
        }
    }

    pub fn internal(detail: impl Into<String>) -> Self {
        Self::Internal(detail.into())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::InvalidRequest { status, .. } => *status,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let detail = match self {
            Self::InvalidRequest { detail, .. } | Self::Internal(detail) => detail,
        };

        (status, Json(ErrorResponse { detail })).into_response()
    }
}
