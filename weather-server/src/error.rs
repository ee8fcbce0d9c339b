//! Mapping of core errors onto HTTP responses.

use axum::{
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::{debug, warn};
use weather_core::{ErrorResponse, ProviderError, ValidationError};

/// Every way a `/weather` request can fail.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Provider(#[from] ProviderError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Provider(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::Validation(e) => debug!(error = %e, "Rejected weather request"),
            ApiError::Provider(e) => warn!(
                error = %e,
                timeout = e.is_timeout(),
                "Weather provider call failed"
            ),
        }

        error_response(self.status(), &self.to_string())
    }
}

/// Write `{"Message": ...}` with `status`. If the JSON body cannot be built,
/// the bare message is sent as plain text with the same status.
pub fn error_response(status: StatusCode, message: &str) -> Response {
    match serde_json::to_vec(&ErrorResponse::new(message)) {
        Ok(body) => {
            (status, [(header::CONTENT_TYPE, "application/json")], body).into_response()
        }
        Err(e) => {
            warn!(error = %e, "Failed to encode error response, falling back to plain text");
            (
                status,
                [(header::CONTENT_TYPE, "text/plain")],
                message.to_owned(),
            )
                .into_response()
        }
    }
}
