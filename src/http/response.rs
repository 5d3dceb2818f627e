//! Response shaping.
//!
//! # Responsibilities
//! - Map movie errors to HTTP status codes
//! - Guarantee every error body is `{"error": "..."}`
//! - Add security response headers
//!
//! # Design Decisions
//! - Errors are logged once, here, at the point they become responses
//! - 4xx log at warn, 5xx at error

use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use tower_http::set_header::SetResponseHeaderLayer;

use crate::movies::MovieError;

/// JSON error envelope.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Build a JSON error response.
pub fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorBody {
            error: message.into(),
        }),
    )
        .into_response()
}

impl MovieError {
    /// Status code sent for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            MovieError::Unauthorized => StatusCode::UNAUTHORIZED,
            MovieError::InvalidRating | MovieError::BadRequest(_) => StatusCode::BAD_REQUEST,
            MovieError::NotFound => StatusCode::NOT_FOUND,
            MovieError::UpstreamUnavailable
            | MovieError::ListUnavailable
            | MovieError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for MovieError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(status = %status, error = %self, "Request failed");
        } else {
            tracing::warn!(status = %status, error = %self, "Request rejected");
        }
        error_response(status, self.to_string())
    }
}

/// Layer adding `x-content-type-options: nosniff` to every response.
pub fn nosniff_layer() -> SetResponseHeaderLayer<HeaderValue> {
    SetResponseHeaderLayer::overriding(
        header::X_CONTENT_TYPE_OPTIONS,
        HeaderValue::from_static("nosniff"),
    )
}
