//! Shared-secret authentication gate.

use std::sync::Arc;

use axum::{
    body::Body,
    extract::State,
    http::Request,
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::movies::MovieError;

/// Header clients put their key in.
pub const X_API_KEY: &str = "X-API-Key";

/// The secret clients must present. Read once from config at startup.
#[derive(Clone)]
pub struct ApiKey(Arc<str>);

impl ApiKey {
    pub fn new(key: impl Into<Arc<str>>) -> Self {
        Self(key.into())
    }

    /// Exact match against a presented value.
    pub fn matches(&self, presented: &str) -> bool {
        !self.0.is_empty() && *self.0 == *presented
    }
}

impl std::fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

/// Reject requests whose `X-API-Key` is missing or wrong before any handler runs.
pub async fn require_api_key(
    State(api_key): State<ApiKey>,
    request: Request<Body>,
    next: Next,
) -> Response {
    let authorized = request
        .headers()
        .get(X_API_KEY)
        .and_then(|h| h.to_str().ok())
        .is_some_and(|key| api_key.matches(key));

    if !authorized {
        tracing::debug!(path = %request.uri().path(), "Missing or invalid API key");
        return MovieError::Unauthorized.into_response();
    }

    next.run(request).await
}
