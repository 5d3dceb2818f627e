//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum Router with the movie API
//! - Wire up middleware (request ID, tracing, security headers)
//! - Bind server to listener
//! - Drain in-flight requests on shutdown

use axum::{body::Body, http::Request, Router};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::api::{auth::ApiKey, setup_movie_router, ApiState};
use crate::config::ServiceConfig;
use crate::http::request::{propagate_request_id_layer, request_id, set_request_id_layer};
use crate::http::response::nosniff_layer;
use crate::tmdb::{MovieDatabase, TmdbClient, UpstreamResult};

/// HTTP server for the movie proxy.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a server backed by the TMDb client described in `config`.
    pub fn new(config: ServiceConfig) -> UpstreamResult<Self> {
        let client = TmdbClient::new(&config.upstream)?;
        tracing::info!(base_url = %client.base_url(), "Upstream client ready");
        Ok(Self::with_database(config, client))
    }

    /// Create a server backed by any movie database.
    pub fn with_database<D: MovieDatabase>(config: ServiceConfig, database: D) -> Self {
        let router = build_router(&config, ApiState::new(database));
        Self { router }
    }

    /// Run the server until `shutdown` fires, then drain in-flight requests.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// The fully layered router, for in-process use.
    pub fn router(&self) -> Router {
        self.router.clone()
    }
}

/// Build the Axum router with all middleware layers.
fn build_router<D: MovieDatabase>(config: &ServiceConfig, state: ApiState<D>) -> Router {
    let api_key = ApiKey::new(config.auth.api_key.as_str());
    let router = setup_movie_router(state, api_key);

    let router = if config.security.enable_headers {
        router.layer(nosniff_layer())
    } else {
        router
    };

    router.layer(
        ServiceBuilder::new()
            .layer(set_request_id_layer())
            .layer(
                TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
                    tracing::info_span!(
                        "request",
                        method = %request.method(),
                        path = %request.uri().path(),
                        request_id = %request_id(request.headers()),
                    )
                }),
            )
            .layer(propagate_request_id_layer()),
    )
}
