//! Metrics collection and exposition.
//!
//! # Metrics
//! - `movie_proxy_requests_total` (counter): inbound requests by route, status
//! - `movie_proxy_request_duration_seconds` (histogram): inbound latency by route
//! - `movie_proxy_upstream_requests_total` (counter): TMDb calls by endpoint, outcome
//! - `movie_proxy_upstream_duration_seconds` (histogram): TMDb latency by endpoint
//!
//! Without an installed recorder every call here is a no-op.

use std::net::SocketAddr;
use std::time::Instant;

use metrics::{counter, histogram};
use metrics_exporter_prometheus::PrometheusBuilder;

use crate::tmdb::Endpoint;

/// Start the Prometheus scrape endpoint on `addr`.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics endpoint listening"),
        Err(e) => tracing::error!(error = %e, "Failed to install Prometheus recorder"),
    }
}

/// Record a completed inbound request.
pub fn record_request(route: &'static str, status: u16, start: Instant) {
    counter!(
        "movie_proxy_requests_total",
        "route" => route,
        "status" => status.to_string()
    )
    .increment(1);
    histogram!("movie_proxy_request_duration_seconds", "route" => route)
        .record(start.elapsed().as_secs_f64());
}

/// Record a completed upstream call.
pub fn record_upstream(endpoint: Endpoint, outcome: &'static str, start: Instant) {
    counter!(
        "movie_proxy_upstream_requests_total",
        "endpoint" => endpoint.as_str(),
        "outcome" => outcome
    )
    .increment(1);
    histogram!("movie_proxy_upstream_duration_seconds", "endpoint" => endpoint.as_str())
        .record(start.elapsed().as_secs_f64());
}
