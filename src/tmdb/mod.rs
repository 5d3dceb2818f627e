//! Upstream movie database integration.
//!
//! # Data Flow
//! ```text
//! MovieService
//!     → MovieDatabase trait (search / discover / credits)
//!     → client.rs (TmdbClient, reqwest)
//!     → api.themoviedb.org/3
//! ```
//!
//! # Design Decisions
//! - The service depends on the trait, so tests can swap in an in-memory database
//! - Wire types keep only the fields the service projects

use std::future::Future;

pub mod client;
pub mod types;

pub use client::TmdbClient;
pub use types::{
    CastMember, DiscoverFilter, Endpoint, UpstreamError, UpstreamMovieSummary, UpstreamResult,
};

/// Read-only access to a movie metadata source.
pub trait MovieDatabase: Send + Sync + 'static {
    /// Title search, in the upstream's own ranking order.
    fn search_movies(
        &self,
        title: &str,
    ) -> impl Future<Output = UpstreamResult<Vec<UpstreamMovieSummary>>> + Send;

    /// Filtered discovery, in upstream order.
    fn discover_movies(
        &self,
        filter: &DiscoverFilter,
    ) -> impl Future<Output = UpstreamResult<Vec<UpstreamMovieSummary>>> + Send;

    /// Billed cast for one movie, in upstream order.
    fn movie_credits(
        &self,
        movie_id: u64,
    ) -> impl Future<Output = UpstreamResult<Vec<CastMember>>> + Send;
}
