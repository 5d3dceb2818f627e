//! Upstream wire types and error definitions.

use serde::Deserialize;
use thiserror::Error;

/// One entry of a search or discover result page.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UpstreamMovieSummary {
    pub id: u64,
    pub title: String,
    /// `YYYY-MM-DD`; absent or empty for unreleased titles.
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub overview: String,
    pub vote_average: f64,
}

/// Envelope returned by `/search/movie` and `/discover/movie`.
#[derive(Debug, Clone, Deserialize)]
pub struct MoviePage {
    #[serde(default)]
    pub results: Vec<UpstreamMovieSummary>,
}

/// A cast credit. Only the actor name is kept.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CastMember {
    pub name: String,
}

/// Envelope returned by `/movie/{id}/credits`.
#[derive(Debug, Clone, Deserialize)]
pub struct Credits {
    pub cast: Vec<CastMember>,
}

/// Filters accepted by the discover endpoint. `None` fields are not sent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DiscoverFilter {
    pub year: Option<String>,
    pub genre: Option<String>,
    pub min_rating: Option<f64>,
}

impl DiscoverFilter {
    /// Query parameters in TMDb naming.
    pub fn query_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(year) = &self.year {
            params.push(("year", year.clone()));
        }
        if let Some(genre) = &self.genre {
            params.push(("with_genres", genre.clone()));
        }
        if let Some(rating) = self.min_rating {
            params.push(("vote_average.gte", rating.to_string()));
        }
        params
    }
}

/// Upstream endpoint, used for logging, metrics and error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Search,
    Discover,
    Credits,
}

impl Endpoint {
    pub fn as_str(&self) -> &'static str {
        match self {
            Endpoint::Search => "search",
            Endpoint::Discover => "discover",
            Endpoint::Credits => "credits",
        }
    }
}

impl std::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors that can occur while talking to the upstream API.
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// The request never completed: connect failure, reset, timeout.
    #[error("upstream {endpoint} request failed: {message}")]
    Transport { endpoint: Endpoint, message: String },

    /// The upstream answered with a non-success status.
    #[error("upstream {endpoint} request returned status {status}")]
    Status { endpoint: Endpoint, status: u16 },

    /// The body was not the expected JSON shape.
    #[error("upstream {endpoint} response could not be decoded: {source}")]
    Decode {
        endpoint: Endpoint,
        #[source]
        source: serde_json::Error,
    },

    /// The HTTP client itself could not be constructed.
    #[error("failed to build upstream client: {0}")]
    Client(String),
}

/// Result type for upstream operations.
pub type UpstreamResult<T> = Result<T, UpstreamError>;
