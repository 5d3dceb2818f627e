//! Error taxonomy for the movie endpoints.

use thiserror::Error;

/// Every way a movie request can fail. The display string is the exact
/// `error` text sent to the client.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MovieError {
    /// Missing or wrong `X-API-Key`.
    #[error("Unauthorized")]
    Unauthorized,

    /// `rating` query parameter is not a number.
    #[error("Invalid rating value")]
    InvalidRating,

    /// Path or query string could not be extracted.
    #[error("{0}")]
    BadRequest(String),

    /// Title search returned nothing.
    #[error("Movie not found")]
    NotFound,

    /// The upstream could not be reached.
    #[error("Failed to connect to TMDb API")]
    UpstreamUnavailable,

    /// The discover path got a non-success answer.
    #[error("Failed to retrieve movie list")]
    ListUnavailable,

    /// Anything else, described verbatim.
    #[error("{0}")]
    Internal(String),
}

/// Result type for movie operations.
pub type MovieResult<T> = Result<T, MovieError>;
