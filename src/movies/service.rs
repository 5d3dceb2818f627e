//! Movie enrichment: upstream lookups merged into client records.
//!
//! # Responsibilities
//! - Resolve a title to its best upstream match plus cast
//! - Resolve a discover filter to a list of movies, each with cast
//! - Classify upstream failures into client-facing errors
//!
//! # Design Decisions
//! - Cast lookups for a list run one after another, in result order
//! - Any failure aborts the whole operation; no partial results
//! - No retries on any path

use crate::movies::error::{MovieError, MovieResult};
use crate::movies::types::{ListParams, MovieRecord};
use crate::tmdb::{DiscoverFilter, MovieDatabase, UpstreamError, UpstreamMovieSummary};

/// Stateless enrichment service over a movie database.
pub struct MovieService<D> {
    database: D,
}

impl<D: MovieDatabase> MovieService<D> {
    pub fn new(database: D) -> Self {
        Self { database }
    }

    /// Underlying database handle.
    pub fn database(&self) -> &D {
        &self.database
    }

    /// Look up a single movie by title, taking the upstream's first match.
    pub async fn lookup_by_name(&self, name: &str) -> MovieResult<MovieRecord> {
        let results = match self.database.search_movies(name).await {
            Ok(results) => results,
            // The search endpoint answering with an error status means no usable match
            Err(UpstreamError::Status { .. }) => return Err(MovieError::NotFound),
            Err(e) => return Err(classify_lookup(e)),
        };

        let movie = results.into_iter().next().ok_or(MovieError::NotFound)?;

        tracing::debug!(title = %movie.title, movie_id = movie.id, "Matched movie");

        self.enrich(movie).await.map_err(classify_lookup)
    }

    /// Validate list parameters, then discover and enrich every match.
    pub async fn list_by_filter(&self, params: ListParams) -> MovieResult<Vec<MovieRecord>> {
        let filter = params.into_filter()?;
        self.list_movies(&filter).await
    }

    /// Discover movies for an already-validated filter.
    pub async fn list_movies(&self, filter: &DiscoverFilter) -> MovieResult<Vec<MovieRecord>> {
        let movies = self
            .database
            .discover_movies(filter)
            .await
            .map_err(classify_list)?;

        tracing::debug!(count = movies.len(), "Discovered movies");

        let mut records = Vec::with_capacity(movies.len());
        for movie in movies {
            records.push(self.enrich(movie).await.map_err(classify_list)?);
        }

        Ok(records)
    }

    async fn enrich(&self, movie: UpstreamMovieSummary) -> Result<MovieRecord, UpstreamError> {
        let cast = self.database.movie_credits(movie.id).await?;
        Ok(MovieRecord::from_upstream(movie, cast))
    }
}

fn classify_lookup(err: UpstreamError) -> MovieError {
    match err {
        UpstreamError::Transport { .. } => MovieError::UpstreamUnavailable,
        other => MovieError::Internal(other.to_string()),
    }
}

fn classify_list(err: UpstreamError) -> MovieError {
    match err {
        UpstreamError::Transport { .. } => MovieError::UpstreamUnavailable,
        UpstreamError::Status { .. } => MovieError::ListUnavailable,
        other => MovieError::Internal(other.to_string()),
    }
}
