//! Movie API routes.
//!
//! ```text
//! GET /movies/{name}  → handlers::get_movie    (auth)
//! GET /movies         → handlers::list_movies  (auth)
//! GET /health         → handlers::get_health
//! wrong method        → handlers::method_not_allowed
//! *                   → handlers::not_found
//! ```

pub mod auth;
pub mod handlers;

use std::sync::Arc;

use axum::{middleware, routing::get, Router};

use self::auth::{require_api_key, ApiKey};
use self::handlers::*;
use crate::movies::MovieService;
use crate::tmdb::MovieDatabase;

/// Application state injected into handlers.
pub struct ApiState<D> {
    pub movies: Arc<MovieService<D>>,
}

impl<D: MovieDatabase> ApiState<D> {
    pub fn new(database: D) -> Self {
        Self {
            movies: Arc::new(MovieService::new(database)),
        }
    }
}

impl<D> Clone for ApiState<D> {
    fn clone(&self) -> Self {
        Self {
            movies: Arc::clone(&self.movies),
        }
    }
}

/// Build the API router. The key check only wraps matched movie routes, so
/// unknown paths still get a plain JSON 404.
pub fn setup_movie_router<D: MovieDatabase>(state: ApiState<D>, api_key: ApiKey) -> Router {
    let movies = Router::new()
        .route("/movies", get(list_movies::<D>))
        .route("/movies/{name}", get(get_movie::<D>))
        .route_layer(middleware::from_fn_with_state(api_key, require_api_key));

    Router::new()
        .route("/health", get(get_health))
        .merge(movies)
        .method_not_allowed_fallback(method_not_allowed)
        .fallback(not_found)
        .with_state(state)
}
