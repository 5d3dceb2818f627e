use std::time::Instant;

use axum::{
    extract::{rejection::PathRejection, Path, RawQuery, State},
    http::StatusCode,
    response::Response,
    Json,
};
use serde::Serialize;

use crate::api::ApiState;
use crate::http::response::error_response;
use crate::movies::{ListParams, MovieError, MovieRecord};
use crate::observability::metrics;
use crate::tmdb::MovieDatabase;

#[derive(Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub version: &'static str,
}

pub async fn get_health() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// `GET /movies/{name}`
pub async fn get_movie<D: MovieDatabase>(
    State(state): State<ApiState<D>>,
    name: Result<Path<String>, PathRejection>,
) -> Result<Json<MovieRecord>, MovieError> {
    let start = Instant::now();
    let Path(name) = name.map_err(|e| MovieError::BadRequest(e.body_text()))?;

    tracing::info!(name = %name, "Movie lookup");

    let result = state.movies.lookup_by_name(&name).await;
    metrics::record_request("lookup", status_of(&result), start);

    result.map(Json)
}

/// `GET /movies?year=&genre=&rating=`
pub async fn list_movies<D: MovieDatabase>(
    State(state): State<ApiState<D>>,
    RawQuery(query): RawQuery,
) -> Result<Json<Vec<MovieRecord>>, MovieError> {
    let start = Instant::now();
    let params = ListParams::from_query(query.as_deref());

    tracing::info!(
        year = ?params.year,
        genre = ?params.genre,
        rating = ?params.rating,
        "Movie list"
    );

    let result = state.movies.list_by_filter(params).await;
    metrics::record_request("list", status_of(&result), start);

    result.map(Json)
}

/// JSON 404 for anything outside the known routes.
pub async fn not_found() -> Response {
    error_response(StatusCode::NOT_FOUND, "Not found")
}

/// JSON 405 for a known path hit with the wrong method.
pub async fn method_not_allowed() -> Response {
    error_response(StatusCode::METHOD_NOT_ALLOWED, "Method not allowed")
}

fn status_of<T>(result: &Result<T, MovieError>) -> u16 {
    match result {
        Ok(_) => StatusCode::OK.as_u16(),
        Err(e) => e.status_code().as_u16(),
    }
}
