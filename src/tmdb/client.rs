//! TMDb REST client with timeout and error classification.
//!
//! # Responsibilities
//! - Build one pooled reqwest client per process
//! - Append the API key to every outbound call
//! - Separate transport failures from bad statuses and bad bodies

use std::time::{Duration, Instant};

use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::config::UpstreamConfig;
use crate::observability::metrics;
use crate::tmdb::types::{
    CastMember, Credits, DiscoverFilter, Endpoint, MoviePage, UpstreamError, UpstreamMovieSummary,
    UpstreamResult,
};
use crate::tmdb::MovieDatabase;

/// TMDb v3 API client.
#[derive(Clone)]
pub struct TmdbClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl TmdbClient {
    /// Create a new client from upstream configuration.
    pub fn new(config: &UpstreamConfig) -> UpstreamResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .build()
            .map_err(|e| UpstreamError::Client(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        })
    }

    /// Base URL requests are issued against.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: Endpoint,
        path: &str,
        params: &[(&str, String)],
    ) -> UpstreamResult<T> {
        let start = Instant::now();
        let url = format!("{}{}", self.base_url, path);

        tracing::debug!(endpoint = %endpoint, url = %url, "Calling upstream");

        let response = self
            .client
            .get(&url)
            .query(&[("api_key", self.api_key.as_str())])
            .query(params)
            .send()
            .await
            .map_err(|e| {
                metrics::record_upstream(endpoint, "transport_error", start);
                UpstreamError::Transport {
                    endpoint,
                    message: e.to_string(),
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            metrics::record_upstream(endpoint, "bad_status", start);
            tracing::warn!(endpoint = %endpoint, status = %status, "Upstream returned error status");
            return Err(UpstreamError::Status {
                endpoint,
                status: status.as_u16(),
            });
        }

        // A body cut off mid-stream is still a transport failure
        let body = response.bytes().await.map_err(|e| {
            metrics::record_upstream(endpoint, "transport_error", start);
            UpstreamError::Transport {
                endpoint,
                message: e.to_string(),
            }
        })?;

        let decoded = serde_json::from_slice(&body).map_err(|source| {
            metrics::record_upstream(endpoint, "decode_error", start);
            UpstreamError::Decode { endpoint, source }
        })?;

        metrics::record_upstream(endpoint, "ok", start);
        Ok(decoded)
    }
}

impl MovieDatabase for TmdbClient {
    async fn search_movies(&self, title: &str) -> UpstreamResult<Vec<UpstreamMovieSummary>> {
        let page: MoviePage = self
            .get_json(Endpoint::Search, "/search/movie", &[("query", title.to_string())])
            .await?;
        Ok(page.results)
    }

    async fn discover_movies(
        &self,
        filter: &DiscoverFilter,
    ) -> UpstreamResult<Vec<UpstreamMovieSummary>> {
        let page: MoviePage = self
            .get_json(Endpoint::Discover, "/discover/movie", &filter.query_params())
            .await?;
        Ok(page.results)
    }

    async fn movie_credits(&self, movie_id: u64) -> UpstreamResult<Vec<CastMember>> {
        let path = format!("/movie/{}/credits", movie_id);
        let credits: Credits = self.get_json(Endpoint::Credits, &path, &[]).await?;
        Ok(credits.cast)
    }
}
