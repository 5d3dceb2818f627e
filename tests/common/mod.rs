//! Shared utilities for integration testing.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

use movie_proxy::config::ServiceConfig;
use movie_proxy::tmdb::{
    CastMember, DiscoverFilter, Endpoint, MovieDatabase, UpstreamError, UpstreamMovieSummary,
    UpstreamResult,
};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::TcpListener;

pub const CLIENT_KEY: &str = "test-client-key";

/// Config pointing at `upstream`, with known keys.
#[allow(dead_code)]
pub fn test_config(upstream: &str) -> ServiceConfig {
    let mut config = ServiceConfig::default();
    config.listener.bind_address = "127.0.0.1:0".into();
    config.auth.api_key = CLIENT_KEY.into();
    config.upstream.api_key = "tmdb-test-key".into();
    config.upstream.base_url = upstream.into();
    config.upstream.timeout_secs = 5;
    config.upstream.connect_timeout_secs = 2;
    config
}

/// What a programmable upstream does with one request.
#[allow(dead_code)]
pub enum Reply {
    Json(u16, String),
    /// Close the connection without answering.
    Drop,
}

/// Start a programmable mock upstream on an ephemeral port.
///
/// The handler receives the request target (path and query string).
#[allow(dead_code)]
pub async fn start_programmable_upstream<F>(handler: F) -> SocketAddr
where
    F: Fn(&str) -> Reply + Send + Sync + 'static,
{
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let handler = Arc::new(handler);

    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((socket, _)) => {
                    let handler = handler.clone();
                    tokio::spawn(async move {
                        let mut reader = BufReader::new(socket);

                        let mut request_line = String::new();
                        if reader.read_line(&mut request_line).await.is_err() {
                            return;
                        }
                        // Drain headers
                        loop {
                            let mut line = String::new();
                            match reader.read_line(&mut line).await {
                                Ok(0) => break,
                                Ok(_) if line == "\r\n" || line == "\n" => break,
                                Ok(_) => continue,
                                Err(_) => return,
                            }
                        }

                        let target = request_line.split_whitespace().nth(1).unwrap_or("/");
                        let mut socket = reader.into_inner();

                        match handler(target) {
                            Reply::Json(status, body) => {
                                let status_text = match status {
                                    200 => "200 OK",
                                    401 => "401 Unauthorized",
                                    404 => "404 Not Found",
                                    500 => "500 Internal Server Error",
                                    503 => "503 Service Unavailable",
                                    _ => "200 OK",
                                };
                                let response = format!(
                                    "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                                    status_text,
                                    body.len(),
                                    body
                                );
                                let _ = socket.write_all(response.as_bytes()).await;
                                let _ = socket.shutdown().await;
                            }
                            Reply::Drop => drop(socket),
                        }
                    });
                }
                Err(_) => break,
            }
        }
    });

    addr
}

/// Path component of a request target.
#[allow(dead_code)]
pub fn path_of(target: &str) -> &str {
    target.split('?').next().unwrap_or(target)
}

/// In-memory movie database that counts every call.
#[allow(dead_code)]
#[derive(Default)]
pub struct FakeDatabase {
    pub movies: Vec<UpstreamMovieSummary>,
    pub cast: HashMap<u64, Vec<CastMember>>,
    pub unreachable_credits: Vec<u64>,
    pub calls: Arc<AtomicU32>,
}

#[allow(dead_code)]
impl FakeDatabase {
    /// The single movie "A" with cast Alice.
    pub fn sample() -> Self {
        let mut db = Self {
            movies: vec![UpstreamMovieSummary {
                id: 1,
                title: "A".into(),
                release_date: Some("1999-05-01".into()),
                overview: "x".into(),
                vote_average: 7.5,
            }],
            ..Self::default()
        };
        db.cast.insert(1, vec![CastMember { name: "Alice".into() }]);
        db
    }

    pub fn call_count(&self) -> Arc<AtomicU32> {
        self.calls.clone()
    }
}

impl MovieDatabase for FakeDatabase {
    async fn search_movies(&self, title: &str) -> UpstreamResult<Vec<UpstreamMovieSummary>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.movies.iter().filter(|m| m.title == title).cloned().collect())
    }

    async fn discover_movies(
        &self,
        _filter: &DiscoverFilter,
    ) -> UpstreamResult<Vec<UpstreamMovieSummary>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.movies.clone())
    }

    async fn movie_credits(&self, movie_id: u64) -> UpstreamResult<Vec<CastMember>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.unreachable_credits.contains(&movie_id) {
            return Err(UpstreamError::Transport {
                endpoint: Endpoint::Credits,
                message: "connection refused".into(),
            });
        }
        Ok(self.cast.get(&movie_id).cloned().unwrap_or_default())
    }
}
