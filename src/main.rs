//! movie-proxy
//!
//! An authenticated HTTP front for TMDb movie metadata, built with Tokio and Axum.
//!
//! # Architecture Overview
//!
//! ```text
//!     Client ──▶ request id ──▶ trace ──▶ X-API-Key gate ──▶ handlers
//!                                                              │
//!                                                              ▼
//!                                                        MovieService
//!                                                              │
//!                                        search / discover ────┤──── credits (per movie)
//!                                                              ▼
//!                                                         TmdbClient ──▶ api.themoviedb.org
//! ```

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use movie_proxy::config::load_config;
use movie_proxy::lifecycle::{wait_for_shutdown_signal, Shutdown};
use movie_proxy::observability::{logging, metrics};
use movie_proxy::HttpServer;

#[derive(Parser)]
#[command(name = "movie-proxy")]
#[command(about = "Authenticated proxy for TMDb movie metadata", long_about = None)]
struct Args {
    /// Path to a TOML config file. Defaults plus environment are used when omitted.
    #[arg(short, long, env = "MOVIE_PROXY_CONFIG")]
    config: Option<PathBuf>,

    /// Override the listener bind address.
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let mut config = load_config(args.config.as_deref())?;
    if let Some(bind) = args.bind {
        config.listener.bind_address = bind;
    }

    logging::init_logging(&config.observability)?;

    tracing::info!("movie-proxy v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.bind_address,
        upstream = %config.upstream.base_url,
        upstream_timeout_secs = config.upstream.timeout_secs,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        // Already checked by validate_config
        let addr: SocketAddr = config.observability.metrics_address.parse()?;
        metrics::init_metrics(addr);
    }

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let shutdown = Shutdown::new();
    let server = HttpServer::new(config)?;
    let server_task = tokio::spawn(server.run(listener, shutdown.subscribe()));

    wait_for_shutdown_signal().await;
    shutdown.trigger();

    server_task.await??;

    tracing::info!("Shutdown complete");
    Ok(())
}
