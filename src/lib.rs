//! Authenticated TMDb movie metadata proxy library

pub mod api;
pub mod config;
pub mod http;
pub mod lifecycle;
pub mod movies;
pub mod observability;
pub mod tmdb;

pub use config::ServiceConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
