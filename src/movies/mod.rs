//! Movie enrichment subsystem.
//!
//! # Data Flow
//! ```text
//! handler (name | ListParams)
//!     → service.rs (validate, search/discover)
//!     → credits per movie
//!     → types.rs (MovieRecord merge)
//!     → handler (JSON)
//! ```

pub mod error;
pub mod service;
pub mod types;

pub use error::{MovieError, MovieResult};
pub use service::MovieService;
pub use types::{ListParams, MovieRecord};
