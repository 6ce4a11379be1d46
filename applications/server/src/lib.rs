//! Play Server Library
//!
//! REST back end for a song catalog and playlists: request validation,
//! route handlers and error mapping over a pluggable `Gateway`.
//!
//! This library exposes the core components for testing purposes.

pub mod api;
pub mod config;
pub mod error;
pub mod extract;
pub mod router;
pub mod state;
pub mod validation;

// Re-export commonly used types for convenience
pub use config::{Profile, ServerConfig};
pub use error::{Result, ServerError};
pub use extract::Payload;
pub use router::create_router;
pub use state::AppState;
pub use validation::ValidationError;
