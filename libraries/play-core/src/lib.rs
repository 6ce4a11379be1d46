//! Play Core
//!
//! Domain types, the persistence seam, and error handling shared by the
//! storage layer and the HTTP server.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `Song`, `Playlist`, `PlaylistWithSongs` and their
//!   create/update payloads
//! - **Gateway**: the async trait every persistence backend implements
//! - **Error Handling**: unified `PlayError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use play_core::types::{CreateSong, UpdateSong};
//!
//! let song = CreateSong {
//!     name: "Test Song".to_string(),
//!     artist_name: "Test Artist".to_string(),
//!     genre: "Test Genre".to_string(),
//!     song_rating: 100,
//! };
//! assert_eq!(song.song_rating, 100);
//! assert!(UpdateSong::default().is_empty());
//! ```

#![forbid(unsafe_code)]

pub mod error;
pub mod gateway;
pub mod types;

pub use error::{PlayError, Result};
pub use gateway::Gateway;

pub use types::{
    CreatePlaylist, CreateSong, Playlist, PlaylistId, PlaylistWithSongs, Song, SongId, UpdateSong,
    MAX_SONG_RATING, MIN_SONG_RATING,
};
