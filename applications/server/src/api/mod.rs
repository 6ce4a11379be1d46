/// API route modules
pub mod playlist_songs;
pub mod playlists;
pub mod root;
pub mod songs;

use serde::Serialize;

/// Parse a path id. Anything that is not an integer can never match a row.
pub(crate) fn parse_id(raw: &str) -> Option<i64> {
    raw.trim().parse().ok()
}

/// Plain `{"message": ...}` body
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}
