/// Playlist domain types
use crate::types::Song;
use serde::{Deserialize, Serialize};

/// Playlist identifier (database-generated)
pub type PlaylistId = i64;

/// Playlist with its public columns
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Playlist {
    pub id: PlaylistId,
    pub playlist_name: String,
}

/// Validated input for inserting a playlist
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatePlaylist {
    pub playlist_name: String,
}

/// Playlist together with every song associated to it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaylistWithSongs {
    pub id: PlaylistId,
    pub playlist_name: String,
    pub songs: Vec<Song>,
}

impl PlaylistWithSongs {
    pub fn new(playlist: Playlist, songs: Vec<Song>) -> Self {
        Self {
            id: playlist.id,
            playlist_name: playlist.playlist_name,
            songs,
        }
    }
}
