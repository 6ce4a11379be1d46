//! Persistence seam between request handlers and the database

use crate::error::Result;
use crate::types::{
    CreatePlaylist, CreateSong, Playlist, PlaylistId, PlaylistWithSongs, Song, SongId, UpdateSong,
};
use async_trait::async_trait;

/// Access to the songs, playlists and playlist-song tables
///
/// Handlers receive this as `Arc<dyn Gateway>` so tests can substitute their
/// own implementation. Lookups return `Ok(None)` for missing rows; `Err` is
/// reserved for failures of the backend itself.
#[async_trait]
pub trait Gateway: Send + Sync {
    // ========================================================================
    // Songs
    // ========================================================================

    /// Insert a song and return the stored row
    async fn create_song(&self, song: CreateSong) -> Result<Song>;

    /// Get every song
    async fn get_all_songs(&self) -> Result<Vec<Song>>;

    /// Get song by ID
    async fn get_song(&self, id: SongId) -> Result<Option<Song>>;

    /// Apply a partial update and return the updated row
    ///
    /// Returns `Ok(None)` if the song vanished before the update ran.
    async fn update_song(&self, id: SongId, update: UpdateSong) -> Result<Option<Song>>;

    /// Delete a song, returning whether a row was removed
    async fn delete_song(&self, id: SongId) -> Result<bool>;

    // ========================================================================
    // Playlists
    // ========================================================================

    /// Insert a playlist and return the stored row
    async fn create_playlist(&self, playlist: CreatePlaylist) -> Result<Playlist>;

    /// Get playlist by ID
    async fn get_playlist(&self, id: PlaylistId) -> Result<Option<Playlist>>;

    /// Get the songs associated with a playlist
    async fn get_playlist_songs(&self, id: PlaylistId) -> Result<Vec<Song>>;

    /// Get every playlist with its songs, ordered by playlist ID
    async fn get_all_playlists_with_songs(&self) -> Result<Vec<PlaylistWithSongs>>;

    // ========================================================================
    // Playlist songs
    // ========================================================================

    /// Associate a song with a playlist (no-op if already associated)
    async fn add_song_to_playlist(&self, playlist_id: PlaylistId, song_id: SongId) -> Result<()>;
}
