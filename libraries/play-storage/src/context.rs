use crate::{playlist_songs, playlists, songs};
use async_trait::async_trait;
use play_core::{error::Result, types::*, Gateway};
use sqlx::SqlitePool;

/// Gateway backed by a `SQLite` pool
#[derive(Clone)]
pub struct SqliteGateway {
    pool: SqlitePool,
}

impl SqliteGateway {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl Gateway for SqliteGateway {
    // Songs
    async fn create_song(&self, song: CreateSong) -> Result<Song> {
        songs::create(&self.pool, song).await
    }

    async fn get_all_songs(&self) -> Result<Vec<Song>> {
        songs::get_all(&self.pool).await
    }

    async fn get_song(&self, id: SongId) -> Result<Option<Song>> {
        songs::get_by_id(&self.pool, id).await
    }

    async fn update_song(&self, id: SongId, update: UpdateSong) -> Result<Option<Song>> {
        songs::update(&self.pool, id, update).await
    }

    async fn delete_song(&self, id: SongId) -> Result<bool> {
        songs::delete(&self.pool, id).await
    }

    // Playlists
    async fn create_playlist(&self, playlist: CreatePlaylist) -> Result<Playlist> {
        playlists::create(&self.pool, playlist).await
    }

    async fn get_playlist(&self, id: PlaylistId) -> Result<Option<Playlist>> {
        playlists::get_by_id(&self.pool, id).await
    }

    async fn get_playlist_songs(&self, id: PlaylistId) -> Result<Vec<Song>> {
        playlist_songs::get_songs(&self.pool, id).await
    }

    async fn get_all_playlists_with_songs(&self) -> Result<Vec<PlaylistWithSongs>> {
        playlists::get_all_with_songs(&self.pool).await
    }

    // Playlist songs
    async fn add_song_to_playlist(&self, playlist_id: PlaylistId, song_id: SongId) -> Result<()> {
        playlist_songs::add(&self.pool, playlist_id, song_id).await
    }
}
