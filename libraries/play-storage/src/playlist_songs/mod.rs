use crate::songs::song_from_row;
use play_core::{error::Result, types::*};
use sqlx::SqlitePool;

/// Add song to playlist
///
/// Both rows must already exist; callers check that first. Adding a pair
/// twice leaves a single association.
pub async fn add(pool: &SqlitePool, playlist_id: PlaylistId, song_id: SongId) -> Result<()> {
    sqlx::query(
        r#"
        INSERT INTO playlist_songs (playlist_id, song_id)
        VALUES (?, ?)
        ON CONFLICT(playlist_id, song_id) DO NOTHING
        "#,
    )
    .bind(playlist_id)
    .bind(song_id)
    .execute(pool)
    .await?;

    Ok(())
}

/// Get the songs of a playlist in the order they were added
pub async fn get_songs(pool: &SqlitePool, playlist_id: PlaylistId) -> Result<Vec<Song>> {
    let rows = sqlx::query(
        r#"
        SELECT s.id, s.name, s.artist_name, s.genre, s.song_rating
        FROM playlist_songs ps
        INNER JOIN songs s ON s.id = ps.song_id
        WHERE ps.playlist_id = ?
        ORDER BY ps.rowid
        "#,
    )
    .bind(playlist_id)
    .fetch_all(pool)
    .await?;

    rows.iter().map(song_from_row).collect()
}
