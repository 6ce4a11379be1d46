use play_core::{error::Result, types::*};
use sqlx::{sqlite::SqliteRow, Row, SqlitePool};

fn playlist_from_row(row: &SqliteRow) -> Result<Playlist> {
    Ok(Playlist {
        id: row.try_get("id")?,
        playlist_name: row.try_get("playlist_name")?,
    })
}

/// Create new playlist
pub async fn create(pool: &SqlitePool, playlist: CreatePlaylist) -> Result<Playlist> {
    let row = sqlx::query(
        r#"
        INSERT INTO playlists (playlist_name)
        VALUES (?)
        RETURNING id, playlist_name
        "#,
    )
    .bind(&playlist.playlist_name)
    .fetch_one(pool)
    .await?;

    playlist_from_row(&row)
}

/// Get playlist by ID
pub async fn get_by_id(pool: &SqlitePool, id: PlaylistId) -> Result<Option<Playlist>> {
    let row = sqlx::query(
        r#"
        SELECT id, playlist_name
        FROM playlists
        WHERE id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    row.as_ref().map(playlist_from_row).transpose()
}

/// Get every playlist with its songs nested, ordered by playlist ID
///
/// Songs are aggregated in SQL into a JSON array per playlist. Playlists
/// without songs are left out.
pub async fn get_all_with_songs(pool: &SqlitePool) -> Result<Vec<PlaylistWithSongs>> {
    let rows = sqlx::query(
        r#"
        SELECT
            p.id, p.playlist_name,
            json_group_array(
                json_object(
                    'id', s.id,
                    'name', s.name,
                    'artist_name', s.artist_name,
                    'genre', s.genre,
                    'song_rating', s.song_rating
                )
            ) AS songs
        FROM playlists p
        INNER JOIN playlist_songs ps ON p.id = ps.playlist_id
        INNER JOIN songs s ON s.id = ps.song_id
        GROUP BY p.id
        ORDER BY p.id
        "#,
    )
    .fetch_all(pool)
    .await?;

    rows.iter()
        .map(|row| -> Result<PlaylistWithSongs> {
            let songs: String = row.try_get("songs")?;
            let songs: Vec<Song> = serde_json::from_str(&songs)?;
            Ok(PlaylistWithSongs::new(playlist_from_row(row)?, songs))
        })
        .collect()
}
