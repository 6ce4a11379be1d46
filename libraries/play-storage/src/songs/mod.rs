use play_core::{error::Result, types::*};
use sqlx::{sqlite::SqliteRow, Row, SqlitePool};

pub(crate) fn song_from_row(row: &SqliteRow) -> Result<Song> {
    Ok(Song {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        artist_name: row.try_get("artist_name")?,
        genre: row.try_get("genre")?,
        song_rating: row.try_get("song_rating")?,
    })
}

/// Insert a song and return its public columns
pub async fn create(pool: &SqlitePool, song: CreateSong) -> Result<Song> {
    let row = sqlx::query(
        r#"
        INSERT INTO songs (name, artist_name, genre, song_rating)
        VALUES (?, ?, ?, ?)
        RETURNING id, name, artist_name, genre, song_rating
        "#,
    )
    .bind(&song.name)
    .bind(&song.artist_name)
    .bind(&song.genre)
    .bind(song.song_rating)
    .fetch_one(pool)
    .await?;

    song_from_row(&row)
}

/// Get all songs
pub async fn get_all(pool: &SqlitePool) -> Result<Vec<Song>> {
    let rows = sqlx::query(
        r#"
        SELECT id, name, artist_name, genre, song_rating
        FROM songs
        ORDER BY id
        "#,
    )
    .fetch_all(pool)
    .await?;

    rows.iter().map(song_from_row).collect()
}

/// Get song by ID
pub async fn get_by_id(pool: &SqlitePool, id: SongId) -> Result<Option<Song>> {
    let row = sqlx::query(
        r#"
        SELECT id, name, artist_name, genre, song_rating
        FROM songs
        WHERE id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    row.as_ref().map(song_from_row).transpose()
}

/// Update the columns set in `update`, returning the row afterwards
pub async fn update(pool: &SqlitePool, id: SongId, update: UpdateSong) -> Result<Option<Song>> {
    if update.is_empty() {
        return get_by_id(pool, id).await;
    }

    let mut query_parts = Vec::new();

    if update.name.is_some() {
        query_parts.push("name = ?");
    }
    if update.artist_name.is_some() {
        query_parts.push("artist_name = ?");
    }
    if update.genre.is_some() {
        query_parts.push("genre = ?");
    }
    if update.song_rating.is_some() {
        query_parts.push("song_rating = ?");
    }

    let query_str = format!(
        "UPDATE songs SET {} WHERE id = ? RETURNING id, name, artist_name, genre, song_rating",
        query_parts.join(", ")
    );

    let mut query = sqlx::query(&query_str);

    if let Some(name) = &update.name {
        query = query.bind(name);
    }
    if let Some(artist_name) = &update.artist_name {
        query = query.bind(artist_name);
    }
    if let Some(genre) = &update.genre {
        query = query.bind(genre);
    }
    if let Some(song_rating) = update.song_rating {
        query = query.bind(song_rating);
    }

    let row = query.bind(id).fetch_optional(pool).await?;

    row.as_ref().map(song_from_row).transpose()
}

/// Delete a song; playlist associations go with it
pub async fn delete(pool: &SqlitePool, id: SongId) -> Result<bool> {
    let result = sqlx::query("DELETE FROM songs WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}
