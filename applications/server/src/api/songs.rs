/// Songs API routes
use crate::{
    api::parse_id,
    error::{Result, ServerError},
    extract::Payload,
    state::AppState,
    validation,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use play_core::types::{Song, SongId};
use serde::Serialize;

/// Single song wrapped under the `songs` key
#[derive(Debug, Serialize)]
pub struct SongResponse {
    pub songs: Song,
}

fn not_found(id: &str) -> ServerError {
    ServerError::NotFound(format!("Could not find song with id: {}", id))
}

fn update_not_found(id: &str) -> ServerError {
    ServerError::NotFound(format!("Song with ID {} not found", id))
}

/// POST /api/v1/songs
pub async fn create_song(
    State(app_state): State<AppState>,
    Payload(payload): Payload,
) -> Result<(StatusCode, Json<SongResponse>)> {
    let create = validation::validate_create_song(&payload)?;

    let song = app_state.gateway.create_song(create).await?;
    tracing::info!(song_id = song.id, "Created song {}", song.name);

    Ok((StatusCode::CREATED, Json(SongResponse { songs: song })))
}

/// GET /api/v1/songs
pub async fn list_songs(State(app_state): State<AppState>) -> Result<Json<Vec<Song>>> {
    let songs = app_state.gateway.get_all_songs().await?;
    Ok(Json(songs))
}

/// GET /api/v1/songs/:id
///
/// Answers an array holding the one matching song.
pub async fn get_song(
    Path(id): Path<String>,
    State(app_state): State<AppState>,
) -> Result<Json<Vec<Song>>> {
    let song_id: SongId = parse_id(&id).ok_or_else(|| not_found(&id))?;

    let song = app_state
        .gateway
        .get_song(song_id)
        .await?
        .ok_or_else(|| not_found(&id))?;

    Ok(Json(vec![song]))
}

/// PATCH /api/v1/songs/:id
pub async fn update_song(
    Path(id): Path<String>,
    State(app_state): State<AppState>,
    Payload(payload): Payload,
) -> Result<Json<SongResponse>> {
    let update = validation::validate_update_song(&payload)?;

    let song_id = parse_id(&id).ok_or_else(|| update_not_found(&id))?;

    app_state
        .gateway
        .get_song(song_id)
        .await?
        .ok_or_else(|| update_not_found(&id))?;

    // The row can disappear between the check and the write
    let song = app_state
        .gateway
        .update_song(song_id, update)
        .await?
        .ok_or_else(|| update_not_found(&id))?;
    tracing::info!(song_id, "Updated song");

    Ok(Json(SongResponse { songs: song }))
}

/// DELETE /api/v1/songs/:id
pub async fn delete_song(
    Path(id): Path<String>,
    State(app_state): State<AppState>,
) -> Result<StatusCode> {
    let missing = || ServerError::Missing(format!("Song with ID {} not found", id));

    let song_id = parse_id(&id).ok_or_else(missing)?;

    app_state
        .gateway
        .get_song(song_id)
        .await?
        .ok_or_else(missing)?;

    if !app_state.gateway.delete_song(song_id).await? {
        return Err(missing());
    }
    tracing::info!(song_id, "Deleted song");

    Ok(StatusCode::NO_CONTENT)
}
