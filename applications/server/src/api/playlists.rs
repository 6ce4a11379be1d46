/// Playlists API routes
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
use play_core::types::{Playlist, PlaylistWithSongs};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct PlaylistResponse {
    pub playlist: Playlist,
}

pub(crate) fn playlist_not_found(id: &str) -> ServerError {
    ServerError::NotFound(format!("Playlist with ID {} does not exist", id))
}

/// POST /api/v1/playlists
pub async fn create_playlist(
    State(app_state): State<AppState>,
    Payload(payload): Payload,
) -> Result<(StatusCode, Json<PlaylistResponse>)> {
    let create = validation::validate_create_playlist(&payload)?;

    let playlist = app_state.gateway.create_playlist(create).await?;
    tracing::info!(
        playlist_id = playlist.id,
        "Created playlist {}",
        playlist.playlist_name
    );

    Ok((StatusCode::CREATED, Json(PlaylistResponse { playlist })))
}

/// GET /api/v1/playlists
/// Every playlist with its songs nested, ordered by playlist id
pub async fn list_playlists(
    State(app_state): State<AppState>,
) -> Result<Json<Vec<PlaylistWithSongs>>> {
    let playlists = app_state.gateway.get_all_playlists_with_songs().await?;
    Ok(Json(playlists))
}

/// GET /api/v1/playlists/:id/songs
pub async fn get_playlist_songs(
    Path(id): Path<String>,
    State(app_state): State<AppState>,
) -> Result<Json<PlaylistWithSongs>> {
    let playlist_id = parse_id(&id).ok_or_else(|| playlist_not_found(&id))?;

    let playlist = app_state
        .gateway
        .get_playlist(playlist_id)
        .await?
        .ok_or_else(|| playlist_not_found(&id))?;

    let songs = app_state.gateway.get_playlist_songs(playlist_id).await?;

    Ok(Json(PlaylistWithSongs::new(playlist, songs)))
}
