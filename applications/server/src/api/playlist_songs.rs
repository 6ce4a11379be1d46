/// Playlist membership routes
use crate::{
    api::{parse_id, playlists::playlist_not_found, MessageResponse},
    error::{Result, ServerError},
    state::AppState,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

/// POST /api/v1/playlists/:playlist_id/songs/:id
///
/// The playlist is checked before the song, so when both are missing the
/// playlist is the one reported. Adding a song already in the playlist
/// succeeds without a second row.
pub async fn add_song_to_playlist(
    Path((playlist_id, song_id)): Path<(String, String)>,
    State(app_state): State<AppState>,
) -> Result<(StatusCode, Json<MessageResponse>)> {
    let song_not_found =
        || ServerError::NotFound(format!("Song with ID {} does not exist", song_id));

    let playlist = match parse_id(&playlist_id) {
        Some(id) => app_state.gateway.get_playlist(id).await?,
        None => None,
    }
    .ok_or_else(|| playlist_not_found(&playlist_id))?;

    let song = match parse_id(&song_id) {
        Some(id) => app_state.gateway.get_song(id).await?,
        None => None,
    }
    .ok_or_else(song_not_found)?;

    app_state
        .gateway
        .add_song_to_playlist(playlist.id, song.id)
        .await?;
    tracing::info!(
        playlist_id = playlist.id,
        song_id = song.id,
        "Added song to playlist"
    );

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: format!(
                "Successfully added {} to {}",
                song.name, playlist.playlist_name
            ),
        }),
    ))
}
