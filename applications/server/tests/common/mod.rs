//! Common test utilities and fixtures
#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use play_core::{
    types::{
        CreatePlaylist, CreateSong, Playlist, PlaylistId, PlaylistWithSongs, Song, SongId,
        UpdateSong,
    },
    Gateway, PlayError,
};
use play_server::{create_router, AppState};
use serde_json::Value;
use std::sync::Arc;
use tower::util::ServiceExt;

/// Router over a fresh in-memory database, plus a handle on that database
pub async fn create_test_app() -> (Router, Arc<dyn Gateway>) {
    let gateway = play_storage::connect("sqlite::memory:")
        .await
        .expect("Failed to open in-memory database");
    let gateway: Arc<dyn Gateway> = Arc::new(gateway);

    let app = create_router(AppState::new(Arc::clone(&gateway)));

    (app, gateway)
}

/// Router whose gateway fails every call
pub fn create_failing_app() -> Router {
    create_router(AppState::new(Arc::new(FailingGateway)))
}

/// Gateway test double standing in for an unreachable database
pub struct FailingGateway;

fn unreachable_database<T>() -> play_core::Result<T> {
    Err(PlayError::Database(
        "connection refused: password authentication failed for user \"play\"".to_string(),
    ))
}

#[async_trait::async_trait]
impl Gateway for FailingGateway {
    async fn create_song(&self, _song: CreateSong) -> play_core::Result<Song> {
        unreachable_database()
    }

    async fn get_all_songs(&self) -> play_core::Result<Vec<Song>> {
        unreachable_database()
    }

    async fn get_song(&self, _id: SongId) -> play_core::Result<Option<Song>> {
        unreachable_database()
    }

    async fn update_song(&self, _id: SongId, _update: UpdateSong) -> play_core::Result<Option<Song>> {
        unreachable_database()
    }

    async fn delete_song(&self, _id: SongId) -> play_core::Result<bool> {
        unreachable_database()
    }

    async fn create_playlist(&self, _playlist: CreatePlaylist) -> play_core::Result<Playlist> {
        unreachable_database()
    }

    async fn get_playlist(&self, _id: PlaylistId) -> play_core::Result<Option<Playlist>> {
        unreachable_database()
    }

    async fn get_playlist_songs(&self, _id: PlaylistId) -> play_core::Result<Vec<Song>> {
        unreachable_database()
    }

    async fn get_all_playlists_with_songs(&self) -> play_core::Result<Vec<PlaylistWithSongs>> {
        unreachable_database()
    }

    async fn add_song_to_playlist(
        &self,
        _playlist_id: PlaylistId,
        _song_id: SongId,
    ) -> play_core::Result<()> {
        unreachable_database()
    }
}

/// Send a request without a body
pub async fn send(app: &Router, method: &str, uri: &str) -> (StatusCode, Vec<u8>) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    dispatch(app, request).await
}

/// Send a JSON body
pub async fn send_json(app: &Router, method: &str, uri: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap();

    let (status, bytes) = dispatch(app, request).await;
    (status, parse_body(&bytes))
}

/// Send a raw body with the given content type
pub async fn send_raw(
    app: &Router,
    method: &str,
    uri: &str,
    content_type: &str,
    body: &'static str,
) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, content_type)
        .body(Body::from(body))
        .unwrap();

    let (status, bytes) = dispatch(app, request).await;
    (status, parse_body(&bytes))
}

/// GET a JSON document
pub async fn get_json(app: &Router, uri: &str) -> (StatusCode, Value) {
    let (status, bytes) = send(app, "GET", uri).await;
    (status, parse_body(&bytes))
}

async fn dispatch(app: &Router, request: Request<Body>) -> (StatusCode, Vec<u8>) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();

    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    (status, body_bytes.to_vec())
}

fn parse_body(bytes: &[u8]) -> Value {
    if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(bytes).unwrap()
    }
}

/// Song payload used throughout the tests
pub fn test_song_json() -> Value {
    serde_json::json!({
        "name": "Test Song",
        "artist_name": "Test Artist",
        "genre": "Test Genre",
        "song_rating": 100
    })
}

/// Create a song through the API and return its id
pub async fn create_song(app: &Router, name: &str, song_rating: i64) -> i64 {
    let (status, body) = send_json(
        app,
        "POST",
        "/api/v1/songs",
        serde_json::json!({
            "name": name,
            "artist_name": format!("{} Artist", name),
            "genre": "Rock",
            "song_rating": song_rating
        }),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    body["songs"]["id"].as_i64().unwrap()
}

/// Create a playlist through the API and return its id
pub async fn create_playlist(app: &Router, playlist_name: &str) -> i64 {
    let (status, body) = send_json(
        app,
        "POST",
        "/api/v1/playlists",
        serde_json::json!({ "playlist_name": playlist_name }),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    body["playlist"]["id"].as_i64().unwrap()
}
