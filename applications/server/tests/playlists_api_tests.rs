/// Playlists API integration tests
/// Covers playlist creation, nested listings and song association
mod common;

use axum::http::StatusCode;
use common::*;
use serde_json::json;

#[tokio::test]
async fn test_create_playlist() {
    let (app, _) = create_test_app().await;

    let (status, body) = send_json(
        &app,
        "POST",
        "/api/v1/playlists",
        json!({ "playlist_name": "Road Trip" }),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert!(body["playlist"]["id"].is_i64());
    assert_eq!(body["playlist"]["playlist_name"], "Road Trip");
}

#[tokio::test]
async fn test_create_playlist_missing_name() {
    let (app, gateway) = create_test_app().await;

    for payload in [json!({}), json!({ "playlist_name": "" }), json!({ "name": "Mix" })] {
        let (status, body) = send_json(&app, "POST", "/api/v1/playlists", payload).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body,
            json!({ "error": "Expected format: { playlist_name: <String> }." })
        );
    }

    assert!(gateway.get_playlist(1).await.unwrap().is_none());
}

#[tokio::test]
async fn test_associate_song_with_playlist() {
    let (app, _) = create_test_app().await;
    let playlist_id = create_playlist(&app, "Road Trip").await;
    let song_id = create_song(&app, "Highway", 88).await;

    let (status, body) = send_json(
        &app,
        "POST",
        &format!("/api/v1/playlists/{}/songs/{}", playlist_id, song_id),
        json!({}),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(
        body,
        json!({ "message": "Successfully added Highway to Road Trip" })
    );

    let (status, body) =
        get_json(&app, &format!("/api/v1/playlists/{}/songs", playlist_id)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "id": playlist_id,
            "playlist_name": "Road Trip",
            "songs": [{
                "id": song_id,
                "name": "Highway",
                "artist_name": "Highway Artist",
                "genre": "Rock",
                "song_rating": 88
            }]
        })
    );
}

#[tokio::test]
async fn test_associate_twice_keeps_one_membership() {
    let (app, _) = create_test_app().await;
    let playlist_id = create_playlist(&app, "Repeat").await;
    let song_id = create_song(&app, "Loop", 80).await;
    let uri = format!("/api/v1/playlists/{}/songs/{}", playlist_id, song_id);

    for _ in 0..2 {
        let (status, _) = send(&app, "POST", &uri).await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (_, body) = get_json(&app, &format!("/api/v1/playlists/{}/songs", playlist_id)).await;
    assert_eq!(body["songs"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_associate_missing_playlist() {
    let (app, gateway) = create_test_app().await;
    let song_id = create_song(&app, "Orphan", 10).await;

    let (status, bytes) = send(&app, "POST", &format!("/api/v1/playlists/42/songs/{}", song_id)).await;
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "Playlist with ID 42 does not exist" }));
    assert!(gateway.get_playlist_songs(42).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_associate_missing_song() {
    let (app, gateway) = create_test_app().await;
    let playlist_id = create_playlist(&app, "Empty").await;

    let (status, bytes) = send(
        &app,
        "POST",
        &format!("/api/v1/playlists/{}/songs/99", playlist_id),
    )
    .await;
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "Song with ID 99 does not exist" }));
    assert!(gateway
        .get_playlist_songs(playlist_id)
        .await
        .unwrap()
        .is_empty());
}

#[tokio::test]
async fn test_associate_both_missing_reports_playlist() {
    let (app, _) = create_test_app().await;

    let (status, bytes) = send(&app, "POST", "/api/v1/playlists/3/songs/4").await;
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "Playlist with ID 3 does not exist" }));
}

#[tokio::test]
async fn test_get_songs_of_missing_playlist() {
    let (app, _) = create_test_app().await;

    let (status, body) = get_json(&app, "/api/v1/playlists/12/songs").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "Playlist with ID 12 does not exist" }));
}

#[tokio::test]
async fn test_get_songs_of_empty_playlist() {
    let (app, _) = create_test_app().await;
    let playlist_id = create_playlist(&app, "Quiet").await;

    let (status, body) =
        get_json(&app, &format!("/api/v1/playlists/{}/songs", playlist_id)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({ "id": playlist_id, "playlist_name": "Quiet", "songs": [] })
    );
}

#[tokio::test]
async fn test_list_playlists_with_nested_songs() {
    let (app, _) = create_test_app().await;

    let first = create_playlist(&app, "First").await;
    create_playlist(&app, "Empty").await;
    let song_id = create_song(&app, "Shared", 70).await;

    let (status, _) = send(
        &app,
        "POST",
        &format!("/api/v1/playlists/{}/songs/{}", first, song_id),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = get_json(&app, "/api/v1/playlists").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!([
            {
                "id": first,
                "playlist_name": "First",
                "songs": [{
                    "id": song_id,
                    "name": "Shared",
                    "artist_name": "Shared Artist",
                    "genre": "Rock",
                    "song_rating": 70
                }]
            }
        ])
    );
}

#[tokio::test]
async fn test_list_playlists_without_songs_is_empty() {
    let (app, _) = create_test_app().await;
    create_playlist(&app, "Nothing Here").await;

    let (status, body) = get_json(&app, "/api/v1/playlists").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_deleted_song_leaves_playlists() {
    let (app, _) = create_test_app().await;
    let playlist_id = create_playlist(&app, "Fading").await;
    let song_id = create_song(&app, "Gone", 20).await;

    send(
        &app,
        "POST",
        &format!("/api/v1/playlists/{}/songs/{}", playlist_id, song_id),
    )
    .await;
    let (status, _) = send(&app, "DELETE", &format!("/api/v1/songs/{}", song_id)).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (_, body) = get_json(&app, &format!("/api/v1/playlists/{}/songs", playlist_id)).await;
    assert_eq!(body["songs"], json!([]));
}
