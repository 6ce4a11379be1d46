/// HTTP routing
use crate::{api, state::AppState};
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, TraceLayer},
};

/// Build the application router over the given state
pub fn create_router(app_state: AppState) -> Router {
    let api_routes = Router::new()
        // Songs
        .route(
            "/songs",
            get(api::songs::list_songs).post(api::songs::create_song),
        )
        .route("/favorites", get(api::songs::list_songs))
        .route(
            "/songs/:id",
            get(api::songs::get_song)
                .patch(api::songs::update_song)
                .delete(api::songs::delete_song),
        )
        // Playlists
        .route(
            "/playlists",
            get(api::playlists::list_playlists).post(api::playlists::create_playlist),
        )
        .route(
            "/playlists/:id/songs",
            get(api::playlists::get_playlist_songs),
        )
        .route(
            "/playlists/:id/songs/:song_id",
            post(api::playlist_songs::add_song_to_playlist),
        );

    Router::new()
        .route("/", get(api::root::index))
        .nest("/api/v1", api_routes)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::default().include_headers(true)),
        )
        .layer(CorsLayer::permissive())
        .with_state(app_state)
}
