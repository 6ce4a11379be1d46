//! Domain types for Play

mod playlist;
mod song;

pub use playlist::{CreatePlaylist, Playlist, PlaylistId, PlaylistWithSongs};
pub use song::{CreateSong, Song, SongId, UpdateSong, MAX_SONG_RATING, MIN_SONG_RATING};
