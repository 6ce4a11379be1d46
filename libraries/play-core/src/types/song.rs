/// Song domain types
use serde::{Deserialize, Serialize};

/// Song identifier (database-generated)
pub type SongId = i64;

/// Lowest accepted `song_rating`
pub const MIN_SONG_RATING: i64 = 1;

/// Highest accepted `song_rating`
pub const MAX_SONG_RATING: i64 = 100;

/// Song with its public columns
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Song {
    pub id: SongId,
    pub name: String,
    pub artist_name: String,
    pub genre: String,
    /// Always within `MIN_SONG_RATING..=MAX_SONG_RATING`
    pub song_rating: i64,
}

/// Validated input for inserting a song
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateSong {
    pub name: String,
    pub artist_name: String,
    pub genre: String,
    pub song_rating: i64,
}

/// Validated partial update of a song
///
/// Fields left as `None` keep their stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateSong {
    pub name: Option<String>,
    pub artist_name: Option<String>,
    pub genre: Option<String>,
    pub song_rating: Option<i64>,
}

impl UpdateSong {
    /// True when no column would change
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.artist_name.is_none()
            && self.genre.is_none()
            && self.song_rating.is_none()
    }
}
