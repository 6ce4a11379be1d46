//! Request payload validation
//!
//! Pure checks run before any database access. Each function turns a raw
//! payload into a normalized domain input or a [`ValidationError`] carrying the
//! field (and offending value) involved. Response wording lives in
//! [`crate::error`]; nothing here formats client-facing text.

use play_core::types::{CreatePlaylist, CreateSong, UpdateSong, MAX_SONG_RATING, MIN_SONG_RATING};
use serde_json::{Map, Value};
use std::fmt;
use thiserror::Error;

/// Raw request payload, keyed by field name in the order the client sent it
pub type RawPayload = Map<String, Value>;

/// Song fields, in the order presence is checked
pub const SONG_FIELDS: [&str; 4] = ["name", "artist_name", "genre", "song_rating"];

pub const SONG_RATING: &str = "song_rating";
pub const PLAYLIST_NAME: &str = "playlist_name";

/// Payload family a field belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Schema {
    Song,
    Playlist,
}

impl fmt::Display for Schema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Schema::Song => write!(f, "song"),
            Schema::Playlist => write!(f, "playlist"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Required field absent or falsy
    #[error("{schema} payload is missing {field}")]
    MissingField { schema: Schema, field: &'static str },

    /// Integer outside its accepted domain
    #[error("{field} out of range: {value}")]
    OutOfRange { field: &'static str, value: String },

    /// Key not accepted by a partial update
    #[error("unknown field {0}")]
    UnknownField(String),

    /// Field present but of the wrong kind
    #[error("{field} must be {expected}, got {value}")]
    WrongType {
        field: &'static str,
        expected: &'static str,
        value: String,
    },
}

/// Validate a song creation payload
///
/// Presence of every field is checked first, in [`SONG_FIELDS`] order, so the
/// first missing field is the one reported.
pub fn validate_create_song(payload: &RawPayload) -> Result<CreateSong, ValidationError> {
    for field in SONG_FIELDS {
        if is_missing(payload.get(field)) {
            return Err(ValidationError::MissingField {
                schema: Schema::Song,
                field,
            });
        }
    }

    Ok(CreateSong {
        name: string_field(payload, "name")?,
        artist_name: string_field(payload, "artist_name")?,
        genre: string_field(payload, "genre")?,
        song_rating: rating_field(payload)?,
    })
}

/// Validate a partial song update
///
/// Any key outside [`SONG_FIELDS`] fails. Fields that are present go through
/// the same rules as on creation. An empty payload is a valid no-op.
pub fn validate_update_song(payload: &RawPayload) -> Result<UpdateSong, ValidationError> {
    if let Some(unknown) = payload
        .keys()
        .find(|key| !SONG_FIELDS.contains(&key.as_str()))
    {
        return Err(ValidationError::UnknownField(unknown.clone()));
    }

    for field in SONG_FIELDS {
        if payload.contains_key(field) && is_missing(payload.get(field)) {
            return Err(ValidationError::MissingField {
                schema: Schema::Song,
                field,
            });
        }
    }

    let present = |field: &str| payload.contains_key(field);

    Ok(UpdateSong {
        name: present("name")
            .then(|| string_field(payload, "name"))
            .transpose()?,
        artist_name: present("artist_name")
            .then(|| string_field(payload, "artist_name"))
            .transpose()?,
        genre: present("genre")
            .then(|| string_field(payload, "genre"))
            .transpose()?,
        song_rating: present(SONG_RATING)
            .then(|| rating_field(payload))
            .transpose()?,
    })
}

/// Validate a playlist creation payload
pub fn validate_create_playlist(payload: &RawPayload) -> Result<CreatePlaylist, ValidationError> {
    if is_missing(payload.get(PLAYLIST_NAME)) {
        return Err(ValidationError::MissingField {
            schema: Schema::Playlist,
            field: PLAYLIST_NAME,
        });
    }

    Ok(CreatePlaylist {
        playlist_name: string_field(payload, PLAYLIST_NAME)?,
    })
}

/// Absent, null, false, zero, and blank strings all count as missing
fn is_missing(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null | Value::Bool(false)) => true,
        Some(Value::String(s)) => s.trim().is_empty(),
        Some(Value::Number(n)) => n.as_f64() == Some(0.0),
        Some(_) => false,
    }
}

fn string_field(payload: &RawPayload, field: &'static str) -> Result<String, ValidationError> {
    match payload.get(field) {
        Some(Value::String(s)) => Ok(s.trim().to_string()),
        other => Err(ValidationError::WrongType {
            field,
            expected: "a string",
            value: other.map(Value::to_string).unwrap_or_default(),
        }),
    }
}

/// Read `song_rating` as an integer within the accepted range
///
/// Form-encoded bodies only carry strings, so integer strings are accepted.
fn rating_field(payload: &RawPayload) -> Result<i64, ValidationError> {
    let Some(value) = payload.get(SONG_RATING) else {
        return Err(ValidationError::MissingField {
            schema: Schema::Song,
            field: SONG_RATING,
        });
    };

    let wrong_type = || ValidationError::WrongType {
        field: SONG_RATING,
        expected: "an integer",
        value: value.to_string(),
    };
    let out_of_range = |shown: String| ValidationError::OutOfRange {
        field: SONG_RATING,
        value: shown,
    };

    let rating = match value {
        Value::Number(n) => {
            if let Some(v) = n.as_i64() {
                v
            } else if n.is_u64() {
                return Err(out_of_range(n.to_string()));
            } else {
                match n.as_f64() {
                    Some(f) if f.is_finite() && f.fract() == 0.0 => {
                        if f < MIN_SONG_RATING as f64 || f > MAX_SONG_RATING as f64 {
                            return Err(out_of_range(f.to_string()));
                        }
                        f as i64
                    }
                    _ => return Err(wrong_type()),
                }
            }
        }
        Value::String(s) => s.trim().parse::<i64>().map_err(|_| wrong_type())?,
        _ => return Err(wrong_type()),
    };

    if !(MIN_SONG_RATING..=MAX_SONG_RATING).contains(&rating) {
        return Err(out_of_range(rating.to_string()));
    }

    Ok(rating)
}
