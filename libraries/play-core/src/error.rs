/// Core error types for Play
use thiserror::Error;

/// Result type alias using `PlayError`
pub type Result<T> = std::result::Result<T, PlayError>;

/// Core error type for Play
///
/// Every failure raised behind the [`crate::Gateway`] seam ends up here. The
/// server maps all of them to a 500 response.
#[derive(Error, Debug)]
pub enum PlayError {
    /// Database errors (for storage implementations)
    #[error("Database error: {0}")]
    Database(String),

    /// A stored value could not be decoded
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
}

#[cfg(feature = "sqlx-support")]
impl From<sqlx::Error> for PlayError {
    fn from(err: sqlx::Error) -> Self {
        Self::Database(err.to_string())
    }
}
