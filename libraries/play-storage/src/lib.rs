//! Play Storage
//!
//! `SQLite` database layer for the Play back end.
//!
//! This crate provides persistent storage for songs, playlists, and the
//! playlist-song association, exposed through [`SqliteGateway`], the
//! `SQLite` implementation of [`play_core::Gateway`].
//!
//! # Architecture
//!
//! - **Vertical Slicing**: Each table owns its own queries (`songs`,
//!   `playlists`, `playlist_songs`)
//! - **Embedded Migrations**: The schema ships inside the binary and is applied
//!   on connect
//!
//! # Example
//!
//! ```rust,no_run
//! use play_core::Gateway;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let gateway = play_storage::connect("sqlite://play.db").await?;
//!
//! let songs = gateway.get_all_songs().await?;
//! # Ok(())
//! # }
//! ```

mod context;
mod error;

// Vertical slices
pub mod playlist_songs;
pub mod playlists;
pub mod songs;

pub use context::SqliteGateway;
pub use error::StorageError;

use sqlx::migrate::Migrator;
use sqlx::sqlite::SqlitePool;

// Embed migrations into binary
static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Run database migrations
///
/// This should be called once when the application starts to ensure
/// the database schema is up to date.
///
/// # Errors
///
/// Returns an error if migrations fail to run
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::migrate::MigrateError> {
    MIGRATOR.run(pool).await
}

/// Create a new `SQLite` pool
///
/// In-memory URLs get a single, never-recycled connection: every `SQLite`
/// connection to `:memory:` opens its own empty database.
///
/// # Arguments
///
/// * `database_url` - `SQLite` connection string (e.g., `<sqlite://play.db>`)
///
/// # Errors
///
/// Returns an error if the connection fails
pub async fn create_pool(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
    use std::str::FromStr;

    tracing::debug!("Creating pool with URL: {}", database_url);

    let in_memory = database_url.contains(":memory:");

    let mut options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true)
        .busy_timeout(std::time::Duration::from_secs(30));

    if !in_memory {
        options = options.journal_mode(SqliteJournalMode::Wal);

        if let Some(parent) = options.get_filename().parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
    }

    let pool_options = if in_memory {
        SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
    } else {
        SqlitePoolOptions::new().max_connections(5)
    };

    let pool = pool_options.connect_with(options).await?;

    tracing::debug!("Pool created");

    Ok(pool)
}

/// Open the database, apply migrations, and wrap the pool in a gateway
///
/// # Errors
///
/// Returns an error if the connection or a migration fails
pub async fn connect(database_url: &str) -> Result<SqliteGateway, StorageError> {
    let pool = create_pool(database_url).await?;
    run_migrations(&pool)
        .await
        .map_err(|e| StorageError::Migration(e.to_string()))?;

    Ok(SqliteGateway::new(pool))
}
