/// Server configuration
use crate::error::{Result, ServerError};
use serde::{Deserialize, Serialize};
use std::{
    fmt,
    path::{Path, PathBuf},
    str::FromStr,
};

/// Environment variable selecting the configuration profile
pub const PROFILE_ENV: &str = "PLAY_ENV";

/// Environment variable overriding the listening port
pub const PORT_ENV: &str = "PORT";

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;

/// Named configuration profile
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Profile {
    #[default]
    Development,
    Test,
    Production,
}

impl Profile {
    /// Read the profile from `PLAY_ENV`, falling back to development
    pub fn from_env() -> Result<Self> {
        match std::env::var(PROFILE_ENV) {
            Ok(value) if !value.trim().is_empty() => value.parse(),
            _ => Ok(Profile::default()),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Profile::Development => "development",
            Profile::Test => "test",
            Profile::Production => "production",
        }
    }

    pub fn default_database_url(&self) -> &'static str {
        match self {
            Profile::Development => "sqlite://./data/play_development.db",
            Profile::Test => "sqlite::memory:",
            Profile::Production => "sqlite://./data/play.db",
        }
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Profile {
    type Err = ServerError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(Profile::Development),
            "test" => Ok(Profile::Test),
            "production" | "prod" => Ok(Profile::Production),
            other => Err(ServerError::Config(format!(
                "Unknown profile '{}' (expected development, test or production)",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(skip, default)]
    pub profile: Profile,

    pub server: ServerSettings,

    pub storage: StorageSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageSettings {
    pub database_url: String,
}

impl ServerConfig {
    /// Load configuration for the profile named by `PLAY_ENV`.
    ///
    /// Layers, later wins: profile defaults, `config/<profile>.toml`,
    /// `PLAY_*` environment variables (`__` between sections), `PORT`.
    pub fn load() -> Result<Self> {
        let profile = Profile::from_env()?;
        let port = port_from_env()?;
        Self::load_from(profile, Path::new("config"), port)
    }

    /// Load configuration for an explicit profile and config directory
    pub fn load_from(profile: Profile, config_dir: &Path, port: Option<u16>) -> Result<Self> {
        let config_file: PathBuf = config_dir.join(profile.as_str());

        let settings = config::Config::builder()
            .set_default("server.host", DEFAULT_HOST)?
            .set_default("server.port", i64::from(DEFAULT_PORT))?
            .set_default("storage.database_url", profile.default_database_url())?
            .add_source(
                config::File::with_name(&config_file.to_string_lossy())
                    .format(config::FileFormat::Toml)
                    .required(false),
            )
            .add_source(
                config::Environment::with_prefix("PLAY")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_override_option("server.port", port.map(i64::from))?
            .build()?;

        let mut config: ServerConfig = settings.try_deserialize()?;
        config.profile = profile;

        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.server.host.trim().is_empty() {
            return Err(ServerError::Config("Server host is required".to_string()));
        }

        if self.server.host.parse::<std::net::IpAddr>().is_err() {
            return Err(ServerError::Config(format!(
                "Server host '{}' is not an IP address",
                self.server.host
            )));
        }

        if !self.storage.database_url.starts_with("sqlite:") {
            return Err(ServerError::Config(format!(
                "Unsupported database URL '{}' (set PLAY_STORAGE__DATABASE_URL)",
                self.storage.database_url
            )));
        }

        Ok(())
    }
}

fn port_from_env() -> Result<Option<u16>> {
    match std::env::var(PORT_ENV) {
        Ok(value) if !value.trim().is_empty() => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ServerError::Config(format!("Invalid {} value '{}'", PORT_ENV, value))),
        _ => Ok(None),
    }
}
