use crate::core::{Result, SessionError};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Top-level configuration structure parsed from a TOML file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub database: DatabaseConfig,
}

/// Database file and connection pool settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// Database file, relative to the working directory unless absolute.
    pub path: PathBuf,
    /// Upper bound on pooled connections.
    pub pool_size: u32,
    /// How long a checkout waits for a connection before giving up.
    pub connection_timeout_ms: u64,
    /// Enforce foreign keys on every new connection.
    pub foreign_keys: bool,
    /// How long a statement waits on a locked database.
    pub busy_timeout_ms: u64,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        DatabaseConfig {
            path: PathBuf::from("newdb.sqlite"),
            pool_size: 4,
            connection_timeout_ms: 5_000,
            foreign_keys: true,
            busy_timeout_ms: 5_000,
        }
    }
}

impl DatabaseConfig {
    /// Default settings pointed at another database file.
    pub fn with_path<P: Into<PathBuf>>(path: P) -> Self {
        DatabaseConfig {
            path: path.into(),
            ..DatabaseConfig::default()
        }
    }
}

impl Config {
    /// Parses configuration from TOML text and validates it.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Config =
            toml::from_str(content).map_err(|e| SessionError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects settings the pool cannot be built from.
    pub fn validate(&self) -> Result<()> {
        if self.database.pool_size == 0 {
            return Err(SessionError::Config(
                "database.pool_size must be greater than zero".to_string(),
            ));
        }
        if self.database.path.as_os_str().is_empty() {
            return Err(SessionError::Config(
                "database.path must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// Loads configuration from a TOML file at the given path.
///
/// Missing keys fall back to their defaults, so an empty file yields
/// `Config::default()`.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Config::from_toml_str(&content)
}
