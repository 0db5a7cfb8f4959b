//! Environment-driven server configuration.

use std::path::PathBuf;

use crate::server::error::config::ConfigError;

/// Directory profile pictures are written to when `UPLOAD_DIR` is not set.
pub const DEFAULT_UPLOAD_DIR: &str = "./uploads";
/// Port the server listens on when `PORT` is not set.
pub const DEFAULT_PORT: u16 = 3000;

/// Server configuration read from environment variables.
pub struct Config {
    /// Postgres connection string (`DATABASE_URL`)
    pub database_url: String,
    /// Valkey/Redis connection string for the session store (`VALKEY_URL`)
    pub valkey_url: String,
    /// Directory uploaded profile pictures are stored in (`UPLOAD_DIR`)
    pub upload_dir: PathBuf,
    /// Port to listen on (`PORT`)
    pub port: u16,
}

impl Config {
    /// Loads configuration from the environment.
    ///
    /// # Returns
    /// - `Ok(Config)` - All required variables present and valid
    /// - `Err(ConfigError::MissingEnvVar)` - `DATABASE_URL` or `VALKEY_URL` not set
    /// - `Err(ConfigError::InvalidEnvValue)` - `PORT` is not a valid port number
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required =
            |var: &str| lookup(var).ok_or_else(|| ConfigError::MissingEnvVar(var.to_string()));

        let port = match lookup("PORT") {
            Some(port) => port.parse::<u16>().map_err(|e| ConfigError::InvalidEnvValue {
                var: "PORT".to_string(),
                reason: e.to_string(),
            })?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            valkey_url: required("VALKEY_URL")?,
            upload_dir: lookup("UPLOAD_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_UPLOAD_DIR)),
            port,
        })
    }
}
