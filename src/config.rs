//! Configuration management for the top tracks service.
//!
//! This module handles loading and accessing configuration values from environment
//! variables and `.env` files. It provides a centralized way to manage application
//! configuration including Spotify API credentials, server settings and the
//! snapshot database location.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the working directory
//! 3. `.env` file in the local data directory
//! 4. Application defaults (where applicable)

use std::{env, net::SocketAddr, path::PathBuf, str::FromStr};

use crate::error::AppError;

pub const DEFAULT_SCOPE: &str = "user-top-read";
pub const DEFAULT_AUTH_URL: &str = "https://accounts.spotify.com/authorize";
pub const DEFAULT_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
pub const DEFAULT_API_URL: &str = "https://api.spotify.com/v1";
pub const DEFAULT_SERVER_ADDRESS: &str = "127.0.0.1:3000";

/// Loads environment variables from `.env` files.
///
/// A `.env` in the working directory is read first, then the one located in the
/// platform-specific local data directory under `toptracks/.env`. Variables that
/// are already set are never overwritten, so the process environment wins.
/// Missing files are skipped: a fully populated environment needs no file at all.
///
/// # Directory Structure
///
/// The data directory file is looked up in:
/// - Linux: `~/.local/share/toptracks/.env`
/// - macOS: `~/Library/Application Support/toptracks/.env`
/// - Windows: `%LOCALAPPDATA%/toptracks/.env`
///
/// # Errors
///
/// Returns [`AppError::Io`] if the data directory cannot be created and
/// [`AppError::Config`] if an existing `.env` file cannot be parsed.
pub async fn load_env() -> Result<(), AppError> {
    if PathBuf::from(".env").is_file() {
        dotenv::dotenv().map_err(|e| AppError::Config(format!(".env: {e}")))?;
    }

    let path = data_dir().join(".env");
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent).await?;
    }

    if path.is_file() {
        dotenv::from_path(&path)
            .map_err(|e| AppError::Config(format!("{}: {e}", path.display())))?;
    }
    Ok(())
}

/// Local data directory of the application (`<data_local_dir>/toptracks`).
pub fn data_dir() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("toptracks");
    path
}

/// Default snapshot database, an sqlite file inside [`data_dir`].
pub fn default_database_url() -> String {
    format!(
        "sqlite://{}",
        data_dir().join("toptracks.db").to_string_lossy()
    )
}

/// Returns the snapshot database URL.
///
/// Reads `DATABASE_URL` and falls back to [`default_database_url`]. Used by
/// commands that only need the store, without Spotify credentials.
pub fn database_url() -> String {
    env::var("DATABASE_URL")
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(default_database_url)
}

/// Runtime configuration of the service.
#[derive(Debug, Clone)]
pub struct Config {
    pub server_address: SocketAddr,
    pub client_id: String,
    pub client_secret: String,
    pub redirect_uri: String,
    pub scope: String,
    pub auth_url: String,
    pub token_url: String,
    pub api_url: String,
    pub database_url: String,
}

impl Config {
    /// Reads the configuration from the process environment.
    ///
    /// # Example
    ///
    /// ```
    /// config::load_env().await?;
    /// let config = Config::from_env()?;
    /// println!("listening on {}", config.server_address);
    /// ```
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    ///
    /// Required keys are `SPOTIFY_API_AUTH_CLIENT_ID`,
    /// `SPOTIFY_API_AUTH_CLIENT_SECRET` and `SPOTIFY_API_REDIRECT_URI`. Every
    /// other key falls back to its default. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let required = |key: &str| {
            get(key).ok_or_else(|| AppError::Config(format!("{key} must be set")))
        };
        let or_default = |key: &str, default: &str| get(key).unwrap_or_else(|| default.to_string());

        let address = or_default("SERVER_ADDRESS", DEFAULT_SERVER_ADDRESS);
        let server_address = SocketAddr::from_str(&address).map_err(|e| {
            AppError::Config(format!("SERVER_ADDRESS '{address}' is invalid: {e}"))
        })?;

        Ok(Self {
            server_address,
            client_id: required("SPOTIFY_API_AUTH_CLIENT_ID")?,
            client_secret: required("SPOTIFY_API_AUTH_CLIENT_SECRET")?,
            redirect_uri: required("SPOTIFY_API_REDIRECT_URI")?,
            scope: or_default("SPOTIFY_API_AUTH_SCOPE", DEFAULT_SCOPE),
            auth_url: or_default("SPOTIFY_API_AUTH_URL", DEFAULT_AUTH_URL),
            token_url: or_default("SPOTIFY_API_TOKEN_URL", DEFAULT_TOKEN_URL),
            api_url: or_default("SPOTIFY_API_URL", DEFAULT_API_URL)
                .trim_end_matches('/')
                .to_string(),
            database_url: get("DATABASE_URL").unwrap_or_else(default_database_url),
        })
    }
}
