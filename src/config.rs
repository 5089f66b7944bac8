//! Configuration management for the musetunes playlist builder.
//!
//! Values come from environment variables, optionally seeded from a `.env`
//! file in the local data directory. Every setting except the client id has
//! a default; a missing client id is not an error here but is reported as a
//! configuration error the first time an access token is needed.

use std::{env, path::PathBuf, time::Duration};

use url::Url;

use crate::error::{Error, Result};

pub const DEFAULT_REDIRECT_URI: &str = "http://127.0.0.1:8888/callback";
pub const DEFAULT_SCOPE: &str = "playlist-modify-public";
pub const DEFAULT_AUTH_URL: &str = "https://accounts.spotify.com/authorize";
pub const DEFAULT_API_URL: &str = "https://api.spotify.com/v1";
pub const DEFAULT_SERVER_ADDRESS: &str = "127.0.0.1:8888";
pub const DEFAULT_REDIRECT_TIMEOUT_SECS: u64 = 120;

/// Loads environment variables from `<data_local_dir>/musetunes/.env`.
///
/// Creates the directory if needed. A missing `.env` file is not an error:
/// the process environment alone may carry the configuration.
///
/// # Directory Structure
///
/// - Linux: `~/.local/share/musetunes/.env`
/// - macOS: `~/Library/Application Support/musetunes/.env`
/// - Windows: `%LOCALAPPDATA%/musetunes/.env`
pub async fn load_env() -> Result<()> {
    let path = data_dir().join(".env");
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent).await?;
    }

    if path.is_file() {
        dotenv::from_path(&path).map_err(|e| Error::Configuration(e.to_string()))?;
    }
    Ok(())
}

/// Root directory for everything musetunes keeps on disk.
pub fn data_dir() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("musetunes");
    path
}

/// Provider endpoints and OAuth client settings.
#[derive(Debug, Clone)]
pub struct Config {
    pub client_id: Option<String>,
    pub redirect_uri: String,
    pub scope: String,
    pub auth_url: String,
    pub api_url: String,
    pub server_address: String,
    pub redirect_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            client_id: None,
            redirect_uri: DEFAULT_REDIRECT_URI.to_string(),
            scope: DEFAULT_SCOPE.to_string(),
            auth_url: DEFAULT_AUTH_URL.to_string(),
            api_url: DEFAULT_API_URL.to_string(),
            server_address: DEFAULT_SERVER_ADDRESS.to_string(),
            redirect_timeout: Duration::from_secs(DEFAULT_REDIRECT_TIMEOUT_SECS),
        }
    }
}

impl Config {
    /// Reads the configuration from the process environment.
    ///
    /// An empty `SPOTIFY_API_AUTH_CLIENT_ID` counts as unset.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            client_id: env::var("SPOTIFY_API_AUTH_CLIENT_ID")
                .ok()
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty()),
            redirect_uri: var_or("SPOTIFY_API_REDIRECT_URI", defaults.redirect_uri),
            scope: var_or("SPOTIFY_API_AUTH_SCOPE", defaults.scope),
            auth_url: var_or("SPOTIFY_API_AUTH_URL", defaults.auth_url),
            api_url: var_or("SPOTIFY_API_URL", defaults.api_url),
            server_address: var_or("SERVER_ADDRESS", defaults.server_address),
            redirect_timeout: env::var("REDIRECT_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse::<u64>().ok())
                .map(Duration::from_secs)
                .unwrap_or(defaults.redirect_timeout),
        }
    }

    /// Builds `{api_url}/<segments...>`, percent-encoding each segment.
    pub fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = Url::parse(&self.api_url)?;
        url.path_segments_mut()
            .map_err(|_| Error::Configuration(format!("{} cannot be a base URL", self.api_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}

fn var_or(key: &str, default: String) -> String {
    env::var(key)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or(default)
}
