//! Configuration management for the Audius mood radio.
//!
//! This module handles loading and accessing configuration values from environment
//! variables and `.env` files. Every value has a default so the service can run
//! without any configuration at all.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the working directory
//! 3. `.env` file in the local data directory
//! 4. Application defaults

use std::{env, path::PathBuf, str::FromStr, time::Duration};

pub const DEFAULT_SERVER_ADDRESS: &str = "127.0.0.1:3000";
pub const DEFAULT_AUDIUS_API_URL: &str = "https://api.audius.co/v1";
pub const DEFAULT_AUDIUS_SITE_URL: &str = "https://audius.co";
pub const DEFAULT_AUDIUS_APP_NAME: &str = "audius-radio";
pub const DEFAULT_AUDIUS_API_KEY: &str = "test";
pub const DEFAULT_SEARCH_LIMIT: u32 = 30;
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

/// Loads environment variables from `.env` files.
///
/// Reads `.env` from the working directory first, then from the platform-specific
/// local data directory under `audius-radio/.env`. Since `dotenv` never overrides
/// variables that are already set, the process environment always wins and the
/// working directory file wins over the data directory one.
///
/// # Directory Structure
///
/// The data directory file is looked up in:
/// - Linux: `~/.local/share/audius-radio/.env`
/// - macOS: `~/Library/Application Support/audius-radio/.env`
/// - Windows: `%LOCALAPPDATA%/audius-radio/.env`
///
/// Missing files are not an error.
///
/// # Errors
///
/// Returns an error if the data directory cannot be created or an existing
/// `.env` file cannot be parsed.
///
/// # Example
///
/// ```
/// use audius_radio::config;
///
/// #[tokio::main]
/// async fn main() {
///     if let Err(e) = config::load_env().await {
///         eprintln!("Configuration error: {}", e);
///     }
/// }
/// ```
pub async fn load_env() -> Result<(), String> {
    let _ = dotenv::dotenv();

    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("audius-radio/.env");
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    if path.is_file() {
        dotenv::from_path(&path).map_err(|e| e.to_string())?;
    }
    Ok(())
}

fn var_or(key: &str, default: &str) -> String {
    env::var(key)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

fn parsed_var_or<T: FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.trim().parse::<T>().ok())
        .unwrap_or(default)
}

/// Returns the address the HTTP service binds to.
///
/// Reads `SERVER_ADDRESS`, e.g. `0.0.0.0:8080`. Defaults to `127.0.0.1:3000`.
pub fn server_addr() -> String {
    var_or("SERVER_ADDRESS", DEFAULT_SERVER_ADDRESS)
}

/// Returns the Audius API base URL (`AUDIUS_API_URL`).
pub fn audius_apiurl() -> String {
    var_or("AUDIUS_API_URL", DEFAULT_AUDIUS_API_URL)
}

/// Returns the Audius web site URL that track permalinks are relative to.
///
/// Reads `AUDIUS_SITE_URL`. Resolve requests and embed URLs are built from it.
pub fn audius_siteurl() -> String {
    var_or("AUDIUS_SITE_URL", DEFAULT_AUDIUS_SITE_URL)
}

/// Returns the `app_name` sent with catalog searches (`AUDIUS_APP_NAME`).
pub fn audius_app_name() -> String {
    var_or("AUDIUS_APP_NAME", DEFAULT_AUDIUS_APP_NAME)
}

/// Returns the `api_key` sent with every upstream request (`AUDIUS_API_KEY`).
pub fn audius_api_key() -> String {
    var_or("AUDIUS_API_KEY", DEFAULT_AUDIUS_API_KEY)
}

/// Returns the page size for tag searches (`AUDIUS_SEARCH_LIMIT`).
pub fn audius_search_limit() -> u32 {
    parsed_var_or("AUDIUS_SEARCH_LIMIT", DEFAULT_SEARCH_LIMIT)
}

/// Returns the timeout applied to each upstream call.
///
/// Reads `AUDIUS_REQUEST_TIMEOUT_SECS`, a whole number of seconds.
pub fn audius_request_timeout() -> Duration {
    Duration::from_secs(parsed_var_or(
        "AUDIUS_REQUEST_TIMEOUT_SECS",
        DEFAULT_REQUEST_TIMEOUT_SECS,
    ))
}

/// Everything the Audius client needs to talk to the upstream service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudiusConfig {
    pub api_url: String,
    pub site_url: String,
    pub app_name: String,
    pub api_key: String,
    pub search_limit: u32,
    pub timeout: Duration,
}

impl AudiusConfig {
    pub fn from_env() -> Self {
        Self {
            api_url: audius_apiurl(),
            site_url: audius_siteurl(),
            app_name: audius_app_name(),
            api_key: audius_api_key(),
            search_limit: audius_search_limit(),
            timeout: audius_request_timeout(),
        }
    }

    /// Default configuration pointed at a different API base, e.g. a local fake.
    pub fn with_api_url(api_url: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into(),
            ..Self::default()
        }
    }
}

impl Default for AudiusConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_AUDIUS_API_URL.to_string(),
            site_url: DEFAULT_AUDIUS_SITE_URL.to_string(),
            app_name: DEFAULT_AUDIUS_APP_NAME.to_string(),
            api_key: DEFAULT_AUDIUS_API_KEY.to_string(),
            search_limit: DEFAULT_SEARCH_LIMIT,
            timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }
}
