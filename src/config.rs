//! Configuration management for the link converter.
//!
//! This module handles loading and accessing configuration values from environment
//! variables and `.env` files. Every value has a working default, so the converter
//! runs without any configuration at all.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. Application defaults

use std::{env, path::PathBuf, time::Duration};

/// Relay every outbound request is prefixed with unless overridden.
pub const DEFAULT_PROXY_URL: &str = "https://cors-anywhere.herokuapp.com/";

/// Per-request timeout in seconds unless overridden.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Bind address of the converter web app unless overridden.
pub const DEFAULT_SERVER_ADDRESS: &str = "127.0.0.1:8080";

/// Loads environment variables from a `.env` file in the local data directory.
///
/// Creates the necessary directory structure if it doesn't exist and loads
/// environment variables from `deezlink/.env` inside the platform-specific
/// local data directory:
/// - Linux: `~/.local/share/deezlink/.env`
/// - macOS: `~/Library/Application Support/deezlink/.env`
/// - Windows: `%LOCALAPPDATA%/deezlink/.env`
///
/// A missing `.env` file is not an error; variables already present in the
/// process environment always win over the file.
///
/// # Errors
///
/// Returns an error string if the directory cannot be created or an existing
/// `.env` file cannot be parsed.
pub async fn load_env() -> Result<(), String> {
    let path = env_path();
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    if !path.is_file() {
        return Ok(());
    }

    dotenv::from_path(&path)
        .map(|_| ())
        .map_err(|e| format!("Failed to load {}: {}", path.display(), e))
}

/// Location of the `.env` file read by [`load_env`].
pub fn env_path() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("deezlink/.env");
    path
}

/// Returns the base URL of the CORS relay.
///
/// Reads `DEEZLINK_PROXY_URL`. An explicitly empty value disables the relay
/// and requests go out directly.
///
/// # Example
///
/// ```
/// let proxy = proxy_url(); // e.g., "https://cors-anywhere.herokuapp.com/"
/// ```
pub fn proxy_url() -> String {
    env::var("DEEZLINK_PROXY_URL").unwrap_or_else(|_| DEFAULT_PROXY_URL.to_string())
}

/// Returns the timeout applied to every outbound request.
///
/// Reads `DEEZLINK_TIMEOUT_SECS`; unparsable or zero values fall back to
/// [`DEFAULT_TIMEOUT_SECS`].
pub fn request_timeout() -> Duration {
    let secs = env::var("DEEZLINK_TIMEOUT_SECS")
        .ok()
        .and_then(|v| v.trim().parse::<u64>().ok())
        .filter(|secs| *secs > 0)
        .unwrap_or(DEFAULT_TIMEOUT_SECS);
    Duration::from_secs(secs)
}

/// Returns the bind address for the converter web app.
///
/// Reads `DEEZLINK_SERVER_ADDRESS`.
///
/// # Example
///
/// ```
/// let addr = server_addr(); // e.g., "127.0.0.1:8080"
/// ```
pub fn server_addr() -> String {
    env::var("DEEZLINK_SERVER_ADDRESS").unwrap_or_else(|_| DEFAULT_SERVER_ADDRESS.to_string())
}

/// Returns whether verbose diagnostics were requested through `DEEZLINK_VERBOSE`.
pub fn verbose() -> bool {
    match env::var("DEEZLINK_VERBOSE") {
        Ok(v) => {
            let v = v.trim().to_lowercase();
            !v.is_empty() && v != "0" && v != "false"
        }
        Err(_) => false,
    }
}

/// Settings a converter is built from.
///
/// Constructed once per process and handed to [`crate::convert::Converter::new`].
#[derive(Debug, Clone)]
pub struct Settings {
    pub proxy_url: String,
    pub timeout: Duration,
}

impl Settings {
    /// Gathers the settings from the environment.
    pub fn from_env() -> Self {
        Self {
            proxy_url: proxy_url(),
            timeout: request_timeout(),
        }
    }

    /// Settings that route requests through the given relay.
    pub fn with_proxy(proxy_url: impl Into<String>) -> Self {
        Self {
            proxy_url: proxy_url.into(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::with_proxy(DEFAULT_PROXY_URL)
    }
}
