//! Admin API configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `PAWHUB_API_URL` - Base URL of the PawHub backend API
//!
//! ## Optional
//! - `PAWHUB_API_TOKEN` - Bearer token for authenticated requests
//! - `PAWHUB_API_TIMEOUT_SECS` - Request timeout in seconds (default: 30)

use std::env;
use std::time::Duration;

use secrecy::SecretString;
use thiserror::Error;
use url::Url;

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Backend API configuration for the admin console.
///
/// Implements `Debug` manually to redact the API token.
#[derive(Clone)]
pub struct AdminApiConfig {
    /// Base URL of the backend API. Always ends with a slash so that
    /// relative endpoint paths join onto it correctly.
    pub base_url: Url,
    /// Bearer token for authenticated requests.
    pub api_token: Option<SecretString>,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl std::fmt::Debug for AdminApiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminApiConfig")
            .field("base_url", &self.base_url.as_str())
            .field("api_token", &self.api_token.as_ref().map(|_| "[REDACTED]"))
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl AdminApiConfig {
    /// Load configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if `PAWHUB_API_URL` is missing or unparseable,
    /// or if `PAWHUB_API_TIMEOUT_SECS` is not a positive integer.
    pub fn from_env() -> Result<Self, ConfigError> {
        let raw_url = get_required_env("PAWHUB_API_URL")?;
        let base_url = parse_base_url(&raw_url)
            .map_err(|e| ConfigError::InvalidEnvVar("PAWHUB_API_URL".to_string(), e))?;

        let api_token = get_optional_env("PAWHUB_API_TOKEN").map(SecretString::from);

        let timeout_secs = match get_optional_env("PAWHUB_API_TIMEOUT_SECS") {
            Some(raw) => parse_timeout_secs(&raw).map_err(|e| {
                ConfigError::InvalidEnvVar("PAWHUB_API_TIMEOUT_SECS".to_string(), e)
            })?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Self {
            base_url,
            api_token,
            timeout: Duration::from_secs(timeout_secs),
        })
    }

    /// Load a `.env` file if present, then read the environment.
    ///
    /// # Errors
    ///
    /// Same as [`Self::from_env`].
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_env()
    }
}

fn get_required_env(key: &str) -> Result<String, ConfigError> {
    env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_string()))
}

fn get_optional_env(key: &str) -> Option<String> {
    env::var(key).ok()
}

/// Parse the request timeout.
///
/// Zero is rejected: a zero-duration client timeout would fail every
/// request before it leaves the socket.
fn parse_timeout_secs(raw: &str) -> Result<u64, String> {
    match raw.parse::<u64>() {
        Ok(0) => Err("timeout must be a positive integer".to_string()),
        Ok(secs) => Ok(secs),
        Err(e) => Err(e.to_string()),
    }
}

/// Parse and normalize the API base URL.
///
/// The path component is forced to end with a slash; `Url::join` treats
/// a path without a trailing slash as a file and would drop its last
/// segment when joining endpoint paths.
fn parse_base_url(raw: &str) -> Result<Url, String> {
    let mut url = Url::parse(raw).map_err(|e| e.to_string())?;

    if url.cannot_be_a_base() {
        return Err("URL cannot be used as a base".to_string());
    }

    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }

    Ok(url)
}
