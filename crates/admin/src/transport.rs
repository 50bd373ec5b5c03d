//! HTTP transport for the PawHub backend API.
//!
//! The console only ever talks to the backend through the [`Transport`]
//! trait, so tests can substitute a scripted implementation and the
//! rest of the crate never sees `reqwest` directly.

use async_trait::async_trait;
use reqwest::{Method, StatusCode};
use secrecy::{ExposeSecret, SecretString};
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, instrument, warn};
use url::Url;

use crate::config::AdminApiConfig;

/// Errors that can occur when talking to the backend API.
#[derive(Debug, Error)]
pub enum TransportError {
    /// HTTP request failed before a response arrived.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Backend rejected the request with a non-2xx status.
    ///
    /// `body` holds whatever JSON the backend sent alongside the status,
    /// or `Value::Null` when the body was empty or not JSON. The error
    /// normalizer knows how to unwrap the backend's message from it.
    #[error("API error: status {status}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Parsed response body, `Null` if unavailable.
        body: Value,
    },

    /// Authentication failed (HTTP 401).
    ///
    /// Like `Api`, keeps whatever JSON the backend sent so the error
    /// normalizer can surface its message.
    #[error("Unauthorized: invalid or expired API token")]
    Unauthorized {
        /// Parsed response body, `Null` if unavailable.
        body: Value,
    },

    /// Response body could not be parsed into the expected shape.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Endpoint path could not be joined onto the base URL.
    #[error("Invalid request path: {0}")]
    Path(#[from] url::ParseError),
}

/// Request function contract the console depends on.
///
/// `Ok` carries the parsed JSON response body (`Value::Null` for empty
/// bodies, e.g. deletes); `Err` carries the failure for the error
/// normalizer to unwrap.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Issue one request against the backend.
    async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<Value, TransportError>;
}

/// `reqwest`-backed [`Transport`] implementation.
#[derive(Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: Url,
    api_token: Option<SecretString>,
}

impl std::fmt::Debug for HttpTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpTransport")
            .field("base_url", &self.base_url.as_str())
            .field("api_token", &self.api_token.as_ref().map(|_| "[REDACTED]"))
            .finish_non_exhaustive()
    }
}

impl HttpTransport {
    /// Create a transport from config.
    ///
    /// # Errors
    ///
    /// Returns `TransportError::Http` if the underlying client cannot
    /// be constructed.
    pub fn new(config: &AdminApiConfig) -> Result<Self, TransportError> {
        let client = reqwest::Client::builder().timeout(config.timeout).build()?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            api_token: config.api_token.clone(),
        })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    #[instrument(skip(self, body), fields(method = %method, path = %path))]
    async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<Value, TransportError> {
        // Paths are relative to the base URL; a leading slash would
        // reset to the host root and drop any base path prefix.
        let url = self.base_url.join(path.trim_start_matches('/'))?;

        let mut request = self.client.request(method, url);

        if let Some(token) = &self.api_token {
            request = request.bearer_auth(token.expose_secret());
        }

        if let Some(body) = body {
            request = request.json(&body);
        }

        let response = request.send().await?;
        let status = response.status();

        if status == StatusCode::UNAUTHORIZED {
            let body = response.json::<Value>().await.unwrap_or(Value::Null);
            warn!("backend rejected credentials");
            return Err(TransportError::Unauthorized { body });
        }

        if !status.is_success() {
            let body = response.json::<Value>().await.unwrap_or(Value::Null);
            warn!(status = status.as_u16(), "backend rejected request");
            return Err(TransportError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let text = response.text().await?;
        if text.is_empty() {
            debug!("request completed with empty body");
            return Ok(Value::Null);
        }

        let value = serde_json::from_str(&text)?;
        debug!("request completed");
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_error_display() {
        let err = TransportError::Api {
            status: 503,
            body: Value::Null,
        };
        assert_eq!(err.to_string(), "API error: status 503");

        let err = TransportError::Unauthorized { body: Value::Null };
        assert_eq!(err.to_string(), "Unauthorized: invalid or expired API token");
    }

    #[test]
    fn test_debug_redacts_token() {
        let config = AdminApiConfig {
            base_url: Url::parse("https://api.pawhub.example/").unwrap(),
            api_token: Some(SecretString::from("super-secret".to_string())),
            timeout: std::time::Duration::from_secs(5),
        };
        let transport = HttpTransport::new(&config).unwrap();
        let debug = format!("{transport:?}");
        assert!(!debug.contains("super-secret"));
    }
}
