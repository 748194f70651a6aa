use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use secrecy::{ExposeSecret, SecretString};

use crate::error::LineError;

/// Default LINE Messaging API endpoint
pub const LINE_DEFAULT_ENDPOINT: &str = "https://api.line.me";
/// Environment variable holding the channel access token
pub const ENV_CHANNEL_TOKEN: &str = "LINE_BOT_CHANNEL_TOKEN";
/// Environment variable overriding the API endpoint
pub const ENV_API_ENDPOINT: &str = "LINE_BOT_API_ENDPOINT";

/// Configuration for the LINE Messaging API client
///
/// Debug output automatically redacts the channel token via [`SecretString`].
#[derive(Clone, Debug)]
pub struct LineConfig {
    api_endpoint: String,
    channel_token: Option<SecretString>,
}

impl Default for LineConfig {
    fn default() -> Self {
        let channel_token = std::env::var(ENV_CHANNEL_TOKEN)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .map(SecretString::from);

        let api_endpoint = std::env::var(ENV_API_ENDPOINT)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| LINE_DEFAULT_ENDPOINT.into());

        Self {
            api_endpoint,
            channel_token,
        }
    }
}

impl LineConfig {
    /// Creates a new configuration with default settings
    ///
    /// Attempts to read from environment variables:
    /// - `LINE_BOT_CHANNEL_TOKEN` for the channel access token
    /// - `LINE_BOT_API_ENDPOINT` for a custom API endpoint (defaults to
    ///   `https://api.line.me`)
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API endpoint
    #[must_use]
    pub fn with_api_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.api_endpoint = endpoint.into();
        self
    }

    /// Sets the channel access token
    #[must_use]
    pub fn with_channel_token(mut self, token: impl Into<String>) -> Self {
        self.channel_token = Some(SecretString::from(token.into()));
        self
    }

    /// Returns the configured API endpoint
    #[must_use]
    pub fn api_endpoint(&self) -> &str {
        &self.api_endpoint
    }
}

/// Configuration trait for the LINE client
///
/// Implement this trait to provide custom authentication and API
/// configuration.
pub trait Config: Send + Sync {
    /// Returns HTTP headers to include in requests
    ///
    /// # Errors
    ///
    /// Returns an error if header values contain invalid characters.
    fn headers(&self) -> Result<HeaderMap, LineError>;

    /// Constructs the full URL for an API endpoint
    fn url(&self, path: &str) -> String;

    /// Validates that authentication credentials are present.
    ///
    /// # Errors
    ///
    /// Returns an error if authentication is not properly configured.
    fn validate_auth(&self) -> Result<(), LineError>;
}

impl Config for LineConfig {
    fn headers(&self) -> Result<HeaderMap, LineError> {
        let mut h = HeaderMap::new();

        if let Some(secret) = &self.channel_token {
            let token = secret.expose_secret().trim();
            if !token.is_empty() {
                let v = format!("Bearer {token}");
                h.insert(
                    AUTHORIZATION,
                    HeaderValue::from_str(&v).map_err(|_| {
                        LineError::config("Invalid channel access token value")
                    })?,
                );
            }
        }

        Ok(h)
    }

    fn url(&self, path: &str) -> String {
        let base = self.api_endpoint.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{base}/{path}")
    }

    fn validate_auth(&self) -> Result<(), LineError> {
        match &self.channel_token {
            Some(secret) if !secret.expose_secret().trim().is_empty() => Ok(()),
            _ => Err(LineError::config(
                "Missing LINE credentials: set LINE_BOT_CHANNEL_TOKEN environment variable",
            )),
        }
    }
}
