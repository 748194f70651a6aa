use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Body bytes quoted in derived error messages are capped at this length.
const MESSAGE_SNIPPET_LIMIT: usize = 400;

/// The single error shape every failed client operation rejects with.
///
/// Remote rejections (a response with a non-2xx status) carry the status code
/// and the full raw body text. Transport failures (no response received) and
/// local conversion failures carry neither; the original failure is retained
/// as the error source where one exists.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct LineError {
    /// HTTP status code of the rejected response. `None` when no response was
    /// received or the failure happened while converting a successful one.
    pub status_code: Option<u16>,
    /// Raw response body text of a remote rejection.
    pub raw_body: Option<String>,
    /// Human-readable description of the failure.
    pub message: String,
    #[source]
    source: Option<Box<dyn std::error::Error + Send + Sync + 'static>>,
}

impl LineError {
    /// A completed but unsuccessful response. The body is fully read by the
    /// caller before this point; no network resource is retained.
    pub(crate) fn remote(status: StatusCode, body: &[u8]) -> Self {
        let raw_body = String::from_utf8_lossy(body).into_owned();

        let message = serde_json::from_slice::<ErrorResponse>(body)
            .ok()
            .map(|e| e.message)
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| {
                if raw_body.trim().is_empty() {
                    format!("API returned HTTP {status}")
                } else {
                    snippet(body)
                }
            });

        Self {
            status_code: Some(status.as_u16()),
            raw_body: Some(raw_body),
            message,
            source: None,
        }
    }

    /// A transport-level failure: no response was obtained.
    pub(crate) fn transport(e: reqwest::Error) -> Self {
        Self {
            status_code: None,
            raw_body: None,
            message: e.to_string(),
            source: Some(Box::new(e)),
        }
    }

    /// A 2xx response whose body failed to deserialize.
    pub(crate) fn decode(e: serde_json::Error, body: &[u8]) -> Self {
        Self {
            status_code: None,
            raw_body: None,
            message: format!("{e}: {}", snippet(body)),
            source: Some(Box::new(e)),
        }
    }

    /// A local failure converting a successful response into its typed result.
    pub(crate) fn conversion(message: impl Into<String>) -> Self {
        Self {
            status_code: None,
            raw_body: None,
            message: message.into(),
            source: None,
        }
    }

    /// An invalid or incomplete client configuration.
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self {
            status_code: None,
            raw_body: None,
            message: message.into(),
            source: None,
        }
    }
}

impl From<reqwest::Error> for LineError {
    fn from(e: reqwest::Error) -> Self {
        Self::transport(e)
    }
}

fn snippet(body: &[u8]) -> String {
    String::from_utf8_lossy(&body[..body.len().min(MESSAGE_SNIPPET_LIMIT)]).into_owned()
}

/// Error payload returned by the LINE platform on rejected requests.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct ErrorResponse {
    /// Summary of the failure
    pub message: String,
    /// Per-field details, empty unless the request body was invalid
    pub details: Vec<ErrorDetail>,
}

/// One entry of [`ErrorResponse::details`].
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct ErrorDetail {
    /// What is wrong with the property
    pub message: String,
    /// The offending request property
    pub property: Option<String>,
}
