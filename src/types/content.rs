//! Binary content downloaded from the platform

use bytes::Bytes;
use futures::stream::BoxStream;
use futures::{StreamExt, TryStreamExt};
use reqwest::header::{self, HeaderMap};

use crate::error::LineError;

/// Body stream of a [`ContentResponse`].
pub type ContentStream = BoxStream<'static, Result<Bytes, reqwest::Error>>;

/// The advertised `Content-Length` is peer-controlled; preallocation in
/// [`ContentResponse::into_bytes`] never exceeds this, the buffer grows with
/// the bytes actually received.
const PREALLOC_CAP: u64 = 1024 * 1024;

/// A fetched binary resource (message content or rich menu image) plus its
/// metadata.
///
/// The body stream is a single-consumer resource: once the response resolves
/// it is exclusively owned by the caller, who is responsible for draining or
/// dropping it on every exit path. The client performs no cleanup after
/// handoff.
pub struct ContentResponse {
    /// Value of the `Content-Length` header; 0 when the header is absent
    pub length: u64,
    /// Value of the `Content-Type` header
    pub mime_type: String,
    /// All response headers
    pub headers: HeaderMap,
    stream: ContentStream,
}

impl ContentResponse {
    /// Builds the typed wrapper from a successful raw response. Metadata
    /// problems (missing or malformed headers) surface as normalized
    /// conversion errors, never as panics.
    pub(crate) fn from_response(response: reqwest::Response) -> Result<Self, LineError> {
        let headers = response.headers().clone();

        let mime_type = headers
            .get(header::CONTENT_TYPE)
            .ok_or_else(|| LineError::conversion("response has no Content-Type header"))?
            .to_str()
            .map_err(|e| LineError::conversion(format!("invalid Content-Type header: {e}")))?
            .to_owned();

        let length = match headers.get(header::CONTENT_LENGTH) {
            Some(v) => v
                .to_str()
                .ok()
                .and_then(|v| v.trim().parse::<u64>().ok())
                .ok_or_else(|| LineError::conversion("invalid Content-Length header"))?,
            None => 0,
        };

        Ok(Self {
            length,
            mime_type,
            headers,
            stream: response.bytes_stream().boxed(),
        })
    }

    /// Consumes the response and returns the body stream.
    #[must_use]
    pub fn into_stream(self) -> ContentStream {
        self.stream
    }

    /// Drains the body stream into a single buffer.
    ///
    /// # Errors
    ///
    /// Returns a transport error if reading the body fails mid-stream.
    pub async fn into_bytes(mut self) -> Result<Bytes, LineError> {
        let mut buf =
            Vec::with_capacity(usize::try_from(self.length.min(PREALLOC_CAP)).unwrap_or(0));
        while let Some(chunk) = self
            .stream
            .try_next()
            .await
            .map_err(LineError::transport)?
        {
            buf.extend_from_slice(&chunk);
        }
        Ok(buf.into())
    }
}

impl std::fmt::Debug for ContentResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContentResponse")
            .field("length", &self.length)
            .field("mime_type", &self.mime_type)
            .field("headers", &self.headers)
            .finish_non_exhaustive()
    }
}
