use bytes::Bytes;
use reqwest::Method;
use reqwest::header::CONTENT_TYPE;
use serde::{Serialize, de::DeserializeOwned};
use tracing::debug;

use crate::{config::Config, error::LineError, types::content::ContentResponse};

/// LINE Messaging API client
///
/// The client is generic over a [`Config`] implementation that provides
/// authentication and API configuration. Each operation issues exactly one
/// HTTP request; its future resolves exactly once, with the typed response or
/// a normalized [`LineError`]. Concurrent calls are independent and share
/// only the underlying connection pool.
#[derive(Debug, Clone)]
pub struct Client<C: Config> {
    http: reqwest::Client,
    config: C,
}

impl Client<crate::config::LineConfig> {
    /// Creates a new client with default configuration
    ///
    /// Uses environment variables:
    /// - `LINE_BOT_CHANNEL_TOKEN` for the channel access token
    /// - `LINE_BOT_API_ENDPOINT` for a custom API endpoint
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(crate::config::LineConfig::new())
    }
}

impl<C: Config + Default> Default for Client<C> {
    fn default() -> Self {
        Self::with_config(C::default())
    }
}

impl<C: Config> Client<C> {
    /// Creates a new client with the given configuration.
    ///
    /// # Panics
    ///
    /// Panics if the reqwest client cannot be built.
    #[must_use]
    pub fn with_config(config: C) -> Self {
        Self {
            http: reqwest::Client::builder()
                .connect_timeout(std::time::Duration::from_secs(5))
                .timeout(std::time::Duration::from_secs(60))
                .build()
                .expect("reqwest client"),
            config,
        }
    }

    /// Replaces the HTTP client with a custom one
    ///
    /// Useful for setting custom timeouts, proxies, or other HTTP
    /// configuration; this layer adds no timeout policy of its own.
    #[must_use]
    pub fn with_http_client(mut self, http: reqwest::Client) -> Self {
        self.http = http;
        self
    }

    /// Returns a reference to the client's configuration
    #[must_use]
    pub const fn config(&self) -> &C {
        &self.config
    }

    fn builder(&self, method: Method, path: &str) -> Result<reqwest::RequestBuilder, LineError> {
        Ok(self
            .http
            .request(method, self.config.url(path))
            .headers(self.config.headers()?))
    }

    /// Sends one request and normalizes the outcome: a 2xx status yields the
    /// fully-read body, any other status becomes a remote rejection, and a
    /// transport failure becomes a status-less rejection.
    async fn send(&self, builder: reqwest::RequestBuilder) -> Result<Bytes, LineError> {
        self.config.validate_auth()?;

        let request = builder.build()?;
        debug!(method = %request.method(), url = %request.url(), "dispatching request");

        let response = self
            .http
            .execute(request)
            .await
            .map_err(LineError::transport)?;

        let status = response.status();
        let bytes = response.bytes().await.map_err(LineError::transport)?;
        debug!(status = status.as_u16(), len = bytes.len(), "response received");

        if status.is_success() {
            Ok(bytes)
        } else {
            Err(LineError::remote(status, &bytes))
        }
    }

    pub(crate) async fn get<O: DeserializeOwned>(&self, path: &str) -> Result<O, LineError> {
        let bytes = self.send(self.builder(Method::GET, path)?).await?;
        parse(&bytes)
    }

    pub(crate) async fn get_with_query<Q, O>(&self, path: &str, query: &Q) -> Result<O, LineError>
    where
        Q: Serialize + Sync + ?Sized,
        O: DeserializeOwned,
    {
        let bytes = self
            .send(self.builder(Method::GET, path)?.query(query))
            .await?;
        parse(&bytes)
    }

    pub(crate) async fn post<I, O>(&self, path: &str, body: I) -> Result<O, LineError>
    where
        I: Serialize + Send + Sync,
        O: DeserializeOwned,
    {
        let bytes = self
            .send(self.builder(Method::POST, path)?.json(&body))
            .await?;
        parse(&bytes)
    }

    pub(crate) async fn post_no_body<O: DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<O, LineError> {
        let bytes = self.send(self.builder(Method::POST, path)?).await?;
        parse(&bytes)
    }

    /// POST without a request body whose successful response carries no
    /// payload. Callers map the unit result onto the success sentinel.
    pub(crate) async fn post_empty(&self, path: &str) -> Result<(), LineError> {
        self.send(self.builder(Method::POST, path)?)
            .await
            .map(|_| ())
    }

    pub(crate) async fn post_json_empty<I>(&self, path: &str, body: I) -> Result<(), LineError>
    where
        I: Serialize + Send + Sync,
    {
        self.send(self.builder(Method::POST, path)?.json(&body))
            .await
            .map(|_| ())
    }

    /// POST a raw binary body with an explicit content type (image upload).
    pub(crate) async fn post_octet(
        &self,
        path: &str,
        content_type: &str,
        content: Bytes,
    ) -> Result<(), LineError> {
        let builder = self
            .builder(Method::POST, path)?
            .header(CONTENT_TYPE, content_type)
            .body(content);
        self.send(builder).await.map(|_| ())
    }

    pub(crate) async fn delete(&self, path: &str) -> Result<(), LineError> {
        self.send(self.builder(Method::DELETE, path)?)
            .await
            .map(|_| ())
    }

    /// GET whose successful response is a binary body. The body is handed to
    /// the caller as a stream inside [`ContentResponse`]; a failure while
    /// constructing that wrapper is normalized rather than propagated raw.
    pub(crate) async fn get_content(&self, path: &str) -> Result<ContentResponse, LineError> {
        self.config.validate_auth()?;

        let request = self.builder(Method::GET, path)?.build()?;
        debug!(url = %request.url(), "dispatching content request");

        let response = self
            .http
            .execute(request)
            .await
            .map_err(LineError::transport)?;

        let status = response.status();
        if !status.is_success() {
            let bytes = response.bytes().await.map_err(LineError::transport)?;
            return Err(LineError::remote(status, &bytes));
        }

        ContentResponse::from_response(response)
    }
}

fn parse<O: DeserializeOwned>(bytes: &[u8]) -> Result<O, LineError> {
    serde_json::from_slice(bytes).map_err(|e| LineError::decode(e, bytes))
}
