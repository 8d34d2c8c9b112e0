//! Single-attempt HTTP client with per-client transport settings

use std::time::Duration;

use cowork_domain::constants::{DEFAULT_TIMEOUT_SECS, USER_AGENT};
use reqwest::{Client as ReqwestClient, Method, RequestBuilder, Response};
use tracing::{debug, warn};

use crate::errors::ApiError;

/// HTTP client with a per-request timeout and per-client TLS settings.
///
/// Requests are sent exactly once; callers decide what a failure means.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: ReqwestClient,
}

impl HttpClient {
    /// Start building a new HTTP client.
    pub fn builder() -> HttpClientBuilder {
        HttpClientBuilder::default()
    }

    /// Convenience constructor with default configuration.
    pub fn new() -> Result<Self, ApiError> {
        Self::builder().build()
    }

    /// Create a request builder using the underlying reqwest client.
    pub fn request<U>(&self, method: Method, url: U) -> RequestBuilder
    where
        U: reqwest::IntoUrl,
    {
        self.client.request(method, url)
    }

    /// Execute the provided request builder.
    ///
    /// Any status is returned as a response; only network and protocol
    /// failures become [`ApiError::Transport`].
    pub async fn send(&self, builder: RequestBuilder) -> Result<Response, ApiError> {
        let request = builder.build()?;

        let method = request.method().clone();
        let url = request.url().clone();
        debug!(%method, url = %url.path(), "sending HTTP request");

        match self.client.execute(request).await {
            Ok(response) => {
                let status = response.status();
                debug!(%method, url = %url.path(), %status, "received HTTP response");
                Ok(response)
            }
            Err(err) => {
                debug!(%method, url = %url.path(), error = %err, "HTTP request failed");
                Err(ApiError::Transport(err))
            }
        }
    }
}

/// Builder for [`HttpClient`].
#[derive(Debug)]
pub struct HttpClientBuilder {
    timeout: Duration,
    user_agent: Option<String>,
    default_headers: Option<reqwest::header::HeaderMap>,
    accept_invalid_certs: bool,
    cookie_store: bool,
}

impl Default for HttpClientBuilder {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: Some(USER_AGENT.to_string()),
            default_headers: None,
            accept_invalid_certs: false,
            cookie_store: false,
        }
    }
}

impl HttpClientBuilder {
    /// Per-request timeout covering connect, send and body.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Replace the default user agent.
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    /// Headers sent with every request of the built client.
    pub fn default_headers(mut self, headers: reqwest::header::HeaderMap) -> Self {
        self.default_headers = Some(headers);
        self
    }

    /// Skip certificate verification for this client only.
    ///
    /// Applies to connections made by the built client and nothing else.
    pub fn accept_invalid_certs(mut self, enabled: bool) -> Self {
        self.accept_invalid_certs = enabled;
        self
    }

    /// Keep cookies set by the server for subsequent requests of this client.
    pub fn cookie_store(mut self, enabled: bool) -> Self {
        self.cookie_store = enabled;
        self
    }

    /// Build the client.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Config` if reqwest rejects the configuration
    pub fn build(self) -> Result<HttpClient, ApiError> {
        let mut builder = ReqwestClient::builder().timeout(self.timeout);

        if let Some(agent) = self.user_agent {
            builder = builder.user_agent(agent);
        }

        if let Some(headers) = self.default_headers {
            builder = builder.default_headers(headers);
        }

        if self.accept_invalid_certs {
            warn!("TLS certificate verification disabled for this client");
            builder = builder.danger_accept_invalid_certs(true);
        }

        if self.cookie_store {
            builder = builder.cookie_store(true);
        }

        let client = builder
            .build()
            .map_err(|err| ApiError::Config(format!("failed to build HTTP client: {err}")))?;

        Ok(HttpClient { client })
    }
}
