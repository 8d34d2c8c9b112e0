//! Member portal client over one cookie session

use std::time::Duration;

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use cowork_core::MemberPortal;
use cowork_domain::constants::PUBLIC_LOCALE_PATH;
use cowork_domain::{CoworkError, InvoiceData, MemberCoworker, Profile, PublicApiConfig, User};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, info, instrument};

use crate::errors::ApiError;
use crate::http::{read_json, unwrap_value, HttpClient};

/// Client for one member's portal session.
///
/// The cookie store belongs to this instance; create one client per member.
#[derive(Debug, Clone)]
pub struct PublicApiClient {
    http: HttpClient,
    space_url: String,
}

impl PublicApiClient {
    /// Create a client for `https://{subdomain}.{domain}/en`.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Config` if the HTTP client cannot be built
    pub fn new(config: &PublicApiConfig) -> Result<Self, ApiError> {
        let space_url =
            format!("https://{}.{}{}", config.subdomain, config.domain, PUBLIC_LOCALE_PATH);
        Self::with_space_url(config, space_url)
    }

    /// Create a client against an explicit portal URL (mirrors, tests).
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Config` if the HTTP client cannot be built
    pub fn with_space_url(
        config: &PublicApiConfig,
        space_url: impl Into<String>,
    ) -> Result<Self, ApiError> {
        let credentials = STANDARD.encode(format!("{}:{}", config.email, config.password));
        let mut authorization = HeaderValue::from_str(&format!("Basic {credentials}"))
            .map_err(|_| ApiError::Config("credentials are not a valid header value".into()))?;
        authorization.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, authorization);
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http = HttpClient::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .default_headers(headers)
            .accept_invalid_certs(config.accept_invalid_certs)
            .cookie_store(true)
            .build()?;

        let space_url = space_url.into().trim_end_matches('/').to_string();
        info!(subdomain = %config.subdomain, "created member portal client");

        Ok(Self { http, space_url })
    }

    /// Portal URL every resource path is appended to.
    pub fn space_url(&self) -> &str {
        &self.space_url
    }

    /// User and coworker halves of the member's profile.
    pub async fn get_profile(&self) -> Result<Profile, ApiError> {
        self.get("/profile").await
    }

    /// Coworker half of the profile.
    pub async fn get_coworker(&self) -> Result<MemberCoworker, ApiError> {
        self.get("/profile?_resource=Coworker").await
    }

    /// Login account of the member.
    pub async fn get_user(&self) -> Result<User, ApiError> {
        self.get("/profile?_resource=User").await
    }

    /// Invoices exactly as the portal returns them.
    pub async fn get_invoices(&self) -> Result<InvoiceData, ApiError> {
        self.get("/invoices").await
    }

    #[instrument(skip(self))]
    async fn get<R: DeserializeOwned>(&self, resource: &str) -> Result<R, ApiError> {
        let url = format!("{}{resource}", self.space_url);
        debug!(%url, "GET portal resource");

        let response = self.http.send(self.http.request(Method::GET, &url)).await?;
        let body: Value = read_json(response).await?;

        serde_json::from_value(unwrap_value(body))
            .map_err(|e| ApiError::Decode { url, reason: e.to_string() })
    }
}

#[async_trait]
impl MemberPortal for PublicApiClient {
    async fn profile(&self) -> Result<Profile, CoworkError> {
        Ok(self.get_profile().await?)
    }

    async fn coworker(&self) -> Result<MemberCoworker, CoworkError> {
        Ok(self.get_coworker().await?)
    }

    async fn user(&self) -> Result<User, CoworkError> {
        Ok(self.get_user().await?)
    }

    async fn invoices(&self) -> Result<InvoiceData, CoworkError> {
        Ok(self.get_invoices().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_tenant_url() {
        let config = PublicApiConfig::new("downtown", "ada@example.com", "pw");
        let client = PublicApiClient::new(&config).unwrap();

        assert_eq!(client.space_url(), "https://downtown.spaces.nexudus.com/en");
    }

    #[test]
    fn custom_domain_is_respected() {
        let mut config = PublicApiConfig::new("downtown", "ada@example.com", "pw");
        config.domain = "portal.example.org".into();
        let client = PublicApiClient::new(&config).unwrap();

        assert_eq!(client.space_url(), "https://downtown.portal.example.org/en");
    }
}
