//! Admin API client with pagination and error normalization
//!
//! Wraps the key-authenticated REST endpoints. Every record type is served
//! by the same four operations; the typed helpers at the bottom only fix the
//! type parameter.

use std::time::Duration;

use async_trait::async_trait;
use cowork_core::RecordStore;
use cowork_domain::constants::FIRST_PAGE;
use cowork_domain::{
    AdminApiConfig, Business, CheckIn, CoworkError, Coworker, ListEnvelope, QueryOptions,
    RecordId, Resource, WebHook,
};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use reqwest::Method;
use serde::Deserialize;
use tracing::{debug, info, instrument};

use super::query::ResolvedQuery;
use crate::errors::ApiError;
use crate::http::{read_json, read_unit, HttpClient};

/// Record id inside a write response; the rest of `Value` is ignored.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct SavedRecord {
    id: Option<RecordId>,
}

/// Envelope of a write response, reduced to what `save` reads.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct SaveResponse {
    value: Option<SavedRecord>,
}

/// Client for the admin REST API.
#[derive(Debug, Clone)]
pub struct AdminApiClient {
    http: HttpClient,
    base_url: String,
}

impl AdminApiClient {
    /// Create a new admin client
    ///
    /// # Arguments
    ///
    /// * `config` - API key, base URL and transport settings
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Config` if the key cannot be used as a header value
    /// or the HTTP client cannot be built
    pub fn new(config: &AdminApiConfig) -> Result<Self, ApiError> {
        let mut authorization = HeaderValue::from_str(&format!("Basic {}", config.api_key))
            .map_err(|_| ApiError::Config("API key contains invalid header characters".into()))?;
        authorization.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, authorization);
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http = HttpClient::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .default_headers(headers)
            .accept_invalid_certs(config.accept_invalid_certs)
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Create a client for the default endpoint with the given API key.
    pub fn with_api_key(api_key: impl Into<String>) -> Result<Self, ApiError> {
        Self::new(&AdminApiConfig::new(api_key))
    }

    /// Fetch one record by id.
    ///
    /// # Errors
    ///
    /// Returns the normalized `ApiError` for transport failures, error
    /// statuses and undecodable bodies
    #[instrument(skip(self), fields(module = T::MODULE))]
    pub async fn get_one<T: Resource>(&self, id: RecordId) -> Result<T, ApiError> {
        let url = self.record_url::<T>(id);
        debug!(%url, "GET record");

        let response = self.http.send(self.http.request(Method::GET, &url)).await?;
        read_json(response).await
    }

    /// Fetch every record matching `options`, following pagination.
    ///
    /// Pages are requested one after another with the largest page size the
    /// API allows. Records are returned in server order. A failure on any
    /// page fails the whole call and discards the pages already received.
    ///
    /// # Errors
    ///
    /// Returns the normalized `ApiError` of the first failing page
    #[instrument(skip(self), fields(module = T::MODULE))]
    pub async fn get_list<T: Resource>(&self, options: &QueryOptions) -> Result<Vec<T>, ApiError> {
        let query = ResolvedQuery::new::<T>(&self.base_url, options);
        let mut records = Vec::new();
        let mut page = FIRST_PAGE;

        loop {
            debug!(url = %query.url, page, "GET list page");
            let request = self.http.request(Method::GET, &query.url).query(&query.params(page));
            let response = self.http.send(request).await?;
            let envelope: ListEnvelope<T> = read_json(response).await?;

            let received = envelope.records.len();
            records.extend(envelope.records);
            debug!(page, received, total = records.len(), "appended list page");

            if !envelope.has_next_page {
                break;
            }
            page += 1;
        }

        info!(pages = page, count = records.len(), "list query complete");
        Ok(records)
    }

    /// Create or update a record and return its id.
    ///
    /// Records without an id are created with POST, others updated with PUT.
    /// Only the id is returned because the vendor answers PUT with nothing
    /// else; the full written state arrives later through webhooks.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Vendor` if the vendor rejects the write (including
    /// HTTP 200 with `WasSuccessful: false`), `ApiError::Decode` if the
    /// response lacks the id, and the usual transport errors
    #[instrument(skip(self, record), fields(module = T::MODULE, id = ?record.id()))]
    pub async fn save<T: Resource>(&self, record: &T) -> Result<RecordId, ApiError> {
        let url = self.collection_url::<T>();
        let method = if record.id().is_some() { Method::PUT } else { Method::POST };
        debug!(%method, %url, "saving record");

        let response = self.http.send(self.http.request(method, &url).json(record)).await?;
        let saved: SaveResponse = read_json(response).await?;

        let id = saved.value.and_then(|value| value.id).ok_or_else(|| ApiError::Decode {
            url: url.clone(),
            reason: "response does not contain the record id".into(),
        })?;

        info!(id, "record saved");
        Ok(id)
    }

    /// Delete a record by id.
    ///
    /// # Errors
    ///
    /// Returns the normalized `ApiError`
    #[instrument(skip(self), fields(module = T::MODULE))]
    pub async fn remove<T: Resource>(&self, id: RecordId) -> Result<(), ApiError> {
        let url = self.record_url::<T>(id);
        debug!(%url, "DELETE record");

        let response = self.http.send(self.http.request(Method::DELETE, &url)).await?;
        read_unit(response).await?;

        info!(id, "record deleted");
        Ok(())
    }

    /// Fetch one business.
    ///
    /// The helpers below fix the record type of the generic operations and
    /// return the same errors.
    pub async fn get_business(&self, id: RecordId) -> Result<Business, ApiError> {
        self.get_one(id).await
    }

    /// List businesses, following pagination.
    pub async fn get_businesses(&self, options: &QueryOptions) -> Result<Vec<Business>, ApiError> {
        self.get_list(options).await
    }

    /// Create or update a business.
    pub async fn save_business(&self, business: &Business) -> Result<RecordId, ApiError> {
        self.save(business).await
    }

    /// Delete a business.
    pub async fn delete_business(&self, id: RecordId) -> Result<(), ApiError> {
        self.remove::<Business>(id).await
    }

    /// Fetch one coworker.
    pub async fn get_coworker(&self, id: RecordId) -> Result<Coworker, ApiError> {
        self.get_one(id).await
    }

    /// List coworkers, following pagination.
    pub async fn get_coworkers(&self, options: &QueryOptions) -> Result<Vec<Coworker>, ApiError> {
        self.get_list(options).await
    }

    /// Create or update a coworker.
    pub async fn save_coworker(&self, coworker: &Coworker) -> Result<RecordId, ApiError> {
        self.save(coworker).await
    }

    /// Delete a coworker.
    pub async fn delete_coworker(&self, id: RecordId) -> Result<(), ApiError> {
        self.remove::<Coworker>(id).await
    }

    /// Fetch one check-in.
    pub async fn get_check_in(&self, id: RecordId) -> Result<CheckIn, ApiError> {
        self.get_one(id).await
    }

    /// List check-ins, following pagination.
    pub async fn get_check_ins(&self, options: &QueryOptions) -> Result<Vec<CheckIn>, ApiError> {
        self.get_list(options).await
    }

    /// Create or update a check-in.
    pub async fn save_check_in(&self, check_in: &CheckIn) -> Result<RecordId, ApiError> {
        self.save(check_in).await
    }

    /// Delete a check-in.
    pub async fn delete_check_in(&self, id: RecordId) -> Result<(), ApiError> {
        self.remove::<CheckIn>(id).await
    }

    /// Fetch one webhook.
    pub async fn get_web_hook(&self, id: RecordId) -> Result<WebHook, ApiError> {
        self.get_one(id).await
    }

    /// List webhooks, following pagination.
    pub async fn get_web_hooks(&self, options: &QueryOptions) -> Result<Vec<WebHook>, ApiError> {
        self.get_list(options).await
    }

    /// Create or update a webhook.
    pub async fn save_web_hook(&self, web_hook: &WebHook) -> Result<RecordId, ApiError> {
        self.save(web_hook).await
    }

    /// Delete a webhook.
    pub async fn delete_web_hook(&self, id: RecordId) -> Result<(), ApiError> {
        self.remove::<WebHook>(id).await
    }

    fn collection_url<T: Resource>(&self) -> String {
        format!("{}/{}", self.base_url, T::PATH)
    }

    fn record_url<T: Resource>(&self, id: RecordId) -> String {
        format!("{}/{}/{id}", self.base_url, T::PATH)
    }
}

#[async_trait]
impl<T: Resource> RecordStore<T> for AdminApiClient {
    async fn get_one(&self, id: RecordId) -> Result<T, CoworkError> {
        Ok(AdminApiClient::get_one(self, id).await?)
    }

    async fn get_list(&self, options: QueryOptions) -> Result<Vec<T>, CoworkError> {
        Ok(AdminApiClient::get_list(self, &options).await?)
    }

    async fn save(&self, record: &T) -> Result<RecordId, CoworkError> {
        Ok(AdminApiClient::save(self, record).await?)
    }

    async fn remove(&self, id: RecordId) -> Result<(), CoworkError> {
        Ok(AdminApiClient::remove::<T>(self, id).await?)
    }
}
