//! Catalog service HTTP client.
//!
//! Provides async methods for querying the travel catalog API, one endpoint
//! per option category. Handles authentication, concurrency limiting, and
//! conversion to domain types.

use std::sync::Arc;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use serde::de::DeserializeOwned;
use tokio::sync::Semaphore;

use crate::domain::{
    ActivityOption, ActivityQuery, StayOption, StayQuery, TransportOption, TransportQuery,
};

use super::error::CatalogError;
use super::types::{ActivitySearchResponse, StaySearchResponse, TransportSearchResponse};

/// Default base URL for the catalog API.
const DEFAULT_BASE_URL: &str = "https://api.opentripcatalog.com";

/// Default maximum concurrent requests.
const DEFAULT_MAX_CONCURRENT: usize = 5;

/// Configuration for the catalog client.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// API key for authentication
    pub api_key: String,
    /// Base URL for the API (defaults to the production catalog)
    pub base_url: String,
    /// Maximum concurrent requests
    pub max_concurrent: usize,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl CatalogConfig {
    /// Create a new config with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            max_concurrent: DEFAULT_MAX_CONCURRENT,
            timeout_secs: 30,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set maximum concurrent requests.
    pub fn with_max_concurrent(mut self, n: usize) -> Self {
        self.max_concurrent = n;
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// Catalog API client.
///
/// Uses a semaphore to limit concurrent requests and avoid rate limiting.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    http: reqwest::Client,
    base_url: String,
    semaphore: Arc<Semaphore>,
}

impl CatalogClient {
    /// Create a new catalog client with the given configuration.
    pub fn new(config: CatalogConfig) -> Result<Self, CatalogError> {
        let mut headers = HeaderMap::new();

        // The catalog uses "x-api-key" for authentication
        let api_key = HeaderValue::from_str(&config.api_key).map_err(|_| CatalogError::Api {
            status: 0,
            message: "Invalid API key format".to_string(),
        })?;
        headers.insert(HeaderName::from_static("x-api-key"), api_key);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
            semaphore: Arc::new(Semaphore::new(config.max_concurrent)),
        })
    }

    /// Search transport legs matching the query.
    pub async fn search_transports(
        &self,
        query: &TransportQuery,
    ) -> Result<Vec<TransportOption>, CatalogError> {
        let params = [
            ("origin", query.origin().to_string()),
            ("destination", query.destination().to_string()),
            ("date", query.depart().to_string()),
            ("passengers", query.passengers().to_string()),
            ("minPrice", query.price().min().minor_units().to_string()),
            ("maxPrice", query.price().max().minor_units().to_string()),
            ("maxResults", query.max_results().to_string()),
        ];

        let response: TransportSearchResponse = self.get_json("/v1/transports", &params).await?;

        response
            .transports
            .into_iter()
            .map(|record| TransportOption::try_from(record).map_err(CatalogError::from))
            .collect()
    }

    /// Search stays matching the query.
    pub async fn search_stays(&self, query: &StayQuery) -> Result<Vec<StayOption>, CatalogError> {
        let params = [
            ("location", query.location().to_string()),
            ("checkIn", query.check_in().to_string()),
            ("checkOut", query.check_out().to_string()),
            ("guests", query.guests().to_string()),
            ("minPrice", query.price().min().minor_units().to_string()),
            ("maxPrice", query.price().max().minor_units().to_string()),
        ];

        let response: StaySearchResponse = self.get_json("/v1/stays", &params).await?;

        Ok(response.stays.into_iter().map(StayOption::from).collect())
    }

    /// Search activities matching the query.
    pub async fn search_activities(
        &self,
        query: &ActivityQuery,
    ) -> Result<Vec<ActivityOption>, CatalogError> {
        let mut params = vec![
            ("location", query.location().to_string()),
            ("from", query.from_date().to_string()),
            ("to", query.to_date().to_string()),
            ("minPrice", query.price().min().minor_units().to_string()),
            ("maxPrice", query.price().max().minor_units().to_string()),
        ];
        if let Some(category) = query.category() {
            params.push(("category", category.to_string()));
        }

        let response: ActivitySearchResponse = self.get_json("/v1/activities", &params).await?;

        response
            .activities
            .into_iter()
            .map(|record| ActivityOption::try_from(record).map_err(CatalogError::from))
            .collect()
    }

    /// GET a catalog endpoint and parse the JSON body.
    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<T, CatalogError> {
        let _permit = self
            .semaphore
            .acquire()
            .await
            .map_err(|_| CatalogError::Api {
                status: 0,
                message: "Semaphore closed".to_string(),
            })?;

        let url = format!("{}{}", self.base_url, path);

        let response = self.http.get(&url).query(params).send().await?;

        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(CatalogError::Unauthorized);
        }

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(CatalogError::RateLimited);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(CatalogError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        serde_json::from_str(&body).map_err(|e| CatalogError::Json {
            message: e.to_string(),
            body: Some(body.chars().take(500).collect()),
        })
    }
}
