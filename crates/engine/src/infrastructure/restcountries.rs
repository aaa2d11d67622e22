//! REST Countries API client.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use crate::infrastructure::ports::{CountryDataError, CountryDataPort};
use geospy_domain::Country;

/// Default REST Countries base URL.
pub const DEFAULT_COUNTRIES_API_URL: &str = "https://restcountries.com/v3.1";

/// Fetch timeout. The call blocks session creation, so it stays short.
const FETCH_TIMEOUT_SECS: u64 = 5;

/// Only the fields the game consumes; keeps the payload small.
const FIELDS: &str = "name,region,capital,population,languages,flags";

/// Client for the REST Countries v3.1 API.
#[derive(Clone)]
pub struct RestCountriesClient {
    client: Client,
    base_url: String,
}

impl RestCountriesClient {
    pub fn new(base_url: &str) -> Self {
        Self::with_timeout(base_url, FETCH_TIMEOUT_SECS)
    }

    /// Create client with custom timeout (for testing).
    pub fn with_timeout(base_url: &str, timeout_secs: u64) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Create client from the `COUNTRIES_API_URL` environment variable,
    /// falling back to the public endpoint.
    pub fn from_env() -> Self {
        let base_url = std::env::var("COUNTRIES_API_URL")
            .unwrap_or_else(|_| DEFAULT_COUNTRIES_API_URL.to_string());
        Self::new(&base_url)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Default for RestCountriesClient {
    fn default() -> Self {
        Self::new(DEFAULT_COUNTRIES_API_URL)
    }
}

#[async_trait]
impl CountryDataPort for RestCountriesClient {
    async fn fetch_all(&self) -> Result<Vec<Country>, CountryDataError> {
        let response = self
            .client
            .get(format!("{}/all", self.base_url))
            .query(&[("fields", FIELDS)])
            .send()
            .await
            .map_err(|e| CountryDataError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(CountryDataError::Status {
                code: status.as_u16(),
            });
        }

        response
            .json::<Vec<Country>>()
            .await
            .map_err(|e| CountryDataError::InvalidResponse(e.to_string()))
    }
}
