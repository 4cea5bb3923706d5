//! Blocking HTTP adapter for the farm inventory service.

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::model::{Farm, Page, Parcel};
use crate::traits::{CatalogError, CatalogProvider};

#[derive(Debug, Clone)]
pub struct InventoryConfig {
    pub base_url: String,
    /// Sent verbatim as the `Authorization` header when set.
    pub api_token: Option<String>,
    pub timeout_secs: u64,
}

impl Default for InventoryConfig {
    fn default() -> Self {
        Self {
            base_url: "https://sherlock.aerobotics.com/developers".to_string(),
            api_token: None,
            timeout_secs: 10,
        }
    }
}

impl InventoryConfig {
    /// Defaults overridden by `INVENTORY_BASE_URL`, `INVENTORY_API_TOKEN` and
    /// `INVENTORY_TIMEOUT_SECS` where set.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(base_url) = std::env::var("INVENTORY_BASE_URL") {
            config.base_url = base_url;
        }
        if let Ok(token) = std::env::var("INVENTORY_API_TOKEN") {
            config.api_token = Some(token).filter(|token| !token.is_empty());
        }
        if let Some(timeout) = std::env::var("INVENTORY_TIMEOUT_SECS")
            .ok()
            .and_then(|value| value.parse().ok())
        {
            config.timeout_secs = timeout;
        }
        config
    }
}

#[derive(Debug, Clone)]
pub struct InventoryClient {
    config: InventoryConfig,
    client: reqwest::blocking::Client,
}

impl InventoryClient {
    pub fn new(config: InventoryConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { config, client })
    }

    fn url(&self, collection: &str) -> String {
        format!("{}/{}/", self.config.base_url.trim_end_matches('/'), collection)
    }

    fn request(&self, collection: &str) -> Result<reqwest::blocking::Request, reqwest::Error> {
        let mut request = self.client.get(self.url(collection));
        if let Some(token) = &self.config.api_token {
            request = request.header(reqwest::header::AUTHORIZATION, token.as_str());
        }
        request.build()
    }

    /// Fetches the first page of a list endpoint and returns its results.
    fn fetch<T: DeserializeOwned>(&self, collection: &str) -> Result<Vec<T>, CatalogError> {
        let request = self.request(collection)?;
        let url = request.url().to_string();

        let page = self
            .client
            .execute(request)
            .and_then(|resp| resp.error_for_status())
            .and_then(|resp| resp.json::<Page<T>>())?;

        debug!(
            url = %url,
            count = page.count,
            received = page.results.len(),
            has_next = page.next.is_some(),
            "fetched inventory page"
        );
        Ok(page.results)
    }
}

impl CatalogProvider for InventoryClient {
    fn farms(&self) -> Result<Vec<Farm>, CatalogError> {
        self.fetch("farms")
    }

    fn orchards(&self) -> Result<Vec<Parcel>, CatalogError> {
        self.fetch("orchards")
    }
}
