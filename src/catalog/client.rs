//! HTTP access to the catalog search page.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url};
use tracing::debug;

use crate::config::SearchConfig;
use crate::error::{Result, ScoutError};

/// Fetches the raw search results page for a free-text query.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatalogClient: Send + Sync {
    /// Return the HTML body of the search page for `query`.
    async fn search_page(&self, query: &str) -> Result<String>;
}

/// `CatalogClient` that issues a GET against the configured endpoint.
pub struct HttpCatalogClient {
    client: Client,
    endpoint: Url,
    user_agent: String,
}

impl HttpCatalogClient {
    pub fn new(config: &SearchConfig) -> Result<Self> {
        let endpoint = Url::parse(config.endpoint.trim()).map_err(|e| {
            ScoutError::Config(format!(
                "Invalid search endpoint '{}': {}",
                config.endpoint, e
            ))
        })?;

        match endpoint.scheme() {
            "http" | "https" => {}
            other => {
                return Err(ScoutError::Config(format!(
                    "Search endpoint must use http/https, got '{}'",
                    other
                )));
            }
        }

        let client = Client::builder()
            .redirect(reqwest::redirect::Policy::limited(5))
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ScoutError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            endpoint,
            user_agent: config.user_agent.clone(),
        })
    }

    /// Endpoint with `query` URL-encoded into the `q` parameter.
    pub fn search_url(&self, query: &str) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut().append_pair("q", query);
        url
    }
}

#[async_trait]
impl CatalogClient for HttpCatalogClient {
    async fn search_page(&self, query: &str) -> Result<String> {
        let url = self.search_url(query);
        debug!("Searching catalog: {}", url);

        let response = self
            .client
            .get(url.clone())
            .header(reqwest::header::USER_AGENT, &self.user_agent)
            .send()
            .await
            .map_err(|e| ScoutError::SearchFetch(format!("Request to {} failed: {}", url, e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ScoutError::SearchFetch(format!(
                "HTTP error {} from {}",
                status, url
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| ScoutError::SearchFetch(format!("Failed to read response body: {}", e)))?;

        debug!("Fetched {} bytes from {}", body.len(), url);
        Ok(body)
    }
}
