//! Scrape Client — fetches job posting content through the Firecrawl API.
//!
//! One attempt per request: no retry, no caching, no rate limiting. The
//! fetched content's structure is whatever the service returns; the only
//! cleanup is coercing a non-string payload to its string representation.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

const FIRECRAWL_API_URL: &str = "https://api.firecrawl.dev/v1/scrape";

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("scrape service error (status {status}): {message}")]
    Service { status: u16, message: String },

    #[error("scrape service returned no content")]
    EmptyContent,
}

/// A page-content fetcher: job posting URL in, page content out.
/// Carried in `AppState` as `Arc<dyn ContentFetcher>` so tests can stub the
/// scrape service.
#[async_trait]
pub trait ContentFetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<String, FetchError>;
}

#[derive(Debug, Serialize)]
struct ScrapeRequest<'a> {
    url: &'a str,
    formats: [&'a str; 1],
}

#[derive(Debug, Deserialize)]
struct ScrapeResponse {
    success: bool,
    #[serde(default)]
    data: Option<serde_json::Value>,
    #[serde(default)]
    error: Option<String>,
}

/// Firecrawl implementation of `ContentFetcher`.
pub struct FirecrawlClient {
    client: Client,
    api_key: String,
}

impl FirecrawlClient {
    pub fn new(api_key: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
        }
    }
}

#[async_trait]
impl ContentFetcher for FirecrawlClient {
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        let response = self
            .client
            .post(FIRECRAWL_API_URL)
            .bearer_auth(&self.api_key)
            .json(&ScrapeRequest {
                url,
                formats: ["markdown"],
            })
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(FetchError::Service {
                status: status.as_u16(),
                message: body,
            });
        }

        let scrape: ScrapeResponse = response.json().await?;

        if !scrape.success {
            return Err(FetchError::Service {
                status: status.as_u16(),
                message: scrape
                    .error
                    .unwrap_or_else(|| "scrape reported failure without detail".to_string()),
            });
        }

        let data = scrape.data.ok_or(FetchError::EmptyContent)?;
        let content = page_content(&data);
        debug!(chars = content.len(), "job posting scraped");
        Ok(content)
    }
}

/// Coerces the scrape payload to a string: the extracted markdown when the
/// service provides it, otherwise the raw payload's JSON representation.
fn page_content(data: &serde_json::Value) -> String {
    match data.get("markdown").and_then(|v| v.as_str()) {
        Some(markdown) => markdown.to_string(),
        None => data.to_string(),
    }
}
