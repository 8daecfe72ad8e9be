// src/fetcher.rs
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

use crate::models::Result;

/// The single "GET url -> body" primitive the scrapers are built on.
/// Network errors, non-2xx statuses, and timeouts all surface as one opaque
/// error; callers decide whether that is fatal or an end-of-data signal.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch_page(&self, url: &str) -> Result<String>;
}

pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(timeout_seconds: u64) -> Self {
        let client = Client::builder()
            .user_agent("Mozilla/5.0 (compatible; CarrierScraper/1.0)")
            .timeout(Duration::from_secs(timeout_seconds))
            .build()
            .expect("Failed to create HTTP client");

        Self { client }
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch_page(&self, url: &str) -> Result<String> {
        debug!("Fetching: {}", url);

        let response = self.client.get(url).send().await?;

        if !response.status().is_success() {
            return Err(format!("HTTP error: {}", response.status()).into());
        }

        let body = response.text().await?;
        debug!("Fetched {} bytes from {}", body.len(), url);

        Ok(body)
    }
}
