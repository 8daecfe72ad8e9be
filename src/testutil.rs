// Shared fixtures and a canned fetcher for scraper and batch tests.
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::fetcher::PageFetcher;
use crate::models::Result;

/// Serves pages from a fixed url -> body map and records every request.
/// Unknown urls fail the way a 404 would, unless a fallback body is set.
pub struct CannedFetcher {
    pages: HashMap<String, String>,
    fallback: Option<String>,
    requests: Arc<Mutex<Vec<String>>>,
}

impl CannedFetcher {
    pub fn new(pages: Vec<(String, String)>) -> Self {
        Self {
            pages: pages.into_iter().collect(),
            fallback: None,
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// A fetcher that answers every url with the same body, for exercising
    /// the pagination ceiling.
    pub fn with_fallback(body: String) -> Self {
        Self {
            pages: HashMap::new(),
            fallback: Some(body),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Handle onto the request log, usable after the fetcher is boxed.
    pub fn request_log(&self) -> Arc<Mutex<Vec<String>>> {
        self.requests.clone()
    }
}

#[async_trait]
impl PageFetcher for CannedFetcher {
    async fn fetch_page(&self, url: &str) -> Result<String> {
        self.requests.lock().unwrap().push(url.to_string());
        self.pages
            .get(url)
            .cloned()
            .or_else(|| self.fallback.clone())
            .ok_or_else(|| format!("HTTP error: 404 Not Found ({})", url).into())
    }
}

pub fn mock_indemnity_page() -> String {
    r#"<html><body>
        <dl>
          <dt>Name</dt><dd class="value-name">Sheng Long</dd>
          <dt>Producer Code</dt><dd class="value-producerCode">PC-1234</dd>
          <dt>Agency Name</dt><dd class="value-agencyName">Long Insurance Group</dd>
          <dt>Agency Code</dt><dd class="value-agencyCode">AC-5678</dd>
        </dl>
        <dl>
          <dt>Name</dt><dd class="value-name">Jane Doe</dd>
          <dt>Id</dt><dd class="value-id">a0dfjw9a</dd>
          <dt>Email</dt><dd class="value-email">jane.doe@example.com</dd>
          <dt>Address</dt><dd class="value-address">55 Maple Ave</dd>
        </dl>
        <ul id="policy-list">
          <li>
            <span class="id">PN-100</span>
            <span class="premium">123.45</span>
            <span class="status">active</span>
            <span class="effectiveDate">2023-01-01</span>
            <span class="terminationDate">2024-01-01</span>
            <span class="lastPaymentDate">2023-06-01</span>
          </li>
        </ul>
    </body></html>"#
        .to_string()
}

/// A placeholder-carrier page carrying `policy_count` rows with ids of the
/// form `PL-{page}-{n}`, so tests can assert cross-page ordering.
pub fn placeholder_page(page: u32, policy_count: usize) -> String {
    let rows: String = (1..=policy_count)
        .map(|n| {
            format!(
                r#"<tr class="policy-info-row">
                  <td>PL-{page}-{n}</td>
                  <td>100.5</td>
                  <td>active</td>
                  <td>2022-05-01</td>
                  <td>2025-05-01</td>
                </tr>"#
            )
        })
        .collect();

    format!(
        r#"<html><body>
        <div class="agency-details">
          <div class="nice-formatted-kv">Name: <span>Cathy Curtis</span></div>
          <div class="nice-formatted-kv">Producer Code: <span>PRD-009</span></div>
          <div class="nice-formatted-kv">Agency Name: <span>Curtis &amp; Co</span></div>
          <div class="nice-formatted-kv">Agency Code: <span>AGC-331</span></div>
        </div>
        <div class="customer-details">
          <div><label for="name">Name:</label> <span>Lady Fitzgerald</span></div>
          <div><label>Email:</label> <span>lady.f@example.com</span></div>
          <div><label>Id:</label> <span>f02dkl4e</span></div>
          <div>Address: 123 Main St</div>
        </div>
        <table><tbody>{rows}</tbody></table>
    </body></html>"#
    )
}

/// A valid page with zero policy rows: the upstream end-of-data signal.
pub fn placeholder_empty_page() -> String {
    placeholder_page(0, 0)
}
