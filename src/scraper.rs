// src/scraper.rs
use scraper::Html;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::fetcher::{HttpFetcher, PageFetcher};
use crate::models::{Agent, Carrier, CarrierRecord, Customer, Result};

/// Orchestrates fetch -> parse -> extract for one carrier at a time. Mock
/// Indemnity serves everything on a single page; Placeholder Carrier
/// paginates its policies.
pub struct CarrierScraper {
    fetcher: Box<dyn PageFetcher>,
    config: Config,
}

impl CarrierScraper {
    pub fn new(config: Config) -> Self {
        let fetcher = Box::new(HttpFetcher::new(config.scraping.request_timeout_seconds));
        Self { fetcher, config }
    }

    /// Test seam: run against a canned fetcher instead of the network.
    pub fn with_fetcher(fetcher: Box<dyn PageFetcher>, config: Config) -> Self {
        Self { fetcher, config }
    }

    pub async fn scrape(&self, carrier: Carrier, customer_id: &str) -> Result<CarrierRecord> {
        info!("Scraping {} for customer {}", carrier.as_str(), customer_id);
        match carrier {
            Carrier::MockIndemnity => self.scrape_single_page(carrier, customer_id).await,
            Carrier::PlaceholderCarrier => self.scrape_paginated(carrier, customer_id).await,
        }
    }

    /// One page holds everything. A fetch failure here is a hard error for
    /// the caller, unlike the paginated path.
    async fn scrape_single_page(
        &self,
        carrier: Carrier,
        customer_id: &str,
    ) -> Result<CarrierRecord> {
        let url = format!("{}{}", self.config.carriers.base_url(carrier), customer_id);
        let body = self.fetcher.fetch_page(&url).await?;
        let doc = Html::parse_document(&body);

        Ok(CarrierRecord {
            agent: carrier.extract_agent(&doc),
            customer: carrier.extract_customer(&doc),
            policies: carrier.extract_policies(&doc),
        })
    }

    /// Pagination state machine over 1-indexed policy pages. The loop stops
    /// on the first empty page or the first fetch failure; both are read as
    /// "no more data", so a customer whose very first page is down resolves
    /// to an empty-shell record rather than an error. Agent and customer are
    /// captured from the first page that yields them and never overwritten.
    async fn scrape_paginated(&self, carrier: Carrier, customer_id: &str) -> Result<CarrierRecord> {
        let base_url = self.config.carriers.base_url(carrier);
        let mut page: u32 = 1;
        let mut agent: Option<Agent> = None;
        let mut customer: Option<Customer> = None;
        let mut policies = Vec::new();

        loop {
            if page > self.config.scraping.max_policy_pages {
                warn!(
                    "Customer {} still paginating at page {}; stopping at the configured ceiling",
                    customer_id, self.config.scraping.max_policy_pages
                );
                break;
            }

            let url = format!("{}{}/policies/{}", base_url, customer_id, page);
            let body = match self.fetcher.fetch_page(&url).await {
                Ok(body) => body,
                Err(e) => {
                    debug!(
                        "No more pages for customer {} at page {}: {}",
                        customer_id, page, e
                    );
                    break;
                }
            };

            let doc = Html::parse_document(&body);
            if agent.is_none() {
                agent = Some(carrier.extract_agent(&doc));
            }
            if customer.is_none() {
                customer = Some(carrier.extract_customer(&doc));
            }

            let page_policies = carrier.extract_policies(&doc);
            if page_policies.is_empty() {
                debug!("No policies on page {} for customer {}", page, customer_id);
                break;
            }

            debug!(
                "Fetched {} policies from page {} for customer {}",
                page_policies.len(),
                page,
                customer_id
            );
            policies.extend(page_policies);
            page += 1;
        }

        info!(
            "Scraped {} policies for customer {}",
            policies.len(),
            customer_id
        );
        Ok(CarrierRecord {
            agent: agent.unwrap_or_default(),
            customer: customer.unwrap_or_default(),
            policies,
        })
    }
}
