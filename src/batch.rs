// src/batch.rs
use std::collections::HashMap;

use tracing::{debug, info};

use crate::models::{Carrier, CarrierRecord, RequestEntry, Result};
use crate::scraper::CarrierScraper;

/// Resolve a batch of (carrier, customer id) requests sequentially. Each
/// distinct pair is scraped exactly once however often it appears; the
/// output mirrors the input order, one record per input entry. A propagated
/// scrape error aborts the whole batch -- there is no per-entry isolation.
pub async fn collect_records(
    scraper: &CarrierScraper,
    entries: &[RequestEntry],
) -> Result<Vec<CarrierRecord>> {
    info!("Resolving batch of {} entries", entries.len());
    let mut cache: HashMap<(Carrier, String), CarrierRecord> = HashMap::new();

    for entry in entries {
        let key = (entry.carrier, entry.customer_id.clone());
        if cache.contains_key(&key) {
            debug!(
                "Already scraped {} customer {}, reusing",
                entry.carrier.as_str(),
                entry.customer_id
            );
            continue;
        }
        let record = scraper.scrape(entry.carrier, &entry.customer_id).await?;
        cache.insert(key, record);
    }

    // Reassemble in input order; an entry with no cached record is dropped.
    let records = entries
        .iter()
        .filter_map(|entry| {
            cache
                .get(&(entry.carrier, entry.customer_id.clone()))
                .cloned()
        })
        .collect();
    Ok(records)
}

pub fn render_json(records: &[CarrierRecord], pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(records)?
    } else {
        serde_json::to_string(records)?
    };
    Ok(json)
}
