use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod batch;
mod carriers;
mod config;
mod fetcher;
mod models;
mod scraper;
#[cfg(test)]
mod testutil;

use config::{load_config, Config};
use models::{Carrier, RequestEntry, Result};
use scraper::CarrierScraper;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let verbose = args.iter().any(|arg| arg == "-v" || arg == "--verbose");
    let input_path = args.iter().find(|arg| !arg.starts_with('-')).cloned();

    // Load configuration
    let (config, config_err) = match load_config("config.yml").await {
        Ok(config) => (config, None),
        Err(e) => (Config::default(), Some(e)),
    };

    // Diagnostics go to stderr; stdout carries only the result JSON.
    init_logging(verbose, &config.logging.level);
    if let Some(e) = config_err {
        warn!("Failed to load config.yml: {}. Using defaults.", e);
    }

    let entries = match input_path {
        Some(path) => read_entries(&path).await?,
        None => demo_entries(),
    };

    let scraper = CarrierScraper::new(config.clone());
    let records = batch::collect_records(&scraper, &entries).await?;

    let json = batch::render_json(&records, config.output.pretty_json)?;
    println!("{}", json);

    export_records(&config.output.directory, &json).await?;

    Ok(())
}

fn init_logging(verbose: bool, level: &str) {
    // -v wins over everything; otherwise RUST_LOG, then the configured level.
    let filter = if verbose {
        EnvFilter::new("carrier_scraper=debug")
    } else {
        EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(format!("carrier_scraper={}", level)))
            .unwrap_or_else(|_| EnvFilter::new("carrier_scraper=warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn read_entries(path: &str) -> Result<Vec<RequestEntry>> {
    let content = tokio::fs::read_to_string(path).await?;
    let entries: Vec<RequestEntry> = serde_json::from_str(&content)?;
    Ok(entries)
}

/// Demonstration batch covering one customer per carrier, used when no
/// input file is given.
fn demo_entries() -> Vec<RequestEntry> {
    vec![
        RequestEntry {
            carrier: Carrier::MockIndemnity,
            customer_id: "a0dfjw9a".to_string(),
        },
        RequestEntry {
            carrier: Carrier::PlaceholderCarrier,
            customer_id: "f02dkl4e".to_string(),
        },
    ]
}

/// Keep a timestamped copy of every run next to the stdout output.
async fn export_records(directory: &str, json: &str) -> Result<()> {
    tokio::fs::create_dir_all(directory).await?;
    let timestamp = chrono::Utc::now().format("%Y%m%d_%H%M%S");
    let path = format!("{}/records_{}.json", directory, timestamp);
    tokio::fs::write(&path, json).await?;
    info!("Results written to {}", path);
    Ok(())
}
