use serde::{Deserialize, Serialize};
use url::Url;

use crate::models::Carrier;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    pub carriers: CarrierConfig,
    pub scraping: ScrapingConfig,
    pub logging: LoggingConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CarrierConfig {
    pub mock_indemnity_base_url: String,
    pub placeholder_carrier_base_url: String,
}

impl CarrierConfig {
    pub fn base_url(&self, carrier: Carrier) -> &str {
        match carrier {
            Carrier::MockIndemnity => &self.mock_indemnity_base_url,
            Carrier::PlaceholderCarrier => &self.placeholder_carrier_base_url,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ScrapingConfig {
    /// Ceiling on the pagination loop. The upstream end-of-data signal is an
    /// empty page, so a misbehaving source could otherwise paginate forever.
    pub max_policy_pages: u32,
    pub request_timeout_seconds: u64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OutputConfig {
    pub directory: String,
    pub pretty_json: bool,
}

impl Default for CarrierConfig {
    fn default() -> Self {
        Self {
            mock_indemnity_base_url: "https://scraping-interview.onrender.com/mock_indemnity/"
                .to_string(),
            placeholder_carrier_base_url:
                "https://scraping-interview.onrender.com/placeholder_carrier/".to_string(),
        }
    }
}

impl Default for ScrapingConfig {
    fn default() -> Self {
        Self {
            max_policy_pages: 50,
            request_timeout_seconds: 30,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: "out".to_string(),
            pretty_json: true,
        }
    }
}

pub async fn load_config(
    path: &str,
) -> std::result::Result<Config, Box<dyn std::error::Error + Send + Sync>> {
    let content = tokio::fs::read_to_string(path).await?;
    let config: Config = serde_yaml::from_str(&content)?;

    for carrier in [Carrier::MockIndemnity, Carrier::PlaceholderCarrier] {
        Url::parse(config.carriers.base_url(carrier))
            .map_err(|e| format!("Invalid base URL for {}: {}", carrier.as_str(), e))?;
    }

    Ok(config)
}
