use serde::{Deserialize, Serialize};

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Carrier tags accepted in batch input. This is a closed set: page layout,
/// pagination behavior, and extraction selectors are all dispatched by
/// matching on this enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Carrier {
    #[serde(rename = "MOCK_INDEMNITY")]
    MockIndemnity,
    #[serde(rename = "PLACEHOLDER_CARRIER")]
    PlaceholderCarrier,
}

impl Carrier {
    pub fn as_str(&self) -> &'static str {
        match self {
            Carrier::MockIndemnity => "MOCK_INDEMNITY",
            Carrier::PlaceholderCarrier => "PLACEHOLDER_CARRIER",
        }
    }
}

/// One requested (carrier, customer) pair from the batch input.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestEntry {
    pub carrier: Carrier,
    pub customer_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Policy {
    pub id: String,
    pub premium: f64,
    pub status: String,
    pub effective_date: String,
    pub termination_date: String,
    pub last_payment_date: String,
}

/// Agent details, extracted once per customer. `Default` is the canonical
/// empty shell used when no page ever yielded the fields.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Agent {
    pub name: String,
    pub producer_code: String,
    pub agency_name: String,
    pub agency_code: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Customer {
    pub name: String,
    pub id: String,
    pub email: String,
    pub address: String,
}

/// Normalized result for one customer at one carrier. Policies keep page
/// order, then in-page order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CarrierRecord {
    pub agent: Agent,
    pub customer: Customer,
    pub policies: Vec<Policy>,
}
