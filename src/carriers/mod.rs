pub mod mock_indemnity;
pub mod placeholder;

use regex::Regex;
use scraper::{ElementRef, Html};

use crate::models::{Agent, Carrier, Customer, Policy};

impl Carrier {
    /// Extraction entry points, dispatched over the closed carrier set. Each
    /// is a pure projection from a parsed document; missing nodes come back
    /// as empty-string fields, never as errors.
    pub fn extract_agent(&self, doc: &Html) -> Agent {
        match self {
            Carrier::MockIndemnity => mock_indemnity::extract_agent(doc),
            Carrier::PlaceholderCarrier => placeholder::extract_agent(doc),
        }
    }

    pub fn extract_customer(&self, doc: &Html) -> Customer {
        match self {
            Carrier::MockIndemnity => mock_indemnity::extract_customer(doc),
            Carrier::PlaceholderCarrier => placeholder::extract_customer(doc),
        }
    }

    pub fn extract_policies(&self, doc: &Html) -> Vec<Policy> {
        match self {
            Carrier::MockIndemnity => mock_indemnity::extract_policies(doc),
            Carrier::PlaceholderCarrier => placeholder::extract_policies(doc),
        }
    }
}

/// Trimmed text content of an element, all text nodes concatenated.
pub(crate) fn element_text(el: ElementRef) -> String {
    el.text().collect::<String>().trim().to_string()
}

/// Premium cells are lenient: take the leading decimal token of the trimmed
/// text; anything without one (empty cell, dashes, labels) counts as 0.
pub(crate) fn parse_premium(text: &str) -> f64 {
    let number = Regex::new(r"^-?\d+(?:\.\d+)?").unwrap();
    number
        .find(text.trim())
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .unwrap_or(0.0)
}
