// src/carriers/mock_indemnity.rs
//
// Mock Indemnity renders everything on a single page: two definition lists
// (agent, then customer) followed by a flat policy list.
use scraper::{Html, Selector};

use super::{element_text, parse_premium};
use crate::models::{Agent, Customer, Policy};

fn select_text(doc: &Html, selector: &str) -> String {
    let sel = Selector::parse(selector).unwrap();
    doc.select(&sel).next().map(element_text).unwrap_or_default()
}

fn select_text_at(doc: &Html, selector: &str, index: usize) -> String {
    let sel = Selector::parse(selector).unwrap();
    doc.select(&sel)
        .nth(index)
        .map(element_text)
        .unwrap_or_default()
}

pub fn extract_agent(doc: &Html) -> Agent {
    Agent {
        name: select_text(doc, "dl .value-name"),
        producer_code: select_text(doc, "dl .value-producerCode"),
        agency_name: select_text(doc, "dl .value-agencyName"),
        agency_code: select_text(doc, "dl .value-agencyCode"),
    }
}

/// The customer block reuses the `.value-name` class, so the customer name
/// is the second occurrence in document order.
pub fn extract_customer(doc: &Html) -> Customer {
    Customer {
        name: select_text_at(doc, "dl .value-name", 1),
        id: select_text(doc, "dl .value-id"),
        email: select_text(doc, "dl .value-email"),
        address: select_text(doc, "dl .value-address"),
    }
}

pub fn extract_policies(doc: &Html) -> Vec<Policy> {
    let row_sel = Selector::parse("#policy-list li").unwrap();
    doc.select(&row_sel)
        .map(|row| {
            let field = |class: &str| {
                let sel = Selector::parse(class).unwrap();
                row.select(&sel).next().map(element_text).unwrap_or_default()
            };
            Policy {
                id: field(".id"),
                premium: parse_premium(&field(".premium")),
                status: field(".status"),
                effective_date: field(".effectiveDate"),
                termination_date: field(".terminationDate"),
                last_payment_date: field(".lastPaymentDate"),
            }
        })
        .collect()
}
