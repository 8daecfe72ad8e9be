// src/carriers/placeholder.rs
//
// Placeholder Carrier spreads policies over numbered pages; agent and
// customer details repeat on every page. Several fields hide behind layout
// quirks rather than stable classes.
use scraper::{ElementRef, Html, Selector};

use super::{element_text, parse_premium};
use crate::models::{Agent, Customer, Policy};

const ADDRESS_LABEL: &str = "Address:";

/// Agent details are four positional key/value lines.
pub fn extract_agent(doc: &Html) -> Agent {
    let line_sel = Selector::parse(".agency-details .nice-formatted-kv").unwrap();
    let span_sel = Selector::parse("span").unwrap();
    let lines: Vec<ElementRef> = doc.select(&line_sel).collect();

    let value = |index: usize| {
        lines
            .get(index)
            .and_then(|line| line.select(&span_sel).next())
            .map(element_text)
            .unwrap_or_default()
    };

    Agent {
        name: value(0),
        producer_code: value(1),
        agency_name: value(2),
        agency_code: value(3),
    }
}

pub fn extract_customer(doc: &Html) -> Customer {
    let span_sel = Selector::parse("span").unwrap();
    let div_sel = Selector::parse(".customer-details div").unwrap();

    // Name sits in a span alongside the label wired to the "name" input.
    let name_label_sel = Selector::parse(r#".customer-details label[for="name"]"#).unwrap();
    let name = doc
        .select(&name_label_sel)
        .next()
        .and_then(|label| label.parent().and_then(ElementRef::wrap))
        .and_then(|block| block.select(&span_sel).next())
        .map(element_text)
        .unwrap_or_default();

    // The id block has no distinguishing class; it is the third div.
    let id = doc
        .select(&div_sel)
        .nth(2)
        .and_then(|block| block.select(&span_sel).next())
        .map(element_text)
        .unwrap_or_default();

    // No :contains() in real CSS selectors, so scan labels for the one
    // reading "Email" and take the element that follows it.
    let label_sel = Selector::parse(".customer-details label").unwrap();
    let email = doc
        .select(&label_sel)
        .find(|label| label.text().collect::<String>().contains("Email"))
        .and_then(|label| label.next_siblings().find_map(ElementRef::wrap))
        .map(element_text)
        .unwrap_or_default();

    // The last block bakes its label into the text ("Address: ..."). The
    // prefix strip is specific to this carrier's layout.
    let address = doc
        .select(&div_sel)
        .last()
        .map(element_text)
        .map(|text| {
            text.strip_prefix(ADDRESS_LABEL)
                .unwrap_or(&text)
                .trim()
                .to_string()
        })
        .unwrap_or_default();

    Customer {
        name,
        id,
        email,
        address,
    }
}

/// Policy rows are table rows of five cells. This carrier does not expose a
/// last payment date, so that field stays empty.
pub fn extract_policies(doc: &Html) -> Vec<Policy> {
    let row_sel = Selector::parse(".policy-info-row").unwrap();
    doc.select(&row_sel)
        .map(|row| {
            let cells: Vec<String> = row
                .children()
                .filter_map(ElementRef::wrap)
                .filter(|el| el.value().name() == "td")
                .map(element_text)
                .collect();
            let cell = |index: usize| cells.get(index).cloned().unwrap_or_default();
            Policy {
                id: cell(0),
                premium: parse_premium(&cell(1)),
                status: cell(2),
                effective_date: cell(3),
                termination_date: cell(4),
                last_payment_date: String::new(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_PAGE: &str = r#"<html><body>
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
        <table>
          <tbody>
            <tr class="policy-info-row">
              <td>PL-200</td>
              <td>820.5</td>
              <td>active</td>
              <td>2022-05-01</td>
              <td>2025-05-01</td>
            </tr>
            <tr class="policy-info-row">
              <td>PL-201</td>
              <td></td>
              <td>cancelled</td>
              <td>2020-02-10</td>
              <td>2021-02-10</td>
            </tr>
          </tbody>
        </table>
    </body></html>"#;

    fn doc() -> Html {
        Html::parse_document(SAMPLE_PAGE)
    }

    #[test]
    fn agent_reads_positional_kv_lines() {
        let agent = extract_agent(&doc());
        assert_eq!(agent.name, "Cathy Curtis");
        assert_eq!(agent.producer_code, "PRD-009");
        assert_eq!(agent.agency_name, "Curtis & Co");
        assert_eq!(agent.agency_code, "AGC-331");
    }

    #[test]
    fn customer_fields_come_from_layout_positions() {
        let customer = extract_customer(&doc());
        assert_eq!(customer.name, "Lady Fitzgerald");
        assert_eq!(customer.id, "f02dkl4e");
        assert_eq!(customer.email, "lady.f@example.com");
    }

    #[test]
    fn customer_address_strips_label_prefix() {
        let customer = extract_customer(&doc());
        assert_eq!(customer.address, "123 Main St");
    }

    #[test]
    fn policy_rows_have_no_last_payment_date() {
        let policies = extract_policies(&doc());
        assert_eq!(policies.len(), 2);
        assert_eq!(policies[0].id, "PL-200");
        assert_eq!(policies[0].premium, 820.5);
        assert_eq!(policies[0].status, "active");
        assert_eq!(policies[0].last_payment_date, "");
        assert_eq!(policies[1].premium, 0.0);
        assert_eq!(policies[1].last_payment_date, "");
    }

    #[test]
    fn absent_nodes_become_empty_fields() {
        let empty = Html::parse_document("<html><body></body></html>");
        assert_eq!(extract_agent(&empty).name, "");
        assert_eq!(extract_customer(&empty).address, "");
        assert!(extract_policies(&empty).is_empty());
    }
}
