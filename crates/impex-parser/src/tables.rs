use serde::{Deserialize, Serialize};

const CURRENCY_CODES: &[&str] = &[
    "USD", "EUR", "INR", "GBP", "JPY", "CNY", "AED", "SGD", "CHF", "AUD", "CAD", "HKD", "KRW",
];

const INCOTERM_CODES: &[&str] = &[
    "EXW", "FCA", "FAS", "FOB", "CFR", "CIF", "CPT", "CIP", "DAP", "DPU", "DDP", "DAT",
];

const SHIPMENT_TYPE_CODES: &[&str] = &["FCL", "LCL", "ULD", "BULK", "FTL", "LTL"];

const STATUS_KEYWORDS: &[&str] = &[
    "planned",
    "booked",
    "in-transit",
    "in_transit",
    "intransit",
    "at-port",
    "docs-rcvd",
    "customs-clearance",
    "cleared",
    "delivered",
];

/// Token lists the space-delimited layout classifies columns against.
///
/// Every list compares case-insensitively. Missing fields in a catalog file
/// fall back to the built-in lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenTables {
    pub currency_codes: Vec<String>,
    pub incoterm_codes: Vec<String>,
    pub shipment_type_codes: Vec<String>,
    pub status_keywords: Vec<String>,
    /// Runs of adjacent tokens that together form one vessel name.
    pub vessel_joins: Vec<Vec<String>>,
}

impl Default for TokenTables {
    fn default() -> Self {
        Self {
            currency_codes: owned(CURRENCY_CODES),
            incoterm_codes: owned(INCOTERM_CODES),
            shipment_type_codes: owned(SHIPMENT_TYPE_CODES),
            status_keywords: owned(STATUS_KEYWORDS),
            vessel_joins: vec![owned(&["HMM", "OCE"])],
        }
    }
}

impl TokenTables {
    pub fn is_currency(&self, token: &str) -> bool {
        contains_ignore_case(&self.currency_codes, token)
    }

    pub fn is_incoterm(&self, token: &str) -> bool {
        contains_ignore_case(&self.incoterm_codes, token)
    }

    pub fn is_shipment_type(&self, token: &str) -> bool {
        contains_ignore_case(&self.shipment_type_codes, token)
    }

    pub fn is_status(&self, token: &str) -> bool {
        contains_ignore_case(&self.status_keywords, token)
    }

    /// Returns the joined vessel name and the number of tokens it consumed
    /// when a configured run starts at `tokens[start]`.
    pub fn vessel_join_at(&self, tokens: &[&str], start: usize) -> Option<(String, usize)> {
        let rest = tokens.get(start..)?;
        self.vessel_joins
            .iter()
            .filter(|run| !run.is_empty() && run.len() <= rest.len())
            .find(|run| {
                run.iter()
                    .zip(rest.iter())
                    .all(|(expected, found)| expected.eq_ignore_ascii_case(found))
            })
            .map(|run| (rest[..run.len()].join(" "), run.len()))
    }
}

fn owned(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

fn contains_ignore_case(list: &[String], token: &str) -> bool {
    let token = token.trim();
    !token.is_empty() && list.iter().any(|entry| entry.eq_ignore_ascii_case(token))
}
