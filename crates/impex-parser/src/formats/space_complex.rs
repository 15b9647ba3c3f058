use once_cell::sync::Lazy;
use regex::Regex;

use crate::delimiter::SplitLine;
use crate::model::{LookupOption, ShipmentLine};
use crate::normalize::{looks_like_date, match_option, normalize_date, normalize_number};

use super::common::{MapContext, ShipmentField};

static PLAIN_NUMBER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d+(\.\d+)?$").expect("valid number regex"));

static CONTAINER_STYLE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z]{4}\d{5,}$").expect("valid container regex"));

/// Date-shaped tokens fill these fields in the order they are met.
const DATE_SLOTS: [ShipmentField; 4] = [
    ShipmentField::InvoiceDate,
    ShipmentField::BlAwbDate,
    ShipmentField::Etd,
    ShipmentField::Eta,
];

const MIN_CODE_LEN: usize = 6;

/// Free-form line split on whitespace. Fields are recognized by what the
/// token looks like, not where it sits.
pub(crate) fn map(line: &mut ShipmentLine, split: &SplitLine, ctx: &MapContext<'_>) {
    let tokens: Vec<&str> = split.columns.iter().map(String::as_str).collect();
    let tables = ctx.tokens;
    let lookups = ctx.lookups;

    let mut date_slot = 0usize;
    let mut strict_bl = false;
    let mut unclassified: Vec<&str> = Vec::new();

    let mut idx = 0usize;
    while idx < tokens.len() {
        let token = tokens[idx];

        if let Some((vessel, consumed)) = tables.vessel_join_at(&tokens, idx) {
            if line.vessel_name.is_none() {
                line.vessel_name = Some(vessel);
            }
            idx += consumed;
            continue;
        }
        idx += 1;

        if looks_like_date(token) {
            if let (Some(field), Some(_)) = (DATE_SLOTS.get(date_slot), normalize_date(token)) {
                field.assign(line, token, ctx);
            }
            date_slot += 1;
        } else if tables.is_currency(token) {
            resolve_once(&mut line.invoice_currency, token, &lookups.currencies);
        } else if tables.is_incoterm(token) {
            resolve_once(&mut line.incoterm, token, &lookups.incoterms);
        } else if tables.is_shipment_type(token) {
            resolve_once(&mut line.shipment_type, token, &lookups.types);
        } else if tables.is_status(token) {
            resolve_once(&mut line.status, token, &lookups.statuses);
        } else if PLAIN_NUMBER.is_match(token) {
            if line.invoice_value.is_none() {
                line.invoice_value = normalize_number(token);
            }
        } else if CONTAINER_STYLE.is_match(token) {
            if !strict_bl {
                line.bl_awb_number = Some(token.to_string());
                strict_bl = true;
            }
        } else if is_reference_code(token) {
            if line.bl_awb_number.is_none() {
                line.bl_awb_number = Some(token.to_string());
            }
        } else {
            unclassified.push(token);
        }
    }

    for token in unclassified {
        if line.supplier_id.is_none() {
            if let Some(id) = match_option(token, &lookups.suppliers) {
                line.supplier_id = Some(id.to_string());
                continue;
            }
        }
        if line.goods_category.is_none() {
            if let Some(id) = match_option(token, &lookups.categories) {
                line.goods_category = Some(id.to_string());
            }
        }
    }
}

fn resolve_once(slot: &mut Option<String>, token: &str, options: &[LookupOption]) {
    if slot.is_none() {
        *slot = match_option(token, options).map(str::to_string);
    }
}

/// Letters and digits mixed, at least six characters: a BL or AWB number.
fn is_reference_code(token: &str) -> bool {
    token.len() >= MIN_CODE_LEN
        && token.chars().all(|c| c.is_ascii_alphanumeric())
        && token.chars().any(|c| c.is_ascii_alphabetic())
        && token.chars().any(|c| c.is_ascii_digit())
}
