use tracing::info;

use crate::delimiter::split_line;
use crate::model::{InvoiceLineItem, LineItemOptions, ParseSummary};
use crate::normalize::{match_option, non_empty, normalize_number};
use crate::shipment::{data_lines, resolve_delimiter};
use crate::validate::validate_line_item;

const PART_NUMBER: usize = 0;
const ITEM_NAME: usize = 1;
const QUANTITY: usize = 2;
const UNIT_PRICE: usize = 3;
const UNIT: usize = 4;
const HSN_CODE: usize = 5;

/// Parses pasted invoice line items
/// (`part number, item name, quantity, unit price, unit, HSN code`).
///
/// Same guarantees as [`crate::parse_shipment_lines`]: one item per
/// non-blank line, input order kept, problems reported in `errors`.
pub fn parse_line_items(text: &str, options: &LineItemOptions) -> Vec<InvoiceLineItem> {
    let lines = data_lines(text, options.skip_header);
    let Some(delimiter) = resolve_delimiter(options.delimiter, &lines) else {
        return Vec::new();
    };

    let items: Vec<InvoiceLineItem> = lines
        .iter()
        .map(|raw| {
            let split = split_line(raw, delimiter);
            let mut item = InvoiceLineItem::new(*raw);
            item.part_number = non_empty(split.get(PART_NUMBER));
            item.item_name = non_empty(split.get(ITEM_NAME));
            item.quantity = normalize_number(split.get(QUANTITY));
            item.unit_price = normalize_number(split.get(UNIT_PRICE));
            item.unit = non_empty(split.get(UNIT));
            item.hsn_code = non_empty(split.get(HSN_CODE));
            item.item_id = match_option(split.get(PART_NUMBER), &options.items)
                .or_else(|| match_option(split.get(ITEM_NAME), &options.items))
                .map(str::to_string);
            validate_line_item(&mut item);
            item
        })
        .collect();

    let summary = ParseSummary::from_items(&items);
    info!(
        total = summary.total,
        accepted = summary.accepted,
        flagged = summary.flagged,
        delimiter = delimiter.as_str(),
        "parsed pasted invoice line items"
    );
    items
}
