use crate::delimiter::SplitLine;
use crate::model::ShipmentLine;
use crate::normalize::looks_like_date;

use super::common::{MapContext, ShipmentField};
use super::invoice_number::LAYOUT;

/// Positional mapping in the invoice-number order; date slots only take
/// date-shaped cells.
pub(crate) fn map(line: &mut ShipmentLine, split: &SplitLine, ctx: &MapContext<'_>) {
    for (field, value) in LAYOUT.iter().zip(&split.columns) {
        let date_slot = matches!(
            field,
            ShipmentField::InvoiceDate
                | ShipmentField::BlAwbDate
                | ShipmentField::Etd
                | ShipmentField::Eta
                | ShipmentField::DateOfDelivery
        );
        if date_slot && !looks_like_date(value) {
            continue;
        }
        field.assign(line, value, ctx);
    }
}
