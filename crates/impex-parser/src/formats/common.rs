use chrono::NaiveDate;

use crate::model::{LookupOption, OptionLists, ShipmentLine};
use crate::normalize::{match_option, non_empty, normalize_date, normalize_number};
use crate::tables::TokenTables;

/// Lookup data available to every layout mapper.
#[derive(Debug, Clone, Copy)]
pub(crate) struct MapContext<'a> {
    pub lookups: &'a OptionLists,
    pub tokens: &'a TokenTables,
}

/// Destination of one positional column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ShipmentField {
    Supplier,
    InvoiceNumber,
    InvoiceDate,
    GoodsCategory,
    InvoiceValue,
    Currency,
    Incoterm,
    Mode,
    ShipmentType,
    BlAwbNumber,
    BlAwbDate,
    VesselName,
    ContainerNumber,
    GrossWeight,
    Etd,
    Eta,
    Status,
    DateOfDelivery,
    /// Present in a layout but with no shipment field behind it.
    Ignored,
}

impl ShipmentField {
    /// Writes `value` into `line`. Values that fail to normalize or resolve
    /// leave the field as it was.
    pub(crate) fn assign(self, line: &mut ShipmentLine, value: &str, ctx: &MapContext<'_>) {
        let lookups = ctx.lookups;
        match self {
            ShipmentField::Supplier => set_resolved(&mut line.supplier_id, value, &lookups.suppliers),
            ShipmentField::InvoiceNumber => set_text(&mut line.invoice_number, value),
            ShipmentField::InvoiceDate => set_date(&mut line.invoice_date, value),
            ShipmentField::GoodsCategory => {
                set_resolved(&mut line.goods_category, value, &lookups.categories)
            }
            ShipmentField::InvoiceValue => set_number(&mut line.invoice_value, value),
            ShipmentField::Currency => {
                set_resolved(&mut line.invoice_currency, value, &lookups.currencies)
            }
            ShipmentField::Incoterm => set_resolved(&mut line.incoterm, value, &lookups.incoterms),
            ShipmentField::Mode => set_resolved(&mut line.shipment_mode, value, &lookups.modes),
            ShipmentField::ShipmentType => {
                set_resolved(&mut line.shipment_type, value, &lookups.types)
            }
            ShipmentField::BlAwbNumber => set_text(&mut line.bl_awb_number, value),
            ShipmentField::BlAwbDate => set_date(&mut line.bl_awb_date, value),
            ShipmentField::VesselName => set_text(&mut line.vessel_name, value),
            ShipmentField::ContainerNumber => set_text(&mut line.container_number, value),
            ShipmentField::GrossWeight => set_number(&mut line.gross_weight_kg, value),
            ShipmentField::Etd => set_date(&mut line.etd, value),
            ShipmentField::Eta => set_date(&mut line.eta, value),
            ShipmentField::Status => set_resolved(&mut line.status, value, &lookups.statuses),
            ShipmentField::DateOfDelivery => set_date(&mut line.date_of_delivery, value),
            ShipmentField::Ignored => {}
        }
    }
}

/// Assigns each column to the field at the same position in `layout`.
/// Columns past the end of the layout are dropped.
pub(crate) fn apply_layout(
    line: &mut ShipmentLine,
    layout: &[ShipmentField],
    columns: &[String],
    ctx: &MapContext<'_>,
) {
    for (field, value) in layout.iter().zip(columns) {
        field.assign(line, value, ctx);
    }
}

fn set_text(slot: &mut Option<String>, value: &str) {
    if let Some(text) = non_empty(value) {
        *slot = Some(text);
    }
}

fn set_date(slot: &mut Option<NaiveDate>, value: &str) {
    if let Some(date) = normalize_date(value) {
        *slot = Some(date);
    }
}

fn set_number(slot: &mut Option<f64>, value: &str) {
    if let Some(number) = normalize_number(value) {
        *slot = Some(number);
    }
}

fn set_resolved(slot: &mut Option<String>, value: &str, options: &[LookupOption]) {
    if let Some(id) = match_option(value, options) {
        *slot = Some(id.to_string());
    }
}
