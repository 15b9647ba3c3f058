use crate::delimiter::SplitLine;
use crate::model::ShipmentLine;

use super::common::{apply_layout, MapContext, ShipmentField};

/// Spreadsheet export carrying the invoice number right after the supplier.
pub(crate) const LAYOUT: [ShipmentField; 18] = [
    ShipmentField::Supplier,
    ShipmentField::InvoiceNumber,
    ShipmentField::InvoiceDate,
    ShipmentField::GoodsCategory,
    ShipmentField::InvoiceValue,
    ShipmentField::Currency,
    ShipmentField::Incoterm,
    ShipmentField::Mode,
    ShipmentField::ShipmentType,
    ShipmentField::BlAwbNumber,
    ShipmentField::BlAwbDate,
    ShipmentField::VesselName,
    ShipmentField::ContainerNumber,
    ShipmentField::GrossWeight,
    ShipmentField::Etd,
    ShipmentField::Eta,
    ShipmentField::Status,
    ShipmentField::DateOfDelivery,
];

pub(crate) fn map(line: &mut ShipmentLine, split: &SplitLine, ctx: &MapContext<'_>) {
    apply_layout(line, &LAYOUT, &split.columns, ctx);
}
