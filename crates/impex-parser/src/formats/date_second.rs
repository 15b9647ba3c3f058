use crate::delimiter::SplitLine;
use crate::model::ShipmentLine;

use super::common::{apply_layout, MapContext, ShipmentField};

/// Tracker sheet without an invoice number column. The container and BL
/// columns sit in a different order than in the invoice-number export, and
/// its vessel-id column has no shipment field.
pub(crate) const LAYOUT: [ShipmentField; 16] = [
    ShipmentField::Supplier,
    ShipmentField::InvoiceDate,
    ShipmentField::GoodsCategory,
    ShipmentField::InvoiceValue,
    ShipmentField::Currency,
    ShipmentField::Incoterm,
    ShipmentField::ShipmentType,
    ShipmentField::ContainerNumber,
    ShipmentField::Ignored,
    ShipmentField::BlAwbDate,
    ShipmentField::VesselName,
    ShipmentField::BlAwbNumber,
    ShipmentField::GrossWeight,
    ShipmentField::Etd,
    ShipmentField::Eta,
    ShipmentField::Status,
];

pub(crate) fn map(line: &mut ShipmentLine, split: &SplitLine, ctx: &MapContext<'_>) {
    apply_layout(line, &LAYOUT, &split.columns, ctx);
}
