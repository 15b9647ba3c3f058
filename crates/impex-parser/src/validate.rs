use crate::model::{InvoiceLineItem, ShipmentLine};

/// Fields a shipment row needs before it can be saved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequiredField {
    InvoiceNumber,
    InvoiceDate,
    GoodsCategory,
    InvoiceValue,
    InvoiceCurrency,
    Incoterm,
}

impl RequiredField {
    pub const ALL: [RequiredField; 6] = [
        RequiredField::InvoiceNumber,
        RequiredField::InvoiceDate,
        RequiredField::GoodsCategory,
        RequiredField::InvoiceValue,
        RequiredField::InvoiceCurrency,
        RequiredField::Incoterm,
    ];

    pub fn message(&self) -> &'static str {
        match self {
            RequiredField::InvoiceNumber => "Invoice number is required",
            RequiredField::InvoiceDate => {
                "Invoice date is required (DD-MM-YYYY, DD/MM/YYYY or YYYY-MM-DD)"
            }
            RequiredField::GoodsCategory => {
                "Goods category is required or did not match a known category"
            }
            RequiredField::InvoiceValue => "Invoice value must be a number greater than 0",
            RequiredField::InvoiceCurrency => {
                "Invoice currency is required or did not match a known currency"
            }
            RequiredField::Incoterm => "Incoterm is required or did not match a known incoterm",
        }
    }

    fn is_satisfied(&self, line: &ShipmentLine) -> bool {
        match self {
            RequiredField::InvoiceNumber => line.invoice_number.is_some(),
            RequiredField::InvoiceDate => line.invoice_date.is_some(),
            RequiredField::GoodsCategory => line.goods_category.is_some(),
            RequiredField::InvoiceValue => line.invoice_value.is_some_and(|v| v > 0.0),
            RequiredField::InvoiceCurrency => line.invoice_currency.is_some(),
            RequiredField::Incoterm => line.incoterm.is_some(),
        }
    }
}

/// Replaces `line.errors` with one message per unmet required field.
pub fn validate_shipment_line(line: &mut ShipmentLine) {
    line.errors = RequiredField::ALL
        .iter()
        .filter(|field| !field.is_satisfied(line))
        .map(|field| field.message().to_string())
        .collect();
}

pub fn validate_line_item(item: &mut InvoiceLineItem) {
    let mut errors = Vec::new();
    if item.part_number.is_none() {
        errors.push("Part number is required".to_string());
    }
    if !item.quantity.is_some_and(|q| q > 0.0) {
        errors.push("Quantity must be a number greater than 0".to_string());
    }
    if !item.unit_price.is_some_and(|p| p > 0.0) {
        errors.push("Unit price must be a number greater than 0".to_string());
    }
    item.errors = errors;
}
