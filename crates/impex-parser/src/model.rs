use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::OptionValueError;
use crate::tables::TokenTables;

/// A resolvable business object supplied by the host application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupOption {
    pub id: String,
    pub name: String,
}

impl LookupOption {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OptionLists {
    pub suppliers: Vec<LookupOption>,
    pub categories: Vec<LookupOption>,
    pub incoterms: Vec<LookupOption>,
    pub modes: Vec<LookupOption>,
    pub types: Vec<LookupOption>,
    pub statuses: Vec<LookupOption>,
    pub currencies: Vec<LookupOption>,
}

impl OptionLists {
    pub(crate) fn named_lists(&self) -> [(&'static str, &[LookupOption]); 7] {
        [
            ("suppliers", self.suppliers.as_slice()),
            ("categories", self.categories.as_slice()),
            ("incoterms", self.incoterms.as_slice()),
            ("modes", self.modes.as_slice()),
            ("types", self.types.as_slice()),
            ("statuses", self.statuses.as_slice()),
            ("currencies", self.currencies.as_slice()),
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Delimiter {
    Comma,
    Tab,
    Semicolon,
    Pipe,
    Space,
}

impl Delimiter {
    const EXPECTED: &'static str = "comma, tab, semicolon, pipe, space";

    pub fn as_char(&self) -> char {
        match self {
            Delimiter::Comma => ',',
            Delimiter::Tab => '\t',
            Delimiter::Semicolon => ';',
            Delimiter::Pipe => '|',
            Delimiter::Space => ' ',
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Delimiter::Comma => "comma",
            Delimiter::Tab => "tab",
            Delimiter::Semicolon => "semicolon",
            Delimiter::Pipe => "pipe",
            Delimiter::Space => "space",
        }
    }
}

impl fmt::Display for Delimiter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Delimiter {
    type Err = OptionValueError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "comma" => Ok(Delimiter::Comma),
            "tab" => Ok(Delimiter::Tab),
            "semicolon" => Ok(Delimiter::Semicolon),
            "pipe" => Ok(Delimiter::Pipe),
            "space" => Ok(Delimiter::Space),
            _ => Err(OptionValueError::new("delimiter", value, Self::EXPECTED)),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DelimiterChoice {
    #[default]
    Auto,
    Fixed(Delimiter),
}

impl fmt::Display for DelimiterChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DelimiterChoice::Auto => f.write_str("auto"),
            DelimiterChoice::Fixed(delimiter) => fmt::Display::fmt(delimiter, f),
        }
    }
}

impl FromStr for DelimiterChoice {
    type Err = OptionValueError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        if value.trim().eq_ignore_ascii_case("auto") {
            return Ok(DelimiterChoice::Auto);
        }
        value
            .parse::<Delimiter>()
            .map(DelimiterChoice::Fixed)
            .map_err(|_| {
                OptionValueError::new(
                    "delimiter",
                    value,
                    "auto, comma, tab, semicolon, pipe, space",
                )
            })
    }
}

#[derive(Debug, Clone, Default)]
pub struct ParseOptions {
    pub delimiter: DelimiterChoice,
    pub skip_header: bool,
    pub lookups: OptionLists,
    pub tokens: TokenTables,
}

/// Column layout that mapped a pasted row onto shipment fields.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineFormat {
    HasInvoiceNumber,
    DateInSecondColumn,
    SpaceDelimitedComplex,
    #[default]
    Fallback,
}

impl LineFormat {
    pub fn name(&self) -> &'static str {
        match self {
            LineFormat::HasInvoiceNumber => "has_invoice_number",
            LineFormat::DateInSecondColumn => "date_in_second_column",
            LineFormat::SpaceDelimitedComplex => "space_delimited_complex",
            LineFormat::Fallback => "fallback",
        }
    }
}

impl fmt::Display for LineFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One pasted spreadsheet row mapped onto shipment fields.
///
/// Identifier fields hold an `id` from the matching option list, never the
/// pasted label. An empty `errors` list means every required field resolved.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShipmentLine {
    pub raw: String,
    pub format: LineFormat,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supplier_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invoice_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invoice_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goods_category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invoice_value: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invoice_currency: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub incoterm: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shipment_mode: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shipment_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bl_awb_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bl_awb_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vessel_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub container_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gross_weight_kg: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub etd: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eta: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_of_delivery: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,
}

impl ShipmentLine {
    pub fn new(raw: impl Into<String>, format: LineFormat) -> Self {
        Self {
            raw: raw.into(),
            format,
            ..Self::default()
        }
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

/// One pasted row of an invoice's line-item table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceLineItem {
    pub raw: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub part_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit_price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hsn_code: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,
}

impl InvoiceLineItem {
    pub fn new(raw: impl Into<String>) -> Self {
        Self {
            raw: raw.into(),
            ..Self::default()
        }
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn line_total(&self) -> Option<f64> {
        Some(self.quantity? * self.unit_price?)
    }
}

#[derive(Debug, Clone, Default)]
pub struct LineItemOptions {
    pub delimiter: DelimiterChoice,
    pub skip_header: bool,
    pub items: Vec<LookupOption>,
}

/// Accepted/flagged tally over one parse call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ParseSummary {
    pub total: usize,
    pub accepted: usize,
    pub flagged: usize,
}

impl ParseSummary {
    pub fn from_lines(lines: &[ShipmentLine]) -> Self {
        Self::tally(lines.iter().map(ShipmentLine::is_valid))
    }

    pub fn from_items(items: &[InvoiceLineItem]) -> Self {
        Self::tally(items.iter().map(InvoiceLineItem::is_valid))
    }

    fn tally(valid: impl Iterator<Item = bool>) -> Self {
        let mut summary = Self::default();
        for ok in valid {
            summary.total += 1;
            if ok {
                summary.accepted += 1;
            } else {
                summary.flagged += 1;
            }
        }
        summary
    }
}
