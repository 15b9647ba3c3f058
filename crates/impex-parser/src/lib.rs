pub mod catalog;
pub mod delimiter;
pub mod errors;
pub mod formats;
pub mod line_items;
pub mod model;
pub mod normalize;
mod shipment;
pub mod tables;
pub mod validate;

pub use catalog::Catalog;
pub use errors::{CatalogError, OptionValueError};
pub use formats::classify_line;
pub use line_items::parse_line_items;
pub use model::{
    Delimiter, DelimiterChoice, InvoiceLineItem, LineFormat, LineItemOptions, LookupOption,
    OptionLists, ParseOptions, ParseSummary, ShipmentLine,
};
pub use normalize::{match_option, normalize_date, normalize_number};
pub use shipment::parse_shipment_lines;
pub use tables::TokenTables;
