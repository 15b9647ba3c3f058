mod common;
mod date_second;
mod fallback;
mod invoice_number;
mod space_complex;

use tracing::debug;

use crate::delimiter::SplitLine;
use crate::model::{LineFormat, ShipmentLine};
use crate::normalize::looks_like_date;

pub(crate) use common::MapContext;

/// Decides which column layout a single split line follows.
///
/// Checked in order: an invoice number followed by a date, a date in the
/// second column, a long space-split line carrying any date, and finally the
/// positional fallback.
pub fn classify_line(split: &SplitLine) -> LineFormat {
    let second = split.get(1);
    let third = split.get(2);

    if !second.is_empty() && !looks_like_date(second) && looks_like_date(third) {
        return LineFormat::HasInvoiceNumber;
    }
    if looks_like_date(second) {
        return LineFormat::DateInSecondColumn;
    }
    if split.is_complex_space() && split.columns.iter().any(|c| looks_like_date(c)) {
        return LineFormat::SpaceDelimitedComplex;
    }
    LineFormat::Fallback
}

impl LineFormat {
    pub(crate) fn map(self, line: &mut ShipmentLine, split: &SplitLine, ctx: &MapContext<'_>) {
        match self {
            LineFormat::HasInvoiceNumber => invoice_number::map(line, split, ctx),
            LineFormat::DateInSecondColumn => date_second::map(line, split, ctx),
            LineFormat::SpaceDelimitedComplex => space_complex::map(line, split, ctx),
            LineFormat::Fallback => fallback::map(line, split, ctx),
        }
    }
}

pub(crate) fn map_line(raw: &str, split: &SplitLine, ctx: &MapContext<'_>) -> ShipmentLine {
    let format = classify_line(split);
    debug!(
        format = format.name(),
        columns = split.len(),
        "classified pasted line"
    );
    let mut line = ShipmentLine::new(raw, format);
    format.map(&mut line, split, ctx);
    line
}
