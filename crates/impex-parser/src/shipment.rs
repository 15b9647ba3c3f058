use tracing::{debug, info};

use crate::delimiter::{detect_delimiter, split_line};
use crate::formats::{map_line, MapContext};
use crate::model::{Delimiter, DelimiterChoice, ParseOptions, ParseSummary, ShipmentLine};
use crate::validate::validate_shipment_line;

/// Parses pasted spreadsheet rows into shipment records.
///
/// Every non-blank line (minus a skipped header) yields exactly one record,
/// in input order. Problems are reported per line in `errors`; this function
/// has no failure path.
pub fn parse_shipment_lines(text: &str, options: &ParseOptions) -> Vec<ShipmentLine> {
    let lines = data_lines(text, options.skip_header);
    let Some(delimiter) = resolve_delimiter(options.delimiter, &lines) else {
        return Vec::new();
    };

    let ctx = MapContext {
        lookups: &options.lookups,
        tokens: &options.tokens,
    };

    let parsed: Vec<ShipmentLine> = lines
        .iter()
        .map(|raw| {
            let split = split_line(raw, delimiter);
            let mut line = map_line(raw, &split, &ctx);
            validate_shipment_line(&mut line);
            line
        })
        .collect();

    let summary = ParseSummary::from_lines(&parsed);
    info!(
        total = summary.total,
        accepted = summary.accepted,
        flagged = summary.flagged,
        delimiter = delimiter.as_str(),
        "parsed pasted shipment lines"
    );
    parsed
}

/// Normalizes line endings, trims each line, drops blanks and optionally the
/// first remaining line.
pub(crate) fn data_lines(text: &str, skip_header: bool) -> Vec<&str> {
    let lines = text
        .split(|c: char| c == '\n' || c == '\r')
        .map(str::trim)
        .filter(|line| !line.is_empty());
    if skip_header {
        lines.skip(1).collect()
    } else {
        lines.collect()
    }
}

/// The configured delimiter, or the one detected from the first data line.
/// `None` when there are no data lines.
pub(crate) fn resolve_delimiter(choice: DelimiterChoice, lines: &[&str]) -> Option<Delimiter> {
    let first = lines.first()?;
    let delimiter = match choice {
        DelimiterChoice::Fixed(delimiter) => delimiter,
        DelimiterChoice::Auto => detect_delimiter(first),
    };
    debug!(delimiter = delimiter.as_str(), %choice, "resolved delimiter");
    Some(delimiter)
}
