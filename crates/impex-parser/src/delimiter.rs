use csv::{ReaderBuilder, StringRecord, Trim};

use crate::model::Delimiter;

/// More space-separated columns than this marks a free-form line whose
/// fields are classified by content instead of position.
pub const COMPLEX_SPACE_COLUMNS: usize = 10;

const STRUCTURED: [Delimiter; 3] = [Delimiter::Comma, Delimiter::Semicolon, Delimiter::Pipe];

/// Picks the delimiter that best segments a sample line.
///
/// Tabs always win. Otherwise the structured delimiter producing the most
/// columns is used once it yields more than two; a line with spaces and no
/// commas falls back to space splitting.
pub fn detect_delimiter(sample: &str) -> Delimiter {
    if sample.contains('\t') {
        return Delimiter::Tab;
    }

    let mut best = Delimiter::Comma;
    let mut best_count = 0usize;
    for candidate in STRUCTURED {
        let count = sample.split(candidate.as_char()).count();
        if count > best_count {
            best = candidate;
            best_count = count;
        }
    }

    if best_count > 2 {
        return best;
    }
    if sample.contains(' ') && !sample.contains(',') {
        return Delimiter::Space;
    }
    best
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitLine {
    pub delimiter: Delimiter,
    pub columns: Vec<String>,
}

impl SplitLine {
    /// Column text at `index`, or `""` past the end of the row.
    pub fn get(&self, index: usize) -> &str {
        self.columns.get(index).map(String::as_str).unwrap_or("")
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn is_complex_space(&self) -> bool {
        self.delimiter == Delimiter::Space && self.columns.len() > COMPLEX_SPACE_COLUMNS
    }
}

/// Splits one pasted line into trimmed columns.
///
/// Comma and semicolon rows with balanced quotes go through the CSV reader so
/// quoted cells such as `"Acme, Inc."` stay whole. Tab and pipe rows, and any
/// row with a stray quote, are split as-is. Space splitting collapses
/// whitespace runs.
pub fn split_line(line: &str, delimiter: Delimiter) -> SplitLine {
    let columns = match delimiter {
        Delimiter::Space => line.split_whitespace().map(str::to_string).collect(),
        Delimiter::Comma | Delimiter::Semicolon if has_balanced_quotes(line) => {
            split_quoted(line, delimiter)
        }
        other => split_plain(line, other),
    };
    SplitLine { delimiter, columns }
}

fn has_balanced_quotes(line: &str) -> bool {
    let quotes = line.matches('"').count();
    quotes > 0 && quotes % 2 == 0
}

fn split_plain(line: &str, delimiter: Delimiter) -> Vec<String> {
    line.split(delimiter.as_char())
        .map(|column| column.trim().to_string())
        .collect()
}

fn split_quoted(line: &str, delimiter: Delimiter) -> Vec<String> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .delimiter(delimiter.as_char() as u8)
        .from_reader(line.as_bytes());

    let mut record = StringRecord::new();
    match reader.read_record(&mut record) {
        Ok(true) => record.iter().map(str::to_string).collect(),
        _ => split_plain(line, delimiter),
    }
}
