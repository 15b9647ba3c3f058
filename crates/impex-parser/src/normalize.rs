use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::model::LookupOption;

static ISO_DATE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{4})-(\d{1,2})-(\d{1,2})$").expect("valid ISO date regex"));

static DAY_FIRST_DATE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d{1,2})([-/])(\d{1,2})([-/])(\d{2}|\d{4})$").expect("valid day-first regex")
});

static NUMBER_PREFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^-?(?:\d+(?:\.\d*)?|\.\d+)").expect("valid number regex"));

/// Whether a token has the shape of a date this module can normalize.
///
/// Shape only: `31-02-2024` looks like a date even though it names no real day.
pub fn looks_like_date(value: &str) -> bool {
    let trimmed = value.trim();
    ISO_DATE.is_match(trimmed)
        || DAY_FIRST_DATE
            .captures(trimmed)
            .is_some_and(|caps| caps[2] == caps[4])
}

/// Accepts `YYYY-MM-DD`, `DD-MM-YYYY`, `DD/MM/YYYY` and the two-digit-year
/// forms `DD-MM-YY`/`DD/MM/YY` (read as `20YY`). Month-first input is not
/// recognized.
pub fn normalize_date(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();

    if let Some(caps) = ISO_DATE.captures(trimmed) {
        let year = caps[1].parse().ok()?;
        let month = caps[2].parse().ok()?;
        let day = caps[3].parse().ok()?;
        return NaiveDate::from_ymd_opt(year, month, day);
    }

    let caps = DAY_FIRST_DATE.captures(trimmed)?;
    if caps[2] != caps[4] {
        return None;
    }
    let day = caps[1].parse().ok()?;
    let month = caps[3].parse().ok()?;
    let year_digits = &caps[5];
    let mut year: i32 = year_digits.parse().ok()?;
    if year_digits.len() == 2 {
        year += 2000;
    }
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Keeps digits, `.` and `-`, then reads the longest leading number, so
/// `1.2.3` is `1.2` and `10-20` is `10`.
pub fn normalize_number(value: &str) -> Option<f64> {
    let cleaned: String = value
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect();
    let prefix = NUMBER_PREFIX.find(&cleaned)?;
    prefix.as_str().parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Resolves free text to an option id.
///
/// Exact case-insensitive name match wins; otherwise the first option whose
/// name contains the value, or is contained in it, is taken.
pub fn match_option<'a>(value: &str, options: &'a [LookupOption]) -> Option<&'a str> {
    let needle = value.trim().to_lowercase();
    if needle.is_empty() {
        return None;
    }

    if let Some(exact) = options
        .iter()
        .find(|option| option.name.trim().to_lowercase() == needle)
    {
        return Some(exact.id.as_str());
    }

    options
        .iter()
        .find(|option| {
            let name = option.name.trim().to_lowercase();
            !name.is_empty() && (needle.contains(&name) || name.contains(&needle))
        })
        .map(|option| option.id.as_str())
}

pub(crate) fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
