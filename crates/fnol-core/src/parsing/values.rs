use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::str::FromStr;

/// Shape of one accepted date layout.
#[derive(Debug, Clone, Copy)]
struct DateFormat {
    separator: char,
    year_first: bool,
    year_digits: usize,
}

/// Accepted layouts, tried in order; the first that parses wins.
///
/// MM/DD/YYYY, MM-DD-YYYY, YYYY-MM-DD, YYYY/MM/DD, MM/DD/YY, MM-DD-YY.
const DATE_FORMATS: [DateFormat; 6] = [
    DateFormat { separator: '/', year_first: false, year_digits: 4 },
    DateFormat { separator: '-', year_first: false, year_digits: 4 },
    DateFormat { separator: '-', year_first: true, year_digits: 4 },
    DateFormat { separator: '/', year_first: true, year_digits: 4 },
    DateFormat { separator: '/', year_first: false, year_digits: 2 },
    DateFormat { separator: '-', year_first: false, year_digits: 2 },
];

/// Parse a numeric date string against the accepted layouts.
///
/// Month and day may be one or two digits. Two-digit years fall in
/// 2000..=2099. Returns None for anything that is not a real calendar date.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    DATE_FORMATS.iter().find_map(|f| parse_with(s, f))
}

fn parse_with(s: &str, format: &DateFormat) -> Option<NaiveDate> {
    let parts: Vec<&str> = s.split(format.separator).collect();
    if parts.len() != 3 || parts.iter().any(|p| p.is_empty() || !p.bytes().all(|b| b.is_ascii_digit())) {
        return None;
    }

    let (year, month, day) = if format.year_first {
        (parts[0], parts[1], parts[2])
    } else {
        (parts[2], parts[0], parts[1])
    };

    if year.len() != format.year_digits || month.len() > 2 || day.len() > 2 {
        return None;
    }

    let mut year: i32 = year.parse().ok()?;
    if format.year_digits == 2 {
        year += 2000;
    }
    NaiveDate::from_ymd_opt(year, month.parse().ok()?, day.parse().ok()?)
}

/// Parse a monetary amount as an exact decimal.
///
/// Accepts an optional leading currency symbol and thousands separators,
/// e.g. "18,500.00" or "$ 1,200". Anything else yields None.
pub fn parse_amount(s: &str) -> Option<Decimal> {
    let s = s
        .trim()
        .trim_start_matches(['$', '€', '£'])
        .trim_start();
    if s.is_empty() {
        return None;
    }
    let normalized = s.replace(',', "");
    match Decimal::from_str(&normalized) {
        Ok(amount) => Some(amount),
        Err(e) => {
            tracing::debug!(value = %s, error = %e, "amount did not parse");
            None
        }
    }
}

/// Checkbox semantics: the export value "Yes" (any case) means checked.
pub fn is_checked(value: &str) -> bool {
    value.trim().eq_ignore_ascii_case("yes")
}

/// Trimmed value, or None when blank.
pub fn non_blank(value: &str) -> Option<String> {
    let value = value.trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}
