//! Display formatting for raw API values.
//!
//! Every function here is total: bad input degrades to a placeholder or is
//! echoed back, it never panics or returns an error.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::FormatError;

/// Rendered for absent values.
pub const PLACEHOLDER: &str = "-";

/// Marker the upstream data uses for "intentionally unset".
pub const NO_DICE: &str = "NO_DICE";

const CURRENCY_SYMBOL: &str = "$";

const MONTHS_ES: [&str; 12] = [
    "ene", "feb", "mar", "abr", "may", "jun", "jul", "ago", "sep", "oct", "nov", "dic",
];

const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

// ============================================
// TEXT
// ============================================

/// Trimmed text, or empty when the value is missing, blank or the sentinel.
pub fn normalize_no_dice(value: Option<&str>) -> String {
    match value.map(str::trim) {
        Some(text) if !text.is_empty() && !text.eq_ignore_ascii_case(NO_DICE) => text.to_string(),
        _ => String::new(),
    }
}

pub(crate) fn is_blank(value: &str) -> bool {
    normalize_no_dice(Some(value)).is_empty()
}

/// Normalized text, or `fallback` when nothing meaningful is left.
pub fn format_optional(value: Option<&str>, fallback: &str) -> String {
    let normalized = normalize_no_dice(value);
    if normalized.is_empty() {
        fallback.to_string()
    } else {
        normalized
    }
}

/// Up to two uppercase initials for avatars, `?` when the name is unusable.
pub fn initials(name: &str) -> String {
    let normalized = normalize_no_dice(Some(name));
    let letters: String = normalized
        .split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(2)
        .flat_map(char::to_uppercase)
        .collect();

    if letters.is_empty() {
        "?".to_string()
    } else {
        letters
    }
}

// ============================================
// NUMBERS
// ============================================

/// US dollar amount with comma grouping, e.g. `-$1,234.50`. Missing is zero.
pub fn format_currency(amount: Option<Decimal>) -> String {
    let rounded = amount
        .unwrap_or(Decimal::ZERO)
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);

    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };

    let digits = format!("{:.2}", rounded.abs());
    let (whole, fraction) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));

    format!("{sign}{CURRENCY_SYMBOL}{}.{fraction}", group_thousands(whole))
}

/// Like [`format_currency`] but shows [`PLACEHOLDER`] when the amount is absent.
pub fn format_amount_or_placeholder(amount: Option<Decimal>) -> String {
    match amount {
        Some(_) => format_currency(amount),
        None => PLACEHOLDER.to_string(),
    }
}

/// Integer with comma grouping, for KPI counters.
pub fn format_count(value: i64) -> String {
    let grouped = group_thousands(&value.unsigned_abs().to_string());
    if value < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

// ============================================
// DATES
// ============================================

/// Parses the ISO-8601 shapes the API emits. Offsets keep their own wall
/// clock; nothing is converted to the browser's zone.
pub fn parse_timestamp(raw: &str) -> Result<NaiveDateTime, FormatError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(FormatError::EmptyTimestamp);
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.naive_local());
    }

    if let Some(dt) = NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
    {
        return Ok(dt);
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map(|date| date.and_time(NaiveTime::MIN))
        .map_err(|_| FormatError::UnparsableTimestamp(raw.to_string()))
}

/// `DD mes YYYY`, e.g. `05 ene 2024`.
pub fn format_date(value: Option<&str>) -> String {
    format_timestamp_with(value, |ts| {
        format!("{:02} {} {:04}", ts.day(), month_abbrev(ts.month()), ts.year())
    })
}

/// `DD mes YYYY HH:mm` on a 24-hour clock.
pub fn format_date_time(value: Option<&str>) -> String {
    format_timestamp_with(value, |ts| {
        format!(
            "{:02} {} {:04} {:02}:{:02}",
            ts.day(),
            month_abbrev(ts.month()),
            ts.year(),
            ts.hour(),
            ts.minute()
        )
    })
}

fn format_timestamp_with(value: Option<&str>, render: impl Fn(NaiveDateTime) -> String) -> String {
    let Some(raw) = value else {
        return PLACEHOLDER.to_string();
    };
    if is_blank(raw) {
        return PLACEHOLDER.to_string();
    }

    match parse_timestamp(raw) {
        Ok(ts) => render(ts),
        Err(_) => raw.to_string(),
    }
}

pub(crate) fn month_abbrev(month: u32) -> &'static str {
    MONTHS_ES
        .get(month.saturating_sub(1) as usize)
        .copied()
        .unwrap_or(PLACEHOLDER)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn test_normalize_no_dice() {
        assert_eq!(normalize_no_dice(Some("NO_DICE")), "");
        assert_eq!(normalize_no_dice(Some("no_dice")), "");
        assert_eq!(normalize_no_dice(Some("  No_Dice  ")), "");
        assert_eq!(normalize_no_dice(Some("  ")), "");
        assert_eq!(normalize_no_dice(None), "");
        assert_eq!(normalize_no_dice(Some("abc")), "abc");
        assert_eq!(normalize_no_dice(Some("  abc ")), "abc");
        // Only the exact sentinel is blanked.
        assert_eq!(normalize_no_dice(Some("NO_DICE!")), "NO_DICE!");
    }

    #[test]
    fn test_format_optional() {
        assert_eq!(format_optional(None, PLACEHOLDER), "-");
        assert_eq!(format_optional(Some("NO_DICE"), "N/D"), "N/D");
        assert_eq!(format_optional(Some(" Panamá "), PLACEHOLDER), "Panamá");
    }

    #[test]
    fn test_currency_missing_is_zero() {
        assert_eq!(format_currency(None), format_currency(Some(Decimal::ZERO)));
        assert_eq!(format_currency(None), "$0.00");
    }

    #[test]
    fn test_currency_grouping_and_rounding() {
        assert_eq!(format_currency(Some(dec("50"))), "$50.00");
        assert_eq!(format_currency(Some(dec("1234.5"))), "$1,234.50");
        assert_eq!(format_currency(Some(dec("1234567.891"))), "$1,234,567.89");
        assert_eq!(format_currency(Some(dec("999.995"))), "$1,000.00");
        assert_eq!(format_currency(Some(dec("100000"))), "$100,000.00");
    }

    #[test]
    fn test_currency_negative_sign_precedes_symbol() {
        assert_eq!(format_currency(Some(dec("-1234.5"))), "-$1,234.50");
        assert_eq!(format_currency(Some(dec("-0.001"))), "$0.00");
    }

    #[test]
    fn test_amount_placeholder() {
        assert_eq!(format_amount_or_placeholder(None), "-");
        assert_eq!(format_amount_or_placeholder(Some(Decimal::ZERO)), "$0.00");
    }

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1000), "1,000");
        assert_eq!(format_count(-1234567), "-1,234,567");
    }

    #[test]
    fn test_format_date_shapes() {
        assert_eq!(format_date(Some("2024-01-05")), "05 ene 2024");
        assert_eq!(format_date(Some("2024-08-15T10:30:00Z")), "15 ago 2024");
        assert_eq!(format_date(Some("2024-12-31T23:59:59.123")), "31 dic 2024");
        assert_eq!(format_date(Some("2024-03-09 08:00:00")), "09 mar 2024");
    }

    #[test]
    fn test_format_date_keeps_offset_wall_clock() {
        assert_eq!(
            format_date_time(Some("2024-02-01T23:15:00-05:00")),
            "01 feb 2024 23:15"
        );
    }

    #[test]
    fn test_format_date_fallbacks() {
        assert_eq!(format_date(None), "-");
        assert_eq!(format_date(Some("")), "-");
        assert_eq!(format_date(Some("NO_DICE")), "-");
        assert_eq!(format_date(Some("not-a-date")), "not-a-date");
        assert_eq!(format_date_time(Some("2024-13-45")), "2024-13-45");
    }

    #[test]
    fn test_format_date_time_24_hour() {
        assert_eq!(
            format_date_time(Some("2024-06-07T17:05:09Z")),
            "07 jun 2024 17:05"
        );
        assert_eq!(format_date_time(Some("2024-06-07")), "07 jun 2024 00:00");
    }

    #[test]
    fn test_years_are_four_digits() {
        assert_eq!(format_date(Some("0099-01-05")), "05 ene 0099");
        assert_eq!(format_date_time(Some("0099-01-05")), "05 ene 0099 00:00");
    }

    #[test]
    fn test_formatting_is_repeatable() {
        let raw = Some("2024-11-20T09:00:00Z");
        assert_eq!(format_date(raw), format_date(raw));
        assert_eq!(
            format_currency(Some(dec("12.345"))),
            format_currency(Some(dec("12.345")))
        );
    }

    #[test]
    fn test_parse_timestamp_errors() {
        assert_eq!(parse_timestamp("  "), Err(FormatError::EmptyTimestamp));
        assert!(matches!(
            parse_timestamp("yesterday"),
            Err(FormatError::UnparsableTimestamp(_))
        ));
    }

    #[test]
    fn test_initials() {
        assert_eq!(initials("acme corporation ltd"), "AC");
        assert_eq!(initials("Beta"), "B");
        assert_eq!(initials("NO_DICE"), "?");
        assert_eq!(initials("   "), "?");
    }
}
