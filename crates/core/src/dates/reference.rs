//! Parsing of user-supplied reference dates.
//!
//! Accepted forms:
//! - `2024-06-05`, `2024/06/05`
//! - `2024-06-05T10:30:00`, `2024-06-05 10:30:00`
//! - RFC 3339 (`2024-06-05T10:30:00+02:00`); the local calendar date is kept
//! - `today`, `today + 3d`, `today - 1w`

use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime};
use regex::Regex;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DateError {
    #[error("invalid date '{0}' (expected YYYY-MM-DD, a datetime, or 'today +/- N[d|w]')")]
    Unrecognized(String),

    #[error("date out of range: {0}")]
    OutOfRange(String),
}

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d"];
const DATETIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M"];

/// Parse `input` into a calendar date, resolving `today` against `today`.
pub fn parse_reference_date(input: &str, today: NaiveDate) -> Result<NaiveDate, DateError> {
    let input = input.trim();

    for fmt in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(input, fmt) {
            return Ok(date);
        }
    }

    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(input, fmt) {
            return Ok(dt.date());
        }
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Ok(dt.date_naive());
    }

    parse_relative(input, today)
}

fn parse_relative(input: &str, today: NaiveDate) -> Result<NaiveDate, DateError> {
    let re = Regex::new(r"^(?i:today)(?:\s*([+-])\s*(\d+)\s*([dw]))?$").expect("valid regex");
    let caps = re.captures(input).ok_or_else(|| DateError::Unrecognized(input.to_string()))?;

    let (Some(op), Some(amount), Some(unit)) = (caps.get(1), caps.get(2), caps.get(3)) else {
        return Ok(today);
    };

    let amount: i64 =
        amount.as_str().parse().map_err(|_| DateError::OutOfRange(input.to_string()))?;
    let days = match unit.as_str() {
        "w" => amount.checked_mul(7),
        _ => Some(amount),
    }
    .and_then(Duration::try_days)
    .ok_or_else(|| DateError::OutOfRange(input.to_string()))?;

    let shifted = match op.as_str() {
        "+" => today.checked_add_signed(days),
        _ => today.checked_sub_signed(days),
    };
    shifted.ok_or_else(|| DateError::OutOfRange(input.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[rstest]
    #[case("2024-06-05", d(2024, 6, 5))]
    #[case("2024/06/05", d(2024, 6, 5))]
    #[case(" 2024-06-05 ", d(2024, 6, 5))]
    #[case("2024-06-05T23:10:00", d(2024, 6, 5))]
    #[case("2024-06-05 08:00:00", d(2024, 6, 5))]
    #[case("2024-06-05T23:30:00-04:00", d(2024, 6, 5))]
    fn parses_absolute_forms(#[case] input: &str, #[case] expected: NaiveDate) {
        assert_eq!(parse_reference_date(input, d(2000, 1, 1)), Ok(expected));
    }

    #[rstest]
    #[case("today", d(2024, 6, 5))]
    #[case("TODAY", d(2024, 6, 5))]
    #[case("today + 2d", d(2024, 6, 7))]
    #[case("today-1w", d(2024, 5, 29))]
    #[case("today - 10d", d(2024, 5, 26))]
    fn parses_relative_forms(#[case] input: &str, #[case] expected: NaiveDate) {
        assert_eq!(parse_reference_date(input, d(2024, 6, 5)), Ok(expected));
    }

    #[rstest]
    #[case("")]
    #[case("yesterday")]
    #[case("2024-13-01")]
    #[case("2023-02-29")]
    #[case("today + 1M")]
    #[case("5 June 2024")]
    fn rejects_unrecognized(#[case] input: &str) {
        assert!(matches!(
            parse_reference_date(input, d(2024, 6, 5)),
            Err(DateError::Unrecognized(_))
        ));
    }

    #[test]
    fn huge_offsets_are_out_of_range() {
        let err = parse_reference_date("today + 99999999999w", d(2024, 6, 5)).unwrap_err();
        assert!(matches!(err, DateError::OutOfRange(_)));
    }
}
