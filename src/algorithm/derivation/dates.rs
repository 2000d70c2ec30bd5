//! Date-based derivations
//!
//! Whole-year differences between an ISO date string and the evaluation date.
//! Missing or unparsable dates yield `None`.

use chrono::{Datelike, NaiveDate};

/// Date format used throughout the registry export
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a `YYYY-MM-DD` date string
///
/// Input must start with a digit and contain no whitespace or sign, which
/// chrono would otherwise skip or accept.
#[must_use]
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let starts_with_digit = value.starts_with(|c: char| c.is_ascii_digit());
    if !starts_with_digit || value.chars().any(|c| c.is_whitespace() || c == '+') {
        return None;
    }
    NaiveDate::parse_from_str(value, DATE_FORMAT).ok()
}

/// Whole years elapsed from `start` to `reference_date`
///
/// One year is subtracted when the anniversary of `start` has not been
/// reached yet in the reference year.
#[must_use]
pub fn whole_years_between(start: NaiveDate, reference_date: NaiveDate) -> i32 {
    let years = reference_date.year() - start.year();
    if (reference_date.month(), reference_date.day()) < (start.month(), start.day()) {
        years - 1
    } else {
        years
    }
}

/// Whole years since an event date, `None` if the date is missing or invalid
#[must_use]
pub fn years_since(event_date: Option<&str>, reference_date: NaiveDate) -> Option<i32> {
    let raw = event_date?;
    match parse_date(raw) {
        Some(date) => Some(whole_years_between(date, reference_date)),
        None => {
            log::debug!("Ignoring unparsable date {raw:?}");
            None
        }
    }
}

/// Age in whole years at the reference date
#[must_use]
pub fn age(birth_date: Option<&str>, reference_date: NaiveDate) -> Option<i32> {
    years_since(birth_date, reference_date)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_age_around_birthday() {
        let at = date(2025, 6, 15);
        assert_eq!(age(Some("1990-06-15"), at), Some(35));
        assert_eq!(age(Some("1990-06-16"), at), Some(34));
        assert_eq!(age(Some("1990-06-14"), at), Some(35));
        assert_eq!(age(Some("1990-12-31"), at), Some(34));
        assert_eq!(age(Some("1990-01-01"), at), Some(35));
    }

    #[test]
    fn test_leap_day_birthday() {
        assert_eq!(age(Some("2000-02-29"), date(2025, 2, 28)), Some(24));
        assert_eq!(age(Some("2000-02-29"), date(2025, 3, 1)), Some(25));
    }

    #[test]
    fn test_invalid_dates_are_none() {
        let at = date(2025, 1, 1);
        assert_eq!(age(None, at), None);
        assert_eq!(age(Some("not-a-date"), at), None);
        assert_eq!(age(Some("15/06/1990"), at), None);
        assert_eq!(age(Some("1990-02-30"), at), None);
        assert_eq!(age(Some(""), at), None);
    }

    #[test]
    fn test_padded_or_signed_dates_are_none() {
        let at = date(2025, 10, 19);
        for raw in [" 1990-01-01", "1990-01-01 ", "+1990-01-01", "-1990-01-01", "1990-+1-01", "1990- 1-01"] {
            assert_eq!(parse_date(raw), None, "{raw:?}");
            assert_eq!(age(Some(raw), at), None, "{raw:?}");
        }
        assert_eq!(age(Some("1990-1-5"), at), Some(35));
    }

    #[test]
    fn test_years_since_graduation() {
        let at = date(2025, 10, 19);
        assert_eq!(years_since(Some("2015-12-10"), at), Some(9));
        assert_eq!(years_since(Some("2015-10-19"), at), Some(10));
    }
}
