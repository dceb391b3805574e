use chrono::NaiveDate;

use crate::errors::{BillingError, Result};

/// recognized formats in priority order: day-first wins for ambiguous input
pub const DATE_FORMATS: [&str; 2] = ["%d/%m/%Y", "%m/%d/%Y"];

/// separator used by date-range inputs ("01/01/2024 to 31/01/2024")
pub const RANGE_SEPARATOR: &str = " to ";

/// parse a date using the first recognized format that matches
pub fn parse_date(input: &str) -> Result<NaiveDate> {
    let trimmed = input.trim();
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(trimmed, fmt).ok())
        .ok_or_else(|| BillingError::InvalidDateFormat {
            input: input.to_string(),
        })
}

/// split a range string into its raw bound strings without parsing them
pub fn split_date_range(input: &str) -> Option<(&str, &str)> {
    let (from, to) = input.split_once(RANGE_SEPARATOR)?;
    let (from, to) = (from.trim(), to.trim());
    if from.is_empty() || to.is_empty() {
        return None;
    }
    Some((from, to))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_day_first_is_preferred() {
        // ambiguous: both formats would accept it
        assert_eq!(parse_date("01/02/2024").unwrap(), ymd(2024, 2, 1));
        assert_eq!(parse_date("13/01/2024").unwrap(), ymd(2024, 1, 13));
    }

    #[test]
    fn test_month_first_fallback() {
        // day > 12 in second position only fits month-first
        assert_eq!(parse_date("02/13/2024").unwrap(), ymd(2024, 2, 13));
        assert_eq!(parse_date("12/25/2024").unwrap(), ymd(2024, 12, 25));
    }

    #[test]
    fn test_same_digits_swap_meaning_past_twelve() {
        assert_eq!(parse_date("13/01/2024").unwrap(), ymd(2024, 1, 13));
        assert_eq!(parse_date("01/13/2024").unwrap(), ymd(2024, 1, 13));
        assert_eq!(parse_date("05/06/2024").unwrap(), ymd(2024, 6, 5));
    }

    #[test]
    fn test_unrecognized_dates_rejected() {
        for input in ["13/13/2024", "32/01/2024", "00/00/2024", "2024-01-13", "", "31/02/2024", "tomorrow"] {
            let err = parse_date(input).unwrap_err();
            assert!(
                matches!(err, BillingError::InvalidDateFormat { input: ref got } if got == input),
                "{input:?} should be rejected, got {err:?}"
            );
        }
    }

    #[test]
    fn test_surrounding_whitespace_ignored() {
        assert_eq!(parse_date("  10/01/2024\n").unwrap(), ymd(2024, 1, 10));
    }

    #[test]
    fn test_range_splitting() {
        assert_eq!(
            split_date_range(" 01/01/2024 to 31/01/2024 "),
            Some(("01/01/2024", "31/01/2024"))
        );
        assert_eq!(split_date_range("01/01/2024 to "), None);
        assert_eq!(split_date_range("01/01/2024"), None);
    }
}
