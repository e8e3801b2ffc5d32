//! ISO date helpers for front matter.
//!
//! Dates are kept as "YYYY-MM-DD" strings throughout the build so that
//! lexicographic order equals chronological order; this module only
//! validates and supplies the current date.

use chrono::Local;

/// Today's date as "YYYY-MM-DD".
pub fn today() -> String {
    Local::now().format("%Y-%m-%d").to_string()
}

/// Check that a string is a plausible "YYYY-MM-DD" date.
pub fn is_valid_date(s: &str) -> bool {
    parse_date(s).is_some()
}

/// Parse "YYYY-MM-DD" into (year, month, day), validating ranges.
pub fn parse_date(s: &str) -> Option<(u16, u8, u8)> {
    let bytes = s.as_bytes();
    if bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
        return None;
    }

    let year = parse_u16(&bytes[0..4])?;
    let month = parse_u8(&bytes[5..7])?;
    let day = parse_u8(&bytes[8..10])?;

    if !(1..=12).contains(&month) || !(1..=days_in_month(year, month)).contains(&day) {
        return None;
    }

    Some((year, month, day))
}

fn days_in_month(year: u16, month: u8) -> u8 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

const fn is_leap_year(year: u16) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

fn parse_u16(bytes: &[u8]) -> Option<u16> {
    let mut value: u16 = 0;
    for &b in bytes {
        if !b.is_ascii_digit() {
            return None;
        }
        value = value.checked_mul(10)?.checked_add((b - b'0') as u16)?;
    }
    Some(value)
}

fn parse_u8(bytes: &[u8]) -> Option<u8> {
    let mut value: u8 = 0;
    for &b in bytes {
        if !b.is_ascii_digit() {
            return None;
        }
        value = value.checked_mul(10)?.checked_add(b - b'0')?;
    }
    Some(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_dates() {
        assert!(is_valid_date("2024-01-15"));
        assert!(is_valid_date("2024-02-29")); // leap year
        assert!(is_valid_date("2000-02-29")); // divisible by 400
    }

    #[test]
    fn test_invalid_dates() {
        assert!(!is_valid_date("2023-02-29")); // not a leap year
        assert!(!is_valid_date("1900-02-29")); // divisible by 100, not 400
        assert!(!is_valid_date("2024-13-01"));
        assert!(!is_valid_date("2024-00-10"));
        assert!(!is_valid_date("2024-04-31"));
        assert!(!is_valid_date("not-a-date"));
        assert!(!is_valid_date("2024-1-5"));
        assert!(!is_valid_date(""));
    }

    #[test]
    fn test_today_is_valid() {
        assert!(is_valid_date(&today()));
    }
}
