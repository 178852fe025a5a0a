//! Format-driven datetime parsing for classification and statistics.
//!
//! Only delimited formats are tried; compact forms like `%Y%m%d` would
//! swallow plain integer columns under a parse-all threshold.

use chrono::{NaiveDate, NaiveDateTime};

/// Parse a raw cell against the configured formats, first match wins.
///
/// Date-only formats resolve to midnight so every parsed value lands on a
/// single canonical instant type.
pub fn parse_datetime(value: &str, formats: &[String]) -> Option<NaiveDateTime> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    for format in formats {
        if let Ok(instant) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Some(instant);
        }
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, format) {
            return date.and_hms_opt(0, 0, 0);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::parse_datetime;
    use crate::config::Config;
    use chrono::NaiveDate;

    fn formats() -> Vec<String> {
        Config::default().datetime_formats
    }

    #[test]
    fn parses_dates_and_datetimes() {
        let formats = formats();
        let midnight = NaiveDate::from_ymd_opt(2023, 4, 5)
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .expect("valid date");
        assert_eq!(parse_datetime("2023-04-05", &formats), Some(midnight));
        assert_eq!(parse_datetime("2023/04/05", &formats), Some(midnight));
        assert_eq!(parse_datetime("04/05/2023", &formats), Some(midnight));
        assert_eq!(parse_datetime(" 2023-04-05 00:00:00 ", &formats), Some(midnight));
    }

    #[test]
    fn rejects_numbers_and_junk() {
        let formats = formats();
        assert_eq!(parse_datetime("20230405", &formats), None);
        assert_eq!(parse_datetime("42", &formats), None);
        assert_eq!(parse_datetime("soon", &formats), None);
        assert_eq!(parse_datetime("", &formats), None);
    }
}
