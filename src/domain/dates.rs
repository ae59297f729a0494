//! Date and timestamp formats shared by stores, CSV files and the CLI

use crate::error::{AssistError, Result};
use chrono::{NaiveDate, NaiveDateTime};

/// Day-first date format used for due dates, finance dates and report bounds
pub const DATE_FORMAT: &str = "%d-%m-%Y";

/// Note creation / last edit moment
pub const TIMESTAMP_FORMAT: &str = "%d-%m-%Y %H:%M:%S";

/// Parse a DD-MM-YYYY date
pub fn parse_date(input: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), DATE_FORMAT).map_err(|_| {
        AssistError::Validation(format!(
            "invalid date '{}', expected DD-MM-YYYY",
            input
        ))
    })
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

pub fn format_timestamp(moment: NaiveDateTime) -> String {
    moment.format(TIMESTAMP_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_day_first_date() {
        let date = parse_date("15-01-2024").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
    }

    #[test]
    fn test_parse_trims_whitespace() {
        assert!(parse_date(" 01-02-2024 ").is_ok());
    }

    #[test]
    fn test_parse_rejects_other_layouts() {
        for input in ["2024/01/01", "2024-01-01", "31-02-2024", ""] {
            match parse_date(input) {
                Err(AssistError::Validation(msg)) => assert!(msg.contains("date")),
                other => panic!("Expected validation error for {:?}, got {:?}", input, other),
            }
        }
    }

    #[test]
    fn test_format_round_trip() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        assert_eq!(format_date(date), "09-03-2024");
        let moment = date.and_hms_opt(7, 5, 0).unwrap();
        assert_eq!(format_timestamp(moment), "09-03-2024 07:05:00");
    }
}
