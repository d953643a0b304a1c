//! Date parsing and key utilities
//!
//! Shared helpers for turning configured ISO-8601 strings into validated
//! `NaiveDate` values and for encoding dates as `YYYYMMDD` keys.

use crate::errors::{AppError, AppResult};
use chrono::{Datelike, NaiveDate};

/// First day of the Gregorian calendar (year, month, day)
pub const GREGORIAN_EPOCH: (i32, u32, u32) = (1582, 10, 15);

/// Last supported day; keeps `calendar_date_key` at exactly 8 digits
pub const LAST_SUPPORTED_DATE: (i32, u32, u32) = (9999, 12, 31);

/// Encode a date as its `YYYYMMDD` integer key
///
/// # Examples
/// ```
/// use calendar_dimension::utils::time::date_key;
/// use chrono::NaiveDate;
/// let date = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
/// assert_eq!(date_key(date), 20240229);
/// ```
pub fn date_key(date: NaiveDate) -> i32 {
    date.year() * 10_000 + date.month() as i32 * 100 + date.day() as i32
}

/// Whether a date falls inside the range the pipeline accepts
pub fn is_supported(date: NaiveDate) -> bool {
    let ymd = (date.year(), date.month(), date.day());
    ymd >= GREGORIAN_EPOCH && ymd <= LAST_SUPPORTED_DATE
}

/// Parse an ISO-8601 calendar date (YYYY-MM-DD) and check it is supported
///
/// # Examples
/// ```
/// use calendar_dimension::utils::time::parse_iso_date;
/// assert!(parse_iso_date("1900-01-01").is_ok());
/// assert!(parse_iso_date("1500-01-01").is_err());
/// assert!(parse_iso_date("2023-02-29").is_err());
/// ```
pub fn parse_iso_date(value: &str) -> AppResult<NaiveDate> {
    let trimmed = value.trim();
    let date =
        NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").map_err(|e| AppError::InvalidDate {
            value: value.to_string(),
            reason: e.to_string(),
        })?;

    if !is_supported(date) {
        return Err(AppError::InvalidDate {
            value: value.to_string(),
            reason: "outside the supported range 1582-10-15..9999-12-31".to_string(),
        });
    }

    Ok(date)
}
