//! Bounded date sequence feeding the deriver.

use crate::errors::{AppError, AppResult};
use crate::utils::time::{is_supported, parse_iso_date};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const DEFAULT_START_DATE: &str = "1900-01-01";
pub const DEFAULT_END_DATE: &str = "2999-12-31";

/// Inclusive `[start, end]` range of calendar dates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    /// Create a validated range. Both bounds must be supported dates and
    /// `start` must not come after `end`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> AppResult<Self> {
        for bound in [start, end] {
            if !is_supported(bound) {
                return Err(AppError::InvalidDate {
                    value: bound.to_string(),
                    reason: "outside the supported range 1582-10-15..9999-12-31".to_string(),
                });
            }
        }

        if start > end {
            return Err(AppError::Config(format!(
                "Start date {} is after end date {}",
                start, end
            )));
        }

        Ok(Self { start, end })
    }

    /// Build a range from ISO-8601 strings
    pub fn parse(start: &str, end: &str) -> AppResult<Self> {
        Self::new(parse_iso_date(start)?, parse_iso_date(end)?)
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Number of dates in the range
    pub fn len(&self) -> usize {
        ((self.end - self.start).num_days() + 1) as usize
    }

    /// Always false: a valid range holds at least one date
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Every date in the range, ascending, one occurrence each
    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> {
        self.start.iter_days().take(self.len())
    }
}

impl Default for DateRange {
    fn default() -> Self {
        Self {
            start: NaiveDate::from_ymd_opt(1900, 1, 1).unwrap_or_default(),
            end: NaiveDate::from_ymd_opt(2999, 12, 31).unwrap_or_default(),
        }
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..={}", self.start, self.end)
    }
}
