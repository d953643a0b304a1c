//! Calendar date dimension row.
//!
//! `CalendarDateRecord` is flat so that the same field order serves the CSV
//! header, the SQLite table definition, and the insert statement. Field
//! names are the column names.

use chrono::NaiveDate;
use rusqlite::types::ToSql;
use rusqlite::Row;
use serde::{Deserialize, Serialize};

/// One row of the calendar date dimension, keyed by `calendar_date_key`.
///
/// Derived ordering compares `calendar_date_key` first, so sorted collections
/// of records are in date order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CalendarDateRecord {
    pub calendar_date_key: i32,

    // Weekday
    pub calendar_date: NaiveDate,
    pub calendar_weekday_number: u32,
    pub calendar_weekday: String,

    // Week
    pub calendar_week_number: String,
    pub calendar_start_of_week: NaiveDate,
    pub calendar_end_of_week: NaiveDate,
    pub calendar_year_week_number: String,
    pub calendar_week_year: String,

    // Previous week (-7 days)
    pub previous_week_calendar_week_number: String,
    pub previous_week_calendar_start_of_week: NaiveDate,
    pub previous_week_calendar_end_of_week: NaiveDate,
    pub previous_week_calendar_year_week_number: String,
    pub previous_week_calendar_week_year: String,

    // Same week previous year (-364 days)
    pub previous_year_calendar_week_number: String,
    pub previous_year_calendar_start_of_week: NaiveDate,
    pub previous_year_calendar_end_of_week: NaiveDate,
    pub previous_year_calendar_year_week_number: String,
    pub previous_year_calendar_week_year: String,

    // Month
    pub calendar_month_number: String,
    pub calendar_month: String,
    pub calendar_day_of_month: u32,
    pub calendar_start_of_month: NaiveDate,
    pub calendar_end_of_month: NaiveDate,
    pub calendar_year_month_number: String,
    pub calendar_month_year: String,
    pub calendar_month_days: u32,

    // Previous month (-1 month)
    pub previous_month_calendar_month_number: String,
    pub previous_month_calendar_month: String,
    pub previous_month_calendar_day_of_month: u32,
    pub previous_month_calendar_start_of_month: NaiveDate,
    pub previous_month_calendar_end_of_month: NaiveDate,
    pub previous_month_calendar_year_month_number: String,
    pub previous_month_calendar_month_year: String,
    pub previous_month_calendar_month_days: u32,

    // Same month previous year (-12 months)
    pub previous_year_calendar_month_number: String,
    pub previous_year_calendar_month: String,
    pub previous_year_calendar_day_of_month: u32,
    pub previous_year_calendar_start_of_month: NaiveDate,
    pub previous_year_calendar_end_of_month: NaiveDate,
    pub previous_year_calendar_year_month_number: String,
    pub previous_year_calendar_month_year: String,
    pub previous_year_calendar_month_days: u32,

    // Quarter
    pub calendar_quarter_number: u32,
    pub calendar_quarter: String,
    pub calendar_day_of_quarter: u32,
    pub calendar_start_of_quarter: NaiveDate,
    pub calendar_end_of_quarter: NaiveDate,
    pub calendar_year_quarter_number: String,
    pub calendar_quarter_year: String,
    pub calendar_quarter_days: u32,

    // Previous quarter (-3 months)
    pub previous_quarter_calendar_quarter_number: u32,
    pub previous_quarter_calendar_quarter: String,
    pub previous_quarter_calendar_day_of_quarter: u32,
    pub previous_quarter_calendar_start_of_quarter: NaiveDate,
    pub previous_quarter_calendar_end_of_quarter: NaiveDate,
    pub previous_quarter_calendar_year_quarter_number: String,
    pub previous_quarter_calendar_quarter_year: String,
    pub previous_quarter_calendar_quarter_days: u32,

    // Same quarter previous year (-12 months)
    pub previous_year_calendar_quarter_number: u32,
    pub previous_year_calendar_quarter: String,
    pub previous_year_calendar_day_of_quarter: u32,
    pub previous_year_calendar_start_of_quarter: NaiveDate,
    pub previous_year_calendar_end_of_quarter: NaiveDate,
    pub previous_year_calendar_year_quarter_number: String,
    pub previous_year_calendar_quarter_year: String,
    pub previous_year_calendar_quarter_days: u32,

    // Year
    pub calendar_year_number: i32,
    pub calendar_start_of_year: NaiveDate,
    pub calendar_end_of_year: NaiveDate,
    pub calendar_day_of_year_number: u32,
    pub calendar_year_days: u32,

    // Previous year (-1 civil year)
    pub previous_year_calendar_year_number: i32,
    pub previous_year_calendar_start_of_year: NaiveDate,
    pub previous_year_calendar_end_of_year: NaiveDate,
    pub previous_year_calendar_day_of_year_number: u32,
    pub previous_year_calendar_year_days: u32,
}

/// Column names and SQLite types, in record field order
pub const COLUMNS: &[(&str, &str)] = &[
    ("calendar_date_key", "INTEGER NOT NULL PRIMARY KEY"),
    ("calendar_date", "TEXT NOT NULL"),
    ("calendar_weekday_number", "INTEGER NOT NULL"),
    ("calendar_weekday", "TEXT NOT NULL"),
    ("calendar_week_number", "TEXT NOT NULL"),
    ("calendar_start_of_week", "TEXT NOT NULL"),
    ("calendar_end_of_week", "TEXT NOT NULL"),
    ("calendar_year_week_number", "TEXT NOT NULL"),
    ("calendar_week_year", "TEXT NOT NULL"),
    ("previous_week_calendar_week_number", "TEXT NOT NULL"),
    ("previous_week_calendar_start_of_week", "TEXT NOT NULL"),
    ("previous_week_calendar_end_of_week", "TEXT NOT NULL"),
    ("previous_week_calendar_year_week_number", "TEXT NOT NULL"),
    ("previous_week_calendar_week_year", "TEXT NOT NULL"),
    ("previous_year_calendar_week_number", "TEXT NOT NULL"),
    ("previous_year_calendar_start_of_week", "TEXT NOT NULL"),
    ("previous_year_calendar_end_of_week", "TEXT NOT NULL"),
    ("previous_year_calendar_year_week_number", "TEXT NOT NULL"),
    ("previous_year_calendar_week_year", "TEXT NOT NULL"),
    ("calendar_month_number", "TEXT NOT NULL"),
    ("calendar_month", "TEXT NOT NULL"),
    ("calendar_day_of_month", "INTEGER NOT NULL"),
    ("calendar_start_of_month", "TEXT NOT NULL"),
    ("calendar_end_of_month", "TEXT NOT NULL"),
    ("calendar_year_month_number", "TEXT NOT NULL"),
    ("calendar_month_year", "TEXT NOT NULL"),
    ("calendar_month_days", "INTEGER NOT NULL"),
    ("previous_month_calendar_month_number", "TEXT NOT NULL"),
    ("previous_month_calendar_month", "TEXT NOT NULL"),
    ("previous_month_calendar_day_of_month", "INTEGER NOT NULL"),
    ("previous_month_calendar_start_of_month", "TEXT NOT NULL"),
    ("previous_month_calendar_end_of_month", "TEXT NOT NULL"),
    ("previous_month_calendar_year_month_number", "TEXT NOT NULL"),
    ("previous_month_calendar_month_year", "TEXT NOT NULL"),
    ("previous_month_calendar_month_days", "INTEGER NOT NULL"),
    ("previous_year_calendar_month_number", "TEXT NOT NULL"),
    ("previous_year_calendar_month", "TEXT NOT NULL"),
    ("previous_year_calendar_day_of_month", "INTEGER NOT NULL"),
    ("previous_year_calendar_start_of_month", "TEXT NOT NULL"),
    ("previous_year_calendar_end_of_month", "TEXT NOT NULL"),
    ("previous_year_calendar_year_month_number", "TEXT NOT NULL"),
    ("previous_year_calendar_month_year", "TEXT NOT NULL"),
    ("previous_year_calendar_month_days", "INTEGER NOT NULL"),
    ("calendar_quarter_number", "INTEGER NOT NULL"),
    ("calendar_quarter", "TEXT NOT NULL"),
    ("calendar_day_of_quarter", "INTEGER NOT NULL"),
    ("calendar_start_of_quarter", "TEXT NOT NULL"),
    ("calendar_end_of_quarter", "TEXT NOT NULL"),
    ("calendar_year_quarter_number", "TEXT NOT NULL"),
    ("calendar_quarter_year", "TEXT NOT NULL"),
    ("calendar_quarter_days", "INTEGER NOT NULL"),
    ("previous_quarter_calendar_quarter_number", "INTEGER NOT NULL"),
    ("previous_quarter_calendar_quarter", "TEXT NOT NULL"),
    ("previous_quarter_calendar_day_of_quarter", "INTEGER NOT NULL"),
    ("previous_quarter_calendar_start_of_quarter", "TEXT NOT NULL"),
    ("previous_quarter_calendar_end_of_quarter", "TEXT NOT NULL"),
    ("previous_quarter_calendar_year_quarter_number", "TEXT NOT NULL"),
    ("previous_quarter_calendar_quarter_year", "TEXT NOT NULL"),
    ("previous_quarter_calendar_quarter_days", "INTEGER NOT NULL"),
    ("previous_year_calendar_quarter_number", "INTEGER NOT NULL"),
    ("previous_year_calendar_quarter", "TEXT NOT NULL"),
    ("previous_year_calendar_day_of_quarter", "INTEGER NOT NULL"),
    ("previous_year_calendar_start_of_quarter", "TEXT NOT NULL"),
    ("previous_year_calendar_end_of_quarter", "TEXT NOT NULL"),
    ("previous_year_calendar_year_quarter_number", "TEXT NOT NULL"),
    ("previous_year_calendar_quarter_year", "TEXT NOT NULL"),
    ("previous_year_calendar_quarter_days", "INTEGER NOT NULL"),
    ("calendar_year_number", "INTEGER NOT NULL"),
    ("calendar_start_of_year", "TEXT NOT NULL"),
    ("calendar_end_of_year", "TEXT NOT NULL"),
    ("calendar_day_of_year_number", "INTEGER NOT NULL"),
    ("calendar_year_days", "INTEGER NOT NULL"),
    ("previous_year_calendar_year_number", "INTEGER NOT NULL"),
    ("previous_year_calendar_start_of_year", "TEXT NOT NULL"),
    ("previous_year_calendar_end_of_year", "TEXT NOT NULL"),
    ("previous_year_calendar_day_of_year_number", "INTEGER NOT NULL"),
    ("previous_year_calendar_year_days", "INTEGER NOT NULL"),
];

impl CalendarDateRecord {
    /// Column values in `COLUMNS` order, for parameter binding
    pub fn sql_values(&self) -> Vec<&dyn ToSql> {
        vec![
            &self.calendar_date_key,
            &self.calendar_date,
            &self.calendar_weekday_number,
            &self.calendar_weekday,
            &self.calendar_week_number,
            &self.calendar_start_of_week,
            &self.calendar_end_of_week,
            &self.calendar_year_week_number,
            &self.calendar_week_year,
            &self.previous_week_calendar_week_number,
            &self.previous_week_calendar_start_of_week,
            &self.previous_week_calendar_end_of_week,
            &self.previous_week_calendar_year_week_number,
            &self.previous_week_calendar_week_year,
            &self.previous_year_calendar_week_number,
            &self.previous_year_calendar_start_of_week,
            &self.previous_year_calendar_end_of_week,
            &self.previous_year_calendar_year_week_number,
            &self.previous_year_calendar_week_year,
            &self.calendar_month_number,
            &self.calendar_month,
            &self.calendar_day_of_month,
            &self.calendar_start_of_month,
            &self.calendar_end_of_month,
            &self.calendar_year_month_number,
            &self.calendar_month_year,
            &self.calendar_month_days,
            &self.previous_month_calendar_month_number,
            &self.previous_month_calendar_month,
            &self.previous_month_calendar_day_of_month,
            &self.previous_month_calendar_start_of_month,
            &self.previous_month_calendar_end_of_month,
            &self.previous_month_calendar_year_month_number,
            &self.previous_month_calendar_month_year,
            &self.previous_month_calendar_month_days,
            &self.previous_year_calendar_month_number,
            &self.previous_year_calendar_month,
            &self.previous_year_calendar_day_of_month,
            &self.previous_year_calendar_start_of_month,
            &self.previous_year_calendar_end_of_month,
            &self.previous_year_calendar_year_month_number,
            &self.previous_year_calendar_month_year,
            &self.previous_year_calendar_month_days,
            &self.calendar_quarter_number,
            &self.calendar_quarter,
            &self.calendar_day_of_quarter,
            &self.calendar_start_of_quarter,
            &self.calendar_end_of_quarter,
            &self.calendar_year_quarter_number,
            &self.calendar_quarter_year,
            &self.calendar_quarter_days,
            &self.previous_quarter_calendar_quarter_number,
            &self.previous_quarter_calendar_quarter,
            &self.previous_quarter_calendar_day_of_quarter,
            &self.previous_quarter_calendar_start_of_quarter,
            &self.previous_quarter_calendar_end_of_quarter,
            &self.previous_quarter_calendar_year_quarter_number,
            &self.previous_quarter_calendar_quarter_year,
            &self.previous_quarter_calendar_quarter_days,
            &self.previous_year_calendar_quarter_number,
            &self.previous_year_calendar_quarter,
            &self.previous_year_calendar_day_of_quarter,
            &self.previous_year_calendar_start_of_quarter,
            &self.previous_year_calendar_end_of_quarter,
            &self.previous_year_calendar_year_quarter_number,
            &self.previous_year_calendar_quarter_year,
            &self.previous_year_calendar_quarter_days,
            &self.calendar_year_number,
            &self.calendar_start_of_year,
            &self.calendar_end_of_year,
            &self.calendar_day_of_year_number,
            &self.calendar_year_days,
            &self.previous_year_calendar_year_number,
            &self.previous_year_calendar_start_of_year,
            &self.previous_year_calendar_end_of_year,
            &self.previous_year_calendar_day_of_year_number,
            &self.previous_year_calendar_year_days,
        ]
    }

    /// Rebuild a record from a row selected with every column in `COLUMNS`
    pub fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Self {
            calendar_date_key: row.get("calendar_date_key")?,
            calendar_date: row.get("calendar_date")?,
            calendar_weekday_number: row.get("calendar_weekday_number")?,
            calendar_weekday: row.get("calendar_weekday")?,
            calendar_week_number: row.get("calendar_week_number")?,
            calendar_start_of_week: row.get("calendar_start_of_week")?,
            calendar_end_of_week: row.get("calendar_end_of_week")?,
            calendar_year_week_number: row.get("calendar_year_week_number")?,
            calendar_week_year: row.get("calendar_week_year")?,
            previous_week_calendar_week_number: row.get("previous_week_calendar_week_number")?,
            previous_week_calendar_start_of_week: row
                .get("previous_week_calendar_start_of_week")?,
            previous_week_calendar_end_of_week: row.get("previous_week_calendar_end_of_week")?,
            previous_week_calendar_year_week_number: row
                .get("previous_week_calendar_year_week_number")?,
            previous_week_calendar_week_year: row.get("previous_week_calendar_week_year")?,
            previous_year_calendar_week_number: row.get("previous_year_calendar_week_number")?,
            previous_year_calendar_start_of_week: row
                .get("previous_year_calendar_start_of_week")?,
            previous_year_calendar_end_of_week: row.get("previous_year_calendar_end_of_week")?,
            previous_year_calendar_year_week_number: row
                .get("previous_year_calendar_year_week_number")?,
            previous_year_calendar_week_year: row.get("previous_year_calendar_week_year")?,
            calendar_month_number: row.get("calendar_month_number")?,
            calendar_month: row.get("calendar_month")?,
            calendar_day_of_month: row.get("calendar_day_of_month")?,
            calendar_start_of_month: row.get("calendar_start_of_month")?,
            calendar_end_of_month: row.get("calendar_end_of_month")?,
            calendar_year_month_number: row.get("calendar_year_month_number")?,
            calendar_month_year: row.get("calendar_month_year")?,
            calendar_month_days: row.get("calendar_month_days")?,
            previous_month_calendar_month_number: row
                .get("previous_month_calendar_month_number")?,
            previous_month_calendar_month: row.get("previous_month_calendar_month")?,
            previous_month_calendar_day_of_month: row
                .get("previous_month_calendar_day_of_month")?,
            previous_month_calendar_start_of_month: row
                .get("previous_month_calendar_start_of_month")?,
            previous_month_calendar_end_of_month: row
                .get("previous_month_calendar_end_of_month")?,
            previous_month_calendar_year_month_number: row
                .get("previous_month_calendar_year_month_number")?,
            previous_month_calendar_month_year: row.get("previous_month_calendar_month_year")?,
            previous_month_calendar_month_days: row.get("previous_month_calendar_month_days")?,
            previous_year_calendar_month_number: row.get("previous_year_calendar_month_number")?,
            previous_year_calendar_month: row.get("previous_year_calendar_month")?,
            previous_year_calendar_day_of_month: row.get("previous_year_calendar_day_of_month")?,
            previous_year_calendar_start_of_month: row
                .get("previous_year_calendar_start_of_month")?,
            previous_year_calendar_end_of_month: row.get("previous_year_calendar_end_of_month")?,
            previous_year_calendar_year_month_number: row
                .get("previous_year_calendar_year_month_number")?,
            previous_year_calendar_month_year: row.get("previous_year_calendar_month_year")?,
            previous_year_calendar_month_days: row.get("previous_year_calendar_month_days")?,
            calendar_quarter_number: row.get("calendar_quarter_number")?,
            calendar_quarter: row.get("calendar_quarter")?,
            calendar_day_of_quarter: row.get("calendar_day_of_quarter")?,
            calendar_start_of_quarter: row.get("calendar_start_of_quarter")?,
            calendar_end_of_quarter: row.get("calendar_end_of_quarter")?,
            calendar_year_quarter_number: row.get("calendar_year_quarter_number")?,
            calendar_quarter_year: row.get("calendar_quarter_year")?,
            calendar_quarter_days: row.get("calendar_quarter_days")?,
            previous_quarter_calendar_quarter_number: row
                .get("previous_quarter_calendar_quarter_number")?,
            previous_quarter_calendar_quarter: row.get("previous_quarter_calendar_quarter")?,
            previous_quarter_calendar_day_of_quarter: row
                .get("previous_quarter_calendar_day_of_quarter")?,
            previous_quarter_calendar_start_of_quarter: row
                .get("previous_quarter_calendar_start_of_quarter")?,
            previous_quarter_calendar_end_of_quarter: row
                .get("previous_quarter_calendar_end_of_quarter")?,
            previous_quarter_calendar_year_quarter_number: row
                .get("previous_quarter_calendar_year_quarter_number")?,
            previous_quarter_calendar_quarter_year: row
                .get("previous_quarter_calendar_quarter_year")?,
            previous_quarter_calendar_quarter_days: row
                .get("previous_quarter_calendar_quarter_days")?,
            previous_year_calendar_quarter_number: row
                .get("previous_year_calendar_quarter_number")?,
            previous_year_calendar_quarter: row.get("previous_year_calendar_quarter")?,
            previous_year_calendar_day_of_quarter: row
                .get("previous_year_calendar_day_of_quarter")?,
            previous_year_calendar_start_of_quarter: row
                .get("previous_year_calendar_start_of_quarter")?,
            previous_year_calendar_end_of_quarter: row
                .get("previous_year_calendar_end_of_quarter")?,
            previous_year_calendar_year_quarter_number: row
                .get("previous_year_calendar_year_quarter_number")?,
            previous_year_calendar_quarter_year: row.get("previous_year_calendar_quarter_year")?,
            previous_year_calendar_quarter_days: row.get("previous_year_calendar_quarter_days")?,
            calendar_year_number: row.get("calendar_year_number")?,
            calendar_start_of_year: row.get("calendar_start_of_year")?,
            calendar_end_of_year: row.get("calendar_end_of_year")?,
            calendar_day_of_year_number: row.get("calendar_day_of_year_number")?,
            calendar_year_days: row.get("calendar_year_days")?,
            previous_year_calendar_year_number: row.get("previous_year_calendar_year_number")?,
            previous_year_calendar_start_of_year: row
                .get("previous_year_calendar_start_of_year")?,
            previous_year_calendar_end_of_year: row.get("previous_year_calendar_end_of_year")?,
            previous_year_calendar_day_of_year_number: row
                .get("previous_year_calendar_day_of_year_number")?,
            previous_year_calendar_year_days: row.get("previous_year_calendar_year_days")?,
        })
    }
}

/// Comma-separated column list for SELECT/INSERT statements
pub fn column_list() -> String {
    COLUMNS
        .iter()
        .map(|(name, _)| *name)
        .collect::<Vec<_>>()
        .join(", ")
}
