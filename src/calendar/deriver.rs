//! Date attribute derivation.
//!
//! `derive` maps one calendar date to a full `CalendarDateRecord`. Each
//! attribute family (week, month, quarter, year) is a small pure function of
//! a `DayContext`. Previous-period twins are not deltas of the current row:
//! the reference date is shifted first and the same family function runs
//! again on the shifted context.
//!
//! | Family  | Previous twin | Previous-year twin |
//! |---------|---------------|--------------------|
//! | Week    | -7 days       | -364 days          |
//! | Month   | -1 month      | -12 months         |
//! | Quarter | -3 months     | -12 months         |
//! | Year    |               | -12 months         |
//!
//! The previous-year week twin stays on a 364-day (52 week) shift so the
//! weekday lines up; it can land in a different month than a civil year shift.

use super::primitives;
use crate::types::record::CalendarDateRecord;
use crate::utils::time::date_key;
use chrono::{Datelike, NaiveDate};

/// Days back to the previous week
pub const PREVIOUS_WEEK_DAYS: u64 = 7;
/// Days back to the same week one year earlier (52 weeks)
pub const PREVIOUS_YEAR_WEEK_DAYS: u64 = 364;
pub const PREVIOUS_MONTH_MONTHS: u32 = 1;
pub const PREVIOUS_QUARTER_MONTHS: u32 = 3;
pub const PREVIOUS_YEAR_MONTHS: u32 = 12;

/// Per-date intermediates, computed once and shared by every family
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayContext {
    pub date: NaiveDate,
    pub year: i32,
    pub month: u32,
    pub quarter: u32,
    pub weekday_number: u32,
    pub week_number: u32,
}

impl DayContext {
    pub fn new(date: NaiveDate) -> Self {
        let month = date.month();
        Self {
            date,
            year: date.year(),
            month,
            quarter: primitives::quarter_of_month(month),
            weekday_number: primitives::weekday_number(date),
            week_number: primitives::sunday_week_number(date),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekAttributes {
    pub week_number: String,
    pub start_of_week: NaiveDate,
    pub end_of_week: NaiveDate,
    pub year_week_number: String,
    pub week_year: String,
}

impl WeekAttributes {
    pub fn derive(ctx: &DayContext) -> Self {
        let week_number = format!("{:02}", ctx.week_number);
        Self {
            start_of_week: primitives::start_of_week(ctx.date),
            end_of_week: primitives::end_of_week(ctx.date),
            // Concatenation, not arithmetic: 2024 + "05" -> "202405"
            year_week_number: format!("{}{}", ctx.year, week_number),
            week_year: format!("Week {}, {}", week_number, ctx.year),
            week_number,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthAttributes {
    pub month_number: String,
    pub month: String,
    pub day_of_month: u32,
    pub start_of_month: NaiveDate,
    pub end_of_month: NaiveDate,
    pub year_month_number: String,
    pub month_year: String,
    pub month_days: u32,
}

impl MonthAttributes {
    pub fn derive(ctx: &DayContext) -> Self {
        let month_number = format!("{:02}", ctx.month);
        let month = ctx.date.format("%B").to_string();
        let end_of_month = primitives::end_of_month(ctx.date);
        Self {
            day_of_month: ctx.date.day(),
            start_of_month: primitives::start_of_month(ctx.date),
            end_of_month,
            year_month_number: format!("{}{}", ctx.year, month_number),
            month_year: format!("{} {}", month, ctx.year),
            month_days: end_of_month.day(),
            month_number,
            month,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuarterAttributes {
    pub quarter_number: u32,
    pub quarter: String,
    pub day_of_quarter: u32,
    pub start_of_quarter: NaiveDate,
    pub end_of_quarter: NaiveDate,
    pub year_quarter_number: String,
    pub quarter_year: String,
    pub quarter_days: u32,
}

impl QuarterAttributes {
    pub fn derive(ctx: &DayContext) -> Self {
        let start_of_quarter = primitives::start_of_quarter(ctx.date);
        let end_of_quarter = primitives::end_of_quarter(ctx.date);
        Self {
            quarter_number: ctx.quarter,
            quarter: format!("Q{}", ctx.quarter),
            day_of_quarter: primitives::days_inclusive(start_of_quarter, ctx.date),
            start_of_quarter,
            end_of_quarter,
            year_quarter_number: format!("{}{:02}", ctx.year, ctx.quarter),
            quarter_year: format!("Q{} {}", ctx.quarter, ctx.year),
            quarter_days: primitives::days_inclusive(start_of_quarter, end_of_quarter),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YearAttributes {
    pub year_number: i32,
    pub start_of_year: NaiveDate,
    pub end_of_year: NaiveDate,
    pub day_of_year_number: u32,
    pub year_days: u32,
}

impl YearAttributes {
    pub fn derive(ctx: &DayContext) -> Self {
        Self {
            year_number: ctx.year,
            start_of_year: primitives::start_of_year(ctx.date),
            end_of_year: primitives::end_of_year(ctx.date),
            day_of_year_number: ctx.date.ordinal(),
            year_days: primitives::year_days(ctx.date),
        }
    }
}

/// Derive the full dimension row for one date
pub fn derive(date: NaiveDate) -> CalendarDateRecord {
    let current = DayContext::new(date);
    let week_ago = DayContext::new(primitives::days_back(date, PREVIOUS_WEEK_DAYS));
    let weeks_52_ago = DayContext::new(primitives::days_back(date, PREVIOUS_YEAR_WEEK_DAYS));
    let month_ago = DayContext::new(primitives::months_back(date, PREVIOUS_MONTH_MONTHS));
    let quarter_ago = DayContext::new(primitives::months_back(date, PREVIOUS_QUARTER_MONTHS));
    // Shared by the previous-year month, quarter and year families
    let year_ago = DayContext::new(primitives::months_back(date, PREVIOUS_YEAR_MONTHS));

    let week = WeekAttributes::derive(&current);
    let previous_week = WeekAttributes::derive(&week_ago);
    let previous_year_week = WeekAttributes::derive(&weeks_52_ago);

    let month = MonthAttributes::derive(&current);
    let previous_month = MonthAttributes::derive(&month_ago);
    let previous_year_month = MonthAttributes::derive(&year_ago);

    let quarter = QuarterAttributes::derive(&current);
    let previous_quarter = QuarterAttributes::derive(&quarter_ago);
    let previous_year_quarter = QuarterAttributes::derive(&year_ago);

    let year = YearAttributes::derive(&current);
    let previous_year = YearAttributes::derive(&year_ago);

    CalendarDateRecord {
        calendar_date_key: date_key(date),

        calendar_date: date,
        calendar_weekday_number: current.weekday_number,
        calendar_weekday: date.format("%A").to_string(),

        calendar_week_number: week.week_number,
        calendar_start_of_week: week.start_of_week,
        calendar_end_of_week: week.end_of_week,
        calendar_year_week_number: week.year_week_number,
        calendar_week_year: week.week_year,

        previous_week_calendar_week_number: previous_week.week_number,
        previous_week_calendar_start_of_week: previous_week.start_of_week,
        previous_week_calendar_end_of_week: previous_week.end_of_week,
        previous_week_calendar_year_week_number: previous_week.year_week_number,
        previous_week_calendar_week_year: previous_week.week_year,

        previous_year_calendar_week_number: previous_year_week.week_number,
        previous_year_calendar_start_of_week: previous_year_week.start_of_week,
        previous_year_calendar_end_of_week: previous_year_week.end_of_week,
        previous_year_calendar_year_week_number: previous_year_week.year_week_number,
        previous_year_calendar_week_year: previous_year_week.week_year,

        calendar_month_number: month.month_number,
        calendar_month: month.month,
        calendar_day_of_month: month.day_of_month,
        calendar_start_of_month: month.start_of_month,
        calendar_end_of_month: month.end_of_month,
        calendar_year_month_number: month.year_month_number,
        calendar_month_year: month.month_year,
        calendar_month_days: month.month_days,

        previous_month_calendar_month_number: previous_month.month_number,
        previous_month_calendar_month: previous_month.month,
        previous_month_calendar_day_of_month: previous_month.day_of_month,
        previous_month_calendar_start_of_month: previous_month.start_of_month,
        previous_month_calendar_end_of_month: previous_month.end_of_month,
        previous_month_calendar_year_month_number: previous_month.year_month_number,
        previous_month_calendar_month_year: previous_month.month_year,
        previous_month_calendar_month_days: previous_month.month_days,

        previous_year_calendar_month_number: previous_year_month.month_number,
        previous_year_calendar_month: previous_year_month.month,
        previous_year_calendar_day_of_month: previous_year_month.day_of_month,
        previous_year_calendar_start_of_month: previous_year_month.start_of_month,
        previous_year_calendar_end_of_month: previous_year_month.end_of_month,
        previous_year_calendar_year_month_number: previous_year_month.year_month_number,
        previous_year_calendar_month_year: previous_year_month.month_year,
        previous_year_calendar_month_days: previous_year_month.month_days,

        calendar_quarter_number: quarter.quarter_number,
        calendar_quarter: quarter.quarter,
        calendar_day_of_quarter: quarter.day_of_quarter,
        calendar_start_of_quarter: quarter.start_of_quarter,
        calendar_end_of_quarter: quarter.end_of_quarter,
        calendar_year_quarter_number: quarter.year_quarter_number,
        calendar_quarter_year: quarter.quarter_year,
        calendar_quarter_days: quarter.quarter_days,

        previous_quarter_calendar_quarter_number: previous_quarter.quarter_number,
        previous_quarter_calendar_quarter: previous_quarter.quarter,
        previous_quarter_calendar_day_of_quarter: previous_quarter.day_of_quarter,
        previous_quarter_calendar_start_of_quarter: previous_quarter.start_of_quarter,
        previous_quarter_calendar_end_of_quarter: previous_quarter.end_of_quarter,
        previous_quarter_calendar_year_quarter_number: previous_quarter.year_quarter_number,
        previous_quarter_calendar_quarter_year: previous_quarter.quarter_year,
        previous_quarter_calendar_quarter_days: previous_quarter.quarter_days,

        previous_year_calendar_quarter_number: previous_year_quarter.quarter_number,
        previous_year_calendar_quarter: previous_year_quarter.quarter,
        previous_year_calendar_day_of_quarter: previous_year_quarter.day_of_quarter,
        previous_year_calendar_start_of_quarter: previous_year_quarter.start_of_quarter,
        previous_year_calendar_end_of_quarter: previous_year_quarter.end_of_quarter,
        previous_year_calendar_year_quarter_number: previous_year_quarter.year_quarter_number,
        previous_year_calendar_quarter_year: previous_year_quarter.quarter_year,
        previous_year_calendar_quarter_days: previous_year_quarter.quarter_days,

        calendar_year_number: year.year_number,
        calendar_start_of_year: year.start_of_year,
        calendar_end_of_year: year.end_of_year,
        calendar_day_of_year_number: year.day_of_year_number,
        calendar_year_days: year.year_days,

        previous_year_calendar_year_number: previous_year.year_number,
        previous_year_calendar_start_of_year: previous_year.start_of_year,
        previous_year_calendar_end_of_year: previous_year.end_of_year,
        previous_year_calendar_day_of_year_number: previous_year.day_of_year_number,
        previous_year_calendar_year_days: previous_year.year_days,
    }
}
