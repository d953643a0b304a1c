//! Period boundary arithmetic shared by the attribute families.
//!
//! All helpers are infallible for dates accepted by `DateRange`: the widest
//! shift used is 12 months back or 7 days forward, well within chrono's range.

use chrono::{Datelike, Days, Months, NaiveDate};

/// Day of week with Sunday = 1 .. Saturday = 7
pub fn weekday_number(date: NaiveDate) -> u32 {
    date.weekday().number_from_sunday()
}

/// Underlying week-of-year counter (ISO-8601, Monday-start weeks)
pub fn week_of_year(date: NaiveDate) -> u32 {
    date.iso_week().week()
}

/// Week number under the Sunday-start convention.
///
/// The ISO counter rolls over on Mondays; bumping Sundays by one moves each
/// Sunday into the same week as the Monday..Saturday that follow it.
pub fn sunday_week_number(date: NaiveDate) -> u32 {
    let bump = u32::from(weekday_number(date) == 1);
    week_of_year(date) + bump
}

/// Most recent Sunday, or the date itself when it is a Sunday
pub fn start_of_week(date: NaiveDate) -> NaiveDate {
    date - Days::new(u64::from(weekday_number(date) - 1))
}

/// Next Saturday, or the date itself when it is a Saturday
pub fn end_of_week(date: NaiveDate) -> NaiveDate {
    date + Days::new(u64::from(7 - weekday_number(date)))
}

/// Shift back by whole months, clamping the day to the target month's length
/// (Mar 31 -> Feb 28/29, never an invalid date).
pub fn months_back(date: NaiveDate, months: u32) -> NaiveDate {
    date - Months::new(months)
}

pub fn days_back(date: NaiveDate, days: u64) -> NaiveDate {
    date - Days::new(days)
}

pub fn start_of_month(date: NaiveDate) -> NaiveDate {
    date - Days::new(u64::from(date.day0()))
}

pub fn end_of_month(date: NaiveDate) -> NaiveDate {
    start_of_month(date) + Months::new(1) - Days::new(1)
}

/// Quarter of the year (1..=4) for a month number (1..=12)
pub fn quarter_of_month(month: u32) -> u32 {
    (month - 1) / 3 + 1
}

/// First day of the first month of the date's quarter
pub fn start_of_quarter(date: NaiveDate) -> NaiveDate {
    start_of_month(date) - Months::new(date.month0() % 3)
}

/// Last day of the third month of the date's quarter
pub fn end_of_quarter(date: NaiveDate) -> NaiveDate {
    end_of_month(start_of_quarter(date) + Months::new(2))
}

pub fn start_of_year(date: NaiveDate) -> NaiveDate {
    date - Days::new(u64::from(date.ordinal0()))
}

pub fn end_of_year(date: NaiveDate) -> NaiveDate {
    start_of_year(date) + Months::new(12) - Days::new(1)
}

/// Days in the date's year, found by probing the calendar rather than by a
/// divisibility rule: if the day after Feb 28 is still in February the year
/// has a Feb 29 and therefore 366 days.
pub fn year_days(date: NaiveDate) -> u32 {
    let feb_28 = start_of_year(date) + Days::new(58);
    let probe = feb_28 + Days::new(1);
    if probe.month() == 2 {
        366
    } else {
        365
    }
}

/// Inclusive number of days between two dates (`start <= end`)
pub fn days_inclusive(start: NaiveDate, end: NaiveDate) -> u32 {
    ((end - start).num_days() + 1) as u32
}
