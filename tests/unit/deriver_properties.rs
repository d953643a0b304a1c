//! Invariants every derived row must satisfy, checked over multi-year ranges
//! that cross leap days, year ends and century boundaries.

use calendar_dimension::calendar::{derive, DateRange};
use calendar_dimension::types::CalendarDateRecord;
use chrono::{Datelike, Days, Weekday};

use crate::common::ymd;

fn rows(start: &str, end: &str) -> Vec<CalendarDateRecord> {
    DateRange::parse(start, end).unwrap().dates().map(derive).collect()
}

fn is_leap(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

#[test]
fn test_key_encodes_date_in_eight_digits() {
    for row in rows("1999-12-25", "2001-01-05") {
        let date = row.calendar_date;
        let expected = date.year() * 10_000 + date.month() as i32 * 100 + date.day() as i32;
        assert_eq!(row.calendar_date_key, expected);
        assert_eq!(row.calendar_date_key.to_string().len(), 8);
    }
}

#[test]
fn test_week_bounds_are_sunday_to_saturday() {
    for row in rows("2023-12-01", "2025-01-31") {
        let date = row.calendar_date;
        assert!(row.calendar_start_of_week <= date && date <= row.calendar_end_of_week);
        assert_eq!(row.calendar_start_of_week.weekday(), Weekday::Sun);
        assert_eq!(row.calendar_end_of_week.weekday(), Weekday::Sat);
        assert_eq!(
            row.calendar_end_of_week - row.calendar_start_of_week,
            chrono::Duration::days(6)
        );
        assert!((1..=7).contains(&row.calendar_weekday_number));
    }
}

#[test]
fn test_week_number_is_two_digit_string() {
    for row in rows("2019-12-20", "2022-01-10") {
        let week = &row.calendar_week_number;
        assert_eq!(week.len(), 2, "week number {} for {}", week, row.calendar_date);
        let value: u32 = week.parse().unwrap();
        assert!((1..=54).contains(&value));
        assert_eq!(
            row.calendar_year_week_number,
            format!("{}{}", row.calendar_date.year(), week)
        );
    }
}

#[test]
fn test_month_bounds_and_length() {
    for row in rows("1999-01-01", "2001-12-31") {
        assert_eq!(row.calendar_start_of_month.day(), 1);
        let after_end = row.calendar_end_of_month + Days::new(1);
        assert_eq!(after_end.day(), 1);
        assert_eq!(row.calendar_month_days, row.calendar_end_of_month.day());
        assert!(row.calendar_day_of_month <= row.calendar_month_days);
        assert_eq!(
            row.calendar_year_month_number,
            format!("{}{}", row.calendar_year_number, row.calendar_month_number)
        );
    }
}

#[test]
fn test_quarter_lengths() {
    for row in rows("1999-01-01", "2001-12-31") {
        assert!(
            [90, 91, 92].contains(&row.calendar_quarter_days),
            "{} days in {} for {}",
            row.calendar_quarter_days,
            row.calendar_quarter_year,
            row.calendar_date
        );
        assert!(row.calendar_day_of_quarter >= 1);
        assert!(row.calendar_day_of_quarter <= row.calendar_quarter_days);
        assert_eq!(row.calendar_quarter, format!("Q{}", row.calendar_quarter_number));
    }
}

#[test]
fn test_year_days_follows_leap_rule() {
    for year in [1600, 1700, 1900, 1999, 2000, 2023, 2024, 2100, 2400] {
        let row = derive(ymd(year, 6, 15));
        let expected = if is_leap(year) { 366 } else { 365 };
        assert_eq!(row.calendar_year_days, expected, "year {}", year);
        assert_eq!(row.calendar_start_of_year, ymd(year, 1, 1));
        assert_eq!(row.calendar_end_of_year, ymd(year, 12, 31));
    }
}

#[test]
fn test_last_day_of_year_ordinal_matches_year_days() {
    for year in [1900, 2000, 2023, 2024] {
        let row = derive(ymd(year, 12, 31));
        assert_eq!(row.calendar_day_of_year_number, row.calendar_year_days);
    }
}

#[test]
fn test_range_boundaries_derive() {
    let first = derive(ymd(1582, 10, 15));
    assert_eq!(first.calendar_date_key, 15821015);
    assert_eq!(first.calendar_weekday, "Friday");

    let last = derive(ymd(9999, 12, 31));
    assert_eq!(last.calendar_date_key, 99991231);
    assert_eq!(last.calendar_quarter_days, 92);
}

#[test]
fn test_derivation_is_deterministic() {
    for row in rows("2024-02-25", "2024-03-05") {
        assert_eq!(derive(row.calendar_date), row);
    }
}
