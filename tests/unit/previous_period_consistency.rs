//! Previous-period columns must equal the current-period columns of the
//! row derived directly for the shifted date.

use calendar_dimension::calendar::{derive, DateRange};
use chrono::{Days, Months, NaiveDate};

fn dates() -> impl Iterator<Item = NaiveDate> {
    DateRange::parse("2023-11-15", "2024-04-15").unwrap().dates()
}

#[test]
fn test_previous_week_matches_seven_days_earlier() {
    for date in dates() {
        let row = derive(date);
        let earlier = derive(date - Days::new(7));
        assert_eq!(row.previous_week_calendar_week_number, earlier.calendar_week_number);
        assert_eq!(row.previous_week_calendar_start_of_week, earlier.calendar_start_of_week);
        assert_eq!(row.previous_week_calendar_end_of_week, earlier.calendar_end_of_week);
        assert_eq!(
            row.previous_week_calendar_year_week_number,
            earlier.calendar_year_week_number
        );
        assert_eq!(row.previous_week_calendar_week_year, earlier.calendar_week_year);
    }
}

#[test]
fn test_previous_year_week_matches_52_weeks_earlier() {
    for date in dates() {
        let row = derive(date);
        let earlier = derive(date - Days::new(364));
        assert_eq!(row.previous_year_calendar_week_number, earlier.calendar_week_number);
        assert_eq!(row.previous_year_calendar_start_of_week, earlier.calendar_start_of_week);
        assert_eq!(row.previous_year_calendar_week_year, earlier.calendar_week_year);
    }
}

#[test]
fn test_previous_month_matches_one_month_earlier() {
    for date in dates() {
        let row = derive(date);
        let earlier = derive(date - Months::new(1));
        assert_eq!(row.previous_month_calendar_month_number, earlier.calendar_month_number);
        assert_eq!(row.previous_month_calendar_month, earlier.calendar_month);
        assert_eq!(row.previous_month_calendar_day_of_month, earlier.calendar_day_of_month);
        assert_eq!(row.previous_month_calendar_start_of_month, earlier.calendar_start_of_month);
        assert_eq!(row.previous_month_calendar_end_of_month, earlier.calendar_end_of_month);
        assert_eq!(row.previous_month_calendar_month_days, earlier.calendar_month_days);
    }
}

#[test]
fn test_previous_quarter_matches_three_months_earlier() {
    for date in dates() {
        let row = derive(date);
        let earlier = derive(date - Months::new(3));
        assert_eq!(
            row.previous_quarter_calendar_quarter_number,
            earlier.calendar_quarter_number
        );
        assert_eq!(
            row.previous_quarter_calendar_day_of_quarter,
            earlier.calendar_day_of_quarter
        );
        assert_eq!(
            row.previous_quarter_calendar_start_of_quarter,
            earlier.calendar_start_of_quarter
        );
        assert_eq!(
            row.previous_quarter_calendar_quarter_days,
            earlier.calendar_quarter_days
        );
    }
}

#[test]
fn test_previous_year_families_share_one_shift() {
    for date in dates() {
        let row = derive(date);
        let earlier = derive(date - Months::new(12));
        assert_eq!(row.previous_year_calendar_month_year, earlier.calendar_month_year);
        assert_eq!(row.previous_year_calendar_quarter_year, earlier.calendar_quarter_year);
        assert_eq!(row.previous_year_calendar_year_number, earlier.calendar_year_number);
        assert_eq!(
            row.previous_year_calendar_day_of_year_number,
            earlier.calendar_day_of_year_number
        );
        assert_eq!(row.previous_year_calendar_year_days, earlier.calendar_year_days);
    }
}

#[test]
fn test_leap_day_previous_year_clamps() {
    let row = derive(NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
    assert_eq!(row.previous_year_calendar_day_of_month, 28);
    assert_eq!(row.previous_year_calendar_year_days, 365);
    assert_eq!(row.previous_year_calendar_month_days, 28);
}
