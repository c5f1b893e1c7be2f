// Date utility functions
// Month arithmetic on naive calendar dates

use chrono::{Datelike, NaiveDate};

/// First day of the month containing `date`
pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// Last day of the month containing `date`
pub fn last_of_month(date: NaiveDate) -> NaiveDate {
    let last = last_day_of_month(date.year(), date.month());
    date.with_day(last).unwrap_or(date)
}

/// Shift by whole months, clamping the day to the target month's length
/// (Jan 31 + 1 month lands on Feb 28 or 29).
pub fn shift_month_preserving_day(current: NaiveDate, delta_months: i32) -> NaiveDate {
    let total_months = (current.year() * 12) + (current.month() as i32 - 1) + delta_months;
    let new_year = total_months.div_euclid(12);
    let new_month = total_months.rem_euclid(12) + 1;
    clamp_day(new_year, new_month as u32, current.day()).unwrap_or(current)
}

fn clamp_day(year: i32, month: u32, desired_day: u32) -> Option<NaiveDate> {
    let max_day = last_day_of_month(year, month);
    NaiveDate::from_ymd_opt(year, month, desired_day.min(max_day))
}

/// Number of days in `month` of `year` (28..=31)
pub fn last_day_of_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|first_of_next| first_of_next.pred_opt())
        .map_or(31, |last| last.day())
}
