//! Calendar arithmetic used by the grid, presets and selection logic.
//!
//! Everything here is pure and total: out-of-range numbers roll over the
//! way [`CalendarDate::normalized`] does, and absent operands make the
//! predicates return `false` instead of failing.

use chrono::{NaiveDateTime, NaiveTime};

use crate::{CalendarDate, DateRange, FINANCIAL_YEAR_START_MONTH, YearMonth};

/// Number of days in `month` of `year` (1 = January), leap years included
pub fn days_in_month(year: i32, month: i32) -> u32 {
    YearMonth::new(year, month).day_count()
}

/// Weekday of the 1st of the month, Sunday = 0
pub fn first_weekday(year: i32, month: i32) -> u32 {
    YearMonth::new(year, month).first_weekday()
}

/// Checks whether two optional dates are the same day.
/// Returns `false` if either is absent.
pub fn same_day(a: Option<CalendarDate>, b: Option<CalendarDate>) -> bool {
    matches!((a, b), (Some(a), Some(b)) if a == b)
}

/// Inclusive containment check. Returns `false` if any operand is absent,
/// and for an inverted window (`lo > hi`).
pub fn in_range(date: Option<CalendarDate>, lo: Option<CalendarDate>, hi: Option<CalendarDate>) -> bool {
    match (date, lo, hi) {
        (Some(date), Some(lo), Some(hi)) => lo <= date && date <= hi,
        _ => false,
    }
}

/// Moves `date` by `days` days, saturating at the supported extremes
pub fn add_days(date: CalendarDate, days: i64) -> CalendarDate {
    date.add_days(days)
}

/// Moves `date` by `months` months. Days missing from the target month
/// roll forward, so January 31st plus one month is March 3rd (or 2nd).
pub fn add_months(date: CalendarDate, months: i32) -> CalendarDate {
    date.add_months(months)
}

/// Moves `date` by `years` years. February 29th becomes March 1st in
/// non-leap years.
pub fn add_years(date: CalendarDate, years: i32) -> CalendarDate {
    date.add_years(years)
}

/// Drops the time of day
pub fn start_of_day(moment: NaiveDateTime) -> CalendarDate {
    CalendarDate::from(moment.date())
}

/// Last representable instant of the day (23:59:59.999)
pub fn end_of_day(date: CalendarDate) -> NaiveDateTime {
    let last = NaiveTime::from_hms_milli_opt(23, 59, 59, 999).unwrap_or(NaiveTime::MIN);
    date.naive().and_time(last)
}

/// Checks whether `date` is today on the local wall clock
pub fn is_today(date: CalendarDate) -> bool {
    date == CalendarDate::today()
}

/// April 1st opening the financial year that contains `date`
pub fn financial_year_start(date: CalendarDate) -> CalendarDate {
    let year = if date.month() < FINANCIAL_YEAR_START_MONTH {
        date.year().saturating_sub(1)
    } else {
        date.year()
    };
    YearMonth::new(year, FINANCIAL_YEAR_START_MONTH as i32).first_day()
}

/// March 31st closing the financial year that contains `date`
pub fn financial_year_end(date: CalendarDate) -> CalendarDate {
    financial_year_start(date).add_years(1).add_days(-1)
}

/// The financial year before the one containing `date`
pub fn previous_financial_year(date: CalendarDate) -> DateRange {
    let current_start = financial_year_start(date);
    DateRange::ordered(current_start.add_years(-1), current_start.add_days(-1))
}

/// The financial year containing `date`
pub fn current_financial_year(date: CalendarDate) -> DateRange {
    DateRange::ordered(financial_year_start(date), financial_year_end(date))
}
