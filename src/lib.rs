mod calendar;
mod config;
mod consts;
mod format;
mod grid;
mod navigation;
mod picker;
mod prelude;
mod presets;
mod range;
mod selection;
#[cfg(test)]
mod test_utils;
mod types;

pub use calendar::{
    add_days, add_months, add_years, current_financial_year, days_in_month, end_of_day,
    financial_year_end, financial_year_start, first_weekday, in_range, is_today,
    previous_financial_year, same_day, start_of_day,
};
pub use config::PickerOptions;
pub use consts::*;
pub use format::{DateFormat, parse_date};
pub use grid::{CellMonth, DayCell, Grid, build_grid};
pub use navigation::{NavAction, ViewPair};
pub use picker::DateRangePicker;
pub use presets::{CURRENT_FY, LAST_7_DAYS, LAST_30_DAYS, PREV_FY, Preset, PresetCatalog, build_presets};
pub use range::{DateRange, RangeError};
pub use selection::{CellFlags, ChangeCallback, DateBounds, RangeSelection, RangeSelector, SelectionState};
pub use types::{YearMonth, is_leap_year};

use crate::prelude::*;
use chrono::{Datelike, Days, Local, NaiveDate};
use std::str::FromStr;

/// A single day on the proleptic Gregorian calendar.
///
/// Dates carry no time of day and compare by calendar position only. Every
/// arithmetic operation returns a new value; results that would leave the
/// representable range saturate at the first or last supported day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, From, Into)]
#[display(fmt = "{_0}")]
pub struct CalendarDate(NaiveDate);

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    #[display(fmt = "Invalid date format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", DECEMBER)]
    InvalidMonth(u32),
    #[display(fmt = "Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { year: i32, month: u32, day: u32 },
    #[display(fmt = "Year out of supported range: {_0}")]
    YearOutOfRange(i32),
    #[display(fmt = "Empty date string")]
    EmptyInput,
}

impl std::error::Error for ParseError {}

impl CalendarDate {
    /// Creates a date from validated components
    ///
    /// # Errors
    /// Returns `ParseError::InvalidMonth` or `ParseError::InvalidDay` if a
    /// component is out of range, and `ParseError::YearOutOfRange` if the
    /// year cannot be represented.
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, ParseError> {
        if !(JANUARY..=DECEMBER).contains(&month) {
            return Err(ParseError::InvalidMonth(month));
        }
        if day < MIN_DAY || day > types::days_in_month(year, month) {
            return Err(ParseError::InvalidDay { year, month, day });
        }
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or(ParseError::YearOutOfRange(year))
    }

    /// Creates a date, rolling out-of-range months and days over into the
    /// neighbouring months: `(2026, 2, 30)` is March 2nd and `(2026, 3, 0)`
    /// is the last day of February.
    pub fn normalized(year: i32, month: i32, day: i32) -> Self {
        YearMonth::new(year, month)
            .first_day()
            .add_days(i64::from(day) - i64::from(MIN_DAY))
    }

    /// Today's date on the local wall clock
    pub fn today() -> Self {
        Self(Local::now().date_naive())
    }

    /// Returns the year
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Returns the month (1 = January)
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Returns the day of the month
    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Day of the week, Sunday = 0 through Saturday = 6
    pub fn weekday(&self) -> u32 {
        self.0.weekday().num_days_from_sunday()
    }

    /// The month this date belongs to
    pub fn year_month(&self) -> YearMonth {
        YearMonth::of(*self)
    }

    /// The underlying `chrono` date
    pub const fn naive(&self) -> NaiveDate {
        self.0
    }

    /// Moves by `days` days in either direction
    pub fn add_days(self, days: i64) -> Self {
        let step = Days::new(days.unsigned_abs());
        let shifted = if days < 0 {
            self.0.checked_sub_days(step)
        } else {
            self.0.checked_add_days(step)
        };
        Self(shifted.unwrap_or(if days < 0 { NaiveDate::MIN } else { NaiveDate::MAX }))
    }

    /// Moves by `months` calendar months, keeping the day of the month.
    /// A day that does not exist in the target month rolls forward, so
    /// January 31st plus one month lands in early March.
    pub fn add_months(self, months: i32) -> Self {
        self.year_month()
            .shifted(months)
            .first_day()
            .add_days(i64::from(self.day()) - i64::from(MIN_DAY))
    }

    /// Moves by `years` years, keeping month and day. February 29th rolls
    /// forward to March 1st in non-leap years.
    pub fn add_years(self, years: i32) -> Self {
        self.year_month()
            .shifted_years(years)
            .first_day()
            .add_days(i64::from(self.day()) - i64::from(MIN_DAY))
    }

    /// Signed number of days from `self` to `other`
    pub fn days_until(self, other: Self) -> i64 {
        other.0.signed_duration_since(self.0).num_days()
    }
}

/// Builds a `NaiveDate`, saturating at the supported bounds when the year
/// cannot be represented
pub(crate) fn saturated_ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or(if year < 0 { NaiveDate::MIN } else { NaiveDate::MAX })
}

impl FromStr for CalendarDate {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput);
        }

        // Years before 1 or after 9999 carry an explicit sign, as chrono prints them
        let (sign, body) = if trimmed.starts_with(['+', '-']) {
            trimmed.split_at(1)
        } else {
            ("", trimmed)
        };

        let has_hyphen = body.contains(DATE_SEPARATOR);
        let has_slash = body.contains(ALT_DATE_SEPARATOR);
        if has_hyphen && has_slash {
            return Err(ParseError::InvalidFormat(format!(
                "Mixed delimiters ({DATE_SEPARATOR} and {ALT_DATE_SEPARATOR})"
            )));
        }

        let separator = if has_slash { ALT_DATE_SEPARATOR } else { DATE_SEPARATOR };
        let parts: Vec<&str> = body.split(separator).map(str::trim).collect();
        if parts.len() != 3 {
            return Err(ParseError::InvalidFormat(format!(
                "Expected YYYY{separator}MM{separator}DD, found {} parts: {trimmed}",
                parts.len()
            )));
        }

        let year = format!("{sign}{}", parts[0]);
        let year = year
            .parse::<i32>()
            .map_err(|_| ParseError::InvalidFormat(year.clone()))?;
        let month = parts[1]
            .parse::<u32>()
            .map_err(|_| ParseError::InvalidFormat(parts[1].to_owned()))?;
        let day = parts[2]
            .parse::<u32>()
            .map_err(|_| ParseError::InvalidFormat(parts[2].to_owned()))?;

        Self::new(year, month, day)
    }
}

impl serde::Serialize for CalendarDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for CalendarDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
