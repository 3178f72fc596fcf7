use std::{cmp::Ordering, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{CalendarDate, ParseError, RANGE_SEPARATOR, prelude::*};

/// An inclusive span of calendar days.
/// The start date is always less than or equal to the end date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display(fmt = "{start}/{end}")]
pub struct DateRange {
    start: CalendarDate,
    end:   CalendarDate,
}

/// Error type for date range operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RangeError {
    /// Start date is after end date.
    #[error("Invalid date range: start ({start}) is after end ({end})")]
    InvalidRange { start: CalendarDate, end: CalendarDate },

    /// Error parsing date component.
    #[error(transparent)]
    ParseError(#[from] ParseError),

    /// Invalid range format.
    #[error("Invalid range format: {0}")]
    InvalidFormat(String),
}

impl DateRange {
    /// Creates a new date range with validation.
    ///
    /// # Errors
    /// Returns `RangeError::InvalidRange` if start > end.
    pub fn new(start: CalendarDate, end: CalendarDate) -> Result<Self, RangeError> {
        if start > end {
            return Err(RangeError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Creates the range spanning two dates given in either order
    pub fn ordered(a: CalendarDate, b: CalendarDate) -> Self {
        if b < a { Self { start: b, end: a } } else { Self { start: a, end: b } }
    }

    /// A range covering a single day
    pub const fn single(date: CalendarDate) -> Self {
        Self { start: date, end: date }
    }

    /// Returns the start date of the range
    pub const fn start(&self) -> CalendarDate {
        self.start
    }

    /// Returns the end date of the range
    pub const fn end(&self) -> CalendarDate {
        self.end
    }

    /// Returns both start and end dates as a tuple
    pub const fn dates(&self) -> (CalendarDate, CalendarDate) {
        (self.start, self.end)
    }

    /// Checks if the range contains a given date (both ends inclusive)
    pub fn contains(&self, date: CalendarDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Checks if this range shares at least one day with another range
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start <= other.end && other.start <= self.end
    }

    /// Checks if this range is completely contained within another range
    pub fn is_within(&self, other: &Self) -> bool {
        other.start <= self.start && self.end <= other.end
    }

    /// Number of days covered, counting both ends
    pub fn day_count(&self) -> i64 {
        self.start.days_until(self.end) + 1
    }

    /// Iterates over every day of the range in order
    pub fn days(&self) -> impl Iterator<Item = CalendarDate> + use<> {
        let start = self.start;
        (0..self.day_count()).map(move |offset| start.add_days(offset))
    }
}

impl From<CalendarDate> for DateRange {
    fn from(date: CalendarDate) -> Self {
        Self::single(date)
    }
}

impl FromStr for DateRange {
    type Err = RangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();

        // ISO 8601 interval format: use RANGE_SEPARATOR to separate start/end
        let separator_count = trimmed.matches(RANGE_SEPARATOR).count();

        match separator_count {
            0 => Err(RangeError::InvalidFormat(format!(
                "No range separator found (expected '{RANGE_SEPARATOR}'): {s}"
            ))),
            1 => {
                let (start_str, end_str) = trimmed.split_once(RANGE_SEPARATOR).ok_or_else(|| {
                    RangeError::InvalidFormat(format!("Separator '{RANGE_SEPARATOR}' not found despite count == 1"))
                })?;

                let start = start_str.trim().parse::<CalendarDate>()?;
                let end = end_str.trim().parse::<CalendarDate>()?;

                Self::new(start, end)
            },
            _ => Err(RangeError::InvalidFormat(format!(
                "Too many '{RANGE_SEPARATOR}' separators: expected 1, found {separator_count}"
            ))),
        }
    }
}

impl PartialOrd for DateRange {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for DateRange {
    fn cmp(&self, other: &Self) -> Ordering {
        // Compare start dates first, then end dates
        match self.start.cmp(&other.start) {
            Ordering::Equal => self.end.cmp(&other.end),
            ord => ord,
        }
    }
}

impl Serialize for DateRange {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for DateRange {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
