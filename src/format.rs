use serde::{Deserialize, Serialize};

use crate::{ALT_DATE_SEPARATOR, CalendarDate, DATE_SEPARATOR, DEFAULT_FORMAT, prelude::*};

const YEAR_TOKEN: &str = "YYYY";
const MONTH_TOKEN: &str = "MM";
const DAY_TOKEN: &str = "DD";

/// Extra separator accepted when reading user input
const DOT_SEPARATOR: char = '.';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Year,
    Month,
    Day,
}

/// A display pattern built from `YYYY`, `MM` and `DD` tokens, such as
/// `YYYY-MM-DD` or `DD/MM/YYYY`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[display(fmt = "{_0}")]
#[serde(transparent)]
pub struct DateFormat(String);

impl DateFormat {
    pub fn new(pattern: impl Into<String>) -> Self {
        Self(pattern.into())
    }

    pub fn pattern(&self) -> &str {
        &self.0
    }

    /// Renders `date` through the pattern. Only the first occurrence of
    /// each token is replaced. Returns an empty string for `None`.
    pub fn format(&self, date: Option<CalendarDate>) -> String {
        let Some(date) = date else {
            return String::new();
        };

        self.0
            .replacen(YEAR_TOKEN, &format!("{:04}", date.year()), 1)
            .replacen(MONTH_TOKEN, &format!("{:02}", date.month()), 1)
            .replacen(DAY_TOKEN, &format!("{:02}", date.day()), 1)
    }

    /// Reads a date typed in this pattern's field order.
    ///
    /// Any of `-`, `/` or `.` may separate the three numeric fields.
    /// Out-of-range months and days roll over into the neighbouring months,
    /// so `2026-02-30` reads as March 2nd. Returns `None` for anything else.
    pub fn parse(&self, input: &str) -> Option<CalendarDate> {
        let input = input.trim();
        if input.is_empty() {
            return None;
        }

        let values = input
            .split([DATE_SEPARATOR, ALT_DATE_SEPARATOR, DOT_SEPARATOR])
            .map(|part| part.trim().parse::<i32>().ok())
            .collect::<Option<Vec<i32>>>()?;
        if values.len() != 3 {
            return None;
        }

        let (mut year, mut month, mut day) = (0, 0, 0);
        for (field, value) in self.field_order().into_iter().zip(values) {
            match field {
                Field::Year => year = value,
                Field::Month => month = value,
                Field::Day => day = value,
            }
        }

        Some(CalendarDate::normalized(year, month, day))
    }

    /// Token order in the pattern, falling back to year-month-day when a
    /// token is missing
    fn field_order(&self) -> [Field; 3] {
        let mut fields = [
            (Field::Year, self.0.find(YEAR_TOKEN)),
            (Field::Month, self.0.find(MONTH_TOKEN)),
            (Field::Day, self.0.find(DAY_TOKEN)),
        ];
        if fields.iter().any(|(_, position)| position.is_none()) {
            return [Field::Year, Field::Month, Field::Day];
        }
        fields.sort_by_key(|(_, position)| *position);
        fields.map(|(field, _)| field)
    }
}

impl Default for DateFormat {
    fn default() -> Self {
        Self::new(DEFAULT_FORMAT)
    }
}

impl From<&str> for DateFormat {
    fn from(pattern: &str) -> Self {
        Self::new(pattern)
    }
}

impl From<String> for DateFormat {
    fn from(pattern: String) -> Self {
        Self(pattern)
    }
}

/// Reads a year-month-day date, see [`DateFormat::parse`]
pub fn parse_date(input: &str) -> Option<CalendarDate> {
    DateFormat::default().parse(input)
}
