use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_MONTH, DECEMBER, FEBRUARY, FEBRUARY_DAYS_LEAP, FULL_MONTH_NAMES, GREGORIAN_CYCLE,
    JANUARY, LEAP_YEAR_CYCLE, MIN_DAY, MONTH_NAMES, MONTHS_PER_YEAR,
};
use crate::{CalendarDate, prelude::*, saturated_ymd};
use serde::{Deserialize, Serialize};

/// A calendar month of a specific year, the unit shown by one calendar view.
///
/// Construction normalizes out-of-range months by rolling over into the
/// neighbouring years, so `YearMonth::new(2025, 13)` is January 2026 and
/// `YearMonth::new(2026, 0)` is December 2025.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize)]
#[display(fmt = "{year:04}-{month:02}")]
#[serde(from = "(i32, i32)", into = "(i32, i32)")]
pub struct YearMonth {
    year:  i32,
    month: u32,
}

impl YearMonth {
    /// Creates a month view value, rolling over months outside `1..=12`
    pub fn new(year: i32, month: i32) -> Self {
        let index = i64::from(year) * i64::from(MONTHS_PER_YEAR) + i64::from(month) - 1;
        Self::from_index(index)
    }

    /// Returns the month containing `date`
    pub fn of(date: CalendarDate) -> Self {
        Self {
            year:  date.year(),
            month: date.month(),
        }
    }

    /// Returns the year
    #[inline]
    pub const fn year(self) -> i32 {
        self.year
    }

    /// Returns the month (1 = January)
    #[inline]
    pub const fn month(self) -> u32 {
        self.month
    }

    /// Moves by `months` calendar months, crossing year boundaries as needed
    pub fn shifted(self, months: i32) -> Self {
        Self::from_index(self.index() + i64::from(months))
    }

    /// Moves by `years` whole years, keeping the month
    pub fn shifted_years(self, years: i32) -> Self {
        Self::from_index(self.index() + i64::from(years) * i64::from(MONTHS_PER_YEAR))
    }

    /// The following month
    pub fn next(self) -> Self {
        self.shifted(1)
    }

    /// The preceding month
    pub fn prev(self) -> Self {
        self.shifted(-1)
    }

    /// The 1st of this month
    pub fn first_day(self) -> CalendarDate {
        CalendarDate::from(saturated_ymd(self.year, self.month, MIN_DAY))
    }

    /// The last day of this month
    pub fn last_day(self) -> CalendarDate {
        CalendarDate::from(saturated_ymd(self.year, self.month, self.day_count()))
    }

    /// Number of days in this month
    pub const fn day_count(self) -> u32 {
        days_in_month(self.year, self.month)
    }

    /// Weekday of the 1st (Sunday = 0)
    pub fn first_weekday(self) -> u32 {
        self.first_day().weekday()
    }

    /// Checks whether `date` falls inside this month
    pub fn contains(self, date: CalendarDate) -> bool {
        Self::of(date) == self
    }

    /// English abbreviation, e.g. "Jan"
    pub fn short_name(self) -> &'static str {
        MONTH_NAMES.get(self.name_index()).copied().unwrap_or_default()
    }

    /// English name, e.g. "January"
    pub fn full_name(self) -> &'static str {
        FULL_MONTH_NAMES.get(self.name_index()).copied().unwrap_or_default()
    }

    fn name_index(self) -> usize {
        (self.month - JANUARY) as usize
    }

    /// Months elapsed since January of year 0
    fn index(self) -> i64 {
        i64::from(self.year) * i64::from(MONTHS_PER_YEAR) + i64::from(self.month) - i64::from(JANUARY)
    }

    fn from_index(index: i64) -> Self {
        let months = i64::from(MONTHS_PER_YEAR);
        let year = index.div_euclid(months);
        let year = i32::try_from(year).unwrap_or(if year < 0 { i32::MIN } else { i32::MAX });
        // rem_euclid keeps this in 0..12
        let month = u32::try_from(index.rem_euclid(months)).unwrap_or(0) + JANUARY;
        Self { year, month }
    }
}

impl From<CalendarDate> for YearMonth {
    fn from(date: CalendarDate) -> Self {
        Self::of(date)
    }
}

impl From<(i32, i32)> for YearMonth {
    fn from((year, month): (i32, i32)) -> Self {
        Self::new(year, month)
    }
}

impl From<YearMonth> for (i32, i32) {
    fn from(value: YearMonth) -> Self {
        // month is always 1..=12
        (value.year, i32::try_from(value.month).unwrap_or(1))
    }
}

// Helper functions

pub const fn is_leap_year(year: i32) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

pub(crate) const fn days_in_month(year: i32, month: u32) -> u32 {
    debug_assert!(month != 0 && month <= DECEMBER);

    if month == FEBRUARY && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::date;

    #[test]
    fn test_new_keeps_valid_months() {
        for m in 1..=12 {
            let ym = YearMonth::new(2024, m);
            assert_eq!(ym.year(), 2024);
            assert_eq!(i64::from(ym.month()), i64::from(m), "Month {m} should be kept");
        }
    }

    #[test]
    fn test_new_rolls_over_cases() {
        struct TestCase {
            year:        i32,
            month:       i32,
            expected:    (i32, u32),
            description: &'static str,
        }

        let cases = [
            TestCase {
                year:        2025,
                month:       13,
                expected:    (2026, 1),
                description: "month 13 is January of next year",
            },
            TestCase {
                year:        2026,
                month:       0,
                expected:    (2025, 12),
                description: "month 0 is December of previous year",
            },
            TestCase {
                year:        2026,
                month:       -11,
                expected:    (2025, 1),
                description: "negative month counts back",
            },
            TestCase {
                year:        2026,
                month:       25,
                expected:    (2028, 1),
                description: "two years of overflow",
            },
        ];

        for case in &cases {
            let ym = YearMonth::new(case.year, case.month);
            assert_eq!((ym.year(), ym.month()), case.expected, "{}", case.description);
        }
    }

    #[test]
    fn test_names() {
        assert_eq!(YearMonth::new(2026, 1).short_name(), "Jan");
        assert_eq!(YearMonth::new(2026, 9).full_name(), "September");
        assert_eq!(YearMonth::new(2026, 12).short_name(), "Dec");
    }

    #[test]
    fn test_shifted_across_year_boundaries() {
        let dec = YearMonth::new(2025, 12);
        assert_eq!(dec.next(), YearMonth::new(2026, 1));
        assert_eq!(YearMonth::new(2026, 1).prev(), dec);
        assert_eq!(dec.shifted(14), YearMonth::new(2027, 2));
        assert_eq!(dec.shifted(-12), YearMonth::new(2024, 12));
        assert_eq!(dec.shifted_years(-3), YearMonth::new(2022, 12));
    }

    #[test]
    fn test_ordering() {
        let m1 = YearMonth::new(2025, 12);
        let m2 = YearMonth::new(2026, 1);
        assert!(m1 < m2);
        assert!(m2 > m1);
        assert_eq!(m1, m1);
    }

    #[test]
    fn test_first_and_last_day() {
        let feb = YearMonth::new(2024, 2);
        assert_eq!(feb.first_day(), date(2024, 2, 1));
        assert_eq!(feb.last_day(), date(2024, 2, 29));
        assert_eq!(feb.day_count(), 29);
    }

    #[test]
    fn test_first_weekday() {
        // 2026-02-01 is a Sunday, 2026-01-01 a Thursday
        assert_eq!(YearMonth::new(2026, 2).first_weekday(), 0);
        assert_eq!(YearMonth::new(2026, 1).first_weekday(), 4);
    }

    #[test]
    fn test_of_and_contains() {
        let d = date(2026, 1, 15);
        let ym = YearMonth::of(d);
        assert_eq!(ym, YearMonth::new(2026, 1));
        assert!(ym.contains(d));
        assert!(!ym.contains(date(2026, 2, 1)));
    }

    #[test]
    fn test_display() {
        assert_eq!(YearMonth::new(2026, 3).to_string(), "2026-03");
    }

    #[test]
    fn test_serde() {
        let ym = YearMonth::new(2026, 3);
        let json = serde_json::to_string(&ym).expect("failed to serialize month");
        assert_eq!(json, "[2026,3]");

        let parsed: YearMonth = serde_json::from_str("[2025,13]").expect("failed to deserialize month");
        assert_eq!(parsed, YearMonth::new(2026, 1));
    }

    #[test]
    fn test_is_leap_year_cases() {
        struct TestCase {
            year:        i32,
            is_leap:     bool,
            description: &'static str,
        }

        let cases = [
            TestCase {
                year:        2020,
                is_leap:     true,
                description: "divisible by 4",
            },
            TestCase {
                year:        2024,
                is_leap:     true,
                description: "divisible by 4",
            },
            TestCase {
                year:        2023,
                is_leap:     false,
                description: "not divisible by 4",
            },
            TestCase {
                year:        1900,
                is_leap:     false,
                description: "century not divisible by 400",
            },
            TestCase {
                year:        2100,
                is_leap:     false,
                description: "century not divisible by 400",
            },
            TestCase {
                year:        2000,
                is_leap:     true,
                description: "divisible by 400",
            },
            TestCase {
                year:        -4,
                is_leap:     true,
                description: "proleptic year before 1 BCE",
            },
        ];

        for case in &cases {
            assert_eq!(
                is_leap_year(case.year),
                case.is_leap,
                "Year {} ({})",
                case.year,
                case.description,
            );
        }
    }

    #[test]
    fn test_days_in_month_31_day_months() {
        for month in [1, 3, 5, 7, 8, 10, 12] {
            assert_eq!(days_in_month(2024, month), 31, "Month {month} should have 31 days");
        }
    }

    #[test]
    fn test_days_in_month_30_day_months() {
        for month in [4, 6, 9, 11] {
            assert_eq!(days_in_month(2024, month), 30, "Month {month} should have 30 days");
        }
    }

    #[test]
    fn test_days_in_month_february() {
        assert_eq!(days_in_month(2023, 2), 28);
        assert_eq!(days_in_month(1900, 2), 28, "Century year not divisible by 400");
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2000, 2), 29, "Century year divisible by 400");
    }
}
