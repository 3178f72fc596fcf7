/// Months in a calendar year
pub const MONTHS_PER_YEAR: i32 = 12;

/// Month number for January
pub const JANUARY: u32 = 1;
/// Month number for February
pub const FEBRUARY: u32 = 2;
/// Month number for April
pub const APRIL: u32 = 4;
/// Month number for December
pub const DECEMBER: u32 = 12;

/// First day of month
pub const MIN_DAY: u32 = 1;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u32 = 29;

/// Maximum days in each month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u32; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: i32 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: i32 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: i32 = 400;

/// Columns of a month grid, Sunday first
pub const DAYS_PER_WEEK: usize = 7;
/// Rows of a month grid
pub const GRID_ROWS: usize = 6;
/// Cells of a month grid
pub const GRID_CELLS: usize = DAYS_PER_WEEK * GRID_ROWS;

/// Month the financial year opens on (April 1st)
pub const FINANCIAL_YEAR_START_MONTH: u32 = APRIL;

/// Date component separator (ISO 8601 format)
pub const DATE_SEPARATOR: char = '-';
/// Alternate date component separator accepted when parsing
pub const ALT_DATE_SEPARATOR: char = '/';
/// Range separator (ISO 8601 interval format)
pub const RANGE_SEPARATOR: char = '/';

/// Display pattern used when none is configured
pub const DEFAULT_FORMAT: &str = "YYYY-MM-DD";
/// Text placed between start and end in the input field
pub const DEFAULT_DISPLAY_SEPARATOR: &str = " ~ ";
/// Placeholder for the start half of the input field
pub const DEFAULT_START_PLACEHOLDER: &str = "Start Date";
/// Placeholder for the end half of the input field
pub const DEFAULT_END_PLACEHOLDER: &str = "End Date";
/// Delay before the popup closes after a completed selection
pub const DEFAULT_CLOSE_DELAY_MS: u64 = 150;

/// Weekday header labels, Sunday first
pub const WEEKDAY_NAMES: [&str; DAYS_PER_WEEK] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Short month names, January first
pub const MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Full month names, January first
pub const FULL_MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];
