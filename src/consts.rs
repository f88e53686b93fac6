/// Maximum valid year (inclusive)
pub const MAX_YEAR: u16 = 9999;

/// Zero-based index of the last month (December)
pub const LAST_MONTH: u8 = 11;

/// Number of months in a year
pub const MONTHS_PER_YEAR: usize = 12;

/// First day of month, used for lower bounds
pub const MIN_DAY: u8 = 1;

/// Longest any month gets
pub const MAX_DAY: u8 = 31;

/// Zero-based index of January
pub const JANUARY: u8 = 0;
/// Zero-based index of February
pub const FEBRUARY: u8 = 1;
/// Zero-based index of December
pub const DECEMBER: u8 = 11;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Days in each month for a non-leap year, indexed by zero-based month.
pub const DAYS_IN_MONTH: [u8; MONTHS_PER_YEAR] = [
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

/// English month names, indexed by zero-based month.
pub const MONTH_NAMES: [&str; MONTHS_PER_YEAR] = [
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

/// Number of leading characters kept for short month labels
pub const SHORT_MONTH_LEN: usize = 3;

/// Start of the selectable range when the host supplies none: 1900-01-01
pub const DEFAULT_START: (u16, u8, u8) = (1900, JANUARY, MIN_DAY);

/// Raw select value hosts use for "nothing selected"
pub const UNSET_RAW: i64 = -1;

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: u16 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: u16 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: u16 = 400;

/// Date component separator (ISO 8601 format)
pub const DATE_SEPARATOR: char = '-';
/// Separator between the date and an (ignored) time part
pub const TIME_SEPARATOR: char = 'T';
