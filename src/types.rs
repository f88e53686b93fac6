use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_MONTH, FEBRUARY, FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE, LAST_MONTH,
    LEAP_YEAR_CYCLE, MAX_DAY, MAX_YEAR, MIN_DAY, MONTH_NAMES,
};
use crate::ParseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU16;
use std::num::NonZeroU8;

/// A year value guaranteed to be in the range `1..=MAX_YEAR` (1..=9999)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct Year(NonZeroU16);

impl Year {
    /// Creates a new Year, validating that it's non-zero and <= `MAX_YEAR`
    ///
    /// # Errors
    /// Returns `ParseError::InvalidYear` if the value is 0 or > `MAX_YEAR`.
    pub fn new(value: u16) -> Result<Self, ParseError> {
        if value > MAX_YEAR {
            return Err(ParseError::InvalidYear(value));
        }
        NonZeroU16::new(value)
            .map(Self)
            .ok_or(ParseError::InvalidYear(value))
    }

    #[inline]
    pub const fn get(self) -> u16 {
        self.0.get()
    }

    /// The following year, or `None` past `MAX_YEAR`.
    pub fn succ(self) -> Option<Self> {
        Self::new(self.get() + 1).ok()
    }

    /// The preceding year, or `None` before year 1.
    pub fn pred(self) -> Option<Self> {
        Self::new(self.get() - 1).ok()
    }

    pub const fn is_leap(self) -> bool {
        is_leap_year(self.get())
    }
}

impl TryFrom<u16> for Year {
    type Error = ParseError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Year> for u16 {
    fn from(year: Year) -> Self {
        year.get()
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A zero-based month index in `0..=LAST_MONTH` (January is 0).
///
/// Serializes as the bare index. Displays as the English month name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Month(u8);

impl Month {
    pub const JANUARY: Self = Self(0);
    pub const DECEMBER: Self = Self(LAST_MONTH);

    /// Creates a month from its zero-based index.
    ///
    /// # Errors
    /// Returns `ParseError::InvalidMonth` if the index is > `LAST_MONTH`.
    pub const fn new(index: u8) -> Result<Self, ParseError> {
        if index > LAST_MONTH {
            return Err(ParseError::InvalidMonth(index));
        }
        Ok(Self(index))
    }

    /// Creates a month from its one-based calendar number (January is 1).
    ///
    /// # Errors
    /// Returns `ParseError::InvalidMonth` if the number is 0 or > 12.
    pub fn from_number(number: u8) -> Result<Self, ParseError> {
        number
            .checked_sub(1)
            .ok_or(ParseError::InvalidMonth(number))
            .and_then(Self::new)
            .map_err(|_| ParseError::InvalidMonth(number))
    }

    /// Zero-based index
    #[inline]
    pub const fn index(self) -> u8 {
        self.0
    }

    /// One-based calendar number
    #[inline]
    pub const fn number(self) -> u8 {
        self.0 + 1
    }

    pub const fn name(self) -> &'static str {
        month_name(self)
    }

    /// The following month within the same year, `None` after December.
    pub fn succ(self) -> Option<Self> {
        Self::new(self.0 + 1).ok()
    }

    /// Every month from January to December.
    pub fn all() -> impl DoubleEndedIterator<Item = Self> {
        (0..=LAST_MONTH).map(Self)
    }
}

impl TryFrom<u8> for Month {
    type Error = ParseError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.0
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A day of month in `1..=31`.
///
/// Validation is context-free: 31 is accepted even though it is not a day of
/// every month. Use [`Day::new_in`] when the month is known.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Day(NonZeroU8);

impl Day {
    pub const FIRST: Self = Self(NonZeroU8::MIN);

    /// Creates a new Day in `MIN_DAY..=MAX_DAY`
    ///
    /// # Errors
    /// Returns `ParseError::InvalidDay` (without month context) if the value
    /// is 0 or > `MAX_DAY`.
    pub fn new(value: u8) -> Result<Self, ParseError> {
        let err = ParseError::InvalidDay {
            month: 0,
            day: value,
            year: 0,
        };
        if value > MAX_DAY {
            return Err(err);
        }
        NonZeroU8::new(value).map(Self).ok_or(err)
    }

    /// Creates a new Day, validating it against the length of the given month
    ///
    /// # Errors
    /// Returns `ParseError::InvalidDay` if the value is 0 or past the end of
    /// the month.
    pub fn new_in(value: u8, year: Year, month: Month) -> Result<Self, ParseError> {
        let err = ParseError::InvalidDay {
            month: month.number(),
            day: value,
            year: year.get(),
        };
        if value > days_in_month(year, month) {
            return Err(err);
        }
        NonZeroU8::new(value).map(Self).ok_or(err)
    }

    /// Last day of the given month
    pub fn last_of(year: Year, month: Month) -> Self {
        Self::clamped(days_in_month(year, month))
    }

    /// Builds a day from a count that is known to lie in `1..=MAX_DAY` after
    /// clamping.
    pub(crate) fn clamped(value: u8) -> Self {
        NonZeroU8::new(value.clamp(MIN_DAY, MAX_DAY)).map_or(Self::FIRST, Self)
    }

    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl TryFrom<u8> for Day {
    type Error = ParseError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Day> for u8 {
    fn from(day: Day) -> Self {
        day.0.get()
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// Helper functions

pub const fn is_leap_year(year: u16) -> bool {
    year % LEAP_YEAR_CYCLE == 0 && (year % CENTURY_CYCLE != 0 || year % GREGORIAN_CYCLE == 0)
}

pub const fn days_in_month(year: Year, month: Month) -> u8 {
    if month.index() == FEBRUARY && year.is_leap() {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month.index() as usize]
    }
}

/// The greatest length `month` has in any year.
pub const fn longest_month(month: Month) -> u8 {
    if month.index() == FEBRUARY {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month.index() as usize]
    }
}

/// Month length for a possibly incomplete selection.
///
/// A missing month allows `MAX_DAY`; a missing year allows the longest the
/// month can be.
pub const fn days_in_selected_month(year: Option<Year>, month: Option<Month>) -> u8 {
    match (year, month) {
        (Some(year), Some(month)) => days_in_month(year, month),
        (None, Some(month)) => longest_month(month),
        (_, None) => MAX_DAY,
    }
}

pub const fn month_name(month: Month) -> &'static str {
    MONTH_NAMES[month.index() as usize]
}
