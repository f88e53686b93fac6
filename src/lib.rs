//! Range-constrained year / month / day dropdown selection.
//!
//! A [`DateDropdown`] owns an inclusive [`Boundary`] and a partially filled
//! [`SelectionState`]. It produces the legal options for each of the three
//! fields and keeps the fields consistent as the user changes them, clamping
//! the day when a month or year change would push it past the end of the
//! month. Changes are reported through a host supplied [`ChangeDispatcher`].
//!
//! Months are zero-based throughout the API (January is `0`), while date
//! strings use the ISO `YYYY-MM-DD` form with one-based months.

mod boundary;
mod config;
mod consts;
mod dispatch;
mod dropdown;
mod options;
mod prelude;
mod selection;
#[cfg(test)]
mod test_utils;
mod types;

pub use boundary::{Boundary, BoundaryError};
pub use config::{DefaultLabels, DropdownConfig};
pub use consts::*;
pub use dispatch::{ChangeDispatcher, Notification};
pub use dropdown::{DateDropdown, FieldOptions};
pub use options::{
    day_options, month_options, year_options, DropdownOption, MonthLabels, OptionList,
};
pub use selection::{clamp_day, DateField, FieldChange, SelectionState};
pub use types::{
    days_in_month, days_in_selected_month, is_leap_year, longest_month, month_name, Day, Month,
    Year,
};

use crate::prelude::*;
use std::str::FromStr;

/// A concrete calendar date: year, zero-based month and day of month.
///
/// The day is always valid for its month. Ordering is chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{:04}-{:02}-{:02}", "year.get()", "month.number()", "day.get()")]
pub struct CalendarDate {
    year:  Year,
    month: Month,
    day:   Day,
}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    #[display(fmt = "Invalid date format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "Invalid year: {} (must be 1-{})", "_0", MAX_YEAR)]
    InvalidYear(u16),
    #[display(fmt = "Invalid month: {_0}")]
    InvalidMonth(u8),
    #[display(fmt = "Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { month: u8, day: u8, year: u16 },
    #[display(fmt = "Empty date string")]
    EmptyInput,
}

impl std::error::Error for ParseError {}

impl CalendarDate {
    /// Creates a date, checking the day against the month length
    ///
    /// # Errors
    /// Returns `ParseError::InvalidDay` if `day` is past the end of the month.
    pub fn new(year: Year, month: Month, day: Day) -> Result<Self, ParseError> {
        let day = Day::new_in(day.get(), year, month)?;
        Ok(Self { year, month, day })
    }

    /// Creates a date from raw parts (zero-based month)
    ///
    /// # Errors
    /// Returns the `ParseError` of the first component that is out of range.
    pub fn from_parts(year: u16, month: u8, day: u8) -> Result<Self, ParseError> {
        let year = Year::new(year)?;
        let month = Month::new(month)?;
        let day = Day::new_in(day, year, month)?;
        Ok(Self { year, month, day })
    }

    /// Builds a date from a triple whose day may run past the end of the
    /// month. The surplus days carry into the following month.
    ///
    /// `Day` never exceeds 31 and December has 31 days, so the carry never
    /// leaves the year and this is total.
    pub fn from_overflowing(year: Year, month: Month, day: Day) -> Self {
        let len = days_in_month(year, month);
        if day.get() <= len {
            return Self { year, month, day };
        }

        match month.succ() {
            Some(next) => Self {
                year,
                month: next,
                day: Day::clamped(day.get() - len),
            },
            None => Self {
                year,
                month,
                day: Day::last_of(year, month),
            },
        }
    }

    /// The local calendar date according to the system clock.
    ///
    /// # Errors
    /// Returns `ParseError::InvalidYear` if the clock is outside `1..=MAX_YEAR`.
    pub fn today() -> Result<Self, ParseError> {
        Self::try_from(chrono::Local::now().date_naive())
    }

    pub const fn year(&self) -> Year {
        self.year
    }

    pub const fn month(&self) -> Month {
        self.month
    }

    pub const fn day(&self) -> Day {
        self.day
    }

    /// Returns `(year, zero-based month, day)`
    pub const fn to_parts(&self) -> (u16, u8, u8) {
        (self.year.get(), self.month.index(), self.day.get())
    }
}

impl FromStr for CalendarDate {
    type Err = ParseError;

    /// Parses `YYYY`, `YYYY-MM` or `YYYY-MM-DD` with one-based months. A
    /// trailing `T...` time part is ignored; a missing month or day defaults
    /// to the first.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput);
        }

        let date_part = trimmed
            .split_once(TIME_SEPARATOR)
            .map_or(trimmed, |(date, _)| date);

        let parts: Vec<&str> = date_part.split(DATE_SEPARATOR).collect();
        match parts.as_slice() {
            [year] => Self::from_components(year, None, None),
            [year, month] => Self::from_components(year, Some(*month), None),
            [year, month, day] => Self::from_components(year, Some(*month), Some(*day)),
            _ => Err(ParseError::InvalidFormat(format!(
                "Too many {} separators: expected 0-2, found {}",
                DATE_SEPARATOR,
                parts.len() - 1
            ))),
        }
    }
}

impl CalendarDate {
    fn parse_u16(s: &str) -> Result<u16, ParseError> {
        s.parse::<u16>()
            .map_err(|_| ParseError::InvalidFormat(s.to_owned()))
    }

    fn parse_u8(s: &str) -> Result<u8, ParseError> {
        s.parse::<u8>()
            .map_err(|_| ParseError::InvalidFormat(s.to_owned()))
    }

    fn from_components(
        year: &str,
        month: Option<&str>,
        day: Option<&str>,
    ) -> Result<Self, ParseError> {
        let year = Year::new(Self::parse_u16(year)?)?;
        let month = match month {
            Some(m) => Month::from_number(Self::parse_u8(m)?)?,
            None => Month::JANUARY,
        };
        let day = match day {
            Some(d) => Day::new_in(Self::parse_u8(d)?, year, month)?,
            None => Day::FIRST,
        };
        Ok(Self { year, month, day })
    }
}

impl TryFrom<chrono::NaiveDate> for CalendarDate {
    type Error = ParseError;

    fn try_from(date: chrono::NaiveDate) -> Result<Self, Self::Error> {
        use chrono::Datelike;

        let invalid = |_| ParseError::InvalidFormat(date.to_string());
        let year = u16::try_from(date.year()).map_err(invalid)?;
        let month = u8::try_from(date.month0()).map_err(invalid)?;
        let day = u8::try_from(date.day()).map_err(invalid)?;
        Self::from_parts(year, month, day)
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
        let s = <String as serde::Deserialize>::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
