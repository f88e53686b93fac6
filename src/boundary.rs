use std::ops::RangeInclusive;

use crate::{
    CalendarDate, DEFAULT_START, Day, LAST_MONTH, MIN_DAY, Month, ParseError, Year,
    days_in_selected_month, selection::DateField,
};

/// The inclusive range of selectable dates.
///
/// `start <= end` is assumed, not checked. With an inverted boundary the
/// spans below come out empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Boundary {
    start: CalendarDate,
    end:   CalendarDate,
}

/// Error type for resolving the dropdown's date inputs.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoundaryError {
    #[error("Invalid start date: {0}")]
    InvalidStart(#[source] ParseError),

    #[error("Invalid end date: {0}")]
    InvalidEnd(#[source] ParseError),

    #[error("Invalid selected date: {0}")]
    InvalidSelected(#[source] ParseError),
}

impl Boundary {
    pub const fn new(start: CalendarDate, end: CalendarDate) -> Self {
        Self { start, end }
    }

    /// Resolves optional start / end date strings.
    ///
    /// A missing start falls back to 1900-01-01, a missing end to `today`.
    ///
    /// # Errors
    /// Returns `BoundaryError::InvalidStart` or `BoundaryError::InvalidEnd`
    /// when a supplied string does not parse.
    pub fn resolve(
        start: Option<&str>,
        end: Option<&str>,
        today: CalendarDate,
    ) -> Result<Self, BoundaryError> {
        let start = match start {
            Some(s) => s.parse().map_err(BoundaryError::InvalidStart)?,
            None => default_start().map_err(BoundaryError::InvalidStart)?,
        };
        let end = match end {
            Some(s) => s.parse().map_err(BoundaryError::InvalidEnd)?,
            None => today,
        };
        log::debug!("resolved date boundary {start}..={end}");
        Ok(Self { start, end })
    }

    pub const fn start(&self) -> CalendarDate {
        self.start
    }

    pub const fn end(&self) -> CalendarDate {
        self.end
    }

    pub fn contains(&self, date: &CalendarDate) -> bool {
        self.start <= *date && *date <= self.end
    }

    /// The legal values of `field` given the fields that enclose it.
    ///
    /// A field is cut to the boundary's start (end) component only while
    /// every enclosing field equals the start (end) date's. Years have no
    /// enclosing field and always span `start.year..=end.year`; months are
    /// enclosed by the year; days by the year and month.
    pub fn span(
        &self,
        field: DateField,
        year: Option<Year>,
        month: Option<Month>,
    ) -> RangeInclusive<u16> {
        let reaches = |edge: &CalendarDate| match field {
            DateField::Year => true,
            DateField::Month => year == Some(edge.year()),
            DateField::Day => year == Some(edge.year()) && month == Some(edge.month()),
        };
        let component = |edge: &CalendarDate| match field {
            DateField::Year => edge.year().get(),
            DateField::Month => u16::from(edge.month().index()),
            DateField::Day => u16::from(edge.day().get()),
        };
        let (first, last) = match field {
            DateField::Year => (self.start.year().get(), self.end.year().get()),
            DateField::Month => (0, u16::from(LAST_MONTH)),
            DateField::Day => (u16::from(MIN_DAY), u16::from(days_in_selected_month(year, month))),
        };

        let low = if reaches(&self.start) { component(&self.start) } else { first };
        let high = if reaches(&self.end) { component(&self.end) } else { last };
        low..=high
    }

    /// Years in the boundary, ascending.
    pub fn years(&self) -> impl DoubleEndedIterator<Item = Year> {
        self.span(DateField::Year, None, None)
            .filter_map(|y| Year::new(y).ok())
    }

    /// Months selectable within `year`, ascending.
    pub fn months_in_year(&self, year: Option<Year>) -> impl DoubleEndedIterator<Item = Month> {
        self.span(DateField::Month, year, None)
            .filter_map(|m| u8::try_from(m).ok().and_then(|m| Month::new(m).ok()))
    }

    /// Days selectable within `year` and `month`, ascending.
    pub fn days_in_month(
        &self,
        year: Option<Year>,
        month: Option<Month>,
    ) -> impl DoubleEndedIterator<Item = Day> {
        self.span(DateField::Day, year, month)
            .filter_map(|d| u8::try_from(d).ok().and_then(|d| Day::new(d).ok()))
    }
}

fn default_start() -> Result<CalendarDate, ParseError> {
    let (year, month, day) = DEFAULT_START;
    CalendarDate::from_parts(year, month, day)
}
