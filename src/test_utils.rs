//! Builders shared by the unit tests.

use crate::{Boundary, CalendarDate, Day, Month, SelectionState, Year};

pub fn year(value: u16) -> Year {
    Year::new(value).expect("valid year in test")
}

pub fn month(index: u8) -> Month {
    Month::new(index).expect("valid month in test")
}

pub fn day(value: u8) -> Day {
    Day::new(value).expect("valid day in test")
}

/// Date with a zero-based month
pub fn date(y: u16, m: u8, d: u8) -> CalendarDate {
    CalendarDate::from_parts(y, m, d).expect("valid date in test")
}

/// Boundary from two `(year, zero-based month, day)` triples
pub fn bounds(start: (u16, u8, u8), end: (u16, u8, u8)) -> Boundary {
    Boundary::new(date(start.0, start.1, start.2), date(end.0, end.1, end.2))
}

pub fn selection(y: Option<u16>, m: Option<u8>, d: Option<u8>) -> SelectionState {
    SelectionState {
        year:  y.map(year),
        month: m.map(month),
        day:   d.map(day),
    }
}
