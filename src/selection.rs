use serde::{Deserialize, Serialize};

use crate::{
    Boundary, BoundaryError, CalendarDate, Day, Month, ParseError, UNSET_RAW, Year,
    days_in_selected_month, prelude::*,
};

/// One of the three dropdown fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DateField {
    #[display(fmt = "year")]
    Year,
    #[display(fmt = "month")]
    Month,
    #[display(fmt = "day")]
    Day,
}

impl DateField {
    pub const ALL: [Self; 3] = [Self::Year, Self::Month, Self::Day];
}

/// A new value picked in one field. `None` is the "no selection" entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldChange {
    Year(Option<Year>),
    Month(Option<Month>),
    Day(Option<Day>),
}

impl FieldChange {
    /// Converts a raw select value into a typed change. `-1` means unset;
    /// months are zero-based.
    ///
    /// # Errors
    /// Returns the newtype's `ParseError` for out of range values and
    /// `ParseError::InvalidFormat` for negative values other than `-1`.
    pub fn from_raw(field: DateField, raw: i64) -> Result<Self, ParseError> {
        if raw == UNSET_RAW {
            return Ok(match field {
                DateField::Year => Self::Year(None),
                DateField::Month => Self::Month(None),
                DateField::Day => Self::Day(None),
            });
        }

        let invalid = || ParseError::InvalidFormat(format!("{field} value {raw}"));
        match field {
            DateField::Year => {
                let value = u16::try_from(raw).map_err(|_| invalid())?;
                Ok(Self::Year(Some(Year::new(value)?)))
            }
            DateField::Month => {
                let value = u8::try_from(raw).map_err(|_| invalid())?;
                Ok(Self::Month(Some(Month::new(value)?)))
            }
            DateField::Day => {
                let value = u8::try_from(raw).map_err(|_| invalid())?;
                Ok(Self::Day(Some(Day::new(value)?)))
            }
        }
    }

    pub const fn field(&self) -> DateField {
        match self {
            Self::Year(_) => DateField::Year,
            Self::Month(_) => DateField::Month,
            Self::Day(_) => DateField::Day,
        }
    }
}

/// The current pick of each field, each possibly unset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SelectionState {
    pub year:  Option<Year>,
    pub month: Option<Month>,
    pub day:   Option<Day>,
}

impl SelectionState {
    /// Nothing selected in any field.
    pub const UNSET: Self = Self {
        year:  None,
        month: None,
        day:   None,
    };

    /// Every field taken from `date`.
    pub const fn from_date(date: CalendarDate) -> Self {
        Self {
            year:  Some(date.year()),
            month: Some(date.month()),
            day:   Some(date.day()),
        }
    }

    /// Builds the initial selection from an optional selected-date string.
    ///
    /// # Errors
    /// Returns `BoundaryError::InvalidSelected` when the string does not parse.
    pub fn resolve(selected: Option<&str>) -> Result<Self, BoundaryError> {
        selected.map_or(Ok(Self::UNSET), |s| {
            s.parse()
                .map(Self::from_date)
                .map_err(BoundaryError::InvalidSelected)
        })
    }

    /// Returns the state after `change`, keeping the fields consistent.
    ///
    /// A day change is taken as-is. A month change clamps the day to the
    /// month's length. A year change also moves the month to the first month
    /// the boundary allows in the new year when the current one is not
    /// allowed (or unset).
    #[must_use]
    pub fn apply(self, change: FieldChange, boundary: &Boundary) -> Self {
        match change {
            FieldChange::Day(day) => Self { day, ..self },
            FieldChange::Month(month) => Self {
                month,
                day: clamp_day(self.year, month, self.day),
                ..self
            },
            FieldChange::Year(year) => {
                let allowed = boundary.span(DateField::Month, year, None);
                let month = match self.month {
                    Some(m) if allowed.contains(&u16::from(m.index())) => Some(m),
                    _ => lowest_month(*allowed.start()),
                };
                Self {
                    year,
                    month,
                    day: clamp_day(year, month, self.day),
                }
            }
        }
    }

    pub const fn is_complete(&self) -> bool {
        self.year.is_some() && self.month.is_some() && self.day.is_some()
    }

    /// The composed date once all three fields are set.
    ///
    /// A day past the end of the month carries into the next month.
    pub fn date(&self) -> Option<CalendarDate> {
        match (self.year, self.month, self.day) {
            (Some(year), Some(month), Some(day)) => {
                Some(CalendarDate::from_overflowing(year, month, day))
            }
            _ => None,
        }
    }

    /// Whether every set field is a legal option under `boundary`.
    pub fn is_within(&self, boundary: &Boundary) -> bool {
        let year_ok = self
            .year
            .is_none_or(|y| boundary.span(DateField::Year, None, None).contains(&y.get()));
        let month_ok = self.month.is_none_or(|m| {
            boundary
                .span(DateField::Month, self.year, None)
                .contains(&u16::from(m.index()))
        });
        let day_ok = self.day.is_none_or(|d| {
            boundary
                .span(DateField::Day, self.year, self.month)
                .contains(&u16::from(d.get()))
        });
        year_ok && month_ok && day_ok
    }
}

/// Pulls `day` back to the last day of the month when it runs past it.
pub fn clamp_day(year: Option<Year>, month: Option<Month>, day: Option<Day>) -> Option<Day> {
    let last = days_in_selected_month(year, month);
    day.map(|d| if d.get() > last { Day::clamped(last) } else { d })
}

// Also defined for an empty span (inverted boundary).
fn lowest_month(start: u16) -> Option<Month> {
    u8::try_from(start).ok().and_then(|m| Month::new(m).ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{bounds, date, day, month, selection, year};

    #[test]
    fn test_from_raw() {
        assert_eq!(
            FieldChange::from_raw(DateField::Year, 2020).unwrap(),
            FieldChange::Year(Some(year(2020)))
        );
        assert_eq!(
            FieldChange::from_raw(DateField::Month, 0).unwrap(),
            FieldChange::Month(Some(month(0)))
        );
        assert_eq!(
            FieldChange::from_raw(DateField::Day, -1).unwrap(),
            FieldChange::Day(None)
        );
        assert!(matches!(
            FieldChange::from_raw(DateField::Month, 12),
            Err(ParseError::InvalidMonth(12))
        ));
        assert!(matches!(
            FieldChange::from_raw(DateField::Day, 0),
            Err(ParseError::InvalidDay { .. })
        ));
        assert!(matches!(
            FieldChange::from_raw(DateField::Year, -7),
            Err(ParseError::InvalidFormat(_))
        ));
        assert!(matches!(
            FieldChange::from_raw(DateField::Day, 300),
            Err(ParseError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_field_change_reports_field() {
        assert_eq!(FieldChange::Year(None).field(), DateField::Year);
        assert_eq!(FieldChange::Month(None).field(), DateField::Month);
        assert_eq!(FieldChange::Day(None).field(), DateField::Day);
    }

    #[test]
    fn test_resolve() {
        assert_eq!(SelectionState::resolve(None).unwrap(), SelectionState::UNSET);
        assert_eq!(
            SelectionState::resolve(Some("2021-07-04")).unwrap(),
            selection(Some(2021), Some(6), Some(4))
        );
        assert!(matches!(
            SelectionState::resolve(Some("07/04/2021")),
            Err(BoundaryError::InvalidSelected(_))
        ));
    }

    #[test]
    fn test_day_change_is_not_clamped() {
        let boundary = bounds((2000, 0, 1), (2030, 11, 31));
        let state = selection(Some(2023), Some(1), Some(10));
        let next = state.apply(FieldChange::Day(Some(day(31))), &boundary);
        assert_eq!(next, selection(Some(2023), Some(1), Some(31)));
    }

    #[test]
    fn test_month_change_clamps_day() {
        let boundary = bounds((2000, 0, 1), (2030, 11, 31));
        let state = selection(Some(2023), Some(0), Some(31));
        let next = state.apply(FieldChange::Month(Some(month(1))), &boundary);
        assert_eq!(next, selection(Some(2023), Some(1), Some(28)));

        let next = state.apply(FieldChange::Month(Some(month(3))), &boundary);
        assert_eq!(next, selection(Some(2023), Some(3), Some(30)));
    }

    #[test]
    fn test_clamp_law_on_month_reselect() {
        let boundary = bounds((1900, 0, 1), (2100, 11, 31));
        for (y, m) in [(2023, 1), (2024, 1), (1900, 1), (2023, 3), (2023, 10)] {
            let state = selection(Some(y), Some(m), Some(31));
            let next = state.apply(FieldChange::Month(Some(month(m))), &boundary);
            let last = crate::days_in_month(year(y), month(m));
            assert_eq!(next.day, Some(day(last)), "{y}-{m}");
            assert!(last <= 31);
        }
    }

    #[test]
    fn test_year_change_keeps_allowed_month() {
        let boundary = bounds((2020, 5, 10), (2022, 2, 20));
        let state = selection(Some(2021), Some(8), Some(15));
        let next = state.apply(FieldChange::Year(Some(year(2020))), &boundary);
        assert_eq!(next, selection(Some(2020), Some(8), Some(15)));
    }

    #[test]
    fn test_year_change_reselects_first_allowed_month() {
        let boundary = bounds((2020, 5, 10), (2022, 2, 20));
        let state = selection(Some(2021), Some(2), Some(31));
        let next = state.apply(FieldChange::Year(Some(year(2020))), &boundary);
        assert_eq!(next, selection(Some(2020), Some(5), Some(30)));
    }

    #[test]
    fn test_year_change_selects_month_when_unset() {
        let boundary = bounds((2020, 5, 10), (2022, 2, 20));
        let next = SelectionState::UNSET.apply(FieldChange::Year(Some(year(2020))), &boundary);
        assert_eq!(next, selection(Some(2020), Some(5), None));

        let next = SelectionState::UNSET.apply(FieldChange::Year(Some(year(2021))), &boundary);
        assert_eq!(next, selection(Some(2021), Some(0), None));
    }

    #[test]
    fn test_year_change_clamps_leap_day() {
        let boundary = bounds((2000, 0, 1), (2030, 11, 31));
        let state = selection(Some(2024), Some(1), Some(29));
        let next = state.apply(FieldChange::Year(Some(year(2023))), &boundary);
        assert_eq!(next, selection(Some(2023), Some(1), Some(28)));
    }

    #[test]
    fn test_unsetting_year_keeps_month_and_day() {
        let boundary = bounds((2020, 5, 10), (2022, 2, 20));
        let state = selection(Some(2021), Some(1), Some(28));
        let next = state.apply(FieldChange::Year(None), &boundary);
        assert_eq!(next, selection(None, Some(1), Some(28)));
    }

    #[test]
    fn test_inverted_boundary_falls_back_to_span_start() {
        let boundary = bounds((2021, 8, 1), (2021, 2, 1));
        let next = SelectionState::UNSET.apply(FieldChange::Year(Some(year(2021))), &boundary);
        assert_eq!(next.month, Some(month(8)));
    }

    #[test]
    fn test_apply_is_idempotent() {
        let boundary = bounds((2020, 5, 10), (2022, 2, 20));
        let state = selection(Some(2021), Some(2), Some(31));
        let change = FieldChange::Year(Some(year(2020)));
        let once = state.apply(change, &boundary);
        assert_eq!(once.apply(change, &boundary), once);
    }

    #[test]
    fn test_round_trip_to_composed_date() {
        let boundary = bounds((1900, 0, 1), (2030, 11, 31));
        let mut state = SelectionState::UNSET;
        state = state.apply(FieldChange::Year(Some(year(2020))), &boundary);
        assert_eq!(state.date(), None);
        state = state.apply(FieldChange::Month(Some(month(1))), &boundary);
        assert_eq!(state.date(), None);
        state = state.apply(FieldChange::Day(Some(day(15))), &boundary);
        assert!(state.is_complete());
        assert_eq!(state.date(), Some(date(2020, 1, 15)));
    }

    #[test]
    fn test_clamp_day() {
        assert_eq!(
            clamp_day(Some(year(2023)), Some(month(1)), Some(day(30))),
            Some(day(28))
        );
        assert_eq!(clamp_day(None, Some(month(1)), Some(day(30))), Some(day(29)));
        assert_eq!(clamp_day(None, None, Some(day(31))), Some(day(31)));
        assert_eq!(clamp_day(Some(year(2023)), Some(month(1)), None), None);
    }

    #[test]
    fn test_is_within() {
        let boundary = bounds((2020, 5, 10), (2022, 2, 20));
        assert!(selection(Some(2021), Some(0), Some(1)).is_within(&boundary));
        assert!(SelectionState::UNSET.is_within(&boundary));
        assert!(!selection(Some(2019), None, None).is_within(&boundary));
        assert!(!selection(Some(2020), Some(4), None).is_within(&boundary));
        assert!(!selection(Some(2020), Some(5), Some(9)).is_within(&boundary));
        assert!(!selection(Some(2022), Some(2), Some(21)).is_within(&boundary));
    }

    #[test]
    fn test_date_field_serde() {
        let json = serde_json::to_string(&DateField::ALL).unwrap();
        assert_eq!(json, r#"["year","month","day"]"#);
        assert_eq!(DateField::Month.to_string(), "month");
    }
}
