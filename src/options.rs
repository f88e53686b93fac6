//! Option lists for the three dropdowns.
//!
//! Every list starts with exactly one "no selection" entry whose value is
//! `None`, followed by the legal values for the current selection.

use serde::Serialize;

use crate::{Boundary, Day, Month, SHORT_MONTH_LEN, Year};

/// One entry of a dropdown.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct DropdownOption<T> {
    pub value: Option<T>,
    pub label: String,
}

pub type OptionList<T> = Vec<DropdownOption<T>>;

impl<T> DropdownOption<T> {
    pub fn unset(label: impl Into<String>) -> Self {
        Self {
            value: None,
            label: label.into(),
        }
    }

    pub fn new(value: T, label: impl Into<String>) -> Self {
        Self {
            value: Some(value),
            label: label.into(),
        }
    }

    pub const fn is_unset(&self) -> bool {
        self.value.is_none()
    }
}

/// How month names are rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct MonthLabels {
    /// Keep only the first three characters
    pub short: bool,
    /// Upper-case, applied after shortening
    pub upper_case: bool,
}

impl MonthLabels {
    pub fn label(self, month: Month) -> String {
        let name = month.name();
        let label: String = if self.short {
            name.chars().take(SHORT_MONTH_LEN).collect()
        } else {
            name.to_owned()
        };
        if self.upper_case { label.to_uppercase() } else { label }
    }
}

/// Years of the boundary, ascending or (when `reverse`) descending.
pub fn year_options(boundary: &Boundary, reverse: bool, default_label: &str) -> OptionList<Year> {
    let entry = |y: Year| DropdownOption::new(y, y.to_string());
    let mut options = vec![DropdownOption::unset(default_label)];
    if reverse {
        options.extend(boundary.years().rev().map(entry));
    } else {
        options.extend(boundary.years().map(entry));
    }
    options
}

/// Months selectable in `year`, labelled per `labels`.
pub fn month_options(
    boundary: &Boundary,
    year: Option<Year>,
    labels: MonthLabels,
    default_label: &str,
) -> OptionList<Month> {
    std::iter::once(DropdownOption::unset(default_label))
        .chain(
            boundary
                .months_in_year(year)
                .map(|m| DropdownOption::new(m, labels.label(m))),
        )
        .collect()
}

/// Days selectable in `year` and `month`.
pub fn day_options(
    boundary: &Boundary,
    year: Option<Year>,
    month: Option<Month>,
    default_label: &str,
) -> OptionList<Day> {
    std::iter::once(DropdownOption::unset(default_label))
        .chain(
            boundary
                .days_in_month(year, month)
                .map(|d| DropdownOption::new(d, d.to_string())),
        )
        .collect()
}
