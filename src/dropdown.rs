use crate::{
    Boundary, BoundaryError, CalendarDate, ChangeDispatcher, DateField, Day, DropdownConfig,
    FieldChange, Month, OptionList, ParseError, SelectionState, Year, day_options, month_options,
    year_options,
};

/// The option list of one field together with its current value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldOptions {
    Year {
        selected: Option<Year>,
        options:  OptionList<Year>,
    },
    Month {
        selected: Option<Month>,
        options:  OptionList<Month>,
    },
    Day {
        selected: Option<Day>,
        options:  OptionList<Day>,
    },
}

impl FieldOptions {
    pub const fn field(&self) -> DateField {
        match self {
            Self::Year { .. } => DateField::Year,
            Self::Month { .. } => DateField::Month,
            Self::Day { .. } => DateField::Day,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Self::Year { options, .. } => options.len(),
            Self::Month { options, .. } => options.len(),
            Self::Day { options, .. } => options.len(),
        }
    }

    /// Never true: every list carries the "no selection" entry.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Labels in display order
    pub fn labels(&self) -> Vec<&str> {
        match self {
            Self::Year { options, .. } => options.iter().map(|o| o.label.as_str()).collect(),
            Self::Month { options, .. } => options.iter().map(|o| o.label.as_str()).collect(),
            Self::Day { options, .. } => options.iter().map(|o| o.label.as_str()).collect(),
        }
    }
}

/// A year / month / day dropdown bound to a date range.
///
/// Owns its boundary, selection, configuration and the dispatcher that is told
/// about every change.
#[derive(Debug, Clone)]
pub struct DateDropdown<D = ()> {
    config:     DropdownConfig,
    boundary:   Boundary,
    selection:  SelectionState,
    dispatcher: D,
}

impl<D: ChangeDispatcher> DateDropdown<D> {
    /// Resolves the configured dates. `today` is the end of the range when
    /// the configuration has no end date.
    ///
    /// # Errors
    /// Returns `BoundaryError` when a configured date does not parse.
    pub fn new(
        config: DropdownConfig,
        today: CalendarDate,
        dispatcher: D,
    ) -> Result<Self, BoundaryError> {
        let boundary = Boundary::resolve(
            config.start_date.as_deref(),
            config.end_date.as_deref(),
            today,
        )?;
        let selection = SelectionState::resolve(config.selected_date.as_deref())?;
        Ok(Self {
            config,
            boundary,
            selection,
            dispatcher,
        })
    }

    pub fn year_options(&self) -> OptionList<Year> {
        year_options(
            &self.boundary,
            self.config.reverse_year_order,
            self.config.default_labels.get(DateField::Year),
        )
    }

    pub fn month_options(&self) -> OptionList<Month> {
        month_options(
            &self.boundary,
            self.selection.year,
            self.config.month_labels(),
            self.config.default_labels.get(DateField::Month),
        )
    }

    pub fn day_options(&self) -> OptionList<Day> {
        day_options(
            &self.boundary,
            self.selection.year,
            self.selection.month,
            self.config.default_labels.get(DateField::Day),
        )
    }

    /// Every configured field with its options, in the configured order.
    pub fn fields(&self) -> Vec<FieldOptions> {
        self.config
            .fields()
            .into_iter()
            .map(|field| match field {
                DateField::Year => FieldOptions::Year {
                    selected: self.selection.year,
                    options:  self.year_options(),
                },
                DateField::Month => FieldOptions::Month {
                    selected: self.selection.month,
                    options:  self.month_options(),
                },
                DateField::Day => FieldOptions::Day {
                    selected: self.selection.day,
                    options:  self.day_options(),
                },
            })
            .collect()
    }

    /// Applies one field change and notifies the dispatcher: first the
    /// field's own callback, then the composed date if every field is set.
    pub fn select(&mut self, change: FieldChange) -> SelectionState {
        let next = self.selection.apply(change, &self.boundary);
        log::debug!(
            "{} changed: {:?} -> {:?}",
            change.field(),
            self.selection,
            next
        );
        self.selection = next;

        match change {
            FieldChange::Year(year) => self.dispatcher.on_year_change(year),
            FieldChange::Month(month) => self.dispatcher.on_month_change(month.map(Month::name)),
            FieldChange::Day(day) => self.dispatcher.on_day_change(day),
        }

        if let Some(date) = next.date() {
            log::trace!("dispatching composed date {date}");
            self.dispatcher.on_date_change(date);
        }

        next
    }

    /// [`select`](Self::select) for a raw select value, `-1` meaning unset.
    ///
    /// # Errors
    /// Returns `ParseError` if `raw` is not a legal value of `field`; the
    /// selection is left untouched and nothing is dispatched.
    pub fn select_raw(&mut self, field: DateField, raw: i64) -> Result<SelectionState, ParseError> {
        let change = FieldChange::from_raw(field, raw)?;
        Ok(self.select(change))
    }

    /// Overwrites the whole selection from a new externally controlled date.
    ///
    /// `None` keeps the current selection. No notifications are sent.
    ///
    /// # Errors
    /// Returns `BoundaryError::InvalidSelected` if the date does not parse;
    /// the selection is left untouched.
    pub fn set_selected_date(&mut self, selected: Option<&str>) -> Result<(), BoundaryError> {
        let Some(selected) = selected else {
            return Ok(());
        };
        self.selection = SelectionState::resolve(Some(selected))?;
        self.config.selected_date = Some(selected.to_owned());
        log::debug!("selection re-synced to {:?}", self.selection);
        Ok(())
    }

    /// Replaces the boundary.
    ///
    /// The current selection is kept as it is, even when it no longer fits
    /// the new range; check [`SelectionState::is_within`] to detect that.
    ///
    /// # Errors
    /// Returns `BoundaryError` if either date does not parse; the old
    /// boundary stays in place.
    pub fn set_bounds(
        &mut self,
        start: Option<&str>,
        end: Option<&str>,
        today: CalendarDate,
    ) -> Result<(), BoundaryError> {
        self.boundary = Boundary::resolve(start, end, today)?;
        self.config.start_date = start.map(str::to_owned);
        self.config.end_date = end.map(str::to_owned);
        if !self.selection.is_within(&self.boundary) {
            log::warn!(
                "selection {:?} lies outside the new boundary {}..={}",
                self.selection,
                self.boundary.start(),
                self.boundary.end()
            );
        }
        Ok(())
    }

    pub const fn selection(&self) -> SelectionState {
        self.selection
    }

    /// The composed date, if every field is set.
    pub fn date(&self) -> Option<CalendarDate> {
        self.selection.date()
    }

    pub const fn boundary(&self) -> &Boundary {
        &self.boundary
    }

    pub const fn config(&self) -> &DropdownConfig {
        &self.config
    }

    pub const fn dispatcher(&self) -> &D {
        &self.dispatcher
    }

    pub const fn dispatcher_mut(&mut self) -> &mut D {
        &mut self.dispatcher
    }

    pub fn into_dispatcher(self) -> D {
        self.dispatcher
    }
}
