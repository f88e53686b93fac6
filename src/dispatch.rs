use crate::{CalendarDate, Day, Year};

/// Receives the dropdown's change notifications.
///
/// For a single change the field's own callback runs first, then
/// `on_date_change` if all three fields are set. Every method defaults to
/// doing nothing.
pub trait ChangeDispatcher {
    fn on_year_change(&mut self, _year: Option<Year>) {}

    /// Receives the full English name of the picked month.
    fn on_month_change(&mut self, _month: Option<&'static str>) {}

    fn on_day_change(&mut self, _day: Option<Day>) {}

    fn on_date_change(&mut self, _date: CalendarDate) {}
}

/// Discards every notification.
impl ChangeDispatcher for () {}

/// A recorded notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Notification {
    Year(Option<Year>),
    Month(Option<&'static str>),
    Day(Option<Day>),
    Date(CalendarDate),
}

/// Records notifications in the order they were sent.
impl ChangeDispatcher for Vec<Notification> {
    fn on_year_change(&mut self, year: Option<Year>) {
        self.push(Notification::Year(year));
    }

    fn on_month_change(&mut self, month: Option<&'static str>) {
        self.push(Notification::Month(month));
    }

    fn on_day_change(&mut self, day: Option<Day>) {
        self.push(Notification::Day(day));
    }

    fn on_date_change(&mut self, date: CalendarDate) {
        self.push(Notification::Date(date));
    }
}

impl<D: ChangeDispatcher + ?Sized> ChangeDispatcher for &mut D {
    fn on_year_change(&mut self, year: Option<Year>) {
        (**self).on_year_change(year);
    }

    fn on_month_change(&mut self, month: Option<&'static str>) {
        (**self).on_month_change(month);
    }

    fn on_day_change(&mut self, day: Option<Day>) {
        (**self).on_day_change(day);
    }

    fn on_date_change(&mut self, date: CalendarDate) {
        (**self).on_date_change(date);
    }
}
