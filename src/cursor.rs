use chrono::{Datelike, Local, Month, NaiveDate};
use num_traits::FromPrimitive;

use crate::selection::RangeSelection;

/// Number of days in a month, leap years included.
pub fn days_of_month(month: &Month, year: i32) -> u32 {
    if month.number_from_month() == 12 {
        NaiveDate::from_ymd(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd(year, month.number_from_month() as u32 + 1, 1)
    }
    .signed_duration_since(NaiveDate::from_ymd(
        year,
        month.number_from_month() as u32,
        1,
    ))
    .num_days() as u32
}

/// The month panel the view is currently targeting. Year is an
/// unconstrained integer; navigation never clamps it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewCursor {
    month: Month,
    year: i32,
}

impl ViewCursor {
    pub fn new(month: Month, year: i32) -> Self {
        ViewCursor { month, year }
    }

    pub fn month(&self) -> Month {
        self.month
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// First day of the targeted panel.
    pub fn first_day(&self) -> NaiveDate {
        NaiveDate::from_ymd(self.year, self.month.number_from_month() as u32, 1)
    }
}

impl Default for ViewCursor {
    fn default() -> Self {
        let today = Local::now().date_naive();
        ViewCursor {
            month: Month::from_u32(today.month()).unwrap_or(Month::January),
            year: today.year(),
        }
    }
}

impl<T: Datelike> From<T> for ViewCursor {
    fn from(d: T) -> Self {
        ViewCursor::new(
            Month::from_u32(d.month()).unwrap_or(Month::January),
            d.year(),
        )
    }
}

impl PartialOrd for ViewCursor {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        if self.year != other.year {
            self.year.partial_cmp(&other.year)
        } else {
            self.month
                .number_from_month()
                .partial_cmp(&other.month.number_from_month())
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum YearDirection {
    Prev,
    Next,
}

/// Keeps the view cursor in step with the selection and hands one-shot
/// scroll targets to the rendering layer.
///
/// Every cursor change that originates from an endpoint change produces
/// exactly one scroll request; direct month/year navigation produces its
/// own and nothing re-triggers recursively. Requests are fire-and-forget:
/// whoever consumes them may find no matching panel and simply drop them.
#[derive(Debug, Clone, Default)]
pub struct CalendarPresenter {
    cursor: ViewCursor,
    pending_scroll: Option<Month>,
}

impl CalendarPresenter {
    pub fn new() -> Self {
        CalendarPresenter::default()
    }

    pub fn cursor(&self) -> ViewCursor {
        self.cursor
    }

    /// Called when the calendar becomes visible: re-center on whichever
    /// endpoint resolves first. Nothing happens without endpoints.
    pub fn show(&mut self, selection: &RangeSelection) {
        self.recenter(selection);
    }

    /// Called after a click or clear changed an endpoint while the
    /// calendar stays open.
    pub fn sync_to_endpoint(&mut self, selection: &RangeSelection) {
        self.recenter(selection);
    }

    fn recenter(&mut self, selection: &RangeSelection) {
        if let Some(target) = selection.check_in().or_else(|| selection.check_out()) {
            self.cursor = ViewCursor::from(target);
            self.pending_scroll = Some(self.cursor.month);
            log::debug!("view re-centered on {}", target);
        }
    }

    pub fn navigate_year(&mut self, direction: YearDirection) {
        self.cursor.year += match direction {
            YearDirection::Prev => -1,
            YearDirection::Next => 1,
        };
    }

    /// Month-tab selection: jump the view to a panel of the current year.
    pub fn select_month(&mut self, month: Month) {
        self.cursor.month = month;
        self.pending_scroll = Some(month);
    }

    /// Takes the outstanding scroll target, if any. One-shot.
    pub fn take_scroll_request(&mut self) -> Option<Month> {
        self.pending_scroll.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selection::Endpoint;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn month_lengths() {
        assert_eq!(days_of_month(&Month::February, 2024), 29);
        assert_eq!(days_of_month(&Month::February, 2023), 28);
        assert_eq!(days_of_month(&Month::December, 2024), 31);
    }

    #[test]
    fn show_centers_on_check_in_first() {
        let mut sel = RangeSelection::new();
        sel.click(date(2024, 3, 10));
        sel.click(date(2024, 5, 2));

        let mut presenter = CalendarPresenter::new();
        presenter.show(&sel);
        assert_eq!(presenter.cursor().month(), Month::March);
        assert_eq!(presenter.cursor().year(), 2024);
        assert_eq!(presenter.take_scroll_request(), Some(Month::March));
    }

    #[test]
    fn show_falls_back_to_checkout() {
        let mut sel = RangeSelection::new();
        sel.click(date(2024, 3, 10));
        sel.click(date(2024, 5, 2));
        sel.clear(Endpoint::CheckIn);

        let mut presenter = CalendarPresenter::new();
        presenter.show(&sel);
        assert_eq!(presenter.cursor().month(), Month::May);
    }

    #[test]
    fn show_without_endpoints_requests_nothing() {
        let mut presenter = CalendarPresenter::new();
        let before = presenter.cursor();
        presenter.show(&RangeSelection::new());
        assert_eq!(presenter.cursor(), before);
        assert_eq!(presenter.take_scroll_request(), None);
    }

    #[test]
    fn scroll_requests_are_one_shot() {
        let mut presenter = CalendarPresenter::new();
        presenter.select_month(Month::August);
        assert_eq!(presenter.take_scroll_request(), Some(Month::August));
        assert_eq!(presenter.take_scroll_request(), None);
    }

    #[test]
    fn year_navigation_is_unbounded() {
        let mut presenter = CalendarPresenter::new();
        presenter.select_month(Month::June);
        presenter.take_scroll_request();

        let start = presenter.cursor().year();
        for _ in 0..start.unsigned_abs() + 10 {
            presenter.navigate_year(YearDirection::Prev);
        }
        assert!(presenter.cursor().year() < 0);
        // Month survives year navigation, and no scroll was requested.
        assert_eq!(presenter.cursor().month(), Month::June);
        assert_eq!(presenter.take_scroll_request(), None);
    }

    #[test]
    fn month_tab_keeps_year() {
        let mut presenter = CalendarPresenter::new();
        presenter.navigate_year(YearDirection::Next);
        let year = presenter.cursor().year();
        presenter.select_month(Month::October);
        assert_eq!(presenter.cursor().year(), year);
        assert_eq!(presenter.cursor().month(), Month::October);
    }

    #[test]
    fn cursor_ordering_is_year_major() {
        let a = ViewCursor::new(Month::December, 2023);
        let b = ViewCursor::new(Month::January, 2024);
        assert!(a < b);
        assert!(ViewCursor::new(Month::March, 2024) < ViewCursor::new(Month::April, 2024));
    }
}
