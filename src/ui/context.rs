use chrono::{Datelike, Duration, Local, Month, NaiveDate};
use num_traits::FromPrimitive;

use crate::config::Config;
use crate::cursor::{days_of_month, CalendarPresenter, YearDirection};
use crate::selection::{ClickOutcome, Endpoint, RangeSelection};

use unsegen::base::style::*;

#[derive(Clone, Debug)]
pub struct Theme {
    pub day_style: StyleModifier,
    pub past_day_style: StyleModifier,
    pub check_in_style: StyleModifier,
    pub check_out_style: StyleModifier,
    pub in_range_style: StyleModifier,
    pub focus_style: StyleModifier,
    pub month_header_style: StyleModifier,
    pub weekday_header_style: StyleModifier,
    pub month_tab_style: StyleModifier,
    pub month_tab_active_style: StyleModifier,
    pub year_header_style: StyleModifier,
    pub field_label_style: StyleModifier,
    pub field_value_style: StyleModifier,
    pub today_char: Option<char>,
    pub focus_char: Option<char>,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            day_style: StyleModifier::default(),
            past_day_style: StyleModifier::default().fg_color(Color::Black),
            check_in_style: StyleModifier::default().bg_color(Color::Green),
            check_out_style: StyleModifier::default().bg_color(Color::Red),
            in_range_style: StyleModifier::default().bg_color(Color::Cyan),
            focus_style: StyleModifier::default().bg_color(Color::Blue),
            month_header_style: StyleModifier::default().fg_color(Color::Yellow),
            weekday_header_style: StyleModifier::default().fg_color(Color::Yellow),
            month_tab_style: StyleModifier::default(),
            month_tab_active_style: StyleModifier::default().invert(true),
            year_header_style: StyleModifier::default().fg_color(Color::Yellow),
            field_label_style: StyleModifier::default().bold(true),
            field_value_style: StyleModifier::default(),
            today_char: Some('*'),
            focus_char: None,
        }
    }
}

impl Theme {
    pub fn from_config(config: &Config) -> Self {
        Theme {
            today_char: config.today_char,
            focus_char: config.focus_char,
            ..Theme::default()
        }
    }
}

/// UI state: the selection, the presenter cursor, the keyboard focus
/// date (hover equivalent) and the currently scrolled-to panel.
/// Single writer (the input loop); widgets only read.
pub struct Context {
    selection: RangeSelection,
    presenter: CalendarPresenter,
    focus: NaiveDate,
    calendar_visible: bool,
    first_visible: Month,
    today: NaiveDate,
    pub theme: Theme,
}

impl Context {
    /// Month panels shown at once in the scroll area.
    pub const VISIBLE_PANES: u32 = 3;

    pub fn new(config: &Config) -> Self {
        let today = Local::now().date_naive();
        let presenter = CalendarPresenter::new();
        let first_visible = clamp_first(presenter.cursor().month());

        Context {
            selection: RangeSelection::new(),
            presenter,
            focus: today,
            calendar_visible: false,
            first_visible,
            today,
            theme: Theme::from_config(config),
        }
    }

    pub fn selection(&self) -> &RangeSelection {
        &self.selection
    }

    pub fn presenter(&self) -> &CalendarPresenter {
        &self.presenter
    }

    pub fn focus(&self) -> NaiveDate {
        self.focus
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    pub fn calendar_visible(&self) -> bool {
        self.calendar_visible
    }

    pub fn first_visible(&self) -> Month {
        self.first_visible
    }

    pub fn update(&mut self) {
        self.today = Local::now().date_naive();
    }

    pub fn show_calendar(&mut self) {
        self.calendar_visible = true;
        self.presenter.show(&self.selection);
    }

    pub fn hide_calendar(&mut self) {
        self.calendar_visible = false;
    }

    /// Moves the keyboard focus; the focused date doubles as the
    /// hovered date for range preview.
    pub fn move_focus(&mut self, delta: Duration) {
        self.focus = self.focus + delta;
        self.selection.set_hover(self.focus);
    }

    pub fn click_focused(&mut self) {
        match self.selection.click(self.focus) {
            ClickOutcome::Completed => self.hide_calendar(),
            ClickOutcome::Anchored => self.presenter.sync_to_endpoint(&self.selection),
        }
    }

    pub fn clear(&mut self, endpoint: Endpoint) {
        self.selection.clear(endpoint);
        if self.calendar_visible {
            self.presenter.sync_to_endpoint(&self.selection);
        }
    }

    pub fn navigate_year(&mut self, direction: YearDirection) {
        self.presenter.navigate_year(direction);

        // Drag the focus into the newly shown year, clamping the day.
        let year = self.presenter.cursor().year();
        if let Some(month) = Month::from_u32(self.focus.month()) {
            let day = self.focus.day().min(days_of_month(&month, year));
            self.focus = NaiveDate::from_ymd(year, self.focus.month(), day);
        }
    }

    pub fn select_month_tab(&mut self, month: Month) {
        self.presenter.select_month(month);
        self.focus = self.presenter.cursor().first_day();
    }

    pub fn select_adjacent_month(&mut self, delta: i32) {
        let number = self.presenter.cursor().month().number_from_month() as i32 - 1;
        let next = (number + delta).rem_euclid(12) as u32 + 1;
        if let Some(month) = Month::from_u32(next) {
            self.select_month_tab(month);
        }
    }

    /// Consumes any pending scroll request from the presenter, otherwise
    /// keeps the focused date's panel in view. Targets outside the
    /// displayable window are clamped, never an error.
    pub fn apply_scroll(&mut self) {
        if let Some(target) = self.presenter.take_scroll_request() {
            self.first_visible = clamp_first(target);
            return;
        }

        if self.focus.year() != self.presenter.cursor().year() {
            return;
        }

        let first = self.first_visible.number_from_month();
        let focused = self.focus.month();
        if focused < first {
            self.first_visible = clamp_first(Month::from_u32(focused).unwrap_or(Month::January));
        } else if focused > first + Self::VISIBLE_PANES - 1 {
            let new_first = focused - (Self::VISIBLE_PANES - 1);
            self.first_visible = clamp_first(Month::from_u32(new_first).unwrap_or(Month::January));
        }
    }

    pub fn visible_months(&self) -> Vec<Month> {
        let first = self.first_visible.number_from_month();
        (first..first + Self::VISIBLE_PANES)
            .filter(|n| *n <= 12)
            .filter_map(Month::from_u32)
            .collect()
    }
}

/// Last panel window start that still fits `VISIBLE_PANES` months.
fn clamp_first(month: Month) -> Month {
    let max_first = 12 - (Context::VISIBLE_PANES - 1);
    if month.number_from_month() > max_first {
        Month::from_u32(max_first).unwrap_or(Month::October)
    } else {
        month
    }
}
