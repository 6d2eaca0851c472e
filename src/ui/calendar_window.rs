use chrono::{Datelike, Month, NaiveDate};
use num_traits::FromPrimitive;
use std::fmt::Display;
use std::fmt::Write;
use unsegen::base::*;
use unsegen::widget::*;

use super::{Context, Theme};
use crate::cursor::days_of_month;
use crate::locale::{month_name, MONTH_NAMES, WEEKDAY_NAMES};
use crate::selection::DayCategory;

pub struct DayCell<'a> {
    day_num: u8,
    is_today: bool,
    focused: bool,
    theme: &'a Theme,
}

impl<'a> DayCell<'a> {
    const CELL_HEIGHT: usize = 1;
    const CELL_WIDTH: usize = 4;

    fn new(day_num: u8, theme: &'a Theme) -> Self {
        DayCell {
            day_num,
            is_today: false,
            focused: false,
            theme,
        }
    }

    fn today(mut self, is_today: bool) -> Self {
        self.is_today = is_today;
        self
    }

    fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }
}

impl Display for DayCell<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let arg_today = if self.is_today {
            self.theme.today_char.unwrap_or(' ')
        } else {
            ' '
        };

        let arg_focus = if self.focused {
            self.theme.focus_char.unwrap_or(' ')
        } else {
            ' '
        };

        write!(f, "{}{}{:>2}", arg_today, arg_focus, self.day_num)
    }
}

/// One month grid. Every day is categorized through the selection and
/// styled accordingly; the focused day gets the focus style on top.
#[derive(Clone)]
pub struct MonthPane<'a> {
    month: Month,
    year: i32,
    num_days: u8,
    offset: u8,
    context: &'a Context,
}

impl<'a> MonthPane<'a> {
    const COLUMNS: usize = 7;
    const ROWS: usize = 6;
    const HEADER_ROWS: usize = 2;

    pub fn new(month: Month, year: i32, context: &'a Context) -> Self {
        let num_days = days_of_month(&month, year);
        let offset = NaiveDate::from_ymd(year, month.number_from_month(), 1)
            .weekday()
            .num_days_from_monday() as u8;

        MonthPane {
            month,
            year,
            num_days: num_days as u8,
            offset,
            context,
        }
    }

    fn category_style(&self, category: DayCategory) -> StyleModifier {
        let theme = &self.context.theme;
        match category {
            DayCategory::Past => theme.past_day_style,
            DayCategory::CheckIn => theme.check_in_style,
            DayCategory::CheckOut => theme.check_out_style,
            DayCategory::InRange => theme.in_range_style,
            DayCategory::Plain => theme.day_style,
        }
    }
}

impl Widget for MonthPane<'_> {
    fn space_demand(&self) -> Demand2D {
        Demand2D {
            width: ColDemand::exact(Self::COLUMNS * DayCell::CELL_WIDTH),
            height: RowDemand::exact(Self::HEADER_ROWS + Self::ROWS * DayCell::CELL_HEIGHT),
        }
    }

    fn draw(&self, mut window: Window, _hints: RenderingHints) {
        let theme = &self.context.theme;
        let today = self.context.today();

        let mut cursor = Cursor::new(&mut window).wrapping_mode(WrappingMode::Wrap);

        // panel header, padded so the cursor wraps to the next row
        cursor.set_style_modifier(theme.month_header_style);
        write!(
            &mut cursor,
            "{:<width$}",
            format!("{} {}", month_name(self.month), self.year),
            width = Self::COLUMNS * DayCell::CELL_WIDTH
        )
        .unwrap();

        cursor.set_style_modifier(theme.weekday_header_style);
        for &head in WEEKDAY_NAMES.iter() {
            write!(
                &mut cursor,
                "{:>width$}",
                &head,
                width = DayCell::CELL_WIDTH
            )
            .unwrap();
        }

        // set offset for first row
        cursor.move_by(
            ColDiff::new((DayCell::CELL_WIDTH * self.offset as usize) as i32),
            RowDiff::new(0),
        );

        for day in 1..=self.num_days {
            let date = NaiveDate::from_ymd(self.year, self.month.number_from_month(), day as u32);
            let focused = self.context.calendar_visible() && date == self.context.focus();

            let style = if focused {
                theme.focus_style
            } else {
                self.category_style(self.context.selection().classify(date, today))
            };

            cursor.set_style_modifier(style);
            write!(
                &mut cursor,
                "{}",
                DayCell::new(day, theme)
                    .today(date == today)
                    .focused(focused)
            )
            .unwrap();
        }
    }
}

/// The month sidebar: twelve tabs, the cursor's month marked active.
pub struct MonthTabs<'a> {
    context: &'a Context,
}

impl<'a> MonthTabs<'a> {
    const TAB_WIDTH: usize = 11;

    pub fn new(context: &'a Context) -> Self {
        MonthTabs { context }
    }
}

impl Widget for MonthTabs<'_> {
    fn space_demand(&self) -> Demand2D {
        Demand2D {
            width: ColDemand::exact(Self::TAB_WIDTH),
            height: RowDemand::exact(MONTH_NAMES.len()),
        }
    }

    fn draw(&self, mut window: Window, _hints: RenderingHints) {
        let theme = &self.context.theme;
        let active = self.context.presenter().cursor().month();

        let mut cursor = Cursor::new(&mut window).wrapping_mode(WrappingMode::Wrap);

        for (idx, &name) in MONTH_NAMES.iter().enumerate() {
            let is_active = Month::from_u32(idx as u32 + 1) == Some(active);

            cursor.set_style_modifier(if is_active {
                theme.month_tab_active_style
            } else {
                theme.month_tab_style
            });

            let marker = if is_active { '▌' } else { ' ' };
            write!(
                &mut cursor,
                "{}{:<width$}",
                marker,
                name,
                width = Self::TAB_WIDTH - 1
            )
            .unwrap();
        }
    }
}

/// Year navigation header above the panels.
pub struct YearHeader<'a> {
    context: &'a Context,
}

impl<'a> YearHeader<'a> {
    pub fn new(context: &'a Context) -> Self {
        YearHeader { context }
    }
}

impl Widget for YearHeader<'_> {
    fn space_demand(&self) -> Demand2D {
        Demand2D {
            width: ColDemand::at_least(20),
            height: RowDemand::exact(1),
        }
    }

    fn draw(&self, mut window: Window, _hints: RenderingHints) {
        let theme = &self.context.theme;
        let mut cursor = Cursor::new(&mut window);

        cursor.set_style_modifier(theme.year_header_style);
        write!(
            &mut cursor,
            "[ Предыдущий год   {}   Следующий год ]",
            self.context.presenter().cursor().year()
        )
        .unwrap();
    }
}
