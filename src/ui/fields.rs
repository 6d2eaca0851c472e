use std::fmt::Write;
use unsegen::base::*;
use unsegen::widget::*;

use super::Context;
use crate::locale::{format_date, CHECK_IN_LABEL, CHECK_OUT_LABEL};
use crate::selection::Endpoint;

/// The two read-only date fields above the calendar. Each shows its
/// formatted endpoint (or stays blank) together with the key that
/// clears only that endpoint.
pub struct FieldsLine<'a> {
    context: &'a Context,
}

impl<'a> FieldsLine<'a> {
    const VALUE_WIDTH: usize = 16;

    pub fn new(context: &'a Context) -> Self {
        FieldsLine { context }
    }

    fn write_field(&self, cursor: &mut Cursor, label: &str, endpoint: Endpoint, clear_key: char) {
        let theme = &self.context.theme;

        cursor.set_style_modifier(theme.field_label_style);
        write!(cursor, "{}: ", label).unwrap();

        cursor.set_style_modifier(theme.field_value_style);
        match self.context.selection().endpoint(endpoint) {
            Some(date) => {
                write!(
                    cursor,
                    "{:<width$}[{}]",
                    format_date(date),
                    clear_key,
                    width = Self::VALUE_WIDTH
                )
                .unwrap();
            }
            None => {
                write!(cursor, "{:<width$}   ", "", width = Self::VALUE_WIDTH).unwrap();
            }
        }
    }
}

impl Widget for FieldsLine<'_> {
    fn space_demand(&self) -> Demand2D {
        Demand2D {
            width: ColDemand::at_least(2 * (Self::VALUE_WIDTH + 12)),
            height: RowDemand::exact(1),
        }
    }

    fn draw(&self, mut window: Window, _hints: RenderingHints) {
        let mut cursor = Cursor::new(&mut window);

        self.write_field(&mut cursor, CHECK_IN_LABEL, Endpoint::CheckIn, 'x');
        self.write_field(&mut cursor, CHECK_OUT_LABEL, Endpoint::CheckOut, 'X');
    }
}
