use crate::config::Config;
use crate::cursor::YearDirection;
use crate::events::{Dispatcher, Event};
use crate::selection::Endpoint;

use super::{Context, FieldsLine, MonthPane, MonthTabs, YearHeader};

use unsegen::base::Terminal;
use unsegen::input::{Input, Key, Navigatable, NavigateBehavior, OperationResult};
use unsegen::widget::*;

pub struct App {
    context: Context,
}

impl App {
    pub fn new(config: &Config) -> App {
        App {
            context: Context::new(config),
        }
    }

    fn calendar_widget<'w>(&'w self) -> impl Widget + 'w {
        let year = self.context.presenter().cursor().year();

        let mut panes = VLayout::new();
        for month in self.context.visible_months() {
            panes = panes.widget(MonthPane::new(month, year, &self.context));
        }

        VLayout::new().widget(YearHeader::new(&self.context)).widget(
            HLayout::new()
                .widget(MonthTabs::new(&self.context))
                .widget(panes),
        )
    }

    fn as_widget<'w>(&'w self) -> impl Widget + 'w {
        let mut layout = VLayout::new().widget(FieldsLine::new(&self.context));

        if self.context.calendar_visible() {
            layout = layout.widget(self.calendar_widget());
        }

        layout
    }

    pub fn run(
        &mut self,
        dispatcher: Dispatcher,
        mut term: Terminal,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let mut run = true;

        while run {
            // Handle events
            if let Ok(event) = dispatcher.next() {
                match event {
                    Event::Update => self.context.update(),
                    Event::Input(input) => run = self.handle_input(input),
                }
            }

            self.context.apply_scroll();

            // Draw
            let root = term.create_root_window();
            self.as_widget().draw(root, RenderingHints::new());
            term.present();
        }

        Ok(())
    }

    /// One-shot render for non-interactive invocations.
    pub fn render_once(&mut self, mut term: Terminal) -> Result<(), Box<dyn std::error::Error>> {
        self.context.show_calendar();
        self.context.apply_scroll();

        let root = term.create_root_window();
        self.as_widget().draw(root, RenderingHints::new());
        term.present();

        Ok(())
    }

    fn handle_input(&mut self, input: Input) -> bool {
        if input.matches(Key::Esc) {
            self.context.hide_calendar();
            return true;
        }

        let visible = self.context.calendar_visible();

        let leftover = if visible {
            let mut focus = FocusBehaviour(&mut self.context);
            let after = input
                .chain(
                    NavigateBehavior::new(&mut focus)
                        .down_on(Key::Char('j'))
                        .up_on(Key::Char('k'))
                        .left_on(Key::Char('h'))
                        .right_on(Key::Char('l')),
                )
                .finish();

            match after {
                Some(input) => input
                    .chain(
                        NavigateBehavior::new(&mut focus)
                            .down_on(Key::Down)
                            .up_on(Key::Up)
                            .left_on(Key::Left)
                            .right_on(Key::Right),
                    )
                    .finish(),
                None => None,
            }
        } else {
            Some(input)
        };

        if let Some(input) = leftover {
            if let unsegen::input::Event::Key(key) = input.event {
                match key {
                    Key::Char('q') => return false,
                    Key::Char('\n') if visible => self.context.click_focused(),
                    Key::Char('o') | Key::Char('\t') => self.context.show_calendar(),
                    Key::Char('x') => self.context.clear(Endpoint::CheckIn),
                    Key::Char('X') => self.context.clear(Endpoint::CheckOut),
                    Key::Char(']') if visible => self.context.navigate_year(YearDirection::Next),
                    Key::Char('[') if visible => self.context.navigate_year(YearDirection::Prev),
                    Key::Char('n') if visible => self.context.select_adjacent_month(1),
                    Key::Char('p') if visible => self.context.select_adjacent_month(-1),
                    _ => {}
                }
            }
        }

        true
    }
}

struct FocusBehaviour<'a>(&'a mut Context);

impl Navigatable for FocusBehaviour<'_> {
    fn move_down(&mut self) -> OperationResult {
        self.0.move_focus(chrono::Duration::weeks(1));
        Ok(())
    }

    fn move_left(&mut self) -> OperationResult {
        self.0.move_focus(chrono::Duration::days(-1));
        Ok(())
    }

    fn move_right(&mut self) -> OperationResult {
        self.0.move_focus(chrono::Duration::days(1));
        Ok(())
    }

    fn move_up(&mut self) -> OperationResult {
        self.0.move_focus(chrono::Duration::weeks(-1));
        Ok(())
    }
}
