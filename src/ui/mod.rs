pub mod app;
pub mod calendar_window;
pub mod context;
pub mod fields;

pub use app::App;
pub use calendar_window::{MonthPane, MonthTabs, YearHeader};
pub use context::{Context, Theme};
pub use fields::FieldsLine;
