pub mod config;
pub mod cursor;
pub mod events;
pub mod locale;
pub mod selection;
pub mod ui;
