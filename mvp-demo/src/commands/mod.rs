pub mod list;
pub mod tui;
