use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Standard 3-section layout: header, main, footer
pub fn create_layout(area: Rect) -> Vec<Rect> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(3),
        ])
        .split(area)
        .to_vec()
}

/// List on the left, details of the selected entry on the right
pub fn create_master_detail_layout(area: Rect) -> Vec<Rect> {
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(area)
        .to_vec()
}

/// Loading layout: spacer, progress bar, message
pub fn create_loading_layout(area: Rect) -> Vec<Rect> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Spacer
            Constraint::Length(3), // Progress bar
            Constraint::Length(2), // Message
            Constraint::Min(0),    // Spacer
        ])
        .split(area)
        .to_vec()
}
