use ratatui::{
    style::{Color, Style},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

use user_service::DELIVERY_DELAY;

use crate::app::App;
use crate::ui::{components, layout};

pub fn render(app: &App, frame: &mut Frame) {
    let chunks = layout::create_layout(frame.area());
    components::render_header(components::TITLE, frame, chunks[0]);

    let sections = layout::create_loading_layout(chunks[1]);

    let elapsed = app.loading_elapsed().unwrap_or_default();
    let ratio = (elapsed.as_secs_f64() / DELIVERY_DELAY.as_secs_f64()).clamp(0.0, 1.0);

    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title("Loading"))
        .gauge_style(Style::default().fg(Color::Cyan))
        .label(components::format_duration(elapsed.as_secs_f64()))
        .ratio(ratio);
    frame.render_widget(gauge, sections[1]);

    let message = Paragraph::new("Fetching users...").style(Style::default().fg(Color::Yellow));
    frame.render_widget(message, sections[2]);

    components::render_footer_or_error(
        "q: Quit",
        app.last_error.as_deref(),
        frame,
        chunks[2],
    );
}
