use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

use crate::app::App;
use crate::ui::{components, layout};

const FOOTER: &str = "j/k: Navigate | r: Reload | q: Quit";

pub fn render(app: &App, frame: &mut Frame) {
    let chunks = layout::create_layout(frame.area());
    components::render_header(components::TITLE, frame, chunks[0]);

    let sections = layout::create_master_detail_layout(chunks[1]);
    render_list(app, frame, sections[0]);
    render_details(app, frame, sections[1]);

    components::render_footer_or_error(FOOTER, app.last_error.as_deref(), frame, chunks[2]);
}

pub fn render_empty(app: &App, frame: &mut Frame) {
    let chunks = layout::create_layout(frame.area());
    components::render_header(components::TITLE, frame, chunks[0]);

    let empty_msg = Paragraph::new(vec![
        Line::from("No users available."),
        Line::from(""),
        Line::from("Press 'r' to try again."),
    ])
    .style(Style::default().fg(Color::Yellow))
    .block(Block::default().borders(Borders::ALL).title("Users"))
    .wrap(Wrap { trim: true });
    frame.render_widget(empty_msg, chunks[1]);

    components::render_footer_or_error(
        "r: Reload | q: Quit",
        app.last_error.as_deref(),
        frame,
        chunks[2],
    );
}

fn render_list(app: &App, frame: &mut Frame, area: Rect) {
    let list_items: Vec<ListItem> = app
        .users
        .iter()
        .enumerate()
        .map(|(i, user)| {
            let is_selected = i == app.selected_index;
            let style = if is_selected {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };

            let indicator = if is_selected { "> " } else { "  " };
            let info = format!(" ({})", user.age);

            ListItem::new(Line::from(vec![
                Span::styled(indicator, style),
                Span::styled(user.full_name(), style),
                Span::styled(info, Style::default().fg(Color::DarkGray)),
            ]))
        })
        .collect();

    let list = List::new(list_items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("Users ({})", app.users.len())),
        )
        .style(Style::default());

    frame.render_widget(list, area);
}

fn render_details(app: &App, frame: &mut Frame, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title("Details");

    let Some(user) = app.selected_user() else {
        frame.render_widget(Paragraph::new("").block(block), area);
        return;
    };

    let label = Style::default().fg(Color::Gray);
    let value = Style::default()
        .fg(Color::White)
        .add_modifier(Modifier::BOLD);

    let lines = vec![
        Line::from(vec![
            Span::styled("First name: ", label),
            Span::styled(&user.first_name, value),
        ]),
        Line::from(vec![
            Span::styled("Last name:  ", label),
            Span::styled(&user.last_name, value),
        ]),
        Line::from(vec![
            Span::styled("Email:      ", label),
            Span::styled(&user.email, value),
        ]),
        Line::from(vec![
            Span::styled("Age:        ", label),
            Span::styled(user.age.to_string(), value),
        ]),
    ];

    let details = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(details, area);
}
