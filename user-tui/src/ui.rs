pub mod components;
pub mod layout;
pub mod loading;
pub mod user_list;

use ratatui::Frame;

use crate::app::{App, AppState};

pub fn render(app: &App, frame: &mut Frame) {
    match app.state {
        AppState::Loading => loading::render(app, frame),
        AppState::UserList => user_list::render(app, frame),
        AppState::Empty => user_list::render_empty(app, frame),
    }
}
