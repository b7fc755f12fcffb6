mod app;
mod events;
mod ui;

pub use app::{App, AppState};

use color_eyre::Result;

pub async fn run() -> Result<()> {
    let terminal = ratatui::init();
    let result = App::new()?.run(terminal).await;
    ratatui::restore();
    result
}
