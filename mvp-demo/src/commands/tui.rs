use color_eyre::Result;

/// Run the terminal view until the user quits
pub async fn execute() -> Result<()> {
    tracing::info!("starting terminal view");
    user_tui::run().await
}
