mod cli;
mod commands;
mod logging;
mod output;

use clap::Parser;
use color_eyre::Result;

use cli::{Cli, Command};

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Command::Tui);

    // The TUI owns the terminal, so it only logs when a file is given
    let to_stderr = !matches!(command, Command::Tui);
    logging::init(&cli.log_level, cli.log_file.as_deref(), to_stderr)?;

    match command {
        Command::Tui => commands::tui::execute().await,
        Command::List(args) => commands::list::execute(args).await,
    }
}
