use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::commands::list::ListArgs;

/// Model-View-Presenter demo: fetch a list of mock users and show them
#[derive(Parser, Debug)]
#[command(name = "mvp-demo", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Log filter, e.g. `debug` or `user_service=trace`
    #[arg(long, global = true, env = "MVP_DEMO_LOG", default_value = "warn")]
    pub log_level: String,

    /// Append logs to this file
    #[arg(long, global = true, env = "MVP_DEMO_LOG_FILE", value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Browse the users in a terminal UI (default)
    Tui,
    /// Print the users once they arrive
    List(ListArgs),
}
