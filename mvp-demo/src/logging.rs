// Logging setup
// Installs a tracing subscriber writing to stderr or to a log file

use std::fs::{File, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use color_eyre::eyre::{eyre, Result, WrapErr};
use tracing_subscriber::EnvFilter;

/// Install the global subscriber.
///
/// With a `file`, logs are appended there. Otherwise they go to stderr when
/// `to_stderr` is set and are discarded when it is not.
pub fn init(filter: &str, file: Option<&Path>, to_stderr: bool) -> Result<()> {
    let filter = build_filter(filter)?;

    let installed = match file {
        Some(path) => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_ansi(false)
            .with_writer(Mutex::new(open_log_file(path)?))
            .try_init(),
        None if to_stderr => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .try_init(),
        None => return Ok(()),
    };

    installed.map_err(|e| eyre!("failed to install logger: {}", e))
}

fn build_filter(directives: &str) -> Result<EnvFilter> {
    EnvFilter::try_new(directives).wrap_err_with(|| format!("invalid log filter '{}'", directives))
}

fn open_log_file(path: &Path) -> Result<File> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .wrap_err_with(|| format!("cannot open log file {}", path.display()))
}
