use crate::output;

use std::io::{self, Write};
use std::time::Instant;

use clap::Args;
use color_eyre::Result;

use user_service::{view_channel, User, UserPresenter, UserView};

/// Fetch the users and print them
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Print the users as a JSON array
    #[arg(long)]
    pub json: bool,
}

pub async fn execute(args: ListArgs) -> Result<()> {
    let (tx, mut rx) = view_channel();
    let mut presenter = UserPresenter::new();
    presenter.attach_view(tx);

    let mut view = ConsoleView::new(args.json);
    let _delivery = presenter.fetch_users()?;

    while let Some(event) = rx.recv().await {
        let done = event.is_terminal();
        event.apply(&mut view);
        if done {
            break;
        }
    }

    let stdout = io::stdout();
    view.print(&mut stdout.lock())
}

/// View that reports progress on stderr and prints the result on stdout
pub struct ConsoleView {
    json: bool,
    started: Option<Instant>,
    users: Option<Vec<User>>,
}

impl ConsoleView {
    pub fn new(json: bool) -> Self {
        Self {
            json,
            started: None,
            users: None,
        }
    }

    pub fn print(&self, out: &mut impl Write) -> Result<()> {
        let users = self.users.as_deref().unwrap_or_default();

        if self.json {
            serde_json::to_writer_pretty(&mut *out, users)?;
            writeln!(out)?;
            return Ok(());
        }

        for (index, user) in users.iter().enumerate() {
            writeln!(out, "{}", format_user_line(index, user))?;
        }
        Ok(())
    }
}

impl UserView for ConsoleView {
    fn show_indicator(&mut self) {
        self.started = Some(Instant::now());
        output::status("Fetching", "users");
    }

    fn hide_indicator(&mut self) {
        if let Some(started) = self.started.take() {
            tracing::debug!(elapsed = ?started.elapsed(), "fetch finished");
        }
    }

    fn show_empty_view(&mut self) {
        output::warning("No users found");
        self.users = Some(Vec::new());
    }

    fn set_users(&mut self, users: Vec<User>) {
        output::success(&format!("Received {} users", users.len()));
        self.users = Some(users);
    }
}

fn format_user_line(index: usize, user: &User) -> String {
    format!(
        "{:>2}. {:<16} {:<16} {:>3}",
        index + 1,
        user.full_name(),
        user.email,
        user.age
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_users() -> Vec<User> {
        vec![
            User::new("Iyad", "Agha", "iyad@test.com", 36),
            User::new("Mila", "Haward", "mila@test.om", 24),
        ]
    }

    #[test]
    fn test_format_user_line() {
        let user = User::new("Iyad", "Agha", "iyad@test.com", 36);
        assert_eq!(
            format_user_line(0, &user),
            " 1. Iyad Agha        iyad@test.com     36"
        );
    }

    #[test]
    fn test_print_text() {
        let mut view = ConsoleView::new(false);
        view.set_users(sample_users());

        let mut out = Vec::new();
        view.print(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("Iyad Agha"));
        assert!(lines[1].starts_with(" 2. Mila Haward"));
    }

    #[test]
    fn test_print_json() {
        let mut view = ConsoleView::new(true);
        view.set_users(sample_users());

        let mut out = Vec::new();
        view.print(&mut out).unwrap();
        let parsed: Vec<User> = serde_json::from_slice(&out).unwrap();
        assert_eq!(parsed, sample_users());
    }

    #[test]
    fn test_print_empty_json() {
        let mut view = ConsoleView::new(true);
        view.show_empty_view();

        let mut out = Vec::new();
        view.print(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap().trim(), "[]");
    }

    #[test]
    fn test_indicator_tracks_start() {
        let mut view = ConsoleView::new(false);
        view.show_indicator();
        assert!(view.started.is_some());
        view.hide_indicator();
        assert!(view.started.is_none());
    }
}
