use crate::events::EventHandler;
use crate::ui;

use color_eyre::Result;
use ratatui::DefaultTerminal;

use std::time::Duration;
use tokio::time::Instant;

use user_service::{view_channel, User, UserPresenter, UserView, ViewReceiver};

// =============================================================================
// Application States
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppState {
    /// Waiting for the presenter to deliver users
    Loading,
    /// Browse the delivered users
    UserList,
    /// The last fetch returned no users
    Empty,
}

// =============================================================================
// Application
// =============================================================================

pub struct App {
    pub state: AppState,
    pub users: Vec<User>,
    pub selected_index: usize,
    pub should_quit: bool,
    pub pending_fetch: bool,
    pub last_error: Option<String>,

    // Set while the presenter has the indicator shown
    pub loading_since: Option<Instant>,

    presenter: UserPresenter,
    view_receiver: ViewReceiver,
}

impl App {
    pub fn new() -> Result<Self> {
        let (tx, rx) = view_channel();
        let mut presenter = UserPresenter::new();
        presenter.attach_view(tx);

        Ok(Self {
            state: AppState::Loading,
            users: Vec::new(),
            selected_index: 0,
            should_quit: false,
            // Fetch as soon as the loop starts
            pending_fetch: true,
            last_error: None,
            loading_since: None,
            presenter,
            view_receiver: rx,
        })
    }

    pub async fn run(&mut self, mut terminal: DefaultTerminal) -> Result<()> {
        while !self.should_quit {
            terminal.draw(|frame| ui::render(self, frame))?;
            self.handle_events()?;

            if self.pending_fetch {
                self.pending_fetch = false;
                self.start_fetch();
            }

            self.process_view_events();
        }
        Ok(())
    }

    // =========================================================================
    // Fetching
    // =========================================================================

    pub fn request_reload(&mut self) {
        if self.is_loading() {
            return;
        }
        self.pending_fetch = true;
    }

    /// Ask the presenter for users. Delivery is observed through
    /// `process_view_events`.
    pub fn start_fetch(&mut self) {
        match self.presenter.fetch_users() {
            Ok(_delivery) => {
                tracing::debug!("user fetch started");
                self.last_error = None;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to start user fetch");
                self.last_error = Some(e.to_string());
            }
        }
    }

    pub fn process_view_events(&mut self) {
        while let Ok(event) = self.view_receiver.try_recv() {
            event.apply(self);
        }
    }

    pub fn is_loading(&self) -> bool {
        self.loading_since.is_some()
    }

    pub fn loading_elapsed(&self) -> Option<Duration> {
        self.loading_since.map(|since| since.elapsed())
    }

    // =========================================================================
    // Navigation
    // =========================================================================

    pub fn move_up(&mut self) {
        if self.state == AppState::UserList && self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    pub fn move_down(&mut self) {
        if self.state == AppState::UserList && self.selected_index + 1 < self.users.len() {
            self.selected_index += 1;
        }
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn selected_user(&self) -> Option<&User> {
        self.users.get(self.selected_index)
    }
}

// =============================================================================
// View Protocol
// =============================================================================

impl UserView for App {
    fn show_indicator(&mut self) {
        self.state = AppState::Loading;
        self.loading_since = Some(Instant::now());
    }

    fn hide_indicator(&mut self) {
        self.loading_since = None;
    }

    fn show_empty_view(&mut self) {
        self.users.clear();
        self.selected_index = 0;
        self.state = AppState::Empty;
    }

    fn set_users(&mut self, users: Vec<User>) {
        if self.selected_index >= users.len() {
            self.selected_index = 0;
        }
        self.users = users;
        self.state = AppState::UserList;
    }
}
