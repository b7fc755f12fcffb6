// View Protocol
// Notifications a presenter sends to the view it drives

use crate::models::User;

use tokio::sync::mpsc;

/// Sender half handed to a presenter
pub type ViewSender = mpsc::UnboundedSender<ViewEvent>;

/// Receiver half drained by the view
pub type ViewReceiver = mpsc::UnboundedReceiver<ViewEvent>;

/// Create a new view channel
pub fn view_channel() -> (ViewSender, ViewReceiver) {
    mpsc::unbounded_channel()
}

/// Operations a view exposes to its presenter
pub trait UserView {
    /// A request is in flight
    fn show_indicator(&mut self);

    /// The in-flight request finished
    fn hide_indicator(&mut self);

    /// The request finished with no users
    fn show_empty_view(&mut self);

    /// The request finished with users to display
    fn set_users(&mut self, users: Vec<User>);
}

/// Events sent from a presenter to its view
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewEvent {
    ShowIndicator,
    HideIndicator,
    ShowEmpty,
    Users(Vec<User>),
}

impl ViewEvent {
    /// Invoke the matching view operation
    pub fn apply<V: UserView + ?Sized>(self, view: &mut V) {
        match self {
            ViewEvent::ShowIndicator => view.show_indicator(),
            ViewEvent::HideIndicator => view.hide_indicator(),
            ViewEvent::ShowEmpty => view.show_empty_view(),
            ViewEvent::Users(users) => view.set_users(users),
        }
    }

    /// Whether this event ends a fetch
    pub fn is_terminal(&self) -> bool {
        matches!(self, ViewEvent::ShowEmpty | ViewEvent::Users(_))
    }
}
