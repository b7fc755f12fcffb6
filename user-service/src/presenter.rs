// User Presenter
// Fetches users from a provider and drives an attached view

use crate::error::{ServiceError, ServiceResult};
use crate::services::{UserProvider, UserService};
use crate::view::{ViewEvent, ViewSender};

use tokio::task::JoinHandle;

pub struct UserPresenter<P: UserProvider = UserService> {
    provider: P,
    view: Option<ViewSender>,
}

impl UserPresenter<UserService> {
    pub fn new() -> Self {
        Self::with_provider(UserService::new())
    }
}

impl Default for UserPresenter<UserService> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: UserProvider> UserPresenter<P> {
    pub fn with_provider(provider: P) -> Self {
        Self {
            provider,
            view: None,
        }
    }

    /// Bind a view. Replaces any previously attached view.
    pub fn attach_view(&mut self, view: ViewSender) {
        self.view = Some(view);
    }

    pub fn detach_view(&mut self) {
        self.view = None;
    }

    pub fn is_attached(&self) -> bool {
        self.view.is_some()
    }

    /// Start fetching users.
    ///
    /// The view is told to show its indicator immediately. When the provider
    /// completes, it is told to hide the indicator and then either shown the
    /// users or, if there are none, the empty view.
    pub fn fetch_users(&self) -> ServiceResult<JoinHandle<()>> {
        let view = self.view.clone().ok_or(ServiceError::ViewNotAttached)?;

        send(&view, ViewEvent::ShowIndicator);

        Ok(self.provider.get_users(move |users| {
            send(&view, ViewEvent::HideIndicator);
            if users.is_empty() {
                send(&view, ViewEvent::ShowEmpty);
            } else {
                send(&view, ViewEvent::Users(users));
            }
        }))
    }
}

fn send(view: &ViewSender, event: ViewEvent) {
    if let Err(e) = view.send(event) {
        tracing::warn!(event = ?e.0, "view is gone, dropping event");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::User;
    use crate::view::view_channel;
    use crate::DELIVERY_DELAY;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    /// Provider that completes immediately with no users
    #[derive(Default)]
    struct EmptyProvider {
        calls: Arc<AtomicUsize>,
    }

    impl UserProvider for EmptyProvider {
        fn get_users<F>(&self, on_complete: F) -> JoinHandle<()>
        where
            F: FnOnce(Vec<User>) + Send + 'static,
        {
            self.calls.fetch_add(1, Ordering::SeqCst);
            tokio::spawn(async move { on_complete(Vec::new()) })
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_fetch_event_order() {
        let mut presenter = UserPresenter::new();
        let (tx, mut rx) = view_channel();
        presenter.attach_view(tx);

        let handle = presenter.fetch_users().unwrap();

        // The indicator is shown before the delay elapses
        assert_eq!(rx.try_recv().unwrap(), ViewEvent::ShowIndicator);
        assert!(rx.try_recv().is_err());

        handle.await.unwrap();

        assert_eq!(rx.try_recv().unwrap(), ViewEvent::HideIndicator);
        match rx.try_recv().unwrap() {
            ViewEvent::Users(users) => {
                assert_eq!(users.len(), 3);
                assert_eq!(users[0].full_name(), "Iyad Agha");
                assert_eq!(users[1].full_name(), "Mila Haward");
                assert_eq!(users[2].full_name(), "Mark Astun");
            }
            other => panic!("expected users, got {:?}", other),
        }
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_indicator_stays_until_delay() {
        let mut presenter = UserPresenter::new();
        let (tx, mut rx) = view_channel();
        presenter.attach_view(tx);

        let handle = presenter.fetch_users().unwrap();
        assert_eq!(rx.try_recv().unwrap(), ViewEvent::ShowIndicator);

        tokio::time::advance(DELIVERY_DELAY / 2).await;
        tokio::task::yield_now().await;
        assert!(rx.try_recv().is_err());

        handle.await.unwrap();
        assert_eq!(rx.try_recv().unwrap(), ViewEvent::HideIndicator);
    }

    #[tokio::test]
    async fn test_empty_result_shows_empty_view() {
        let mut presenter = UserPresenter::with_provider(EmptyProvider::default());
        let (tx, mut rx) = view_channel();
        presenter.attach_view(tx);

        presenter.fetch_users().unwrap().await.unwrap();

        assert_eq!(rx.try_recv().unwrap(), ViewEvent::ShowIndicator);
        assert_eq!(rx.try_recv().unwrap(), ViewEvent::HideIndicator);
        assert_eq!(rx.try_recv().unwrap(), ViewEvent::ShowEmpty);
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_fetch_without_view() {
        let provider = EmptyProvider::default();
        let calls = provider.calls.clone();
        let presenter = UserPresenter::with_provider(provider);

        assert!(!presenter.is_attached());
        let result = presenter.fetch_users();
        assert!(matches!(result, Err(ServiceError::ViewNotAttached)));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_detach_view() {
        let mut presenter = UserPresenter::with_provider(EmptyProvider::default());
        let (tx, _rx) = view_channel();
        presenter.attach_view(tx);
        assert!(presenter.is_attached());

        presenter.detach_view();
        assert!(!presenter.is_attached());
        assert!(presenter.fetch_users().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropped_view_is_tolerated() {
        let mut presenter = UserPresenter::new();
        let (tx, rx) = view_channel();
        presenter.attach_view(tx);

        let handle = presenter.fetch_users().unwrap();
        drop(rx);

        // Delivery still completes without panicking
        handle.await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn test_overlapping_fetches() {
        let mut presenter = UserPresenter::new();
        let (tx, mut rx) = view_channel();
        presenter.attach_view(tx);

        let first = presenter.fetch_users().unwrap();
        let second = presenter.fetch_users().unwrap();
        first.await.unwrap();
        second.await.unwrap();

        let events: Vec<ViewEvent> = std::iter::from_fn(|| rx.try_recv().ok()).collect();
        let shown = events
            .iter()
            .filter(|e| **e == ViewEvent::ShowIndicator)
            .count();
        let delivered = events
            .iter()
            .filter(|e| matches!(e, ViewEvent::Users(users) if users.len() == 3))
            .count();
        assert_eq!(shown, 2);
        assert_eq!(delivered, 2);
    }
}
