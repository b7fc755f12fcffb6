// User Service
// Delivers a fixed list of users after a simulated network delay

use crate::models::User;

use std::time::Duration;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant};

/// Delay between a request and the delivery of its users
pub const DELIVERY_DELAY: Duration = Duration::from_secs(2);

/// Source of user records for a presenter
pub trait UserProvider: Send + Sync {
    /// Request the users. Returns immediately; `on_complete` runs once the
    /// users are available. The returned handle may be awaited or dropped.
    fn get_users<F>(&self, on_complete: F) -> JoinHandle<()>
    where
        F: FnOnce(Vec<User>) + Send + 'static;
}

/// Mock user service. Every request yields the same three users after
/// [`DELIVERY_DELAY`].
#[derive(Debug, Clone, Default)]
pub struct UserService {
    runtime: Option<Handle>,
}

impl UserService {
    /// Deliver on the runtime that is current when `get_users` is called
    pub fn new() -> Self {
        Self { runtime: None }
    }

    /// Deliver on the given runtime regardless of the caller's context
    pub fn on_runtime(runtime: Handle) -> Self {
        Self {
            runtime: Some(runtime),
        }
    }

    /// Schedule delivery of the mock users to `on_complete`.
    ///
    /// The deadline is taken at call time, so the delay is measured from the
    /// call and not from when the delivery task is first polled.
    ///
    /// Without a runtime set via [`UserService::on_runtime`] this must be
    /// called from within a Tokio runtime.
    pub fn get_users<F>(&self, on_complete: F) -> JoinHandle<()>
    where
        F: FnOnce(Vec<User>) + Send + 'static,
    {
        let users = mock_users();
        let deadline = Instant::now() + DELIVERY_DELAY;
        tracing::debug!(
            count = users.len(),
            delay = ?DELIVERY_DELAY,
            "scheduling user delivery"
        );

        let delivery = async move {
            time::sleep_until(deadline).await;
            tracing::debug!(count = users.len(), "delivering users");
            on_complete(users);
        };

        match &self.runtime {
            Some(runtime) => runtime.spawn(delivery),
            None => tokio::spawn(delivery),
        }
    }
}

impl UserProvider for UserService {
    fn get_users<F>(&self, on_complete: F) -> JoinHandle<()>
    where
        F: FnOnce(Vec<User>) + Send + 'static,
    {
        UserService::get_users(self, on_complete)
    }
}

fn mock_users() -> Vec<User> {
    vec![
        User::new("Iyad", "Agha", "iyad@test.com", 36),
        User::new("Mila", "Haward", "mila@test.om", 24),
        User::new("Mark", "Astun", "mark@test.com", 39),
    ]
}
