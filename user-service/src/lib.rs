// User Service Library
// Mock data access and presentation logic for the MVP demo

pub mod error;
pub mod models;
pub mod presenter;
pub mod services;
pub mod view;

// Re-export commonly used types
pub use error::{ServiceError, ServiceResult};
pub use models::User;
pub use presenter::UserPresenter;
pub use services::{UserProvider, UserService, DELIVERY_DELAY};
pub use view::{view_channel, UserView, ViewEvent, ViewReceiver, ViewSender};
