pub mod user_service;

pub use user_service::{UserProvider, UserService, DELIVERY_DELAY};
