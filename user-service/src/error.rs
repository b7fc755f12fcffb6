use thiserror::Error;

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Errors raised by the presentation layer
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ServiceError {
    #[error("No view attached to the presenter")]
    ViewNotAttached,
}
