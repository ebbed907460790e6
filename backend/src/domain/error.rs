//! Errors surfaced by the domain services.

/// Failures a service call can end in.
///
/// `Validation` and `NotFound` are expected outcomes of bad input and carry the
/// message shown to the user. `Storage` wraps I/O and malformed-file faults,
/// which are reported but never retried.
#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    NotFound(String),
    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}

pub type DomainResult<T> = Result<T, DomainError>;

impl DomainError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }
}
