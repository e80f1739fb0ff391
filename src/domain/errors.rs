use thiserror::Error;

/// Error channel of the storage seam. The in-memory store never produces
/// one; the variants exist for fallible repository implementations.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("storage error: {0}")]
    Storage(String),
    #[error("internal error: {0}")]
    Internal(String),
}

impl DomainError {
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }
}
