//! Domain-level errors
//! Failures of the underlying privileged commands always carry the raw
//! diagnostic text so the operator can troubleshoot.

use thiserror::Error;

#[derive(Debug, Error, Clone)]
pub enum DomainError {
    // Input validation
    #[error("{0}")]
    InvalidInput(String),

    // Site lookup
    #[error("Site '{0}' not found")]
    NotFound(String),

    #[error("Site '{0}' already exists")]
    AlreadyExists(String),

    // Privileged command failures
    #[error("Failed to write site configuration: {0}")]
    WriteFailed(String),

    #[error("Failed to delete site: {0}")]
    DeleteFailed(String),

    #[error("Failed to change site enabled state: {0}")]
    ToggleFailed(String),

    #[error("Service action failed: {0}")]
    ActionFailed(String),

    // Live-process checks
    #[error("Configuration test failed: {0}")]
    ValidationFailed(String),

    /// Partial success: the enabled set changed and validated, but the running
    /// process did not pick the change up. State is deliberately not reverted.
    #[error("Configuration accepted but reload failed: {0}")]
    ReloadFailed(String),
}

pub type Result<T> = std::result::Result<T, DomainError>;
