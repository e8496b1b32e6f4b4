//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Agent name must not be empty")]
    NameRequired,

    #[error("Unknown template: {0}")]
    UnknownTemplate(String),

    #[error("Unknown scope dimension: {0}")]
    UnknownDimension(String),
}
