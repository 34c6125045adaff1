//! Domain error types

use thiserror::Error;

/// Domain-level errors
///
/// Every failure a user can trigger ends up as one of these variants, so the
/// shell can render it verbatim.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Empty agent name, empty message, missing upload
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Unknown agent key
    #[error("Agent not found: {0}")]
    NotFound(String),

    /// Action attempted before an agent was selected
    #[error("No active session: {0}")]
    NoActiveSession(String),

    /// The uploaded document could not be turned into a persona
    #[error("Document could not be parsed: {0}")]
    DocumentParse(String),

    /// The model backend failed to produce a reply
    #[error("Model invocation failed: {0}")]
    ModelInvocation(String),
}

impl DomainError {
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        DomainError::InvalidInput(msg.into())
    }

    pub fn not_found(name: impl Into<String>) -> Self {
        DomainError::NotFound(name.into())
    }
}
