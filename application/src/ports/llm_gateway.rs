//! LLM Gateway port
//!
//! Defines the interface for asking a model to speak as a persona.

use async_trait::async_trait;
use parley_domain::{DomainError, Transcript};
use thiserror::Error;

/// Errors that can occur during LLM gateway operations
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Provider returned status {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Timeout")]
    Timeout,

    #[error("Missing credentials: {0}")]
    MissingCredentials(String),

    #[error("Other error: {0}")]
    Other(String),
}

impl From<GatewayError> for DomainError {
    fn from(e: GatewayError) -> Self {
        DomainError::ModelInvocation(e.to_string())
    }
}

/// Gateway for LLM communication
///
/// `respond` is the whole contract: given a persona prompt and a role-tagged
/// history, return the next assistant utterance. Implementations (adapters)
/// live in the infrastructure layer and are stateless between calls; the
/// caller owns the transcript.
#[async_trait]
pub trait LlmGateway: Send + Sync {
    /// Produce the next assistant message for `transcript` under `persona_prompt`
    async fn respond(
        &self,
        persona_prompt: &str,
        transcript: &Transcript,
    ) -> Result<String, GatewayError>;

    /// Model identifier, for logging
    fn model_name(&self) -> &str;
}
