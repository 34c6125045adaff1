//! Shared helpers for use cases.
//!
//! Wraps a single gateway call with progress callbacks, tracing and
//! conversation logging, so chat and debate report failures identically.

use crate::ports::conversation_logger::{ConversationEvent, ConversationLogger};
use crate::ports::llm_gateway::LlmGateway;
use crate::ports::progress::ProgressNotifier;
use parley_domain::{DomainError, Transcript, preview};
use tracing::{debug, warn};

/// Ask `speaker`'s persona for its next reply.
///
/// Failures are logged and surfaced as `ModelInvocation`; nothing is retried.
pub(crate) async fn request_reply<G: LlmGateway + ?Sized>(
    gateway: &G,
    speaker: &str,
    persona_prompt: &str,
    transcript: &Transcript,
    progress: &dyn ProgressNotifier,
    logger: &dyn ConversationLogger,
) -> Result<String, DomainError> {
    debug!(
        "Requesting reply from {} via {} ({} messages)",
        speaker,
        gateway.model_name(),
        transcript.len()
    );
    progress.on_reply_start(speaker);

    let result = gateway.respond(persona_prompt, transcript).await;
    progress.on_reply_complete(speaker, result.is_ok());

    match result {
        Ok(reply) => {
            debug!("{} replied: {}", speaker, preview(&reply, 80));
            Ok(reply)
        }
        Err(e) => {
            warn!("{} failed to reply: {}", speaker, e);
            logger.log(ConversationEvent::model_error(speaker, &e.to_string()));
            Err(e.into())
        }
    }
}
