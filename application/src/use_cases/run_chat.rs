//! Run Chat use case
//!
//! Drives one submit-respond-append cycle of a single-agent chat.

use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger,
};
use crate::ports::llm_gateway::LlmGateway;
use crate::ports::progress::{NoProgress, ProgressNotifier};
use crate::use_cases::shared::request_reply;
use parley_domain::{ChatSession, DomainError};
use std::sync::Arc;
use tracing::info;

/// Use case for chatting with one persona
///
/// The session is owned by the caller and borrowed mutably for the whole
/// cycle, so no other reader can observe the turn half-done.
pub struct RunChatUseCase<G: LlmGateway + 'static> {
    gateway: Arc<G>,
    logger: Arc<dyn ConversationLogger>,
}

impl<G: LlmGateway + 'static> RunChatUseCase<G> {
    pub fn new(gateway: Arc<G>) -> Self {
        Self {
            gateway,
            logger: Arc::new(NoConversationLogger),
        }
    }

    pub fn with_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.logger = logger;
        self
    }

    /// Submit a message with default (no-op) progress
    pub async fn submit(
        &self,
        session: &mut ChatSession,
        user_text: &str,
    ) -> Result<String, DomainError> {
        self.submit_with_progress(session, user_text, &NoProgress)
            .await
    }

    /// Append the user's message, ask the persona, append its reply.
    ///
    /// If the model call fails the user message stays in the transcript with
    /// no assistant counterpart, and the error is returned.
    pub async fn submit_with_progress(
        &self,
        session: &mut ChatSession,
        user_text: &str,
        progress: &dyn ProgressNotifier,
    ) -> Result<String, DomainError> {
        session.begin_turn(user_text)?;

        let (persona_prompt, transcript) = session.turn_context()?;
        let agent = session.agent_name().unwrap_or_default().to_string();
        self.logger
            .log(ConversationEvent::chat_message(&agent, user_text));

        let reply = request_reply(
            self.gateway.as_ref(),
            &agent,
            persona_prompt,
            transcript,
            progress,
            self.logger.as_ref(),
        )
        .await?;

        session.record_reply(reply.clone());
        self.logger.log(ConversationEvent::chat_reply(&agent, &reply));
        info!(
            "{} replied ({} messages in transcript)",
            agent,
            session.transcript().len()
        );

        Ok(reply)
    }
}
