//! Port for structured conversation logging.
//!
//! Records what personas were created and what every party said, one event
//! per record. Separate from `tracing`: tracing carries diagnostics, this
//! port carries the transcript in a machine-readable form (JSONL).

use serde_json::{Value, json};

/// A structured conversation event.
pub struct ConversationEvent {
    /// Event type identifier (e.g. "chat_reply", "debate_reply").
    pub event_type: &'static str,
    /// JSON payload with event-specific data.
    pub payload: Value,
}

impl ConversationEvent {
    pub fn new(event_type: &'static str, payload: Value) -> Self {
        Self {
            event_type,
            payload,
        }
    }

    pub fn agent_created(agent: &str, source: &str, replaced: bool, prompt_chars: usize) -> Self {
        Self::new(
            "agent_created",
            json!({ "agent": agent, "source": source, "replaced": replaced, "prompt_chars": prompt_chars }),
        )
    }

    pub fn chat_message(agent: &str, text: &str) -> Self {
        Self::new("chat_message", json!({ "agent": agent, "text": text }))
    }

    pub fn chat_reply(agent: &str, text: &str) -> Self {
        Self::new("chat_reply", json!({ "agent": agent, "text": text }))
    }

    pub fn debate_seeded(agent_a: &str, agent_b: &str, seed: &str) -> Self {
        Self::new(
            "debate_seeded",
            json!({ "agent_a": agent_a, "agent_b": agent_b, "seed": seed }),
        )
    }

    pub fn debate_reply(speaker: &str, seat: u8, turn: usize, text: &str) -> Self {
        Self::new(
            "debate_reply",
            json!({ "speaker": speaker, "seat": seat, "turn": turn, "text": text }),
        )
    }

    pub fn model_error(speaker: &str, error: &str) -> Self {
        Self::new("model_error", json!({ "speaker": speaker, "error": error }))
    }
}

/// Port for logging conversation events to a structured log.
///
/// `log` is synchronous and infallible; adapters drop records they cannot
/// write rather than interrupting a conversation.
pub trait ConversationLogger: Send + Sync {
    fn log(&self, event: ConversationEvent);
}

/// No-op implementation for tests and when logging is disabled.
pub struct NoConversationLogger;

impl ConversationLogger for NoConversationLogger {
    fn log(&self, _event: ConversationEvent) {}
}
