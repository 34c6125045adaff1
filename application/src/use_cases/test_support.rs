//! Test doubles shared by the use case tests.

use crate::ports::conversation_logger::{ConversationEvent, ConversationLogger};
use crate::ports::llm_gateway::{GatewayError, LlmGateway};
use crate::ports::progress::ProgressNotifier;
use async_trait::async_trait;
use parley_domain::{Message, Transcript};
use std::collections::VecDeque;
use std::sync::Mutex;

/// A recorded gateway call: persona prompt plus the transcript it saw
#[derive(Debug, Clone)]
pub(crate) struct RecordedCall {
    pub persona_prompt: String,
    pub messages: Vec<Message>,
}

/// Gateway that replays scripted replies in order
pub(crate) struct ScriptedGateway {
    replies: Mutex<VecDeque<Result<String, GatewayError>>>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl ScriptedGateway {
    pub fn new(replies: Vec<Result<String, GatewayError>>) -> Self {
        Self {
            replies: Mutex::new(VecDeque::from(replies)),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn ok(replies: &[&str]) -> Self {
        Self::new(replies.iter().map(|r| Ok(r.to_string())).collect())
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl LlmGateway for ScriptedGateway {
    async fn respond(
        &self,
        persona_prompt: &str,
        transcript: &Transcript,
    ) -> Result<String, GatewayError> {
        self.calls.lock().unwrap().push(RecordedCall {
            persona_prompt: persona_prompt.to_string(),
            messages: transcript.messages().to_vec(),
        });
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(GatewayError::Other("No more responses".to_string())))
    }

    fn model_name(&self) -> &str {
        "scripted"
    }
}

/// Logger that keeps every event type it receives
#[derive(Default)]
pub(crate) struct RecordingLogger {
    events: Mutex<Vec<(&'static str, serde_json::Value)>>,
}

impl RecordingLogger {
    pub fn event_types(&self) -> Vec<&'static str> {
        self.events.lock().unwrap().iter().map(|(t, _)| *t).collect()
    }

    pub fn payloads(&self, event_type: &str) -> Vec<serde_json::Value> {
        self.events
            .lock()
            .unwrap()
            .iter()
            .filter(|(t, _)| *t == event_type)
            .map(|(_, p)| p.clone())
            .collect()
    }
}

impl ConversationLogger for RecordingLogger {
    fn log(&self, event: ConversationEvent) {
        self.events
            .lock()
            .unwrap()
            .push((event.event_type, event.payload));
    }
}

/// Progress notifier that records callbacks as strings
#[derive(Default)]
pub(crate) struct RecordingProgress {
    events: Mutex<Vec<String>>,
}

impl RecordingProgress {
    pub fn events(&self) -> Vec<String> {
        self.events.lock().unwrap().clone()
    }
}

impl ProgressNotifier for RecordingProgress {
    fn on_reply_start(&self, speaker: &str) {
        self.events.lock().unwrap().push(format!("start:{}", speaker));
    }

    fn on_reply_complete(&self, speaker: &str, success: bool) {
        self.events
            .lock()
            .unwrap()
            .push(format!("done:{}:{}", speaker, success));
    }

    fn on_derive_start(&self, agent_name: &str) {
        self.events
            .lock()
            .unwrap()
            .push(format!("derive:{}", agent_name));
    }

    fn on_derive_complete(&self, agent_name: &str, success: bool) {
        self.events
            .lock()
            .unwrap()
            .push(format!("derived:{}:{}", agent_name, success));
    }
}
