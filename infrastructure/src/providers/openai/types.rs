//! Wire types for the chat completions endpoint

use parley_application::GatewayError;
use parley_domain::{Role, Transcript};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
pub(crate) struct ChatCompletionRequest<'a> {
    pub model: &'a str,
    pub messages: Vec<WireMessage<'a>>,
    pub max_tokens: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
}

#[derive(Debug, Serialize)]
pub(crate) struct WireMessage<'a> {
    pub role: &'static str,
    pub content: &'a str,
}

impl<'a> ChatCompletionRequest<'a> {
    /// `[system: persona] ++ transcript`, in transcript order.
    pub fn new(
        model: &'a str,
        max_tokens: u32,
        temperature: Option<f32>,
        persona_prompt: &'a str,
        transcript: &'a Transcript,
    ) -> Self {
        let mut messages = Vec::with_capacity(transcript.len() + 1);
        messages.push(WireMessage {
            role: "system",
            content: persona_prompt,
        });
        messages.extend(transcript.iter().map(|m| WireMessage {
            role: wire_role(m.role),
            content: &m.content,
        }));

        Self {
            model,
            messages,
            max_tokens,
            temperature,
        }
    }
}

fn wire_role(role: Role) -> &'static str {
    match role {
        Role::User => "user",
        Role::Assistant => "assistant",
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct ChatCompletionResponse {
    #[serde(default)]
    pub choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Choice {
    pub message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ResponseMessage {
    pub content: Option<String>,
}

impl ChatCompletionResponse {
    /// Text of `choices[0].message.content`
    pub fn into_reply(self) -> Result<String, GatewayError> {
        let content = self
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| GatewayError::MalformedResponse("response has no choices".into()))?
            .message
            .content
            .unwrap_or_default();

        if content.trim().is_empty() {
            return Err(GatewayError::MalformedResponse(
                "response message has no content".into(),
            ));
        }
        Ok(content)
    }
}
