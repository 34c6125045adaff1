//! HTTP gateway for OpenAI-compatible chat completions

use super::types::{ChatCompletionRequest, ChatCompletionResponse};
use crate::config::FileProviderConfig;
use async_trait::async_trait;
use parley_application::{GatewayError, LlmGateway};
use parley_domain::{Transcript, clip_chars};
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, info};
use url::Url;

const COMPLETIONS_PATH: &str = "chat/completions";
const ERROR_BODY_CHARS: usize = 500;

/// [`LlmGateway`] backed by `POST {base_url}/chat/completions`.
///
/// Stateless between calls: every request carries the full transcript.
pub struct OpenAiGateway {
    http: Client,
    endpoint: Url,
    api_key: String,
    model: String,
    max_tokens: u32,
    temperature: Option<f32>,
}

impl OpenAiGateway {
    /// Build a gateway from the `[provider]` section.
    ///
    /// Fails if no API key is configured or the base URL does not parse.
    pub fn from_config(config: &FileProviderConfig) -> Result<Self, GatewayError> {
        let api_key = config.resolve_api_key().ok_or_else(|| {
            GatewayError::MissingCredentials(format!(
                "set {} or provider.api_key",
                config.api_key_env
            ))
        })?;
        let endpoint = completions_endpoint(&config.base_url)?;
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| GatewayError::ConnectionError(e.to_string()))?;

        info!("Using model {} at {}", config.model, endpoint);
        Ok(Self {
            http,
            endpoint,
            api_key,
            model: config.model.clone(),
            max_tokens: config.max_tokens,
            temperature: config.temperature,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

/// `{base_url}/chat/completions`, tolerating a trailing slash on the base.
fn completions_endpoint(base_url: &str) -> Result<Url, GatewayError> {
    let mut base = base_url.trim().to_string();
    if !base.ends_with('/') {
        base.push('/');
    }
    Url::parse(&base)
        .and_then(|u| u.join(COMPLETIONS_PATH))
        .map_err(|e| GatewayError::Other(format!("invalid base URL '{}': {}", base_url, e)))
}

fn map_send_error(err: reqwest::Error) -> GatewayError {
    if err.is_timeout() {
        GatewayError::Timeout
    } else if err.is_connect() {
        GatewayError::ConnectionError(err.to_string())
    } else {
        GatewayError::RequestFailed(err.to_string())
    }
}

#[async_trait]
impl LlmGateway for OpenAiGateway {
    async fn respond(
        &self,
        persona_prompt: &str,
        transcript: &Transcript,
    ) -> Result<String, GatewayError> {
        let body = ChatCompletionRequest::new(
            &self.model,
            self.max_tokens,
            self.temperature,
            persona_prompt,
            transcript,
        );
        debug!(
            "POST {} ({} messages)",
            self.endpoint,
            body.messages.len()
        );

        let response = self
            .http
            .post(self.endpoint.clone())
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(map_send_error)?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(GatewayError::HttpStatus {
                status: status.as_u16(),
                body: clip_chars(text.trim(), ERROR_BODY_CHARS).to_string(),
            });
        }

        let parsed: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| GatewayError::MalformedResponse(e.to_string()))?;
        parsed.into_reply()
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}
