//! Model provider configuration from TOML (`[provider]` section)

use super::issue::{ConfigIssue, ConfigValidationError};
use serde::{Deserialize, Serialize};
use url::Url;

/// OpenAI-compatible chat completions provider.
///
/// # Example
///
/// ```toml
/// [provider]
/// base_url = "https://api.openai.com/v1"
/// api_key_env = "OPENAI_API_KEY"
/// model = "gpt-4o-mini"
/// max_tokens = 1024
/// temperature = 0.8
/// timeout_seconds = 120
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileProviderConfig {
    /// API root; `/chat/completions` is appended to it
    pub base_url: String,
    /// Environment variable name for the API key
    pub api_key_env: String,
    /// Direct API key (not recommended, use the env var instead)
    pub api_key: Option<String>,
    /// Model identifier sent with every request
    pub model: String,
    /// Max tokens per reply
    pub max_tokens: u32,
    /// Sampling temperature; provider default when unset
    pub temperature: Option<f32>,
    /// Per-request timeout
    pub timeout_seconds: u64,
}

impl Default for FileProviderConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.openai.com/v1".to_string(),
            api_key_env: "OPENAI_API_KEY".to_string(),
            api_key: None,
            model: "gpt-4o-mini".to_string(),
            max_tokens: 1024,
            temperature: None,
            timeout_seconds: 120,
        }
    }
}

impl FileProviderConfig {
    /// API key from the config file, falling back to `api_key_env`.
    pub fn resolve_api_key(&self) -> Option<String> {
        self.api_key
            .clone()
            .filter(|k| !k.trim().is_empty())
            .or_else(|| std::env::var(&self.api_key_env).ok())
            .filter(|k| !k.trim().is_empty())
    }

    pub(super) fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        if self.model.trim().is_empty() {
            issues.push(ConfigIssue::error(ConfigValidationError::EmptyModelName));
        }
        if self.max_tokens == 0 {
            issues.push(ConfigIssue::error(ConfigValidationError::InvalidMaxTokens));
        }
        if self.timeout_seconds == 0 {
            issues.push(ConfigIssue::error(ConfigValidationError::InvalidTimeout));
        }
        if let Err(e) = Url::parse(&self.base_url) {
            issues.push(ConfigIssue::error(ConfigValidationError::InvalidBaseUrl {
                url: self.base_url.clone(),
                reason: e.to_string(),
            }));
        }
        if let Some(t) = self.temperature {
            if !(0.0..=2.0).contains(&t) {
                issues.push(ConfigIssue::warning(
                    ConfigValidationError::TemperatureOutOfRange(t),
                ));
            }
        }
        if self.resolve_api_key().is_none() {
            issues.push(ConfigIssue::warning(ConfigValidationError::MissingApiKey {
                env: self.api_key_env.clone(),
            }));
        }

        issues
    }
}
