//! Configuration issues reported by [`FileConfig::validate`](super::FileConfig::validate).

use thiserror::Error;

/// Severity level of a configuration issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Fatal: the configuration cannot work at all.
    Error,
    /// Non-fatal: the configuration works but may not behave as expected.
    Warning,
}

/// Configuration validation errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigValidationError {
    #[error("provider.model cannot be empty")]
    EmptyModelName,

    #[error("provider.max_tokens cannot be 0")]
    InvalidMaxTokens,

    #[error("provider.timeout_seconds cannot be 0")]
    InvalidTimeout,

    #[error("provider.base_url '{url}' is not a valid URL: {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("provider.temperature {0} is outside 0.0..=2.0")]
    TemperatureOutOfRange(f32),

    #[error("no API key: set {env} or provider.api_key")]
    MissingApiKey { env: String },

    #[error("debate.seed_message cannot be empty")]
    EmptySeedMessage,

    #[error("ingest.max_document_chars cannot be 0")]
    InvalidDocumentBudget,
}

/// A detected issue in the loaded configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigIssue {
    pub severity: Severity,
    pub error: ConfigValidationError,
}

impl ConfigIssue {
    pub fn error(error: ConfigValidationError) -> Self {
        Self {
            severity: Severity::Error,
            error,
        }
    }

    pub fn warning(error: ConfigValidationError) -> Self {
        Self {
            severity: Severity::Warning,
            error,
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl std::fmt::Display for ConfigIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.severity {
            Severity::Error => write!(f, "error: {}", self.error),
            Severity::Warning => write!(f, "warning: {}", self.error),
        }
    }
}
