//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and converted into application parameters.

mod debate;
mod ingest;
mod issue;
mod logging;
mod provider;
mod repl;

pub use debate::FileDebateConfig;
pub use ingest::FileIngestConfig;
pub use issue::{ConfigIssue, ConfigValidationError, Severity};
pub use logging::FileLoggingConfig;
pub use provider::FileProviderConfig;
pub use repl::FileReplConfig;

use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Chat completions provider
    pub provider: FileProviderConfig,
    /// Debate pacing and seed
    pub debate: FileDebateConfig,
    /// Document intake
    pub ingest: FileIngestConfig,
    /// REPL settings
    pub repl: FileReplConfig,
    /// Conversation log
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = self.provider.validate();
        issues.extend(self.debate.validate());
        issues.extend(self.ingest.validate());
        issues
    }

    /// True if any issue makes the configuration unusable
    pub fn has_errors(issues: &[ConfigIssue]) -> bool {
        issues.iter().any(ConfigIssue::is_error)
    }
}
