//! Debate configuration from TOML (`[debate]` section)

use super::issue::{ConfigIssue, ConfigValidationError};
use parley_application::DebateParams;
use parley_domain::DEFAULT_SEED_MESSAGE;
use serde::{Deserialize, Serialize};

/// Raw debate configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileDebateConfig {
    /// Pause after each persona reply, in milliseconds
    pub pacing_ms: u64,
    /// Synthetic opening line attributed to agent A
    pub seed_message: String,
}

impl Default for FileDebateConfig {
    fn default() -> Self {
        Self {
            pacing_ms: 2000,
            seed_message: DEFAULT_SEED_MESSAGE.to_string(),
        }
    }
}

impl FileDebateConfig {
    pub fn to_params(&self) -> DebateParams {
        DebateParams::default()
            .with_pacing_ms(self.pacing_ms)
            .with_seed_message(self.seed_message.clone())
    }

    pub(super) fn validate(&self) -> Vec<ConfigIssue> {
        if self.seed_message.trim().is_empty() {
            vec![ConfigIssue::error(ConfigValidationError::EmptySeedMessage)]
        } else {
            vec![]
        }
    }
}
