//! Document ingestion configuration from TOML (`[ingest]` section)

use super::issue::{ConfigIssue, ConfigValidationError};
use parley_application::IngestParams;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileIngestConfig {
    /// Document text sent to the model is clipped to this many characters
    pub max_document_chars: usize,
    /// Where uploads are staged; the system temp dir when unset
    pub temp_dir: Option<String>,
}

impl Default for FileIngestConfig {
    fn default() -> Self {
        Self {
            max_document_chars: 20_000,
            temp_dir: None,
        }
    }
}

impl FileIngestConfig {
    pub fn to_params(&self) -> IngestParams {
        IngestParams::default().with_max_document_chars(self.max_document_chars)
    }

    pub(super) fn validate(&self) -> Vec<ConfigIssue> {
        if self.max_document_chars == 0 {
            vec![ConfigIssue::error(
                ConfigValidationError::InvalidDocumentBudget,
            )]
        } else {
            vec![]
        }
    }
}
