//! Presentation-level configuration
//!
//! Configuration for REPL behavior.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

const APP_DIR: &str = "persona-parley";

/// REPL configuration for the presentation layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReplConfig {
    /// Show "is typing" spinners
    pub show_progress: bool,
    /// Path to history file
    pub history_file: Option<String>,
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            show_progress: true,
            history_file: None,
        }
    }
}

impl ReplConfig {
    /// History file location; `~/` is expanded, default lives in the data dir.
    pub fn history_path(&self) -> Option<PathBuf> {
        match self.history_file.as_deref() {
            Some(path) => match path.strip_prefix("~/") {
                Some(rest) => dirs::home_dir().map(|home| home.join(rest)),
                None => Some(PathBuf::from(path)),
            },
            None => dirs::data_dir().map(|d| d.join(APP_DIR).join("history.txt")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_history_path() {
        let config = ReplConfig {
            history_file: Some("/tmp/parley-history".to_string()),
            ..ReplConfig::default()
        };
        assert_eq!(
            config.history_path(),
            Some(PathBuf::from("/tmp/parley-history"))
        );
    }

    #[test]
    fn test_tilde_is_expanded() {
        let config = ReplConfig {
            history_file: Some("~/parley/history.txt".to_string()),
            ..ReplConfig::default()
        };
        if let (Some(path), Some(home)) = (config.history_path(), dirs::home_dir()) {
            assert_eq!(path, home.join("parley/history.txt"));
        }
    }

    #[test]
    fn test_default_history_in_data_dir() {
        if let Some(path) = ReplConfig::default().history_path() {
            assert!(path.to_string_lossy().contains(APP_DIR));
        }
    }
}
