//! Infrastructure layer for persona-parley
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod document;
pub mod logging;
pub mod providers;

// Re-export commonly used types
pub use config::{
    ConfigIssue, ConfigLoader, ConfigValidationError, FileConfig, FileDebateConfig,
    FileIngestConfig, FileLoggingConfig, FileProviderConfig, FileReplConfig, Severity,
};
pub use document::{LocalDocumentReader, StagedUpload, UploadStaging};
pub use logging::JsonlConversationLogger;
pub use providers::OpenAiGateway;
