//! Application layer for persona-parley
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::{DebateParams, IngestParams};
pub use ports::{
    conversation_logger::{ConversationEvent, ConversationLogger, NoConversationLogger},
    document_reader::{DocumentError, DocumentReaderPort},
    llm_gateway::{GatewayError, LlmGateway},
    progress::{NoProgress, ProgressNotifier},
};
pub use use_cases::create_agent::{CreateAgentInput, CreateAgentOutput, CreateAgentUseCase};
pub use use_cases::run_chat::RunChatUseCase;
pub use use_cases::run_debate::{RunDebateUseCase, TurnAdvance};
