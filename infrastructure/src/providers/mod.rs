//! Model provider adapters implementing [`LlmGateway`](parley_application::LlmGateway).

pub mod openai;

pub use openai::OpenAiGateway;
