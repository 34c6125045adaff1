//! OpenAI-compatible chat completions provider
//!
//! Works with api.openai.com and any server exposing the same
//! `/chat/completions` shape (local inference servers, proxies).

mod client;
mod types;

pub use client::OpenAiGateway;
