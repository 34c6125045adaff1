//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod create_agent;
pub mod run_chat;
pub mod run_debate;
pub(crate) mod shared;

#[cfg(test)]
pub(crate) mod test_support;
