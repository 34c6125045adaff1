//! Application-level configuration.
//!
//! This module provides configuration types that control how use cases behave:
//!
//! - [`DebateParams`]: pacing and seed message for debates
//! - [`IngestParams`]: document size budget for persona derivation

pub mod debate_params;
pub mod ingest_params;

pub use debate_params::DebateParams;
pub use ingest_params::IngestParams;
