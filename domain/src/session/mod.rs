//! Conversation primitives shared by chat and debate sessions.
//!
//! - [`entities::Message`]: a single role-tagged utterance
//! - [`entities::Transcript`]: the ordered history sent to the model

pub mod entities;
