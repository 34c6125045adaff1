//! Domain layer for persona-parley
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Persona
//!
//! A named persona prompt derived once from an uploaded document. Personas
//! live in the in-memory [`PersonaStore`] for the lifetime of the process.
//!
//! ## Chat / Debate
//!
//! - **Chat**: one persona, one user/assistant transcript
//! - **Debate**: two personas, two role-inverted transcripts advanced
//!   strictly B-then-A after a synthetic `"hi"` seed

pub mod chat;
pub mod core;
pub mod debate;
pub mod document;
pub mod persona;
pub mod prompt;
pub mod selection;
pub mod session;

// Re-export commonly used types
pub use chat::session::ChatSession;
pub use core::{error::DomainError, string::{clip_chars, preview}};
pub use debate::session::{
    DEFAULT_SEED_MESSAGE, DebateLine, DebateSession, DebateSlot, DebateState, TURN_ORDER,
};
pub use document::DocumentKind;
pub use persona::{
    entities::Persona,
    store::{PersonaStore, StoreWrite},
};
pub use prompt::PersonaPromptTemplate;
pub use selection::SelectionChange;
pub use session::entities::{Message, Role, Transcript};
