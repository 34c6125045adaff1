//! Persona domain.
//!
//! - [`entities::Persona`]: a named persona prompt
//! - [`store::PersonaStore`]: the process-wide name → persona mapping

pub mod entities;
pub mod store;
