//! Persona value objects

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// A named persona prompt derived from an uploaded document (Value Object)
///
/// Immutable once created. Re-creating under the same name replaces the
/// whole value in the store rather than mutating it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Persona {
    name: String,
    prompt: String,
}

impl Persona {
    /// Validate and build a persona.
    ///
    /// The name must contain something other than whitespace. An empty prompt
    /// means derivation failed upstream and is rejected as well.
    pub fn try_new(name: impl Into<String>, prompt: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();
        let prompt = prompt.into();

        if name.trim().is_empty() {
            return Err(DomainError::invalid_input("agent name cannot be empty"));
        }
        if prompt.trim().is_empty() {
            return Err(DomainError::invalid_input(format!(
                "persona prompt for '{}' is empty",
                name
            )));
        }

        Ok(Self { name, prompt })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }
}

impl std::fmt::Display for Persona {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}
