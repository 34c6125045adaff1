//! In-memory persona store

use super::entities::Persona;
use crate::core::error::DomainError;
use std::collections::BTreeMap;

/// Result of [`PersonaStore::create`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreWrite {
    Inserted,
    /// An existing persona with the same name was overwritten
    Replaced,
}

/// Mapping from agent name to persona prompt.
///
/// Lives for the duration of the process and is never persisted. Names are
/// kept sorted so listings are deterministic.
#[derive(Debug, Clone, Default)]
pub struct PersonaStore {
    personas: BTreeMap<String, Persona>,
}

impl PersonaStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite the persona for `name`.
    pub fn create(
        &mut self,
        name: impl Into<String>,
        prompt: impl Into<String>,
    ) -> Result<StoreWrite, DomainError> {
        let persona = Persona::try_new(name, prompt)?;
        match self.personas.insert(persona.name().to_string(), persona) {
            Some(_) => Ok(StoreWrite::Replaced),
            None => Ok(StoreWrite::Inserted),
        }
    }

    pub fn get(&self, name: &str) -> Result<&Persona, DomainError> {
        self.personas
            .get(name)
            .ok_or_else(|| DomainError::not_found(name))
    }

    /// Persona prompt for `name`
    pub fn prompt(&self, name: &str) -> Result<&str, DomainError> {
        self.get(name).map(Persona::prompt)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.personas.contains_key(name)
    }

    /// Known agent names, sorted
    pub fn list(&self) -> Vec<&str> {
        self.personas.keys().map(String::as_str).collect()
    }

    /// Names selectable for debate slot B: everything except slot A's agent.
    pub fn debate_candidates(&self, excluding: Option<&str>) -> Vec<&str> {
        self.personas
            .keys()
            .map(String::as_str)
            .filter(|name| Some(*name) != excluding)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.personas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.personas.is_empty()
    }
}
