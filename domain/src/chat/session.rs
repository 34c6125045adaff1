//! Single-agent chat session

use crate::core::error::DomainError;
use crate::persona::entities::Persona;
use crate::persona::store::PersonaStore;
use crate::selection::SelectionChange;
use crate::session::entities::{Role, Transcript};

/// One selected persona plus the user/assistant transcript with it (Entity)
///
/// Selecting a different agent replaces the session wholesale: the previous
/// transcript is discarded and cannot be recovered.
#[derive(Debug, Clone, Default)]
pub struct ChatSession {
    persona: Option<Persona>,
    transcript: Transcript,
}

impl ChatSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle a selection event for `name`.
    ///
    /// Unknown names fail with `NotFound` and leave the session untouched.
    pub fn select(
        &mut self,
        store: &PersonaStore,
        name: &str,
    ) -> Result<SelectionChange, DomainError> {
        let change = SelectionChange::detect(self.agent_name(), name);
        if !change.is_replaced() {
            return Ok(change);
        }

        let persona = store.get(name)?.clone();
        *self = Self {
            persona: Some(persona),
            transcript: Transcript::new(),
        };
        Ok(change)
    }

    pub fn agent_name(&self) -> Option<&str> {
        self.persona.as_ref().map(Persona::name)
    }

    pub fn persona_prompt(&self) -> Option<&str> {
        self.persona.as_ref().map(Persona::prompt)
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// Append the user's message, opening a turn.
    pub fn begin_turn(&mut self, user_text: &str) -> Result<(), DomainError> {
        if self.persona.is_none() {
            return Err(DomainError::NoActiveSession(
                "select an agent before chatting".to_string(),
            ));
        }
        if user_text.trim().is_empty() {
            return Err(DomainError::invalid_input("message cannot be empty"));
        }

        self.transcript.push_user(user_text);
        Ok(())
    }

    /// Persona prompt and transcript to hand to the model for the open turn
    pub fn turn_context(&self) -> Result<(&str, &Transcript), DomainError> {
        let prompt = self.persona_prompt().ok_or_else(|| {
            DomainError::NoActiveSession("select an agent before chatting".to_string())
        })?;
        Ok((prompt, &self.transcript))
    }

    /// Close the open turn with the persona's reply.
    pub fn record_reply(&mut self, reply: impl Into<String>) {
        self.transcript.push_assistant(reply);
    }

    /// True when the last user message has no reply (a failed turn)
    pub fn awaiting_reply(&self) -> bool {
        self.transcript
            .last()
            .is_some_and(|m| m.role == Role::User)
    }

    /// Drop the conversation but keep the selected persona
    pub fn clear_transcript(&mut self) {
        self.transcript.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::entities::Message;

    fn store() -> PersonaStore {
        let mut store = PersonaStore::new();
        store.create("Socrates", "You ask questions.").unwrap();
        store.create("Plato", "You write dialogues.").unwrap();
        store
    }

    fn complete_turn(session: &mut ChatSession, text: &str) {
        session.begin_turn(text).unwrap();
        session.record_reply(format!("re: {}", text));
    }

    #[test]
    fn test_select_initialises_session() {
        let store = store();
        let mut session = ChatSession::new();

        let change = session.select(&store, "Socrates").unwrap();

        assert!(change.is_replaced());
        assert_eq!(session.agent_name(), Some("Socrates"));
        assert_eq!(session.persona_prompt(), Some("You ask questions."));
        assert!(session.transcript().is_empty());
    }

    #[test]
    fn test_each_turn_adds_two_messages() {
        let store = store();
        let mut session = ChatSession::new();
        session.select(&store, "Socrates").unwrap();

        for n in 1..=4 {
            complete_turn(&mut session, &format!("question {}", n));
            assert_eq!(session.transcript().len(), 2 * n);
        }
        assert_eq!(session.transcript().get(0), Some(&Message::user("question 1")));
        assert_eq!(
            session.transcript().get(1),
            Some(&Message::assistant("re: question 1"))
        );
    }

    #[test]
    fn test_switching_agent_resets_transcript() {
        let store = store();
        let mut session = ChatSession::new();
        session.select(&store, "Socrates").unwrap();
        complete_turn(&mut session, "a");
        complete_turn(&mut session, "b");

        session.select(&store, "Plato").unwrap();

        assert_eq!(session.agent_name(), Some("Plato"));
        assert_eq!(session.persona_prompt(), Some("You write dialogues."));
        assert!(session.transcript().is_empty());
    }

    #[test]
    fn test_reselecting_same_agent_keeps_transcript() {
        let store = store();
        let mut session = ChatSession::new();
        session.select(&store, "Socrates").unwrap();
        complete_turn(&mut session, "a");

        let change = session.select(&store, "Socrates").unwrap();

        assert_eq!(change, SelectionChange::Unchanged);
        assert_eq!(session.transcript().len(), 2);
    }

    #[test]
    fn test_unknown_agent_leaves_session_untouched() {
        let store = store();
        let mut session = ChatSession::new();
        session.select(&store, "Socrates").unwrap();
        complete_turn(&mut session, "a");

        let err = session.select(&store, "Diogenes").unwrap_err();

        assert_eq!(err, DomainError::NotFound("Diogenes".to_string()));
        assert_eq!(session.agent_name(), Some("Socrates"));
        assert_eq!(session.transcript().len(), 2);
    }

    #[test]
    fn test_turn_without_selection_fails() {
        let mut session = ChatSession::new();
        assert!(matches!(
            session.begin_turn("hello"),
            Err(DomainError::NoActiveSession(_))
        ));
        assert!(session.turn_context().is_err());
    }

    #[test]
    fn test_empty_message_rejected() {
        let store = store();
        let mut session = ChatSession::new();
        session.select(&store, "Plato").unwrap();

        assert!(matches!(
            session.begin_turn("  "),
            Err(DomainError::InvalidInput(_))
        ));
        assert!(session.transcript().is_empty());
    }

    #[test]
    fn test_awaiting_reply_after_open_turn() {
        let store = store();
        let mut session = ChatSession::new();
        session.select(&store, "Plato").unwrap();
        assert!(!session.awaiting_reply());

        session.begin_turn("hello").unwrap();
        assert!(session.awaiting_reply());

        session.record_reply("greetings");
        assert!(!session.awaiting_reply());
    }

    #[test]
    fn test_clear_keeps_persona() {
        let store = store();
        let mut session = ChatSession::new();
        session.select(&store, "Plato").unwrap();
        complete_turn(&mut session, "a");

        session.clear_transcript();

        assert_eq!(session.agent_name(), Some("Plato"));
        assert!(session.transcript().is_empty());
    }
}
