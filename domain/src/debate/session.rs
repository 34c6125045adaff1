//! Dual-agent debate session
//!
//! Each party keeps its own transcript. Whatever one party says is stored as
//! `assistant` in its own transcript and as `user` in the other's, so each
//! model call sees the opponent's utterances as incoming user input.
//!
//! ```text
//! index   transcript A            transcript B
//!   0     assistant "hi"   (seed) user "hi"
//!   1     user      replyB        assistant replyB
//!   2     assistant replyA        user      replyA
//! ```

use crate::core::error::DomainError;
use crate::persona::entities::Persona;
use crate::persona::store::PersonaStore;
use crate::selection::SelectionChange;
use crate::session::entities::{Message, Role, Transcript};
use serde::{Deserialize, Serialize};

/// Synthetic opening line that gives agent B something to answer.
pub const DEFAULT_SEED_MESSAGE: &str = "hi";

/// One of the two debate seats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DebateSlot {
    A,
    B,
}

impl DebateSlot {
    pub fn other(self) -> Self {
        match self {
            DebateSlot::A => DebateSlot::B,
            DebateSlot::B => DebateSlot::A,
        }
    }

    /// 1-based seat label used in the shell ("Agent 1", "Agent 2")
    pub fn number(self) -> u8 {
        match self {
            DebateSlot::A => 1,
            DebateSlot::B => 2,
        }
    }
}

impl std::fmt::Display for DebateSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Agent {}", self.number())
    }
}

/// Order of the two half-turns inside one turn-advance.
///
/// B always answers the latest A content before A answers B's fresh reply.
pub const TURN_ORDER: [DebateSlot; 2] = [DebateSlot::B, DebateSlot::A];

/// Lifecycle of a debate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DebateState {
    /// At least one seat is empty
    Uninitialized,
    /// Both seats filled, seed not yet injected
    Ready,
    /// Seed injected; turn-advances are allowed
    Active,
}

/// A rendered debate line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DebateLine<'a> {
    pub slot: DebateSlot,
    pub speaker: &'a str,
    pub content: &'a str,
}

/// Two personas and their mutually consistent transcripts (Entity)
#[derive(Debug, Clone)]
pub struct DebateSession {
    slot_a: Option<Persona>,
    slot_b: Option<Persona>,
    transcript_a: Transcript,
    transcript_b: Transcript,
    started: bool,
    seed_message: String,
}

impl Default for DebateSession {
    fn default() -> Self {
        Self::new()
    }
}

impl DebateSession {
    pub fn new() -> Self {
        Self::with_seed_message(DEFAULT_SEED_MESSAGE)
    }

    pub fn with_seed_message(seed: impl Into<String>) -> Self {
        Self {
            slot_a: None,
            slot_b: None,
            transcript_a: Transcript::new(),
            transcript_b: Transcript::new(),
            started: false,
            seed_message: seed.into(),
        }
    }

    /// Handle a selection event for one seat.
    ///
    /// A different agent clears all debate state and, once both seats hold
    /// distinct agents, starts the debate by injecting the seed message.
    /// Re-selecting the seated agent is a no-op.
    ///
    /// Seat B never accepts seat A's agent. Choosing seat B's agent for seat A
    /// moves seat B to the first remaining agent by name.
    pub fn select(
        &mut self,
        slot: DebateSlot,
        store: &PersonaStore,
        name: &str,
    ) -> Result<SelectionChange, DomainError> {
        let change = SelectionChange::detect(self.agent_name(slot), name);
        if !change.is_replaced() {
            return Ok(change);
        }

        if slot == DebateSlot::B && self.agent_name(DebateSlot::A) == Some(name) {
            return Err(DomainError::invalid_input(format!(
                "'{}' is already seated as {}",
                name,
                DebateSlot::A
            )));
        }

        let persona = store.get(name)?.clone();
        if slot == DebateSlot::A && self.agent_name(DebateSlot::B) == Some(name) {
            self.slot_b = store
                .debate_candidates(Some(name))
                .first()
                .and_then(|candidate| store.get(candidate).ok())
                .cloned();
        }
        *self.seat_mut(slot) = Some(persona);

        self.reset();
        self.start_if_ready();
        Ok(change)
    }

    /// Inject the seed once both seats hold distinct agents.
    ///
    /// Returns `true` if this call performed the `Ready -> Active` transition.
    fn start_if_ready(&mut self) -> bool {
        if self.state() != DebateState::Ready {
            return false;
        }
        let seed = Message::assistant(self.seed_message.clone());
        self.transcript_b.push(seed.mirrored());
        self.transcript_a.push(seed);
        self.started = true;
        true
    }

    fn reset(&mut self) {
        self.transcript_a.clear();
        self.transcript_b.clear();
        self.started = false;
    }

    fn seat_mut(&mut self, slot: DebateSlot) -> &mut Option<Persona> {
        match slot {
            DebateSlot::A => &mut self.slot_a,
            DebateSlot::B => &mut self.slot_b,
        }
    }

    fn transcript_mut(&mut self, slot: DebateSlot) -> &mut Transcript {
        match slot {
            DebateSlot::A => &mut self.transcript_a,
            DebateSlot::B => &mut self.transcript_b,
        }
    }

    pub fn state(&self) -> DebateState {
        match (&self.slot_a, &self.slot_b) {
            (Some(a), Some(b)) if a.name() != b.name() => {
                if self.started {
                    DebateState::Active
                } else {
                    DebateState::Ready
                }
            }
            _ => DebateState::Uninitialized,
        }
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    pub fn seed_message(&self) -> &str {
        &self.seed_message
    }

    pub fn agent(&self, slot: DebateSlot) -> Option<&Persona> {
        match slot {
            DebateSlot::A => self.slot_a.as_ref(),
            DebateSlot::B => self.slot_b.as_ref(),
        }
    }

    pub fn agent_name(&self, slot: DebateSlot) -> Option<&str> {
        self.agent(slot).map(Persona::name)
    }

    pub fn transcript(&self, slot: DebateSlot) -> &Transcript {
        match slot {
            DebateSlot::A => &self.transcript_a,
            DebateSlot::B => &self.transcript_b,
        }
    }

    /// Speaker name, persona prompt and transcript for one half-turn
    pub fn turn_context(&self, slot: DebateSlot) -> Result<(&str, &str, &Transcript), DomainError> {
        if self.state() != DebateState::Active {
            return Err(DomainError::NoActiveSession(
                "select two different agents to start a debate".to_string(),
            ));
        }
        let persona = self.agent(slot).ok_or_else(|| {
            DomainError::NoActiveSession(format!("{} is not selected", slot))
        })?;
        Ok((persona.name(), persona.prompt(), self.transcript(slot)))
    }

    /// Record what `speaker` said: `assistant` on its own side, `user` on the other.
    pub fn record_reply(
        &mut self,
        speaker: DebateSlot,
        reply: impl Into<String>,
    ) -> Result<(), DomainError> {
        if self.state() != DebateState::Active {
            return Err(DomainError::NoActiveSession(
                "debate has not started".to_string(),
            ));
        }
        let message = Message::assistant(reply);
        self.transcript_mut(speaker.other()).push(message.mirrored());
        self.transcript_mut(speaker).push(message);
        Ok(())
    }

    /// B has answered but A's reply is missing (the last advance failed halfway)
    pub fn is_interrupted(&self) -> bool {
        self.state() == DebateState::Active
            && self
                .transcript_a
                .last()
                .is_some_and(|m| m.role == Role::User)
    }

    /// Half-turns the next turn-advance has to run.
    ///
    /// An interrupted advance is finished with A's half only, so the two
    /// parties keep strictly alternating.
    pub fn pending_half_turns(&self) -> &'static [DebateSlot] {
        if self.is_interrupted() {
            &[DebateSlot::A]
        } else {
            &TURN_ORDER
        }
    }

    /// 1-based number of the turn-advance the next half-turn belongs to
    pub fn current_turn(&self) -> usize {
        self.transcript_a.len().saturating_sub(1) / 2 + 1
    }

    /// Conversation as rendered.
    ///
    /// The speaker of each line is read from A's transcript: A's own
    /// (`assistant`) lines are A's, incoming (`user`) lines are B's.
    pub fn lines(&self) -> Vec<DebateLine<'_>> {
        let (Some(a), Some(b)) = (self.slot_a.as_ref(), self.slot_b.as_ref()) else {
            return Vec::new();
        };

        self.transcript_a
            .iter()
            .map(|msg| {
                let (slot, persona) = match msg.role {
                    Role::Assistant => (DebateSlot::A, a),
                    Role::User => (DebateSlot::B, b),
                };
                DebateLine {
                    slot,
                    speaker: persona.name(),
                    content: msg.content.as_str(),
                }
            })
            .collect()
    }
}
