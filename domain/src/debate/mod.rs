//! Dual-agent debate.
//!
//! - [`session::DebateSession`]: seats, dual transcripts and the seed transition
//! - [`session::TURN_ORDER`]: fixed order of the two half-turns in a turn-advance

pub mod session;
