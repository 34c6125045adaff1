//! Single-agent chat.

pub mod session;
