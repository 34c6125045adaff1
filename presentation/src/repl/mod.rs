//! Readline shell for creating agents, chatting and debating

mod command;
mod shell;

pub use command::Command;
pub use shell::{Flow, Mode, ParleyRepl};
