//! Presentation layer for persona-parley
//!
//! This crate contains CLI definitions, output formatters,
//! progress reporters, and the interactive shell.

pub mod cli;
pub mod config;
pub mod output;
pub mod progress;
pub mod repl;

// Re-export commonly used types
pub use cli::commands::{AgentSpec, Cli};
pub use config::ReplConfig;
pub use output::console::ConsoleFormatter;
pub use progress::reporter::{ProgressReporter, SimpleProgress};
pub use repl::{Command, Flow, Mode, ParleyRepl};
