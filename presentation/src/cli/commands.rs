//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

/// An agent to create before the shell starts: `NAME=PATH`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentSpec {
    pub name: String,
    pub path: PathBuf,
}

impl std::str::FromStr for AgentSpec {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, path) = s
            .split_once('=')
            .ok_or_else(|| format!("expected NAME=PATH, got '{}'", s))?;
        let name = name.trim();
        let path = path.trim();
        if name.is_empty() || path.is_empty() {
            return Err(format!("expected NAME=PATH, got '{}'", s));
        }
        Ok(Self {
            name: name.to_string(),
            path: PathBuf::from(path),
        })
    }
}

/// CLI arguments for persona-parley
#[derive(Parser, Debug)]
#[command(name = "persona-parley")]
#[command(author, version, about = "Chat with personas derived from your documents, or watch two of them debate")]
#[command(long_about = r#"
Persona Parley turns a document (PDF, DOCX, TXT or CSV) into a persona and lets you
talk to it, or seats two personas opposite each other and lets them debate.

Inside the shell:
  /create NAME PATH   Derive a persona from a document
  /chat NAME          Talk to one persona
  /debate A B         Seat two personas and start a debate
  /converse [N]       Advance the debate N turns
  /help               Everything else

Configuration files are loaded from (in priority order):
1. PARLEY_* env vars   e.g. PARLEY_PROVIDER__MODEL=gpt-4o
2. --config <path>     Explicit config file
3. ./parley.toml       Project-level config
4. ~/.config/persona-parley/config.toml   Global config

Example:
  persona-parley --agent Socrates=apology.pdf --agent Plato=republic.txt
  persona-parley --model gpt-4o -v
"#)]
pub struct Cli {
    /// Create an agent at startup (can be specified multiple times)
    #[arg(short, long, value_name = "NAME=PATH")]
    pub agent: Vec<AgentSpec>,

    /// Model to use (overrides provider.model)
    #[arg(short, long, value_name = "MODEL")]
    pub model: Option<String>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and the merged configuration, then exit
    #[arg(long)]
    pub show_config: bool,

    /// Write diagnostic logs to this file instead of stderr
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Append conversation events as JSON lines to this file
    #[arg(long, value_name = "PATH")]
    pub conversation_log: Option<PathBuf>,
}
