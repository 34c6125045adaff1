//! Shell command parsing

use parley_domain::DebateSlot;
use std::path::PathBuf;

/// A parsed line of shell input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Quit,
    /// `/create NAME PATH`
    Create { name: String, path: PathBuf },
    /// `/agents`
    Agents,
    /// `/show NAME`
    Show(String),
    /// `/chat [NAME]`: enter chat mode, optionally selecting an agent
    Chat(Option<String>),
    /// `/debate [A B]`: enter debate mode, optionally seating both agents
    Debate(Option<(String, String)>),
    /// `/a NAME`, `/b NAME`: seat one agent
    Seat { slot: DebateSlot, name: String },
    /// `/options`: who can sit where
    Options,
    /// `/converse [N]`
    Converse(usize),
    /// `/transcript`
    Transcript,
    /// `/clear`: forget the chat transcript
    Clear,
    /// Plain text: a chat message
    Say(String),
}

const USAGE_CREATE: &str = "usage: /create NAME PATH";
const USAGE_SEAT: &str = "usage: /a NAME or /b NAME";

impl Command {
    /// Parse one trimmed, non-empty input line.
    pub fn parse(line: &str) -> Result<Self, String> {
        let Some(rest) = line.strip_prefix('/') else {
            return Ok(Command::Say(line.to_string()));
        };

        let args = split_args(rest)?;
        let Some((head, args)) = args.split_first() else {
            return Err("empty command; type /help".to_string());
        };

        match (head.to_lowercase().as_str(), args) {
            ("help" | "h" | "?", []) => Ok(Command::Help),
            ("quit" | "exit" | "q", []) => Ok(Command::Quit),
            ("create" | "new", [name, path]) => Ok(Command::Create {
                name: name.clone(),
                path: PathBuf::from(path),
            }),
            ("create" | "new", _) => Err(USAGE_CREATE.to_string()),
            ("agents" | "ls", []) => Ok(Command::Agents),
            ("show", [name]) => Ok(Command::Show(name.clone())),
            ("show", _) => Err("usage: /show NAME".to_string()),
            ("chat", []) => Ok(Command::Chat(None)),
            ("chat", [name]) => Ok(Command::Chat(Some(name.clone()))),
            ("debate", []) => Ok(Command::Debate(None)),
            ("debate", [a, b]) => Ok(Command::Debate(Some((a.clone(), b.clone())))),
            ("debate", _) => Err("usage: /debate [AGENT1 AGENT2]".to_string()),
            ("a" | "1", [name]) => Ok(Command::Seat {
                slot: DebateSlot::A,
                name: name.clone(),
            }),
            ("b" | "2", [name]) => Ok(Command::Seat {
                slot: DebateSlot::B,
                name: name.clone(),
            }),
            ("a" | "1" | "b" | "2", _) => Err(USAGE_SEAT.to_string()),
            ("options", []) => Ok(Command::Options),
            ("converse" | "c", []) => Ok(Command::Converse(1)),
            ("converse" | "c", [n]) => match n.parse::<usize>() {
                Ok(n) if n > 0 => Ok(Command::Converse(n)),
                _ => Err(format!("'{}' is not a positive number of turns", n)),
            },
            ("transcript" | "t", []) => Ok(Command::Transcript),
            ("clear", []) => Ok(Command::Clear),
            (other, _) => Err(format!("Unknown command: /{}", other)),
        }
    }
}

/// Split on whitespace, keeping double- or single-quoted segments together.
fn split_args(input: &str) -> Result<Vec<String>, String> {
    let mut args = Vec::new();
    let mut current = String::new();
    let mut quote: Option<char> = None;
    let mut in_arg = false;

    for c in input.chars() {
        match quote {
            Some(q) if c == q => quote = None,
            Some(_) => current.push(c),
            None if c == '"' || c == '\'' => {
                quote = Some(c);
                in_arg = true;
            }
            None if c.is_whitespace() => {
                if in_arg {
                    args.push(std::mem::take(&mut current));
                    in_arg = false;
                }
            }
            None => {
                current.push(c);
                in_arg = true;
            }
        }
    }

    if quote.is_some() {
        return Err("unterminated quote".to_string());
    }
    if in_arg {
        args.push(current);
    }
    Ok(args)
}
