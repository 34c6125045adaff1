//! Console output formatter for agents, chats and debates

use colored::Colorize;
use parley_application::CreateAgentOutput;
use parley_domain::{ChatSession, DebateSession, DebateSlot, DomainError, Persona, PersonaStore, Role};

/// Formats shell state for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Known agents, sorted, with a hint when there are none
    pub fn format_agents(store: &PersonaStore) -> String {
        if store.is_empty() {
            return format!(
                "{}\n",
                "No agents yet. Create one with /create NAME PATH".dimmed()
            );
        }
        let mut output = Self::section_header(&format!("Agents ({})", store.len()));
        for name in store.list() {
            output.push_str(&format!("  - {}\n", name));
        }
        output
    }

    /// One agent's persona prompt
    pub fn format_persona(persona: &Persona) -> String {
        format!(
            "{}{}\n",
            Self::section_header(&format!("Persona: {}", persona.name())),
            Self::indent(persona.prompt(), "  ")
        )
    }

    pub fn format_agent_created(output: &CreateAgentOutput) -> String {
        let verb = if output.replaced() { "replaced" } else { "created" };
        format!(
            "{} Agent {} {} from a {} document ({} characters read, persona of {} characters)\n",
            "v".green(),
            output.name.bold(),
            verb,
            output.kind,
            output.document_chars,
            output.prompt_chars
        )
    }

    /// A single utterance
    pub fn format_reply(speaker: &str, content: &str) -> String {
        format!("{}\n{}\n", format!("{}:", speaker).yellow().bold(), content)
    }

    /// The whole chat transcript
    pub fn format_chat(session: &ChatSession) -> String {
        let Some(agent) = session.agent_name() else {
            return format!("{}\n", "No agent selected. Use /chat NAME".dimmed());
        };
        let mut output = Self::section_header(&format!("Chat with {}", agent));
        if session.transcript().is_empty() {
            output.push_str(&format!("{}\n", "(no messages yet)".dimmed()));
        }
        for message in session.transcript() {
            let speaker = match message.role {
                Role::User => "You",
                Role::Assistant => agent,
            };
            output.push('\n');
            output.push_str(&Self::format_reply(speaker, &message.content));
        }
        if session.awaiting_reply() {
            output.push_str(&format!(
                "\n{}\n",
                format!("({} has not replied; send another message to continue)", agent).dimmed()
            ));
        }
        output
    }

    /// The debate as seen by the audience: A and B alternating, starting with the seed.
    pub fn format_debate(session: &DebateSession) -> String {
        let (Some(a), Some(b)) = (
            session.agent_name(DebateSlot::A),
            session.agent_name(DebateSlot::B),
        ) else {
            return format!("{}\n", Self::format_seats(session));
        };

        let mut output = Self::section_header(&format!("Debate: {} vs {}", a, b));
        for line in session.lines() {
            output.push('\n');
            let label = format!("{} ({}):", line.speaker, line.slot);
            let label = match line.slot {
                DebateSlot::A => label.cyan().bold(),
                DebateSlot::B => label.magenta().bold(),
            };
            output.push_str(&format!("{}\n{}\n", label, line.content));
        }
        if session.is_interrupted() {
            output.push_str(&format!(
                "\n{}\n",
                format!("(last turn incomplete: /converse lets {} answer)", a).dimmed()
            ));
        }
        output
    }

    /// Who sits where
    pub fn format_seats(session: &DebateSession) -> String {
        let seat = |slot| {
            session
                .agent_name(slot)
                .map(|n| n.bold().to_string())
                .unwrap_or_else(|| "(empty)".dimmed().to_string())
        };
        format!(
            "{}: {}   {}: {}",
            DebateSlot::A,
            seat(DebateSlot::A),
            DebateSlot::B,
            seat(DebateSlot::B)
        )
    }

    /// Candidates for Agent 2, never including Agent 1's agent
    pub fn format_options(store: &PersonaStore, session: &DebateSession) -> String {
        let excluded = session.agent_name(DebateSlot::A);
        let mut output = format!("{}: {}\n", DebateSlot::A, store.list().join(", "));
        output.push_str(&format!(
            "{}: {}\n",
            DebateSlot::B,
            store.debate_candidates(excluded).join(", ")
        ));
        output
    }

    pub fn format_error(error: &DomainError) -> String {
        format!("{} {}", "Error:".red().bold(), error)
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    /// Indent a multi-line string
    pub fn indent(text: &str, prefix: &str) -> String {
        text.lines()
            .map(|line| format!("{}{}", prefix, line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain() {
        colored::control::set_override(false);
    }

    fn store() -> PersonaStore {
        let mut store = PersonaStore::new();
        store.create("Socrates", "You are Socrates.\nAsk questions.").unwrap();
        store.create("Plato", "You are Plato.").unwrap();
        store.create("Aristotle", "You are Aristotle.").unwrap();
        store
    }

    #[test]
    fn test_empty_store_shows_hint() {
        plain();
        let output = ConsoleFormatter::format_agents(&PersonaStore::new());
        assert!(output.contains("No agents yet"));
    }

    #[test]
    fn test_agents_are_listed_sorted() {
        plain();
        let output = ConsoleFormatter::format_agents(&store());
        let a = output.find("Aristotle").unwrap();
        let p = output.find("Plato").unwrap();
        let s = output.find("Socrates").unwrap();
        assert!(a < p && p < s);
    }

    #[test]
    fn test_persona_is_indented() {
        plain();
        let store = store();
        let output = ConsoleFormatter::format_persona(store.get("Socrates").unwrap());
        assert!(output.contains("  You are Socrates.\n  Ask questions."));
    }

    #[test]
    fn test_debate_lines_alternate_from_seed() {
        plain();
        let store = store();
        let mut session = DebateSession::new();
        session.select(DebateSlot::A, &store, "Socrates").unwrap();
        session.select(DebateSlot::B, &store, "Plato").unwrap();
        session.record_reply(DebateSlot::B, "Greetings.").unwrap();

        let output = ConsoleFormatter::format_debate(&session);

        let seed = output.find("Socrates (Agent 1):\nhi").unwrap();
        let reply = output.find("Plato (Agent 2):\nGreetings.").unwrap();
        assert!(seed < reply);
        assert!(output.contains("last turn incomplete: /converse lets Socrates answer"));
    }

    #[test]
    fn test_completed_debate_turn_has_no_hint() {
        plain();
        let store = store();
        let mut session = DebateSession::new();
        session.select(DebateSlot::A, &store, "Socrates").unwrap();
        session.select(DebateSlot::B, &store, "Plato").unwrap();
        session.record_reply(DebateSlot::B, "Greetings.").unwrap();
        session.record_reply(DebateSlot::A, "Welcome.").unwrap();

        let output = ConsoleFormatter::format_debate(&session);

        assert!(output.contains("Socrates (Agent 1):\nWelcome."));
        assert!(!output.contains("incomplete"));
    }

    #[test]
    fn test_options_exclude_agent_one() {
        plain();
        let store = store();
        let mut session = DebateSession::new();
        session.select(DebateSlot::A, &store, "Plato").unwrap();

        let output = ConsoleFormatter::format_options(&store, &session);

        assert!(output.contains("Agent 2: Aristotle, Socrates\n"));
    }

    #[test]
    fn test_chat_uses_agent_name_for_replies() {
        plain();
        let store = store();
        let mut session = ChatSession::new();
        session.select(&store, "Plato").unwrap();
        session.begin_turn("What is justice?").unwrap();
        session.record_reply("Harmony of the soul.");

        let output = ConsoleFormatter::format_chat(&session);

        assert!(output.contains("You:\nWhat is justice?"));
        assert!(output.contains("Plato:\nHarmony of the soul."));
        assert!(!output.contains("has not replied"));
    }

    #[test]
    fn test_chat_marks_unanswered_message() {
        plain();
        let store = store();
        let mut session = ChatSession::new();
        session.select(&store, "Plato").unwrap();
        session.begin_turn("What is justice?").unwrap();

        let output = ConsoleFormatter::format_chat(&session);

        assert!(output.contains("You:\nWhat is justice?"));
        assert!(output.contains("(Plato has not replied"));
    }
}
