//! Interactive shell: create agents, chat with one, or watch two debate

use super::command::Command;
use crate::config::ReplConfig;
use crate::{ConsoleFormatter, ProgressReporter, SimpleProgress};
use parley_application::{
    CreateAgentInput, CreateAgentOutput, CreateAgentUseCase, LlmGateway, NoProgress,
    ProgressNotifier, RunChatUseCase, RunDebateUseCase,
};
use parley_domain::{ChatSession, DebateSession, DebateSlot, DomainError, PersonaStore};
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RlResult};
use std::io::IsTerminal;
use std::path::PathBuf;

/// Which page of the shell is in front
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Home,
    Chat,
    Debate,
}

/// What the loop should do after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

const MIN_DEBATE_AGENTS: usize = 2;

/// Interactive persona shell.
///
/// Owns the persona store and both sessions; the use cases are stateless and
/// receive them by `&mut`.
pub struct ParleyRepl<G: LlmGateway + 'static> {
    chat_use_case: RunChatUseCase<G>,
    debate_use_case: RunDebateUseCase<G>,
    create_use_case: CreateAgentUseCase<G>,
    store: PersonaStore,
    chat: ChatSession,
    debate: DebateSession,
    mode: Mode,
    config: ReplConfig,
}

impl<G: LlmGateway + 'static> ParleyRepl<G> {
    pub fn new(
        chat_use_case: RunChatUseCase<G>,
        debate_use_case: RunDebateUseCase<G>,
        create_use_case: CreateAgentUseCase<G>,
    ) -> Self {
        let debate = debate_use_case.new_session();
        Self {
            chat_use_case,
            debate_use_case,
            create_use_case,
            store: PersonaStore::new(),
            chat: ChatSession::new(),
            debate,
            mode: Mode::Home,
            config: ReplConfig::default(),
        }
    }

    pub fn with_config(mut self, config: ReplConfig) -> Self {
        self.config = config;
        self
    }

    /// Set whether to show progress
    pub fn with_progress(mut self, show: bool) -> Self {
        self.config.show_progress = show;
        self
    }

    pub fn store(&self) -> &PersonaStore {
        &self.store
    }

    pub fn chat(&self) -> &ChatSession {
        &self.chat
    }

    pub fn debate(&self) -> &DebateSession {
        &self.debate
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Spinners on a terminal, plain lines when piped
    fn progress(&self) -> Box<dyn ProgressNotifier> {
        if !self.config.show_progress {
            Box::new(NoProgress)
        } else if std::io::stdout().is_terminal() {
            Box::new(ProgressReporter::new())
        } else {
            Box::new(SimpleProgress)
        }
    }

    /// Derive a persona from `path` and store it under `name`.
    pub async fn create_agent(
        &mut self,
        name: &str,
        path: impl Into<PathBuf>,
    ) -> Result<CreateAgentOutput, DomainError> {
        let progress = self.progress();
        self.create_use_case
            .execute_with_progress(
                &mut self.store,
                CreateAgentInput::new(name, path),
                progress.as_ref(),
            )
            .await
    }

    /// Run the interactive REPL
    pub async fn run(&mut self) -> RlResult<()> {
        let mut rl = DefaultEditor::new()?;

        let history_path = self.config.history_path();
        if let Some(ref path) = history_path {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            let _ = rl.load_history(path);
        }

        self.print_welcome();

        loop {
            match rl.readline(&self.prompt()) {
                Ok(line) => {
                    let line = line.trim();
                    if line.is_empty() {
                        continue;
                    }
                    let _ = rl.add_history_entry(line);

                    let command = match Command::parse(line) {
                        Ok(command) => command,
                        Err(usage) => {
                            println!("{}", usage);
                            continue;
                        }
                    };
                    match self.execute(command).await {
                        Ok(Flow::Quit) => break,
                        Ok(Flow::Continue) => {}
                        Err(e) => eprintln!("{}", ConsoleFormatter::format_error(&e)),
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!("Bye!");
                    break;
                }
                Err(err) => {
                    eprintln!("Error: {:?}", err);
                    break;
                }
            }
        }

        if let Some(ref path) = history_path {
            let _ = rl.save_history(path);
        }

        Ok(())
    }

    fn prompt(&self) -> String {
        match self.mode {
            Mode::Home => "parley> ".to_string(),
            Mode::Chat => match self.chat.agent_name() {
                Some(name) => format!("{}> ", name),
                None => "chat> ".to_string(),
            },
            Mode::Debate => "debate> ".to_string(),
        }
    }

    fn print_welcome(&self) {
        println!();
        println!("╭─────────────────────────────────────────────╮");
        println!("│               Persona Parley                │");
        println!("╰─────────────────────────────────────────────╯");
        println!();
        print!("{}", ConsoleFormatter::format_agents(&self.store));
        println!();
        println!("Type /help for commands.");
        println!();
    }

    fn print_help(&self) {
        println!();
        println!("Agents:");
        println!("  /create NAME PATH   - Create an agent from a PDF, DOCX, TXT or CSV file");
        println!("  /agents             - List agents");
        println!("  /show NAME          - Show an agent's persona");
        println!();
        println!("Chat:");
        println!("  /chat [NAME]        - Chat with an agent (switching agents starts over)");
        println!("  <text>              - Send a message");
        println!("  /clear              - Forget the conversation, keep the agent");
        println!();
        println!("Debate:");
        println!("  /debate [A B]       - Seat two agents; the debate opens with the seed line");
        println!("  /a NAME, /b NAME    - Change one seat (restarts the debate)");
        println!("  /options            - Who can sit where");
        println!("  /converse [N]       - Let the agents talk for N turns (default 1)");
        println!();
        println!("  /transcript         - Show the current conversation");
        println!("  /help, /quit");
        println!();
    }

    /// Execute one parsed command against the shell state.
    pub async fn execute(&mut self, command: Command) -> Result<Flow, DomainError> {
        match command {
            Command::Help => self.print_help(),
            Command::Quit => {
                println!("Bye!");
                return Ok(Flow::Quit);
            }
            Command::Create { name, path } => {
                let output = self.create_agent(&name, path).await?;
                print!("{}", ConsoleFormatter::format_agent_created(&output));
            }
            Command::Agents => print!("{}", ConsoleFormatter::format_agents(&self.store)),
            Command::Show(name) => {
                let persona = self.store.get(&name)?;
                print!("{}", ConsoleFormatter::format_persona(persona));
            }
            Command::Chat(name) => self.enter_chat(name.as_deref())?,
            Command::Debate(seats) => self.enter_debate(seats)?,
            Command::Seat { slot, name } => {
                self.require_debate_agents()?;
                self.mode = Mode::Debate;
                self.seat(slot, &name)?;
            }
            Command::Options => {
                print!(
                    "{}",
                    ConsoleFormatter::format_options(&self.store, &self.debate)
                );
            }
            Command::Converse(turns) => self.converse(turns).await?,
            Command::Transcript => match self.mode {
                Mode::Debate => print!("{}", ConsoleFormatter::format_debate(&self.debate)),
                _ => print!("{}", ConsoleFormatter::format_chat(&self.chat)),
            },
            Command::Clear => {
                self.chat.clear_transcript();
                println!("Conversation cleared.");
            }
            Command::Say(text) => self.say(&text).await?,
        }
        Ok(Flow::Continue)
    }

    fn enter_chat(&mut self, name: Option<&str>) -> Result<(), DomainError> {
        if let Some(name) = name {
            if self.chat.select(&self.store, name)?.is_replaced() {
                println!("Now chatting with {}.", name);
            }
        } else if self.store.is_empty() {
            print!("{}", ConsoleFormatter::format_agents(&self.store));
        }
        self.mode = Mode::Chat;
        print!("{}", ConsoleFormatter::format_chat(&self.chat));
        Ok(())
    }

    fn enter_debate(&mut self, seats: Option<(String, String)>) -> Result<(), DomainError> {
        self.require_debate_agents()?;
        self.mode = Mode::Debate;
        match seats {
            Some((a, b)) => {
                self.seat(DebateSlot::A, &a)?;
                self.seat(DebateSlot::B, &b)?;
            }
            None => {
                println!("{}", ConsoleFormatter::format_seats(&self.debate));
                print!(
                    "{}",
                    ConsoleFormatter::format_options(&self.store, &self.debate)
                );
            }
        }
        Ok(())
    }

    fn seat(&mut self, slot: DebateSlot, name: &str) -> Result<(), DomainError> {
        let change = self
            .debate_use_case
            .select(&mut self.debate, slot, &self.store, name)?;
        if change.is_replaced() {
            if self.debate.is_started() {
                print!("{}", ConsoleFormatter::format_debate(&self.debate));
            } else {
                println!("{}", ConsoleFormatter::format_seats(&self.debate));
            }
        }
        Ok(())
    }

    fn require_debate_agents(&self) -> Result<(), DomainError> {
        if self.store.len() < MIN_DEBATE_AGENTS {
            return Err(DomainError::invalid_input(
                "You need at least two agents for a debate",
            ));
        }
        Ok(())
    }

    async fn converse(&mut self, turns: usize) -> Result<(), DomainError> {
        let progress = self.progress();
        let shown = self.debate.lines().len();
        let result = self
            .debate_use_case
            .converse_rounds(&mut self.debate, turns, progress.as_ref())
            .await;

        // Print whatever was added, including a half-finished turn
        for line in self.debate.lines().iter().skip(shown) {
            println!();
            print!(
                "{}",
                ConsoleFormatter::format_reply(line.speaker, line.content)
            );
        }
        result.map(|_| ())
    }

    async fn say(&mut self, text: &str) -> Result<(), DomainError> {
        if self.mode == Mode::Debate {
            return Err(DomainError::invalid_input(
                "the agents are debating each other; use /converse, or /chat NAME to talk yourself",
            ));
        }
        let progress = self.progress();
        let reply = self
            .chat_use_case
            .submit_with_progress(&mut self.chat, text, progress.as_ref())
            .await?;
        self.mode = Mode::Chat;
        if let Some(agent) = self.chat.agent_name() {
            println!();
            print!("{}", ConsoleFormatter::format_reply(agent, &reply));
            println!();
        }
        Ok(())
    }
}
