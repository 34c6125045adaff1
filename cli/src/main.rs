//! CLI entrypoint for Persona Parley
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use clap::Parser;
use parley_application::{
    ConversationLogger, CreateAgentUseCase, NoConversationLogger, RunChatUseCase,
    RunDebateUseCase,
};
use parley_infrastructure::{
    ConfigLoader, FileConfig, JsonlConversationLogger, LocalDocumentReader, OpenAiGateway,
    UploadStaging,
};
use parley_presentation::{Cli, ConsoleFormatter, ParleyRepl, ReplConfig};
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Initialize logging based on verbosity level.
///
/// The returned guard flushes the log file on drop and must outlive the shell.
fn init_logging(cli: &Cli) -> Result<Option<WorkerGuard>> {
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);

    match &cli.log_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("cannot open log file {}", path.display()))?;
            let (writer, guard) = tracing_appender::non_blocking(file);
            builder.with_writer(writer).with_ansi(false).init();
            Ok(Some(guard))
        }
        None => {
            builder.with_writer(std::io::stderr).init();
            Ok(None)
        }
    }
}

fn load_config(cli: &Cli) -> Result<FileConfig> {
    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref())
            .map_err(|e| anyhow::anyhow!("invalid configuration: {}", e))?
    };

    if let Some(model) = &cli.model {
        config.provider.model = model.clone();
    }
    if let Some(path) = &cli.conversation_log {
        config.logging.conversation_log = Some(path.display().to_string());
    }
    Ok(config)
}

fn conversation_logger(config: &FileConfig) -> Arc<dyn ConversationLogger> {
    let Some(path) = config.logging.conversation_log.as_deref() else {
        return Arc::new(NoConversationLogger);
    };
    match JsonlConversationLogger::open(path) {
        Some(logger) => {
            info!("Conversation log: {}", logger.path().display());
            Arc::new(logger)
        }
        None => {
            warn!("Conversation logging disabled");
            Arc::new(NoConversationLogger)
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let _log_guard = init_logging(&cli)?;

    info!("Starting Persona Parley");

    let config = load_config(&cli)?;

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_deref());
        let mut shown = config.clone();
        if shown.provider.api_key.is_some() {
            shown.provider.api_key = Some("********".to_string());
        }
        println!();
        println!("{:#?}", shown);
        return Ok(());
    }

    let issues = config.validate();
    for issue in &issues {
        eprintln!("config {}", issue);
    }
    if FileConfig::has_errors(&issues) {
        bail!("configuration has errors; fix them or run with --no-config");
    }

    // === Dependency Injection ===
    let gateway = Arc::new(OpenAiGateway::from_config(&config.provider)?);
    let logger = conversation_logger(&config);
    let staging = match &config.ingest.temp_dir {
        Some(dir) => UploadStaging::in_dir(PathBuf::from(dir)),
        None => UploadStaging::new(),
    };
    let reader = Arc::new(LocalDocumentReader::new(staging));

    let chat = RunChatUseCase::new(Arc::clone(&gateway)).with_logger(Arc::clone(&logger));
    let debate = RunDebateUseCase::new(Arc::clone(&gateway))
        .with_params(config.debate.to_params())
        .with_logger(Arc::clone(&logger));
    let create = CreateAgentUseCase::new(gateway, reader)
        .with_params(config.ingest.to_params())
        .with_logger(logger);

    let repl_config = ReplConfig {
        show_progress: config.repl.show_progress && !cli.quiet,
        history_file: config.repl.history_file.clone(),
    };
    let mut repl = ParleyRepl::new(chat, debate, create).with_config(repl_config);

    for spec in &cli.agent {
        match repl.create_agent(&spec.name, spec.path.clone()).await {
            Ok(output) => print!("{}", ConsoleFormatter::format_agent_created(&output)),
            Err(e) => eprintln!("{}", ConsoleFormatter::format_error(&e)),
        }
    }

    repl.run().await?;

    Ok(())
}
