//! Create Agent use case
//!
//! Upload intake, text extraction, persona derivation through the model and
//! finally insertion into the persona store.

use crate::config::IngestParams;
use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger,
};
use crate::ports::document_reader::{DocumentError, DocumentReaderPort};
use crate::ports::llm_gateway::LlmGateway;
use crate::ports::progress::{NoProgress, ProgressNotifier};
use parley_domain::{
    DocumentKind, DomainError, PersonaPromptTemplate, PersonaStore, StoreWrite, Transcript,
    clip_chars,
};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Input for creating an agent from an uploaded document
#[derive(Debug, Clone)]
pub struct CreateAgentInput {
    pub name: String,
    pub upload: Option<PathBuf>,
}

impl CreateAgentInput {
    pub fn new(name: impl Into<String>, upload: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            upload: Some(upload.into()),
        }
    }
}

/// Outcome of a successful agent creation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateAgentOutput {
    pub name: String,
    pub kind: DocumentKind,
    pub write: StoreWrite,
    /// Characters of document text sent to the model
    pub document_chars: usize,
    /// Characters of the stored persona prompt
    pub prompt_chars: usize,
}

impl CreateAgentOutput {
    pub fn replaced(&self) -> bool {
        self.write == StoreWrite::Replaced
    }
}

/// Use case for turning an uploaded document into a stored persona
pub struct CreateAgentUseCase<G: LlmGateway + 'static> {
    gateway: Arc<G>,
    reader: Arc<dyn DocumentReaderPort>,
    params: IngestParams,
    logger: Arc<dyn ConversationLogger>,
}

impl<G: LlmGateway + 'static> CreateAgentUseCase<G> {
    pub fn new(gateway: Arc<G>, reader: Arc<dyn DocumentReaderPort>) -> Self {
        Self {
            gateway,
            reader,
            params: IngestParams::default(),
            logger: Arc::new(NoConversationLogger),
        }
    }

    pub fn with_params(mut self, params: IngestParams) -> Self {
        self.params = params;
        self
    }

    pub fn with_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.logger = logger;
        self
    }

    pub async fn execute(
        &self,
        store: &mut PersonaStore,
        input: CreateAgentInput,
    ) -> Result<CreateAgentOutput, DomainError> {
        self.execute_with_progress(store, input, &NoProgress).await
    }

    /// Create (or overwrite) the agent named in `input`.
    ///
    /// The store is only touched once a non-empty persona prompt exists; any
    /// earlier failure leaves it unchanged.
    pub async fn execute_with_progress(
        &self,
        store: &mut PersonaStore,
        input: CreateAgentInput,
        progress: &dyn ProgressNotifier,
    ) -> Result<CreateAgentOutput, DomainError> {
        let name = input.name.trim().to_string();
        if name.is_empty() {
            return Err(DomainError::invalid_input("agent name must not be empty"));
        }
        let upload = input
            .upload
            .ok_or_else(|| DomainError::invalid_input("no document uploaded"))?;
        let kind = DocumentKind::detect(&upload)?;

        info!("Creating agent '{}' from {} ({})", name, upload.display(), kind);
        let text = self.read_document(upload.clone()).await?;
        let excerpt = clip_chars(&text, self.params.max_document_chars);
        if excerpt.len() < text.len() {
            debug!(
                "Document clipped to {} characters",
                self.params.max_document_chars
            );
        }

        progress.on_derive_start(&name);
        let derived = self.derive_prompt(&name, excerpt).await;
        progress.on_derive_complete(&name, derived.is_ok());
        let prompt = derived?;

        let write = store.create(name.clone(), prompt.clone())?;
        if write == StoreWrite::Replaced {
            info!("Agent '{}' replaced with a new persona", name);
        } else {
            info!("Agent '{}' created", name);
        }

        let source = upload
            .file_name()
            .map(|f| f.to_string_lossy().into_owned())
            .unwrap_or_default();
        let prompt_chars = prompt.chars().count();
        self.logger.log(ConversationEvent::agent_created(
            &name,
            &source,
            write == StoreWrite::Replaced,
            prompt_chars,
        ));

        Ok(CreateAgentOutput {
            name,
            kind,
            write,
            document_chars: excerpt.chars().count(),
            prompt_chars,
        })
    }

    async fn read_document(&self, upload: PathBuf) -> Result<String, DomainError> {
        let reader = Arc::clone(&self.reader);
        let text = tokio::task::spawn_blocking(move || reader.read_upload(&upload))
            .await
            .map_err(|e| DomainError::DocumentParse(format!("document reader panicked: {}", e)))?
            .inspect_err(|e| warn!("Document extraction failed: {}", e))?;

        if text.trim().is_empty() {
            return Err(DocumentError::Empty.into());
        }
        Ok(text)
    }

    async fn derive_prompt(&self, name: &str, document_text: &str) -> Result<String, DomainError> {
        let mut request = Transcript::new();
        request.push_user(PersonaPromptTemplate::derivation_request(
            name,
            document_text,
        ));

        let prompt = self
            .gateway
            .respond(PersonaPromptTemplate::derivation_system(), &request)
            .await
            .map_err(|e| {
                warn!("Persona derivation for '{}' failed: {}", name, e);
                self.logger
                    .log(ConversationEvent::model_error(name, &e.to_string()));
                DomainError::from(e)
            })?;

        let prompt = prompt.trim();
        if prompt.is_empty() {
            return Err(DomainError::DocumentParse(format!(
                "could not derive a persona for '{}': the model returned nothing",
                name
            )));
        }
        Ok(prompt.to_string())
    }
}
