//! Run Debate use case
//!
//! Handles seat selection events and turn-advances for a two-persona debate.

use crate::config::DebateParams;
use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger,
};
use crate::ports::llm_gateway::LlmGateway;
use crate::ports::progress::{NoProgress, ProgressNotifier};
use crate::use_cases::shared::request_reply;
use parley_domain::{
    DebateSession, DebateSlot, DebateState, DomainError, PersonaStore, SelectionChange,
};
use std::sync::Arc;
use tracing::info;

/// Replies produced by one turn-advance
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnAdvance {
    /// 1-based turn number (the seed is turn 0)
    pub turn: usize,
    /// Agent B's reply to A's latest line; `None` when this advance only
    /// finished a turn whose B half had already succeeded
    pub reply_b: Option<String>,
    /// Agent A's reply to B's fresh line
    pub reply_a: String,
}

/// Use case for running a debate between two personas
pub struct RunDebateUseCase<G: LlmGateway + 'static> {
    gateway: Arc<G>,
    params: DebateParams,
    logger: Arc<dyn ConversationLogger>,
}

impl<G: LlmGateway + 'static> RunDebateUseCase<G> {
    pub fn new(gateway: Arc<G>) -> Self {
        Self {
            gateway,
            params: DebateParams::default(),
            logger: Arc::new(NoConversationLogger),
        }
    }

    pub fn with_params(mut self, params: DebateParams) -> Self {
        self.params = params;
        self
    }

    pub fn with_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.logger = logger;
        self
    }

    pub fn params(&self) -> &DebateParams {
        &self.params
    }

    /// Fresh, empty debate using the configured seed message
    pub fn new_session(&self) -> DebateSession {
        DebateSession::with_seed_message(self.params.seed_message.clone())
    }

    /// Seat `name` in `slot`.
    ///
    /// Any change resets the debate; when both seats end up filled the seed
    /// is injected immediately, without a model call.
    pub fn select(
        &self,
        session: &mut DebateSession,
        slot: DebateSlot,
        store: &PersonaStore,
        name: &str,
    ) -> Result<SelectionChange, DomainError> {
        let change = session.select(slot, store, name)?;

        if change.is_replaced() {
            info!("{} is now {}", slot, name);
            if session.state() == DebateState::Active {
                let a = session.agent_name(DebateSlot::A).unwrap_or_default();
                let b = session.agent_name(DebateSlot::B).unwrap_or_default();
                info!("Debate started: {} vs {}", a, b);
                self.logger.log(ConversationEvent::debate_seeded(
                    a,
                    b,
                    session.seed_message(),
                ));
            }
        }

        Ok(change)
    }

    /// Run one turn-advance with default (no-op) progress
    pub async fn converse(&self, session: &mut DebateSession) -> Result<TurnAdvance, DomainError> {
        self.converse_with_progress(session, &NoProgress).await
    }

    /// Run one turn-advance: B replies, then A replies.
    ///
    /// The two calls are sequential because A answers what B just said. If
    /// the first call fails nothing is appended; if the second fails B's
    /// reply stays in both transcripts and the next advance asks only A.
    pub async fn converse_with_progress(
        &self,
        session: &mut DebateSession,
        progress: &dyn ProgressNotifier,
    ) -> Result<TurnAdvance, DomainError> {
        if session.state() != DebateState::Active {
            return Err(DomainError::NoActiveSession(
                "select two different agents to start a debate".to_string(),
            ));
        }

        let turn = session.current_turn();
        if session.is_interrupted() {
            info!("Debate turn {} (resuming after {})", turn, DebateSlot::B);
        } else {
            info!("Debate turn {}", turn);
        }

        let mut reply_b = None;
        let mut reply_a = String::new();
        for &slot in session.pending_half_turns() {
            let reply = self.half_turn(session, slot, turn, progress).await?;
            self.pause().await;
            match slot {
                DebateSlot::A => reply_a = reply,
                DebateSlot::B => reply_b = Some(reply),
            }
        }

        Ok(TurnAdvance {
            turn,
            reply_b,
            reply_a,
        })
    }

    /// Run `rounds` turn-advances, stopping at the first failure.
    pub async fn converse_rounds(
        &self,
        session: &mut DebateSession,
        rounds: usize,
        progress: &dyn ProgressNotifier,
    ) -> Result<Vec<TurnAdvance>, DomainError> {
        let mut advances = Vec::with_capacity(rounds);
        for _ in 0..rounds {
            advances.push(self.converse_with_progress(session, progress).await?);
        }
        Ok(advances)
    }

    async fn half_turn(
        &self,
        session: &mut DebateSession,
        slot: DebateSlot,
        turn: usize,
        progress: &dyn ProgressNotifier,
    ) -> Result<String, DomainError> {
        let (speaker, persona_prompt, transcript) = session.turn_context(slot)?;
        let speaker = speaker.to_string();

        let reply = request_reply(
            self.gateway.as_ref(),
            &speaker,
            persona_prompt,
            transcript,
            progress,
            self.logger.as_ref(),
        )
        .await?;

        session.record_reply(slot, reply.clone())?;
        self.logger.log(ConversationEvent::debate_reply(
            &speaker,
            slot.number(),
            turn,
            &reply,
        ));
        Ok(reply)
    }

    async fn pause(&self) {
        if !self.params.pacing.is_zero() {
            tokio::time::sleep(self.params.pacing).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::llm_gateway::GatewayError;
    use crate::use_cases::test_support::{RecordingLogger, RecordingProgress, ScriptedGateway};
    use parley_domain::{Message, Role};
    use std::time::Duration;

    fn store() -> PersonaStore {
        let mut store = PersonaStore::new();
        store.create("Socrates", "You are Socrates.").unwrap();
        store.create("Plato", "You are Plato.").unwrap();
        store.create("Aristotle", "You are Aristotle.").unwrap();
        store
    }

    fn use_case(gateway: Arc<ScriptedGateway>) -> RunDebateUseCase<ScriptedGateway> {
        RunDebateUseCase::new(gateway).with_params(DebateParams::unpaced())
    }

    fn seeded(use_case: &RunDebateUseCase<ScriptedGateway>) -> DebateSession {
        let store = store();
        let mut session = use_case.new_session();
        use_case
            .select(&mut session, DebateSlot::A, &store, "Socrates")
            .unwrap();
        use_case
            .select(&mut session, DebateSlot::B, &store, "Plato")
            .unwrap();
        session
    }

    fn assert_mirrored(session: &DebateSession) {
        let a = session.transcript(DebateSlot::A);
        let b = session.transcript(DebateSlot::B);
        assert_eq!(a.len(), b.len());
        for (ma, mb) in a.iter().zip(b.iter()) {
            assert_eq!(ma.content, mb.content);
            assert_ne!(ma.role, mb.role);
        }
    }

    #[tokio::test]
    async fn test_seed_without_converse() {
        let gateway = Arc::new(ScriptedGateway::ok(&[]));
        let use_case = use_case(Arc::clone(&gateway));

        let session = seeded(&use_case);

        assert_eq!(
            session.transcript(DebateSlot::A).messages(),
            &[Message::assistant("hi")]
        );
        assert_eq!(
            session.transcript(DebateSlot::B).messages(),
            &[Message::user("hi")]
        );
        assert!(gateway.calls().is_empty());
    }

    #[tokio::test]
    async fn test_one_converse_from_seed() {
        let gateway = Arc::new(ScriptedGateway::ok(&["Plato speaks", "Socrates answers"]));
        let use_case = use_case(Arc::clone(&gateway));
        let mut session = seeded(&use_case);

        let advance = use_case.converse(&mut session).await.unwrap();

        assert_eq!(advance.turn, 1);
        assert_eq!(advance.reply_b.as_deref(), Some("Plato speaks"));
        assert_eq!(advance.reply_a, "Socrates answers");
        assert_eq!(session.transcript(DebateSlot::A).len(), 3);
        assert_eq!(session.transcript(DebateSlot::B).len(), 3);
        assert_mirrored(&session);

        // B is asked first, with its own view of the seed
        let calls = gateway.calls();
        assert_eq!(calls[0].persona_prompt, "You are Plato.");
        assert_eq!(calls[0].messages, vec![Message::user("hi")]);
        // A then sees B's fresh reply as user input
        assert_eq!(calls[1].persona_prompt, "You are Socrates.");
        assert_eq!(
            calls[1].messages,
            vec![Message::assistant("hi"), Message::user("Plato speaks")]
        );
    }

    #[tokio::test]
    async fn test_invariants_hold_across_turns() {
        let replies: Vec<String> = (0..8).map(|i| format!("reply {}", i)).collect();
        let refs: Vec<&str> = replies.iter().map(String::as_str).collect();
        let gateway = Arc::new(ScriptedGateway::ok(&refs));
        let use_case = use_case(gateway);
        let mut session = seeded(&use_case);

        for turn in 1..=4 {
            let advance = use_case.converse(&mut session).await.unwrap();
            assert_eq!(advance.turn, turn);
            assert!(!session.is_interrupted());
            assert_mirrored(&session);
        }

        let lines = session.lines();
        assert_eq!(lines.len(), 9);
        assert!(lines.iter().step_by(2).all(|l| l.speaker == "Socrates"));
        assert!(lines.iter().skip(1).step_by(2).all(|l| l.speaker == "Plato"));
    }

    #[tokio::test]
    async fn test_converse_before_start_fails() {
        let gateway = Arc::new(ScriptedGateway::ok(&["unused"]));
        let use_case = use_case(Arc::clone(&gateway));
        let mut session = use_case.new_session();
        use_case
            .select(&mut session, DebateSlot::A, &store(), "Socrates")
            .unwrap();

        let err = use_case.converse(&mut session).await.unwrap_err();

        assert!(matches!(err, DomainError::NoActiveSession(_)));
        assert!(gateway.calls().is_empty());
    }

    #[tokio::test]
    async fn test_first_call_failure_appends_nothing() {
        let gateway = Arc::new(ScriptedGateway::new(vec![Err(GatewayError::Timeout)]));
        let use_case = use_case(Arc::clone(&gateway));
        let mut session = seeded(&use_case);

        let err = use_case.converse(&mut session).await.unwrap_err();

        assert!(matches!(err, DomainError::ModelInvocation(_)));
        assert_eq!(session.transcript(DebateSlot::A).len(), 1);
        assert_eq!(session.transcript(DebateSlot::B).len(), 1);
        assert_eq!(gateway.calls().len(), 1);
    }

    #[tokio::test]
    async fn test_second_call_failure_keeps_first_half_turn() {
        let gateway = Arc::new(ScriptedGateway::new(vec![
            Ok("Plato speaks".to_string()),
            Err(GatewayError::RequestFailed("quota".to_string())),
        ]));
        let logger = Arc::new(RecordingLogger::default());
        let use_case = use_case(gateway).with_logger(logger.clone());
        let mut session = seeded(&use_case);

        let err = use_case.converse(&mut session).await.unwrap_err();

        assert!(matches!(err, DomainError::ModelInvocation(_)));
        let a = session.transcript(DebateSlot::A);
        let b = session.transcript(DebateSlot::B);
        assert_eq!(a.len(), 2);
        assert_eq!(b.len(), 2);
        assert_eq!(a.last(), Some(&Message::user("Plato speaks")));
        assert_eq!(b.last().map(|m| m.role), Some(Role::Assistant));
        assert_mirrored(&session);
        assert_eq!(
            logger.event_types(),
            vec!["debate_seeded", "debate_reply", "model_error"]
        );
    }

    #[tokio::test]
    async fn test_retry_after_failed_second_call_finishes_with_a() {
        let gateway = Arc::new(ScriptedGateway::new(vec![
            Ok("PLATO-1".to_string()),
            Err(GatewayError::Timeout),
            Ok("SOCRATES-1".to_string()),
            Ok("PLATO-2".to_string()),
            Ok("SOCRATES-2".to_string()),
        ]));
        let use_case = use_case(Arc::clone(&gateway));
        let mut session = seeded(&use_case);
        assert!(use_case.converse(&mut session).await.is_err());

        let resumed = use_case.converse(&mut session).await.unwrap();

        assert_eq!(resumed.turn, 1);
        assert_eq!(resumed.reply_b, None);
        assert_eq!(resumed.reply_a, "SOCRATES-1");
        // A alone was asked, with B's pending line last
        let calls = gateway.calls();
        assert_eq!(calls.len(), 3);
        assert_eq!(calls[2].persona_prompt, "You are Socrates.");
        assert_eq!(calls[2].messages.last(), Some(&Message::user("PLATO-1")));

        let next = use_case.converse(&mut session).await.unwrap();
        assert_eq!(next.turn, 2);
        assert_eq!(next.reply_b.as_deref(), Some("PLATO-2"));
        assert_mirrored(&session);

        let rendered: Vec<_> = session
            .lines()
            .iter()
            .map(|l| (l.speaker, l.content))
            .collect();
        assert_eq!(
            rendered,
            vec![
                ("Socrates", "hi"),
                ("Plato", "PLATO-1"),
                ("Socrates", "SOCRATES-1"),
                ("Plato", "PLATO-2"),
                ("Socrates", "SOCRATES-2"),
            ]
        );
    }

    #[tokio::test]
    async fn test_changing_seat_restarts_and_logs_seed() {
        let gateway = Arc::new(ScriptedGateway::ok(&["b", "a"]));
        let logger = Arc::new(RecordingLogger::default());
        let use_case = use_case(gateway).with_logger(logger.clone());
        let mut session = seeded(&use_case);
        use_case.converse(&mut session).await.unwrap();

        let change = use_case
            .select(&mut session, DebateSlot::B, &store(), "Aristotle")
            .unwrap();

        assert!(change.is_replaced());
        assert_eq!(session.transcript(DebateSlot::A).len(), 1);
        let seeds = logger.payloads("debate_seeded");
        assert_eq!(seeds.len(), 2);
        assert_eq!(seeds[1]["agent_b"], "Aristotle");
    }

    #[tokio::test]
    async fn test_reselect_same_agent_does_not_log() {
        let gateway = Arc::new(ScriptedGateway::ok(&[]));
        let logger = Arc::new(RecordingLogger::default());
        let use_case = use_case(gateway).with_logger(logger.clone());
        let mut session = seeded(&use_case);

        use_case
            .select(&mut session, DebateSlot::A, &store(), "Socrates")
            .unwrap();

        assert_eq!(logger.event_types(), vec!["debate_seeded"]);
    }

    #[tokio::test]
    async fn test_converse_rounds_stops_at_failure() {
        let gateway = Arc::new(ScriptedGateway::ok(&["b1", "a1", "b2"]));
        let use_case = use_case(gateway);
        let mut session = seeded(&use_case);

        let result = use_case
            .converse_rounds(&mut session, 3, &NoProgress)
            .await;

        assert!(result.is_err());
        // Turn 1 complete, turn 2 stopped after B's reply
        assert_eq!(session.transcript(DebateSlot::A).len(), 4);
    }

    #[tokio::test]
    async fn test_progress_reports_b_then_a() {
        let gateway = Arc::new(ScriptedGateway::ok(&["b", "a"]));
        let use_case = use_case(gateway);
        let progress = RecordingProgress::default();
        let mut session = seeded(&use_case);

        use_case
            .converse_with_progress(&mut session, &progress)
            .await
            .unwrap();

        assert_eq!(
            progress.events(),
            vec![
                "start:Plato",
                "done:Plato:true",
                "start:Socrates",
                "done:Socrates:true"
            ]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_pacing_after_each_call() {
        let gateway = Arc::new(ScriptedGateway::ok(&["b", "a"]));
        let use_case = RunDebateUseCase::new(gateway)
            .with_params(DebateParams::default().with_pacing(Duration::from_secs(2)));
        let mut session = seeded(&use_case);

        let started = tokio::time::Instant::now();
        use_case.converse(&mut session).await.unwrap();

        assert!(started.elapsed() >= Duration::from_secs(4));
    }

    #[tokio::test]
    async fn test_custom_seed_message() {
        let gateway = Arc::new(ScriptedGateway::ok(&[]));
        let use_case = RunDebateUseCase::new(gateway)
            .with_params(DebateParams::unpaced().with_seed_message("Greetings"));
        let session = seeded(&use_case);

        assert_eq!(
            session.transcript(DebateSlot::B).messages(),
            &[Message::user("Greetings")]
        );
    }
}
