//! Debate pacing parameters.

use parley_domain::DEFAULT_SEED_MESSAGE;
use std::time::Duration;

/// Static parameters for [`RunDebateUseCase`](crate::use_cases::run_debate::RunDebateUseCase).
///
/// Pacing only throttles how fast replies appear; it has no effect on the
/// transcripts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DebateParams {
    /// Pause after each of the two model calls in a turn-advance
    pub pacing: Duration,
    /// Synthetic opening line injected when a debate starts
    pub seed_message: String,
}

impl Default for DebateParams {
    fn default() -> Self {
        Self {
            pacing: Duration::from_secs(2),
            seed_message: DEFAULT_SEED_MESSAGE.to_string(),
        }
    }
}

impl DebateParams {
    pub fn with_pacing(mut self, pacing: Duration) -> Self {
        self.pacing = pacing;
        self
    }

    pub fn with_pacing_ms(self, millis: u64) -> Self {
        self.with_pacing(Duration::from_millis(millis))
    }

    pub fn with_seed_message(mut self, seed: impl Into<String>) -> Self {
        self.seed_message = seed.into();
        self
    }

    /// No pauses between calls (tests, scripted runs)
    pub fn unpaced() -> Self {
        Self::default().with_pacing(Duration::ZERO)
    }
}
