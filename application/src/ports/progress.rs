//! Progress notification port
//!
//! Lets the shell show who is "typing" while a model call is in flight.

/// Callback for progress updates around model calls
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (spinner, plain text, nothing).
pub trait ProgressNotifier: Send + Sync {
    /// Called right before a persona's reply is requested
    fn on_reply_start(&self, speaker: &str);

    /// Called when the reply arrived or the call failed
    fn on_reply_complete(&self, speaker: &str, success: bool);

    /// Called before a persona is derived from a document
    fn on_derive_start(&self, _agent_name: &str) {}

    /// Called when persona derivation finished
    fn on_derive_complete(&self, _agent_name: &str, _success: bool) {}
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl ProgressNotifier for NoProgress {
    fn on_reply_start(&self, _speaker: &str) {}
    fn on_reply_complete(&self, _speaker: &str, _success: bool) {}
}
