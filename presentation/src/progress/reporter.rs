//! Progress reporting while a persona is "typing"

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use parley_application::ProgressNotifier;
use std::sync::Mutex;
use std::time::Duration;

/// Shows an animated "X is typing..." spinner for each model call
pub struct ProgressReporter {
    spinner: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            spinner: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    fn start(&self, message: String) {
        let pb = ProgressBar::new_spinner();
        pb.set_style(Self::spinner_style());
        pb.set_message(message);
        pb.enable_steady_tick(Duration::from_millis(100));

        if let Ok(mut slot) = self.spinner.lock() {
            if let Some(previous) = slot.replace(pb) {
                previous.finish_and_clear();
            }
        }
    }

    fn finish(&self, failure: Option<String>) {
        let Ok(mut slot) = self.spinner.lock() else {
            return;
        };
        if let Some(pb) = slot.take() {
            match failure {
                Some(message) => pb.abandon_with_message(message),
                None => pb.finish_and_clear(),
            }
        }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressNotifier for ProgressReporter {
    fn on_reply_start(&self, speaker: &str) {
        self.start(format!("{} is typing...", speaker.bold()));
    }

    fn on_reply_complete(&self, speaker: &str, success: bool) {
        self.finish((!success).then(|| format!("{} {} did not answer", "x".red(), speaker)));
    }

    fn on_derive_start(&self, agent_name: &str) {
        self.start(format!("Reading the document and becoming {}...", agent_name.bold()));
    }

    fn on_derive_complete(&self, agent_name: &str, success: bool) {
        self.finish((!success).then(|| format!("{} could not create {}", "x".red(), agent_name)));
    }
}

/// Simple text-based progress (no fancy UI)
pub struct SimpleProgress;

impl ProgressNotifier for SimpleProgress {
    fn on_reply_start(&self, speaker: &str) {
        println!("{} {} is typing...", "->".cyan(), speaker);
    }

    fn on_reply_complete(&self, speaker: &str, success: bool) {
        if !success {
            println!("  {} {} (failed)", "x".red(), speaker);
        }
    }

    fn on_derive_start(&self, agent_name: &str) {
        println!("{} Creating {}...", "->".cyan(), agent_name.bold());
    }

    fn on_derive_complete(&self, agent_name: &str, success: bool) {
        if success {
            println!("  {} {}", "v".green(), agent_name);
        } else {
            println!("  {} {} (failed)", "x".red(), agent_name);
        }
    }
}
