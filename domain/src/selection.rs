//! Selection change detection.
//!
//! Sessions call [`SelectionChange::detect`] from their explicit selection
//! handlers. A `Replaced` outcome always means a full reset of the owning
//! session; nothing from the previous conversation is carried over.

/// Outcome of comparing the previous selection with a new one
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionChange {
    /// Same agent re-selected; session state is kept as is
    Unchanged,
    /// A different agent (or the first one) was selected
    Replaced { previous: Option<String> },
}

impl SelectionChange {
    pub fn detect(previous: Option<&str>, next: &str) -> Self {
        match previous {
            Some(prev) if prev == next => SelectionChange::Unchanged,
            _ => SelectionChange::Replaced {
                previous: previous.map(str::to_string),
            },
        }
    }

    pub fn is_replaced(&self) -> bool {
        matches!(self, SelectionChange::Replaced { .. })
    }
}
