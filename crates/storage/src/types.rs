//! Storage types shared across modules

/// Result of a conditional insert-or-update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome {
    /// No row existed for the call id; a new one was inserted.
    Created,
    /// A row already existed; its mutable columns were overwritten.
    Updated,
}
