//! Inline Title Editing
//!
//! Decides what a finished inline edit means for the todo.

/// Result of submitting (or blurring) the title editor
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOutcome {
    /// Draft was emptied, the todo goes away
    Delete,
    /// Nothing changed, just leave edit mode
    Cancel,
    /// Save the trimmed draft as the new title
    Rename(String),
}

/// Resolve a submitted draft against the todo's current title
pub fn resolve_edit(current_title: &str, draft: &str) -> EditOutcome {
    let trimmed = draft.trim();
    if trimmed.is_empty() {
        EditOutcome::Delete
    } else if trimmed == current_title {
        EditOutcome::Cancel
    } else {
        EditOutcome::Rename(trimmed.to_string())
    }
}

/// Normalize text typed into a title field (leading whitespace is dropped)
pub fn normalize_input(value: &str) -> String {
    value.trim_start().to_string()
}
