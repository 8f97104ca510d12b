//! Filter Derivation
//!
//! View-level selection of todos plus the counters shown around the list.

use serde::{Deserialize, Serialize};

use super::todo::Todo;

/// Which todos the list displays
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum FilterOption {
    #[default]
    All,
    Active,
    Completed,
}

impl FilterOption {
    /// All options in the order the footer shows them
    pub const ALL: [FilterOption; 3] = [FilterOption::All, FilterOption::Active, FilterOption::Completed];

    pub fn label(&self) -> &'static str {
        match self {
            FilterOption::All => "All",
            FilterOption::Active => "Active",
            FilterOption::Completed => "Completed",
        }
    }

    /// Anchor target for the footer link
    pub fn href(&self) -> &'static str {
        match self {
            FilterOption::All => "#/all",
            FilterOption::Active => "#/active",
            FilterOption::Completed => "#/completed",
        }
    }

    pub fn matches(&self, todo: &Todo) -> bool {
        match self {
            FilterOption::All => true,
            FilterOption::Active => !todo.completed,
            FilterOption::Completed => todo.completed,
        }
    }
}

/// Ordered subsequence of `todos` selected by `filter`
pub fn filtered_todos(todos: &[Todo], filter: FilterOption) -> Vec<Todo> {
    todos.iter().filter(|todo| filter.matches(todo)).cloned().collect()
}

/// Number of todos not yet completed ("N items left")
pub fn active_count(todos: &[Todo]) -> usize {
    todos.iter().filter(|todo| !todo.completed).count()
}

pub fn has_completed(todos: &[Todo]) -> bool {
    todos.iter().any(|todo| todo.completed)
}

/// Completion status of the todo with `id`, if it is in the list
pub fn status_of(todos: &[Todo], id: u32) -> Option<bool> {
    todos.iter().find(|todo| todo.id == id).map(|todo| todo.completed)
}

/// True when every todo is completed (vacuously true for an empty list)
pub fn all_completed(todos: &[Todo]) -> bool {
    todos.iter().all(|todo| todo.completed)
}
