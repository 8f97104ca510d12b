//! Todo Entity
//!
//! A single task record as stored by the remote collection.

use serde::{Deserialize, Serialize};

/// Id carried by a todo that the server has not confirmed yet
pub const PLACEHOLDER_ID: u32 = 0;

/// Owner of every todo this client reads and writes
pub const USER_ID: u32 = 1584;

/// A todo record (matches the collection's JSON shape)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    /// Server-assigned id, `PLACEHOLDER_ID` while unsaved
    pub id: u32,
    pub user_id: u32,
    pub title: String,
    pub completed: bool,
}

impl Todo {
    /// Optimistic local copy shown while the create request is in flight
    pub fn placeholder(title: impl Into<String>, user_id: u32) -> Self {
        Self {
            id: PLACEHOLDER_ID,
            user_id,
            title: title.into(),
            completed: false,
        }
    }

    /// Merge the fields present in `patch`, leaving the rest untouched
    pub fn apply(&mut self, patch: &TodoPatch) {
        if let Some(title) = &patch.title {
            self.title = title.clone();
        }
        if let Some(completed) = patch.completed {
            self.completed = completed;
        }
        if let Some(user_id) = patch.user_id {
            self.user_id = user_id;
        }
    }
}

/// Body of a create request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTodo {
    pub title: String,
    pub completed: bool,
    pub user_id: u32,
}

impl From<&Todo> for NewTodo {
    fn from(todo: &Todo) -> Self {
        Self {
            title: todo.title.clone(),
            completed: todo.completed,
            user_id: todo.user_id,
        }
    }
}

/// Partial todo fields.
///
/// Sent as the body of a PATCH request and also used to read its response,
/// so a server that echoes only the changed fields still merges cleanly.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<u32>,
}

impl TodoPatch {
    pub fn title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Default::default()
        }
    }

    pub fn completed(completed: bool) -> Self {
        Self {
            completed: Some(completed),
            ..Default::default()
        }
    }
}

impl From<Todo> for TodoPatch {
    fn from(todo: Todo) -> Self {
        Self {
            title: Some(todo.title),
            completed: Some(todo.completed),
            user_id: Some(todo.user_id),
        }
    }
}
