//! Synchronized State
//!
//! The single source of truth behind the view. Every change goes through a
//! transition method here; `reconcile` is the one place a server answer is
//! turned into a list mutation or an error.

use std::collections::BTreeMap;

use crate::api::ApiResult;
use crate::domain::{BannerTicket, ErrorBanner, ErrorMessage, Todo, TodoPatch};

/// Server answer for one operation
#[derive(Debug)]
pub enum Outcome {
    Loaded(ApiResult<Vec<Todo>>),
    Created(ApiResult<Todo>),
    Removed { id: u32, result: ApiResult<()> },
    Updated { id: u32, result: ApiResult<TodoPatch> },
}

/// What an in-flight request holds until it settles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Request {
    /// Create, owns the placeholder
    Create,
    /// Per-todo request, owns a loading mark for the id
    Item(u32),
    /// Bulk operation waiting on its per-todo requests
    Bulk,
}

/// Read-only snapshot handed to the view
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoState {
    /// Confirmed todos in server order
    pub todos: Vec<Todo>,
    /// Optimistic todo shown while a create is in flight
    pub temp_todo: Option<Todo>,
    /// Todo whose title is being edited inline
    pub editing_id: Option<u32>,
    /// Header input text
    pub new_title: String,
    pub banner: ErrorBanner,
    /// Outstanding requests per todo id
    loading: BTreeMap<u32, usize>,
    /// Outstanding requests of any kind
    pending: usize,
}

impl TodoState {
    pub fn with_todos(todos: Vec<Todo>) -> Self {
        Self {
            todos,
            ..Default::default()
        }
    }

    pub fn is_loading(&self, id: u32) -> bool {
        self.loading.contains_key(&id)
    }

    /// Ids currently awaiting a server answer
    pub fn loading_ids(&self) -> impl Iterator<Item = u32> + '_ {
        self.loading.keys().copied()
    }

    /// Any request in flight (disables the header input)
    pub fn is_pending(&self) -> bool {
        self.pending > 0
    }

    pub fn error(&self) -> ErrorMessage {
        self.banner.message()
    }

    pub fn is_editing(&self, id: u32) -> bool {
        self.editing_id == Some(id)
    }

    // ========================
    // Request bookkeeping
    // ========================

    pub(crate) fn begin(&mut self, request: Request) {
        self.pending += 1;
        if let Request::Item(id) = request {
            *self.loading.entry(id).or_insert(0) += 1;
        }
    }

    pub(crate) fn release(&mut self, request: Request) {
        self.pending = self.pending.saturating_sub(1);
        match request {
            Request::Create => self.temp_todo = None,
            Request::Item(id) => {
                if let Some(count) = self.loading.get_mut(&id) {
                    *count -= 1;
                    if *count == 0 {
                        self.loading.remove(&id);
                    }
                }
            }
            Request::Bulk => {}
        }
    }

    // ========================
    // Reconciliation
    // ========================

    /// Apply a server answer. Exactly one of (list mutation, error) happens;
    /// the ticket is returned when an error was shown.
    pub fn reconcile(&mut self, outcome: Outcome) -> Option<BannerTicket> {
        match outcome {
            Outcome::Loaded(Ok(todos)) => {
                log::info!("loaded {} todos", todos.len());
                self.todos = todos;
                None
            }
            Outcome::Loaded(Err(e)) => {
                log::warn!("loading todos failed: {}", e);
                Some(self.banner.show(ErrorMessage::LoadFailed))
            }
            Outcome::Created(Ok(todo)) => {
                self.todos.push(todo);
                self.new_title.clear();
                None
            }
            Outcome::Created(Err(e)) => {
                log::warn!("creating todo failed: {}", e);
                Some(self.banner.show(ErrorMessage::AddFailed))
            }
            Outcome::Removed { id, result: Ok(()) } => {
                self.todos.retain(|todo| todo.id != id);
                if self.editing_id == Some(id) {
                    self.editing_id = None;
                }
                None
            }
            Outcome::Removed { id, result: Err(e) } => {
                log::warn!("deleting todo {} failed: {}", id, e);
                Some(self.banner.show(ErrorMessage::DeleteFailed))
            }
            Outcome::Updated { id, result: Ok(patch) } => {
                if let Some(todo) = self.todos.iter_mut().find(|todo| todo.id == id) {
                    todo.apply(&patch);
                }
                self.editing_id = None;
                None
            }
            Outcome::Updated { id, result: Err(e) } => {
                log::warn!("updating todo {} failed: {}", id, e);
                Some(self.banner.show(ErrorMessage::UpdateFailed))
            }
        }
    }
}
