//! Todo Sync
//!
//! Keeps an optimistic, in-memory todo list in step with a remote collection:
//! - domain: records, filters, the error banner, inline edit rules
//! - api: the collection endpoint (HTTP) behind a trait
//! - store: operations, in-flight marks and reconciliation

pub mod domain;
pub mod api;
pub mod store;
pub mod config;

pub use api::{ApiError, ApiResult, HttpTodoApi, TodoApi};
pub use config::ApiConfig;
pub use domain::{ErrorMessage, FilterOption, Todo, TodoPatch};
pub use store::{TodoState, TodoStore};
