//! Collection API
//!
//! Abstract access to the remote todo collection.
//! `HttpTodoApi` talks to the real endpoint; tests use an in-memory double.

use async_trait::async_trait;

use crate::domain::{NewTodo, Todo, TodoPatch};

mod error;
mod http;
#[cfg(test)]
pub(crate) mod mock;

pub use error::{ApiError, ApiResult};
pub use http::HttpTodoApi;

/// The four requests the store issues.
///
/// Futures are not `Send`: in the browser the transport lives on the single
/// UI thread.
#[async_trait(?Send)]
pub trait TodoApi {
    /// `GET /todos?userId={user_id}`
    async fn list(&self, user_id: u32) -> ApiResult<Vec<Todo>>;

    /// `POST /todos`
    async fn create(&self, todo: &NewTodo) -> ApiResult<Todo>;

    /// `PATCH /todos/{id}`, answering with the updated fields
    async fn update(&self, id: u32, patch: &TodoPatch) -> ApiResult<TodoPatch>;

    /// `DELETE /todos/{id}`
    async fn delete(&self, id: u32) -> ApiResult<()>;
}
