//! In-memory collection used by the store tests.

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::rc::Rc;

use async_trait::async_trait;

use super::{ApiError, ApiResult, TodoApi};
use crate::domain::{NewTodo, Todo, TodoPatch};

/// Which request kind a failure applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Call {
    List,
    Create,
    Update(u32),
    Delete(u32),
}

#[derive(Default)]
struct Inner {
    todos: Vec<Todo>,
    next_id: u32,
    failing: HashSet<Call>,
    /// Scheduler yields before answering, to reorder concurrent completions
    delays: HashMap<u32, usize>,
    calls: Vec<Call>,
}

#[derive(Clone, Default)]
pub struct MockTodoApi {
    inner: Rc<RefCell<Inner>>,
}

impl MockTodoApi {
    pub fn new(todos: Vec<Todo>) -> Self {
        let next_id = todos.iter().map(|t| t.id).max().unwrap_or(0) + 1;
        Self {
            inner: Rc::new(RefCell::new(Inner {
                todos,
                next_id,
                ..Default::default()
            })),
        }
    }

    pub fn fail(&self, call: Call) -> &Self {
        self.inner.borrow_mut().failing.insert(call);
        self
    }

    /// Make requests for `id` answer after `yields` scheduler turns
    pub fn delay(&self, id: u32, yields: usize) -> &Self {
        self.inner.borrow_mut().delays.insert(id, yields);
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.inner.borrow().calls.clone()
    }

    pub fn stored(&self) -> Vec<Todo> {
        self.inner.borrow().todos.clone()
    }

    async fn enter(&self, call: Call, id: Option<u32>) -> ApiResult<()> {
        let yields = {
            let mut inner = self.inner.borrow_mut();
            inner.calls.push(call);
            id.and_then(|id| inner.delays.get(&id).copied()).unwrap_or(0)
        };
        for _ in 0..yields {
            tokio::task::yield_now().await;
        }

        if self.inner.borrow().failing.contains(&call) {
            Err(ApiError::Status {
                status: 500,
                url: format!("{:?}", call),
            })
        } else {
            Ok(())
        }
    }
}

#[async_trait(?Send)]
impl TodoApi for MockTodoApi {
    async fn list(&self, user_id: u32) -> ApiResult<Vec<Todo>> {
        self.enter(Call::List, None).await?;
        Ok(self
            .inner
            .borrow()
            .todos
            .iter()
            .filter(|t| t.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn create(&self, todo: &NewTodo) -> ApiResult<Todo> {
        self.enter(Call::Create, None).await?;
        let mut inner = self.inner.borrow_mut();
        let created = Todo {
            id: inner.next_id,
            user_id: todo.user_id,
            title: todo.title.clone(),
            completed: todo.completed,
        };
        inner.next_id += 1;
        inner.todos.push(created.clone());
        Ok(created)
    }

    async fn update(&self, id: u32, patch: &TodoPatch) -> ApiResult<TodoPatch> {
        self.enter(Call::Update(id), Some(id)).await?;
        let mut inner = self.inner.borrow_mut();
        let todo = inner
            .todos
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| ApiError::Status {
                status: 404,
                url: format!("/todos/{}", id),
            })?;
        todo.apply(patch);
        Ok(TodoPatch::from(todo.clone()))
    }

    async fn delete(&self, id: u32) -> ApiResult<()> {
        self.enter(Call::Delete(id), Some(id)).await?;
        self.inner.borrow_mut().todos.retain(|t| t.id != id);
        Ok(())
    }
}
