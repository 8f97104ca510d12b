//! Todo Synchronization Store
//!
//! Owns the todo list and mediates every request against the collection.
//! Each operation runs as: begin transition, await the request, one
//! reconciliation step. Transient marks (placeholder, loading id, pending
//! count) are held by an `InFlight` guard and released on every exit path,
//! including a dropped future.
//!
//! Single-threaded: state lives in a `RefCell` and no borrow is held across
//! an await point.

mod state;

use std::cell::RefCell;
use std::future::Future;
use std::rc::Rc;

use futures::future::join_all;

use crate::api::TodoApi;
use crate::domain::{
    all_completed, normalize_input, BannerTicket, ErrorMessage, NewTodo, Todo, TodoPatch,
};

pub use state::{Outcome, TodoState};
use state::Request;

type Listener = Rc<dyn Fn(&TodoState)>;

struct Inner<A> {
    api: A,
    user_id: u32,
    state: RefCell<TodoState>,
    listeners: RefCell<Vec<Listener>>,
}

/// Cheap to clone; clones share the same state
pub struct TodoStore<A> {
    inner: Rc<Inner<A>>,
}

impl<A> Clone for TodoStore<A> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

/// Marks held while a request is outstanding
struct InFlight<'a, A> {
    store: &'a TodoStore<A>,
    request: Option<Request>,
}

impl<A> InFlight<'_, A> {
    /// Reconcile and release in a single transition
    fn finish(mut self, outcome: Outcome) -> Option<BannerTicket> {
        let request = self.request.take();
        self.store.apply(|state| {
            let ticket = state.reconcile(outcome);
            if let Some(request) = request {
                state.release(request);
            }
            ticket
        })
    }
}

impl<A> Drop for InFlight<'_, A> {
    fn drop(&mut self) {
        if let Some(request) = self.request.take() {
            self.store.apply(|state| state.release(request));
        }
    }
}

impl<A> TodoStore<A> {
    pub fn new(api: A, user_id: u32) -> Self {
        Self::with_state(api, user_id, TodoState::default())
    }

    pub fn with_state(api: A, user_id: u32, state: TodoState) -> Self {
        Self {
            inner: Rc::new(Inner {
                api,
                user_id,
                state: RefCell::new(state),
                listeners: RefCell::new(Vec::new()),
            }),
        }
    }

    pub fn snapshot(&self) -> TodoState {
        self.inner.state.borrow().clone()
    }

    /// Call `listener` with a fresh snapshot after every transition
    pub fn subscribe(&self, listener: impl Fn(&TodoState) + 'static) {
        self.inner.listeners.borrow_mut().push(Rc::new(listener));
    }

    /// Run one transition, then notify listeners
    fn apply<R>(&self, transition: impl FnOnce(&mut TodoState) -> R) -> R {
        let result = transition(&mut self.inner.state.borrow_mut());
        self.notify();
        result
    }

    fn notify(&self) {
        // Listeners may subscribe or read the store while being called
        let listeners: Vec<Listener> = self.inner.listeners.borrow().clone();
        if listeners.is_empty() {
            return;
        }
        let snapshot = self.snapshot();
        for listener in listeners {
            listener(&snapshot);
        }
    }

    fn begin(&self, request: Request) -> InFlight<'_, A> {
        self.apply(|state| state.begin(request));
        InFlight {
            store: self,
            request: Some(request),
        }
    }

    // ========================
    // Local commands
    // ========================

    pub fn set_new_title(&self, text: &str) {
        let text = normalize_input(text);
        self.apply(|state| state.new_title = text);
    }

    pub fn start_editing(&self, id: u32) {
        self.apply(|state| state.editing_id = Some(id));
    }

    pub fn stop_editing(&self) {
        self.apply(|state| state.editing_id = None);
    }

    /// Show `message` in the banner, replacing anything already shown
    pub fn report_error(&self, message: ErrorMessage) -> BannerTicket {
        self.apply(|state| state.banner.show(message))
    }

    pub fn dismiss_error(&self) {
        self.apply(|state| state.banner.dismiss());
    }

    /// Auto-dismiss timer fired; ignored when a newer error took over
    pub fn expire_error(&self, ticket: BannerTicket) {
        let expired = self.inner.state.borrow_mut().banner.expire(ticket);
        if expired {
            self.notify();
        }
    }

    /// Wait for `delay`, then expire `ticket`
    pub async fn expire_error_after(&self, ticket: BannerTicket, delay: impl Future<Output = ()>) {
        delay.await;
        self.expire_error(ticket);
    }
}

impl<A: TodoApi> TodoStore<A> {
    // ========================
    // Remote operations
    // ========================

    /// Replace the list with the user's todos
    pub async fn load(&self) {
        log::debug!("loading todos for user {}", self.inner.user_id);
        let result = self.inner.api.list(self.inner.user_id).await;
        self.apply(|state| state.reconcile(Outcome::Loaded(result)));
    }

    /// Create a todo with the trimmed `title`, showing a placeholder meanwhile
    pub async fn create(&self, title: &str) {
        let title = title.trim();
        if title.is_empty() {
            self.report_error(ErrorMessage::EmptyTitle);
            return;
        }

        let placeholder = Todo::placeholder(title, self.inner.user_id);
        let body = NewTodo::from(&placeholder);
        self.apply(|state| state.temp_todo = Some(placeholder));
        let guard = self.begin(Request::Create);

        log::debug!("creating todo {:?}", body.title);
        let result = self.inner.api.create(&body).await;
        guard.finish(Outcome::Created(result));
    }

    pub async fn remove(&self, id: u32) {
        let guard = self.begin(Request::Item(id));
        log::debug!("deleting todo {}", id);
        let result = self.inner.api.delete(id).await;
        guard.finish(Outcome::Removed { id, result });
    }

    /// Send the changed fields and merge the server's answer
    pub async fn update(&self, id: u32, patch: TodoPatch) {
        let guard = self.begin(Request::Item(id));
        log::debug!("updating todo {}: {:?}", id, patch);
        let result = self.inner.api.update(id, &patch).await;
        guard.finish(Outcome::Updated { id, result });
    }

    /// Delete every completed todo concurrently.
    ///
    /// Failures are not aggregated: each one shows its own error and
    /// successful deletions stay applied.
    pub async fn clear_completed(&self) {
        let ids: Vec<u32> = self
            .inner
            .state
            .borrow()
            .todos
            .iter()
            .filter(|todo| todo.completed)
            .map(|todo| todo.id)
            .collect();
        if ids.is_empty() {
            return;
        }

        let _bulk = self.begin(Request::Bulk);
        join_all(ids.into_iter().map(|id| self.remove(id))).await;
    }

    /// Complete every active todo, or reopen all when all are completed
    pub async fn toggle_all(&self) {
        let (target, ids) = {
            let state = self.inner.state.borrow();
            let target = !all_completed(&state.todos);
            let ids: Vec<u32> = state
                .todos
                .iter()
                .filter(|todo| todo.completed != target)
                .map(|todo| todo.id)
                .collect();
            (target, ids)
        };
        if ids.is_empty() {
            return;
        }

        let _bulk = self.begin(Request::Bulk);
        join_all(ids.into_iter().map(|id| self.update(id, TodoPatch::completed(target)))).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::mock::{Call, MockTodoApi};
    use crate::domain::{status_of, USER_ID};
    use futures::FutureExt;
    use pretty_assertions::assert_eq;

    fn make_todo(id: u32, completed: bool) -> Todo {
        Todo {
            id,
            user_id: USER_ID,
            title: format!("Todo {}", id),
            completed,
        }
    }

    fn setup(todos: Vec<Todo>) -> (TodoStore<MockTodoApi>, MockTodoApi) {
        let api = MockTodoApi::new(todos.clone());
        let store = TodoStore::with_state(api.clone(), USER_ID, TodoState::with_todos(todos));
        (store, api)
    }

    /// Record every snapshot the store publishes
    fn record(store: &TodoStore<MockTodoApi>) -> Rc<RefCell<Vec<TodoState>>> {
        let snapshots = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&snapshots);
        store.subscribe(move |state| sink.borrow_mut().push(state.clone()));
        snapshots
    }

    fn ids(store: &TodoStore<MockTodoApi>) -> Vec<u32> {
        store.snapshot().todos.iter().map(|t| t.id).collect()
    }

    #[tokio::test]
    async fn test_load_replaces_list() {
        let api = MockTodoApi::new(vec![make_todo(1, false), make_todo(2, true)]);
        let store = TodoStore::new(api, USER_ID);

        store.load().await;

        assert_eq!(ids(&store), vec![1, 2]);
        assert_eq!(store.snapshot().error(), ErrorMessage::None);
    }

    #[tokio::test]
    async fn test_load_failure() {
        let api = MockTodoApi::new(vec![make_todo(1, false)]);
        api.fail(Call::List);
        let store = TodoStore::new(api, USER_ID);

        store.load().await;

        assert!(store.snapshot().todos.is_empty());
        assert_eq!(store.snapshot().error(), ErrorMessage::LoadFailed);
    }

    #[tokio::test]
    async fn test_create_blank_title_sends_nothing() {
        let (store, api) = setup(vec![]);

        store.create("").await;
        assert_eq!(store.snapshot().error(), ErrorMessage::EmptyTitle);

        store.dismiss_error();
        store.create("   \t ").await;
        assert_eq!(store.snapshot().error(), ErrorMessage::EmptyTitle);

        assert!(api.calls().is_empty());
        assert_eq!(store.snapshot().temp_todo, None);
        assert!(!store.snapshot().is_pending());
    }

    #[tokio::test]
    async fn test_create_success() {
        let (store, api) = setup(vec![make_todo(1, false)]);
        let snapshots = record(&store);
        store.set_new_title("  Buy milk ");

        store.create("  Buy milk ").await;

        let state = store.snapshot();
        assert_eq!(state.todos.len(), 2);
        assert_eq!(state.todos[1].id, 2);
        assert_eq!(state.todos[1].title, "Buy milk");
        assert_eq!(state.new_title, "");
        assert_eq!(state.temp_todo, None);
        assert!(!state.is_pending());
        assert_eq!(api.stored().len(), 2);

        // Placeholder was shown while the request was in flight
        let saw_placeholder = snapshots.borrow().iter().any(|s| {
            s.is_pending()
                && s.temp_todo.as_ref().map(|t| (t.id, t.title.as_str())) == Some((0, "Buy milk"))
        });
        assert!(saw_placeholder);
    }

    #[tokio::test]
    async fn test_create_failure() {
        let (store, api) = setup(vec![make_todo(1, false)]);
        api.fail(Call::Create);
        store.set_new_title("Walk");

        store.create("Walk").await;

        let state = store.snapshot();
        assert_eq!(ids(&store), vec![1]);
        assert_eq!(state.error(), ErrorMessage::AddFailed);
        assert_eq!(state.temp_todo, None);
        assert!(!state.is_pending());
        // Input is kept so the user can retry
        assert_eq!(state.new_title, "Walk");
    }

    #[tokio::test]
    async fn test_remove_marks_loading_until_done() {
        let (store, _api) = setup(vec![make_todo(1, false), make_todo(2, false)]);
        let snapshots = record(&store);

        store.remove(1).await;

        assert_eq!(ids(&store), vec![2]);
        assert!(snapshots.borrow().iter().any(|s| s.is_loading(1) && !s.is_loading(2)));
        let state = store.snapshot();
        assert!(!state.is_loading(1));
        assert!(!state.is_pending());
    }

    #[tokio::test]
    async fn test_remove_failure_keeps_todo() {
        let (store, api) = setup(vec![make_todo(1, false)]);
        api.fail(Call::Delete(1));

        store.remove(1).await;

        assert_eq!(ids(&store), vec![1]);
        assert_eq!(store.snapshot().error(), ErrorMessage::DeleteFailed);
        assert!(!store.snapshot().is_loading(1));
    }

    #[tokio::test]
    async fn test_update_merges_and_stops_editing() {
        let (store, _api) = setup(vec![make_todo(1, false)]);
        store.start_editing(1);

        store.update(1, TodoPatch::title("Renamed")).await;

        let state = store.snapshot();
        assert_eq!(state.todos[0].title, "Renamed");
        assert!(!state.todos[0].completed);
        assert_eq!(state.editing_id, None);
        assert!(!state.is_loading(1));
    }

    #[tokio::test]
    async fn test_update_failure() {
        let (store, api) = setup(vec![make_todo(1, false)]);
        api.fail(Call::Update(1));
        store.start_editing(1);

        store.update(1, TodoPatch::completed(true)).await;

        let state = store.snapshot();
        assert!(!state.todos[0].completed);
        assert_eq!(state.error(), ErrorMessage::UpdateFailed);
        assert!(state.is_editing(1));
        assert!(!state.is_pending());
    }

    #[tokio::test]
    async fn test_clear_completed_any_order() {
        for (slow, fast) in [(1, 3), (3, 1)] {
            let (store, api) = setup(vec![make_todo(1, true), make_todo(2, false), make_todo(3, true)]);
            api.delay(slow, 3).delay(fast, 0);

            store.clear_completed().await;

            assert_eq!(ids(&store), vec![2]);
            assert_eq!(api.calls(), vec![Call::Delete(1), Call::Delete(3)]);
            assert!(!store.snapshot().is_pending());
        }
    }

    #[tokio::test]
    async fn test_clear_completed_keeps_partial_success() {
        let (store, api) = setup(vec![make_todo(1, true), make_todo(2, false), make_todo(3, true)]);
        api.fail(Call::Delete(3));

        store.clear_completed().await;

        assert_eq!(ids(&store), vec![2, 3]);
        assert_eq!(store.snapshot().error(), ErrorMessage::DeleteFailed);
    }

    #[tokio::test]
    async fn test_bulk_stays_pending_until_all_settle() {
        let (store, api) = setup(vec![make_todo(1, true), make_todo(2, true)]);
        api.delay(2, 4);
        let snapshots = record(&store);

        store.clear_completed().await;

        let snapshots = snapshots.borrow();
        let (last, rest) = snapshots.split_last().unwrap();
        assert!(rest.iter().all(|s| s.is_pending()));
        assert!(!last.is_pending());
        assert!(last.todos.is_empty());
    }

    #[tokio::test]
    async fn test_toggle_all_completes_active_only() {
        let (store, api) = setup(vec![make_todo(1, true), make_todo(2, false), make_todo(3, false)]);

        store.toggle_all().await;

        assert!(store.snapshot().todos.iter().all(|t| t.completed));
        assert_eq!(api.calls(), vec![Call::Update(2), Call::Update(3)]);
    }

    #[tokio::test]
    async fn test_toggle_all_keeps_partial_success() {
        let (store, api) = setup(vec![make_todo(1, false), make_todo(2, false), make_todo(3, false)]);
        api.fail(Call::Update(3));

        store.toggle_all().await;

        let state = store.snapshot();
        assert_eq!(status_of(&state.todos, 1), Some(true));
        assert_eq!(status_of(&state.todos, 2), Some(true));
        assert_eq!(status_of(&state.todos, 3), Some(false));
        assert_eq!(state.error(), ErrorMessage::UpdateFailed);
        assert!(!state.is_pending());
        assert_eq!(state.loading_ids().count(), 0);
    }

    #[tokio::test]
    async fn test_failed_toggle_keeps_status() {
        let (store, api) = setup(vec![make_todo(1, false)]);
        api.fail(Call::Update(1));

        store.update(1, TodoPatch::completed(true)).await;

        // Status stays as the server has it, so the next toggle asks for `true` again
        let state = store.snapshot();
        assert_eq!(status_of(&state.todos, 1), Some(false));
        assert_eq!(state.error(), ErrorMessage::UpdateFailed);
        assert!(!state.is_loading(1));
    }

    #[tokio::test]
    async fn test_toggle_all_reopens_when_all_completed() {
        let (store, api) = setup(vec![make_todo(1, true), make_todo(2, true)]);
        api.delay(1, 2);

        store.toggle_all().await;

        assert!(store.snapshot().todos.iter().all(|t| !t.completed));
        assert_eq!(api.calls(), vec![Call::Update(1), Call::Update(2)]);
        assert_eq!(store.snapshot().loading_ids().count(), 0);
    }

    #[tokio::test]
    async fn test_dropped_request_releases_marks() {
        let (store, api) = setup(vec![make_todo(1, false)]);
        api.delay(1, 5);

        // Poll once, then drop the unfinished future
        assert!(store.remove(1).now_or_never().is_none());

        let state = store.snapshot();
        assert!(!state.is_loading(1));
        assert!(!state.is_pending());
        assert_eq!(ids(&store), vec![1]);
        assert_eq!(api.calls(), vec![Call::Delete(1)]);
    }

    #[tokio::test]
    async fn test_error_timer_respects_newer_errors() {
        let (store, _api) = setup(vec![]);

        let first = store.report_error(ErrorMessage::AddFailed);
        let second = store.report_error(ErrorMessage::UpdateFailed);

        store.expire_error_after(first, std::future::ready(())).await;
        assert_eq!(store.snapshot().error(), ErrorMessage::UpdateFailed);

        store.expire_error_after(second, std::future::ready(())).await;
        assert_eq!(store.snapshot().error(), ErrorMessage::None);
    }

    #[test]
    fn test_set_new_title_strips_leading_whitespace() {
        let (store, _api) = setup(vec![]);
        store.set_new_title("   groceries ");
        assert_eq!(store.snapshot().new_title, "groceries ");
    }
}
