//! Application Context
//!
//! Command handle shared with every component via the Context API.

use std::future::Future;

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use todo_sync::domain::{BannerTicket, ERROR_DISMISS_DELAY};
use todo_sync::{HttpTodoApi, TodoPatch, TodoStore};

pub type SyncStore = TodoStore<HttpTodoApi>;

/// Commands against the sync store.
///
/// The store itself is single-threaded, so it sits in local storage and
/// the handle stays `Copy`.
#[derive(Clone, Copy)]
pub struct AppContext {
    todos: StoredValue<SyncStore, LocalStorage>,
}

impl AppContext {
    pub fn new(store: SyncStore) -> Self {
        Self {
            todos: StoredValue::new_local(store),
        }
    }

    pub fn store(&self) -> SyncStore {
        self.todos.get_value()
    }

    /// Run an async store operation on the UI task queue
    fn spawn<F, Fut>(&self, op: F)
    where
        F: FnOnce(SyncStore) -> Fut,
        Fut: Future<Output = ()> + 'static,
    {
        spawn_local(op(self.store()));
    }

    pub fn load(&self) {
        self.spawn(|store| async move { store.load().await });
    }

    pub fn create(&self, title: String) {
        self.spawn(move |store| async move { store.create(&title).await });
    }

    pub fn remove(&self, id: u32) {
        self.spawn(move |store| async move { store.remove(id).await });
    }

    pub fn update(&self, id: u32, patch: TodoPatch) {
        self.spawn(move |store| async move { store.update(id, patch).await });
    }

    pub fn clear_completed(&self) {
        self.spawn(|store| async move { store.clear_completed().await });
    }

    pub fn toggle_all(&self) {
        self.spawn(|store| async move { store.toggle_all().await });
    }

    pub fn set_new_title(&self, text: &str) {
        self.todos.with_value(|store| store.set_new_title(text));
    }

    pub fn start_editing(&self, id: u32) {
        self.todos.with_value(|store| store.start_editing(id));
    }

    pub fn stop_editing(&self) {
        self.todos.with_value(|store| store.stop_editing());
    }

    pub fn dismiss_error(&self) {
        self.todos.with_value(|store| store.dismiss_error());
    }

    /// Hide the banner after the dismiss delay unless a newer error replaced it
    pub fn schedule_dismiss(&self, ticket: BannerTicket) {
        let millis = ERROR_DISMISS_DELAY.as_millis() as u32;
        self.spawn(move |store| async move {
            store.expire_error_after(ticket, TimeoutFuture::new(millis)).await
        });
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
