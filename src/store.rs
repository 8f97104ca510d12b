//! View State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Mirrors the
//! snapshots published by the sync store; only fields that changed notify.

use leptos::prelude::*;
use reactive_stores::Store;
use todo_sync::domain::BannerState;
use todo_sync::{FilterOption, Todo, TodoState};

/// Everything the components render from
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Confirmed todos
    pub todos: Vec<Todo>,
    /// Placeholder while a create is in flight
    pub temp_todo: Option<Todo>,
    /// Ids awaiting a server answer
    pub loading_ids: Vec<u32>,
    /// Any request in flight
    pub pending: bool,
    pub banner: BannerState,
    /// Todo being edited inline
    pub editing_id: Option<u32>,
    /// Header input text
    pub new_title: String,
    /// Selected footer filter (view only)
    pub filter: FilterOption,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

/// Copy a sync snapshot into the store
pub fn store_sync(store: &AppStore, state: &TodoState) {
    if store.todos().get_untracked() != state.todos {
        *store.todos().write() = state.todos.clone();
    }
    if store.temp_todo().get_untracked() != state.temp_todo {
        *store.temp_todo().write() = state.temp_todo.clone();
    }

    let loading_ids: Vec<u32> = state.loading_ids().collect();
    if store.loading_ids().get_untracked() != loading_ids {
        *store.loading_ids().write() = loading_ids;
    }

    if store.pending().get_untracked() != state.is_pending() {
        *store.pending().write() = state.is_pending();
    }
    if store.banner().get_untracked() != state.banner.state() {
        *store.banner().write() = state.banner.state();
    }
    if store.editing_id().get_untracked() != state.editing_id {
        *store.editing_id().write() = state.editing_id;
    }
    if store.new_title().get_untracked() != state.new_title {
        *store.new_title().write() = state.new_title.clone();
    }
}
