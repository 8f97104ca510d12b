//! Todo Sync Frontend App
//!
//! Wires the sync store to the reactive view store and lays out the page.

use leptos::prelude::*;
use reactive_stores::Store;
use todo_sync::{ApiConfig, HttpTodoApi, TodoStore};

use crate::components::{ErrorNotification, Footer, Header, TodoList};
use crate::context::AppContext;
use crate::store::{store_sync, AppState, AppStateStoreFields};

/// Collection settings, overridable at build time
fn api_config() -> ApiConfig {
    ApiConfig::with_overrides(option_env!("TODO_API_URL"), option_env!("TODO_USER_ID"))
}

#[component]
pub fn App() -> impl IntoView {
    let config = api_config();
    log::info!("Using collection at {} for user {}", config.base_url, config.user_id);

    // View state, fed by every sync transition
    let app_store = Store::new(AppState::default());
    provide_context(app_store);

    let todos = TodoStore::new(HttpTodoApi::new(&config), config.user_id);
    todos.subscribe(move |state| store_sync(&app_store, state));

    let ctx = AppContext::new(todos);
    provide_context(ctx);

    // Initial load
    ctx.load();

    view! {
        <div class="todoapp">
            <h1 class="todoapp__title">"todos"</h1>

            <div class="todoapp__content">
                <Header />

                <TodoList />

                <Show when=move || app_store.todos().with(|todos| !todos.is_empty())>
                    <Footer />
                </Show>
            </div>

            <ErrorNotification />
        </div>
    }
}
