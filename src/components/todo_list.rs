//! Todo List Component
//!
//! Filtered todos followed by the placeholder of a pending create.

use leptos::prelude::*;
use todo_sync::domain::filtered_todos;

use super::TodoItem;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn TodoList() -> impl IntoView {
    let store = use_app_store();

    let visible = move || {
        let filter = store.filter().get();
        store.todos().with(|todos| filtered_todos(todos, filter))
    };

    view! {
        <section class="todoapp__main" data-cy="TodoList">
            // Rows rebuild when their title or status changes
            <For
                each=visible
                key=|todo| (todo.id, todo.title.clone(), todo.completed)
                children=move |todo| view! { <TodoItem todo=todo /> }
            />

            {move || store.temp_todo().get().map(|todo| view! {
                <TodoItem todo=todo placeholder=true />
            })}
        </section>
    }
}
