//! Footer Component
//!
//! Items-left counter, filter links and "Clear completed".

use leptos::prelude::*;
use todo_sync::domain::{active_count, has_completed};
use todo_sync::FilterOption;

use crate::context::use_app_context;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn Footer() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    view! {
        <footer class="todoapp__footer" data-cy="Footer">
            <span class="todo-count" data-cy="TodosCounter">
                {move || format!("{} items left", store.todos().with(|todos| active_count(todos)))}
            </span>

            <nav class="filter" data-cy="Filter">
                {FilterOption::ALL.iter().map(|&option| {
                    let is_selected = move || store.filter().get() == option;
                    view! {
                        <a
                            href=option.href()
                            class=move || if is_selected() { "filter__link selected" } else { "filter__link" }
                            data-cy=format!("FilterLink{}", option.label())
                            on:click=move |_| *store.filter().write() = option
                        >
                            {option.label()}
                        </a>
                    }
                }).collect_view()}
            </nav>

            <button
                type="button"
                class="todoapp__clear-completed"
                data-cy="ClearCompletedButton"
                disabled=move || !store.todos().with(|todos| has_completed(todos))
                on:click=move |_| ctx.clear_completed()
            >
                "Clear completed"
            </button>
        </footer>
    }
}
