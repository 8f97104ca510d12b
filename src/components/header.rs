//! Header Component
//!
//! Toggle-all button and the new todo form.

use leptos::html;
use leptos::prelude::*;
use todo_sync::domain::all_completed;

use crate::context::use_app_context;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn Header() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let input_ref = NodeRef::<html::Input>::new();

    // Give focus back once the server has answered
    Effect::new(move |_| {
        if !store.pending().get() {
            if let Some(input) = input_ref.get() {
                if input.focus().is_err() {
                    log::debug!("could not focus the new todo field");
                }
            }
        }
    });

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        ctx.create(store.new_title().get_untracked());
    };

    let toggle_class = move || {
        if store.todos().with(|todos| all_completed(todos)) {
            "todoapp__toggle-all active"
        } else {
            "todoapp__toggle-all"
        }
    };

    view! {
        <header class="todoapp__header">
            <Show when=move || store.todos().with(|todos| !todos.is_empty())>
                <button
                    type="button"
                    class=toggle_class
                    data-cy="ToggleAllButton"
                    on:click=move |_| ctx.toggle_all()
                />
            </Show>

            <form on:submit=on_submit>
                <input
                    node_ref=input_ref
                    disabled=move || store.pending().get()
                    data-cy="NewTodoField"
                    type="text"
                    class="todoapp__new-todo"
                    placeholder="What needs to be done?"
                    prop:value=move || store.new_title().get()
                    on:input=move |ev| ctx.set_new_title(&event_target_value(&ev))
                />
            </form>
        </header>
    }
}
