//! Todo Item Component
//!
//! One row: status checkbox, title (double-click to edit), delete button
//! and a loader overlay while the todo has a request in flight.

use leptos::html;
use leptos::prelude::*;
use todo_sync::domain::{normalize_input, resolve_edit, status_of, EditOutcome};
use todo_sync::{Todo, TodoPatch};

use crate::context::use_app_context;
use crate::store::{use_app_store, AppStateStoreFields};

/// A single todo row.
///
/// A `placeholder` row is the unsaved todo of a pending create: always
/// loading and not interactive.
#[component]
pub fn TodoItem(
    todo: Todo,
    #[prop(optional)] placeholder: bool,
) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let id = todo.id;
    let completed = todo.completed;
    let title = StoredValue::new(todo.title.clone());
    let (draft, set_draft) = signal(todo.title);
    let input_ref = NodeRef::<html::Input>::new();

    // The checkbox follows the list, not the click
    let is_completed = move || store.todos().with(|todos| status_of(todos, id)).unwrap_or(completed);
    let is_completed_untracked =
        move || store.todos().with_untracked(|todos| status_of(todos, id)).unwrap_or(completed);

    let is_loading = move || placeholder || store.loading_ids().with(|ids| ids.contains(&id));
    let is_edited = move || !placeholder && store.editing_id().get() == Some(id);

    Effect::new(move |_| {
        if is_edited() {
            if let Some(input) = input_ref.get() {
                if input.focus().is_err() {
                    log::debug!("could not focus the title editor of todo {}", id);
                }
            }
        }
    });

    // Submit and blur both land here; ignore repeats while a request runs
    let finish_edit = move || {
        let busy = store.loading_ids().with_untracked(|ids| ids.contains(&id));
        if busy || store.editing_id().get_untracked() != Some(id) {
            return;
        }
        match resolve_edit(&title.get_value(), &draft.get_untracked()) {
            EditOutcome::Delete => ctx.remove(id),
            EditOutcome::Cancel => ctx.stop_editing(),
            EditOutcome::Rename(new_title) => ctx.update(id, TodoPatch::title(new_title)),
        }
    };

    let cancel_edit = move |ev: web_sys::KeyboardEvent| {
        if ev.key() == "Escape" {
            set_draft.set(title.get_value());
            ctx.stop_editing();
        }
    };

    view! {
        <div data-cy="Todo" class=if completed { "todo completed" } else { "todo" }>
            <label class="todo__status-label">
                <input
                    data-cy="TodoStatus"
                    type="checkbox"
                    class="todo__status"
                    prop:checked=is_completed
                    on:change=move |ev| {
                        let current = is_completed_untracked();
                        event_target::<web_sys::HtmlInputElement>(&ev).set_checked(current);
                        if !placeholder {
                            ctx.update(id, TodoPatch::completed(!current));
                        }
                    }
                />
            </label>

            <Show
                when=is_edited
                fallback=move || view! {
                    <span
                        data-cy="TodoTitle"
                        class="todo__title"
                        on:dblclick=move |_| {
                            if !placeholder {
                                ctx.start_editing(id);
                            }
                        }
                    >
                        {title.get_value()}
                    </span>

                    <button
                        type="button"
                        class="todo__remove"
                        data-cy="TodoDelete"
                        on:click=move |_| {
                            if !placeholder {
                                ctx.remove(id);
                            }
                        }
                    >
                        "×"
                    </button>
                }
            >
                <form
                    on:submit=move |ev: web_sys::SubmitEvent| {
                        ev.prevent_default();
                        finish_edit();
                    }
                    on:focusout=move |_| finish_edit()
                >
                    <input
                        data-cy="TodoTitleField"
                        type="text"
                        class="todo__title-field"
                        placeholder="Empty todo will be deleted"
                        node_ref=input_ref
                        prop:value=move || draft.get()
                        on:input=move |ev| set_draft.set(normalize_input(&event_target_value(&ev)))
                        on:keyup=cancel_edit
                    />
                </form>
            </Show>

            <div
                data-cy="TodoLoader"
                class=move || if is_loading() { "modal overlay is-active" } else { "modal overlay" }
            >
                <div class="modal-background has-background-white-ter" />
                <div class="loader" />
            </div>
        </div>
    }
}
