//! Error Notification Component
//!
//! Banner for the current error with a hide button. Each new error
//! schedules its own auto-dismiss; stale timers are ignored by the store.

use leptos::prelude::*;
use todo_sync::domain::BannerState;

use crate::context::use_app_context;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn ErrorNotification() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    Effect::new(move |_| {
        if let BannerState::Showing { ticket, .. } = store.banner().get() {
            ctx.schedule_dismiss(ticket);
        }
    });

    let message = move || match store.banner().get() {
        BannerState::Showing { message, .. } => message.as_str(),
        BannerState::Idle => "",
    };

    let banner_class = move || match store.banner().get() {
        BannerState::Showing { .. } => "notification is-danger is-light has-text-weight-normal",
        BannerState::Idle => "notification is-danger is-light has-text-weight-normal hidden",
    };

    view! {
        <div data-cy="ErrorNotification" class=banner_class>
            <button
                data-cy="HideErrorButton"
                type="button"
                class="delete"
                on:click=move |_| ctx.dismiss_error()
            />
            {message}
        </div>
    }
}
