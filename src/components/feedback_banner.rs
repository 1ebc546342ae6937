//! Feedback Banner Component
//!
//! The single place errors and success notices are shown.

use leptos::prelude::*;

use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn FeedbackBanner() -> impl IntoView {
    let store = use_app_store();

    view! {
        {move || store.error().get().map(|message| view! {
            <div class="error-message" role="alert">
                <span>{message}</span>
                <button class="dismiss-btn" on:click=move |_| store.error().set(None)>"×"</button>
            </div>
        })}
        {move || store.notice().get().map(|message| view! {
            <div class="notice-message" role="status">
                <span>{message}</span>
                <button class="dismiss-btn" on:click=move |_| store.notice().set(None)>"×"</button>
            </div>
        })}
    }
}
