//! User Status Component
//!
//! Header of the todo view: who is logged in, plus the logout button.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_app_context;

#[component]
pub fn UserStatus(username: String) -> impl IntoView {
    let ctx = use_app_context();

    let logout = move |_| {
        let session = ctx.session();
        spawn_local(async move {
            session.logout().await;
        });
    };

    view! {
        <div class="user-status">
            <span class="username-display">"Logged in as " <strong>{username}</strong></span>
            <button class="logout-btn" on:click=logout>"Log Out"</button>
        </div>
    }
}
