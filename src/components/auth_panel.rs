//! Auth Panel Component
//!
//! Register and login forms, shown while logged out.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_app_context;
use crate::store::{use_app_store, AppStateStoreFields, CredentialsFormStoreFields};

#[component]
pub fn AuthPanel() -> impl IntoView {
    view! {
        <div class="auth-container">
            <RegisterForm />
            <LoginForm />
        </div>
    }
}

/// New account form. Keeps its values when the server rejects them.
#[component]
fn RegisterForm() -> impl IntoView {
    let ctx = use_app_context();
    let form = use_app_store().register_form();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let username = form.username().get_untracked();
        let password = form.password().get_untracked();
        let session = ctx.session();
        spawn_local(async move {
            let _ = session.register(&username, &password).await;
        });
    };

    view! {
        <form class="auth-form" id="register-form" on:submit=on_submit>
            <h2>"Register"</h2>
            <input
                type="text"
                placeholder="Username"
                required
                prop:value=move || form.username().get()
                on:input=move |ev| form.username().set(event_target_value(&ev))
            />
            <input
                type="password"
                placeholder="Password"
                required
                prop:value=move || form.password().get()
                on:input=move |ev| form.password().set(event_target_value(&ev))
            />
            <button type="submit">"Register"</button>
        </form>
    }
}

#[component]
fn LoginForm() -> impl IntoView {
    let ctx = use_app_context();
    let form = use_app_store().login_form();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let username = form.username().get_untracked();
        let password = form.password().get_untracked();
        let session = ctx.session();
        spawn_local(async move {
            let _ = session.login(&username, &password).await;
        });
    };

    view! {
        <form class="auth-form" id="login-form" on:submit=on_submit>
            <h2>"Log In"</h2>
            <input
                type="text"
                placeholder="Username"
                required
                prop:value=move || form.username().get()
                on:input=move |ev| form.username().set(event_target_value(&ev))
            />
            <input
                type="password"
                placeholder="Password"
                required
                prop:value=move || form.password().get()
                on:input=move |ev| form.password().set(event_target_value(&ev))
            />
            <button type="submit">"Log In"</button>
        </form>
    }
}
