//! Todo App
//!
//! Root component: builds the store and controllers, checks the session once
//! on mount, and switches between the auth view and the todo view.

use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::api::{HttpApi, TodoApi};
use crate::components::{AuthPanel, FeedbackBanner, NewTodoForm, TodoList, UserStatus};
use crate::config::ClientConfig;
use crate::context::AppContext;
use crate::session::SessionController;
use crate::store::{AppState, AppStateStoreFields, AuthStatus};
use crate::todo_sync::TodoListSync;

#[component]
pub fn App(config: ClientConfig) -> impl IntoView {
    // State
    let store = Store::new(AppState::default());
    provide_context(store);

    // Controllers
    let api: Rc<dyn TodoApi> = Rc::new(HttpApi::new(&config));
    let todos = TodoListSync::new(api.clone(), store);
    let session = SessionController::new(api, store, todos.clone());
    let ctx = AppContext::new(session, todos);
    provide_context(ctx);

    // Resolve the session once on mount
    Effect::new(move |_| {
        let session = ctx.session();
        spawn_local(async move {
            let _ = session.check_status().await;
        });
    });

    on_cleanup(|| log::debug!("[APP] unmounted"));

    // Only a change of auth status swaps the view
    let auth = Memo::new(move |_| store.auth().get());

    view! {
        <div class="app-layout">
            <h1>"To-Do List"</h1>

            <FeedbackBanner />

            {move || match auth.get() {
                AuthStatus::Unknown => view! {
                    <p class="status-text">"Checking session..."</p>
                }.into_any(),
                AuthStatus::LoggedOut => view! { <AuthPanel /> }.into_any(),
                AuthStatus::LoggedIn { username } => view! {
                    <main class="todo-container">
                        <UserStatus username=username />
                        <NewTodoForm />
                        <TodoList />
                        <p class="item-count">{move || format!("{} items", store.todos().with(|t| t.len()))}</p>
                    </main>
                }.into_any(),
            }}
        </div>
    }
}
