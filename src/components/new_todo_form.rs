//! New Todo Form Component
//!
//! Single input for adding a task. The input is cleared by the controller
//! once the server accepts the task.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_app_context;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn NewTodoForm() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let new_task = store.new_task();

    let create_todo = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let task = new_task.get_untracked();
        let todos = ctx.todos();
        spawn_local(async move {
            let _ = todos.create(&task).await;
        });
    };

    view! {
        <form class="todo-form" on:submit=create_todo>
            <input
                type="text"
                placeholder="What needs to be done?"
                prop:value=move || new_task.get()
                on:input=move |ev| new_task.set(event_target_value(&ev))
            />
            <button type="submit">"Add"</button>
        </form>
    }
}
