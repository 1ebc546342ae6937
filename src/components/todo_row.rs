//! Todo Row Component
//!
//! One item in the list: task text and a delete button.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_app_context;
use crate::models::TodoItem;

#[component]
pub fn TodoRow(item: TodoItem) -> impl IntoView {
    let ctx = use_app_context();

    let id = item.id;
    let completed = item.completed;

    view! {
        <li class=move || if completed { "todo-item completed" } else { "todo-item" }>
            <span class="todo-text">{item.task}</span>
            <button class="delete-btn" on:click=move |_| {
                let todos = ctx.todos();
                let id = id.clone();
                spawn_local(async move {
                    let _ = todos.delete(&id).await;
                });
            }>"Delete"</button>
        </li>
    }
}
