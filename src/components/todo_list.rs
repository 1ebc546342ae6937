//! Todo List Component
//!
//! Renders the latest fetched collection in server order.

use leptos::prelude::*;

use crate::components::TodoRow;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn TodoList() -> impl IntoView {
    let store = use_app_store();
    let is_empty = move || store.todos().with(|t| t.is_empty());

    view! {
        <Show
            when=move || !is_empty()
            fallback=|| view! { <p class="empty-list">"Nothing to do yet."</p> }
        >
            <ul class="todo-list">
                <For
                    each=move || store.todos().get()
                    // Full re-render after every fetch; key on all rendered fields
                    key=|item| (item.id.clone(), item.task.clone(), item.completed)
                    children=move |item| view! { <TodoRow item=item /> }
                />
            </ul>
        </Show>
    }
}
