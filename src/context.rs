//! Application Context
//!
//! Controllers shared via the Leptos Context API.

use leptos::prelude::*;

use crate::session::SessionController;
use crate::store::AppStore;
use crate::todo_sync::TodoListSync;

/// Controllers constructed once by `App`, provided to all children
#[derive(Clone, Copy)]
pub struct AppContext {
    session: StoredValue<SessionController<AppStore>, LocalStorage>,
    todos: StoredValue<TodoListSync<AppStore>, LocalStorage>,
}

impl AppContext {
    pub fn new(session: SessionController<AppStore>, todos: TodoListSync<AppStore>) -> Self {
        Self {
            session: StoredValue::new_local(session),
            todos: StoredValue::new_local(todos),
        }
    }

    /// Session controller handle, cheap to clone into a task
    pub fn session(&self) -> SessionController<AppStore> {
        self.session.get_value()
    }

    /// List controller handle, cheap to clone into a task
    pub fn todos(&self) -> TodoListSync<AppStore> {
        self.todos.get_value()
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
