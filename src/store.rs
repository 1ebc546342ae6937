//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Controllers write
//! through the `StateHandle` seam so they can run against a plain cell in tests.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::TodoItem;

/// Session state as last reported by the server
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum AuthStatus {
    /// Status check has not resolved yet; neither view is shown.
    #[default]
    Unknown,
    LoggedOut,
    LoggedIn { username: String },
}

/// Username/password form contents
#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct CredentialsForm {
    pub username: String,
    pub password: String,
}

/// All view state, with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    pub auth: AuthStatus,
    /// Rendered todo list; always the result of the latest applied fetch
    pub todos: Vec<TodoItem>,
    pub register_form: CredentialsForm,
    pub login_form: CredentialsForm,
    /// New-todo input
    pub new_task: String,
    pub error: Option<String>,
    pub notice: Option<String>,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

/// Field-level write access to `AppState` used by the controllers.
///
/// Each setter touches one store field, so only readers of that field rerun.
pub trait StateHandle: Clone + 'static {
    fn set_auth(&self, auth: AuthStatus);
    fn set_todos(&self, todos: Vec<TodoItem>);
    fn set_new_task(&self, task: String);
    fn set_register_form(&self, form: CredentialsForm);
    fn set_login_form(&self, form: CredentialsForm);
    fn set_error(&self, error: Option<String>);
    fn set_notice(&self, notice: Option<String>);
}

impl StateHandle for AppStore {
    fn set_auth(&self, auth: AuthStatus) {
        self.auth().set(auth);
    }

    fn set_todos(&self, todos: Vec<TodoItem>) {
        self.todos().set(todos);
    }

    fn set_new_task(&self, task: String) {
        self.new_task().set(task);
    }

    fn set_register_form(&self, form: CredentialsForm) {
        self.register_form().set(form);
    }

    fn set_login_form(&self, form: CredentialsForm) {
        self.login_form().set(form);
    }

    fn set_error(&self, error: Option<String>) {
        self.error().set(error);
    }

    fn set_notice(&self, notice: Option<String>) {
        self.notice().set(notice);
    }
}

#[cfg(test)]
impl StateHandle for std::rc::Rc<std::cell::RefCell<AppState>> {
    fn set_auth(&self, auth: AuthStatus) {
        self.borrow_mut().auth = auth;
    }

    fn set_todos(&self, todos: Vec<TodoItem>) {
        self.borrow_mut().todos = todos;
    }

    fn set_new_task(&self, task: String) {
        self.borrow_mut().new_task = task;
    }

    fn set_register_form(&self, form: CredentialsForm) {
        self.borrow_mut().register_form = form;
    }

    fn set_login_form(&self, form: CredentialsForm) {
        self.borrow_mut().login_form = form;
    }

    fn set_error(&self, error: Option<String>) {
        self.borrow_mut().error = error;
    }

    fn set_notice(&self, notice: Option<String>) {
        self.borrow_mut().notice = notice;
    }
}

// ========================
// Store Helper Functions
// ========================

/// Clear the error banner and any success notice
pub fn clear_feedback(state: &impl StateHandle) {
    state.set_error(None);
    state.set_notice(None);
}

/// Show an error in the banner
pub fn show_error(state: &impl StateHandle, message: impl Into<String>) {
    state.set_notice(None);
    state.set_error(Some(message.into()));
}

/// Show a success notice in the banner
pub fn show_notice(state: &impl StateHandle, message: impl Into<String>) {
    state.set_error(None);
    state.set_notice(Some(message.into()));
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::reactive::effect::ImmediateEffect;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn test_sibling_writes_do_not_rerun_auth_readers() {
        let owner = Owner::new();
        owner.set();

        let store: AppStore = Store::new(AppState::default());
        let runs = Arc::new(AtomicUsize::new(0));
        let counter = runs.clone();
        let _effect = ImmediateEffect::new(move || {
            let _ = store.auth().get();
            counter.fetch_add(1, Ordering::SeqCst);
        });
        assert_eq!(runs.load(Ordering::SeqCst), 1);

        store.set_todos(vec![]);
        store.set_new_task("milk".to_string());
        clear_feedback(&store);
        show_error(&store, "boom");
        assert_eq!(runs.load(Ordering::SeqCst), 1);

        store.set_auth(AuthStatus::LoggedOut);
        assert_eq!(runs.load(Ordering::SeqCst), 2);
    }
}
