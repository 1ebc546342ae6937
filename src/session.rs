//! Session Controller
//!
//! Login/session state machine. Decides which view is shown and triggers the
//! first list load when the user becomes authenticated.

use std::rc::Rc;

use crate::api::TodoApi;
use crate::error::{ApiError, ApiResult};
use crate::models::Credentials;
use crate::store::{clear_feedback, show_error, show_notice, AuthStatus, CredentialsForm, StateHandle};
use crate::todo_sync::TodoListSync;

pub const REGISTERED: &str = "Registration successful! Please log in.";
pub const LOGIN_FAILED: &str = "Login failed. Check your username and password.";
pub const MISSING_CREDENTIALS: &str = "Username and password are required.";

#[derive(Clone)]
pub struct SessionController<S: StateHandle> {
    api: Rc<dyn TodoApi>,
    state: S,
    todos: TodoListSync<S>,
}

impl<S: StateHandle> SessionController<S> {
    pub fn new(api: Rc<dyn TodoApi>, state: S, todos: TodoListSync<S>) -> Self {
        Self { api, state, todos }
    }

    /// Ask the server whether the cookie still carries a session.
    ///
    /// A 401/403 means logged out. Any other failure also shows the logged-out
    /// view, but with an error so an unreachable server is not mistaken for
    /// "not logged in".
    pub async fn check_status(&self) -> ApiResult<()> {
        match self.api.me().await {
            Ok(me) => {
                self.enter_logged_in(me.username);
                self.todos.load().await
            }
            Err(ApiError::Unauthorized(_)) => {
                self.enter_logged_out();
                Ok(())
            }
            Err(err) => {
                log::warn!("[SESSION] status check failed: {}", err);
                self.enter_logged_out();
                show_error(&self.state, err.user_message());
                Err(err)
            }
        }
    }

    pub async fn register(&self, username: &str, password: &str) -> ApiResult<()> {
        clear_feedback(&self.state);
        let credentials = self.validate(username, password)?;

        match self.api.register(&credentials).await {
            Ok(()) => {
                log::info!("[SESSION] registered {}", credentials.username);
                self.state.set_register_form(CredentialsForm::default());
                show_notice(&self.state, REGISTERED);
                Ok(())
            }
            Err(err) => {
                log::warn!("[SESSION] registration failed: {}", err);
                show_error(&self.state, err.user_message());
                Err(err)
            }
        }
    }

    pub async fn login(&self, username: &str, password: &str) -> ApiResult<()> {
        clear_feedback(&self.state);
        let credentials = self.validate(username, password)?;

        match self.api.login(&credentials).await {
            Ok(()) => {
                self.state.set_login_form(CredentialsForm::default());
                self.enter_logged_in(credentials.username.to_string());
                self.todos.load().await
            }
            Err(err) => {
                log::warn!("[SESSION] login failed: {}", err);
                let message = match &err {
                    ApiError::Unauthorized(None) => LOGIN_FAILED.to_string(),
                    other => other.user_message(),
                };
                show_error(&self.state, message);
                Err(err)
            }
        }
    }

    /// Ask the server to end the session, then log out locally whatever it says.
    ///
    /// List operations still queued behind an in-flight one are dropped.
    pub async fn logout(&self) {
        clear_feedback(&self.state);
        if let Err(err) = self.api.logout().await {
            log::warn!("[SESSION] logout request failed: {}", err);
        }
        self.enter_logged_out();
    }

    fn validate<'a>(&self, username: &'a str, password: &'a str) -> ApiResult<Credentials<'a>> {
        let username = username.trim();
        if username.is_empty() || password.is_empty() {
            let err = ApiError::InvalidInput(MISSING_CREDENTIALS.to_string());
            show_error(&self.state, err.user_message());
            return Err(err);
        }
        Ok(Credentials { username, password })
    }

    fn enter_logged_in(&self, username: String) {
        log::info!("[SESSION] logged in as {}", username);
        self.state.set_auth(AuthStatus::LoggedIn { username });
    }

    fn enter_logged_out(&self) {
        log::info!("[SESSION] logged out");
        self.todos.clear();
        self.state.set_auth(AuthStatus::LoggedOut);
    }
}
