//! In-memory `TodoApi` for controller tests.
//!
//! Behaves like the real server: one account table, one cookie session, one
//! todo collection. Individual routes can be made to fail, and a list fetch
//! can be held open to simulate a slow response.

use std::cell::RefCell;
use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::oneshot;

use super::{TodoApi, LOGIN, LOGOUT, ME, REGISTER, TODOS};
use crate::error::{ApiError, ApiResult};
use crate::models::{Credentials, Me, TodoId, TodoItem};

pub const DELETE: &str = "DELETE /api/todos/{id}";
pub const CREATE: &str = "POST /api/todos";

#[derive(Default)]
struct Server {
    users: HashMap<String, String>,
    session: Option<String>,
    todos: Vec<TodoItem>,
    next_id: u64,
    calls: Vec<&'static str>,
    failures: HashMap<&'static str, ApiError>,
}

#[derive(Default)]
pub struct MockApi {
    server: RefCell<Server>,
    list_gate: RefCell<Option<oneshot::Receiver<()>>>,
}

impl MockApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_user(self, username: &str, password: &str) -> Self {
        self.server.borrow_mut().users.insert(username.to_string(), password.to_string());
        self
    }

    pub fn logged_in_as(self, username: &str) -> Self {
        self.server.borrow_mut().session = Some(username.to_string());
        self
    }

    pub fn with_todos(self, tasks: &[&str]) -> Self {
        for task in tasks {
            self.insert(task);
        }
        self
    }

    /// Make the next call to `route` fail with `err`.
    pub fn fail_next(&self, route: &'static str, err: ApiError) {
        self.server.borrow_mut().failures.insert(route, err);
    }

    /// Hold the next list fetch open until the returned sender fires. The
    /// response is the collection as it was when the request arrived.
    pub fn gate_next_list(&self) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        *self.list_gate.borrow_mut() = Some(rx);
        tx
    }

    pub fn expire_session(&self) {
        self.server.borrow_mut().session = None;
    }

    pub fn calls(&self, route: &str) -> usize {
        self.server.borrow().calls.iter().filter(|c| **c == route).count()
    }

    pub fn server_todos(&self) -> Vec<TodoItem> {
        self.server.borrow().todos.clone()
    }

    fn insert(&self, task: &str) -> TodoId {
        let mut server = self.server.borrow_mut();
        server.next_id += 1;
        let id = TodoId::new(server.next_id.to_string());
        server.todos.push(TodoItem { id: id.clone(), task: task.to_string(), completed: false });
        id
    }

    fn enter(&self, route: &'static str, needs_session: bool) -> ApiResult<()> {
        let mut server = self.server.borrow_mut();
        server.calls.push(route);
        if let Some(err) = server.failures.remove(route) {
            return Err(err);
        }
        if needs_session && server.session.is_none() {
            return Err(ApiError::Unauthorized(None));
        }
        Ok(())
    }
}

#[async_trait(?Send)]
impl TodoApi for MockApi {
    async fn me(&self) -> ApiResult<Me> {
        self.enter(ME, true)?;
        let username = self.server.borrow().session.clone().unwrap_or_default();
        Ok(Me { username })
    }

    async fn register(&self, credentials: &Credentials<'_>) -> ApiResult<()> {
        self.enter(REGISTER, false)?;
        let mut server = self.server.borrow_mut();
        if server.users.contains_key(credentials.username) {
            return Err(ApiError::Rejected {
                status: 409,
                message: "Username already exists".to_string(),
            });
        }
        server.users.insert(credentials.username.to_string(), credentials.password.to_string());
        Ok(())
    }

    async fn login(&self, credentials: &Credentials<'_>) -> ApiResult<()> {
        self.enter(LOGIN, false)?;
        let mut server = self.server.borrow_mut();
        match server.users.get(credentials.username) {
            Some(pw) if pw == credentials.password => {
                server.session = Some(credentials.username.to_string());
                Ok(())
            }
            _ => Err(ApiError::Unauthorized(None)),
        }
    }

    async fn logout(&self) -> ApiResult<()> {
        self.enter(LOGOUT, false)?;
        self.server.borrow_mut().session = None;
        Ok(())
    }

    async fn list_todos(&self) -> ApiResult<Vec<TodoItem>> {
        self.enter(TODOS, true)?;
        let snapshot = self.server.borrow().todos.clone();
        let gate = self.list_gate.borrow_mut().take();
        if let Some(gate) = gate {
            let _ = gate.await;
        }
        Ok(snapshot)
    }

    async fn create_todo(&self, task: &str) -> ApiResult<()> {
        self.enter(CREATE, true)?;
        self.insert(task);
        Ok(())
    }

    async fn delete_todo(&self, id: &TodoId) -> ApiResult<()> {
        self.enter(DELETE, true)?;
        let mut server = self.server.borrow_mut();
        let before = server.todos.len();
        server.todos.retain(|t| &t.id != id);
        if server.todos.len() == before {
            return Err(ApiError::NotFound);
        }
        Ok(())
    }
}
