//! Server API
//!
//! The `TodoApi` trait is the seam between the controllers and the network.
//! `HttpApi` talks to the real server; tests use an in-memory mock.

mod deadline;
mod http;
#[cfg(test)]
pub mod mock;

use async_trait::async_trait;
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

use crate::error::ApiResult;
use crate::models::{Credentials, Me, TodoId, TodoItem};

pub use deadline::with_deadline;
pub use http::HttpApi;

// ========================
// Routes
// ========================

pub const REGISTER: &str = "/register";
pub const LOGIN: &str = "/login";
pub const LOGOUT: &str = "/logout";
pub const ME: &str = "/api/me";
pub const TODOS: &str = "/api/todos";

/// Characters escaped when an id is used as a single path segment
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// `/api/todos/{id}`
pub fn todo_path(id: &TodoId) -> String {
    format!("{}/{}", TODOS, utf8_percent_encode(id.as_str(), PATH_SEGMENT))
}

/// Remote operations used by the session and list controllers.
///
/// Every call resolves to a `Result`; implementations must map non-2xx
/// responses to an `ApiError` rather than reporting success.
#[async_trait(?Send)]
pub trait TodoApi {
    /// `GET /api/me`
    async fn me(&self) -> ApiResult<Me>;

    /// `POST /register`
    async fn register(&self, credentials: &Credentials<'_>) -> ApiResult<()>;

    /// `POST /login`
    async fn login(&self, credentials: &Credentials<'_>) -> ApiResult<()>;

    /// `POST /logout`
    async fn logout(&self) -> ApiResult<()>;

    /// `GET /api/todos`
    async fn list_todos(&self) -> ApiResult<Vec<TodoItem>>;

    /// `POST /api/todos`
    async fn create_todo(&self, task: &str) -> ApiResult<()>;

    /// `DELETE /api/todos/{id}`
    async fn delete_todo(&self, id: &TodoId) -> ApiResult<()>;
}
