//! Frontend Models
//!
//! Data structures matching the server's JSON bodies.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque, server-assigned todo identifier.
///
/// The server may send it as a JSON number or a JSON string; either way it is
/// kept as text and only used to address the item again.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "RawTodoId", into = "String")]
pub struct TodoId(String);

#[derive(Deserialize)]
#[serde(untagged)]
enum RawTodoId {
    Number(i64),
    Text(String),
}

impl From<RawTodoId> for TodoId {
    fn from(raw: RawTodoId) -> Self {
        match raw {
            RawTodoId::Number(n) => Self(n.to_string()),
            RawTodoId::Text(s) => Self(s),
        }
    }
}

impl From<TodoId> for String {
    fn from(id: TodoId) -> Self {
        id.0
    }
}

impl TodoId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Todo item (matches `GET /api/todos` rows)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TodoItem {
    pub id: TodoId,
    pub task: String,
    #[serde(default)]
    pub completed: bool,
}

/// `GET /api/me` response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Me {
    pub username: String,
}

/// Body of `/register` and `/login`
#[derive(Debug, Clone, Serialize)]
pub struct Credentials<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

/// Body of `POST /api/todos`
#[derive(Debug, Clone, Serialize)]
pub struct NewTodo<'a> {
    pub task: &'a str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_todo_id_accepts_numbers_and_strings() {
        let rows: Vec<TodoItem> = serde_json::from_str(
            r#"[{"id": 1, "task": "Learn Docker", "completed": false},
                {"id": "6f1c", "task": "Build a Flask API"}]"#,
        )
        .unwrap();

        assert_eq!(rows[0].id, TodoId::new("1"));
        assert_eq!(rows[1].id.as_str(), "6f1c");
        assert!(!rows[1].completed);
    }

    #[test]
    fn test_credentials_body_shape() {
        let body = serde_json::to_value(Credentials { username: "alice", password: "pw1" }).unwrap();
        assert_eq!(body, serde_json::json!({"username": "alice", "password": "pw1"}));
    }
}
