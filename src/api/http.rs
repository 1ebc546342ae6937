//! HTTP Transport
//!
//! `TodoApi` over `fetch`, with the session cookie sent on every request.

use async_trait::async_trait;
use gloo_net::http::{Request, RequestBuilder, Response};
use gloo_timers::future::TimeoutFuture;
use serde::de::DeserializeOwned;
use web_sys::RequestCredentials;

use super::{todo_path, with_deadline, TodoApi, LOGIN, LOGOUT, ME, REGISTER, TODOS};
use crate::config::ClientConfig;
use crate::error::{ApiError, ApiResult};
use crate::models::{Credentials, Me, NewTodo, TodoId, TodoItem};

pub struct HttpApi {
    base: String,
    timeout_ms: u32,
}

impl HttpApi {
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            base: config.api_base.clone(),
            timeout_ms: config.request_timeout_ms,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    fn get(&self, path: &str) -> RequestBuilder {
        Request::get(&self.url(path)).credentials(RequestCredentials::Include)
    }

    fn post(&self, path: &str) -> RequestBuilder {
        Request::post(&self.url(path)).credentials(RequestCredentials::Include)
    }

    fn delete(&self, path: &str) -> RequestBuilder {
        Request::delete(&self.url(path)).credentials(RequestCredentials::Include)
    }

    /// Send and return the body of a 2xx response.
    async fn send(&self, request: Result<Request, gloo_net::Error>) -> ApiResult<String> {
        let request = request.map_err(|e| ApiError::Network(e.to_string()))?;
        let method = request.method();
        let url = request.url();
        log::debug!("[API] {} {}", method, url);

        let result = with_deadline(
            async move {
                let response = request.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
                read_body(response).await
            },
            TimeoutFuture::new(self.timeout_ms),
            self.timeout_ms,
        )
        .await;

        if let Err(e) = &result {
            log::debug!("[API] {} {} failed: {}", method, url, e);
        }
        result
    }
}

async fn read_body(response: Response) -> ApiResult<String> {
    let status = response.status();
    let body = response.text().await;
    match body {
        Ok(body) => match ApiError::from_status(status, &body) {
            Some(err) => Err(err),
            None => Ok(body),
        },
        // Error statuses are still classified when the body is unreadable
        Err(e) => match ApiError::from_status(status, "") {
            Some(err) => Err(err),
            None => Err(ApiError::Network(e.to_string())),
        },
    }
}

fn decode<T: DeserializeOwned>(body: &str) -> ApiResult<T> {
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

#[async_trait(?Send)]
impl TodoApi for HttpApi {
    async fn me(&self) -> ApiResult<Me> {
        let body = self.send(self.get(ME).build()).await?;
        decode(&body)
    }

    async fn register(&self, credentials: &Credentials<'_>) -> ApiResult<()> {
        self.send(self.post(REGISTER).json(credentials)).await.map(drop)
    }

    async fn login(&self, credentials: &Credentials<'_>) -> ApiResult<()> {
        self.send(self.post(LOGIN).json(credentials)).await.map(drop)
    }

    async fn logout(&self) -> ApiResult<()> {
        self.send(self.post(LOGOUT).build()).await.map(drop)
    }

    async fn list_todos(&self) -> ApiResult<Vec<TodoItem>> {
        let body = self.send(self.get(TODOS).build()).await?;
        decode(&body)
    }

    async fn create_todo(&self, task: &str) -> ApiResult<()> {
        self.send(self.post(TODOS).json(&NewTodo { task })).await.map(drop)
    }

    async fn delete_todo(&self, id: &TodoId) -> ApiResult<()> {
        self.send(self.delete(&todo_path(id)).build()).await.map(drop)
    }
}
