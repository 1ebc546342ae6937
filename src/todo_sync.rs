//! Todo List Sync
//!
//! Keeps the rendered list a projection of the server's collection. Every
//! mutation is followed by a full reload, and mutation+reload pairs run one at
//! a time through a single queue so a slow fetch cannot overwrite a newer one.

use std::cell::Cell;
use std::rc::Rc;

use futures::lock::{Mutex, MutexGuard};

use crate::api::TodoApi;
use crate::error::{ApiError, ApiResult};
use crate::models::TodoId;
use crate::store::{clear_feedback, show_error, AuthStatus, StateHandle};

pub const SESSION_EXPIRED: &str = "Your session has expired. Please log in again.";
pub const EMPTY_TASK: &str = "Task cannot be empty.";

#[derive(Clone)]
pub struct TodoListSync<S: StateHandle> {
    api: Rc<dyn TodoApi>,
    state: S,
    /// One in-flight operation at a time
    queue: Rc<Mutex<()>>,
    /// Bumped for every issued fetch and on clear; stale responses are dropped
    generation: Rc<Cell<u64>>,
    /// Bumped on clear; operations queued before a logout never reach the server
    epoch: Rc<Cell<u64>>,
}

impl<S: StateHandle> TodoListSync<S> {
    pub fn new(api: Rc<dyn TodoApi>, state: S) -> Self {
        Self {
            api,
            state,
            queue: Rc::new(Mutex::new(())),
            generation: Rc::new(Cell::new(0)),
            epoch: Rc::new(Cell::new(0)),
        }
    }

    /// Fetch the whole collection and replace the rendered list.
    pub async fn load(&self) -> ApiResult<()> {
        let epoch = self.epoch.get();
        let Some(_turn) = self.take_turn(epoch).await else {
            return Ok(());
        };
        self.fetch_and_render().await
    }

    /// Submit a new item, then reload.
    pub async fn create(&self, task: &str) -> ApiResult<()> {
        let epoch = self.epoch.get();
        clear_feedback(&self.state);
        let task = task.trim();
        if task.is_empty() {
            let err = ApiError::InvalidInput(EMPTY_TASK.to_string());
            self.report(&err);
            return Err(err);
        }

        let Some(_turn) = self.take_turn(epoch).await else {
            return Ok(());
        };
        log::debug!("[TODOS] create {:?}", task);
        match self.api.create_todo(task).await {
            Ok(()) => {
                self.state.set_new_task(String::new());
                self.fetch_and_render().await
            }
            // Input is kept; the list still resyncs with the server
            Err(err) => self.fail_mutation(err).await,
        }
    }

    /// Remove an item, then reload. Deleting a missing id is not an error.
    pub async fn delete(&self, id: &TodoId) -> ApiResult<()> {
        let epoch = self.epoch.get();
        clear_feedback(&self.state);
        let Some(_turn) = self.take_turn(epoch).await else {
            return Ok(());
        };
        log::debug!("[TODOS] delete {}", id);
        match self.api.delete_todo(id).await {
            Ok(()) | Err(ApiError::NotFound) => self.fetch_and_render().await,
            Err(err) => self.fail_mutation(err).await,
        }
    }

    /// Drop the rendered list and the input. In-flight fetches are discarded
    /// and queued operations are cancelled.
    pub fn clear(&self) {
        self.generation.set(self.generation.get() + 1);
        self.epoch.set(self.epoch.get() + 1);
        self.state.set_todos(Vec::new());
        self.state.set_new_task(String::new());
    }

    /// Wait for the queue. `None` if the list was cleared while waiting.
    async fn take_turn(&self, epoch: u64) -> Option<MutexGuard<'_, ()>> {
        let turn = self.queue.lock().await;
        if self.epoch.get() != epoch {
            log::debug!("[TODOS] list cleared while queued, skipping");
            return None;
        }
        Some(turn)
    }

    async fn fail_mutation(&self, err: ApiError) -> ApiResult<()> {
        if let ApiError::Unauthorized(_) = err {
            self.report(&err);
            return Err(err);
        }
        let reloaded = self.fetch_and_render().await;
        // A rejected session during the reload already replaced the banner
        if !matches!(reloaded, Err(ApiError::Unauthorized(_))) {
            self.report(&err);
        }
        Err(err)
    }

    async fn fetch_and_render(&self) -> ApiResult<()> {
        let generation = self.generation.get() + 1;
        self.generation.set(generation);

        let result = self.api.list_todos().await;
        if self.generation.get() != generation {
            log::debug!("[TODOS] dropping stale list response #{}", generation);
            return Ok(());
        }

        match result {
            Ok(items) => {
                log::debug!("[TODOS] loaded {} items", items.len());
                self.state.set_todos(items);
                Ok(())
            }
            Err(err) => {
                self.report(&err);
                Err(err)
            }
        }
    }

    fn report(&self, err: &ApiError) {
        if let ApiError::Unauthorized(_) = err {
            log::info!("[TODOS] session rejected by server, logging out");
            self.clear();
            self.state.set_auth(AuthStatus::LoggedOut);
            show_error(&self.state, SESSION_EXPIRED);
            return;
        }
        log::warn!("[TODOS] {}", err);
        show_error(&self.state, err.user_message());
    }
}
