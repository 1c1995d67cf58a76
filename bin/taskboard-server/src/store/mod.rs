//! Task store abstraction.
//!
//! [`TaskStore`] is the only way handlers touch the task collection. The
//! default implementation is [`memory::MemoryStore`], which keeps tasks for
//! the lifetime of the process. To move to persistent storage, implement
//! [`TaskStore`] for the new type and change the concrete type in
//! [`crate::state::AppState`]; the HTTP contract does not change.
//!
//! All trait methods use `impl Future` in their signatures (stable since Rust
//! 1.75) so no extra `async-trait` crate is required.

pub mod memory;

pub use memory::MemoryStore;

use std::future::Future;

use taskboard_types::{Task, TaskInput, ValidationError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    /// The payload failed schema validation; nothing was mutated.
    #[error("invalid task data: {0}")]
    InvalidInput(#[from] ValidationError),

    /// No task with the given id exists.
    #[error("task {0} not found")]
    NotFound(String),
}

/// Optional criteria for [`TaskStore::list`]. Empty strings count as unset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListFilter {
    /// Case-insensitive substring of the title.
    pub title: Option<String>,
    /// Calendar date (`YYYY-MM-DD`) the task was created on, in UTC.
    pub date: Option<String>,
}

impl ListFilter {
    pub fn matches(&self, task: &Task) -> bool {
        if let Some(title) = self.title.as_deref().filter(|t| !t.is_empty()) {
            if !task.title_contains(title) {
                return false;
            }
        }
        if let Some(date) = self.date.as_deref().filter(|d| !d.is_empty()) {
            if task.created_date() != date {
                return false;
            }
        }
        true
    }
}

pub trait TaskStore: Send + Sync + 'static {
    /// Tasks matching `filter`, newest-created first.
    fn list(&self, filter: &ListFilter) -> impl Future<Output = Vec<Task>> + Send;

    fn get(&self, id: &str) -> impl Future<Output = Result<Task, StoreError>> + Send;

    /// Validate `input`, then store it under a fresh id at the front of the
    /// collection.
    fn create(&self, input: TaskInput) -> impl Future<Output = Result<Task, StoreError>> + Send;

    /// Validate `input` before looking `id` up, so a malformed payload
    /// against an unknown id reports [`StoreError::InvalidInput`].
    fn update(
        &self,
        id: &str,
        input: TaskInput,
    ) -> impl Future<Output = Result<Task, StoreError>> + Send;

    fn delete(&self, id: &str) -> impl Future<Output = Result<(), StoreError>> + Send;

    fn len(&self) -> impl Future<Output = usize> + Send;
}
