//! In-process implementation of [`TaskStore`].
//!
//! Tasks live in a `Vec` ordered newest-created first. The collection sits
//! behind a `tokio::sync::RwLock`; every operation holds the lock for its
//! whole read or mutation, so handlers running on different worker threads
//! never observe a half-applied write. Nothing survives a restart.

use taskboard_types::{Task, TaskInput};
use tokio::sync::RwLock;
use tracing::debug;

use super::{ListFilter, StoreError, TaskStore};

#[derive(Debug, Default)]
pub struct MemoryStore {
    tasks: RwLock<Vec<Task>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TaskStore for MemoryStore {
    async fn list(&self, filter: &ListFilter) -> Vec<Task> {
        let tasks = self.tasks.read().await;
        tasks.iter().filter(|t| filter.matches(t)).cloned().collect()
    }

    async fn get(&self, id: &str) -> Result<Task, StoreError> {
        let tasks = self.tasks.read().await;
        tasks
            .iter()
            .find(|t| t.id == id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(id.to_owned()))
    }

    async fn create(&self, input: TaskInput) -> Result<Task, StoreError> {
        input.validate()?;
        // Stamped under the lock so the front of the list is always the newest.
        let mut tasks = self.tasks.write().await;
        let task = Task::create(input);
        tasks.insert(0, task.clone());
        debug!(task_id = %task.id, "task created");
        Ok(task)
    }

    async fn update(&self, id: &str, input: TaskInput) -> Result<Task, StoreError> {
        input.validate()?;
        let mut tasks = self.tasks.write().await;
        let task = tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_owned()))?;
        task.apply(input);
        debug!(task_id = %id, "task updated");
        Ok(task.clone())
    }

    async fn delete(&self, id: &str) -> Result<(), StoreError> {
        let mut tasks = self.tasks.write().await;
        let index = tasks
            .iter()
            .position(|t| t.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_owned()))?;
        tasks.remove(index);
        debug!(task_id = %id, "task deleted");
        Ok(())
    }

    async fn len(&self) -> usize {
        self.tasks.read().await.len()
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────
