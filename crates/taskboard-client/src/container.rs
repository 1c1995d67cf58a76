use taskboard_types::{Task, TaskInput};
use tracing::{debug, warn};

use crate::api::{ListQuery, TaskApi};
use crate::error::ClientError;
use crate::filter::FilterPatch;
use crate::state::{TaskAction, TaskState};

/// Client-side task cache backed by a [`TaskApi`].
///
/// Each request method dispatches its [`TaskAction`] only when the server
/// answered successfully; on error the state is left exactly as it was and
/// the error is returned. Requests are never retried.
///
/// Methods take `&mut self`, so one container issues one request at a time.
/// Nothing orders responses across separate containers sharing a server.
#[derive(Debug)]
pub struct TaskClient<A> {
    api: A,
    state: TaskState,
}

impl<A: TaskApi> TaskClient<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            state: TaskState::default(),
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn state(&self) -> &TaskState {
        &self.state
    }

    /// Recomputed on every call from the cache and the active filters.
    pub fn filtered_tasks(&self) -> Vec<&Task> {
        self.state.filtered_tasks()
    }

    pub fn task(&self, id: &str) -> Option<&Task> {
        self.state.task(id)
    }

    fn dispatch(&mut self, action: TaskAction) {
        self.state = self.state.reduce(action);
    }

    /// Replaces the cache with the server's list, optionally filtered
    /// server-side by title substring and creation date.
    pub async fn refresh(&mut self, title: Option<&str>, date: Option<&str>) -> Result<(), ClientError> {
        let query = ListQuery::new(title, date);
        let tasks = self
            .api
            .list(&query)
            .await
            .inspect_err(|e| warn!(error = %e, "failed to fetch tasks"))?;
        debug!(count = tasks.len(), "fetched tasks");
        self.dispatch(TaskAction::Fetched(tasks));
        Ok(())
    }

    /// [`refresh`](Self::refresh) using the current search query as the
    /// server-side title filter.
    pub async fn refresh_search(&mut self) -> Result<(), ClientError> {
        let query = self.state.filters.search_query.clone();
        self.refresh(Some(&query), None).await
    }

    pub async fn load_one(&mut self, id: &str) -> Result<Task, ClientError> {
        let task = self
            .api
            .get(id)
            .await
            .inspect_err(|e| warn!(task_id = %id, error = %e, "failed to fetch task"))?;
        self.dispatch(TaskAction::Loaded(task.clone()));
        Ok(task)
    }

    pub async fn create(&mut self, input: &TaskInput) -> Result<Task, ClientError> {
        let task = self
            .api
            .create(input)
            .await
            .inspect_err(|e| warn!(error = %e, "failed to create task"))?;
        debug!(task_id = %task.id, "task created");
        self.dispatch(TaskAction::Created(task.clone()));
        Ok(task)
    }

    /// Sends the full task. The cache takes the server's answer, not `task`.
    pub async fn update(&mut self, task: &Task) -> Result<Task, ClientError> {
        let updated = self
            .api
            .update(task)
            .await
            .inspect_err(|e| warn!(task_id = %task.id, error = %e, "failed to update task"))?;
        self.dispatch(TaskAction::Updated(updated.clone()));
        Ok(updated)
    }

    pub async fn delete(&mut self, id: &str) -> Result<(), ClientError> {
        self.api
            .delete(id)
            .await
            .inspect_err(|e| warn!(task_id = %id, error = %e, "failed to delete task"))?;
        self.dispatch(TaskAction::Deleted(id.to_owned()));
        Ok(())
    }

    /// Merges `patch` into the filter selection without contacting the
    /// server. Returns `true` when the search query changed, in which case
    /// the caller is expected to [`refresh_search`](Self::refresh_search).
    pub fn set_filter(&mut self, patch: FilterPatch) -> bool {
        let search_changed = patch
            .search_query
            .as_ref()
            .is_some_and(|q| *q != self.state.filters.search_query);
        self.dispatch(TaskAction::FilterChanged(patch));
        search_changed
    }
}
