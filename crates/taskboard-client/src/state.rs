//! Cached client state and the reducer that evolves it.

use taskboard_types::Task;

use crate::filter::{FilterPatch, FilterSelection};

/// Snapshot of everything the client knows.
///
/// Never mutated in place by the container: each [`TaskAction`] produces a new
/// snapshot through [`TaskState::reduce`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskState {
    pub tasks: Vec<Task>,
    pub filters: FilterSelection,
}

/// A state transition, produced only after the server answered successfully
/// (or, for [`TaskAction::FilterChanged`], without a request at all).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskAction {
    /// A full list from the server; replaces the cache.
    Fetched(Vec<Task>),
    /// A single task from the server; upserted.
    Loaded(Task),
    Created(Task),
    Updated(Task),
    Deleted(String),
    FilterChanged(FilterPatch),
}

impl TaskState {
    pub fn reduce(&self, action: TaskAction) -> TaskState {
        let mut next = self.clone();
        match action {
            TaskAction::Fetched(tasks) => {
                next.tasks = tasks;
                sort_newest_first(&mut next.tasks);
            }
            TaskAction::Loaded(task) => {
                match next.tasks.iter_mut().find(|t| t.id == task.id) {
                    Some(slot) => *slot = task,
                    None => next.tasks.push(task),
                }
                sort_newest_first(&mut next.tasks);
            }
            TaskAction::Created(task) => next.tasks.insert(0, task),
            TaskAction::Updated(task) => {
                // An id missing from the cache leaves it untouched, order included.
                if let Some(slot) = next.tasks.iter_mut().find(|t| t.id == task.id) {
                    *slot = task;
                    sort_newest_first(&mut next.tasks);
                }
            }
            TaskAction::Deleted(id) => next.tasks.retain(|t| t.id != id),
            TaskAction::FilterChanged(patch) => {
                next.filters.apply(patch);
            }
        }
        next
    }

    /// Cached tasks passing every active filter, in cache order.
    pub fn filtered_tasks(&self) -> Vec<&Task> {
        self.tasks.iter().filter(|t| self.filters.matches(t)).collect()
    }

    pub fn task(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }
}

/// Stable: tasks created in the same millisecond keep their relative order.
pub fn sort_newest_first(tasks: &mut [Task]) {
    tasks.sort_by(|a, b| b.created_at.cmp(&a.created_at));
}
