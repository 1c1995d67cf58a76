use taskboard_types::{Category, Priority, Status, Task, TaskInput};
use thiserror::Error;

/// Shortest title the form accepts, counted in characters after trimming.
pub const MIN_TITLE_LEN: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("title is required")]
    TitleRequired,
    #[error("title must be at least {min} characters")]
    TitleTooShort { min: usize },
}

/// Draft of a task being created or edited.
///
/// A new draft starts from the enum defaults; an edit draft starts from the
/// task being edited. Nothing is sent until [`TaskForm::validate`] passes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskForm {
    pub title: String,
    pub description: String,
    pub category: Category,
    pub status: Status,
    pub priority: Priority,
}

impl TaskForm {
    pub fn from_task(task: &Task) -> Self {
        Self {
            title: task.title.clone(),
            description: task.description.clone(),
            category: task.category,
            status: task.status,
            priority: task.priority,
        }
    }

    pub fn validate(&self) -> Result<(), FormError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(FormError::TitleRequired);
        }
        if title.chars().count() < MIN_TITLE_LEN {
            return Err(FormError::TitleTooShort { min: MIN_TITLE_LEN });
        }
        Ok(())
    }

    /// Validated payload for a create request.
    pub fn into_input(self) -> Result<TaskInput, FormError> {
        self.validate()?;
        Ok(TaskInput {
            title: self.title,
            description: self.description,
            category: self.category,
            status: self.status,
            priority: self.priority,
        })
    }

    /// Validated full task for an update request: the form's fields merged
    /// over `original`, whose `id` and `created_at` are carried unchanged.
    pub fn into_task(self, original: &Task) -> Result<Task, FormError> {
        let input = self.into_input()?;
        let mut task = original.clone();
        task.apply(input);
        Ok(task)
    }
}
