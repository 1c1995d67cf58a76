use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};
use uuid::Uuid;

use crate::timestamp;
use crate::validate::ValidationError;

/// Kind of work a task represents.
///
/// `Display` yields the wire value; `FromStr` additionally accepts
/// case-insensitive input and a few compact spellings for command-line use.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[strum(ascii_case_insensitive)]
pub enum Category {
    #[default]
    Bug,
    Feature,
    #[strum(to_string = "Documentation", serialize = "docs")]
    Documentation,
    Refactor,
    Test,
}

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[strum(ascii_case_insensitive)]
pub enum Status {
    #[default]
    #[serde(rename = "To Do")]
    #[strum(to_string = "To Do", serialize = "todo", serialize = "to-do")]
    ToDo,
    #[serde(rename = "In Progress")]
    #[strum(to_string = "In Progress", serialize = "in-progress", serialize = "inprogress")]
    InProgress,
    Done,
}

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[strum(ascii_case_insensitive)]
pub enum Priority {
    #[default]
    Low,
    Medium,
    High,
}

/// The mutable fields of a [`Task`]: everything except the server-assigned
/// `id` and `createdAt`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct TaskInput {
    pub title: String,
    pub description: String,
    pub category: Category,
    pub status: Status,
    pub priority: Priority,
}

impl TaskInput {
    /// Checks the rules the type system cannot express. Any non-empty title
    /// is accepted, including one made of whitespace.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.title.is_empty() {
            return Err(ValidationError::EmptyTitle);
        }
        Ok(())
    }
}

/// A stored task as returned by the REST interface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub category: Category,
    pub status: Status,
    pub priority: Priority,
    #[serde(with = "crate::timestamp")]
    #[cfg_attr(feature = "openapi", schema(value_type = String, format = DateTime))]
    pub created_at: DateTime<Utc>,
}

impl Task {
    /// Build a new task with a fresh identifier and the current time.
    pub fn create(input: TaskInput) -> Self {
        Self::with_id(Uuid::new_v4().to_string(), input, timestamp::now())
    }

    pub fn with_id(id: impl Into<String>, input: TaskInput, created_at: DateTime<Utc>) -> Self {
        Self {
            id: id.into(),
            title: input.title,
            description: input.description,
            category: input.category,
            status: input.status,
            priority: input.priority,
            created_at,
        }
    }

    /// Replace every mutable field; `id` and `created_at` are left untouched.
    pub fn apply(&mut self, input: TaskInput) {
        self.title = input.title;
        self.description = input.description;
        self.category = input.category;
        self.status = input.status;
        self.priority = input.priority;
    }

    pub fn input(&self) -> TaskInput {
        TaskInput {
            title: self.title.clone(),
            description: self.description.clone(),
            category: self.category,
            status: self.status,
            priority: self.priority,
        }
    }

    /// UTC calendar date of creation, formatted with [`crate::DATE_FORMAT`].
    pub fn created_date(&self) -> String {
        self.created_at.format(crate::DATE_FORMAT).to_string()
    }

    /// Case-insensitive substring match against the title. An empty needle
    /// matches every task.
    pub fn title_contains(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(&needle.to_lowercase())
    }
}
