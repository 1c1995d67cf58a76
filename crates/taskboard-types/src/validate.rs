//! Schema validation for incoming task payloads.
//!
//! Request bodies are checked field by field from untyped JSON rather than
//! through a derived `Deserialize`, so every violation maps to a
//! [`ValidationError`] with the offending field named, instead of a generic
//! decoder message.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use thiserror::Error;

use crate::task::{Category, Priority, Status, TaskInput};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("task data must be a JSON object")]
    NotAnObject,

    #[error("missing required field `{0}`")]
    MissingField(&'static str),

    #[error("field `{0}` must be a string")]
    NotAString(&'static str),

    #[error("field `{field}` has unsupported value {value}")]
    UnknownVariant { field: &'static str, value: String },

    #[error("title must not be empty")]
    EmptyTitle,
}

impl TaskInput {
    /// Parse and validate an untyped request body.
    ///
    /// Every mutable field is required; `description` may be the empty
    /// string but not absent. Unknown fields, including a client-sent `id` or
    /// `createdAt`, are ignored.
    pub fn from_json(value: &Value) -> Result<Self, ValidationError> {
        let obj = value.as_object().ok_or(ValidationError::NotAnObject)?;

        let title = string_field(obj, "title")?;
        let description = string_field(obj, "description")?;
        let category: Category = enum_field(obj, "category")?;
        let status: Status = enum_field(obj, "status")?;
        let priority: Priority = enum_field(obj, "priority")?;

        let input = TaskInput {
            title,
            description,
            category,
            status,
            priority,
        };
        input.validate()?;
        Ok(input)
    }
}

fn string_field(obj: &Map<String, Value>, field: &'static str) -> Result<String, ValidationError> {
    match obj.get(field) {
        None => Err(ValidationError::MissingField(field)),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(_) => Err(ValidationError::NotAString(field)),
    }
}

fn enum_field<T: DeserializeOwned>(obj: &Map<String, Value>, field: &'static str) -> Result<T, ValidationError> {
    let raw = obj.get(field).ok_or(ValidationError::MissingField(field))?;
    serde_json::from_value(raw.clone()).map_err(|_| ValidationError::UnknownVariant {
        field,
        value: raw.to_string(),
    })
}
