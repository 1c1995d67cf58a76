//! Task CRUD endpoints.
//!
//! Request bodies are taken as untyped JSON and run through
//! [`TaskInput::from_json`], so malformed payloads surface as a 400 with an
//! `{"error": ...}` body instead of axum's default extractor rejection.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::Value;
use taskboard_types::{Task, TaskInput};
use tracing::info;
use utoipa::OpenApi;

use crate::error::ServerError;
use crate::schemas::task::{ErrorResponse, TaskListQuery};
use crate::state::AppState;
use crate::store::{StoreError, TaskStore};

#[derive(OpenApi)]
#[openapi(
    paths(list_tasks, get_task, create_task, update_task, delete_task),
    components(schemas(
        Task,
        TaskInput,
        ErrorResponse,
        taskboard_types::Category,
        taskboard_types::Status,
        taskboard_types::Priority,
    ))
)]
pub struct TasksApi;

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/tasks", get(list_tasks).post(create_task))
        .route(
            "/tasks/{id}",
            get(get_task).patch(update_task).delete(delete_task),
        )
}

fn parse_input(payload: Result<Json<Value>, JsonRejection>) -> Result<TaskInput, ServerError> {
    let Json(body) = payload?;
    Ok(TaskInput::from_json(&body).map_err(StoreError::from)?)
}

#[utoipa::path(
    get,
    path = "/tasks",
    tag = "tasks",
    params(TaskListQuery),
    responses(
        (status = 200, description = "Tasks listed, newest first", body = [Task]),
    )
)]
pub async fn list_tasks(
    State(state): State<Arc<AppState>>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Json<Vec<Task>> {
    let filter = TaskListQuery::from_pairs(&pairs).into();
    Json(state.store.list(&filter).await)
}

#[utoipa::path(
    get,
    path = "/tasks/{id}",
    tag = "tasks",
    params(
        ("id" = String, Path, description = "ID of the task to retrieve")
    ),
    responses(
        (status = 200, description = "Task retrieved", body = Task),
        (status = 404, description = "Task not found", body = ErrorResponse),
    )
)]
pub async fn get_task(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Task>, ServerError> {
    Ok(Json(state.store.get(&id).await?))
}

#[utoipa::path(
    post,
    path = "/tasks",
    tag = "tasks",
    request_body = TaskInput,
    responses(
        (status = 201, description = "Task created", body = Task),
        (status = 400, description = "Invalid task data", body = ErrorResponse),
    )
)]
pub async fn create_task(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<Task>), ServerError> {
    let input = parse_input(payload)?;
    let task = state.store.create(input).await?;
    info!(task_id = %task.id, "task created");
    Ok((StatusCode::CREATED, Json(task)))
}

#[utoipa::path(
    patch,
    path = "/tasks/{id}",
    tag = "tasks",
    params(
        ("id" = String, Path, description = "ID of the task to update")
    ),
    request_body = TaskInput,
    responses(
        (status = 200, description = "Task updated", body = Task),
        (status = 400, description = "Invalid task data", body = ErrorResponse),
        (status = 404, description = "Task not found", body = ErrorResponse),
    )
)]
pub async fn update_task(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Task>, ServerError> {
    // Schema errors take precedence over an unknown id.
    let input = parse_input(payload)?;
    let task = state.store.update(&id, input).await?;
    info!(task_id = %id, "task updated");
    Ok(Json(task))
}

#[utoipa::path(
    delete,
    path = "/tasks/{id}",
    tag = "tasks",
    params(
        ("id" = String, Path, description = "ID of the task to delete")
    ),
    responses(
        (status = 204, description = "Task deleted"),
        (status = 404, description = "Task not found", body = ErrorResponse),
    )
)]
pub async fn delete_task(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<StatusCode, ServerError> {
    state.store.delete(&id).await?;
    info!(task_id = %id, "task deleted");
    Ok(StatusCode::NO_CONTENT)
}

// ── Tests ──────────────────────────────────────────────────────────────────────
