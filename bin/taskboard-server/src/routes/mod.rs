//! Axum router construction.
//!
//! [`build`] assembles the complete application router, including:
//! - Middleware layers (CORS, per-request trace-ID injection)
//! - Optional OpenAPI document (disable with `TASKBOARD_ENABLE_OPENAPI=false`)
//! - Health / heartbeat route
//! - `/tasks` CRUD routes

pub mod doc;
mod health;
mod tasks;

use axum::routing::get;
use axum::{Json, Router, middleware};
use std::sync::Arc;
use tower::ServiceBuilder;

use crate::middleware::{cors, trace};
use crate::state::AppState;

/// Build the complete Axum [`Router`] for the application.
pub fn build(state: Arc<AppState>) -> Router {
    let mut app = Router::new()
        .merge(health::router())
        .merge(tasks::router());

    if state.config.enable_openapi {
        let api_doc = doc::get_docs();
        app = app.route("/api-docs/openapi.json", get(move || async move { Json(api_doc) }));
    }

    app
        // The layer added last wraps the others and sees the request first.
        .layer(ServiceBuilder::new().layer(cors::cors_layer(&state.config)))
        .layer(middleware::from_fn(trace::trace_middleware))
        .with_state(state)
}
