use std::sync::Arc;

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde_json::json;
use tracing::{debug, info};

use crate::error::ApiError;
use crate::task::{Task, TaskStore};

#[derive(Debug, Deserialize)]
pub struct CreateTaskRequest {
    pub task: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateTaskRequest {
    pub completed: Option<bool>,
}

pub async fn handle_health() -> Json<serde_json::Value> {
    Json(json!({"status": "ok", "version": env!("CARGO_PKG_VERSION")}))
}

pub async fn handle_list_tasks(State(store): State<Arc<TaskStore>>) -> Json<Vec<Task>> {
    Json(store.list())
}

pub async fn handle_create_task(
    State(store): State<Arc<TaskStore>>,
    payload: Result<Json<CreateTaskRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Task>), ApiError> {
    let Json(req) =
        payload.map_err(|rejection| ApiError::InvalidRequest(rejection.to_string()))?;
    let description = req
        .task
        .ok_or_else(|| ApiError::InvalidRequest("missing required field `task`".to_string()))?;

    let task = store.create(&description);
    info!("created task {}", task.id);
    Ok((StatusCode::CREATED, Json(task)))
}

pub async fn handle_update_task(
    State(store): State<Arc<TaskStore>>,
    path: Result<Path<u64>, PathRejection>,
    payload: Result<Json<UpdateTaskRequest>, JsonRejection>,
) -> Result<Json<Task>, ApiError> {
    let Path(task_id) =
        path.map_err(|rejection| ApiError::InvalidRequest(rejection.to_string()))?;
    let req = match payload {
        Ok(Json(req)) => req,
        // a PUT without a body is a no-op update
        Err(JsonRejection::MissingJsonContentType(_)) => UpdateTaskRequest::default(),
        Err(rejection) => return Err(ApiError::InvalidRequest(rejection.to_string())),
    };

    match store.set_completed(task_id, req.completed) {
        Some(task) => {
            debug!("task {} completed={}", task.id, task.completed);
            Ok(Json(task))
        }
        None => Err(ApiError::NotFound),
    }
}
