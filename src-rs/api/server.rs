use std::net::SocketAddr;
use std::sync::Arc;

use axum::routing::{get, put};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

use crate::api::handlers::{
    handle_create_task, handle_health, handle_list_tasks, handle_update_task,
};
use crate::task::TaskStore;

pub struct TaskServer {
    pub port: u16,
    pub store: Arc<TaskStore>,
}

impl TaskServer {
    pub fn new(port: u16, store: Option<Arc<TaskStore>>) -> Self {
        let store = store.unwrap_or_else(|| Arc::new(TaskStore::new()));
        Self { port, store }
    }

    pub async fn start(&self) -> Result<(), String> {
        let app = build_router(self.store.clone());

        let addr = SocketAddr::from(([0, 0, 0, 0], self.port));
        info!("task-store listening on http://{}", addr);
        axum::Server::bind(&addr)
            .serve(app.into_make_service())
            .await
            .map_err(|err| err.to_string())
    }
}

pub fn build_router(store: Arc<TaskStore>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(handle_health))
        .route("/tasks", get(handle_list_tasks).post(handle_create_task))
        .route("/tasks/:task_id", put(handle_update_task))
        .layer(cors)
        .with_state(store)
}
