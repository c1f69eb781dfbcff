use serde::{Deserialize, Serialize};

#[derive(Clone, Debug)]
pub struct CLIConfig {
    pub base_url: String,
}

#[derive(Debug, Serialize)]
pub struct CreateTaskRequest {
    pub task: String,
}

#[derive(Debug, Serialize)]
pub struct UpdateTaskRequest {
    pub completed: bool,
}

#[derive(Clone, Debug, Deserialize)]
pub struct TaskInfo {
    pub id: u64,
    pub task: String,
    pub completed: bool,
}
