pub mod config;
pub mod error;

#[path = "task/lib.rs"]
pub mod task;
#[path = "api/lib.rs"]
pub mod api;

pub use config::ServerConfig;
pub use error::ApiError;
pub use task::{Task, TaskStore};
