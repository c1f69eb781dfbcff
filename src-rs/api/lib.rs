pub use crate::error::ApiError;
pub use crate::task::{Task, TaskStore};

pub mod handlers;
pub mod server;
