use std::sync::RwLock;

use super::types::Task;

pub struct TaskStore {
    tasks: RwLock<Vec<Task>>,
}

impl TaskStore {
    pub fn new() -> Self {
        Self {
            tasks: RwLock::new(Vec::new()),
        }
    }

    // ids are assigned as len + 1; tasks are never removed, so ids stay dense and unique
    pub fn create(&self, description: &str) -> Task {
        let mut tasks = self
            .tasks
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        let task = Task {
            id: tasks.len() as u64 + 1,
            task: description.to_string(),
            completed: false,
        };
        tasks.push(task.clone());
        task
    }

    pub fn set_completed(&self, id: u64, completed: Option<bool>) -> Option<Task> {
        let mut tasks = self
            .tasks
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        let task = tasks.iter_mut().find(|task| task.id == id)?;
        if let Some(flag) = completed {
            task.completed = flag;
        }
        Some(task.clone())
    }

    pub fn list(&self) -> Vec<Task> {
        match self.tasks.read() {
            Ok(tasks) => tasks.clone(),
            Err(_) => Vec::new(),
        }
    }
}

impl Default for TaskStore {
    fn default() -> Self {
        Self::new()
    }
}
