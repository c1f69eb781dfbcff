use reqwest::blocking::{Client, Response};

use crate::models::{CreateTaskRequest, TaskInfo, UpdateTaskRequest};

pub struct HTTPClient {
    pub base_url: String,
    client: Client,
}

impl HTTPClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(30))
                .build()
                .expect("reqwest client"),
        }
    }

    pub fn list_tasks(&self) -> Result<Vec<TaskInfo>, String> {
        let url = format!("{}/tasks", self.base_url.trim_end_matches('/'));
        let resp = self.client.get(url).send().map_err(|err| err.to_string())?;
        decode(resp)
    }

    pub fn create_task(&self, description: &str) -> Result<TaskInfo, String> {
        let url = format!("{}/tasks", self.base_url.trim_end_matches('/'));
        let req = CreateTaskRequest {
            task: description.to_string(),
        };
        let resp = self
            .client
            .post(url)
            .json(&req)
            .send()
            .map_err(|err| err.to_string())?;
        decode(resp)
    }

    pub fn set_completed(&self, id: u64, completed: bool) -> Result<TaskInfo, String> {
        let url = format!("{}/tasks/{}", self.base_url.trim_end_matches('/'), id);
        let req = UpdateTaskRequest { completed };
        let resp = self
            .client
            .put(url)
            .json(&req)
            .send()
            .map_err(|err| err.to_string())?;
        decode(resp)
    }
}

fn decode<T: serde::de::DeserializeOwned>(resp: Response) -> Result<T, String> {
    if resp.status().is_success() {
        resp.json::<T>().map_err(|err| err.to_string())
    } else {
        let status = resp.status();
        let body = resp.text().unwrap_or_default();
        Err(format!("http {}: {}", status.as_u16(), body))
    }
}
