use std::io;

use crate::client::HTTPClient;
use crate::models::CLIConfig;
use crate::render;

pub struct REPL {
    pub config: CLIConfig,
    pub client: HTTPClient,
}

impl REPL {
    pub fn new(config: CLIConfig, client: HTTPClient) -> Self {
        Self { config, client }
    }

    pub fn run(&mut self) {
        render::banner(&self.config);
        loop {
            render::prompt();
            let mut line = String::new();
            if io::stdin().read_line(&mut line).is_err() {
                break;
            }
            let line = line.trim().to_string();
            if line.is_empty() {
                continue;
            }
            if line.starts_with('/') {
                if self.handle_command(&line) {
                    break;
                }
                continue;
            }
            self.add_task(&line);
        }
    }

    fn handle_command(&mut self, line: &str) -> bool {
        let mut parts = line.splitn(2, ' ');
        let cmd = parts.next().unwrap_or("").trim_start_matches('/');
        let rest = parts.next().unwrap_or("").trim();
        match cmd {
            "exit" | "quit" => return true,
            "help" => render::help(),
            "tasks" => self.list_tasks(),
            "done" => self.set_completed(rest, true),
            "undo" => self.set_completed(rest, false),
            "config" => render::config(&self.config),
            "base" => {
                if rest.is_empty() {
                    render::info(&format!("base: {}", self.config.base_url));
                } else {
                    self.config.base_url = rest.to_string();
                    self.client = HTTPClient::new(&self.config.base_url);
                    render::info("base url updated");
                }
            }
            _ => render::info("unknown command, type /help"),
        }
        false
    }

    fn add_task(&mut self, line: &str) {
        match self.client.create_task(line) {
            Ok(task) => render::task(&task),
            Err(err) => render::error(&err),
        }
    }

    fn list_tasks(&self) {
        match self.client.list_tasks() {
            Ok(tasks) => render::tasks(&tasks),
            Err(err) => render::error(&err),
        }
    }

    fn set_completed(&self, rest: &str, completed: bool) {
        let id = match rest.parse::<u64>() {
            Ok(id) => id,
            Err(_) => {
                render::error("expected a task id");
                return;
            }
        };
        match self.client.set_completed(id, completed) {
            Ok(task) => render::task(&task),
            Err(err) => render::error(&err),
        }
    }
}
