use std::io::{self, Write};

use crate::models::{CLIConfig, TaskInfo};

pub fn banner(cfg: &CLIConfig) {
    println!("Task Store Debug CLI");
    println!("API: {}", cfg.base_url);
    println!("Type /help for commands.");
}

pub fn prompt() {
    print!("> ");
    let _ = io::stdout().flush();
}

pub fn help() {
    println!("Commands:");
    println!("  /help                 Show commands");
    println!("  /exit | /quit          Exit");
    println!("  /tasks                 List tasks");
    println!("  /done <id>             Mark a task completed");
    println!("  /undo <id>             Mark a task not completed");
    println!("  /config                Show current config");
    println!("  /base <url>            Update base URL");
    println!();
    println!("Any other input is added as a new task.");
}

pub fn task(task: &TaskInfo) {
    println!("{} {} - {}", marker(task), task.id, task.task);
}

pub fn tasks(tasks: &[TaskInfo]) {
    if tasks.is_empty() {
        println!("no tasks");
        return;
    }
    for item in tasks {
        println!("{} {} - {}", marker(item), item.id, item.task);
    }
}

pub fn config(cfg: &CLIConfig) {
    println!("config:");
    println!("  base: {}", cfg.base_url);
}

pub fn info(msg: &str) {
    println!("{}", msg);
}

pub fn error(msg: &str) {
    eprintln!("error: {}", msg);
}

fn marker(task: &TaskInfo) -> &'static str {
    if task.completed {
        "[x]"
    } else {
        "[ ]"
    }
}
