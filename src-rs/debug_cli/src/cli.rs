use std::env;

use crate::models::CLIConfig;

const DEFAULT_URL: &str = "http://localhost:8080";

pub fn parse_config() -> CLIConfig {
    let mut cfg = CLIConfig {
        base_url: env_or("TASK_STORE_URL", DEFAULT_URL.to_string()),
    };

    let args: Vec<String> = env::args().collect();
    let mut idx = 1;
    while idx < args.len() {
        if args[idx].as_str() == "--base" {
            if let Some(value) = args.get(idx + 1) {
                cfg.base_url = value.clone();
                idx += 1;
            }
        }
        idx += 1;
    }

    cfg
}

fn env_or(key: &str, fallback: String) -> String {
    env::var(key).unwrap_or(fallback)
}
