mod cli;
mod client;
mod models;
mod render;
mod repl;

use client::HTTPClient;
use repl::REPL;

fn main() {
    let config = cli::parse_config();
    let client = HTTPClient::new(&config.base_url);
    let mut repl = REPL::new(config, client);
    repl.run();
}
