use task_store_rs::api::server::TaskServer;
use task_store_rs::config::ServerConfig;
use tracing::error;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = ServerConfig::from_env();
    let server = TaskServer::new(config.port, None);
    if let Err(err) = server.start().await {
        error!("server error: {}", err);
    }
}
