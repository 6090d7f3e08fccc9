use marblestone_server::config::ServerConfig;
use marblestone_server::observability::init_tracing;
use marblestone_server::startup::Application;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    init_tracing("marblestone-server", "info");

    let config = ServerConfig::load().map_err(|e| {
        tracing::error!("Failed to load configuration: {}", e);
        std::io::Error::other(format!("Configuration error: {}", e))
    })?;

    let app = Application::build(config).await.map_err(|e| {
        tracing::error!("Failed to build application: {}", e);
        std::io::Error::other(format!("Startup error: {}", e))
    })?;

    tracing::info!(port = app.port(), "MARBLESTONE SERVER RUNNING");

    app.run_until_stopped().await
}
