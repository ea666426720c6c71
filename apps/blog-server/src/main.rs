//! # Blog API Server
//!
//! The main entry point for the Actix-web HTTP server.

use blog_server::telemetry::{TelemetryConfig, init_telemetry};
use blog_server::{AppConfig, BlogServer};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    init_telemetry(&TelemetryConfig::from_env());

    let config = AppConfig::from_env();

    tracing::info!(
        "Starting Blog API Server on {}:{}",
        config.host,
        config.port
    );

    let server = BlogServer::start(&config).await?;
    server.wait().await?;

    tracing::info!("Blog API Server stopped");
    Ok(())
}
