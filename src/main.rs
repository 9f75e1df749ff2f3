#![recursion_limit = "256"]

mod config;
mod error;
mod routes;

use tracing_subscriber::EnvFilter;

use crate::config::HostConfig;
use crate::error::HostError;

#[tokio::main]
async fn main() -> Result<(), HostError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = HostConfig::from_env()?;
    let app = routes::app()?;
    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;

    tracing::info!(port = config.port, "conferencias listening");
    axum::serve(listener, app).await?;
    Ok(())
}
