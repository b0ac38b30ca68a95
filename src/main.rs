mod config;
mod routes;
mod state;

use thiserror::Error;
use tracing_subscriber::EnvFilter;

use crate::config::{ConfigError, HostConfig};
use crate::state::ProxyState;

#[derive(Debug, Error)]
enum HostError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("leptos configuration: {0}")]
    Leptos(String),
    #[error("http client: {0}")]
    Client(#[from] reqwest::Error),
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() -> Result<(), HostError> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = HostConfig::from_env()?;
    let leptos_conf = leptos::config::get_configuration(None).map_err(|e| HostError::Leptos(e.to_string()))?;
    let state = ProxyState::new(&config.upstream)?;

    let app = routes::app(state, config.max_upload_bytes, leptos_conf.leptos_options);
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;

    tracing::info!(port = config.port, upstream = %config.upstream, "medcore listening");
    axum::serve(listener, app).await?;
    Ok(())
}
