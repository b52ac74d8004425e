mod config;
mod error;
mod routes;
mod state;

use crate::config::HostConfig;
use crate::error::HostError;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, "turntable host failed");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), HostError> {
    match dotenvy::dotenv() {
        Ok(path) => tracing::info!(path = %path.display(), "loaded .env"),
        Err(e) if e.not_found() => {}
        Err(e) => tracing::warn!(error = %e, ".env ignored"),
    }

    let config = HostConfig::from_env()?;
    let port = config.port;
    tracing::info!(backend = %config.backend_url, timeout_secs = config.backend_timeout.as_secs(), "backend configured");

    let state = state::AppState::new(config)?;
    let app = routes::app(state)?;
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}")).await?;

    tracing::info!(%port, "turntable listening");
    axum::serve(listener, app).await?;
    Ok(())
}
