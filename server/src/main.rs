mod config;
mod routes;
mod state;

use thiserror::Error;

/// Failures that stop the server before it starts listening.
#[derive(Debug, Error)]
enum StartupError {
    #[error(transparent)]
    Config(#[from] config::ConfigError),
    #[error("leptos configuration: {0}")]
    Leptos(String),
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() -> Result<(), StartupError> {
    tracing_subscriber::fmt::init();

    if let Err(e) = dotenvy::dotenv() {
        tracing::debug!(error = %e, "no .env loaded");
    }

    let config = config::SiteConfig::from_env().inspect_err(|e| tracing::error!(error = %e, "invalid configuration"))?;
    let port = config.port;
    let state = state::AppState::new(config);

    let app = routes::leptos_app(state).map_err(StartupError::Leptos)?;
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}")).await?;

    tracing::info!(%port, "portfolio listening");
    axum::serve(listener, app).await?;
    Ok(())
}
