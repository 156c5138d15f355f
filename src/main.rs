use anyhow::{Context, Result};
use skeptic::{
    app_state::AppState,
    config::{Config, LogFormat},
    routes,
};
use tokio::signal;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;
    init_tracing(config.log_format());

    let state = AppState::from_config(&config).context("failed to build http client")?;
    let app = routes::router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr())
        .await
        .with_context(|| format!("failed to bind to {}", config.bind_addr()))?;
    info!(
        addr = config.bind_addr(),
        fetch_timeout_secs = config.fetch_timeout().as_secs(),
        policy = ?config.policy(),
        "Listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(wait_for_shutdown(signal::ctrl_c()))
        .await?;

    info!("Server stopped");
    Ok(())
}

fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    match format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Text => builder.init(),
    }
}

/// Resolves once `signal` fires. If the handler can't be installed the
/// server keeps running until killed.
async fn wait_for_shutdown(signal: impl Future<Output = std::io::Result<()>>) {
    if let Err(e) = signal.await {
        error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Received shutdown signal, draining connections");
}
