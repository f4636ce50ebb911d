use std::sync::Arc;

use anyhow::{Context, Result};
use quoter_service::{InMemoryQuoteStore, LogFormat, QuoteServer, QuoteService, QuoterConfig};
use tokio::signal;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    let config = QuoterConfig::from_env().context("failed to load configuration")?;
    init_tracing(&config)?;

    info!(
        host = %config.server_host,
        port = config.server_port,
        request_timeout_secs = config.request_timeout_secs,
        "starting quoter service"
    );

    let store = Arc::new(InMemoryQuoteStore::new());
    let service = QuoteService::new(store);
    let server = QuoteServer::new(config, service);

    let listener = server.bind().await?;
    server.serve(listener, shutdown_signal()).await?;

    Ok(())
}

fn init_tracing(config: &QuoterConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.clone()));

    let builder = fmt().with_env_filter(filter).with_target(false);
    match config.log_format {
        LogFormat::Compact => builder.compact().try_init(),
        LogFormat::Json => builder.json().try_init(),
    }
    .map_err(|err| anyhow::anyhow!(err))
    .context("failed to install tracing subscriber")
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install CTRL+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        let mut sigterm =
            signal(SignalKind::terminate()).expect("failed to install SIGTERM handler");
        sigterm.recv().await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("received CTRL+C"),
        _ = terminate => info!("received SIGTERM"),
    }
}
