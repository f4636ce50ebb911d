use std::{
    future::{Future, IntoFuture},
    io,
    net::SocketAddr,
    sync::Arc,
};

use anyhow::{Context, Result};
use axum::Router;
use tokio::{net::TcpListener, sync::Notify, task::JoinError, time::timeout};
use tracing::{info, warn};

use crate::{
    api::{create_router, ApiState},
    config::QuoterConfig,
    quotes::QuoteService,
};

/// HTTP front end for a [`QuoteService`].
pub struct QuoteServer {
    config: QuoterConfig,
    service: QuoteService,
}

impl QuoteServer {
    pub fn new(config: QuoterConfig, service: QuoteService) -> Self {
        Self { config, service }
    }

    pub fn config(&self) -> &QuoterConfig {
        &self.config
    }

    /// Build the router (useful for testing).
    pub fn router(&self) -> Router {
        let state = Arc::new(ApiState::new(self.service.clone()));
        create_router(state, self.config.request_timeout())
    }

    pub async fn bind(&self) -> Result<TcpListener> {
        let addr = self.config.bind_addr()?;
        TcpListener::bind(addr)
            .await
            .with_context(|| format!("failed to bind TCP listener on {addr}"))
    }

    /// Serves until `shutdown` resolves, then lets in-flight requests finish
    /// for at most the configured grace period.
    pub async fn serve<F>(self, listener: TcpListener, shutdown: F) -> Result<()>
    where
        F: Future<Output = ()> + Send,
    {
        let local_addr = listener
            .local_addr()
            .context("failed to read bound address")?;
        info!(%local_addr, "quoter listening");

        let grace = self.config.shutdown_grace();
        let app = self
            .router()
            .into_make_service_with_connect_info::<SocketAddr>();

        let drain = Arc::new(Notify::new());
        let server = {
            let drain = Arc::clone(&drain);
            axum::serve(listener, app).with_graceful_shutdown(async move {
                drain.notified().await;
            })
        };
        let mut server = tokio::spawn(server.into_future());

        tokio::select! {
            result = &mut server => return server_outcome(result),
            _ = shutdown => {}
        }

        info!(grace_secs = grace.as_secs(), "shutdown requested, draining connections");
        drain.notify_one();

        match timeout(grace, &mut server).await {
            Ok(result) => server_outcome(result)?,
            Err(_) => {
                warn!("shutdown grace period elapsed, dropping remaining connections");
                server.abort();
            }
        }

        info!("quoter shutdown complete");
        Ok(())
    }
}

fn server_outcome(result: Result<io::Result<()>, JoinError>) -> Result<()> {
    result
        .context("server task failed")?
        .context("server encountered an unrecoverable error")
}
