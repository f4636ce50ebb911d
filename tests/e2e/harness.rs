use std::{
    sync::Arc,
    time::{Duration, Instant},
};

use anyhow::{anyhow, Context, Result};
use quoter_service::{InMemoryQuoteStore, QuoteServer, QuoteService, QuoterConfig};
use rand::Rng;
use reqwest::Client;
use tokio::{sync::oneshot, task::JoinHandle, time::sleep};
use tracing::debug;

/// A quoter instance running in-process on an ephemeral port.
pub struct TestHarness {
    base_url: String,
    http_client: Client,
    shutdown_tx: Option<oneshot::Sender<()>>,
    server: Option<JoinHandle<Result<()>>>,
}

impl TestHarness {
    pub async fn start() -> Result<Self> {
        tracing_subscriber::fmt()
            .with_env_filter(
                std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()),
            )
            .with_test_writer()
            .try_init()
            .ok();

        let config = QuoterConfig {
            server_host: "127.0.0.1".to_string(),
            server_port: 0,
            shutdown_grace_secs: 2,
            ..QuoterConfig::default()
        };
        let service = QuoteService::new(Arc::new(InMemoryQuoteStore::new()));
        let server = QuoteServer::new(config, service);
        let listener = server.bind().await?;
        let addr = listener.local_addr().context("reading bound address")?;

        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
        let handle = tokio::spawn(server.serve(listener, async move {
            let _ = shutdown_rx.await;
        }));

        let http_client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .context("building reqwest client")?;

        let harness = Self {
            base_url: format!("http://{addr}"),
            http_client,
            shutdown_tx: Some(shutdown_tx),
            server: Some(handle),
        };
        harness
            .wait_for_service_health(Duration::from_secs(10))
            .await?;
        Ok(harness)
    }

    pub fn http_client(&self) -> &Client {
        &self.http_client
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn wait_for_service_health(&self, timeout: Duration) -> Result<()> {
        let url = self.url("/health");
        let start = Instant::now();
        while start.elapsed() < timeout {
            match self.http_client.get(&url).send().await {
                Ok(response) if response.status().is_success() => return Ok(()),
                Ok(response) => {
                    debug!("health check for {url} returned {}", response.status());
                }
                Err(err) => {
                    debug!("health check for {url} failed: {err}");
                }
            };
            sleep(Duration::from_millis(50)).await;
        }
        Err(anyhow!("timeout waiting for service health at {url}"))
    }

    pub async fn shutdown(mut self) -> Result<()> {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
        if let Some(server) = self.server.take() {
            server.await.context("joining server task")??;
        }
        Ok(())
    }
}

pub fn random_author(prefix: &str) -> String {
    let mut rng = rand::thread_rng();
    format!("{}-{}", prefix, rng.gen::<u32>())
}
