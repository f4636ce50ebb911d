use std::{env, net::SocketAddr, time::Duration};

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Compact,
    Json,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoterConfig {
    pub server_host: String,
    pub server_port: u16,
    pub request_timeout_secs: u64,
    pub shutdown_grace_secs: u64,
    pub log_level: String,
    pub log_format: LogFormat,
}

impl Default for QuoterConfig {
    fn default() -> Self {
        Self {
            server_host: "0.0.0.0".to_string(),
            server_port: 8080,
            request_timeout_secs: 30,
            shutdown_grace_secs: 10,
            log_level: "info".to_string(),
            log_format: LogFormat::Compact,
        }
    }
}

impl QuoterConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from an arbitrary variable source; `from_env` passes
    /// the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(host) = lookup("QUOTER_HOST") {
            if !host.trim().is_empty() {
                config.server_host = host;
            }
        }

        if let Some(port) = lookup("QUOTER_PORT") {
            config.server_port = port
                .parse::<u16>()
                .context("failed to parse QUOTER_PORT as u16")?;
        }

        if let Some(timeout) = lookup("REQUEST_TIMEOUT_SECS") {
            config.request_timeout_secs = timeout
                .parse::<u64>()
                .context("REQUEST_TIMEOUT_SECS must be a positive integer")?;
        }

        if let Some(grace) = lookup("SHUTDOWN_GRACE_SECS") {
            config.shutdown_grace_secs = grace
                .parse::<u64>()
                .context("SHUTDOWN_GRACE_SECS must be a positive integer")?;
        }

        if let Some(level) = lookup("LOG_LEVEL") {
            if !level.trim().is_empty() {
                config.log_level = level;
            }
        }

        if let Some(format) = lookup("LOG_FORMAT") {
            config.log_format = parse_log_format(&format)
                .with_context(|| format!("LOG_FORMAT is invalid: {format}"))?;
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.request_timeout_secs == 0 {
            anyhow::bail!("REQUEST_TIMEOUT_SECS must be greater than zero");
        }
        if self.shutdown_grace_secs == 0 {
            anyhow::bail!("SHUTDOWN_GRACE_SECS must be greater than zero");
        }
        self.bind_addr()?;
        Ok(())
    }

    pub fn bind_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.server_host, self.server_port)
            .parse()
            .with_context(|| {
                format!(
                    "invalid server bind address {}:{}",
                    self.server_host, self.server_port
                )
            })
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn shutdown_grace(&self) -> Duration {
        Duration::from_secs(self.shutdown_grace_secs)
    }
}

fn parse_log_format(value: &str) -> Result<LogFormat> {
    match value.trim().to_ascii_lowercase().as_str() {
        "compact" | "text" => Ok(LogFormat::Compact),
        "json" => Ok(LogFormat::Json),
        other => Err(anyhow!("unknown log format: {}", other)),
    }
}
