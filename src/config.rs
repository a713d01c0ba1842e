//! Server configuration loaded from environment variables.

use std::net::{IpAddr, SocketAddr};

use serde::Deserialize;

use crate::error::{Result, ServerError};

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    // === Server Configuration ===
    /// Address the HTTP server binds to.
    #[serde(default = "default_host")]
    pub host: String,

    /// HTTP server port.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Port for the Prometheus exporter. Disabled when unset.
    #[serde(default)]
    pub metrics_port: Option<u16>,

    // === Logging ===
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub rust_log: String,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            metrics_port: None,
            rust_log: default_log_level(),
        }
    }
}

impl Config {
    /// Load configuration from environment, reading .env file first.
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_vars(std::env::vars())
    }

    /// Build configuration from `(NAME, value)` pairs.
    pub fn from_vars<I>(vars: I) -> Result<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        Ok(envy::from_iter(vars)?)
    }

    /// Check if the configuration is valid.
    pub fn validate(&self) -> Result<()> {
        let invalid = |msg: String| Err(ServerError::InvalidConfig(msg));

        if self.host.parse::<IpAddr>().is_err() {
            return invalid(format!("HOST must be an IP address, got {:?}", self.host));
        }

        if self.port == 0 {
            return invalid("PORT must be non-zero".to_string());
        }

        match self.metrics_port {
            Some(0) => return invalid("METRICS_PORT must be non-zero".to_string()),
            Some(p) if p == self.port => {
                return invalid("METRICS_PORT must differ from PORT".to_string());
            }
            _ => {}
        }

        Ok(())
    }

    /// Socket address for the HTTP server.
    pub fn bind_addr(&self) -> Result<SocketAddr> {
        let ip: IpAddr = self.host.parse().map_err(|e| {
            ServerError::InvalidConfig(format!("invalid HOST {:?}: {}", self.host, e))
        })?;
        Ok(SocketAddr::new(ip, self.port))
    }

    /// Socket address for the metrics exporter, if enabled.
    pub fn metrics_addr(&self) -> Option<SocketAddr> {
        let port = self.metrics_port?;
        let ip: IpAddr = self.host.parse().ok()?;
        Some(SocketAddr::new(ip, port))
    }
}
