//! Logging configuration.

use serde::{Deserialize, Serialize};
use tracing_subscriber::{EnvFilter, fmt};

use crate::error::ContractError;

/// Logging and tracing configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level: `"trace"`, `"debug"`, `"info"`, `"warn"`, `"error"`.
    pub level: String,
    /// Log format: `"json"` or `"pretty"`.
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "json".to_string(),
        }
    }
}

impl LoggingConfig {
    /// Install a global `tracing` subscriber.
    ///
    /// `RUST_LOG` takes precedence over `level`. Fails if a global
    /// subscriber is already installed.
    pub fn init(&self) -> Result<(), ContractError> {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.level));

        let installed = match self.format.as_str() {
            "json" => fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .try_init(),
            _ => fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .try_init(),
        };

        installed.map_err(|e| {
            ContractError::configuration(format!("Failed to install log subscriber: {e}"))
        })
    }
}
