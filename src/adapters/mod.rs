// Adapters layer: concrete implementations of the domain ports (http sensor, telemetry cloud, audit file).

pub mod audit_log;
pub mod publisher;
pub mod sensor;

use crate::utils::error::{RelayError, Result};
use reqwest::Client;
use std::time::Duration;

pub(crate) fn build_client(timeout: Duration) -> Result<Client> {
    Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| RelayError::ConfigError {
            message: format!("Could not build HTTP client: {}", e),
        })
}
