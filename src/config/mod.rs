#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::domain::model::Labels;
use crate::utils::error::{RelayError, Result};
use crate::utils::validation::{
    validate_non_empty_string, validate_path, validate_range, validate_url, Validate,
};
use std::path::PathBuf;
use std::time::Duration;
use url::Url;

pub const DEFAULT_SENSOR_HOST: &str = "192.168.1.10";
pub const DEFAULT_SENSOR_PORT: u16 = 80;
pub const DEFAULT_SENSOR_PATH: &str = "/";
pub const DEFAULT_CLOUD_ENDPOINT: &str = "http://api.thingspeak.com/update";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 10;
pub const DEFAULT_AUDIT_LOG: &str = "sensor_log.txt";

const MAX_TIMEOUT_SECONDS: u64 = 300;

/// Fully resolved settings for one relay run.
#[derive(Debug, Clone)]
pub struct RelayConfig {
    pub sensor_host: String,
    pub sensor_port: u16,
    pub sensor_path: String,
    pub labels: Labels,
    pub cloud_endpoint: String,
    pub write_key: String,
    pub timeout_seconds: u64,
    /// `None` disables the audit log.
    pub audit_log: Option<PathBuf>,
}

impl RelayConfig {
    pub fn sensor_url(&self) -> Result<Url> {
        let path = if self.sensor_path.starts_with('/') {
            self.sensor_path.clone()
        } else {
            format!("/{}", self.sensor_path)
        };
        // IPv6 literals need brackets in the authority part.
        let host = if self.sensor_host.contains(':') && !self.sensor_host.starts_with('[') {
            format!("[{}]", self.sensor_host)
        } else {
            self.sensor_host.clone()
        };
        let raw = format!("http://{}:{}{}", host, self.sensor_port, path);
        validate_url("sensor", &raw)
    }

    pub fn cloud_url(&self) -> Result<Url> {
        validate_url("cloud.endpoint", &self.cloud_endpoint)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

impl Validate for RelayConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("sensor.host", &self.sensor_host)?;
        if self.sensor_port == 0 {
            return Err(RelayError::InvalidConfigValueError {
                field: "sensor.port".to_string(),
                value: "0".to_string(),
                reason: "Port must be non-zero".to_string(),
            });
        }
        self.sensor_url()?;

        // Labels keep their trailing whitespace, only all-blank labels are rejected.
        validate_non_empty_string("sensor.temperature_label", &self.labels.temperature)?;
        validate_non_empty_string("sensor.humidity_label", &self.labels.humidity)?;

        self.cloud_url()?;
        validate_non_empty_string("cloud.write_key", &self.write_key)?;
        validate_range(
            "timeout_seconds",
            self.timeout_seconds,
            1,
            MAX_TIMEOUT_SECONDS,
        )?;

        if let Some(path) = &self.audit_log {
            validate_path("audit.path", &path.to_string_lossy())?;
        }

        Ok(())
    }
}

#[cfg(test)]
pub(crate) fn sample_config() -> RelayConfig {
    RelayConfig {
        sensor_host: "127.0.0.1".to_string(),
        sensor_port: 8080,
        sensor_path: "/".to_string(),
        labels: Labels::default(),
        cloud_endpoint: "http://127.0.0.1:9090/update".to_string(),
        write_key: "ABCDEF0123456789".to_string(),
        timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
        audit_log: None,
    }
}
