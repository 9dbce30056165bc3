use crate::config::toml_config::TomlConfig;
use crate::config::{
    RelayConfig, DEFAULT_AUDIT_LOG, DEFAULT_CLOUD_ENDPOINT, DEFAULT_SENSOR_HOST,
    DEFAULT_SENSOR_PATH, DEFAULT_SENSOR_PORT, DEFAULT_TIMEOUT_SECONDS,
};
use crate::domain::model::Labels;
use crate::utils::error::Result;
use crate::utils::validation::validate_required_field;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "sensor-relay")]
#[command(about = "Polls a sensor web page and forwards temperature/humidity to a telemetry channel")]
pub struct CliConfig {
    #[arg(
        long,
        env = "RELAY_CONFIG",
        help = "TOML config file; replaces the flags below except --write-key and --no-audit-log"
    )]
    pub config: Option<PathBuf>,

    #[arg(long, env = "SENSOR_HOST", default_value = DEFAULT_SENSOR_HOST)]
    pub sensor_host: String,

    #[arg(long, env = "SENSOR_PORT", default_value_t = DEFAULT_SENSOR_PORT)]
    pub sensor_port: u16,

    #[arg(long, env = "SENSOR_PATH", default_value = DEFAULT_SENSOR_PATH)]
    pub sensor_path: String,

    #[arg(long, env = "THINGSPEAK_ENDPOINT", default_value = DEFAULT_CLOUD_ENDPOINT)]
    pub cloud_endpoint: String,

    #[arg(long, env = "THINGSPEAK_WRITE_KEY", hide_env_values = true)]
    pub write_key: Option<String>,

    #[arg(long, env = "TEMPERATURE_LABEL", default_value = "Temperature: ")]
    pub temperature_label: String,

    #[arg(long, env = "HUMIDITY_LABEL", default_value = "humidity: ")]
    pub humidity_label: String,

    #[arg(long, env = "RELAY_TIMEOUT_SECONDS", default_value_t = DEFAULT_TIMEOUT_SECONDS)]
    pub timeout_seconds: u64,

    #[arg(long, env = "RELAY_AUDIT_LOG", default_value = DEFAULT_AUDIT_LOG)]
    pub audit_log: PathBuf,

    #[arg(long, env = "RELAY_NO_AUDIT_LOG", help = "Do not write the audit log file")]
    pub no_audit_log: bool,

    #[arg(long, env = "RELAY_VERBOSE", help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, env = "RELAY_JSON_LOGS", help = "Emit diagnostics as JSON lines")]
    pub json_logs: bool,
}

impl CliConfig {
    /// Resolves flags (or the config file) into a `RelayConfig`.
    ///
    /// With `--config`, only `--write-key` and `--no-audit-log` are applied on top of the file.
    pub fn resolve(&self) -> Result<RelayConfig> {
        if let Some(path) = &self.config {
            let file = TomlConfig::from_file(path)?;
            let mut config = file.into_relay_config()?;
            if let Some(key) = &self.write_key {
                tracing::debug!("Write key taken from flag/environment over config file");
                config.write_key = key.clone();
            }
            if self.no_audit_log {
                config.audit_log = None;
            }
            return Ok(config);
        }

        let write_key = validate_required_field("write_key", &self.write_key)?;

        Ok(RelayConfig {
            sensor_host: self.sensor_host.clone(),
            sensor_port: self.sensor_port,
            sensor_path: self.sensor_path.clone(),
            labels: Labels {
                temperature: self.temperature_label.clone(),
                humidity: self.humidity_label.clone(),
            },
            cloud_endpoint: self.cloud_endpoint.clone(),
            write_key: write_key.clone(),
            timeout_seconds: self.timeout_seconds,
            audit_log: (!self.no_audit_log).then(|| self.audit_log.clone()),
        })
    }
}
