use crate::adapters::audit_log::ConfiguredAuditLog;
use crate::adapters::publisher::ThingSpeakPublisher;
use crate::adapters::sensor::HttpSensorReader;
use crate::config::RelayConfig;
use crate::core::relay::{RelayEngine, PUBLISH_SUCCESS_MESSAGE};
use crate::core::{AuditLog, RunReport};
use crate::utils::error::Result;

pub type HttpRelayEngine = RelayEngine<HttpSensorReader, ThingSpeakPublisher, ConfiguredAuditLog>;

pub fn build_engine(config: &RelayConfig) -> Result<HttpRelayEngine> {
    let source = HttpSensorReader::new(config)?;
    let sink = ThingSpeakPublisher::new(config)?;
    let audit = ConfiguredAuditLog::from_path(config.audit_log.as_deref());

    tracing::debug!(
        "Relay wired: sensor={} cloud={}",
        source.url(),
        config.cloud_endpoint
    );

    Ok(RelayEngine::new(source, sink, audit, config.labels.clone()))
}

/// Builds the HTTP engine from `config` and performs a single poll-and-publish.
pub async fn run_once(config: &RelayConfig) -> Result<RunReport> {
    let engine = match build_engine(config) {
        Ok(engine) => engine,
        Err(e) => {
            ConfiguredAuditLog::from_path(config.audit_log.as_deref()).record(&e.audit_message());
            return Err(e);
        }
    };

    engine.run().await
}

/// The line printed to stdout for a finished run; identical to the audit entry.
pub fn outcome_message(result: &Result<RunReport>) -> String {
    match result {
        Ok(_) => PUBLISH_SUCCESS_MESSAGE.to_string(),
        Err(e) => e.audit_message(),
    }
}
