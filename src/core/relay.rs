use crate::core::extractor::extract_reading;
use crate::core::{AuditLog, Labels, RunReport, SensorSource, TelemetrySink};
use crate::utils::error::Result;

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILURE: i32 = 1;

pub const PUBLISH_SUCCESS_MESSAGE: &str = "Data sent to the telemetry server.";

/// Runs one poll: fetch the sensor page, extract the reading, publish it.
pub struct RelayEngine<S: SensorSource, T: TelemetrySink, L: AuditLog> {
    source: S,
    sink: T,
    audit: L,
    labels: Labels,
}

impl<S: SensorSource, T: TelemetrySink, L: AuditLog> RelayEngine<S, T, L> {
    pub fn new(source: S, sink: T, audit: L, labels: Labels) -> Self {
        Self {
            source,
            sink,
            audit,
            labels,
        }
    }

    pub fn audit(&self) -> &L {
        &self.audit
    }

    /// Every exit point writes exactly one terminal line to the audit log.
    pub async fn run(&self) -> Result<RunReport> {
        match self.relay().await {
            Ok(report) => {
                self.audit.record(PUBLISH_SUCCESS_MESSAGE);
                Ok(report)
            }
            Err(e) => {
                tracing::error!(
                    "❌ Relay run failed: {} (Category: {:?})",
                    e,
                    e.category()
                );
                self.audit.record(&e.audit_message());
                Err(e)
            }
        }
    }

    async fn relay(&self) -> Result<RunReport> {
        tracing::debug!("Polling sensor...");
        let raw = self.source.fetch().await?;
        tracing::debug!("Received {} bytes from {}", raw.body.len(), raw.url);

        let reading = extract_reading(&raw.body, &self.labels)?;
        tracing::info!(
            "🌡️ Extracted reading: temperature={} humidity={}",
            reading.temperature,
            reading.humidity
        );
        self.audit.record(&format!(
            "Reading extracted: temperature={} humidity={}",
            reading.temperature, reading.humidity
        ));

        let receipt = self.sink.publish(&reading).await?;
        match receipt.entry_id {
            Some(0) => tracing::warn!("Telemetry server accepted the post but stored no entry"),
            Some(id) => tracing::info!("📤 Published as entry {}", id),
            None => tracing::info!("📤 Published reading"),
        }

        Ok(RunReport { reading, receipt })
    }
}

pub fn exit_code(result: &Result<RunReport>) -> i32 {
    match result {
        Ok(_) => EXIT_SUCCESS,
        Err(_) => EXIT_FAILURE,
    }
}
