use crate::domain::model::{PublishReceipt, RawResponse, Reading};
use crate::utils::error::Result;
use async_trait::async_trait;

#[async_trait]
pub trait SensorSource: Send + Sync {
    async fn fetch(&self) -> Result<RawResponse>;
}

#[async_trait]
pub trait TelemetrySink: Send + Sync {
    async fn publish(&self, reading: &Reading) -> Result<PublishReceipt>;
}

/// Append-only audit trail. Implementations must not fail the run.
pub trait AuditLog: Send + Sync {
    fn record(&self, message: &str);
}
