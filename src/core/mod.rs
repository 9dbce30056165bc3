pub mod extractor;
pub mod relay;

pub use crate::domain::model::{Labels, PublishReceipt, RawResponse, Reading, RunReport};
pub use crate::domain::ports::{AuditLog, SensorSource, TelemetrySink};
pub use crate::utils::error::Result;
