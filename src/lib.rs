pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use crate::adapters::{
    audit_log::{ConfiguredAuditLog, FileAuditLog, NullAuditLog},
    publisher::ThingSpeakPublisher,
    sensor::HttpSensorReader,
};
pub use crate::app::runner::{build_engine, outcome_message, run_once};
pub use crate::config::{toml_config::TomlConfig, RelayConfig};
pub use crate::core::{
    extractor::extract_reading,
    relay::{exit_code, RelayEngine},
};
pub use crate::domain::model::{Labels, PublishReceipt, RawResponse, Reading, RunReport};
pub use crate::utils::error::{ErrorCategory, ExtractionError, RelayError, Result};
