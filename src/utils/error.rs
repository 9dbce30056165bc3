use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractionError {
    #[error("label {label:?} not found in sensor response")]
    LabelNotFound { label: String },

    #[error("no digits follow label {label:?}")]
    MissingDigits { label: String },

    #[error("value {digits} after label {label:?} is out of range")]
    OutOfRange { label: String, digits: String },
}

#[derive(Error, Debug)]
pub enum RelayError {
    #[error("Sensor connection failed ({url}): {source}")]
    SensorConnectionError {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Sensor replied with unexpected status {status} ({url})")]
    SensorStatusError { url: String, status: StatusCode },

    #[error("Extraction failed: {0}")]
    ExtractionError(#[from] ExtractionError),

    #[error("Cloud connection failed ({url}): {source}")]
    CloudConnectionError {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Cloud replied with unexpected status {status} ({url})")]
    CloudStatusError { url: String, status: StatusCode },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Missing configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid configuration value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Sensor,
    Extraction,
    Cloud,
    Configuration,
    System,
}

impl RelayError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            RelayError::SensorConnectionError { .. } | RelayError::SensorStatusError { .. } => {
                ErrorCategory::Sensor
            }
            RelayError::ExtractionError(_) => ErrorCategory::Extraction,
            RelayError::CloudConnectionError { .. } | RelayError::CloudStatusError { .. } => {
                ErrorCategory::Cloud
            }
            RelayError::ConfigError { .. }
            | RelayError::MissingConfigError { .. }
            | RelayError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            RelayError::IoError(_) => ErrorCategory::System,
        }
    }

    /// Line written to the audit log and to stdout when a run ends on this error.
    pub fn audit_message(&self) -> String {
        match self {
            RelayError::SensorConnectionError { .. } => {
                "Could not connect to the sensor web server.".to_string()
            }
            RelayError::SensorStatusError { status, .. } => {
                format!("Sensor web server gave a bad HTTP reply ({}).", status)
            }
            RelayError::ExtractionError(e) => format!("Could not extract reading: {}.", e),
            RelayError::CloudConnectionError { .. } => {
                "Could not connect to the telemetry server.".to_string()
            }
            RelayError::CloudStatusError { status, .. } => format!(
                "Data not sent to the telemetry server, bad HTTP reply ({}).",
                status
            ),
            other => format!("Run aborted: {}.", other),
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Sensor => format!("Sensor unavailable: {}", self),
            ErrorCategory::Extraction => format!("Sensor data unreadable: {}", self),
            ErrorCategory::Cloud => format!("Upload failed: {}", self),
            ErrorCategory::Configuration => format!("Invalid configuration: {}", self),
            ErrorCategory::System => format!("System error: {}", self),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            RelayError::SensorConnectionError { .. } => {
                "Check that the sensor is powered and reachable at the configured host/port"
            }
            RelayError::SensorStatusError { .. } => {
                "Check the sensor firmware serves readings on the configured path"
            }
            RelayError::ExtractionError(_) => {
                "Check the temperature/humidity labels match the sensor page"
            }
            RelayError::CloudConnectionError { .. } => {
                "Check network access to the telemetry endpoint; the next run will retry"
            }
            RelayError::CloudStatusError { .. } => {
                "Check the write key and the channel's update rate limit"
            }
            RelayError::IoError(_) => "Check file permissions and free disk space",
            RelayError::ConfigError { .. }
            | RelayError::MissingConfigError { .. }
            | RelayError::InvalidConfigValueError { .. } => {
                "Fix the flag, environment variable or config file entry named above"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, RelayError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categories_are_distinct_per_hop() {
        let sensor = RelayError::SensorStatusError {
            url: "http://sensor/".to_string(),
            status: StatusCode::NOT_FOUND,
        };
        let cloud = RelayError::CloudStatusError {
            url: "http://cloud/update".to_string(),
            status: StatusCode::INTERNAL_SERVER_ERROR,
        };

        assert_eq!(sensor.category(), ErrorCategory::Sensor);
        assert_eq!(cloud.category(), ErrorCategory::Cloud);
        assert_ne!(sensor.audit_message(), cloud.audit_message());
    }

    #[test]
    fn test_extraction_error_message_names_label() {
        let e = RelayError::from(ExtractionError::LabelNotFound {
            label: "humidity: ".to_string(),
        });
        assert_eq!(e.category(), ErrorCategory::Extraction);
        assert!(e.audit_message().contains("humidity: "));
    }
}
