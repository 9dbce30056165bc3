use crate::config::{
    RelayConfig, DEFAULT_AUDIT_LOG, DEFAULT_CLOUD_ENDPOINT, DEFAULT_SENSOR_PATH,
    DEFAULT_SENSOR_PORT, DEFAULT_TIMEOUT_SECONDS,
};
use crate::domain::model::Labels;
use crate::utils::error::{RelayError, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub sensor: SensorConfig,
    pub cloud: CloudConfig,
    pub audit: Option<AuditConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SensorConfig {
    pub host: String,
    pub port: Option<u16>,
    pub path: Option<String>,
    pub temperature_label: Option<String>,
    pub humidity_label: Option<String>,
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CloudConfig {
    pub endpoint: Option<String>,
    pub write_key: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditConfig {
    pub enabled: Option<bool>,
    pub path: Option<String>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(RelayError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| RelayError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${THINGSPEAK_WRITE_KEY})
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| RelayError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn into_relay_config(self) -> Result<RelayConfig> {
        let audit = self.audit.unwrap_or(AuditConfig {
            enabled: None,
            path: None,
        });
        let audit_log = if audit.enabled.unwrap_or(true) {
            Some(PathBuf::from(
                audit.path.unwrap_or_else(|| DEFAULT_AUDIT_LOG.to_string()),
            ))
        } else {
            None
        };

        let defaults = Labels::default();
        let write_key = self.cloud.write_key.unwrap_or_default();
        // An unresolved placeholder means the variable was never exported.
        if write_key.starts_with("${") {
            return Err(RelayError::MissingConfigError {
                field: format!("cloud.write_key ({})", write_key),
            });
        }

        Ok(RelayConfig {
            sensor_host: self.sensor.host,
            sensor_port: self.sensor.port.unwrap_or(DEFAULT_SENSOR_PORT),
            sensor_path: self
                .sensor
                .path
                .unwrap_or_else(|| DEFAULT_SENSOR_PATH.to_string()),
            labels: Labels {
                temperature: self.sensor.temperature_label.unwrap_or(defaults.temperature),
                humidity: self.sensor.humidity_label.unwrap_or(defaults.humidity),
            },
            cloud_endpoint: self
                .cloud
                .endpoint
                .unwrap_or_else(|| DEFAULT_CLOUD_ENDPOINT.to_string()),
            write_key,
            timeout_seconds: self
                .sensor
                .timeout_seconds
                .unwrap_or(DEFAULT_TIMEOUT_SECONDS),
            audit_log,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::validation::Validate;

    #[test]
    fn test_parse_full_config() {
        let content = r#"
[sensor]
host = "192.168.1.20"
port = 8080
path = "/data"
temperature_label = "Temp="
humidity_label = "Hum="
timeout_seconds = 5

[cloud]
endpoint = "https://api.thingspeak.com/update"
write_key = "WRITEKEY"

[audit]
enabled = true
path = "/var/log/sensor.txt"
"#;
        let config = TomlConfig::from_toml_str(content)
            .unwrap()
            .into_relay_config()
            .unwrap();

        assert_eq!(config.sensor_host, "192.168.1.20");
        assert_eq!(config.sensor_port, 8080);
        assert_eq!(config.sensor_path, "/data");
        assert_eq!(config.labels.temperature, "Temp=");
        assert_eq!(config.labels.humidity, "Hum=");
        assert_eq!(config.timeout_seconds, 5);
        assert_eq!(config.cloud_endpoint, "https://api.thingspeak.com/update");
        assert_eq!(config.audit_log, Some(PathBuf::from("/var/log/sensor.txt")));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_defaults_fill_missing_fields() {
        let content = r#"
[sensor]
host = "sensor.local"

[cloud]
write_key = "K"
"#;
        let config = TomlConfig::from_toml_str(content)
            .unwrap()
            .into_relay_config()
            .unwrap();

        assert_eq!(config.sensor_port, DEFAULT_SENSOR_PORT);
        assert_eq!(config.labels, Labels::default());
        assert_eq!(config.cloud_endpoint, DEFAULT_CLOUD_ENDPOINT);
        assert_eq!(config.audit_log, Some(PathBuf::from(DEFAULT_AUDIT_LOG)));
    }

    #[test]
    fn test_audit_can_be_disabled() {
        let content = r#"
[sensor]
host = "sensor.local"

[cloud]
write_key = "K"

[audit]
enabled = false
"#;
        let config = TomlConfig::from_toml_str(content)
            .unwrap()
            .into_relay_config()
            .unwrap();
        assert_eq!(config.audit_log, None);
    }

    #[test]
    fn test_env_substitution() {
        std::env::set_var("SENSOR_RELAY_TEST_KEY", "from-env");
        let content = r#"
[sensor]
host = "sensor.local"

[cloud]
write_key = "${SENSOR_RELAY_TEST_KEY}"
"#;
        let config = TomlConfig::from_toml_str(content)
            .unwrap()
            .into_relay_config()
            .unwrap();
        assert_eq!(config.write_key, "from-env");
    }

    #[test]
    fn test_unresolved_placeholder_is_missing_key() {
        let content = r#"
[sensor]
host = "sensor.local"

[cloud]
write_key = "${SENSOR_RELAY_TEST_UNSET_VARIABLE}"
"#;
        let result = TomlConfig::from_toml_str(content)
            .unwrap()
            .into_relay_config();
        assert!(matches!(result, Err(RelayError::MissingConfigError { .. })));
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let result = TomlConfig::from_toml_str("[sensor\nhost = ");
        assert!(matches!(result, Err(RelayError::ConfigError { .. })));
    }
}
