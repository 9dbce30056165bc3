use crate::core::AuditLog;
use chrono::Local;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

const TIMESTAMP_PATTERN: &str = "%Y-%m-%d %H:%M:%S%.6f";

/// Appends `[timestamp] message` lines to a plain text file.
///
/// The file is opened, appended and closed for every message. Write failures
/// are reported through tracing and otherwise ignored so the run continues.
#[derive(Debug, Clone)]
pub struct FileAuditLog {
    path: PathBuf,
}

impl FileAuditLog {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn append(&self, message: &str) -> std::io::Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        let line = format!("[{}] {}\n", Local::now().format(TIMESTAMP_PATTERN), message);
        file.write_all(line.as_bytes())
    }
}

impl AuditLog for FileAuditLog {
    fn record(&self, message: &str) {
        if let Err(e) = self.append(message) {
            tracing::warn!(
                "Could not append to audit log {}: {}",
                self.path.display(),
                e
            );
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NullAuditLog;

impl AuditLog for NullAuditLog {
    fn record(&self, _message: &str) {}
}

/// Audit sink chosen at runtime from configuration.
#[derive(Debug, Clone)]
pub enum ConfiguredAuditLog {
    File(FileAuditLog),
    Disabled(NullAuditLog),
}

impl ConfiguredAuditLog {
    pub fn from_path(path: Option<&Path>) -> Self {
        match path {
            Some(p) => ConfiguredAuditLog::File(FileAuditLog::new(p)),
            None => ConfiguredAuditLog::Disabled(NullAuditLog),
        }
    }
}

impl AuditLog for ConfiguredAuditLog {
    fn record(&self, message: &str) {
        match self {
            ConfiguredAuditLog::File(log) => log.record(message),
            ConfiguredAuditLog::Disabled(log) => log.record(message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use regex::Regex;
    use tempfile::TempDir;

    #[test]
    fn test_appends_timestamped_lines() {
        let dir = TempDir::new().unwrap();
        let log = FileAuditLog::new(dir.path().join("sensor_log.txt"));

        log.record("first");
        log.record("second");

        let content = std::fs::read_to_string(log.path()).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);

        let re = Regex::new(r"^\[\d{4}-\d{2}-\d{2} \d{2}:\d{2}:\d{2}\.\d{6}\] (.+)$").unwrap();
        assert_eq!(&re.captures(lines[0]).unwrap()[1], "first");
        assert_eq!(&re.captures(lines[1]).unwrap()[1], "second");
    }

    #[test]
    fn test_keeps_existing_content() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("sensor_log.txt");
        std::fs::write(&path, "[earlier] old line\n").unwrap();

        FileAuditLog::new(&path).record("new line");

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("[earlier] old line\n"));
        assert!(content.trim_end().ends_with("] new line"));
    }

    #[test]
    fn test_unwritable_path_is_soft_failure() {
        let dir = TempDir::new().unwrap();
        let log = FileAuditLog::new(dir.path().join("missing-dir").join("log.txt"));
        log.record("dropped");
        assert!(!log.path().exists());
    }

    #[test]
    fn test_disabled_log_writes_nothing() {
        let log = ConfiguredAuditLog::from_path(None);
        log.record("nothing");
        assert!(matches!(log, ConfiguredAuditLog::Disabled(_)));
    }
}
