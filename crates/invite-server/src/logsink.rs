//! Newline-delimited JSON log files, partitioned by level.

use std::path::{Path, PathBuf};

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tokio::{fs, io::AsyncWriteExt, sync::Mutex};

pub const COMBINED_FILE: &str = "combined.log";
pub const ERROR_FILE: &str = "error.log";

/// One client-submitted log record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    pub level: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<Value>,
}

impl LogEntry {
    /// Lowercase the level and fill a missing timestamp with server time.
    pub fn normalized(mut self) -> Self {
        self.level = self.level.trim().to_ascii_lowercase();
        if self.timestamp.as_deref().map_or(true, |t| t.trim().is_empty()) {
            self.timestamp = Some(Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true));
        }
        self
    }

    pub fn is_error(&self) -> bool {
        self.level == "error"
    }
}

/// Appends entries to `combined.log` and, for errors, `error.log`.
#[derive(Debug)]
pub struct LogSink {
    dir: PathBuf,
    // serializes appends so lines never interleave
    lock: Mutex<()>,
}

impl LogSink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Files an entry of this level belongs to.
    pub fn files_for(entry: &LogEntry) -> &'static [&'static str] {
        if entry.is_error() {
            &[ERROR_FILE, COMBINED_FILE]
        } else {
            &[COMBINED_FILE]
        }
    }

    pub async fn append(&self, entry: &LogEntry) -> std::io::Result<()> {
        let mut line = serde_json::to_vec(entry)?;
        line.push(b'\n');
        let _guard = self.lock.lock().await;
        fs::create_dir_all(&self.dir).await?;
        for name in Self::files_for(entry) {
            let mut file = fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(self.dir.join(name))
                .await?;
            file.write_all(&line).await?;
            file.flush().await?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn entry(level: &str) -> LogEntry {
        LogEntry {
            level: level.into(),
            message: "m".into(),
            timestamp: None,
            error: None,
            context: None,
        }
        .normalized()
    }

    #[test]
    fn normalized_fills_timestamp_and_lowercases() {
        let e = entry(" ERROR ");
        assert_eq!(e.level, "error");
        assert!(e.timestamp.is_some());
        assert!(e.is_error());
    }

    #[test]
    fn explicit_timestamp_is_kept() {
        let e = LogEntry {
            timestamp: Some("2026-01-01T00:00:00Z".into()),
            ..entry("info")
        }
        .normalized();
        assert_eq!(e.timestamp.as_deref(), Some("2026-01-01T00:00:00Z"));
    }

    #[tokio::test]
    async fn info_goes_to_combined_only() {
        let dir = TempDir::new().unwrap();
        let sink = LogSink::new(dir.path().join("nested"));
        sink.append(&entry("info")).await.unwrap();
        sink.append(&entry("warn")).await.unwrap();
        let combined = std::fs::read_to_string(dir.path().join("nested").join(COMBINED_FILE)).unwrap();
        assert_eq!(combined.lines().count(), 2);
        assert!(!dir.path().join("nested").join(ERROR_FILE).exists());
    }

    #[tokio::test]
    async fn errors_go_to_both_files() {
        let dir = TempDir::new().unwrap();
        let sink = LogSink::new(dir.path());
        sink.append(&entry("error")).await.unwrap();
        for name in [ERROR_FILE, COMBINED_FILE] {
            let body = std::fs::read_to_string(dir.path().join(name)).unwrap();
            let parsed: LogEntry = serde_json::from_str(body.trim_end()).unwrap();
            assert_eq!(parsed.level, "error");
        }
    }
}
