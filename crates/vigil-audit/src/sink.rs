//! Audit sink trait and backends.

use std::collections::HashMap;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::error::AuditResult;

/// Destination for audit records.
///
/// Implementations must append exactly one newline-delimited JSON record per
/// call and create any intermediate directories on first use. Concurrent
/// writers are the implementation's problem, not the caller's.
pub trait AuditSink: Send + Sync {
    /// Append one record to the named log.
    ///
    /// # Errors
    ///
    /// Returns an error if the record cannot be persisted.
    fn append(&self, log_name: &str, record: &serde_json::Value) -> AuditResult<()>;
}

/// File-backed sink writing newline-delimited JSON under one directory.
#[derive(Debug, Clone)]
pub struct JsonlSink {
    dir: PathBuf,
}

impl JsonlSink {
    /// Create a sink rooted at `dir`. The directory is created lazily on the
    /// first append.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The directory this sink writes into.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl AuditSink for JsonlSink {
    fn append(&self, log_name: &str, record: &serde_json::Value) -> AuditResult<()> {
        std::fs::create_dir_all(&self.dir)?;
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(self.dir.join(log_name))?;
        let line = serde_json::to_string(record)?;
        writeln!(file, "{line}")?;
        Ok(())
    }
}

/// In-memory sink for tests.
#[derive(Debug, Default)]
pub struct MemorySink {
    records: Mutex<HashMap<String, Vec<serde_json::Value>>>,
}

impl MemorySink {
    /// Create an empty in-memory sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records appended to the named log so far.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn records(&self, log_name: &str) -> Vec<serde_json::Value> {
        self.records
            .lock()
            .expect("audit sink lock poisoned")
            .get(log_name)
            .cloned()
            .unwrap_or_default()
    }
}

impl AuditSink for MemorySink {
    fn append(&self, log_name: &str, record: &serde_json::Value) -> AuditResult<()> {
        self.records
            .lock()
            .expect("audit sink lock poisoned")
            .entry(log_name.to_string())
            .or_default()
            .push(record.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creates_log_file_and_directories() {
        let dir = tempfile::tempdir().unwrap();
        let sink = JsonlSink::new(dir.path().join("deep").join("nested"));

        sink.append("test.jsonl", &serde_json::json!({"event": "test", "value": 123}))
            .unwrap();

        let content =
            std::fs::read_to_string(dir.path().join("deep/nested/test.jsonl")).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(content.trim()).unwrap();
        assert_eq!(parsed, serde_json::json!({"event": "test", "value": 123}));
    }

    #[test]
    fn appends_one_line_per_record() {
        let dir = tempfile::tempdir().unwrap();
        let sink = JsonlSink::new(dir.path());

        sink.append("test.jsonl", &serde_json::json!({"entry": 1}))
            .unwrap();
        sink.append("test.jsonl", &serde_json::json!({"entry": 2}))
            .unwrap();

        let content = std::fs::read_to_string(dir.path().join("test.jsonl")).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);
        let first: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        let second: serde_json::Value = serde_json::from_str(lines[1]).unwrap();
        assert_eq!(first["entry"], 1);
        assert_eq!(second["entry"], 2);
    }

    #[test]
    fn logs_are_independent() {
        let dir = tempfile::tempdir().unwrap();
        let sink = JsonlSink::new(dir.path());

        sink.append("a.jsonl", &serde_json::json!({"log": "a"}))
            .unwrap();
        sink.append("b.jsonl", &serde_json::json!({"log": "b"}))
            .unwrap();

        assert!(dir.path().join("a.jsonl").exists());
        assert!(dir.path().join("b.jsonl").exists());
    }

    #[test]
    fn memory_sink_collects_records() {
        let sink = MemorySink::new();
        sink.append("test.jsonl", &serde_json::json!({"entry": 1}))
            .unwrap();
        sink.append("test.jsonl", &serde_json::json!({"entry": 2}))
            .unwrap();

        let records = sink.records("test.jsonl");
        assert_eq!(records.len(), 2);
        assert!(sink.records("other.jsonl").is_empty());
    }
}
