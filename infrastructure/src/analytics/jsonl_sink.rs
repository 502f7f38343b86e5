//! JSONL file writer for analytics events.
//!
//! Each [`AnalyticsEvent`] is serialized as a single JSON line with a
//! `timestamp` field, appended to the file via a buffered writer.

use quiz_application::ports::analytics::{AnalyticsEvent, AnalyticsSink};
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::warn;

/// JSONL analytics sink that writes one JSON object per line.
///
/// Thread-safe via `Mutex<BufWriter<File>>`. Flushes on `Drop`.
pub struct JsonlAnalyticsSink {
    writer: Mutex<BufWriter<File>>,
    path: PathBuf,
}

impl JsonlAnalyticsSink {
    /// Create a new sink appending to the given path.
    ///
    /// Creates the file (and parent directories) if they don't exist;
    /// events from earlier runs are kept. Returns `None` if the file
    /// cannot be opened — analytics must not keep the quiz from running.
    pub fn new(path: impl AsRef<Path>) -> Option<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && let Err(e) = std::fs::create_dir_all(parent)
        {
            warn!(
                "Could not create analytics log directory {}: {}",
                parent.display(),
                e
            );
            return None;
        }

        let file = match OpenOptions::new().create(true).append(true).open(path) {
            Ok(f) => f,
            Err(e) => {
                warn!("Could not open analytics log file {}: {}", path.display(), e);
                return None;
            }
        };

        Some(Self {
            writer: Mutex::new(BufWriter::new(file)),
            path: path.to_path_buf(),
        })
    }

    /// Get the path to the log file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl AnalyticsSink for JsonlAnalyticsSink {
    fn emit(&self, event: AnalyticsEvent) {
        let timestamp = chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true);

        // Serialize the event and add the timestamp alongside its fields
        let record = match serde_json::to_value(&event) {
            Ok(serde_json::Value::Object(mut map)) => {
                map.insert(
                    "timestamp".to_string(),
                    serde_json::Value::String(timestamp),
                );
                serde_json::Value::Object(map)
            }
            _ => return,
        };

        let Ok(line) = serde_json::to_string(&record) else {
            return;
        };

        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", line);
            // Flush per event — the file doubles as a crash-safe audit trail
            let _ = writer.flush();
        }
    }
}

impl Drop for JsonlAnalyticsSink {
    fn drop(&mut self) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writer.flush();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;

    #[test]
    fn test_jsonl_sink_writes_valid_jsonl() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("events.jsonl");
        let sink = JsonlAnalyticsSink::new(&path).unwrap();

        sink.emit(AnalyticsEvent::quiz_started());
        sink.emit(AnalyticsEvent::quiz_completed("Starter Plan", 5));

        // Flush
        drop(sink);

        let mut content = String::new();
        File::open(&path)
            .unwrap()
            .read_to_string(&mut content)
            .unwrap();

        let lines: Vec<&str> = content.trim().lines().collect();
        assert_eq!(lines.len(), 2);

        // Each line should be valid JSON with category + timestamp
        for line in &lines {
            let value: serde_json::Value = serde_json::from_str(line).unwrap();
            assert!(value.get("category").is_some());
            assert!(value.get("timestamp").is_some());
        }

        let first: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(first["action"], "start_quiz");

        let second: serde_json::Value = serde_json::from_str(lines[1]).unwrap();
        assert_eq!(second["action"], "complete_quiz");
        assert_eq!(second["attributes"]["recommendation"], "Starter Plan");
        assert_eq!(second["attributes"]["answers_count"], 5);
    }

    #[test]
    fn test_jsonl_sink_appends_across_runs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("events.jsonl");

        let first = JsonlAnalyticsSink::new(&path).unwrap();
        first.emit(AnalyticsEvent::quiz_started());
        drop(first);

        let second = JsonlAnalyticsSink::new(&path).unwrap();
        second.emit(AnalyticsEvent::quiz_restarted());
        drop(second);

        let mut content = String::new();
        File::open(&path)
            .unwrap()
            .read_to_string(&mut content)
            .unwrap();

        let lines: Vec<&str> = content.trim().lines().collect();
        assert_eq!(lines.len(), 2, "reopening the log must keep earlier events");

        let first: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(first["action"], "start_quiz");
        let second: serde_json::Value = serde_json::from_str(lines[1]).unwrap();
        assert_eq!(second["action"], "restart_quiz");
    }

    #[test]
    fn test_jsonl_sink_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("deeper").join("events.jsonl");
        let sink = JsonlAnalyticsSink::new(&path).unwrap();
        sink.emit(AnalyticsEvent::quiz_restarted());
        drop(sink);

        assert!(path.exists());
    }
}
