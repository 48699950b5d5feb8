//! Append-only audit trail of blocklist operations.
//!
//! The sink is injected into the manager rather than configured as a
//! process-wide logger, so tests capture records without touching any
//! global state.

use chrono::Local;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;

/// Destination for one-line records of mutations and rejected inputs.
pub trait AuditSink: Send + Sync {
    /// Record a single audit message.
    fn record(&self, message: &str);
}

/// File-backed sink appending timestamped lines.
///
/// Appends are best-effort: a failure is reported through tracing and
/// never fails the operation that produced the record.
pub struct FileAudit {
    path: PathBuf,
}

impl FileAudit {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    fn append(&self, message: &str) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{} {}", Local::now().format("%Y-%m-%d %H:%M:%S"), message)
    }
}

impl AuditSink for FileAudit {
    fn record(&self, message: &str) {
        if let Err(e) = self.append(message) {
            tracing::warn!(
                "Failed to append audit record to {}: {}",
                self.path.display(),
                e
            );
        }
    }
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::sync::{Arc, Mutex};

    /// In-memory sink capturing records for assertions.
    ///
    /// Clones share the same buffer, so a test can keep a handle after
    /// moving the sink into the manager.
    #[derive(Clone, Default)]
    pub struct MemoryAudit {
        records: Arc<Mutex<Vec<String>>>,
    }

    impl MemoryAudit {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn records(&self) -> Vec<String> {
            self.records.lock().unwrap().clone()
        }
    }

    impl AuditSink for MemoryAudit {
        fn record(&self, message: &str) {
            self.records.lock().unwrap().push(message.to_string());
        }
    }
}
