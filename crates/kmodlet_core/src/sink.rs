//! Host-owned diagnostic sink contract.
//!
//! # Responsibility
//! - Define the single append operation modules use for diagnostics.
//! - Provide the host-side routing sink and an in-memory capture sink.
//!
//! # Invariants
//! - Appends are best-effort; callers get no actionable return value.
//! - Every sink is safe for concurrent append; modules never coordinate
//!   locking around it themselves.

use serde::{Deserialize, Serialize};
use std::sync::Mutex;

/// Severity class attached to every appended diagnostic line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Debug,
    Info,
    Warn,
    Error,
}

impl Severity {
    /// Stable string id used in captured transcripts.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }

    fn log_level(self) -> log::Level {
        match self {
            Self::Debug => log::Level::Debug,
            Self::Info => log::Level::Info,
            Self::Warn => log::Level::Warn,
            Self::Error => log::Level::Error,
        }
    }
}

/// Append-only diagnostic channel owned by the host.
///
/// Modules write human-readable status lines here and nowhere else. Delivery
/// is best-effort: a sink may drop lines, and callers cannot observe that.
pub trait LogSink: Send + Sync {
    fn append(&self, severity: Severity, line: &str);
}

/// Production sink routing module diagnostics into the process log facade.
#[derive(Debug, Default)]
pub struct HostLogSink;

impl HostLogSink {
    pub fn new() -> Self {
        Self
    }
}

impl LogSink for HostLogSink {
    fn append(&self, severity: Severity, line: &str) {
        log::log!(target: "kmodlet::sink", severity.log_level(), "{line}");
    }
}

/// One captured diagnostic line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SinkRecord {
    pub severity: Severity,
    pub line: String,
}

/// Capture sink for the host simulator and tests.
#[derive(Debug, Default)]
pub struct MemorySink {
    records: Mutex<Vec<SinkRecord>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all captured lines in append order.
    pub fn records(&self) -> Vec<SinkRecord> {
        self.records
            .lock()
            .map(|records| records.clone())
            .unwrap_or_default()
    }

    /// Number of captured lines containing `needle`.
    pub fn count_containing(&self, needle: &str) -> usize {
        self.records()
            .iter()
            .filter(|record| record.line.contains(needle))
            .count()
    }

    pub fn len(&self) -> usize {
        self.records.lock().map(|records| records.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl LogSink for MemorySink {
    fn append(&self, severity: Severity, line: &str) {
        // Best-effort contract: a poisoned lock drops the line instead of
        // propagating a panic into the hook that appended it.
        if let Ok(mut records) = self.records.lock() {
            records.push(SinkRecord {
                severity,
                line: line.to_string(),
            });
        }
    }
}
