//! Best-effort audit trail of calculations.
//!
//! After a successful calculation the API appends an `{input, result}` record
//! to an append-only sink. Persistence is explicitly fire-and-forget: the
//! response is already built when the write is dispatched, and a failed write
//! is logged and swallowed, never surfaced to the caller.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;
use std::sync::Mutex;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{CalculationInput, WageAssessment};

/// One audit record: the calculation input and its result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditRecord {
    /// Unique identifier for this calculation.
    pub id: Uuid,
    /// When the calculation completed.
    pub timestamp: DateTime<Utc>,
    /// The coerced input the engine received.
    pub input: CalculationInput,
    /// The assessment returned to the caller.
    pub result: WageAssessment,
}

impl AuditRecord {
    /// Creates a record for a just-completed calculation.
    pub fn new(input: CalculationInput, result: WageAssessment) -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            input,
            result,
        }
    }
}

/// An append-only destination for audit records.
///
/// Implementations must be safe to share across request handlers. The engine
/// itself has no dependency on any sink succeeding.
pub trait AuditSink: Send + Sync {
    /// Appends one record. Callers treat failure as best-effort and log it.
    fn append(&self, record: &AuditRecord) -> io::Result<()>;
}

/// Audit sink that appends NDJSON lines to a writer.
///
/// One JSON object per line; writes are serialized through a mutex so the
/// sink can be shared across concurrent handlers.
pub struct JsonlAuditSink {
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonlAuditSink {
    /// Opens (or creates) the audit log file at `path` in append mode.
    pub fn open<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            writer: Mutex::new(Box::new(file)),
        })
    }

    /// Creates a sink over a custom writer (for testing).
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }
}

impl AuditSink for JsonlAuditSink {
    fn append(&self, record: &AuditRecord) -> io::Result<()> {
        let line = serde_json::to_string(record)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

        let mut writer = self
            .writer
            .lock()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "audit writer poisoned"))?;
        writeln!(writer, "{line}")?;
        writer.flush()
    }
}
