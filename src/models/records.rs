//! Ephemeral mutation payloads.
//!
//! Constructed client-side, consumed by a single API call, never retained.
//! Both record types carry full replacement sets: the backend replaces the
//! relevant sub-collection wholesale rather than merging deltas.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The payload submitted when marking an event as executing.
///
/// Replace-don't-patch: `event_execution_financings` supersedes the
/// event's entire allocation set, and `event_dates_with_execution` names
/// every date entering execution in this mutation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionRecord {
    pub event_id: i64,
    pub event_dates_with_execution: Vec<DateExecution>,
    pub event_execution_financings: Vec<ExecutionFinancing>,
}

/// One execution-start entry per selected event date
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateExecution {
    pub event_id: i64,
    pub event_date_id: i64,
    pub execution_start_date: DateTime<Utc>,
}

/// One financing contribution in the replacement set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionFinancing {
    pub event_id: i64,
    pub amount: f64,
    pub percentage: f64,
    pub financing_source_id: i64,
}

/// The payload submitted when closing out a single event date.
///
/// Finalization is date-granular: different occurrences of a recurring
/// event finish independently.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinalizationRecord {
    pub event_id: i64,
    pub event_date_id: i64,
    pub end_date: DateTime<Utc>,
}

/// An in-memory evidence attachment, streamed as one multipart part
#[derive(Debug, Clone, PartialEq)]
pub struct EvidenceFile {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl EvidenceFile {
    pub fn new(
        file_name: impl Into<String>,
        content_type: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: content_type.into(),
            bytes,
        }
    }
}
