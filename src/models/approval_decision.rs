use crate::state_machine::ApprovalState;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The outcome of one review pass over an event.
///
/// Decisions are append-only; the gate reads the most recent decision by
/// `decided_at`, never by list position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApprovalDecision {
    pub id: i64,
    pub event_id: i64,
    #[serde(rename = "approvalStatusId")]
    pub status: ApprovalState,
    pub decided_at: DateTime<Utc>,
}
