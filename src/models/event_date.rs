use crate::state_machine::EventDateState;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One scheduled occurrence of an event, with its own lifecycle status.
///
/// Created in `Planned` state alongside its event. Execution timestamps
/// stay `None` until the execution orchestrator records a start; a
/// `Cancelled` date is permanently excluded from eligibility computations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDate {
    pub id: i64,
    pub event_id: i64,
    pub planned_start: DateTime<Utc>,
    pub planned_end: DateTime<Utc>,
    pub execution_start: Option<DateTime<Utc>>,
    pub execution_end: Option<DateTime<Utc>>,
    #[serde(rename = "statusId")]
    pub status: EventDateState,
    /// Reason supplied when the date was manually changed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub change_reason: Option<String>,
}

impl EventDate {
    pub fn is_planned(&self) -> bool {
        self.status.is_planned()
    }

    pub fn is_executing(&self) -> bool {
        self.status.is_executing()
    }

    pub fn is_finished(&self) -> bool {
        self.status.is_finished()
    }

    pub fn is_cancelled(&self) -> bool {
        self.status.is_cancelled()
    }
}
