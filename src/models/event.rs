use super::{ApprovalDecision, EventDate, FinancingAllocation};
use serde::{Deserialize, Serialize};

/// A planned activity and the root aggregate all lifecycle operations
/// key off of.
///
/// Events are created by the planning workflow; this crate reads them
/// from the backend, drives their execution/finalization lifecycle, and
/// submits full-replacement mutations back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: i64,
    pub name: String,
    pub objective: String,
    pub total_cost: f64,
    pub campus_id: i64,
    #[serde(default)]
    pub responsibles: Vec<Responsible>,
    #[serde(default)]
    pub dates: Vec<EventDate>,
    #[serde(default)]
    pub financings: Vec<FinancingAllocation>,
    #[serde(default)]
    pub approvals: Vec<ApprovalDecision>,
}

impl Event {
    /// Look up a date on this event by id
    pub fn date(&self, event_date_id: i64) -> Option<&EventDate> {
        self.dates.iter().find(|d| d.id == event_date_id)
    }
}

/// A responsible party attached to an event, by role
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Responsible {
    pub id: i64,
    pub role: String,
    pub name: String,
}
