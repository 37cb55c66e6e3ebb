use serde::{Deserialize, Serialize};

/// One monetary contribution toward an event's total cost.
///
/// The category (institutional vs external) is not a field on the wire;
/// it is derived from `financing_source_id` through the source category
/// table in the reconciliation module.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancingAllocation {
    pub id: i64,
    pub event_id: i64,
    pub financing_source_id: i64,
    pub amount: f64,
    /// Share of the event's total cost, in the 0-100 range
    pub percentage: f64,
    /// Soft-delete flag; deleted allocations are excluded from
    /// reconciliation and partitioning
    #[serde(default)]
    pub deleted: bool,
}
