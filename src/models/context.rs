use serde::{Deserialize, Serialize};

/// The active faculty/year/plan every lifecycle operation runs against.
///
/// Passed explicitly into orchestrator calls; there is no ambient
/// "current POA" state anywhere in this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PoaContext {
    pub faculty_id: i64,
    pub year: i32,
    pub poa_id: i64,
}

impl PoaContext {
    pub fn new(faculty_id: i64, year: i32, poa_id: i64) -> Self {
        Self {
            faculty_id,
            year,
            poa_id,
        }
    }
}
