//! # System Constants
//!
//! Core constants and groupings that define the operational boundaries of
//! the POA event lifecycle.
//!
//! The backend API encodes statuses as bare integers; this module owns the
//! single canonical mapping between those wire codes and the named states,
//! so that no call site ever compares against a literal.

// Re-export state types for convenience
pub use crate::state_machine::{ApprovalState, EventDateState};

/// Lifecycle event names used in structured log records and audit output
pub mod events {
    // Execution lifecycle
    pub const EXECUTION_STARTED: &str = "poa.execution.started";
    pub const EXECUTION_UPDATED: &str = "poa.execution.updated";
    pub const EXECUTION_REVERTED: &str = "poa.execution.reverted";

    // Finalization lifecycle
    pub const FINALIZATION_FINISHED: &str = "poa.finalization.finished";
    pub const FINALIZATION_UPDATED: &str = "poa.finalization.updated";
    pub const FINALIZATION_RESTORED: &str = "poa.finalization.restored";

    // Approval lifecycle
    pub const APPROVAL_RECORDED: &str = "poa.approval.recorded";
}

/// Wire codes for event date statuses as spoken by the backend API
pub mod date_codes {
    pub const PLANNED: i32 = 1;
    pub const EXECUTING: i32 = 2;
    pub const FINISHED: i32 = 3;
    pub const CANCELLED: i32 = 4;
}

/// Wire codes for approval decision statuses as spoken by the backend API
pub mod approval_codes {
    pub const UNDER_REVIEW: i32 = 1;
    pub const APPROVED: i32 = 3;
    pub const REJECTED: i32 = 4;
}

/// Tolerances for financing reconciliation
pub mod reconciliation {
    /// Allocation percentages must sum to this value
    pub const PERCENTAGE_TOTAL: f64 = 100.0;

    /// Tolerance when comparing percentage sums against [`PERCENTAGE_TOTAL`]
    pub const PERCENTAGE_EPSILON: f64 = 0.01;

    /// Tolerance when comparing amount sums against the declared total cost
    pub const AMOUNT_EPSILON: f64 = 0.01;
}

/// Default financing-source category membership.
///
/// Overridable through `PoaConfig`; these defaults mirror the institution's
/// current source table.
pub mod financing_sources {
    pub const INSTITUTIONAL: &[i64] = &[1, 4, 5, 7];
    pub const EXTERNAL: &[i64] = &[2, 3, 6];
}

/// Status groupings for eligibility and validation logic
pub mod status_groups {
    use super::EventDateState;

    /// Date statuses that block an event from being offered for execution
    pub const EXECUTION_BLOCKING_STATES: &[EventDateState] =
        &[EventDateState::Executing, EventDateState::Finished];

    /// Date statuses a finalization may target
    pub const FINALIZABLE_STATES: &[EventDateState] = &[EventDateState::Executing];
}

/// System-wide constants
pub mod system {
    /// Version compatibility marker
    pub const POA_CORE_VERSION: &str = "0.1.0";

    /// User agent prefix for backend API requests
    pub const USER_AGENT_PREFIX: &str = "poa-core";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blocking_group_matches_state_predicate() {
        for state in status_groups::EXECUTION_BLOCKING_STATES {
            assert!(state.blocks_execution());
        }
        for state in status_groups::FINALIZABLE_STATES {
            assert!(state.is_executing());
        }
    }

    #[test]
    fn test_wire_code_tables_are_disjoint_per_enum() {
        let date_codes = [
            date_codes::PLANNED,
            date_codes::EXECUTING,
            date_codes::FINISHED,
            date_codes::CANCELLED,
        ];
        let mut deduped = date_codes.to_vec();
        deduped.dedup();
        assert_eq!(deduped.len(), date_codes.len());

        // Approval code 2 is unassigned in the backend's table
        assert_eq!(approval_codes::UNDER_REVIEW, 1);
        assert_eq!(approval_codes::APPROVED, 3);
        assert_eq!(approval_codes::REJECTED, 4);
    }
}
