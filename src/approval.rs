//! # Approval Gate
//!
//! Reads an event's decision status and combines it with date-ledger
//! eligibility to answer whether the event may enter execution.
//!
//! Decisions are append-only history; the gate consults the most recent
//! decision by timestamp. An event with an empty decision list is an
//! error condition, never a silent default.

use crate::models::{ApprovalDecision, Event};
use crate::state_machine::ledger::eligible_for_execution;
use crate::state_machine::{ApprovalState, StateMachineError, StateMachineResult};
use chrono::{DateTime, Utc};

/// Gate combining approval decisions with date-ledger eligibility
#[derive(Debug)]
pub struct ApprovalGate;

impl ApprovalGate {
    /// The event's governing decision status: the most recent decision by
    /// `decided_at`, with later list position breaking ties (the backend
    /// appends).
    pub fn decision_status(event: &Event) -> StateMachineResult<ApprovalState> {
        event
            .approvals
            .iter()
            .max_by_key(|d| d.decided_at)
            .map(|d| d.status)
            .ok_or(StateMachineError::UnresolvedApproval { event_id: event.id })
    }

    /// True iff the governing decision is approved and the date ledger
    /// still offers the event for execution.
    pub fn can_enter_execution(event: &Event) -> StateMachineResult<bool> {
        let status = Self::decision_status(event)?;
        Ok(status.is_approved() && eligible_for_execution(&event.dates))
    }

    /// Append a new decision to the event's history. Existing decisions
    /// are never mutated.
    pub fn record_decision(
        event: &Event,
        status: ApprovalState,
        decided_at: DateTime<Utc>,
    ) -> Event {
        let mut next = event.clone();
        let next_id = next.approvals.iter().map(|d| d.id).max().unwrap_or(0) + 1;
        next.approvals.push(ApprovalDecision {
            id: next_id,
            event_id: event.id,
            status,
            decided_at,
        });
        tracing::debug!(
            event_id = event.id,
            status = %status,
            "{}", crate::constants::events::APPROVAL_RECORDED
        );
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EventDate;
    use crate::state_machine::EventDateState;
    use chrono::TimeZone;

    fn event_with(approvals: Vec<ApprovalDecision>, dates: Vec<EventDate>) -> Event {
        Event {
            id: 10,
            name: "Science fair".to_string(),
            objective: "Outreach".to_string(),
            total_cost: 1000.0,
            campus_id: 1,
            responsibles: vec![],
            dates,
            financings: vec![],
            approvals,
        }
    }

    fn decision(id: i64, status: ApprovalState, day: u32) -> ApprovalDecision {
        ApprovalDecision {
            id,
            event_id: 10,
            status,
            decided_at: Utc.with_ymd_and_hms(2025, 2, day, 12, 0, 0).unwrap(),
        }
    }

    fn planned_date(id: i64, status: EventDateState) -> EventDate {
        EventDate {
            id,
            event_id: 10,
            planned_start: Utc.with_ymd_and_hms(2025, 3, 10, 9, 0, 0).unwrap(),
            planned_end: Utc.with_ymd_and_hms(2025, 3, 10, 17, 0, 0).unwrap(),
            execution_start: None,
            execution_end: None,
            status,
            change_reason: None,
        }
    }

    #[test]
    fn test_empty_decision_list_is_unresolved() {
        let event = event_with(vec![], vec![planned_date(1, EventDateState::Planned)]);
        assert_eq!(
            ApprovalGate::decision_status(&event).unwrap_err(),
            StateMachineError::UnresolvedApproval { event_id: 10 }
        );
    }

    #[test]
    fn test_most_recent_decision_wins_regardless_of_order() {
        let event = event_with(
            vec![
                decision(2, ApprovalState::Approved, 20),
                decision(1, ApprovalState::UnderReview, 5),
            ],
            vec![],
        );
        assert_eq!(
            ApprovalGate::decision_status(&event).unwrap(),
            ApprovalState::Approved
        );
    }

    #[test]
    fn test_can_enter_execution_requires_both_conditions() {
        let approved = vec![decision(1, ApprovalState::Approved, 5)];

        let ok = event_with(
            approved.clone(),
            vec![planned_date(1, EventDateState::Planned)],
        );
        assert!(ApprovalGate::can_enter_execution(&ok).unwrap());

        let executing = event_with(
            approved.clone(),
            vec![planned_date(1, EventDateState::Executing)],
        );
        assert!(!ApprovalGate::can_enter_execution(&executing).unwrap());

        let under_review = event_with(
            vec![decision(1, ApprovalState::UnderReview, 5)],
            vec![planned_date(1, EventDateState::Planned)],
        );
        assert!(!ApprovalGate::can_enter_execution(&under_review).unwrap());
    }

    #[test]
    fn test_cancelled_only_dates_block_regardless_of_approval() {
        let event = event_with(
            vec![decision(1, ApprovalState::Approved, 5)],
            vec![planned_date(1, EventDateState::Cancelled)],
        );
        assert!(!ApprovalGate::can_enter_execution(&event).unwrap());
    }

    #[test]
    fn test_record_decision_appends_without_mutating_history() {
        let event = event_with(vec![decision(1, ApprovalState::UnderReview, 5)], vec![]);
        let decided_at = Utc.with_ymd_and_hms(2025, 2, 20, 12, 0, 0).unwrap();
        let next = ApprovalGate::record_decision(&event, ApprovalState::Approved, decided_at);

        assert_eq!(next.approvals.len(), 2);
        assert_eq!(next.approvals[0], event.approvals[0]);
        assert_eq!(
            ApprovalGate::decision_status(&next).unwrap(),
            ApprovalState::Approved
        );
    }
}
