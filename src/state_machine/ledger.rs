//! # Event Date Ledger
//!
//! Pure transforms over [`EventDate`] values. No I/O and no side effects:
//! every function either answers a status question or produces a new date
//! value with the transition applied, leaving the input untouched. The
//! backend remains the authority; these transforms shape the payloads
//! submitted to it and mirror its rules for fast local feedback.

use super::errors::StateMachineResult;
use super::events::EventDateEvent;
use super::guards::TransitionGuard;
use crate::models::EventDate;
use chrono::{DateTime, Utc};

/// True iff the date collection qualifies its event for execution start:
/// at least one planned date, and none executing or finished. Cancelled
/// dates are ignored entirely, so an all-cancelled set is ineligible.
pub fn eligible_for_execution(dates: &[EventDate]) -> bool {
    let mut has_planned = false;
    for date in dates {
        if date.status.blocks_execution() {
            return false;
        }
        if date.is_planned() {
            has_planned = true;
        }
    }
    has_planned
}

/// Transition a planned date to executing.
///
/// The execution start defaults to the planned start when none is
/// supplied. Attempting this on a cancelled (or otherwise non-planned)
/// date is an invalid transition.
pub fn mark_executing(
    date: &EventDate,
    execution_start: Option<DateTime<Utc>>,
) -> StateMachineResult<EventDate> {
    let target = TransitionGuard::can_transition(
        date.status,
        &EventDateEvent::StartExecution { execution_start },
    )?;

    let mut next = date.clone();
    next.status = target;
    next.execution_start = Some(execution_start.unwrap_or(date.planned_start));
    Ok(next)
}

/// Roll an executing date back to planned, clearing both execution
/// timestamps. Inverse of [`mark_executing`].
pub fn revert_to_planned(date: &EventDate) -> StateMachineResult<EventDate> {
    let target = TransitionGuard::can_transition(date.status, &EventDateEvent::RevertToPlanned)?;

    let mut next = date.clone();
    next.status = target;
    next.execution_start = None;
    next.execution_end = None;
    Ok(next)
}

/// Close out an executing date with its completion end date.
pub fn mark_finished(date: &EventDate, end_date: DateTime<Utc>) -> StateMachineResult<EventDate> {
    let target = TransitionGuard::can_transition(date.status, &EventDateEvent::Finish { end_date })?;

    let mut next = date.clone();
    next.status = target;
    next.execution_end = Some(end_date);
    Ok(next)
}

/// Reopen a finished date for evidence correction. The execution start is
/// retained; only the end date is cleared.
pub fn restore_to_executing(date: &EventDate) -> StateMachineResult<EventDate> {
    let target =
        TransitionGuard::can_transition(date.status, &EventDateEvent::RestoreToExecuting)?;

    let mut next = date.clone();
    next.status = target;
    next.execution_end = None;
    Ok(next)
}
