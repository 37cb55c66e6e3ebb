use super::errors::{invalid_transition, StateMachineResult};
use super::events::EventDateEvent;
use super::states::EventDateState;

/// Guard conditions for event date transitions.
///
/// Encodes the legal transition table; everything outside it, and anything
/// out of a terminal state, is rejected.
#[derive(Debug)]
pub struct TransitionGuard;

impl TransitionGuard {
    /// Determine the target state for an event, or reject the transition
    pub fn can_transition(
        from: EventDateState,
        event: &EventDateEvent,
    ) -> StateMachineResult<EventDateState> {
        use EventDateEvent::*;
        use EventDateState::*;

        // Terminal states cannot transition
        if from.is_terminal() {
            return Err(invalid_transition(from, event.name()));
        }

        let target = match (from, event) {
            (Planned, StartExecution { .. }) => Executing,
            (Executing, RevertToPlanned) => Planned,
            (Executing, Finish { .. }) => Finished,
            (Finished, RestoreToExecuting) => Executing,

            // Cancellation from any non-terminal state
            (state, Cancel) if !state.is_terminal() => Cancelled,

            // Invalid combinations
            (from, event) => return Err(invalid_transition(from, event.name())),
        };

        Ok(target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state_machine::errors::StateMachineError;
    use chrono::Utc;

    fn start() -> EventDateEvent {
        EventDateEvent::StartExecution {
            execution_start: None,
        }
    }

    #[test]
    fn test_planned_to_executing() {
        assert_eq!(
            TransitionGuard::can_transition(EventDateState::Planned, &start()).unwrap(),
            EventDateState::Executing
        );
    }

    #[test]
    fn test_executing_round_trip_targets() {
        assert_eq!(
            TransitionGuard::can_transition(
                EventDateState::Executing,
                &EventDateEvent::RevertToPlanned
            )
            .unwrap(),
            EventDateState::Planned
        );
        assert_eq!(
            TransitionGuard::can_transition(
                EventDateState::Executing,
                &EventDateEvent::Finish {
                    end_date: Utc::now()
                }
            )
            .unwrap(),
            EventDateState::Finished
        );
    }

    #[test]
    fn test_finished_restore() {
        assert_eq!(
            TransitionGuard::can_transition(
                EventDateState::Finished,
                &EventDateEvent::RestoreToExecuting
            )
            .unwrap(),
            EventDateState::Executing
        );
    }

    #[test]
    fn test_cancelled_is_terminal() {
        let err =
            TransitionGuard::can_transition(EventDateState::Cancelled, &start()).unwrap_err();
        assert!(matches!(err, StateMachineError::InvalidTransition { .. }));
    }

    #[test]
    fn test_cancel_from_non_terminal() {
        for from in [
            EventDateState::Planned,
            EventDateState::Executing,
            EventDateState::Finished,
        ] {
            assert_eq!(
                TransitionGuard::can_transition(from, &EventDateEvent::Cancel).unwrap(),
                EventDateState::Cancelled
            );
        }
    }

    #[test]
    fn test_invalid_combinations() {
        assert!(TransitionGuard::can_transition(
            EventDateState::Planned,
            &EventDateEvent::Finish {
                end_date: Utc::now()
            }
        )
        .is_err());
        assert!(TransitionGuard::can_transition(
            EventDateState::Finished,
            &EventDateEvent::RevertToPlanned
        )
        .is_err());
        assert!(
            TransitionGuard::can_transition(EventDateState::Executing, &start()).is_err()
        );
    }
}
