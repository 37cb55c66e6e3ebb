use crate::error::PoaError;
use thiserror::Error;

/// Error types for lifecycle state machine operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StateMachineError {
    #[error("Invalid transition from {from} on event {event}")]
    InvalidTransition { from: String, event: String },

    #[error("Event {event_id} has no approval decision to gate execution")]
    UnresolvedApproval { event_id: i64 },

    #[error("No event dates selected for the operation")]
    NoDatesSelected,

    #[error("Event date {event_date_id} not found on the event")]
    DateNotFound { event_date_id: i64 },

    #[error("Event date {event_date_id} appears more than once in the selection")]
    DuplicateDate { event_date_id: i64 },

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias for state machine operations
pub type StateMachineResult<T> = Result<T, StateMachineError>;

/// Helper to build an invalid-transition error from a state and event
pub fn invalid_transition(
    from: impl std::fmt::Display,
    event: impl Into<String>,
) -> StateMachineError {
    StateMachineError::InvalidTransition {
        from: from.to_string(),
        event: event.into(),
    }
}

impl From<StateMachineError> for PoaError {
    fn from(err: StateMachineError) -> Self {
        PoaError::StateTransitionError(format!("{err}"))
    }
}
