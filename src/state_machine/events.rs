use chrono::{DateTime, Utc};

/// Transition triggers for an event date's lifecycle.
///
/// Each variant names the user action that drives the transition; the
/// guard decides whether the current state permits it.
#[derive(Debug, Clone, PartialEq)]
pub enum EventDateEvent {
    /// Begin executing a planned date. When no explicit start is supplied
    /// the planned start is used.
    StartExecution {
        execution_start: Option<DateTime<Utc>>,
    },
    /// Roll an executing date back to planned, clearing execution timestamps
    RevertToPlanned,
    /// Record completion evidence and close out an executing date
    Finish { end_date: DateTime<Utc> },
    /// Reopen a finished date for evidence correction
    RestoreToExecuting,
    /// Permanently exclude the date from the lifecycle
    Cancel,
}

impl EventDateEvent {
    /// Short name used in log records and error messages
    pub fn name(&self) -> &'static str {
        match self {
            Self::StartExecution { .. } => "start_execution",
            Self::RevertToPlanned => "revert_to_planned",
            Self::Finish { .. } => "finish",
            Self::RestoreToExecuting => "restore_to_executing",
            Self::Cancel => "cancel",
        }
    }
}
