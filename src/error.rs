use std::fmt;

/// Top-level error taxonomy for the POA lifecycle core.
///
/// Module-level errors (`StateMachineError`, `ReconciliationError`,
/// `ClientError`) convert into these variants at the crate boundary.
#[derive(Debug, Clone, PartialEq)]
pub enum PoaError {
    /// A state change was attempted that the lifecycle does not permit.
    StateTransitionError(String),
    /// A local validation check failed before any network call was made.
    ValidationError(String),
    /// The authoritative backend declined the mutation; the message is
    /// the backend's response body, surfaced verbatim.
    BackendRejected(String),
    /// Transport-level failure talking to the backend API.
    ApiError(String),
    /// An orchestration step could not proceed.
    OrchestrationError(String),
    ConfigurationError(String),
}

impl fmt::Display for PoaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PoaError::StateTransitionError(msg) => write!(f, "State transition error: {msg}"),
            PoaError::ValidationError(msg) => write!(f, "Validation error: {msg}"),
            PoaError::BackendRejected(msg) => write!(f, "Backend rejected: {msg}"),
            PoaError::ApiError(msg) => write!(f, "API error: {msg}"),
            PoaError::OrchestrationError(msg) => write!(f, "Orchestration error: {msg}"),
            PoaError::ConfigurationError(msg) => write!(f, "Configuration error: {msg}"),
        }
    }
}

impl std::error::Error for PoaError {}

pub type Result<T> = std::result::Result<T, PoaError>;
