// State machine module for the event date lifecycle
//
// Pure state-transition logic: named states, transition events, a guard
// table, and the date ledger transforms the orchestrators build payloads
// from. The authoritative backend re-validates every transition.

pub mod errors;
pub mod events;
pub mod guards;
pub mod ledger;
pub mod states;

// Re-export main types for convenient access
pub use errors::{StateMachineError, StateMachineResult};
pub use events::EventDateEvent;
pub use guards::TransitionGuard;
pub use states::{ApprovalState, EventDateState};
