//! # Lifecycle Orchestrators
//!
//! Drive events through the execution and finalization lifecycle. Each
//! operation validates locally (approval gate, date guards, financing
//! reconciliation), submits one full-replacement mutation, and refetches
//! the event list from the authoritative backend. Nothing is mutated
//! locally ahead of backend confirmation, so failures need no rollback.

pub mod execution;
pub mod finalization;

pub use execution::ExecutionOrchestrator;
pub use finalization::FinalizationOrchestrator;
