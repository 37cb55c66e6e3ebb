//! # Domain Models
//!
//! Serde types mirroring the backend API's wire shapes. The backend owns
//! all durable state; these values are read from it, transformed locally,
//! and submitted back as full-replacement payloads.

pub mod approval_decision;
pub mod context;
pub mod event;
pub mod event_date;
pub mod financing_allocation;
pub mod records;

pub use approval_decision::ApprovalDecision;
pub use context::PoaContext;
pub use event::{Event, Responsible};
pub use event_date::EventDate;
pub use financing_allocation::FinancingAllocation;
pub use records::{
    DateExecution, EvidenceFile, ExecutionFinancing, ExecutionRecord, FinalizationRecord,
};
