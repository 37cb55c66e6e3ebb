#![allow(clippy::missing_errors_doc)] // Allow public functions without # Errors sections
#![allow(clippy::must_use_candidate)] // Allow methods without must_use when context is clear

//! # POA Core
//!
//! Event lifecycle and financing-reconciliation core for a university
//! POA (Plan Operativo Anual) portal. Faculties plan yearly events,
//! attach financing, submit them for approval, execute them, and close
//! them out with evidence of completion.
//!
//! ## Overview
//!
//! The authoritative state lives in a backend REST service; this crate is
//! the lifecycle brain on the client side. It owns the pure rules — which
//! events are eligible for execution, how per-date status moves through
//! planned / executing / finished / cancelled, how financing contributions
//! must reconcile against the declared total cost — and the orchestrators
//! that turn user actions into well-formed, full-replacement mutations
//! against that backend.
//!
//! ## Module Organization
//!
//! - [`models`] - Serde domain types mirroring the backend wire shapes
//! - [`state_machine`] - Date lifecycle states, transition guards, ledger
//! - [`approval`] - Approval gate combining decisions with eligibility
//! - [`reconciliation`] - Financing categorization and validation
//! - [`client`] - HTTP client for the authoritative backend
//! - [`orchestration`] - Execution and finalization orchestrators
//! - [`config`] - Environment-driven configuration
//! - [`error`] - Structured error handling
//!
//! ## Design Contracts
//!
//! - **Replace, don't patch**: dates and financings are always submitted
//!   as complete replacement sets, never deltas.
//! - **Validate locally, trust remotely**: reconciliation and transition
//!   checks run before any network call; the backend's rejection is
//!   authoritative and surfaced verbatim.
//! - **No local mutation ahead of confirmation**: every operation
//!   refetches from the backend after a successful write, so failures
//!   never need a rollback.
//! - **No ambient context**: the active `{faculty, year, poa}` is passed
//!   explicitly into every lifecycle operation.

pub mod approval;
pub mod client;
pub mod config;
pub mod constants;
pub mod error;
pub mod logging;
pub mod models;
pub mod orchestration;
pub mod reconciliation;
pub mod state_machine;

pub use approval::ApprovalGate;
pub use client::{ClientError, PoaApiClient, PoaApiConfig};
pub use config::PoaConfig;
pub use constants::{approval_codes, date_codes, status_groups};
pub use error::{PoaError, Result};
pub use models::{
    ApprovalDecision, Event, EventDate, EvidenceFile, ExecutionRecord, FinalizationRecord,
    FinancingAllocation, PoaContext,
};
pub use orchestration::{ExecutionOrchestrator, FinalizationOrchestrator};
pub use reconciliation::{FinancingCategory, ReconciliationError, SourceCategoryTable};
pub use state_machine::{ApprovalState, EventDateState, StateMachineError};
