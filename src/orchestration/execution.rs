//! # Execution Orchestrator
//!
//! Drives an event from planned to executing: approval gate, date
//! selection, financing reconciliation, then one atomic execution record
//! submitted to the backend.

use chrono::{DateTime, Utc};
use std::collections::HashSet;
use tracing::{info, warn};

use crate::approval::ApprovalGate;
use crate::client::PoaApiClient;
use crate::constants::events as lifecycle_events;
use crate::error::{PoaError, Result};
use crate::models::{
    DateExecution, Event, EvidenceFile, ExecutionFinancing, ExecutionRecord, FinancingAllocation,
    PoaContext,
};
use crate::reconciliation::{self, SourceCategoryTable};
use crate::state_machine::ledger;
use crate::state_machine::StateMachineError;

/// Orchestrates the planned → executing transition at event granularity
#[derive(Debug)]
pub struct ExecutionOrchestrator {
    client: PoaApiClient,
    sources: SourceCategoryTable,
}

impl ExecutionOrchestrator {
    pub fn new(client: PoaApiClient, sources: SourceCategoryTable) -> Self {
        Self { client, sources }
    }

    /// Start executing the selected planned dates of an event.
    ///
    /// All validation runs before the first network call: the approval
    /// gate, the date selection against the event's planned dates, and
    /// the financing reconciliation against the declared total cost. The
    /// submitted financing set replaces the event's allocations wholesale.
    ///
    /// On success the event list is refetched and returned so the caller
    /// sees the authoritative post-mutation state. On failure nothing was
    /// mutated locally and the backend error propagates untouched.
    pub async fn start_execution(
        &self,
        ctx: &PoaContext,
        event: &Event,
        selected_date_ids: &[i64],
        financings: &[FinancingAllocation],
        evidence: &[EvidenceFile],
        execution_start: Option<DateTime<Utc>>,
    ) -> Result<Vec<Event>> {
        if !ApprovalGate::can_enter_execution(event)? {
            warn!(
                event_id = event.id,
                "Execution start refused by approval gate"
            );
            return Err(PoaError::StateTransitionError(format!(
                "Event {} is not eligible to enter execution",
                event.id
            )));
        }

        if selected_date_ids.is_empty() {
            return Err(StateMachineError::NoDatesSelected.into());
        }

        let mut seen = HashSet::new();
        let mut date_executions = Vec::with_capacity(selected_date_ids.len());
        for &date_id in selected_date_ids {
            if !seen.insert(date_id) {
                return Err(StateMachineError::DuplicateDate {
                    event_date_id: date_id,
                }
                .into());
            }
            let date = event
                .date(date_id)
                .ok_or(StateMachineError::DateNotFound {
                    event_date_id: date_id,
                })?;
            let start = execution_start.unwrap_or(date.planned_start);
            ledger::mark_executing(date, Some(start))?;
            date_executions.push(DateExecution {
                event_id: event.id,
                event_date_id: date_id,
                execution_start_date: start,
            });
        }

        reconciliation::validate(financings, event.total_cost)?;
        let (institutional, external) = self.sources.partition(financings)?;

        // Category grouping in the payload mirrors the form layout:
        // institutional contributions first, then external.
        let event_execution_financings = institutional
            .iter()
            .chain(external.iter())
            .map(|allocation| ExecutionFinancing {
                event_id: event.id,
                amount: allocation.amount,
                percentage: allocation.percentage,
                financing_source_id: allocation.financing_source_id,
            })
            .collect();

        let record = ExecutionRecord {
            event_id: event.id,
            event_dates_with_execution: date_executions,
            event_execution_financings,
        };

        self.client.create_execution(&record, evidence).await?;
        info!(
            event_id = event.id,
            dates = selected_date_ids.len(),
            "{}",
            lifecycle_events::EXECUTION_STARTED
        );

        Ok(self.client.list_events(ctx.poa_id).await?)
    }

    /// Replace an executing event's execution record wholesale.
    ///
    /// Full-overwrite semantics: the supplied record supersedes the
    /// event's dates-in-execution and financing set entirely. Callers
    /// editing a single field must still send the complete record.
    pub async fn update_execution(
        &self,
        ctx: &PoaContext,
        event: &Event,
        record: &ExecutionRecord,
        evidence: &[EvidenceFile],
    ) -> Result<Vec<Event>> {
        if !event.dates.iter().any(|d| d.is_executing()) {
            warn!(
                event_id = event.id,
                "Execution update refused: no executing date"
            );
            return Err(PoaError::StateTransitionError(format!(
                "Event {} has no executing date to update",
                event.id
            )));
        }

        let mut seen = HashSet::new();
        for entry in &record.event_dates_with_execution {
            if !seen.insert(entry.event_date_id) {
                return Err(StateMachineError::DuplicateDate {
                    event_date_id: entry.event_date_id,
                }
                .into());
            }
            event
                .date(entry.event_date_id)
                .ok_or(StateMachineError::DateNotFound {
                    event_date_id: entry.event_date_id,
                })?;
        }

        let percentage_sum: f64 = record
            .event_execution_financings
            .iter()
            .map(|f| f.percentage)
            .sum();
        let amount_sum: f64 = record
            .event_execution_financings
            .iter()
            .map(|f| f.amount)
            .sum();
        reconciliation::validate_sums(percentage_sum, amount_sum, event.total_cost)?;

        for financing in &record.event_execution_financings {
            self.sources.categorize(financing.financing_source_id)?;
        }

        self.client
            .update_execution(event.id, record, evidence)
            .await?;
        info!(event_id = event.id, "{}", lifecycle_events::EXECUTION_UPDATED);

        Ok(self.client.list_events(ctx.poa_id).await?)
    }

    /// Roll the named executing dates of an event back to planned.
    ///
    /// The revert targets exactly the caller-supplied date ids; there are
    /// no partial-revert semantics beyond that explicit set.
    pub async fn revert_execution(
        &self,
        ctx: &PoaContext,
        event: &Event,
        date_ids: &[i64],
    ) -> Result<Vec<Event>> {
        if date_ids.is_empty() {
            return Err(StateMachineError::NoDatesSelected.into());
        }

        let mut seen = HashSet::new();
        for &date_id in date_ids {
            if !seen.insert(date_id) {
                return Err(StateMachineError::DuplicateDate {
                    event_date_id: date_id,
                }
                .into());
            }
            let date = event
                .date(date_id)
                .ok_or(StateMachineError::DateNotFound {
                    event_date_id: date_id,
                })?;
            // Guard only; the backend performs the actual rollback
            ledger::revert_to_planned(date)?;
        }

        self.client.revert_execution(event.id, date_ids).await?;
        info!(
            event_id = event.id,
            ?date_ids,
            "{}",
            lifecycle_events::EXECUTION_REVERTED
        );

        Ok(self.client.list_events(ctx.poa_id).await?)
    }
}
