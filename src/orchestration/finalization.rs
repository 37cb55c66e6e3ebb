//! # Finalization Orchestrator
//!
//! Drives individual event dates from executing to finished. Execution is
//! event-granular but finalization is date-granular: occurrences of a
//! recurring event close out independently, each with its own completion
//! evidence and end date.

use chrono::{DateTime, Utc};
use tracing::info;

use crate::client::PoaApiClient;
use crate::constants::events as lifecycle_events;
use crate::error::Result;
use crate::models::{Event, EvidenceFile, FinalizationRecord, PoaContext};
use crate::state_machine::ledger;
use crate::state_machine::StateMachineError;

/// Orchestrates the executing → finished transition per event date
#[derive(Debug)]
pub struct FinalizationOrchestrator {
    client: PoaApiClient,
}

impl FinalizationOrchestrator {
    pub fn new(client: PoaApiClient) -> Self {
        Self { client }
    }

    /// Close out one executing date with completion evidence and an end
    /// date. On failure the date remains executing on the backend and
    /// nothing was mutated locally.
    pub async fn finish(
        &self,
        ctx: &PoaContext,
        event: &Event,
        event_date_id: i64,
        end_date: DateTime<Utc>,
        evidence: &[EvidenceFile],
    ) -> Result<Vec<Event>> {
        let date = event
            .date(event_date_id)
            .ok_or(StateMachineError::DateNotFound { event_date_id })?;
        // Guard only; the backend records the transition
        ledger::mark_finished(date, end_date)?;

        let record = FinalizationRecord {
            event_id: event.id,
            event_date_id,
            end_date,
        };

        self.client.create_finalization(&record, evidence).await?;
        info!(
            event_id = event.id,
            event_date_id,
            "{}",
            lifecycle_events::FINALIZATION_FINISHED
        );

        Ok(self.client.list_events(ctx.poa_id).await?)
    }

    /// Replace the finalization of an already-finished date.
    ///
    /// Same payload shape as [`finish`] but full-overwrite against an
    /// existing finalization; the targeted date must be finished.
    pub async fn update_finalization(
        &self,
        ctx: &PoaContext,
        event: &Event,
        event_date_id: i64,
        end_date: DateTime<Utc>,
        evidence: &[EvidenceFile],
    ) -> Result<Vec<Event>> {
        let date = event
            .date(event_date_id)
            .ok_or(StateMachineError::DateNotFound { event_date_id })?;
        if !date.is_finished() {
            return Err(StateMachineError::InvalidTransition {
                from: date.status.to_string(),
                event: "update_finalization".to_string(),
            }
            .into());
        }

        let record = FinalizationRecord {
            event_id: event.id,
            event_date_id,
            end_date,
        };

        self.client
            .update_finalization(event.id, &record, evidence)
            .await?;
        info!(
            event_id = event.id,
            event_date_id,
            "{}",
            lifecycle_events::FINALIZATION_UPDATED
        );

        Ok(self.client.list_events(ctx.poa_id).await?)
    }

    /// Reopen a finished date back to executing, re-enabling evidence
    /// attachment and end-date correction.
    pub async fn restore(
        &self,
        ctx: &PoaContext,
        event: &Event,
        event_date_id: i64,
    ) -> Result<Vec<Event>> {
        let date = event
            .date(event_date_id)
            .ok_or(StateMachineError::DateNotFound { event_date_id })?;
        // Guard only; the backend records the transition
        ledger::restore_to_executing(date)?;

        self.client
            .restore_finalization(event.id, event_date_id)
            .await?;
        info!(
            event_id = event.id,
            event_date_id,
            "{}",
            lifecycle_events::FINALIZATION_RESTORED
        );

        Ok(self.client.list_events(ctx.poa_id).await?)
    }
}
