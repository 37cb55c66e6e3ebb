//! Finalization orchestrator local-guard tests.
//!
//! Finalization is date-granular; every guard failure here must surface
//! before any network call.

use chrono::{TimeZone, Utc};
use poa_core::{
    Event, EventDate, EventDateState, FinalizationOrchestrator, PoaApiClient, PoaApiConfig,
    PoaContext, PoaError,
};

fn date(id: i64, status: EventDateState) -> EventDate {
    EventDate {
        id,
        event_id: 5,
        planned_start: Utc.with_ymd_and_hms(2025, 5, 2, 9, 0, 0).unwrap(),
        planned_end: Utc.with_ymd_and_hms(2025, 5, 2, 17, 0, 0).unwrap(),
        execution_start: None,
        execution_end: None,
        status,
        change_reason: None,
    }
}

fn event(dates: Vec<EventDate>) -> Event {
    Event {
        id: 5,
        name: "Job fair".to_string(),
        objective: "Industry outreach".to_string(),
        total_cost: 500.0,
        campus_id: 1,
        responsibles: vec![],
        dates,
        financings: vec![],
        approvals: vec![],
    }
}

fn orchestrator() -> FinalizationOrchestrator {
    FinalizationOrchestrator::new(PoaApiClient::new(PoaApiConfig::default()).unwrap())
}

#[tokio::test]
async fn finish_requires_an_executing_date() {
    let orchestrator = orchestrator();
    let ctx = PoaContext::new(1, 2025, 7);
    let event = event(vec![date(21, EventDateState::Planned)]);
    let end = Utc.with_ymd_and_hms(2025, 5, 2, 18, 0, 0).unwrap();

    let err = orchestrator
        .finish(&ctx, &event, 21, end, &[])
        .await
        .unwrap_err();
    assert!(matches!(err, PoaError::StateTransitionError(_)));
}

#[tokio::test]
async fn finish_rejects_unknown_date() {
    let orchestrator = orchestrator();
    let ctx = PoaContext::new(1, 2025, 7);
    let event = event(vec![date(21, EventDateState::Executing)]);
    let end = Utc.with_ymd_and_hms(2025, 5, 2, 18, 0, 0).unwrap();

    let err = orchestrator
        .finish(&ctx, &event, 99, end, &[])
        .await
        .unwrap_err();
    assert!(matches!(err, PoaError::StateTransitionError(msg) if msg.contains("99")));
}

#[tokio::test]
async fn update_targets_only_finished_dates() {
    let orchestrator = orchestrator();
    let ctx = PoaContext::new(1, 2025, 7);
    let event = event(vec![date(21, EventDateState::Executing)]);
    let end = Utc.with_ymd_and_hms(2025, 5, 2, 18, 0, 0).unwrap();

    let err = orchestrator
        .update_finalization(&ctx, &event, 21, end, &[])
        .await
        .unwrap_err();
    assert!(matches!(err, PoaError::StateTransitionError(_)));
}

#[tokio::test]
async fn restore_targets_only_finished_dates() {
    let orchestrator = orchestrator();
    let ctx = PoaContext::new(1, 2025, 7);
    let event = event(vec![date(21, EventDateState::Executing)]);

    let err = orchestrator.restore(&ctx, &event, 21).await.unwrap_err();
    assert!(matches!(err, PoaError::StateTransitionError(_)));
}

#[tokio::test]
async fn restore_refuses_cancelled_dates() {
    let orchestrator = orchestrator();
    let ctx = PoaContext::new(1, 2025, 7);
    let event = event(vec![date(21, EventDateState::Cancelled)]);

    let err = orchestrator.restore(&ctx, &event, 21).await.unwrap_err();
    assert!(matches!(err, PoaError::StateTransitionError(_)));
}
