//! # Financing Reconciler
//!
//! Validates and partitions financing allocations against an event's
//! declared total cost. Pure validation and transformation; the checks
//! here are advisory mirrors of the backend's authoritative ones, run
//! client-side so bad payloads fail before any network call.

use crate::config::PoaConfig;
use crate::constants::reconciliation::{AMOUNT_EPSILON, PERCENTAGE_EPSILON, PERCENTAGE_TOTAL};
use crate::error::PoaError;
use crate::models::FinancingAllocation;
use std::collections::HashSet;
use thiserror::Error;

/// Financing categories implied by the source a contribution references
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FinancingCategory {
    Institutional,
    External,
}

impl std::fmt::Display for FinancingCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Institutional => write!(f, "institutional"),
            Self::External => write!(f, "external"),
        }
    }
}

/// Error types for financing reconciliation
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ReconciliationError {
    #[error("Allocation percentages sum to {actual}, expected {expected}")]
    PercentageMismatch { expected: f64, actual: f64 },

    #[error("Allocation amounts sum to {actual}, expected {expected}")]
    AmountMismatch { expected: f64, actual: f64 },

    #[error("Financing source {source_id} is not in the category table")]
    UnknownSource { source_id: i64 },
}

impl From<ReconciliationError> for PoaError {
    fn from(err: ReconciliationError) -> Self {
        PoaError::ValidationError(format!("{err}"))
    }
}

/// Membership lookup from financing source id to category.
///
/// Built from configuration rather than hard-coded literals; the
/// institution's source table changes without a code change.
#[derive(Debug, Clone)]
pub struct SourceCategoryTable {
    institutional: HashSet<i64>,
    external: HashSet<i64>,
}

impl SourceCategoryTable {
    pub fn new(institutional: impl IntoIterator<Item = i64>, external: impl IntoIterator<Item = i64>) -> Self {
        Self {
            institutional: institutional.into_iter().collect(),
            external: external.into_iter().collect(),
        }
    }

    pub fn from_config(config: &PoaConfig) -> Self {
        Self::new(
            config.institutional_sources.iter().copied(),
            config.external_sources.iter().copied(),
        )
    }

    /// Categorize one source id. Institutional membership is checked
    /// first, so a misconfigured id in both sets resolves institutional.
    pub fn categorize(&self, source_id: i64) -> Result<FinancingCategory, ReconciliationError> {
        if self.institutional.contains(&source_id) {
            Ok(FinancingCategory::Institutional)
        } else if self.external.contains(&source_id) {
            Ok(FinancingCategory::External)
        } else {
            Err(ReconciliationError::UnknownSource { source_id })
        }
    }

    /// Split active allocations into (institutional, external).
    ///
    /// Soft-deleted allocations are skipped; an unrecognized source id on
    /// an active allocation fails the whole partition.
    pub fn partition(
        &self,
        allocations: &[FinancingAllocation],
    ) -> Result<(Vec<FinancingAllocation>, Vec<FinancingAllocation>), ReconciliationError> {
        let mut institutional = Vec::new();
        let mut external = Vec::new();

        for allocation in allocations.iter().filter(|a| !a.deleted) {
            match self.categorize(allocation.financing_source_id)? {
                FinancingCategory::Institutional => institutional.push(allocation.clone()),
                FinancingCategory::External => external.push(allocation.clone()),
            }
        }

        Ok((institutional, external))
    }
}

impl Default for SourceCategoryTable {
    fn default() -> Self {
        Self::from_config(&PoaConfig::default())
    }
}

/// Validate active allocations against the event's declared total cost.
///
/// Percentages must sum to 100 within [`PERCENTAGE_EPSILON`] and amounts
/// to `total_cost` within [`AMOUNT_EPSILON`]. Percentage is checked
/// first, matching the order a reviewer corrects the form in.
pub fn validate(
    allocations: &[FinancingAllocation],
    total_cost: f64,
) -> Result<(), ReconciliationError> {
    let active: Vec<&FinancingAllocation> = allocations.iter().filter(|a| !a.deleted).collect();

    let percentage_sum: f64 = active.iter().map(|a| a.percentage).sum();
    let amount_sum: f64 = active.iter().map(|a| a.amount).sum();
    validate_sums(percentage_sum, amount_sum, total_cost)
}

/// Sum-level reconciliation check, shared by [`validate`] and by payload
/// paths that carry pre-built financing entries instead of allocations.
pub fn validate_sums(
    percentage_sum: f64,
    amount_sum: f64,
    total_cost: f64,
) -> Result<(), ReconciliationError> {
    if (percentage_sum - PERCENTAGE_TOTAL).abs() > PERCENTAGE_EPSILON {
        return Err(ReconciliationError::PercentageMismatch {
            expected: PERCENTAGE_TOTAL,
            actual: percentage_sum,
        });
    }

    if (amount_sum - total_cost).abs() > AMOUNT_EPSILON {
        return Err(ReconciliationError::AmountMismatch {
            expected: total_cost,
            actual: amount_sum,
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn allocation(id: i64, source_id: i64, amount: f64, percentage: f64) -> FinancingAllocation {
        FinancingAllocation {
            id,
            event_id: 1,
            financing_source_id: source_id,
            amount,
            percentage,
            deleted: false,
        }
    }

    #[test]
    fn test_categorize_default_table() {
        let table = SourceCategoryTable::default();
        for id in [1, 4, 5, 7] {
            assert_eq!(
                table.categorize(id).unwrap(),
                FinancingCategory::Institutional
            );
        }
        for id in [2, 3, 6] {
            assert_eq!(table.categorize(id).unwrap(), FinancingCategory::External);
        }
        assert_eq!(
            table.categorize(99).unwrap_err(),
            ReconciliationError::UnknownSource { source_id: 99 }
        );
    }

    #[test]
    fn test_partition_is_disjoint_and_complete() {
        let table = SourceCategoryTable::default();
        let allocations = vec![
            allocation(1, 1, 300.0, 30.0),
            allocation(2, 2, 500.0, 50.0),
            allocation(3, 7, 200.0, 20.0),
        ];

        let (institutional, external) = table.partition(&allocations).unwrap();
        assert_eq!(institutional.len(), 2);
        assert_eq!(external.len(), 1);

        let mut ids: Vec<i64> = institutional
            .iter()
            .chain(external.iter())
            .map(|a| a.id)
            .collect();
        ids.sort_unstable();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_partition_skips_deleted_and_rejects_unknown() {
        let table = SourceCategoryTable::default();

        let mut deleted = allocation(1, 99, 100.0, 10.0);
        deleted.deleted = true;
        let (institutional, external) = table
            .partition(&[deleted, allocation(2, 1, 900.0, 90.0)])
            .unwrap();
        assert_eq!(institutional.len(), 1);
        assert!(external.is_empty());

        assert!(table.partition(&[allocation(1, 99, 100.0, 10.0)]).is_err());
    }

    #[test]
    fn test_validate_accepts_matching_sums() {
        let allocations = vec![
            allocation(1, 1, 300.0, 30.0),
            allocation(2, 2, 700.0, 70.0),
        ];
        assert!(validate(&allocations, 1000.0).is_ok());
    }

    #[test]
    fn test_validate_percentage_mismatch() {
        let allocations = vec![
            allocation(1, 1, 300.0, 30.0),
            allocation(2, 2, 600.0, 60.0),
        ];
        assert_eq!(
            validate(&allocations, 900.0).unwrap_err(),
            ReconciliationError::PercentageMismatch {
                expected: 100.0,
                actual: 90.0
            }
        );
    }

    #[test]
    fn test_validate_amount_mismatch() {
        let allocations = vec![
            allocation(1, 1, 300.0, 30.0),
            allocation(2, 2, 700.0, 70.0),
        ];
        assert_eq!(
            validate(&allocations, 900.0).unwrap_err(),
            ReconciliationError::AmountMismatch {
                expected: 900.0,
                actual: 1000.0
            }
        );
    }

    #[test]
    fn test_validate_tolerates_rounding() {
        let allocations = vec![
            allocation(1, 1, 333.33, 33.333),
            allocation(2, 2, 333.33, 33.333),
            allocation(3, 4, 333.34, 33.334),
        ];
        assert!(validate(&allocations, 1000.0).is_ok());
    }

    #[test]
    fn test_validate_ignores_deleted_allocations() {
        let mut stale = allocation(3, 3, 500.0, 50.0);
        stale.deleted = true;
        let allocations = vec![
            allocation(1, 1, 300.0, 30.0),
            allocation(2, 2, 700.0, 70.0),
            stale,
        ];
        assert!(validate(&allocations, 1000.0).is_ok());
    }
}
