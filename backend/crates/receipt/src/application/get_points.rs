//! Get Points Use Case

use crate::domain::entities::Receipt;
use crate::domain::repository::{PointsCache, ReceiptRepository};
use crate::domain::services::PointsBreakdown;
use crate::error::{ReceiptError, ReceiptResult};
use kernel::id::ReceiptId;
use std::sync::Arc;

/// Signature of a points calculator
pub type PointsCalculator = fn(&Receipt) -> u64;

/// Default calculator: sums the per-rule breakdown and logs it
pub fn calculate_with_breakdown(receipt: &Receipt) -> u64 {
    let breakdown = PointsBreakdown::for_receipt(receipt);
    tracing::debug!(
        retailer_name = breakdown.retailer_name,
        round_dollar_total = breakdown.round_dollar_total,
        quarter_multiple_total = breakdown.quarter_multiple_total,
        item_pairs = breakdown.item_pairs,
        item_descriptions = breakdown.item_descriptions,
        odd_purchase_day = breakdown.odd_purchase_day,
        afternoon_purchase = breakdown.afternoon_purchase,
        "Points breakdown"
    );
    breakdown.total()
}

/// Output DTO for get points
#[derive(Debug, Clone, Copy)]
pub struct GetPointsOutput {
    pub points: u64,
}

/// Get Points Use Case
///
/// Looks up a stored receipt and returns its points, computing them at
/// most once per id.
pub struct GetPointsUseCase<R, C>
where
    R: ReceiptRepository,
    C: PointsCache,
{
    receipt_repo: Arc<R>,
    points_cache: Arc<C>,
    calculator: PointsCalculator,
}

impl<R, C> GetPointsUseCase<R, C>
where
    R: ReceiptRepository,
    C: PointsCache,
{
    pub fn new(receipt_repo: Arc<R>, points_cache: Arc<C>) -> Self {
        Self {
            receipt_repo,
            points_cache,
            calculator: calculate_with_breakdown,
        }
    }

    /// Replace the points calculator
    pub fn with_calculator(mut self, calculator: PointsCalculator) -> Self {
        self.calculator = calculator;
        self
    }

    pub async fn execute(&self, receipt_id: ReceiptId) -> ReceiptResult<GetPointsOutput> {
        let receipt = self
            .receipt_repo
            .find_by_id(&receipt_id)
            .await?
            .ok_or(ReceiptError::ReceiptNotFound)?;

        let points = self
            .points_cache
            .get_or_compute(&receipt_id, &receipt, self.calculator)
            .await?;

        tracing::info!(receipt_id = %receipt_id, points, "Returned points");

        Ok(GetPointsOutput { points })
    }
}
