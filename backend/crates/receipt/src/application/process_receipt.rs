//! Process Receipt Use Case

use crate::domain::entities::{Receipt, ReceiptDraft};
use crate::domain::repository::ReceiptRepository;
use crate::error::ReceiptResult;
use kernel::id::ReceiptId;
use std::sync::Arc;

/// Output DTO for process receipt
#[derive(Debug, Clone)]
pub struct ProcessReceiptOutput {
    pub receipt_id: ReceiptId,
}

/// Process Receipt Use Case
///
/// Validates a draft, assigns a fresh id and stores the receipt. Nothing
/// is stored when validation fails.
pub struct ProcessReceiptUseCase<R>
where
    R: ReceiptRepository,
{
    receipt_repo: Arc<R>,
}

impl<R> ProcessReceiptUseCase<R>
where
    R: ReceiptRepository,
{
    pub fn new(receipt_repo: Arc<R>) -> Self {
        Self { receipt_repo }
    }

    pub async fn execute(&self, draft: ReceiptDraft) -> ReceiptResult<ProcessReceiptOutput> {
        let receipt = Receipt::parse(&draft)?;
        let receipt_id = ReceiptId::new();

        let item_count = receipt.items().len();
        self.receipt_repo.insert(receipt_id, receipt).await?;

        tracing::info!(
            receipt_id = %receipt_id,
            items = item_count,
            "Stored receipt"
        );

        Ok(ProcessReceiptOutput { receipt_id })
    }
}
