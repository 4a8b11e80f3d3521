//! Repository Traits
//!
//! Interfaces for receipt storage and points caching. Implementations live
//! in the infrastructure layer.

use crate::domain::entities::Receipt;
use crate::error::ReceiptResult;
use kernel::id::ReceiptId;

/// Receipt repository trait
#[trait_variant::make(ReceiptRepository: Send)]
pub trait LocalReceiptRepository {
    /// Store a validated receipt under a fresh id.
    /// Fails with `DuplicateId` if the id is already taken.
    async fn insert(&self, id: ReceiptId, receipt: Receipt) -> ReceiptResult<()>;

    /// Get a receipt by id
    async fn find_by_id(&self, id: &ReceiptId) -> ReceiptResult<Option<Receipt>>;
}

/// Points cache trait
#[trait_variant::make(PointsCache: Send)]
pub trait LocalPointsCache {
    /// Return the cached points for `id`, or run `compute` once, store the
    /// result and return it. Concurrent first requests may both compute;
    /// the first stored value wins and every caller sees it.
    async fn get_or_compute<F>(
        &self,
        id: &ReceiptId,
        receipt: &Receipt,
        compute: F,
    ) -> ReceiptResult<u64>
    where
        F: FnOnce(&Receipt) -> u64 + Send;
}
