//! In-Memory Repository Implementations
//!
//! Receipts and computed points live only for the life of the process.

use crate::domain::entities::Receipt;
use crate::domain::repository::{PointsCache, ReceiptRepository};
use crate::error::{ReceiptError, ReceiptResult};
use kernel::id::ReceiptId;
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::Arc;
use tokio::sync::RwLock;

/// In-memory receipt store and points cache
#[derive(Clone, Default)]
pub struct MemoryReceiptRepository {
    receipts: Arc<RwLock<HashMap<ReceiptId, Receipt>>>,
    points: Arc<RwLock<HashMap<ReceiptId, u64>>>,
}

impl MemoryReceiptRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored receipts
    pub async fn receipt_count(&self) -> usize {
        self.receipts.read().await.len()
    }

    /// Number of receipts whose points have been computed
    pub async fn cached_points_count(&self) -> usize {
        self.points.read().await.len()
    }
}

impl ReceiptRepository for MemoryReceiptRepository {
    async fn insert(&self, id: ReceiptId, receipt: Receipt) -> ReceiptResult<()> {
        match self.receipts.write().await.entry(id) {
            Entry::Occupied(_) => Err(ReceiptError::DuplicateId),
            Entry::Vacant(slot) => {
                slot.insert(receipt);
                Ok(())
            }
        }
    }

    async fn find_by_id(&self, id: &ReceiptId) -> ReceiptResult<Option<Receipt>> {
        Ok(self.receipts.read().await.get(id).cloned())
    }
}

impl PointsCache for MemoryReceiptRepository {
    async fn get_or_compute<F>(
        &self,
        id: &ReceiptId,
        receipt: &Receipt,
        compute: F,
    ) -> ReceiptResult<u64>
    where
        F: FnOnce(&Receipt) -> u64 + Send,
    {
        let cached = self.points.read().await.get(id).copied();
        if let Some(points) = cached {
            tracing::debug!(receipt_id = %id, points, "Points cache hit");
            return Ok(points);
        }

        // Computed outside the lock; a concurrent first request may also
        // compute, and whichever value lands first is kept.
        let computed = compute(receipt);
        let points = *self.points.write().await.entry(*id).or_insert(computed);
        Ok(points)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::test_support::draft;
    use tokio_test::block_on;

    fn receipt() -> Receipt {
        Receipt::parse(&draft()).unwrap()
    }

    #[test]
    fn test_insert_and_find() {
        block_on(async {
            let repo = MemoryReceiptRepository::new();
            let id = ReceiptId::new();
            repo.insert(id, receipt()).await.unwrap();

            assert_eq!(repo.find_by_id(&id).await.unwrap(), Some(receipt()));
            assert_eq!(repo.find_by_id(&ReceiptId::new()).await.unwrap(), None);
        });
    }

    #[test]
    fn test_duplicate_id_is_rejected() {
        block_on(async {
            let repo = MemoryReceiptRepository::new();
            let id = ReceiptId::new();
            repo.insert(id, receipt()).await.unwrap();

            let err = repo.insert(id, receipt()).await.unwrap_err();
            assert!(matches!(err, ReceiptError::DuplicateId));
            assert_eq!(repo.receipt_count().await, 1);
        });
    }

    #[test]
    fn test_points_are_cached() {
        block_on(async {
            let repo = MemoryReceiptRepository::new();
            let id = ReceiptId::new();
            let r = receipt();

            let first = repo.get_or_compute(&id, &r, |_| 42).await.unwrap();
            let second = repo.get_or_compute(&id, &r, |_| 7).await.unwrap();

            assert_eq!(first, 42);
            assert_eq!(second, 42);
            assert_eq!(repo.cached_points_count().await, 1);
        });
    }

    #[test]
    fn test_first_stored_points_win_a_race() {
        block_on(async {
            let repo = MemoryReceiptRepository::new();
            let id = ReceiptId::new();
            let r = receipt();

            // Both callers miss the cache; the other one stores first
            let points = repo
                .get_or_compute(&id, &r, |_| {
                    repo.points
                        .try_write()
                        .expect("points lock is free while computing")
                        .insert(id, 42);
                    7
                })
                .await
                .unwrap();

            assert_eq!(points, 42);
            assert_eq!(repo.get_or_compute(&id, &r, |_| 7).await.unwrap(), 42);
            assert_eq!(repo.cached_points_count().await, 1);
        });
    }

    #[test]
    fn test_clones_share_storage() {
        block_on(async {
            let repo = MemoryReceiptRepository::new();
            let other = repo.clone();
            let id = ReceiptId::new();
            repo.insert(id, receipt()).await.unwrap();

            assert!(other.find_by_id(&id).await.unwrap().is_some());
        });
    }
}
