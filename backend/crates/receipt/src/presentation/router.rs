//! Receipt Router

use crate::application::config::ReceiptConfig;
use crate::domain::repository::{PointsCache, ReceiptRepository};
use crate::infra::memory::MemoryReceiptRepository;
use crate::presentation::handlers::{self, ReceiptAppState};
use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use std::sync::Arc;

/// Create the receipt router with the in-memory repository
pub fn receipt_router(repo: MemoryReceiptRepository, config: ReceiptConfig) -> Router {
    receipt_router_generic(repo, config)
}

/// Create a generic receipt router for any repository implementation
pub fn receipt_router_generic<R>(repo: R, config: ReceiptConfig) -> Router
where
    R: ReceiptRepository + PointsCache + Clone + Send + Sync + 'static,
{
    let state = ReceiptAppState {
        repo: Arc::new(repo),
    };

    Router::new()
        .route("/receipts/process", post(handlers::process_receipt::<R>))
        .route("/receipts/{id}/points", get(handlers::get_points::<R>))
        .route("/health", get(handlers::health))
        .layer(DefaultBodyLimit::max(config.max_body_bytes))
        .with_state(state)
}
