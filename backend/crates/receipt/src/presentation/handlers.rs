//! HTTP Handlers

use crate::application::get_points::GetPointsUseCase;
use crate::application::process_receipt::ProcessReceiptUseCase;
use crate::domain::repository::{PointsCache, ReceiptRepository};
use crate::error::{ReceiptError, ReceiptResult};
use crate::presentation::dto::{
    HealthResponse, PointsResponse, ProcessReceiptRequest, ProcessReceiptResponse,
};
use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use kernel::id::ReceiptId;
use std::sync::Arc;

/// Shared state for receipt handlers
#[derive(Clone)]
pub struct ReceiptAppState<R>
where
    R: ReceiptRepository + PointsCache + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
}

/// POST /receipts/process
pub async fn process_receipt<R>(
    State(state): State<ReceiptAppState<R>>,
    payload: Result<Json<ProcessReceiptRequest>, JsonRejection>,
) -> ReceiptResult<Json<ProcessReceiptResponse>>
where
    R: ReceiptRepository + PointsCache + Clone + Send + Sync + 'static,
{
    let Json(req) = payload?;

    let use_case = ProcessReceiptUseCase::new(state.repo.clone());
    let output = use_case.execute(req.into()).await?;

    Ok(Json(ProcessReceiptResponse {
        id: output.receipt_id.to_string(),
    }))
}

/// GET /receipts/{id}/points
pub async fn get_points<R>(
    State(state): State<ReceiptAppState<R>>,
    Path(id): Path<String>,
) -> ReceiptResult<Json<PointsResponse>>
where
    R: ReceiptRepository + PointsCache + Clone + Send + Sync + 'static,
{
    // An id we could never have issued cannot be stored
    let receipt_id: ReceiptId = id.parse().map_err(|e| {
        tracing::debug!(error = %e, "Unparsable receipt id");
        ReceiptError::ReceiptNotFound
    })?;

    let use_case = GetPointsUseCase::new(state.repo.clone(), state.repo.clone());
    let output = use_case.execute(receipt_id).await?;

    Ok(Json(PointsResponse {
        points: output.points,
    }))
}

/// GET /health
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "healthy" })
}
