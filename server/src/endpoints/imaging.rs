//! `POST /api/imaging`: simulated image analysis.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use chrono::Utc;
use tracing::debug;

use triage_contracts::imaging::{ImagingReport, ImagingRequest};
use triage_core::imaging::simulated_analysis;

use crate::{error::ApiError, state::AppState};

/// Wait out the configured processing delay, then return the canned result.
pub async fn analyze(
    State(state): State<AppState>,
    body: Result<Json<ImagingRequest>, JsonRejection>,
) -> Result<Json<ImagingReport>, ApiError> {
    let Json(request) = body?;

    debug!(delay_ms = state.imaging_delay.as_millis() as u64, "simulating image analysis");
    tokio::time::sleep(state.imaging_delay).await;

    Ok(Json(simulated_analysis(&request, Utc::now())))
}
