//! `GET|POST /api/patients`: the mock waiting-room queue.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use chrono::Utc;
use serde::Serialize;

use triage_contracts::{
    intake::IntakeRequest,
    queue::{QueueSnapshot, QueuedPatient},
};

use crate::{error::ApiError, state::AppState};

#[derive(Debug, Serialize)]
pub struct Admitted {
    pub success: bool,
    pub patient: QueuedPatient,
}

/// Current queue with per-lane counts.
pub async fn list(State(state): State<AppState>) -> Result<Json<QueueSnapshot>, ApiError> {
    Ok(Json(state.queue.snapshot(Utc::now())?))
}

/// Add a patient to the front of the queue.
pub async fn admit(
    State(state): State<AppState>,
    body: Result<Json<IntakeRequest>, JsonRejection>,
) -> Result<Json<Admitted>, ApiError> {
    let Json(request) = body?;
    let patient = state.queue.admit(&request, Utc::now())?;
    Ok(Json(Admitted {
        success: true,
        patient,
    }))
}
