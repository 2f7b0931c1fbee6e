//! `GET|POST /api/analyze`: symptom assessment.

use axum::{extract::rejection::JsonRejection, Json};
use chrono::Utc;
use serde::Serialize;

use triage_contracts::{assessment::AssessmentReport, intake::IntakeRequest};
use triage_core::assess;

use crate::error::ApiError;

pub const API_VERSION: &str = "1.0.0";

#[derive(Debug, Serialize)]
pub struct ServiceStatus {
    pub status: &'static str,
    pub version: &'static str,
    pub features: [&'static str; 4],
}

/// Liveness and feature summary.
pub async fn status() -> Json<ServiceStatus> {
    Json(ServiceStatus {
        status: "Symptom Analysis API is running",
        version: API_VERSION,
        features: [
            "Symptom-based condition matching",
            "AI-powered triage priority calculation",
            "Comprehensive health recommendations",
            "Integration with OpenFDA drug database",
        ],
    })
}

/// Assess one intake form.
///
/// Symptom text made only of whitespace is rejected with 400, which is
/// stricter than the intake form, where any non-empty string passes.
pub async fn analyze(
    body: Result<Json<IntakeRequest>, JsonRejection>,
) -> Result<Json<AssessmentReport>, ApiError> {
    let Json(request) = body?;
    let report = assess(&request, Utc::now())?;
    Ok(Json(report))
}
