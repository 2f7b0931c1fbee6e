//! `GET|POST /api/drugs`: OpenFDA label search and adverse-event summary.

use axum::{
    extract::{rejection::JsonRejection, Query, State},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use triage_core::lookup::{adverse_event_summary, search_drugs};

use crate::{error::ApiError, state::AppState};

#[derive(Debug, Default, Deserialize)]
pub struct DrugQuery {
    pub name: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdverseEventQuery {
    #[serde(default)]
    pub drug_name: Option<String>,
}

/// Returned with 200 when a lookup found nothing.
#[derive(Debug, Serialize)]
pub struct NoResults {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<&'static str>,
}

fn required(name: Option<String>, message: &str) -> Result<String, ApiError> {
    name.map(|n| n.trim().to_string())
        .filter(|n| !n.is_empty())
        .ok_or_else(|| ApiError::BadRequest(message.to_string()))
}

/// Search drug labels by brand name.
pub async fn search(
    State(state): State<AppState>,
    Query(query): Query<DrugQuery>,
) -> Result<Response, ApiError> {
    let name = required(
        query.name,
        "Drug name is required. Usage: /api/drugs?name=aspirin",
    )?;

    let response = match search_drugs(state.drugs.as_ref(), &name).await {
        Some(found) => Json(found).into_response(),
        None => Json(NoResults {
            message: format!("No results found for \"{name}\""),
            suggestion: Some("Try searching with a different spelling or generic name"),
            note: None,
        })
        .into_response(),
    };
    Ok(response)
}

/// Summarize reported adverse events for a drug.
pub async fn adverse_events(
    State(state): State<AppState>,
    body: Result<Json<AdverseEventQuery>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(query) = body?;
    let name = required(query.drug_name, "Drug name is required")?;

    let response = match adverse_event_summary(state.drugs.as_ref(), &name).await {
        Some(summary) => Json(summary).into_response(),
        None => Json(NoResults {
            message: format!("No adverse events found for \"{name}\""),
            suggestion: None,
            note: Some("This does not mean the drug has no side effects"),
        })
        .into_response(),
    };
    Ok(response)
}
