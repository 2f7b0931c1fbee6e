//! `GET /api/health-stats[?country=]`: disease.sh statistics.

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

use triage_contracts::lookup::HealthStatsResponse;
use triage_core::lookup::{country_stats, global_stats};

use crate::{error::ApiError, state::AppState};

#[derive(Debug, Default, Deserialize)]
pub struct StatsQuery {
    pub country: Option<String>,
}

/// Country statistics when `country` is given, worldwide otherwise.
pub async fn stats(
    State(state): State<AppState>,
    Query(query): Query<StatsQuery>,
) -> Result<Json<HealthStatsResponse>, ApiError> {
    match query.country.filter(|c| !c.trim().is_empty()) {
        Some(country) => country_stats(state.health_stats.as_ref(), &country)
            .await
            .map(Json)
            .ok_or_else(|| ApiError::NotFound(format!("No data found for country: {country}"))),
        None => global_stats(state.health_stats.as_ref())
            .await
            .map(Json)
            .ok_or_else(|| {
                ApiError::UpstreamUnavailable("Failed to fetch global statistics".to_string())
            }),
    }
}
