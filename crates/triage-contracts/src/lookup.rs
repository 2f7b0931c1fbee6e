//! Upstream lookup records.
//!
//! The first half of this module mirrors the subset of OpenFDA and disease.sh
//! JSON the service actually reads; every field is optional because both
//! APIs omit keys freely. The second half holds the reshaped records served
//! to clients.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ── OpenFDA drug label ───────────────────────────────────────────────────────

/// One entry of `drug/label.json` `results`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DrugLabel {
    #[serde(default)]
    pub openfda: Option<OpenFdaFields>,
    #[serde(default)]
    pub purpose: Option<Vec<String>>,
    #[serde(default)]
    pub indications_and_usage: Option<Vec<String>>,
    #[serde(default)]
    pub warnings: Option<Vec<String>>,
    #[serde(default)]
    pub dosage_and_administration: Option<Vec<String>>,
    #[serde(default)]
    pub active_ingredient: Option<Vec<String>>,
}

/// The harmonised `openfda` block of a label.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OpenFdaFields {
    #[serde(default)]
    pub brand_name: Option<Vec<String>>,
    #[serde(default)]
    pub generic_name: Option<Vec<String>>,
    #[serde(default)]
    pub manufacturer_name: Option<Vec<String>>,
    #[serde(default)]
    pub substance_name: Option<Vec<String>>,
    #[serde(default)]
    pub route: Option<Vec<String>>,
    #[serde(default)]
    pub product_type: Option<Vec<String>>,
}

// ── OpenFDA adverse event ────────────────────────────────────────────────────

/// One entry of `drug/event.json` `results`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AdverseEventReport {
    #[serde(default)]
    pub patient: Option<EventPatient>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EventPatient {
    #[serde(default)]
    pub reaction: Option<Vec<EventReaction>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EventReaction {
    /// MedDRA preferred term for the reaction.
    #[serde(default)]
    pub reactionmeddrapt: Option<String>,
}

// ── disease.sh ───────────────────────────────────────────────────────────────

/// Body of `countries/{country}` and `all`. `country` is absent on the global
/// endpoint and `affected_countries` is absent on the per-country one.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionStats {
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub population: Option<i64>,
    #[serde(default)]
    pub active: Option<i64>,
    #[serde(default)]
    pub recovered: Option<i64>,
    #[serde(default)]
    pub critical: Option<i64>,
    #[serde(default)]
    pub cases_per_one_million: Option<f64>,
    #[serde(default)]
    pub tests_per_one_million: Option<f64>,
    #[serde(default)]
    pub tests: Option<i64>,
    #[serde(default)]
    pub affected_countries: Option<i64>,
    /// Epoch milliseconds of the upstream snapshot.
    #[serde(default)]
    pub updated: Option<i64>,
}

// ── Reshaped output ──────────────────────────────────────────────────────────

/// A drug label flattened for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DrugSummary {
    pub brand_name: String,
    pub generic_name: String,
    pub manufacturer: String,
    pub purpose: String,
    pub warnings: String,
    pub dosage: String,
    pub active_ingredient: String,
    pub route: String,
    pub product_type: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DrugSearchResponse {
    pub query: String,
    pub results_count: usize,
    pub source: String,
    pub drugs: Vec<DrugSummary>,
    pub disclaimer: String,
}

/// How many reports in a sample mention one reaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReactionCount {
    pub reaction: String,
    pub reported_cases: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdverseEventSummary {
    pub drug: String,
    pub total_reports: usize,
    pub common_reactions: Vec<ReactionCount>,
    pub source: String,
    pub disclaimer: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthMetrics {
    pub active_cases: Option<i64>,
    pub recovered: Option<i64>,
    pub critical: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub affected_countries: Option<i64>,
    pub cases_per_million: Option<f64>,
    pub tests_per_million: Option<f64>,
    pub total_tests: Option<i64>,
}

/// Reshaped statistics for one country or for the whole world.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthStatsResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub population: Option<i64>,
    pub health_metrics: HealthMetrics,
    pub last_updated: Option<DateTime<Utc>>,
    pub source: String,
    pub disclaimer: String,
}
