//! Upstream lookups with graceful degradation.
//!
//! Each function asks a lookup source for data and reshapes it. Upstream
//! failures are logged and treated as "no data"; none of them is fatal to a
//! request.

use tracing::{info, warn};

use triage_contracts::lookup::{AdverseEventSummary, DrugSearchResponse, HealthStatsResponse};

use crate::{
    reshape::{country_response, global_response, summarize_label, tally_reactions},
    traits::{DrugLabelSource, HealthStatsSource},
};

pub const DRUG_DISCLAIMER: &str = "This information is for educational purposes only. Always consult a healthcare professional before taking any medication.";
pub const ADVERSE_EVENT_DISCLAIMER: &str =
    "These are reported adverse events and may not represent all possible side effects.";

/// Search drug labels by brand name. `None` when nothing was found.
pub async fn search_drugs(source: &dyn DrugLabelSource, name: &str) -> Option<DrugSearchResponse> {
    let labels = match source.search_labels(name).await {
        Ok(labels) => labels,
        Err(e) => {
            warn!(drug = %name, error = %e, "drug label search failed; treating as no results");
            Vec::new()
        }
    };

    if labels.is_empty() {
        info!(drug = %name, "no drug labels found");
        return None;
    }

    let drugs: Vec<_> = labels.iter().map(summarize_label).collect();
    Some(DrugSearchResponse {
        query: name.to_string(),
        results_count: drugs.len(),
        source: "OpenFDA".to_string(),
        drugs,
        disclaimer: DRUG_DISCLAIMER.to_string(),
    })
}

/// Summarize reported adverse events for a drug. `None` when none were found.
pub async fn adverse_event_summary(
    source: &dyn DrugLabelSource,
    name: &str,
) -> Option<AdverseEventSummary> {
    let events = match source.adverse_events(name).await {
        Ok(events) => events,
        Err(e) => {
            warn!(drug = %name, error = %e, "adverse event lookup failed; treating as no results");
            Vec::new()
        }
    };

    if events.is_empty() {
        return None;
    }

    Some(AdverseEventSummary {
        drug: name.to_string(),
        total_reports: events.len(),
        common_reactions: tally_reactions(&events),
        source: "OpenFDA Adverse Event Reporting System".to_string(),
        disclaimer: ADVERSE_EVENT_DISCLAIMER.to_string(),
    })
}

/// Statistics for one country. `None` when unknown or unavailable.
pub async fn country_stats(source: &dyn HealthStatsSource, country: &str) -> Option<HealthStatsResponse> {
    match source.country(country).await {
        Ok(stats) => stats.as_ref().map(country_response),
        Err(e) => {
            warn!(country = %country, error = %e, "country statistics lookup failed");
            None
        }
    }
}

/// Worldwide statistics. `None` when unavailable.
pub async fn global_stats(source: &dyn HealthStatsSource) -> Option<HealthStatsResponse> {
    match source.global().await {
        Ok(stats) => stats.as_ref().map(global_response),
        Err(e) => {
            warn!(error = %e, "global statistics lookup failed");
            None
        }
    }
}
