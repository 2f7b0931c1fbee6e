//! Light reshaping of upstream lookup payloads for display.

use chrono::{DateTime, Utc};

use triage_contracts::lookup::{
    AdverseEventReport, DrugLabel, DrugSummary, HealthMetrics, HealthStatsResponse, ReactionCount,
    RegionStats,
};

/// Most reactions listed in an adverse-event summary.
pub const MAX_REACTIONS: usize = 20;

const PURPOSE_CHARS: usize = 200;
const WARNING_CHARS: usize = 300;
const DOSAGE_CHARS: usize = 200;

/// First non-empty entry of an optional string list.
fn first(field: &Option<Vec<String>>) -> Option<&str> {
    field
        .as_ref()
        .and_then(|v| v.first())
        .map(String::as_str)
        .filter(|s| !s.is_empty())
}

fn or_fallback(value: Option<&str>, fallback: &str) -> String {
    value.unwrap_or(fallback).to_string()
}

/// Cut `text` to `max_chars` characters, marking the cut with "...".
pub fn clip(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => format!("{}...", &text[..idx]),
        None => text.to_string(),
    }
}

/// Flatten one OpenFDA label into a `DrugSummary`.
pub fn summarize_label(label: &DrugLabel) -> DrugSummary {
    let fda = label.openfda.clone().unwrap_or_default();

    let purpose = first(&label.purpose)
        .map(str::to_string)
        .or_else(|| first(&label.indications_and_usage).map(|s| clip(s, PURPOSE_CHARS)))
        .unwrap_or_else(|| "Not specified".to_string());

    DrugSummary {
        brand_name: or_fallback(first(&fda.brand_name), "Unknown"),
        generic_name: or_fallback(first(&fda.generic_name), "Unknown"),
        manufacturer: or_fallback(first(&fda.manufacturer_name), "Unknown"),
        purpose,
        warnings: first(&label.warnings)
            .map(|s| clip(s, WARNING_CHARS))
            .unwrap_or_else(|| "See product label".to_string()),
        dosage: first(&label.dosage_and_administration)
            .map(|s| clip(s, DOSAGE_CHARS))
            .unwrap_or_else(|| "Consult healthcare provider".to_string()),
        active_ingredient: or_fallback(
            first(&label.active_ingredient).or(first(&fda.substance_name)),
            "Not listed",
        ),
        route: or_fallback(first(&fda.route), "Not specified"),
        product_type: or_fallback(first(&fda.product_type), "Not specified"),
    }
}

/// Count reactions across `events`, most reported first.
///
/// Ties keep the order in which reactions were first seen.
pub fn tally_reactions(events: &[AdverseEventReport]) -> Vec<ReactionCount> {
    let mut counts: Vec<ReactionCount> = Vec::new();

    let reactions = events
        .iter()
        .filter_map(|e| e.patient.as_ref())
        .filter_map(|p| p.reaction.as_ref())
        .flatten()
        .filter_map(|r| r.reactionmeddrapt.as_deref())
        .filter(|r| !r.is_empty());

    for reaction in reactions {
        match counts.iter_mut().find(|c| c.reaction == reaction) {
            Some(entry) => entry.reported_cases += 1,
            None => counts.push(ReactionCount {
                reaction: reaction.to_string(),
                reported_cases: 1,
            }),
        }
    }

    counts.sort_by(|a, b| b.reported_cases.cmp(&a.reported_cases));
    counts.truncate(MAX_REACTIONS);
    counts
}

fn metrics(stats: &RegionStats, include_affected: bool) -> HealthMetrics {
    HealthMetrics {
        active_cases: stats.active,
        recovered: stats.recovered,
        critical: stats.critical,
        affected_countries: if include_affected { stats.affected_countries } else { None },
        cases_per_million: stats.cases_per_one_million,
        tests_per_million: stats.tests_per_one_million,
        total_tests: stats.tests,
    }
}

/// Reshape per-country statistics.
pub fn country_response(stats: &RegionStats) -> HealthStatsResponse {
    HealthStatsResponse {
        country: stats.country.clone(),
        scope: None,
        population: stats.population,
        health_metrics: metrics(stats, false),
        last_updated: stats.updated.and_then(DateTime::<Utc>::from_timestamp_millis),
        source: "Disease.sh API".to_string(),
        disclaimer: "Health statistics are updated regularly but may have slight delays."
            .to_string(),
    }
}

/// Reshape worldwide statistics.
pub fn global_response(stats: &RegionStats) -> HealthStatsResponse {
    HealthStatsResponse {
        country: None,
        scope: Some("Global".to_string()),
        population: None,
        health_metrics: metrics(stats, true),
        last_updated: stats.updated.and_then(DateTime::<Utc>::from_timestamp_millis),
        source: "Disease.sh API".to_string(),
        disclaimer: "Global health statistics aggregated from multiple sources.".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use triage_contracts::lookup::{EventPatient, EventReaction, OpenFdaFields};

    fn strings(items: &[&str]) -> Option<Vec<String>> {
        Some(items.iter().map(|s| s.to_string()).collect())
    }

    fn event(reactions: &[&str]) -> AdverseEventReport {
        AdverseEventReport {
            patient: Some(EventPatient {
                reaction: Some(
                    reactions
                        .iter()
                        .map(|r| EventReaction {
                            reactionmeddrapt: Some(r.to_string()),
                        })
                        .collect(),
                ),
            }),
        }
    }

    #[test]
    fn clip_only_marks_real_cuts() {
        assert_eq!(clip("short", 10), "short");
        assert_eq!(clip("abcdef", 3), "abc...");
        // Multi-byte characters are counted, not bytes.
        assert_eq!(clip("ééé", 2), "éé...");
    }

    #[test]
    fn empty_label_uses_fallbacks() {
        let summary = summarize_label(&DrugLabel::default());
        assert_eq!(summary.brand_name, "Unknown");
        assert_eq!(summary.purpose, "Not specified");
        assert_eq!(summary.warnings, "See product label");
        assert_eq!(summary.dosage, "Consult healthcare provider");
        assert_eq!(summary.active_ingredient, "Not listed");
        assert_eq!(summary.route, "Not specified");
    }

    #[test]
    fn label_fields_are_flattened() {
        let long_indication = "x".repeat(250);
        let label = DrugLabel {
            openfda: Some(OpenFdaFields {
                brand_name: strings(&["Bayer Aspirin"]),
                generic_name: strings(&["ASPIRIN"]),
                manufacturer_name: strings(&["Bayer HealthCare LLC."]),
                substance_name: strings(&["ASPIRIN"]),
                route: strings(&["ORAL"]),
                product_type: strings(&["HUMAN OTC DRUG"]),
            }),
            indications_and_usage: strings(&[long_indication.as_str()]),
            warnings: strings(&["Reye's syndrome"]),
            ..Default::default()
        };

        let summary = summarize_label(&label);
        assert_eq!(summary.brand_name, "Bayer Aspirin");
        assert_eq!(summary.manufacturer, "Bayer HealthCare LLC.");
        // No `purpose`, so indications are used and clipped.
        assert_eq!(summary.purpose.chars().count(), 203);
        assert!(summary.purpose.ends_with("..."));
        assert_eq!(summary.warnings, "Reye's syndrome");
        // No `active_ingredient`, so the substance name is used.
        assert_eq!(summary.active_ingredient, "ASPIRIN");
        assert_eq!(summary.product_type, "HUMAN OTC DRUG");
    }

    #[test]
    fn reactions_are_counted_and_ranked() {
        let events = vec![
            event(&["NAUSEA", "HEADACHE"]),
            event(&["HEADACHE", "RASH"]),
            event(&["HEADACHE", "NAUSEA"]),
            AdverseEventReport::default(),
        ];

        let tally = tally_reactions(&events);
        assert_eq!(tally[0], ReactionCount { reaction: "HEADACHE".into(), reported_cases: 3 });
        assert_eq!(tally[1], ReactionCount { reaction: "NAUSEA".into(), reported_cases: 2 });
        assert_eq!(tally[2], ReactionCount { reaction: "RASH".into(), reported_cases: 1 });
    }

    #[test]
    fn reactions_are_truncated() {
        let names: Vec<String> = (0..30).map(|i| format!("R{i}")).collect();
        let refs: Vec<&str> = names.iter().map(String::as_str).collect();
        assert_eq!(tally_reactions(&[event(&refs)]).len(), MAX_REACTIONS);
    }

    #[test]
    fn country_stats_are_reshaped() {
        let stats = RegionStats {
            country: Some("India".to_string()),
            population: Some(1_400_000_000),
            active: Some(120),
            tests: Some(900),
            updated: Some(1_700_000_000_000),
            ..Default::default()
        };

        let response = country_response(&stats);
        assert_eq!(response.country.as_deref(), Some("India"));
        assert_eq!(response.health_metrics.active_cases, Some(120));
        assert_eq!(response.health_metrics.total_tests, Some(900));
        assert_eq!(
            response.last_updated.unwrap().to_rfc3339(),
            "2023-11-14T22:13:20+00:00"
        );

        let json = serde_json::to_value(&response).unwrap();
        assert!(json.get("scope").is_none());
        assert!(json["healthMetrics"].get("affectedCountries").is_none());
    }

    #[test]
    fn global_stats_carry_scope_and_affected_countries() {
        let stats = RegionStats {
            affected_countries: Some(231),
            ..Default::default()
        };
        let response = global_response(&stats);
        assert_eq!(response.scope.as_deref(), Some("Global"));
        assert_eq!(response.health_metrics.affected_countries, Some(231));
        assert!(response.last_updated.is_none());
    }
}
