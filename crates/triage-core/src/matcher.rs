//! Symptom-to-condition matcher.
//!
//! Scans free text for every keyword in `SYMPTOM_CONDITIONS` and ranks the
//! conditions those keywords point at.
//!
//! Scoring per keyword hit:
//!
//!   confidence = max(100 - 15 * rank, 20)
//!
//! where `rank` is the condition's position in that keyword's list. A
//! condition reached through several keywords keeps its best score. The
//! result is sorted by confidence (ties keep first-match order), truncated to
//! `MAX_CONDITIONS`, and each score is capped at `CONFIDENCE_CAP`.

use tracing::debug;

use triage_contracts::assessment::ProbableCondition;

use crate::tables::{describe_condition, SYMPTOM_CONDITIONS};

/// At most this many conditions are returned.
pub const MAX_CONDITIONS: usize = 5;

/// Reported confidences never exceed this value.
pub const CONFIDENCE_CAP: u8 = 95;

/// Confidence floor for conditions far down a keyword's list.
pub const CONFIDENCE_FLOOR: u8 = 20;

/// Confidence awarded to the condition at position `rank` of a keyword list.
pub fn rank_confidence(rank: usize) -> u8 {
    let raw = 100usize.saturating_sub(15 * rank);
    raw.max(CONFIDENCE_FLOOR as usize) as u8
}

/// Match `symptoms_text` against the symptom table.
///
/// Returns an empty list when no keyword occurs; callers supply their own
/// fallback content in that case.
pub fn analyze_symptoms(symptoms_text: &str) -> Vec<ProbableCondition> {
    let symptoms = symptoms_text.to_lowercase();

    // First-match order is preserved so the stable sort below breaks ties
    // the same way every time.
    let mut scored: Vec<(&'static str, u8)> = Vec::new();
    let mut keyword_hits = 0usize;

    for (keyword, conditions) in SYMPTOM_CONDITIONS {
        if !symptoms.contains(keyword) {
            continue;
        }
        keyword_hits += 1;

        for (rank, condition) in conditions.iter().enumerate() {
            let confidence = rank_confidence(rank);
            match scored.iter_mut().find(|(name, _)| name == condition) {
                Some((_, best)) if *best < confidence => *best = confidence,
                Some(_) => {}
                None => scored.push((*condition, confidence)),
            }
        }
    }

    scored.sort_by(|a, b| b.1.cmp(&a.1));

    debug!(
        keyword_hits,
        candidates = scored.len(),
        "symptom text matched"
    );

    scored
        .into_iter()
        .take(MAX_CONDITIONS)
        .map(|(condition, confidence)| ProbableCondition {
            condition: condition.to_string(),
            confidence: confidence.min(CONFIDENCE_CAP),
            description: describe_condition(condition).to_string(),
        })
        .collect()
}

// ── Tests ─────────────────────────────────────────────────────────────────────
