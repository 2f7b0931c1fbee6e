//! Urgency scorer and triage priority bands.
//!
//! The urgency score is a plain additive sum:
//!
//! | Contribution                              | Points        |
//! |-------------------------------------------|---------------|
//! | any `CRITICAL_KEYWORDS` substring         | +40 (once)    |
//! | any `HIGH_PRIORITY_KEYWORDS` substring    | +25 (once)    |
//! | pain severity                             | +3 per point  |
//! | temperature > 103 °F / > 101 °F           | +20 / +10     |
//! | heart rate > 120 or < 50 bpm              | +15           |
//!
//! The total is clamped to 0–100 and mapped onto a priority band.

use tracing::debug;

use triage_contracts::{
    assessment::{Priority, TriageResult},
    intake::TriageInput,
};

use crate::tables::{CRITICAL_KEYWORDS, HIGH_PRIORITY_KEYWORDS};

pub const CRITICAL_BONUS: i32 = 40;
pub const HIGH_PRIORITY_BONUS: i32 = 25;
pub const PAIN_WEIGHT: i32 = 3;

/// Scores at or above this are URGENT.
pub const URGENT_THRESHOLD: u8 = 60;
/// Scores at or above this (and below `URGENT_THRESHOLD`) are MODERATE.
pub const MODERATE_THRESHOLD: u8 = 40;

/// Fixed wording attached to each priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriorityBand {
    pub priority: Priority,
    pub recommendation: &'static str,
    pub wait_time: &'static str,
}

const URGENT_BAND: PriorityBand = PriorityBand {
    priority: Priority::Urgent,
    recommendation: "Seek immediate medical attention. Visit the emergency room.",
    wait_time: "Immediate",
};

const MODERATE_BAND: PriorityBand = PriorityBand {
    priority: Priority::Moderate,
    recommendation: "Schedule an appointment with a doctor within 24-48 hours.",
    wait_time: "24-48 hours",
};

const LOW_BAND: PriorityBand = PriorityBand {
    priority: Priority::Low,
    recommendation: "Monitor symptoms. Consider telemedicine consultation if symptoms persist.",
    wait_time: "Non-urgent",
};

/// Map an urgency score onto its priority band.
pub fn band_for_score(score: u8) -> PriorityBand {
    if score >= URGENT_THRESHOLD {
        URGENT_BAND
    } else if score >= MODERATE_THRESHOLD {
        MODERATE_BAND
    } else {
        LOW_BAND
    }
}

fn mentions_any(text: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| text.contains(k))
}

fn temperature_points(temperature: Option<f64>) -> i32 {
    match temperature {
        Some(t) if t > 103.0 => 20,
        Some(t) if t > 101.0 => 10,
        _ => 0,
    }
}

fn heart_rate_points(heart_rate: Option<i64>) -> i32 {
    match heart_rate {
        Some(hr) if !(50..=120).contains(&hr) => 15,
        _ => 0,
    }
}

/// Compute the clamped urgency score for one intake.
pub fn urgency_score(
    symptoms: &str,
    pain_severity: u8,
    temperature: Option<f64>,
    heart_rate: Option<i64>,
) -> u8 {
    let text = symptoms.to_lowercase();

    let critical = mentions_any(&text, CRITICAL_KEYWORDS);
    let high_priority = mentions_any(&text, HIGH_PRIORITY_KEYWORDS);

    let mut score = 0i32;
    if critical {
        score += CRITICAL_BONUS;
    }
    if high_priority {
        score += HIGH_PRIORITY_BONUS;
    }
    score += i32::from(pain_severity) * PAIN_WEIGHT;
    score += temperature_points(temperature);
    score += heart_rate_points(heart_rate);

    debug!(
        critical,
        high_priority,
        pain_severity,
        raw_score = score,
        "urgency score computed"
    );

    score.clamp(0, 100) as u8
}

/// Score `input` and attach the matching priority band.
pub fn calculate_triage_priority(input: &TriageInput) -> TriageResult {
    let score = urgency_score(
        &input.symptoms,
        input.pain_severity,
        input.temperature,
        input.heart_rate,
    );
    let band = band_for_score(score);

    TriageResult {
        urgency_score: score,
        priority: band.priority,
        recommendation: band.recommendation.to_string(),
        wait_time: band.wait_time.to_string(),
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
