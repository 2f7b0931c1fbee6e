//! Scoring results and the assembled assessment report.
//!
//! `ProbableCondition` and `TriageResult` are what the two core functions
//! return. `AssessmentReport` is the full document served by
//! `POST /api/analyze`; it is derived per request and never stored.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Triage priority derived from the urgency score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Priority {
    Low,
    Moderate,
    Urgent,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "LOW",
            Priority::Moderate => "MODERATE",
            Priority::Urgent => "URGENT",
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One candidate condition produced by the symptom matcher.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProbableCondition {
    pub condition: String,
    /// Match strength, 20–95.
    pub confidence: u8,
    pub description: String,
}

/// The outcome of the triage scorer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TriageResult {
    /// Additive urgency metric, clamped to 0–100.
    pub urgency_score: u8,
    pub priority: Priority,
    pub recommendation: String,
    pub wait_time: String,
}

/// Unique identifier stamped on every generated report.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AssessmentId(pub uuid::Uuid);

impl AssessmentId {
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4())
    }
}

impl Default for AssessmentId {
    fn default() -> Self {
        Self::new()
    }
}

/// Full response body of `POST /api/analyze`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentReport {
    pub assessment_id: AssessmentId,
    pub patient_info: PatientInfo,
    pub symptoms: SymptomSummary,
    pub triage: TriageSummary,
    pub analysis: Analysis,
    pub recommendations: Recommendations,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientInfo {
    pub name: String,
    /// The age as submitted, or "Not specified".
    pub age: Value,
    pub submitted_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SymptomSummary {
    pub primary: String,
    pub pain_severity: u8,
    pub vital_signs: VitalSignsEcho,
}

/// Vitals echoed back as submitted, or "Not recorded".
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VitalSignsEcho {
    pub temperature: Value,
    pub heart_rate: Value,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TriageSummary {
    pub priority: Priority,
    pub urgency_score: u8,
    pub recommendation: String,
    pub estimated_wait_time: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Analysis {
    pub probable_conditions: Vec<ProbableCondition>,
    /// Rounded mean confidence of the listed conditions.
    pub ai_confidence: u8,
    pub disclaimer: String,
    pub generated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendations {
    pub immediate: Vec<String>,
    pub follow_up: Vec<String>,
    pub lifestyle: Vec<String>,
}
