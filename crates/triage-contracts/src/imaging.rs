//! Simulated imaging analysis request and result.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Body of `POST /api/imaging`. Unknown fields are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImagingRequest {
    #[serde(default)]
    pub image_type: Option<String>,
}

/// One candidate finding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImagingFinding {
    pub name: String,
    pub confidence: u8,
    pub severity: String,
    pub features: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub recommendations: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImagingReport {
    pub success: bool,
    pub timestamp: DateTime<Utc>,
    pub image_type: String,
    pub diagnoses: Vec<ImagingFinding>,
    pub overall_assessment: String,
    pub ai_confidence: u8,
}
