//! Waiting-room queue records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Queue lane, derived from reported pain severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QueuePriority {
    Urgent,
    Moderate,
    Routine,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QueueStatus {
    Waiting,
}

/// One patient waiting to be seen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueuedPatient {
    pub id: u64,
    pub name: String,
    pub age: Option<u32>,
    pub complaint: String,
    pub risk_score: u8,
    pub priority: QueuePriority,
    /// Arrival time, serialized as epoch milliseconds.
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub timestamp: DateTime<Utc>,
    pub status: QueueStatus,
}

/// A queued patient plus a relative arrival label ("13 Min ago").
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueueEntryView {
    #[serde(flatten)]
    pub patient: QueuedPatient,
    pub time_ago: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueueStats {
    pub urgent: usize,
    pub moderate: usize,
    pub routine: usize,
    pub avg_triage_time: String,
}

/// Body of `GET /api/patients`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueueSnapshot {
    pub success: bool,
    pub patients: Vec<QueueEntryView>,
    pub stats: QueueStats,
}
