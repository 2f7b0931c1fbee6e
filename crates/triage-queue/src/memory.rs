//! In-memory patient queue.
//!
//! `InMemoryPatientQueue` keeps every admitted patient in a `Vec` behind a
//! `Mutex`, newest first. Handlers share it through an `Arc`; admission and
//! snapshots each hold the lock only for the duration of one call.

use std::sync::{Arc, Mutex, MutexGuard};

use chrono::{DateTime, Duration, Utc};
use tracing::info;

use triage_contracts::{
    intake::{FormNumber, IntakeRequest},
    queue::{
        QueueEntryView, QueuePriority, QueueSnapshot, QueueStats, QueueStatus, QueuedPatient,
    },
    Result, TriageError,
};
use triage_core::{report::resolve_pain, scorer::urgency_score};

use crate::time_ago::time_ago;

/// Fixed average triage time reported with every snapshot.
pub const AVG_TRIAGE_TIME: &str = "18 min";

const SEED_COMPLAINT: &str = "Chest pain, shortness of breath";

/// Queue lane for a resolved pain severity.
pub fn queue_priority(pain_severity: u8) -> QueuePriority {
    if pain_severity >= 8 {
        QueuePriority::Urgent
    } else if pain_severity >= 5 {
        QueuePriority::Moderate
    } else {
        QueuePriority::Routine
    }
}

// ── Queue ─────────────────────────────────────────────────────────────────────

/// A thread-safe, in-memory waiting-room queue.
///
/// Patients are never removed or discharged. The backing `Vec` grows with
/// every admission for the life of the process and is lost on restart.
#[derive(Debug, Clone, Default)]
pub struct InMemoryPatientQueue {
    patients: Arc<Mutex<Vec<QueuedPatient>>>,
}

impl InMemoryPatientQueue {
    /// An empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// A queue holding three demo patients who arrived 2, 13 and 26 minutes
    /// before `now`.
    pub fn seeded(now: DateTime<Utc>) -> Self {
        let seed = |id, name: &str, age, risk_score, priority, minutes| QueuedPatient {
            id,
            name: name.to_string(),
            age: Some(age),
            complaint: SEED_COMPLAINT.to_string(),
            risk_score,
            priority,
            timestamp: now - Duration::minutes(minutes),
            status: QueueStatus::Waiting,
        };

        let patients = vec![
            seed(1, "Raja Ram", 45, 58, QueuePriority::Moderate, 2),
            seed(2, "Sahil singh", 35, 85, QueuePriority::Routine, 13),
            seed(3, "Sohan Kumar", 21, 65, QueuePriority::Urgent, 26),
        ];

        Self {
            patients: Arc::new(Mutex::new(patients)),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Vec<QueuedPatient>>> {
        self.patients.lock().map_err(|e| TriageError::QueueUnavailable {
            reason: e.to_string(),
        })
    }

    /// Admit a patient from an intake form, placing them at the front.
    ///
    /// The new id is one more than the current queue length. The risk score
    /// is the urgency score of the submitted symptoms and vitals; the lane is
    /// chosen from pain severity alone.
    pub fn admit(&self, request: &IntakeRequest, now: DateTime<Utc>) -> Result<QueuedPatient> {
        let pain = resolve_pain(request.pain_severity.as_ref());
        let complaint = request.primary_symptoms.clone().unwrap_or_default();

        let risk_score = urgency_score(
            &complaint,
            pain,
            request.temperature.as_ref().and_then(FormNumber::as_decimal),
            request.heart_rate.as_ref().and_then(FormNumber::as_whole),
        );

        let age = request
            .age
            .as_ref()
            .and_then(FormNumber::as_whole)
            .and_then(|a| u32::try_from(a).ok());

        let mut patients = self.lock()?;
        let patient = QueuedPatient {
            id: patients.len() as u64 + 1,
            name: request
                .patient_name
                .clone()
                .filter(|n| !n.is_empty())
                .unwrap_or_else(|| "Anonymous".to_string()),
            age,
            complaint,
            risk_score,
            priority: queue_priority(pain),
            timestamp: now,
            status: QueueStatus::Waiting,
        };
        patients.insert(0, patient.clone());

        info!(
            patient_id = patient.id,
            priority = ?patient.priority,
            risk_score = patient.risk_score,
            queue_len = patients.len(),
            "patient admitted"
        );

        Ok(patient)
    }

    /// The queue with relative arrival labels and per-lane counts.
    pub fn snapshot(&self, now: DateTime<Utc>) -> Result<QueueSnapshot> {
        let patients = self.lock()?;

        let count = |p: QueuePriority| patients.iter().filter(|e| e.priority == p).count();
        let stats = QueueStats {
            urgent: count(QueuePriority::Urgent),
            moderate: count(QueuePriority::Moderate),
            routine: count(QueuePriority::Routine),
            avg_triage_time: AVG_TRIAGE_TIME.to_string(),
        };

        let entries = patients
            .iter()
            .map(|p| QueueEntryView {
                patient: p.clone(),
                time_ago: time_ago(p.timestamp, now),
            })
            .collect();

        Ok(QueueSnapshot {
            success: true,
            patients: entries,
            stats,
        })
    }

    /// Number of patients currently waiting.
    pub fn len(&self) -> Result<usize> {
        Ok(self.lock()?.len())
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.lock()?.is_empty())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).unwrap()
    }

    fn intake(name: &str, pain: Option<FormNumber>) -> IntakeRequest {
        IntakeRequest {
            patient_name: Some(name.to_string()),
            age: Some(FormNumber::from("52")),
            primary_symptoms: Some("persistent cough".to_string()),
            pain_severity: pain,
            ..Default::default()
        }
    }

    #[test]
    fn seeded_queue_has_three_waiting_patients() {
        let queue = InMemoryPatientQueue::seeded(now());
        let snapshot = queue.snapshot(now()).unwrap();

        assert!(snapshot.success);
        let names: Vec<_> = snapshot.patients.iter().map(|e| e.patient.name.as_str()).collect();
        assert_eq!(names, ["Raja Ram", "Sahil singh", "Sohan Kumar"]);

        let labels: Vec<_> = snapshot.patients.iter().map(|e| e.time_ago.as_str()).collect();
        assert_eq!(labels, ["2 Min ago", "13 Min ago", "26 Min ago"]);

        assert_eq!(
            snapshot.stats,
            QueueStats {
                urgent: 1,
                moderate: 1,
                routine: 1,
                avg_triage_time: "18 min".to_string(),
            }
        );
    }

    #[test]
    fn admit_prepends_with_next_id() {
        let queue = InMemoryPatientQueue::seeded(now());

        let patient = queue.admit(&intake("Asha", Some(FormNumber::Number(9.0))), now()).unwrap();
        assert_eq!(patient.id, 4);
        assert_eq!(patient.age, Some(52));
        assert_eq!(patient.priority, QueuePriority::Urgent);
        assert_eq!(patient.status, QueueStatus::Waiting);

        let snapshot = queue.snapshot(now()).unwrap();
        assert_eq!(snapshot.patients.len(), 4);
        assert_eq!(snapshot.patients[0].patient.name, "Asha");
        assert_eq!(snapshot.patients[0].time_ago, "Just now");
        assert_eq!(snapshot.stats.urgent, 2);
    }

    #[test]
    fn lane_follows_pain_severity() {
        assert_eq!(queue_priority(10), QueuePriority::Urgent);
        assert_eq!(queue_priority(8), QueuePriority::Urgent);
        assert_eq!(queue_priority(7), QueuePriority::Moderate);
        assert_eq!(queue_priority(5), QueuePriority::Moderate);
        assert_eq!(queue_priority(4), QueuePriority::Routine);

        // Missing pain defaults to 5.
        let queue = InMemoryPatientQueue::new();
        let patient = queue.admit(&intake("Ben", None), now()).unwrap();
        assert_eq!(patient.priority, QueuePriority::Moderate);
        assert_eq!(patient.id, 1);
    }

    #[test]
    fn risk_score_is_deterministic() {
        let queue = InMemoryPatientQueue::new();
        let request = IntakeRequest {
            primary_symptoms: Some("chest pain".to_string()),
            pain_severity: Some(FormNumber::Number(6.0)),
            ..Default::default()
        };

        let first = queue.admit(&request, now()).unwrap();
        let second = queue.admit(&request, now()).unwrap();
        // 40 + 6 * 3 = 58.
        assert_eq!(first.risk_score, 58);
        assert_eq!(second.risk_score, first.risk_score);
        assert_eq!(second.id, 2);
    }

    #[test]
    fn missing_fields_are_tolerated() {
        let queue = InMemoryPatientQueue::new();
        let patient = queue.admit(&IntakeRequest::default(), now()).unwrap();

        assert_eq!(patient.name, "Anonymous");
        assert_eq!(patient.age, None);
        assert_eq!(patient.complaint, "");
        assert_eq!(patient.risk_score, 15);
        assert!(!queue.is_empty().unwrap());
    }

    #[test]
    fn entries_serialize_flat_with_epoch_millis() {
        let queue = InMemoryPatientQueue::seeded(now());
        let snapshot = queue.snapshot(now()).unwrap();
        let json = serde_json::to_value(&snapshot).unwrap();

        let first = &json["patients"][0];
        assert_eq!(first["riskScore"], 58);
        assert_eq!(first["priority"], "moderate");
        assert_eq!(first["status"], "waiting");
        assert_eq!(first["timeAgo"], "2 Min ago");
        assert_eq!(
            first["timestamp"],
            (now() - Duration::minutes(2)).timestamp_millis()
        );
        assert_eq!(json["stats"]["avgTriageTime"], "18 min");
    }

    #[test]
    fn clones_share_state() {
        let queue = InMemoryPatientQueue::new();
        let handle = queue.clone();
        handle.admit(&intake("Cara", None), now()).unwrap();
        assert_eq!(queue.len().unwrap(), 1);
    }

    #[test]
    fn admissions_accumulate_without_eviction() {
        let queue = InMemoryPatientQueue::seeded(now());
        for i in 0..200 {
            queue.admit(&intake(&format!("Walk-in {i}"), None), now()).unwrap();
        }

        assert_eq!(queue.len().unwrap(), 203);
        let snapshot = queue.snapshot(now()).unwrap();
        assert_eq!(snapshot.patients.len(), 203);
        assert_eq!(snapshot.patients[0].patient.id, 203);
        assert_eq!(snapshot.patients[0].patient.name, "Walk-in 199");
        assert_eq!(snapshot.patients[202].patient.name, "Sohan Kumar");
    }
}
