//! Recommendation lists attached to an assessment report.

use triage_contracts::assessment::{Priority, ProbableCondition};

/// Most lifestyle lines a report carries.
pub const MAX_LIFESTYLE_LINES: usize = 5;

const STAY_WARM: &str = "Avoid cold environments and stay warm";
const BLAND_DIET: &str = "Avoid spicy and fatty foods";

const BASE_LIFESTYLE: [&str; 5] = [
    "Maintain a balanced diet rich in fruits and vegetables",
    "Get regular exercise (30 minutes of moderate activity daily)",
    "Ensure adequate sleep (7-9 hours for adults)",
    "Stay hydrated by drinking at least 8 glasses of water daily",
    "Practice stress management techniques",
];

fn lines(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// What to do right now, by priority.
pub fn immediate_recommendations(priority: Priority) -> Vec<String> {
    match priority {
        Priority::Urgent => lines(&[
            "Seek emergency medical care immediately",
            "Call emergency services (112) if symptoms worsen",
            "Do not drive yourself to the hospital",
        ]),
        Priority::Moderate => lines(&[
            "Schedule an appointment with your doctor within 24-48 hours",
            "Rest and stay hydrated",
            "Monitor your symptoms closely",
        ]),
        Priority::Low => lines(&[
            "Rest and monitor your symptoms",
            "Stay hydrated and get adequate sleep",
            "Consider over-the-counter medications for symptom relief",
        ]),
    }
}

/// Follow-up steps, by priority.
pub fn follow_up_recommendations(priority: Priority) -> Vec<String> {
    match priority {
        Priority::Urgent => lines(&[
            "Follow emergency room discharge instructions",
            "Schedule follow-up within 24 hours",
        ]),
        Priority::Moderate => lines(&[
            "Follow up with your doctor if symptoms persist beyond 48 hours",
            "Keep a symptom diary",
        ]),
        Priority::Low => lines(&[
            "Seek medical attention if symptoms worsen or new symptoms develop",
            "Annual health check-up recommended",
        ]),
    }
}

/// General lifestyle advice, led by condition-specific lines.
///
/// Every respiratory-type condition (name contains "Respiratory", "Cold" or
/// "Flu") prepends the stay-warm line and every digestive one ("Gastro",
/// "Gastritis") prepends the diet line, so a line repeats once per triggering
/// condition before the list is cut to `MAX_LIFESTYLE_LINES`.
pub fn lifestyle_recommendations(conditions: &[ProbableCondition]) -> Vec<String> {
    let mut out: Vec<&str> = BASE_LIFESTYLE.to_vec();

    for cond in conditions {
        let name = cond.condition.as_str();
        if ["Respiratory", "Cold", "Flu"].iter().any(|k| name.contains(k)) {
            out.insert(0, STAY_WARM);
        }
        if ["Gastro", "Gastritis"].iter().any(|k| name.contains(k)) {
            out.insert(0, BLAND_DIET);
        }
    }

    out.truncate(MAX_LIFESTYLE_LINES);
    lines(&out)
}
