//! Assessment report assembly.
//!
//! Turns one `IntakeRequest` into a full `AssessmentReport`:
//!
//!   validate → matcher + scorer → fallback condition → advice → report
//!
//! The only failure is a missing symptom description. Unparsable optional
//! fields never fail: they contribute nothing to the score.

use chrono::{DateTime, Utc};
use serde_json::Value;
use tracing::{debug, info};

use triage_contracts::{
    assessment::{
        Analysis, AssessmentId, AssessmentReport, PatientInfo, ProbableCondition, Recommendations,
        SymptomSummary, TriageSummary, VitalSignsEcho,
    },
    intake::{FormNumber, IntakeRequest, TriageInput},
    Result, TriageError,
};

use crate::{advice, matcher::analyze_symptoms, scorer::calculate_triage_priority};

pub const FALLBACK_CONDITION: &str = "General Health Concern";
pub const FALLBACK_CONFIDENCE: u8 = 70;
pub const FALLBACK_DESCRIPTION: &str =
    "Your symptoms require professional medical evaluation for accurate diagnosis.";

pub const DISCLAIMER: &str = "This is an AI-assisted preliminary assessment. Always consult a qualified healthcare provider for medical advice.";

const ANONYMOUS: &str = "Anonymous";
const AGE_NOT_SPECIFIED: &str = "Not specified";
const NOT_RECORDED: &str = "Not recorded";

/// Resolve the pain field to 1–10, defaulting to `TriageInput::DEFAULT_PAIN`.
///
/// A reading below the bottom of the scale ("0", "0.3", "-2") is no reading,
/// whether it arrived as a JSON number or as text.
pub fn resolve_pain(pain: Option<&FormNumber>) -> u8 {
    match pain.and_then(FormNumber::as_decimal) {
        Some(p) if p >= 1.0 => p.round().min(10.0) as u8,
        _ => TriageInput::DEFAULT_PAIN,
    }
}

/// Validate a request and parse it into the scorer's input.
///
/// Returns `TriageError::InvalidInput` when `primarySymptoms` is absent or
/// blank. Whitespace-only text counts as blank, which is stricter than the
/// intake form's own check (any non-empty string).
pub fn triage_input(request: &IntakeRequest) -> Result<TriageInput> {
    let symptoms = request
        .primary_symptoms
        .as_deref()
        .filter(|s| !s.trim().is_empty())
        .ok_or_else(|| TriageError::invalid_input("Primary symptoms are required"))?;

    Ok(TriageInput {
        symptoms: symptoms.to_string(),
        pain_severity: resolve_pain(request.pain_severity.as_ref()),
        temperature: request.temperature.as_ref().and_then(FormNumber::as_decimal),
        heart_rate: request.heart_rate.as_ref().and_then(FormNumber::as_whole),
    })
}

fn fallback_condition() -> ProbableCondition {
    ProbableCondition {
        condition: FALLBACK_CONDITION.to_string(),
        confidence: FALLBACK_CONFIDENCE,
        description: FALLBACK_DESCRIPTION.to_string(),
    }
}

/// Rounded mean confidence, or the fallback confidence for an empty list.
pub fn mean_confidence(conditions: &[ProbableCondition]) -> u8 {
    if conditions.is_empty() {
        return FALLBACK_CONFIDENCE;
    }
    let total: u32 = conditions.iter().map(|c| u32::from(c.confidence)).sum();
    (f64::from(total) / conditions.len() as f64).round() as u8
}

/// Echo a form field back as submitted, or `placeholder` when it was empty.
fn echo(field: Option<&FormNumber>, placeholder: &str) -> Value {
    match field.filter(|f| f.is_recorded()) {
        Some(FormNumber::Number(n)) => serde_json::json!(n),
        Some(FormNumber::Text(s)) => Value::String(s.clone()),
        None => Value::String(placeholder.to_string()),
    }
}

/// Build the full report for `request`, stamping it with `now`.
pub fn assess(request: &IntakeRequest, now: DateTime<Utc>) -> Result<AssessmentReport> {
    let input = triage_input(request)?;

    let matched = analyze_symptoms(&input.symptoms);
    let triage = calculate_triage_priority(&input);

    let (probable_conditions, ai_confidence) = if matched.is_empty() {
        debug!("no symptom keyword matched, using fallback condition");
        (vec![fallback_condition()], FALLBACK_CONFIDENCE)
    } else {
        let mean = mean_confidence(&matched);
        (matched.clone(), mean)
    };

    let assessment_id = AssessmentId::new();
    info!(
        assessment_id = %assessment_id.0,
        priority = %triage.priority,
        urgency_score = triage.urgency_score,
        conditions = matched.len(),
        "assessment generated"
    );

    let patient_name = request
        .patient_name
        .as_deref()
        .filter(|n| !n.is_empty())
        .unwrap_or(ANONYMOUS);

    Ok(AssessmentReport {
        assessment_id,
        patient_info: PatientInfo {
            name: patient_name.to_string(),
            age: echo(request.age.as_ref(), AGE_NOT_SPECIFIED),
            submitted_at: now,
        },
        symptoms: SymptomSummary {
            primary: input.symptoms.clone(),
            pain_severity: input.pain_severity,
            vital_signs: VitalSignsEcho {
                temperature: echo(request.temperature.as_ref(), NOT_RECORDED),
                heart_rate: echo(request.heart_rate.as_ref(), NOT_RECORDED),
            },
        },
        triage: TriageSummary {
            priority: triage.priority,
            urgency_score: triage.urgency_score,
            recommendation: triage.recommendation,
            estimated_wait_time: triage.wait_time,
        },
        analysis: Analysis {
            probable_conditions,
            ai_confidence,
            disclaimer: DISCLAIMER.to_string(),
            generated_at: now,
        },
        recommendations: Recommendations {
            immediate: advice::immediate_recommendations(triage.priority),
            follow_up: advice::follow_up_recommendations(triage.priority),
            lifestyle: advice::lifestyle_recommendations(&matched),
        },
    })
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use triage_contracts::assessment::Priority;

    fn request(symptoms: Option<&str>) -> IntakeRequest {
        IntakeRequest {
            primary_symptoms: symptoms.map(str::to_string),
            ..Default::default()
        }
    }

    #[test]
    fn missing_symptoms_is_invalid_input() {
        let err = assess(&request(None), Utc::now()).unwrap_err();
        assert!(matches!(err, TriageError::InvalidInput { .. }));

        let err = triage_input(&request(Some("   "))).unwrap_err();
        assert!(err.to_string().contains("Primary symptoms are required"));
    }

    #[test]
    fn pain_defaults_and_clamps() {
        assert_eq!(resolve_pain(None), 5);
        assert_eq!(resolve_pain(Some(&FormNumber::Number(0.0))), 5);
        assert_eq!(resolve_pain(Some(&FormNumber::from("bad"))), 5);
        assert_eq!(resolve_pain(Some(&FormNumber::from("8"))), 8);
        assert_eq!(resolve_pain(Some(&FormNumber::Number(14.0))), 10);
        assert_eq!(resolve_pain(Some(&FormNumber::Number(-3.0))), 5);
        assert_eq!(resolve_pain(Some(&FormNumber::Number(1.0))), 1);
        assert_eq!(resolve_pain(Some(&FormNumber::from("1.4"))), 1);
    }

    #[test]
    fn zero_pain_defaults_whether_number_or_text() {
        assert_eq!(resolve_pain(Some(&FormNumber::Number(0.0))), 5);
        assert_eq!(resolve_pain(Some(&FormNumber::from("0"))), 5);
        assert_eq!(resolve_pain(Some(&FormNumber::from("0.3"))), 5);
        assert_eq!(resolve_pain(Some(&FormNumber::from("-2"))), 5);

        // The CLI submits text and the form submits numbers; both score alike.
        let mut as_text = request(Some("runny nose"));
        as_text.pain_severity = Some(FormNumber::from("0"));
        let mut as_number = request(Some("runny nose"));
        as_number.pain_severity = Some(FormNumber::Number(0.0));

        let text_score = assess(&as_text, Utc::now()).unwrap().triage.urgency_score;
        let number_score = assess(&as_number, Utc::now()).unwrap().triage.urgency_score;
        assert_eq!(text_score, 15);
        assert_eq!(text_score, number_score);
    }

    #[test]
    fn runny_nose_repeats_stay_warm_advice() {
        let report = assess(&request(Some("runny nose")), Utc::now()).unwrap();
        let lifestyle = &report.recommendations.lifestyle;

        // Common Cold and Flu each prepend the line.
        assert_eq!(lifestyle.len(), 5);
        assert_eq!(lifestyle[0], "Avoid cold environments and stay warm");
        assert_eq!(lifestyle[1], "Avoid cold environments and stay warm");
        assert_eq!(lifestyle[2], "Maintain a balanced diet rich in fruits and vegetables");
    }

    #[test]
    fn unparsable_vitals_contribute_nothing() {
        let mut req = request(Some("runny nose"));
        req.pain_severity = Some(FormNumber::Number(2.0));
        req.temperature = Some(FormNumber::from("hot"));
        req.heart_rate = Some(FormNumber::from("racing"));

        let input = triage_input(&req).unwrap();
        assert_eq!(input.temperature, None);
        assert_eq!(input.heart_rate, None);

        let report = assess(&req, Utc::now()).unwrap();
        assert_eq!(report.triage.urgency_score, 6);
        // The raw text is still echoed back.
        assert_eq!(report.symptoms.vital_signs.temperature, "hot");
    }

    #[test]
    fn headache_example_scores_moderate() {
        let mut req = request(Some("I have a severe headache and fever"));
        req.pain_severity = Some(FormNumber::Number(8.0));
        req.temperature = Some(FormNumber::from("104"));

        let report = assess(&req, Utc::now()).unwrap();
        assert_eq!(report.triage.urgency_score, 44);
        assert_eq!(report.triage.priority, Priority::Moderate);
        assert_eq!(report.triage.estimated_wait_time, "24-48 hours");
        assert_eq!(report.symptoms.vital_signs.heart_rate, NOT_RECORDED);
    }

    #[test]
    fn no_match_uses_fallback_condition() {
        let report = assess(&request(Some("just feeling off")), Utc::now()).unwrap();

        assert_eq!(report.analysis.probable_conditions.len(), 1);
        assert_eq!(report.analysis.probable_conditions[0].condition, FALLBACK_CONDITION);
        assert_eq!(report.analysis.ai_confidence, FALLBACK_CONFIDENCE);
        // Lifestyle advice is built from the empty match list.
        assert_eq!(report.recommendations.lifestyle.len(), 5);
    }

    #[test]
    fn defaults_fill_missing_patient_fields() {
        let report = assess(&request(Some("cough")), Utc::now()).unwrap();

        assert_eq!(report.patient_info.name, "Anonymous");
        assert_eq!(report.patient_info.age, "Not specified");
        assert_eq!(report.symptoms.pain_severity, 5);
        assert_eq!(report.symptoms.vital_signs.temperature, "Not recorded");
    }

    #[test]
    fn ai_confidence_is_rounded_mean() {
        // cough → 95, 85, 70, 55, 40 → mean 69.
        let report = assess(&request(Some("cough")), Utc::now()).unwrap();
        assert_eq!(report.analysis.ai_confidence, 69);

        let conds: Vec<ProbableCondition> = [95u8, 90]
            .iter()
            .map(|c| ProbableCondition {
                condition: "x".to_string(),
                confidence: *c,
                description: String::new(),
            })
            .collect();
        // 92.5 rounds up.
        assert_eq!(mean_confidence(&conds), 93);
    }

    #[test]
    fn urgent_report_carries_emergency_advice() {
        let mut req = request(Some("chest pain and shortness of breath"));
        req.patient_name = Some("R. Ram".to_string());
        req.age = Some(FormNumber::Number(45.0));
        req.pain_severity = Some(FormNumber::Number(9.0));

        let report = assess(&req, Utc::now()).unwrap();
        assert_eq!(report.triage.urgency_score, 92);
        assert_eq!(report.triage.priority, Priority::Urgent);
        assert_eq!(report.patient_info.age, 45.0);
        assert_eq!(
            report.recommendations.immediate[0],
            "Seek emergency medical care immediately"
        );
    }
}
