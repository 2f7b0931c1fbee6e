//! Canned chest X-ray result for the simulated imaging endpoint.
//!
//! No image is inspected. Every request receives the same three findings;
//! only the image type label and timestamp vary.

use chrono::{DateTime, Utc};

use triage_contracts::imaging::{ImagingFinding, ImagingReport, ImagingRequest};

pub const DEFAULT_IMAGE_TYPE: &str = "Chest X-Ray";

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// The simulated analysis for `request`, stamped with `now`.
pub fn simulated_analysis(request: &ImagingRequest, now: DateTime<Utc>) -> ImagingReport {
    let image_type = request
        .image_type
        .as_deref()
        .filter(|t| !t.is_empty())
        .unwrap_or(DEFAULT_IMAGE_TYPE);

    ImagingReport {
        success: true,
        timestamp: now,
        image_type: image_type.to_string(),
        diagnoses: vec![
            ImagingFinding {
                name: "Pneumonia (Bacterial)".to_string(),
                confidence: 89,
                severity: "Moderate to Severe".to_string(),
                features: strings(&[
                    "Consolidation in right lower lobe",
                    "Air bronchogram visible",
                    "Increased opacity",
                ]),
                recommendations: strings(&[
                    "Immediate antibiotic therapy recommended",
                    "Consider chest X-ray follow-up in 48-72 hours",
                    "Monitor oxygen saturation",
                    "Hospitalization may be required if respiratory distress present",
                ]),
            },
            ImagingFinding {
                name: "Viral Pneumonia".to_string(),
                confidence: 45,
                severity: "Mild to Moderate".to_string(),
                features: strings(&["Clear lung fields", "Normal cardiac silhouette"]),
                recommendations: Vec::new(),
            },
            ImagingFinding {
                name: "Normal Chest X-ray".to_string(),
                confidence: 12,
                severity: "N/A".to_string(),
                features: strings(&["Clear lung fields", "Normal cardiac silhouette"]),
                recommendations: Vec::new(),
            },
        ],
        overall_assessment:
            "High probability of bacterial pneumonia. Recommend immediate clinical evaluation."
                .to_string(),
        ai_confidence: 94,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_type_defaults_when_missing_or_empty() {
        let now = Utc::now();
        assert_eq!(simulated_analysis(&ImagingRequest::default(), now).image_type, DEFAULT_IMAGE_TYPE);

        let empty = ImagingRequest { image_type: Some(String::new()) };
        assert_eq!(simulated_analysis(&empty, now).image_type, DEFAULT_IMAGE_TYPE);

        let ct = ImagingRequest { image_type: Some("CT Scan".to_string()) };
        assert_eq!(simulated_analysis(&ct, now).image_type, "CT Scan");
    }

    #[test]
    fn findings_are_ranked_by_confidence() {
        let report = simulated_analysis(&ImagingRequest::default(), Utc::now());
        let confidences: Vec<u8> = report.diagnoses.iter().map(|d| d.confidence).collect();
        assert_eq!(confidences, [89, 45, 12]);
        assert_eq!(report.ai_confidence, 94);
    }

    #[test]
    fn only_the_leading_finding_carries_recommendations() {
        let report = simulated_analysis(&ImagingRequest::default(), Utc::now());
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["diagnoses"][0]["recommendations"].as_array().unwrap().len(), 4);
        assert!(json["diagnoses"][1].get("recommendations").is_none());
        assert_eq!(json["imageType"], "Chest X-Ray");
        assert!(json["overallAssessment"].as_str().unwrap().starts_with("High probability"));
    }
}
