//! Static clinical lookup tables.
//!
//! All data in this module is hardcoded and fixed at build time. Nothing
//! mutates it at runtime. Keyword matching elsewhere is a case-insensitive
//! substring scan, so every keyword here is lower case.

use std::collections::HashMap;
use std::sync::LazyLock;

// ── Symptom → condition table ────────────────────────────────────────────────

/// Symptom keyword → candidate conditions, most likely first.
///
/// Order matters twice: the position of a condition within its list sets its
/// confidence, and the order of keywords decides tie-breaking between equally
/// scored conditions.
pub static SYMPTOM_CONDITIONS: &[(&str, &[&str])] = &[
    // Respiratory
    ("cough", &["Common Cold", "Bronchitis", "Pneumonia", "COVID-19", "Asthma"]),
    ("shortness of breath", &["Asthma", "COPD", "Pneumonia", "Heart Failure", "Anxiety"]),
    ("chest pain", &["Angina", "Heart Attack", "Costochondritis", "GERD", "Pulmonary Embolism"]),
    ("wheezing", &["Asthma", "COPD", "Allergic Reaction", "Bronchitis"]),
    // Cardiac
    ("palpitations", &["Arrhythmia", "Anxiety", "Hyperthyroidism", "Anemia"]),
    ("rapid heartbeat", &["Tachycardia", "Anxiety", "Dehydration", "Fever"]),
    // Neurological
    ("headache", &["Tension Headache", "Migraine", "Sinusitis", "Hypertension", "Dehydration"]),
    ("dizziness", &["Vertigo", "Low Blood Pressure", "Anemia", "Inner Ear Infection", "Dehydration"]),
    ("confusion", &["Delirium", "Stroke", "Hypoglycemia", "Infection", "Medication Side Effect"]),
    ("numbness", &["Peripheral Neuropathy", "Stroke", "Carpal Tunnel", "Multiple Sclerosis"]),
    // Gastrointestinal
    ("nausea", &["Gastritis", "Food Poisoning", "Pregnancy", "Migraine", "Medication Side Effect"]),
    ("vomiting", &["Gastroenteritis", "Food Poisoning", "Migraine", "Appendicitis"]),
    ("abdominal pain", &["Gastritis", "Appendicitis", "IBS", "Gallstones", "Kidney Stones"]),
    ("diarrhea", &["Gastroenteritis", "Food Poisoning", "IBS", "Infection"]),
    // General
    ("fever", &["Viral Infection", "Bacterial Infection", "COVID-19", "Flu", "UTI"]),
    ("fatigue", &["Anemia", "Thyroid Disorder", "Depression", "Sleep Disorder", "Diabetes"]),
    ("weakness", &["Anemia", "Dehydration", "Electrolyte Imbalance", "Infection"]),
    ("weight loss", &["Diabetes", "Hyperthyroidism", "Cancer", "Depression", "Infection"]),
    // Musculoskeletal
    ("joint pain", &["Arthritis", "Gout", "Lupus", "Injury", "Viral Infection"]),
    ("back pain", &["Muscle Strain", "Herniated Disc", "Sciatica", "Kidney Infection"]),
    ("muscle pain", &["Fibromyalgia", "Viral Infection", "Overexertion", "Medication Side Effect"]),
    // Skin
    ("rash", &["Allergic Reaction", "Eczema", "Psoriasis", "Viral Infection", "Drug Reaction"]),
    ("itching", &["Allergic Reaction", "Eczema", "Liver Disease", "Dry Skin"]),
    // ENT
    ("sore throat", &["Pharyngitis", "Tonsillitis", "Strep Throat", "Common Cold", "Mono"]),
    ("runny nose", &["Common Cold", "Allergies", "Sinusitis", "Flu"]),
    ("ear pain", &["Otitis Media", "Otitis Externa", "TMJ", "Referred Pain"]),
];

// ── Condition descriptions ───────────────────────────────────────────────────

/// Used for any condition without an entry in `CONDITION_DESCRIPTIONS`.
pub const DEFAULT_DESCRIPTION: &str = "A medical condition requiring professional evaluation.";

pub static CONDITION_DESCRIPTIONS: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| {
        HashMap::from([
            ("Common Cold", "A viral infection of the upper respiratory tract causing runny nose, congestion, and mild symptoms."),
            ("Bronchitis", "Inflammation of the bronchial tubes causing cough and mucus production."),
            ("Pneumonia", "Lung infection causing inflammation and fluid in the air sacs."),
            ("COVID-19", "Respiratory illness caused by the SARS-CoV-2 virus."),
            ("Asthma", "Chronic condition causing airway inflammation and breathing difficulty."),
            ("Migraine", "Severe headache often accompanied by nausea and light sensitivity."),
            ("Tension Headache", "Common headache type causing mild to moderate pain."),
            ("Gastritis", "Inflammation of the stomach lining causing pain and discomfort."),
            ("Gastroenteritis", "Inflammation of the stomach and intestines causing vomiting and diarrhea."),
            ("Flu", "Influenza virus infection causing fever, body aches, and respiratory symptoms."),
            ("Anemia", "Condition where blood lacks enough healthy red blood cells."),
            ("Diabetes", "Metabolic disorder affecting blood sugar regulation."),
            ("Arthritis", "Inflammation of joints causing pain and stiffness."),
            ("Hypertension", "High blood pressure that can lead to serious health problems."),
            ("Anxiety", "Mental health condition causing excessive worry and physical symptoms."),
            ("Depression", "Mental health disorder causing persistent sadness and loss of interest."),
            ("UTI", "Urinary tract infection causing pain and frequent urination."),
        ])
    });

/// Look up the description for `condition`, falling back to the default.
pub fn describe_condition(condition: &str) -> &'static str {
    CONDITION_DESCRIPTIONS
        .get(condition)
        .copied()
        .unwrap_or(DEFAULT_DESCRIPTION)
}

// ── Risk keywords ────────────────────────────────────────────────────────────

/// Any of these in the symptom text adds the critical bonus.
pub const CRITICAL_KEYWORDS: &[&str] = &[
    "chest pain",
    "difficulty breathing",
    "unconscious",
    "stroke",
    "heart attack",
    "severe bleeding",
    "seizure",
];

/// Any of these in the symptom text adds the high-priority bonus.
pub const HIGH_PRIORITY_KEYWORDS: &[&str] = &[
    "shortness of breath",
    "high fever",
    "severe pain",
    "confusion",
    "numbness",
    "vomiting blood",
];
