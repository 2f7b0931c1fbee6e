//! Intake request types.
//!
//! `IntakeRequest` is what the intake form posts. Numeric fields arrive either
//! as JSON numbers or as free text typed into a form field, so they are
//! carried as `FormNumber` and parsed leniently: a leading numeric prefix is
//! accepted ("101.5F" reads as 101.5) and anything else is "no data".

use serde::{Deserialize, Serialize};

/// A numeric form field as submitted: a JSON number or text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FormNumber {
    Number(f64),
    Text(String),
}

impl FormNumber {
    /// True when the field carries a value at all.
    ///
    /// Zero and the empty string count as "not filled in"; the intake form
    /// never submits a literal zero for a measurement that was taken.
    pub fn is_recorded(&self) -> bool {
        match self {
            FormNumber::Number(n) => *n != 0.0 && !n.is_nan(),
            FormNumber::Text(s) => !s.is_empty(),
        }
    }

    /// Read the field as a decimal, accepting a leading numeric prefix.
    pub fn as_decimal(&self) -> Option<f64> {
        if !self.is_recorded() {
            return None;
        }
        match self {
            FormNumber::Number(n) => Some(*n),
            FormNumber::Text(s) => leading_decimal(s),
        }
    }

    /// Read the field as a whole number, truncating any fractional part.
    pub fn as_whole(&self) -> Option<i64> {
        if !self.is_recorded() {
            return None;
        }
        match self {
            FormNumber::Number(n) if n.is_finite() => Some(n.trunc() as i64),
            FormNumber::Number(_) => None,
            FormNumber::Text(s) => leading_integer(s),
        }
    }
}

impl From<f64> for FormNumber {
    fn from(n: f64) -> Self {
        FormNumber::Number(n)
    }
}

impl From<&str> for FormNumber {
    fn from(s: &str) -> Self {
        FormNumber::Text(s.to_string())
    }
}

/// Longest prefix of `s` (after leading whitespace) that reads as a decimal.
fn leading_decimal(s: &str) -> Option<f64> {
    let s = s.trim_start();
    let candidate: String = s
        .chars()
        .take_while(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E'))
        .collect();

    (1..=candidate.len())
        .rev()
        .find_map(|end| candidate[..end].parse::<f64>().ok())
        .filter(|n| n.is_finite())
}

/// Optional sign followed by digits, after leading whitespace.
fn leading_integer(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let (sign, rest) = match s.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, s.strip_prefix('+').unwrap_or(s)),
    };
    let digits: String = rest.chars().take_while(|c| c.is_ascii_digit()).collect();
    digits.parse::<i64>().ok().map(|n| sign * n)
}

/// The body posted by the intake form to `/api/analyze` and `/api/patients`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntakeRequest {
    #[serde(default)]
    pub patient_name: Option<String>,
    #[serde(default)]
    pub age: Option<FormNumber>,
    #[serde(default)]
    pub primary_symptoms: Option<String>,
    #[serde(default)]
    pub pain_severity: Option<FormNumber>,
    #[serde(default)]
    pub temperature: Option<FormNumber>,
    #[serde(default)]
    pub heart_rate: Option<FormNumber>,
}

/// The scorer's view of one request: validated text plus parsed vitals.
///
/// Created per request and discarded after scoring.
#[derive(Debug, Clone, PartialEq)]
pub struct TriageInput {
    /// Free-text symptom description. Never blank.
    pub symptoms: String,
    /// Pain on a 1–10 scale.
    pub pain_severity: u8,
    /// Body temperature in °F, if one was recorded and parsed.
    pub temperature: Option<f64>,
    /// Heart rate in beats per minute, if one was recorded and parsed.
    pub heart_rate: Option<i64>,
}

impl TriageInput {
    /// Pain severity used when the form leaves the field empty.
    pub const DEFAULT_PAIN: u8 = 5;
}
