//! # triage-core
//!
//! Symptom matching and triage scoring for the triage service.
//!
//! ## Overview
//!
//! The two scoring functions are pure and total:
//!
//! - [`matcher::analyze_symptoms`]: free text → ranked probable conditions.
//! - [`scorer::calculate_triage_priority`]: symptoms + pain + vitals →
//!   urgency score and priority band.
//!
//! [`report::assess`] wraps both into the full assessment document, and
//! [`lookup`] reshapes drug and health-statistics lookups behind the seams
//! declared in [`traits`].
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use triage_core::{matcher::analyze_symptoms, report::assess};
//!
//! let conditions = analyze_symptoms("cough and sore throat");
//! let report = assess(&request, chrono::Utc::now())?;
//! ```

pub mod advice;
pub mod imaging;
pub mod lookup;
pub mod matcher;
pub mod report;
pub mod reshape;
pub mod scorer;
pub mod tables;
pub mod traits;

pub use matcher::analyze_symptoms;
pub use report::assess;
pub use scorer::calculate_triage_priority;
