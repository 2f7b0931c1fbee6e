//! # triage-contracts
//!
//! Shared request, result, and error types for the symptom triage service.
//!
//! All crates in the workspace import from here. No scoring logic lives in
//! this crate: only data definitions, lenient form-field parsing, and the
//! error type.

pub mod assessment;
pub mod error;
pub mod imaging;
pub mod intake;
pub mod lookup;
pub mod queue;

pub use error::{Result, TriageError};
