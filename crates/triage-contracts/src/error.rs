//! Error types for the triage service.
//!
//! Every fallible operation in the workspace returns `triage_contracts::Result<T>`.
//! Only one class matters to the scoring core (`InvalidInput`); the rest
//! belong to the configuration, upstream lookup, and queue layers.

use thiserror::Error;

/// The unified error type for the triage service.
#[derive(Debug, Error)]
pub enum TriageError {
    /// A required request field is missing or blank.
    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },

    /// A configuration file could not be read or parsed.
    #[error("configuration error: {reason}")]
    Config { reason: String },

    /// An upstream public API could not be reached or returned garbage.
    #[error("upstream lookup failed ({service}): {reason}")]
    Upstream { service: String, reason: String },

    /// The in-memory patient queue lock was poisoned.
    #[error("patient queue unavailable: {reason}")]
    QueueUnavailable { reason: String },
}

impl TriageError {
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }

    pub fn upstream(service: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Upstream {
            service: service.into(),
            reason: reason.into(),
        }
    }
}

/// Convenience alias used throughout the triage crates.
pub type Result<T, E = TriageError> = std::result::Result<T, E>;
