//! Configuration schema.
//!
//! A `ServiceConfig` is deserialized from TOML. Every section and every key
//! is optional; missing values fall back to the defaults below, so an empty
//! document is a valid configuration.
//!
//! ```toml
//! [server]
//! bind = "0.0.0.0:8080"
//!
//! [upstream]
//! timeout_secs = 5
//! ```

use serde::{Deserialize, Serialize};

pub const DEFAULT_BIND: &str = "127.0.0.1:3000";
pub const DEFAULT_OPENFDA_BASE: &str = "https://api.fda.gov";
pub const DEFAULT_DISEASE_SH_BASE: &str = "https://disease.sh/v3/covid-19";

/// Top-level configuration document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServiceConfig {
    pub server: ServerSettings,
    pub upstream: UpstreamSettings,
    pub imaging: ImagingSettings,
}

/// HTTP listener settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerSettings {
    /// Socket address the HTTP server binds to.
    pub bind: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            bind: DEFAULT_BIND.to_string(),
        }
    }
}

/// Public lookup services consulted by the drug and health-statistics
/// endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct UpstreamSettings {
    /// Base URL of the OpenFDA API (no trailing path).
    pub openfda_base: String,

    /// Base URL of the disease.sh statistics API, including the dataset path.
    pub disease_sh_base: String,

    /// Per-request timeout for upstream calls.
    pub timeout_secs: u64,

    /// Most labels requested per drug search.
    pub label_limit: u32,

    /// Most adverse-event reports sampled per drug.
    pub adverse_event_limit: u32,
}

impl Default for UpstreamSettings {
    fn default() -> Self {
        Self {
            openfda_base: DEFAULT_OPENFDA_BASE.to_string(),
            disease_sh_base: DEFAULT_DISEASE_SH_BASE.to_string(),
            timeout_secs: 10,
            label_limit: 5,
            adverse_event_limit: 10,
        }
    }
}

/// Simulated imaging analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ImagingSettings {
    /// Artificial processing delay before the canned result is returned.
    pub simulated_delay_ms: u64,
}

impl Default for ImagingSettings {
    fn default() -> Self {
        Self {
            simulated_delay_ms: 3000,
        }
    }
}
