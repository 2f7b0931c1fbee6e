//! # triage-config
//!
//! TOML configuration for the symptom triage service.
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use std::path::Path;
//! use triage_config::ServiceConfig;
//!
//! let config = ServiceConfig::from_file(Path::new("config/triage.toml"))?;
//! let addr = config.bind_addr()?;
//! ```
//!
//! Every key is optional. An absent file (`ServiceConfig::load(None)`) or an
//! empty document yields the defaults: bind `127.0.0.1:3000`, the public
//! OpenFDA and disease.sh endpoints, a 10 s upstream timeout, and a 3 s
//! simulated imaging delay.

pub mod loader;
pub mod settings;

pub use settings::{ImagingSettings, ServerSettings, ServiceConfig, UpstreamSettings};

// ── Tests ─────────────────────────────────────────────────────────────────────
