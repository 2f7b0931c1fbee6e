//! Loading and validating `ServiceConfig` documents.

use std::{net::SocketAddr, path::Path};

use tracing::debug;

use triage_contracts::{Result, TriageError};

use crate::settings::ServiceConfig;

impl ServiceConfig {
    /// Parse `s` as TOML and validate the result.
    ///
    /// Returns `TriageError::Config` if the TOML is malformed, contains
    /// unknown keys, or holds values that fail `validate`.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: ServiceConfig = toml::from_str(s).map_err(|e| TriageError::Config {
            reason: format!("failed to parse service TOML: {}", e),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Read the file at `path` and parse it as service configuration.
    ///
    /// Returns `TriageError::Config` if the file cannot be read or its
    /// contents are not a valid configuration.
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| TriageError::Config {
            reason: format!("failed to read config file '{}': {}", path.display(), e),
        })?;
        debug!(path = %path.display(), "loaded service configuration");
        Self::from_toml_str(&contents)
    }

    /// Load from `path` when given, otherwise use the built-in defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::from_file(p),
            None => Ok(Self::default()),
        }
    }

    /// The bind address as a socket address.
    pub fn bind_addr(&self) -> Result<SocketAddr> {
        self.server.bind.parse().map_err(|e| TriageError::Config {
            reason: format!("invalid bind address '{}': {}", self.server.bind, e),
        })
    }

    /// Reject values that parse but cannot work.
    pub fn validate(&self) -> Result<()> {
        self.bind_addr()?;

        for (name, url) in [
            ("upstream.openfda_base", &self.upstream.openfda_base),
            ("upstream.disease_sh_base", &self.upstream.disease_sh_base),
        ] {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(TriageError::Config {
                    reason: format!("{} must be an http(s) URL, got '{}'", name, url),
                });
            }
        }

        if self.upstream.timeout_secs == 0 {
            return Err(TriageError::Config {
                reason: "upstream.timeout_secs must be greater than zero".to_string(),
            });
        }
        if self.upstream.label_limit == 0 || self.upstream.adverse_event_limit == 0 {
            return Err(TriageError::Config {
                reason: "upstream result limits must be greater than zero".to_string(),
            });
        }

        Ok(())
    }

    /// Render the configuration back to TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| TriageError::Config {
            reason: format!("failed to render service TOML: {}", e),
        })
    }
}
