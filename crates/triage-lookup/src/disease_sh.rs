//! disease.sh health statistics client.
//!
//! `GET {base}/countries/{country}` and `GET {base}/all`. An unknown country
//! comes back as a body carrying only a `message` field.

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde_json::Value;
use tracing::debug;

use triage_config::UpstreamSettings;
use triage_contracts::{lookup::RegionStats, Result, TriageError};
use triage_core::traits::HealthStatsSource;

use crate::http::{build_client, check_status, decode, normalize_base, send_error};

const SERVICE: &str = "disease.sh";

/// HTTP client for the public disease.sh API.
#[derive(Debug, Clone)]
pub struct DiseaseShClient {
    base_url: String,
    client: Client,
    timeout_secs: u64,
}

impl DiseaseShClient {
    /// Create a client from the upstream settings.
    pub fn new(settings: &UpstreamSettings) -> Result<Self> {
        Ok(Self {
            base_url: normalize_base(&settings.disease_sh_base),
            client: build_client(SERVICE, settings.timeout_secs)?,
            timeout_secs: settings.timeout_secs,
        })
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| TriageError::upstream(SERVICE, format!("bad base URL {}: {e}", self.base_url)))?;
        url.path_segments_mut()
            .map_err(|()| TriageError::upstream(SERVICE, format!("base URL {} cannot take a path", self.base_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// The country name is pushed as a single percent-encoded segment, so
    /// `/`, `?` and `#` in it cannot reach another route.
    fn country_url(&self, country: &str) -> Result<Url> {
        self.endpoint(&["countries", country.trim()])
    }

    fn global_url(&self) -> Result<Url> {
        self.endpoint(&["all"])
    }

    async fn fetch(&self, url: Url) -> Result<Option<RegionStats>> {
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| send_error(SERVICE, &self.base_url, self.timeout_secs, e))?;

        let Some(response) = check_status(SERVICE, response).await? else {
            return Ok(None);
        };

        let body: Value = decode(SERVICE, response).await?;
        if let Some(message) = body.get("message").and_then(Value::as_str) {
            debug!(url = %url, message = %message, "disease.sh reported no data");
            return Ok(None);
        }
        if body.is_null() {
            return Ok(None);
        }

        serde_json::from_value(body)
            .map(Some)
            .map_err(|e| TriageError::upstream(SERVICE, format!("malformed statistics: {e}")))
    }
}

#[async_trait]
impl HealthStatsSource for DiseaseShClient {
    async fn country(&self, country: &str) -> Result<Option<RegionStats>> {
        let country = country.trim();
        if country.is_empty() || country == "." || country == ".." {
            return Ok(None);
        }
        self.fetch(self.country_url(country)?).await
    }

    async fn global(&self) -> Result<Option<RegionStats>> {
        self.fetch(self.global_url()?).await
    }
}
