//! OpenFDA drug label and adverse-event client.
//!
//! Two endpoints are used, both keyed on the brand name:
//!
//! - `GET {base}/drug/label.json?search=openfda.brand_name:"<name>"&limit=N`
//! - `GET {base}/drug/event.json?search=patient.drug.openfda.brand_name:"<name>"&limit=N`
//!
//! OpenFDA answers 404 when nothing matches; that is an empty list here.

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde::{de::DeserializeOwned, Deserialize};
use tracing::debug;

use triage_config::UpstreamSettings;
use triage_contracts::{
    lookup::{AdverseEventReport, DrugLabel},
    Result,
};
use triage_core::traits::DrugLabelSource;

use crate::http::{build_client, check_status, decode, normalize_base, send_error};

const SERVICE: &str = "openfda";

/// Envelope shared by both OpenFDA endpoints.
#[derive(Deserialize)]
struct ResultsEnvelope<T> {
    #[serde(default = "Vec::new")]
    results: Vec<T>,
}

/// HTTP client for the public OpenFDA API.
#[derive(Debug, Clone)]
pub struct OpenFdaClient {
    base_url: String,
    client: Client,
    timeout_secs: u64,
    label_limit: u32,
    event_limit: u32,
}

impl OpenFdaClient {
    /// Create a client from the upstream settings.
    pub fn new(settings: &UpstreamSettings) -> Result<Self> {
        Ok(Self {
            base_url: normalize_base(&settings.openfda_base),
            client: build_client(SERVICE, settings.timeout_secs)?,
            timeout_secs: settings.timeout_secs,
            label_limit: settings.label_limit,
            event_limit: settings.adverse_event_limit,
        })
    }

    fn label_request(&self, brand_name: &str) -> RequestBuilder {
        self.client
            .get(format!("{}/drug/label.json", self.base_url))
            .query(&[
                ("search", format!("openfda.brand_name:\"{brand_name}\"")),
                ("limit", self.label_limit.to_string()),
            ])
    }

    fn event_request(&self, brand_name: &str) -> RequestBuilder {
        self.client
            .get(format!("{}/drug/event.json", self.base_url))
            .query(&[
                ("search", format!("patient.drug.openfda.brand_name:\"{brand_name}\"")),
                ("limit", self.event_limit.to_string()),
            ])
    }

    async fn fetch_results<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<Vec<T>> {
        let response = request
            .send()
            .await
            .map_err(|e| send_error(SERVICE, &self.base_url, self.timeout_secs, e))?;

        match check_status(SERVICE, response).await? {
            Some(response) => Ok(decode::<ResultsEnvelope<T>>(SERVICE, response).await?.results),
            None => Ok(Vec::new()),
        }
    }
}

#[async_trait]
impl DrugLabelSource for OpenFdaClient {
    async fn search_labels(&self, brand_name: &str) -> Result<Vec<DrugLabel>> {
        debug!(drug = %brand_name, "querying OpenFDA labels");
        self.fetch_results(self.label_request(brand_name)).await
    }

    async fn adverse_events(&self, brand_name: &str) -> Result<Vec<AdverseEventReport>> {
        debug!(drug = %brand_name, "querying OpenFDA adverse events");
        self.fetch_results(self.event_request(brand_name)).await
    }
}

#[cfg(test)]
mod tests {
    use axum::{extract::Query, http::StatusCode, routing::get, Json, Router};
    use serde_json::json;
    use std::collections::HashMap;

    use triage_contracts::TriageError;

    use super::*;

    fn settings(base: &str) -> UpstreamSettings {
        UpstreamSettings {
            openfda_base: base.to_string(),
            timeout_secs: 2,
            ..Default::default()
        }
    }

    /// Serve `app` on an ephemeral local port and return its base URL.
    async fn serve(app: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{addr}/")
    }

    #[test]
    fn label_url_carries_quoted_brand_and_limit() {
        let client = OpenFdaClient::new(&settings("https://api.fda.gov/")).unwrap();
        let request = client.label_request("Advil").build().unwrap();
        let url = request.url();

        assert_eq!(url.path(), "/drug/label.json");
        let pairs: HashMap<_, _> = url.query_pairs().into_owned().collect();
        assert_eq!(pairs["search"], "openfda.brand_name:\"Advil\"");
        assert_eq!(pairs["limit"], "5");
    }

    #[test]
    fn event_url_uses_patient_drug_field() {
        let client = OpenFdaClient::new(&settings("https://api.fda.gov")).unwrap();
        let request = client.event_request("Tylenol").build().unwrap();
        let pairs: HashMap<_, _> = request.url().query_pairs().into_owned().collect();

        assert_eq!(request.url().path(), "/drug/event.json");
        assert_eq!(pairs["search"], "patient.drug.openfda.brand_name:\"Tylenol\"");
        assert_eq!(pairs["limit"], "10");
    }

    #[tokio::test]
    async fn labels_are_decoded() {
        let app = Router::new().route(
            "/drug/label.json",
            get(|Query(q): Query<HashMap<String, String>>| async move {
                assert!(q["search"].contains("Advil"));
                Json(json!({
                    "meta": {},
                    "results": [
                        { "openfda": { "brand_name": ["Advil"] }, "purpose": ["Pain reliever"] }
                    ]
                }))
            }),
        );
        let client = OpenFdaClient::new(&settings(&serve(app).await)).unwrap();

        let labels = client.search_labels("Advil").await.unwrap();
        assert_eq!(labels.len(), 1);
        assert_eq!(labels[0].purpose.as_deref(), Some(&["Pain reliever".to_string()][..]));
    }

    #[tokio::test]
    async fn not_found_is_empty() {
        let app = Router::new().route(
            "/drug/event.json",
            get(|| async {
                (
                    StatusCode::NOT_FOUND,
                    Json(json!({ "error": { "code": "NOT_FOUND", "message": "No matches found!" } })),
                )
            }),
        );
        let client = OpenFdaClient::new(&settings(&serve(app).await)).unwrap();

        assert!(client.adverse_events("nothing").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn server_error_is_upstream_error() {
        let app = Router::new().route(
            "/drug/label.json",
            get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
        );
        let client = OpenFdaClient::new(&settings(&serve(app).await)).unwrap();

        match client.search_labels("Advil").await.unwrap_err() {
            TriageError::Upstream { service, reason } => {
                assert_eq!(service, "openfda");
                assert!(reason.contains("500"), "got: {reason}");
            }
            other => panic!("expected Upstream, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn unreachable_host_is_upstream_error() {
        // Port 9 (discard) is not served on loopback in test environments.
        let client = OpenFdaClient::new(&settings("http://127.0.0.1:9")).unwrap();
        let err = client.search_labels("Advil").await.unwrap_err();
        assert!(matches!(err, TriageError::Upstream { .. }));
    }
}
