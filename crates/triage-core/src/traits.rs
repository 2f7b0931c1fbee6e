//! Upstream lookup seams.
//!
//! Two public REST services are consulted by the service, never by the
//! scoring core:
//!
//! - `DrugLabelSource`: drug labels and adverse-event reports (OpenFDA)
//! - `HealthStatsSource`: per-country and global health statistics (disease.sh)
//!
//! `triage-lookup` provides the HTTP implementations; tests substitute
//! in-process mocks.

use async_trait::async_trait;

use triage_contracts::{
    lookup::{AdverseEventReport, DrugLabel, RegionStats},
    Result,
};

/// Drug label and adverse-event lookup by brand name.
#[async_trait]
pub trait DrugLabelSource: Send + Sync {
    /// Labels whose brand name matches `brand_name`. No match is an empty list.
    async fn search_labels(&self, brand_name: &str) -> Result<Vec<DrugLabel>>;

    /// A sample of adverse-event reports mentioning `brand_name`.
    async fn adverse_events(&self, brand_name: &str) -> Result<Vec<AdverseEventReport>>;
}

/// Population health statistics lookup.
#[async_trait]
pub trait HealthStatsSource: Send + Sync {
    /// Statistics for one country, or `None` when the country is unknown.
    async fn country(&self, country: &str) -> Result<Option<RegionStats>>;

    /// Worldwide aggregate statistics, or `None` when unavailable.
    async fn global(&self) -> Result<Option<RegionStats>>;
}
