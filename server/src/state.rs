//! Shared handler state.

use std::{sync::Arc, time::Duration};

use chrono::Utc;

use triage_config::ServiceConfig;
use triage_contracts::Result;
use triage_core::traits::{DrugLabelSource, HealthStatsSource};
use triage_lookup::{DiseaseShClient, OpenFdaClient};
use triage_queue::InMemoryPatientQueue;

/// Everything a handler needs. Cheap to clone; every field is shared.
#[derive(Clone)]
pub struct AppState {
    pub drugs: Arc<dyn DrugLabelSource>,
    pub health_stats: Arc<dyn HealthStatsSource>,
    pub queue: InMemoryPatientQueue,
    pub imaging_delay: Duration,
}

impl AppState {
    pub fn new(
        drugs: Arc<dyn DrugLabelSource>,
        health_stats: Arc<dyn HealthStatsSource>,
        queue: InMemoryPatientQueue,
        imaging_delay: Duration,
    ) -> Self {
        Self {
            drugs,
            health_stats,
            queue,
            imaging_delay,
        }
    }

    /// Wire the HTTP lookup clients and a freshly seeded queue.
    pub fn from_config(config: &ServiceConfig) -> Result<Self> {
        Ok(Self::new(
            Arc::new(OpenFdaClient::new(&config.upstream)?),
            Arc::new(DiseaseShClient::new(&config.upstream)?),
            InMemoryPatientQueue::seeded(Utc::now()),
            Duration::from_millis(config.imaging.simulated_delay_ms),
        ))
    }
}
