//! # triage-lookup
//!
//! HTTP implementations of the lookup seams declared in `triage-core`:
//!
//! - [`OpenFdaClient`] implements `DrugLabelSource` against the OpenFDA API.
//! - [`DiseaseShClient`] implements `HealthStatsSource` against disease.sh.
//!
//! Neither service needs an API key. Both clients report transport failures
//! and unexpected statuses as `TriageError::Upstream`; "nothing found" is an
//! empty result, not an error.

mod http;

pub mod disease_sh;
pub mod openfda;

pub use disease_sh::DiseaseShClient;
pub use openfda::OpenFdaClient;
