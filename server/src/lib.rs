//! # triage-server
//!
//! The HTTP surface of the symptom triage service: an `axum` router over
//! [`AppState`], plus the `triage` command-line binary.
//!
//! ```rust,ignore
//! let config = ServiceConfig::load(None)?;
//! let app = triage_server::router(AppState::from_config(&config)?);
//! axum::serve(listener, app).await?;
//! ```

pub mod endpoints;
pub mod error;
pub mod router;
pub mod state;

pub use error::ApiError;
pub use router::router;
pub use state::AppState;
