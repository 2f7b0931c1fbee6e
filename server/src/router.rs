//! HTTP router.
//!
//! All routes live under `/api/`. Layers (outermost first): request tracing,
//! then permissive CORS so a browser front end on another origin can call the
//! API.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{endpoints, state::AppState};

/// Build the service router over `state`.
pub fn router(state: AppState) -> Router {
    let api = Router::new()
        .route(
            "/analyze",
            get(endpoints::analyze::status).post(endpoints::analyze::analyze),
        )
        .route(
            "/drugs",
            get(endpoints::drugs::search).post(endpoints::drugs::adverse_events),
        )
        .route("/health-stats", get(endpoints::health_stats::stats))
        .route(
            "/patients",
            get(endpoints::patients::list).post(endpoints::patients::admit),
        )
        .route("/imaging", post(endpoints::imaging::analyze));

    Router::new()
        .nest("/api", api)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
