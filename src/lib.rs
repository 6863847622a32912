//! # Tyche - Mock JSON Data Service
//!
//! Tyche turns user-authored field schemas into mock JSON records. A schema
//! is a tree of typed fields (strings, numbers, booleans, dates, objects,
//! arrays); the engine walks the tree and produces either a structural type
//! descriptor for previewing or concrete randomized records, with
//! index-derived primary keys for stable record identity.
//!
//! ## Features
//!
//! - **Mock generation**: type-directed random values, thematic string pools
//!   selected by field-name inference, bounded random dates
//! - **Primary keys**: deterministic per-record sequencing for root
//!   string/number key fields
//! - **Schema preview**: pure structural descriptor conversion
//! - **Templates**: file-backed named schema snapshots with built-in examples
//! - **Metrics**: Prometheus metrics for monitoring
//! - **Health checks**: Kubernetes-ready health endpoints
//!
//! ## Quick Start
//!
//! ```rust
//! use tyche::adapters::mock_generator::generate_multiple_from_schema;
//! use tyche::domain::{Field, FieldType};
//!
//! let schema = vec![Field {
//!     name: "id".to_string(),
//!     field_type: FieldType::Number,
//!     is_primary_key: true,
//!     ..Field::default()
//! }];
//! let records = generate_multiple_from_schema(&schema, 3);
//! assert_eq!(records[0]["id"], 1);
//! ```
//!
//! ## Architecture
//!
//! Tyche follows Hexagonal Architecture:
//! - **Domain**: the field-tree data model
//! - **Adapters**: generation engine, descriptor converter, HTTP handlers
//! - **Persistence**: the template store
//! - **Config**: configuration management

pub mod adapters;
pub mod cli;
pub mod config;
pub mod domain;
pub mod persistence;

use crate::adapters::api_handler::{self, ApiState};
use crate::adapters::health_handler::HealthHandler;
use crate::adapters::metrics_handler::MetricsHandler;
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

/// Creates the Axum application router with all endpoints configured.
///
/// # Arguments
///
/// * `api_state` - Shared state for the generation/preview/template endpoints
/// * `health_handler` - Health check handler
/// * `metrics_handler` - Metrics collection handler
///
/// # Returns
///
/// Configured Axum Router
pub fn create_app(
    api_state: ApiState,
    health_handler: Arc<HealthHandler>,
    metrics_handler: Arc<MetricsHandler>,
) -> Router {
    // API routes for the schema editing UI
    let api_router = Router::new()
        .route("/schema/generate", post(api_handler::generate_data))
        .route("/schema/preview", post(api_handler::preview_schema))
        .route(
            "/templates",
            get(api_handler::list_templates).post(api_handler::create_template),
        )
        .route(
            "/templates/:id",
            get(api_handler::get_template).delete(api_handler::delete_template),
        )
        .with_state(api_state);

    let router = Router::new()
        // Health check endpoints
        .route(
            "/health",
            get({
                let handler = health_handler.clone();
                move || {
                    let h = handler.clone();
                    async move { h.health().await }
                }
            }),
        )
        .route(
            "/health/ready",
            get({
                let handler = health_handler.clone();
                move || {
                    let h = handler.clone();
                    async move { h.ready().await }
                }
            }),
        )
        .route(
            "/health/live",
            get({
                let handler = health_handler;
                move || {
                    let h = handler.clone();
                    async move { h.live().await }
                }
            }),
        )
        // Metrics endpoint
        .route(
            "/metrics",
            get({
                let handler = metrics_handler;
                move || {
                    let h = handler.clone();
                    async move { h.metrics().await }
                }
            }),
        )
        .nest("/api", api_router);

    router.layer(
        tower_http::cors::CorsLayer::new()
            .allow_origin(tower_http::cors::Any)
            .allow_methods(tower_http::cors::Any)
            .allow_headers(tower_http::cors::Any),
    )
}
