//! REST API handlers for the schema editing UI
//!
//! Provides the generation and preview surfaces plus template CRUD.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::adapters::metrics_handler::MetricsCollector;
use crate::adapters::{mock_generator, schema_descriptor};
use crate::config::Settings;
use crate::domain::{Field, SchemaTemplate};
use crate::persistence::TemplateStore;

/// Shared application state for API handlers
#[derive(Clone)]
pub struct ApiState {
    pub settings: Arc<RwLock<Settings>>,
    pub store: Arc<dyn TemplateStore>,
    pub metrics: Arc<MetricsCollector>,
}

// ============================================================================
// Response Types
// ============================================================================

#[derive(Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }
}

impl<T> ApiResponse<T> {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

impl ApiResponse<()> {
    pub fn ok() -> Self {
        Self {
            success: true,
            data: None,
            error: None,
        }
    }
}

// ============================================================================
// Request Types
// ============================================================================

#[derive(Deserialize)]
pub struct GenerateRequest {
    pub schema: Vec<Field>,
    /// Number of records to generate; clamped to `[1, max_records]`.
    #[serde(default)]
    pub count: Option<usize>,
}

#[derive(Deserialize)]
pub struct PreviewRequest {
    pub schema: Vec<Field>,
}

#[derive(Deserialize)]
pub struct SaveTemplateRequest {
    pub name: String,
    pub schema: Vec<Field>,
}

// ============================================================================
// Generation Endpoints
// ============================================================================

/// POST /api/schema/generate - Generate mock records from a schema tree.
///
/// A count of 1 (or no count) yields a bare object; anything larger yields
/// an array. The engine itself accepts any count, so clamping happens here.
pub async fn generate_data(
    State(state): State<ApiState>,
    Json(request): Json<GenerateRequest>,
) -> impl IntoResponse {
    let max_records = state.settings.read().await.generator.max_records;
    let count = request.count.unwrap_or(1).clamp(1, max_records);

    let timer = state.metrics.generate_duration.start_timer();
    let data = if count == 1 {
        mock_generator::generate_from_schema(&request.schema)
    } else {
        Value::Array(mock_generator::generate_multiple_from_schema(
            &request.schema,
            count,
        ))
    };
    timer.observe_duration();

    state.metrics.generate_requests.inc();
    state.metrics.records_generated.inc_by(count as f64);

    (StatusCode::OK, Json(ApiResponse::success(data)))
}

/// POST /api/schema/preview - Convert a schema tree to its type descriptor.
pub async fn preview_schema(Json(request): Json<PreviewRequest>) -> impl IntoResponse {
    let descriptor = schema_descriptor::schema_to_descriptor(&request.schema);
    (StatusCode::OK, Json(ApiResponse::success(descriptor)))
}

// ============================================================================
// Template Endpoints
// ============================================================================

/// GET /api/templates - List templates, user-saved first.
pub async fn list_templates(State(state): State<ApiState>) -> impl IntoResponse {
    match state.store.list().await {
        Ok(templates) => (StatusCode::OK, Json(ApiResponse::success(templates))),
        Err(e) => (
            e.status_code(),
            Json(ApiResponse::<Vec<SchemaTemplate>>::error(e.to_string())),
        ),
    }
}

/// POST /api/templates - Save the current schema under a name.
pub async fn create_template(
    State(state): State<ApiState>,
    Json(request): Json<SaveTemplateRequest>,
) -> impl IntoResponse {
    if request.name.trim().is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::<SchemaTemplate>::error(
                "Template name must not be empty",
            )),
        );
    }

    match state.store.save(request.name.trim(), request.schema).await {
        Ok(template) => {
            state.metrics.template_saves.inc();
            (StatusCode::CREATED, Json(ApiResponse::success(template)))
        }
        Err(e) => (
            e.status_code(),
            Json(ApiResponse::<SchemaTemplate>::error(e.to_string())),
        ),
    }
}

/// GET /api/templates/:id - Fetch a single template.
pub async fn get_template(
    State(state): State<ApiState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    match state.store.get(&id).await {
        Ok(template) => (StatusCode::OK, Json(ApiResponse::success(template))),
        Err(e) => (
            e.status_code(),
            Json(ApiResponse::<SchemaTemplate>::error(e.to_string())),
        ),
    }
}

/// DELETE /api/templates/:id - Delete a template.
pub async fn delete_template(
    State(state): State<ApiState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    match state.store.delete(&id).await {
        Ok(()) => {
            state.metrics.template_deletes.inc();
            (StatusCode::OK, Json(ApiResponse::ok()))
        }
        Err(e) => (
            e.status_code(),
            Json(ApiResponse::<()>::error(e.to_string())),
        ),
    }
}
