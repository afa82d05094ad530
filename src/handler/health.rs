use axum::Json;
use serde::Serialize;
use tracing::info;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    status: &'static str,
    llm_initialized: bool,
}

/// Handler for GET /health
///
/// `AppState` cannot be built without a text generator, so a serving process
/// always reports `llm_initialized: true`.
pub async fn health_handler() -> Json<HealthResponse> {
    info!("Health check requested");
    Json(HealthResponse {
        status: "healthy",
        llm_initialized: true,
    })
}
