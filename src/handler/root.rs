use axum::Json;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct Endpoints {
    recommend: &'static str,
    health: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ServiceInfo {
    message: &'static str,
    version: &'static str,
    endpoints: Endpoints,
}

/// Handler for GET /
pub async fn root_handler() -> Json<ServiceInfo> {
    Json(ServiceInfo {
        message: "Movie Recommendation API",
        version: env!("CARGO_PKG_VERSION"),
        endpoints: Endpoints {
            recommend: "/api/recommend (POST)",
            health: "/health (GET)",
        },
    })
}
