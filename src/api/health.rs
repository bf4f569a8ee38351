use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use crate::database::DocumentStore;

#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
    pub store: String,
    pub timestamp: i64,
}

#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses(
        (status = 200, description = "Service and store are reachable", body = HealthResponse),
        (status = 503, description = "Store is unreachable", body = HealthResponse)
    )
)]
pub async fn health_check(store: web::Data<dyn DocumentStore>) -> HttpResponse {
    let reachable = match store.ping().await {
        Ok(()) => true,
        Err(e) => {
            log::error!("❌ Health check failed: {}", e);
            false
        }
    };

    let body = HealthResponse {
        status: if reachable { "healthy" } else { "unhealthy" }.to_string(),
        service: "food-station".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        store: store.backend_name().to_string(),
        timestamp: chrono::Utc::now().timestamp(),
    };

    if reachable {
        HttpResponse::Ok().json(body)
    } else {
        HttpResponse::ServiceUnavailable().json(body)
    }
}
