pub mod finance_routes;
pub mod report_routes;
pub mod snapshot_routes;

use axum::{response::Json, routing::get, Router};
use serde_json::json;

use crate::middleware::cors::{cors_middleware, cors_middleware_with_origins};
use crate::state::AppState;

/// Crear el router principal de la aplicación
pub fn create_app_router(state: AppState) -> Router {
    // Con CORS_ORIGINS configurado se restringe; sin él, modo desarrollo
    let cors = if state.config.cors_origins.is_empty() {
        cors_middleware()
    } else {
        cors_middleware_with_origins(state.config.cors_origins.clone())
    };

    Router::new()
        .route("/health", get(health))
        .nest("/api/report", report_routes::create_report_router())
        .nest("/api/finance", finance_routes::create_finance_router())
        .nest("/api/snapshot", snapshot_routes::create_snapshot_router())
        .layer(cors)
        .with_state(state)
}

/// Health check del servicio
async fn health() -> Json<serde_json::Value> {
    Json(json!({
        "service": "fleet-finance",
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}
