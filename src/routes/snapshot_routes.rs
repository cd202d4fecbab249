use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};

use crate::controllers::snapshot_controller::SnapshotController;
use crate::dto::common_dto::ApiResponse;
use crate::state::AppState;
use crate::store::{FleetSnapshot, SnapshotStats};
use crate::utils::errors::AppError;

pub fn create_snapshot_router() -> Router<AppState> {
    Router::new()
        .route("/", post(ingest_snapshot))
        .route("/stats", get(snapshot_stats))
}

async fn ingest_snapshot(
    State(state): State<AppState>,
    Json(snapshot): Json<FleetSnapshot>,
) -> Result<Json<ApiResponse<SnapshotStats>>, AppError> {
    let controller = SnapshotController::new(state.store.clone());
    let response = controller.ingest(snapshot).await?;
    Ok(Json(response))
}

async fn snapshot_stats(
    State(state): State<AppState>,
) -> Result<Json<SnapshotStats>, AppError> {
    let controller = SnapshotController::new(state.store.clone());
    let response = controller.stats().await?;
    Ok(Json(response))
}
