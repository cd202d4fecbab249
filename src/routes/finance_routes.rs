use axum::{
    extract::{Path, State},
    routing::put,
    Json, Router,
};

use crate::controllers::finance_controller::FinanceController;
use crate::dto::activity_dto::ActivityEditRequest;
use crate::dto::common_dto::ApiResponse;
use crate::dto::finance_dto::{
    FuelingFinanceUpdateRequest, MaintenanceFinanceUpdateRequest, RouteFinanceUpdateRequest,
};
use crate::models::{DailyRoute, Fueling, MaintenanceRequest, RouteDeparture};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_finance_router() -> Router<AppState> {
    Router::new()
        .route("/daily-routes/:id", put(update_daily_route))
        .route("/routes/:id", put(update_route))
        .route("/fuelings/:id", put(update_fueling))
        .route("/maintenances/:id", put(update_maintenance))
        .route("/activity/:id", put(apply_activity_edit))
}

async fn update_daily_route(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<RouteFinanceUpdateRequest>,
) -> Result<Json<ApiResponse<DailyRoute>>, AppError> {
    let controller = FinanceController::new(state.store.clone());
    let response = controller.update_daily_route(&id, request).await?;
    Ok(Json(response))
}

async fn update_route(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<RouteFinanceUpdateRequest>,
) -> Result<Json<ApiResponse<RouteDeparture>>, AppError> {
    let controller = FinanceController::new(state.store.clone());
    let response = controller.update_route(&id, request).await?;
    Ok(Json(response))
}

async fn update_fueling(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<FuelingFinanceUpdateRequest>,
) -> Result<Json<ApiResponse<Fueling>>, AppError> {
    let controller = FinanceController::new(state.store.clone());
    let response = controller.update_fueling(&id, request).await?;
    Ok(Json(response))
}

async fn update_maintenance(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<MaintenanceFinanceUpdateRequest>,
) -> Result<Json<ApiResponse<MaintenanceRequest>>, AppError> {
    let controller = FinanceController::new(state.store.clone());
    let response = controller.update_maintenance(&id, request).await?;
    Ok(Json(response))
}

async fn apply_activity_edit(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<ActivityEditRequest>,
) -> Result<Json<ApiResponse<serde_json::Value>>, AppError> {
    let controller = FinanceController::new(state.store.clone());
    let response = controller.apply_activity_edit(&id, request).await?;
    Ok(Json(response))
}
