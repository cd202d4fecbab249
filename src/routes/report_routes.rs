use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};

use crate::controllers::report_controller::ReportController;
use crate::dto::activity_dto::ActivityReportResponse;
use crate::dto::ledger_dto::ConsolidatedReportResponse;
use crate::dto::report_dto::{AgregadoReportResponse, PeriodQuery, VehicleReportResponse};
use crate::services::dashboard_service::DashboardSummary;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_report_router() -> Router<AppState> {
    Router::new()
        .route("/vehicles", get(vehicle_report))
        .route("/activity/:user_id", get(activity_report))
        .route("/consolidated", get(consolidated_report))
        .route("/agregados", get(agregado_report))
        .route("/dashboard", get(dashboard))
}

async fn vehicle_report(
    State(state): State<AppState>,
    Query(query): Query<PeriodQuery>,
) -> Result<Json<VehicleReportResponse>, AppError> {
    let controller = ReportController::new(state.store.clone());
    let response = controller.vehicle_report(query).await?;
    Ok(Json(response))
}

async fn activity_report(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Query(query): Query<PeriodQuery>,
) -> Result<Json<ActivityReportResponse>, AppError> {
    let controller = ReportController::new(state.store.clone());
    let response = controller.activity_report(&user_id, query).await?;
    Ok(Json(response))
}

async fn consolidated_report(
    State(state): State<AppState>,
    Query(query): Query<PeriodQuery>,
) -> Result<Json<ConsolidatedReportResponse>, AppError> {
    let controller = ReportController::new(state.store.clone());
    let response = controller.consolidated_report(query).await?;
    Ok(Json(response))
}

async fn agregado_report(
    State(state): State<AppState>,
    Query(query): Query<PeriodQuery>,
) -> Result<Json<AgregadoReportResponse>, AppError> {
    let controller = ReportController::new(state.store.clone());
    let response = controller.agregado_report(query).await?;
    Ok(Json(response))
}

async fn dashboard(
    State(state): State<AppState>,
) -> Result<Json<DashboardSummary>, AppError> {
    let controller = ReportController::new(state.store.clone());
    let response = controller.dashboard().await?;
    Ok(Json(response))
}
