//! Controller de edición financiera
//!
//! Aplica los updates parciales del back-office sobre el store y sella el
//! admin que aprobó cada cambio. La edición no recalcula reportes: el caller
//! vuelve a pedir el reporte sobre el snapshot ya refrescado.

use validator::Validate;

use crate::dto::activity_dto::ActivityEditRequest;
use crate::dto::common_dto::ApiResponse;
use crate::dto::finance_dto::{
    FuelingFinanceUpdateRequest, MaintenanceFinanceUpdateRequest, RouteFinanceUpdateRequest,
};
use crate::models::{DailyRoute, Fueling, MaintenanceRequest, RouteDeparture};
use crate::services::activity_report_service::{ActivityEditField, ActivityOrigin};
use crate::store::FleetStore;
use crate::utils::errors::{bad_request_error, internal_error, AppError};

pub struct FinanceController {
    store: FleetStore,
}

impl FinanceController {
    pub fn new(store: FleetStore) -> Self {
        Self { store }
    }

    pub async fn update_daily_route(
        &self,
        id: &str,
        request: RouteFinanceUpdateRequest,
    ) -> Result<ApiResponse<DailyRoute>, AppError> {
        request.validate()?;
        let updated = self
            .store
            .update_daily_route_finance(
                id,
                request.valor_frete,
                request.valor_motorista,
                request.valor_ajudante,
                request.status_financeiro,
                &request.admin_id,
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            updated,
            "Rota diaria actualizada exitosamente".to_string(),
        ))
    }

    pub async fn update_route(
        &self,
        id: &str,
        request: RouteFinanceUpdateRequest,
    ) -> Result<ApiResponse<RouteDeparture>, AppError> {
        request.validate()?;
        let updated = self
            .store
            .update_route_finance(
                id,
                request.valor_frete,
                request.valor_motorista,
                request.valor_ajudante,
                request.status_financeiro,
                &request.admin_id,
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            updated,
            "Saída OC actualizada exitosamente".to_string(),
        ))
    }

    pub async fn update_fueling(
        &self,
        id: &str,
        request: FuelingFinanceUpdateRequest,
    ) -> Result<ApiResponse<Fueling>, AppError> {
        request.validate()?;
        let updated = self
            .store
            .update_fueling_finance(
                id,
                request.valor,
                request.status,
                request.motivo_rejeicao,
                &request.admin_id,
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            updated,
            "Abastecimiento actualizado exitosamente".to_string(),
        ))
    }

    pub async fn update_maintenance(
        &self,
        id: &str,
        request: MaintenanceFinanceUpdateRequest,
    ) -> Result<ApiResponse<MaintenanceRequest>, AppError> {
        request.validate()?;
        let updated = self
            .store
            .update_maintenance_finance(
                id,
                request.valor,
                request.status,
                request.oficina,
                request.observacao_admin,
                &request.admin_id,
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            updated,
            "Mantenimiento actualizado exitosamente".to_string(),
        ))
    }

    /// Edición inline de una actividad del reporte por colaborador: un único
    /// campo, despachado al registro de origen según la variante
    pub async fn apply_activity_edit(
        &self,
        record_id: &str,
        request: ActivityEditRequest,
    ) -> Result<ApiResponse<serde_json::Value>, AppError> {
        request.validate()?;

        if !request.campo.is_valid_for(request.origem) {
            return Err(bad_request_error(&format!(
                "Field {:?} cannot be edited on a {:?} activity",
                request.campo, request.origem
            )));
        }

        let valor = request.valor;
        let value_for = |field: ActivityEditField| {
            if request.campo == field {
                Some(valor)
            } else {
                None
            }
        };

        let updated = match request.origem {
            ActivityOrigin::Daily => {
                let record = self
                    .store
                    .update_daily_route_finance(
                        record_id,
                        value_for(ActivityEditField::ValorFrete),
                        value_for(ActivityEditField::ValorMotorista),
                        value_for(ActivityEditField::ValorAjudante),
                        None,
                        &request.admin_id,
                    )
                    .await?;
                to_json(record)?
            }
            ActivityOrigin::Route => {
                let record = self
                    .store
                    .update_route_finance(
                        record_id,
                        value_for(ActivityEditField::ValorFrete),
                        value_for(ActivityEditField::ValorMotorista),
                        value_for(ActivityEditField::ValorAjudante),
                        None,
                        &request.admin_id,
                    )
                    .await?;
                to_json(record)?
            }
            ActivityOrigin::Fuel => {
                let record = self
                    .store
                    .update_fueling_finance(record_id, Some(valor), None, None, &request.admin_id)
                    .await?;
                to_json(record)?
            }
            ActivityOrigin::Maintenance => {
                let record = self
                    .store
                    .update_maintenance_finance(
                        record_id,
                        Some(valor),
                        None,
                        None,
                        None,
                        &request.admin_id,
                    )
                    .await?;
                to_json(record)?
            }
        };

        Ok(ApiResponse::success_with_message(
            updated,
            "Actividad actualizada exitosamente".to_string(),
        ))
    }
}

fn to_json<T: serde::Serialize>(record: T) -> Result<serde_json::Value, AppError> {
    serde_json::to_value(record).map_err(|e| internal_error(&e.to_string()))
}
