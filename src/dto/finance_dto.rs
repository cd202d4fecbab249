//! DTOs de la edición financiera del back-office
//!
//! Updates parciales por tipo de registro: solo los campos enviados se
//! aplican. `adminId` es obligatorio; queda sellado en el registro como
//! rastro de auditoría.

use rust_decimal::Decimal;
use serde::Deserialize;
use validator::Validate;

use crate::models::{FinanceStatus, FuelingStatus, MaintenanceStatus};

/// Update financiero de un viaje (rota diaria o saída OC)
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RouteFinanceUpdateRequest {
    pub valor_frete: Option<Decimal>,
    pub valor_motorista: Option<Decimal>,
    pub valor_ajudante: Option<Decimal>,
    pub status_financeiro: Option<FinanceStatus>,
    #[validate(length(min = 1))]
    pub admin_id: String,
}

/// Update de un abastecimiento (aprobación, rechazo, corrección de valor)
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct FuelingFinanceUpdateRequest {
    pub valor: Option<Decimal>,
    pub status: Option<FuelingStatus>,
    pub motivo_rejeicao: Option<String>,
    #[validate(length(min = 1))]
    pub admin_id: String,
}

/// Update de un mantenimiento (cierre, valor, oficina)
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceFinanceUpdateRequest {
    pub valor: Option<Decimal>,
    pub status: Option<MaintenanceStatus>,
    pub oficina: Option<String>,
    pub observacao_admin: Option<String>,
    #[validate(length(min = 1))]
    pub admin_id: String,
}
