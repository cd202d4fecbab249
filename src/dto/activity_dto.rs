//! DTOs del reporte de actividad por colaborador

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::{User, UserRole};
use crate::services::activity_report_service::{
    Activity, ActivityEditField, ActivityOrigin, ActivityStats,
};
use crate::services::period::ReportPeriod;

/// Identificación del colaborador del reporte (sin credenciales)
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CollaboratorDto {
    pub id: String,
    pub nome: String,
    pub perfil: UserRole,
}

impl From<&User> for CollaboratorDto {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.clone(),
            nome: user.nome.clone(),
            perfil: user.perfil,
        }
    }
}

/// Una actividad aplanada para la tabla del reporte
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityEntryDto {
    pub id: String,
    pub origem: ActivityOrigin,
    /// Rótulo legible del origen
    pub tipo: &'static str,
    pub data: DateTime<Utc>,
    pub placa: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valor_frete: Option<Decimal>,
    pub ganho: Decimal,
    pub is_ajudante: bool,
}

impl From<&Activity> for ActivityEntryDto {
    fn from(activity: &Activity) -> Self {
        let (tipo, is_ajudante) = match activity {
            Activity::Daily { is_ajudante, .. } => ("Rota", *is_ajudante),
            Activity::Route { is_ajudante, .. } => ("Saída OC", *is_ajudante),
            Activity::Fuel(_) => ("Abastecimento", false),
            Activity::Maintenance(_) => ("Manutenção", false),
        };
        Self {
            id: activity.record_id().to_string(),
            origem: activity.origin(),
            tipo,
            data: activity.data(),
            placa: activity.placa().to_string(),
            valor_frete: activity.valor_frete(),
            ganho: activity.ganho_pessoal(),
            is_ajudante,
        }
    }
}

/// Response del reporte de actividad
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityReportResponse {
    pub colaborador: CollaboratorDto,
    pub periodo: ReportPeriod,
    pub atividades: Vec<ActivityEntryDto>,
    pub stats: ActivityStats,
}

/// Request de edición inline de una actividad: un único campo por edición,
/// despachado al registro de origen correspondiente
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ActivityEditRequest {
    pub origem: ActivityOrigin,
    pub campo: ActivityEditField,
    pub valor: Decimal,
    #[validate(length(min = 1))]
    pub admin_id: String,
}
