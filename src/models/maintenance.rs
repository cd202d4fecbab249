//! Modelo de MaintenanceRequest (solicitud de mantenimiento)
//!
//! Ciclo de vida: pendente → assumida → em_execucao → feita. Solo las
//! solicitudes con status `feita` cuentan como costo realizado.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::decimal_or_zero;

/// Estado de la solicitud - mapea al campo `status` upstream
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MaintenanceStatus {
    #[default]
    Pendente,
    Assumida,
    EmExecucao,
    Feita,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceRequest {
    pub id: String,
    pub vehicle_id: String,
    pub placa: String,
    pub motorista_id: String,
    pub tipo: String,
    pub descricao: String,
    #[serde(default, deserialize_with = "decimal_or_zero")]
    pub km_no_momento: Decimal,
    #[serde(default)]
    pub foto: Option<String>,
    #[serde(default)]
    pub status: MaintenanceStatus,
    #[serde(default)]
    pub admin_responsavel_id: Option<String>,
    #[serde(default)]
    pub assumed_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub started_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub done_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub oficina: Option<String>,
    #[serde(default, deserialize_with = "decimal_or_zero")]
    pub valor: Decimal,
    #[serde(default)]
    pub nota_foto: Option<String>,
    #[serde(default)]
    pub observacao_admin: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl MaintenanceRequest {
    /// Solo las solicitudes concluidas son costo realizado
    pub fn is_realized_cost(&self) -> bool {
        self.status == MaintenanceStatus::Feita
    }

    /// Abierta = cualquier estado anterior a `feita`
    pub fn is_open(&self) -> bool {
        self.status != MaintenanceStatus::Feita
    }
}
