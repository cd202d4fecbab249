//! Modelo de Fueling (abastecimiento)
//!
//! Registro de abastecimiento reportado por el motorista. Solo los registros
//! con status `aprovado` cuentan como costo realizado.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::decimal_or_zero;

/// Estado del abastecimiento - mapea al campo `status` upstream
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FuelingStatus {
    #[default]
    Pendente,
    Aprovado,
    Rejeitado,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fueling {
    pub id: String,
    pub vehicle_id: String,
    pub placa: String,
    pub motorista_id: String,
    #[serde(default, deserialize_with = "decimal_or_zero")]
    pub km_no_momento: Decimal,
    #[serde(default, deserialize_with = "decimal_or_zero")]
    pub valor: Decimal,
    #[serde(default)]
    pub foto_nota: Option<String>,
    #[serde(default)]
    pub status: FuelingStatus,
    #[serde(default)]
    pub motivo_rejeicao: Option<String>,
    #[serde(default)]
    pub admin_aprovador_id: Option<String>,
    #[serde(default)]
    pub approved_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl Fueling {
    /// Solo los abastecimientos aprobados son costo realizado
    pub fn is_realized_cost(&self) -> bool {
        self.status == FuelingStatus::Aprovado
    }
}
