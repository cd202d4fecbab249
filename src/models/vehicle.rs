//! Modelo de Vehicle
//!
//! Referencia de flota. Los campos de telemetría y checklist preventivo que
//! maneja la capa upstream no participan de la agregación y no se modelan.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::decimal_or_zero;

/// Estado del vehículo - mapea al campo `status` upstream
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum VehicleStatus {
    #[default]
    Rodando,
    Manutencao,
    Parado,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    pub id: String,
    pub placa: String,
    pub modelo: String,
    #[serde(default, deserialize_with = "decimal_or_zero")]
    pub km_atual: Decimal,
    #[serde(default)]
    pub status: VehicleStatus,
    #[serde(default)]
    pub proxima_manutencao_km: Option<Decimal>,
}
