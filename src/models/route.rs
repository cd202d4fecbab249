//! Modelos de viaje: DailyRoute y RouteDeparture
//!
//! Ambos registran un viaje con flete bruto y pago de equipo (motorista +
//! ajudante opcional). `DailyRoute` nace del checklist diario del motorista;
//! `RouteDeparture` de una salida por orden de carga (OC). Para la agregación
//! financiera son equivalentes.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::decimal_or_zero;

/// Estado de auditoría financiera del viaje
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FinanceStatus {
    #[default]
    Pendente,
    Auditado,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyRoute {
    pub id: String,
    pub vehicle_id: String,
    pub placa: String,
    pub motorista_id: String,
    #[serde(default)]
    pub ajudante_id: Option<String>,
    #[serde(default)]
    pub ajudante_nome: Option<String>,
    #[serde(default)]
    pub cliente_id: Option<String>,
    #[serde(default)]
    pub cliente_nome: Option<String>,
    #[serde(default)]
    pub destino: String,
    #[serde(default)]
    pub oc: Option<String>,
    #[serde(default, deserialize_with = "decimal_or_zero")]
    pub valor_frete: Decimal,
    #[serde(default, deserialize_with = "decimal_or_zero")]
    pub valor_motorista: Decimal,
    #[serde(default, deserialize_with = "decimal_or_zero")]
    pub valor_ajudante: Decimal,
    #[serde(default)]
    pub status_financeiro: FinanceStatus,
    #[serde(default)]
    pub admin_financeiro_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteDeparture {
    pub id: String,
    pub vehicle_id: String,
    pub placa: String,
    pub motorista_id: String,
    #[serde(default)]
    pub ajudante_id: Option<String>,
    #[serde(default)]
    pub ajudante_nome: Option<String>,
    #[serde(default)]
    pub cliente_id: Option<String>,
    #[serde(default)]
    pub cliente_nome: Option<String>,
    #[serde(default)]
    pub destino: String,
    #[serde(default)]
    pub oc: Option<String>,
    #[serde(default, deserialize_with = "decimal_or_zero")]
    pub valor_frete: Decimal,
    #[serde(default, deserialize_with = "decimal_or_zero")]
    pub valor_motorista: Decimal,
    #[serde(default, deserialize_with = "decimal_or_zero")]
    pub valor_ajudante: Decimal,
    #[serde(default)]
    pub status_financeiro: FinanceStatus,
    #[serde(default)]
    pub admin_financeiro_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl DailyRoute {
    /// Pago total de equipo del viaje (motorista + ajudante)
    pub fn team_cost(&self) -> Decimal {
        self.valor_motorista + self.valor_ajudante
    }
}

impl RouteDeparture {
    /// Pago total de equipo del viaje (motorista + ajudante)
    pub fn team_cost(&self) -> Decimal {
        self.valor_motorista + self.valor_ajudante
    }
}
