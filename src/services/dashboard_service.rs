//! Resumen operativo del dashboard
//!
//! Conteos y totales sobre el snapshot completo. El dashboard no filtra por
//! fechas: muestra el estado actual de la flota y los acumulados históricos.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::{FixedExpense, Fueling, FuelingStatus, MaintenanceRequest, Vehicle, VehicleStatus};

/// Resumen para el dashboard administrativo
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub veiculos_rodando: usize,
    pub veiculos_manutencao: usize,
    pub veiculos_parados: usize,
    pub manutencoes_abertas: usize,
    pub abastecimentos_pendentes: usize,
    pub total_combustivel_aprovado: Decimal,
    pub total_despesas_fixas: Decimal,
}

pub fn dashboard_summary(
    vehicles: &[Vehicle],
    fuelings: &[Fueling],
    maintenances: &[MaintenanceRequest],
    fixed_expenses: &[FixedExpense],
) -> DashboardSummary {
    DashboardSummary {
        veiculos_rodando: count_status(vehicles, VehicleStatus::Rodando),
        veiculos_manutencao: count_status(vehicles, VehicleStatus::Manutencao),
        veiculos_parados: count_status(vehicles, VehicleStatus::Parado),
        manutencoes_abertas: maintenances.iter().filter(|m| m.is_open()).count(),
        abastecimentos_pendentes: fuelings
            .iter()
            .filter(|f| f.status == FuelingStatus::Pendente)
            .count(),
        total_combustivel_aprovado: fuelings
            .iter()
            .filter(|f| f.is_realized_cost())
            .map(|f| f.valor)
            .sum(),
        total_despesas_fixas: fixed_expenses.iter().map(|e| e.valor).sum(),
    }
}

fn count_status(vehicles: &[Vehicle], status: VehicleStatus) -> usize {
    vehicles.iter().filter(|v| v.status == status).count()
}
