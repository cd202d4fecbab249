//! Agregador por vehículo
//!
//! Cruza abastecimientos, mantenimientos, viajes y peajes por vehículo dentro
//! del período y deriva costos, facturación, lucro operativo y margen. Cómputo
//! puro: no muta sus entradas y recalcular sobre el mismo snapshot produce el
//! mismo resultado.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::{DailyRoute, FixedExpense, Fueling, MaintenanceRequest, RouteDeparture, Toll, Vehicle};
use crate::services::period::ReportPeriod;

/// Estadísticas financieras de un vehículo en el período
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleStats {
    pub id: String,
    pub placa: String,
    pub modelo: String,
    pub total_frete: Decimal,
    pub gasto_combustivel: Decimal,
    pub gasto_manutencao: Decimal,
    pub gasto_pedagio: Decimal,
    pub gasto_equipe: Decimal,
    pub total_custos: Decimal,
    pub lucro_operacional: Decimal,
    /// Lucro operativo como % del flete bruto; 0 cuando no hubo facturación
    pub margem: Decimal,
}

/// Totales de flota acumulados sobre las estadísticas por vehículo
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FleetTotals {
    pub total_frete: Decimal,
    pub total_custos: Decimal,
    pub lucro_operacional: Decimal,
}

/// Estadísticas por vehículo, ordenadas por facturación descendente.
/// El orden es estable: a igual facturación se preserva el orden de entrada.
pub fn vehicle_stats(
    vehicles: &[Vehicle],
    fuelings: &[Fueling],
    maintenances: &[MaintenanceRequest],
    daily_routes: &[DailyRoute],
    routes: &[RouteDeparture],
    tolls: &[Toll],
    period: &ReportPeriod,
) -> Vec<VehicleStats> {
    let mut stats: Vec<VehicleStats> = vehicles
        .iter()
        .map(|v| {
            let gasto_combustivel: Decimal = fuelings
                .iter()
                .filter(|f| f.vehicle_id == v.id && f.is_realized_cost() && period.contains(f.created_at))
                .map(|f| f.valor)
                .sum();

            let gasto_manutencao: Decimal = maintenances
                .iter()
                .filter(|m| m.vehicle_id == v.id && m.is_realized_cost() && period.contains(m.created_at))
                .map(|m| m.valor)
                .sum();

            let gasto_pedagio: Decimal = tolls
                .iter()
                .filter(|t| t.vehicle_id == v.id && period.contains_day(t.data))
                .map(|t| t.valor)
                .sum();

            let v_daily: Vec<&DailyRoute> = daily_routes
                .iter()
                .filter(|d| d.vehicle_id == v.id && period.contains(d.created_at))
                .collect();
            let v_routes: Vec<&RouteDeparture> = routes
                .iter()
                .filter(|r| r.vehicle_id == v.id && period.contains(r.created_at))
                .collect();

            let gasto_equipe: Decimal = v_daily.iter().map(|d| d.team_cost()).sum::<Decimal>()
                + v_routes.iter().map(|r| r.team_cost()).sum::<Decimal>();

            let total_frete: Decimal = v_daily.iter().map(|d| d.valor_frete).sum::<Decimal>()
                + v_routes.iter().map(|r| r.valor_frete).sum::<Decimal>();

            let total_custos = gasto_combustivel + gasto_manutencao + gasto_pedagio + gasto_equipe;
            let lucro_operacional = total_frete - total_custos;

            VehicleStats {
                id: v.id.clone(),
                placa: v.placa.clone(),
                modelo: v.modelo.clone(),
                total_frete,
                gasto_combustivel,
                gasto_manutencao,
                gasto_pedagio,
                gasto_equipe,
                total_custos,
                lucro_operacional,
                margem: margin(lucro_operacional, total_frete),
            }
        })
        .collect();

    stats.sort_by(|a, b| b.total_frete.cmp(&a.total_frete));
    stats
}

/// Margen operativo en %. Sin facturación el margen es 0, nunca NaN/infinito.
fn margin(lucro: Decimal, frete: Decimal) -> Decimal {
    if frete > Decimal::ZERO {
        lucro / frete * Decimal::ONE_HUNDRED
    } else {
        Decimal::ZERO
    }
}

/// Acumular los totales de flota del período
pub fn fleet_totals(stats: &[VehicleStats]) -> FleetTotals {
    stats.iter().fold(FleetTotals::default(), |acc, s| FleetTotals {
        total_frete: acc.total_frete + s.total_frete,
        total_custos: acc.total_custos + s.total_custos,
        lucro_operacional: acc.lucro_operacional + s.lucro_operacional,
    })
}

/// Total de despesas fijas imputadas al mes de competencia del período
pub fn total_fixed_expenses(expenses: &[FixedExpense], period: &ReportPeriod) -> Decimal {
    expenses
        .iter()
        .filter(|e| period.matches_competencia(&e.data_competencia))
        .map(|e| e.valor)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Competencia, FuelingStatus};
    use chrono::{NaiveDate, TimeZone, Utc};

    fn vehicle(id: &str, placa: &str) -> Vehicle {
        Vehicle {
            id: id.to_string(),
            placa: placa.to_string(),
            modelo: "Mercedes-Benz Atego".to_string(),
            km_atual: Decimal::from(154_200),
            status: Default::default(),
            proxima_manutencao_km: None,
        }
    }

    fn fueling(vehicle_id: &str, valor: i64, status: FuelingStatus) -> Fueling {
        Fueling {
            id: format!("f-{}-{}", vehicle_id, valor),
            vehicle_id: vehicle_id.to_string(),
            placa: "LQB2B76".to_string(),
            motorista_id: "u3".to_string(),
            km_no_momento: Decimal::ZERO,
            valor: Decimal::from(valor),
            foto_nota: None,
            status,
            motivo_rejeicao: None,
            admin_aprovador_id: None,
            approved_at: None,
            created_at: Utc.with_ymd_and_hms(2024, 3, 10, 8, 0, 0).unwrap(),
        }
    }

    fn daily(vehicle_id: &str, frete: i64, motorista: i64, ajudante: i64) -> DailyRoute {
        DailyRoute {
            id: format!("dr-{}-{}", vehicle_id, frete),
            vehicle_id: vehicle_id.to_string(),
            placa: "LQB2B76".to_string(),
            motorista_id: "u3".to_string(),
            ajudante_id: None,
            ajudante_nome: None,
            cliente_id: None,
            cliente_nome: None,
            destino: "Frigocopa".to_string(),
            oc: None,
            valor_frete: Decimal::from(frete),
            valor_motorista: Decimal::from(motorista),
            valor_ajudante: Decimal::from(ajudante),
            status_financeiro: Default::default(),
            admin_financeiro_id: None,
            created_at: Utc.with_ymd_and_hms(2024, 3, 12, 7, 30, 0).unwrap(),
        }
    }

    fn march() -> ReportPeriod {
        ReportPeriod::new(
            NaiveDate::from_ymd_opt(2024, 3, 1),
            NaiveDate::from_ymd_opt(2024, 3, 31),
        )
    }

    #[test]
    fn test_single_vehicle_scenario() {
        // Un abastecimiento aprobado de 500, una rota con frete 2000 y
        // motorista 300: custos 800, lucro 1200, margem 60%
        let vehicles = vec![vehicle("v1", "LQB2B76")];
        let fuelings = vec![fueling("v1", 500, FuelingStatus::Aprovado)];
        let daily_routes = vec![daily("v1", 2000, 300, 0)];

        let stats = vehicle_stats(&vehicles, &fuelings, &[], &daily_routes, &[], &[], &march());
        assert_eq!(stats.len(), 1);

        let s = &stats[0];
        assert_eq!(s.gasto_combustivel, Decimal::from(500));
        assert_eq!(s.total_frete, Decimal::from(2000));
        assert_eq!(s.gasto_equipe, Decimal::from(300));
        assert_eq!(s.total_custos, Decimal::from(800));
        assert_eq!(s.lucro_operacional, Decimal::from(1200));
        assert_eq!(s.margem, Decimal::from(60));
    }

    #[test]
    fn test_pending_and_rejected_fuelings_are_not_cost() {
        let vehicles = vec![vehicle("v1", "LQB2B76")];
        let fuelings = vec![
            fueling("v1", 500, FuelingStatus::Aprovado),
            fueling("v1", 300, FuelingStatus::Pendente),
            fueling("v1", 200, FuelingStatus::Rejeitado),
        ];

        let stats = vehicle_stats(&vehicles, &fuelings, &[], &[], &[], &[], &march());
        assert_eq!(stats[0].gasto_combustivel, Decimal::from(500));
    }

    #[test]
    fn test_margin_is_zero_without_revenue() {
        // Vehículo con costos pero sin fletes: margen 0, nunca NaN/infinito
        let vehicles = vec![vehicle("v1", "LQB2B76")];
        let fuelings = vec![fueling("v1", 500, FuelingStatus::Aprovado)];

        let stats = vehicle_stats(&vehicles, &fuelings, &[], &[], &[], &[], &march());
        assert_eq!(stats[0].total_frete, Decimal::ZERO);
        assert_eq!(stats[0].lucro_operacional, Decimal::from(-500));
        assert_eq!(stats[0].margem, Decimal::ZERO);
    }

    #[test]
    fn test_sorted_by_revenue_descending_stable() {
        let vehicles = vec![vehicle("v1", "AAA1111"), vehicle("v2", "BBB2222"), vehicle("v3", "CCC3333")];
        let daily_routes = vec![daily("v2", 3000, 0, 0), daily("v3", 1000, 0, 0), daily("v1", 1000, 0, 0)];

        let stats = vehicle_stats(&vehicles, &[], &[], &daily_routes, &[], &[], &march());
        let ids: Vec<&str> = stats.iter().map(|s| s.id.as_str()).collect();
        // v1 y v3 empatan en 1000; v1 entró antes y debe quedar antes
        assert_eq!(ids, vec!["v2", "v1", "v3"]);
    }

    #[test]
    fn test_records_outside_period_are_ignored() {
        let vehicles = vec![vehicle("v1", "LQB2B76")];
        let mut out_of_range = fueling("v1", 500, FuelingStatus::Aprovado);
        out_of_range.created_at = Utc.with_ymd_and_hms(2024, 4, 1, 0, 0, 0).unwrap();

        let stats = vehicle_stats(&vehicles, &[out_of_range], &[], &[], &[], &[], &march());
        assert_eq!(stats[0].gasto_combustivel, Decimal::ZERO);
    }

    #[test]
    fn test_fleet_totals_accumulate() {
        let vehicles = vec![vehicle("v1", "AAA1111"), vehicle("v2", "BBB2222")];
        let daily_routes = vec![daily("v1", 2000, 300, 0), daily("v2", 1500, 200, 100)];
        let fuelings = vec![fueling("v1", 500, FuelingStatus::Aprovado)];

        let stats = vehicle_stats(&vehicles, &fuelings, &[], &daily_routes, &[], &[], &march());
        let totals = fleet_totals(&stats);

        assert_eq!(totals.total_frete, Decimal::from(3500));
        assert_eq!(totals.total_custos, Decimal::from(1100));
        assert_eq!(totals.lucro_operacional, Decimal::from(2400));
    }

    #[test]
    fn test_fixed_expenses_match_by_competencia() {
        let expense = |comp: &str, valor: i64| FixedExpense {
            id: format!("fe-{}", comp),
            categoria: "Aluguel".to_string(),
            descricao: "Galpão".to_string(),
            valor: Decimal::from(valor),
            data_competencia: Competencia(comp.to_string()),
            created_at: Utc.with_ymd_and_hms(2024, 1, 5, 12, 0, 0).unwrap(),
        };
        let expenses = vec![expense("2024-03", 300), expense("2024-02", 900)];

        assert_eq!(total_fixed_expenses(&expenses, &march()), Decimal::from(300));
        assert_eq!(
            total_fixed_expenses(&expenses, &ReportPeriod::all_time()),
            Decimal::ZERO
        );
    }

    #[test]
    fn test_aggregation_is_idempotent() {
        let vehicles = vec![vehicle("v1", "AAA1111"), vehicle("v2", "BBB2222")];
        let daily_routes = vec![daily("v1", 2000, 300, 150), daily("v2", 1500, 200, 0)];
        let fuelings = vec![fueling("v1", 500, FuelingStatus::Aprovado)];

        let first = vehicle_stats(&vehicles, &fuelings, &[], &daily_routes, &[], &[], &march());
        let second = vehicle_stats(&vehicles, &fuelings, &[], &daily_routes, &[], &[], &march());
        assert_eq!(first, second);
    }
}
