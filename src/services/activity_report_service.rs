//! Agregador por colaborador
//!
//! Unifica rotas diarias, saídas OC, abastecimientos y mantenimientos de un
//! colaborador en una lista de actividades etiquetada por origen, con el
//! ganho personal de cada entrada. El reporte exige período completo: sin
//! ambos límites el resultado es vacío (la UX del "seleccione un rango"
//! pertenece a la capa de render).

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::models::{DailyRoute, Fueling, MaintenanceRequest, RouteDeparture};
use crate::services::period::ReportPeriod;

/// Origen de una actividad del colaborador
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ActivityOrigin {
    Daily,
    Route,
    Fuel,
    Maintenance,
}

/// Campo editable de una actividad (edición inline del back-office)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum ActivityEditField {
    ValorFrete,
    ValorMotorista,
    ValorAjudante,
    Valor,
}

impl ActivityEditField {
    /// Los campos de viaje solo existen en daily/route; `valor` solo en
    /// abastecimientos y mantenimientos
    pub fn is_valid_for(&self, origin: ActivityOrigin) -> bool {
        match self {
            Self::ValorFrete | Self::ValorMotorista | Self::ValorAjudante => {
                matches!(origin, ActivityOrigin::Daily | ActivityOrigin::Route)
            }
            Self::Valor => {
                matches!(origin, ActivityOrigin::Fuel | ActivityOrigin::Maintenance)
            }
        }
    }
}

/// Actividad de un colaborador, etiquetada por origen.
///
/// En los viajes `is_ajudante` indica que el colaborador seleccionado viajó
/// como ajudante; decide qué parte del pago de equipo es su ganho.
#[derive(Debug, Clone)]
pub enum Activity {
    Daily { route: DailyRoute, is_ajudante: bool },
    Route { departure: RouteDeparture, is_ajudante: bool },
    Fuel(Fueling),
    Maintenance(MaintenanceRequest),
}

impl Activity {
    pub fn origin(&self) -> ActivityOrigin {
        match self {
            Self::Daily { .. } => ActivityOrigin::Daily,
            Self::Route { .. } => ActivityOrigin::Route,
            Self::Fuel(_) => ActivityOrigin::Fuel,
            Self::Maintenance(_) => ActivityOrigin::Maintenance,
        }
    }

    pub fn record_id(&self) -> &str {
        match self {
            Self::Daily { route, .. } => &route.id,
            Self::Route { departure, .. } => &departure.id,
            Self::Fuel(f) => &f.id,
            Self::Maintenance(m) => &m.id,
        }
    }

    pub fn data(&self) -> DateTime<Utc> {
        match self {
            Self::Daily { route, .. } => route.created_at,
            Self::Route { departure, .. } => departure.created_at,
            Self::Fuel(f) => f.created_at,
            Self::Maintenance(m) => m.created_at,
        }
    }

    pub fn placa(&self) -> &str {
        match self {
            Self::Daily { route, .. } => &route.placa,
            Self::Route { departure, .. } => &departure.placa,
            Self::Fuel(f) => &f.placa,
            Self::Maintenance(m) => &m.placa,
        }
    }

    /// Flete bruto del viaje; las actividades sin flete (abastecimiento,
    /// mantenimiento) no aportan a la facturación
    pub fn valor_frete(&self) -> Option<Decimal> {
        match self {
            Self::Daily { route, .. } => Some(route.valor_frete),
            Self::Route { departure, .. } => Some(departure.valor_frete),
            Self::Fuel(_) | Self::Maintenance(_) => None,
        }
    }

    /// Ganho personal del colaborador en esta actividad
    pub fn ganho_pessoal(&self) -> Decimal {
        match self {
            Self::Daily { route, is_ajudante } => {
                if *is_ajudante {
                    route.valor_ajudante
                } else {
                    route.valor_motorista
                }
            }
            Self::Route { departure, is_ajudante } => {
                if *is_ajudante {
                    departure.valor_ajudante
                } else {
                    departure.valor_motorista
                }
            }
            Self::Fuel(f) => f.valor,
            Self::Maintenance(m) => m.valor,
        }
    }
}

/// Estadísticas derivadas de la lista de actividades
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityStats {
    pub total_atividades: usize,
    /// Días calendario distintos con al menos una actividad
    pub dias_trabalhados: usize,
    pub total_frete: Decimal,
    pub total_ganhos: Decimal,
}

/// Actividades del colaborador en el período, más recientes primero.
///
/// Viajes entran cuando el usuario fue motorista o ajudante; abastecimientos
/// y mantenimientos solo como motorista (no tienen rol de ajudante).
pub fn collaborator_activities(
    user_id: &str,
    daily_routes: &[DailyRoute],
    routes: &[RouteDeparture],
    fuelings: &[Fueling],
    maintenances: &[MaintenanceRequest],
    period: &ReportPeriod,
) -> Vec<Activity> {
    if !period.is_complete() {
        return Vec::new();
    }

    let mut activities: Vec<Activity> = Vec::new();

    activities.extend(
        daily_routes
            .iter()
            .filter(|d| {
                (d.motorista_id == user_id || d.ajudante_id.as_deref() == Some(user_id))
                    && period.contains(d.created_at)
            })
            .map(|d| Activity::Daily {
                route: d.clone(),
                is_ajudante: d.ajudante_id.as_deref() == Some(user_id),
            }),
    );

    activities.extend(
        routes
            .iter()
            .filter(|r| {
                (r.motorista_id == user_id || r.ajudante_id.as_deref() == Some(user_id))
                    && period.contains(r.created_at)
            })
            .map(|r| Activity::Route {
                departure: r.clone(),
                is_ajudante: r.ajudante_id.as_deref() == Some(user_id),
            }),
    );

    activities.extend(
        fuelings
            .iter()
            .filter(|f| f.motorista_id == user_id && period.contains(f.created_at))
            .map(|f| Activity::Fuel(f.clone())),
    );

    activities.extend(
        maintenances
            .iter()
            .filter(|m| m.motorista_id == user_id && period.contains(m.created_at))
            .map(|m| Activity::Maintenance(m.clone())),
    );

    activities.sort_by(|a, b| b.data().cmp(&a.data()));
    activities
}

/// Derivar las estadísticas del reporte de actividad
pub fn activity_stats(activities: &[Activity]) -> ActivityStats {
    let dias: HashSet<_> = activities.iter().map(|a| a.data().date_naive()).collect();

    ActivityStats {
        total_atividades: activities.len(),
        dias_trabalhados: dias.len(),
        total_frete: activities
            .iter()
            .filter_map(|a| a.valor_frete())
            .sum(),
        total_ganhos: activities.iter().map(|a| a.ganho_pessoal()).sum(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FuelingStatus;
    use chrono::{NaiveDate, TimeZone, Utc};

    fn march() -> ReportPeriod {
        ReportPeriod::new(
            NaiveDate::from_ymd_opt(2024, 3, 1),
            NaiveDate::from_ymd_opt(2024, 3, 31),
        )
    }

    fn fueling(motorista: &str, valor: i64, day: u32) -> Fueling {
        Fueling {
            id: format!("f-{}-{}", motorista, day),
            vehicle_id: "v1".to_string(),
            placa: "LQB2B76".to_string(),
            motorista_id: motorista.to_string(),
            km_no_momento: Decimal::ZERO,
            valor: Decimal::from(valor),
            foto_nota: None,
            status: FuelingStatus::Aprovado,
            motivo_rejeicao: None,
            admin_aprovador_id: None,
            approved_at: None,
            created_at: Utc.with_ymd_and_hms(2024, 3, day, 9, 0, 0).unwrap(),
        }
    }

    fn daily(motorista: &str, ajudante: Option<&str>, pay_m: i64, pay_a: i64, day: u32) -> DailyRoute {
        DailyRoute {
            id: format!("dr-{}", day),
            vehicle_id: "v1".to_string(),
            placa: "LQB2B76".to_string(),
            motorista_id: motorista.to_string(),
            ajudante_id: ajudante.map(str::to_string),
            ajudante_nome: None,
            cliente_id: None,
            cliente_nome: None,
            destino: "Ortobom".to_string(),
            oc: Some("OC-1042".to_string()),
            valor_frete: Decimal::from(2000),
            valor_motorista: Decimal::from(pay_m),
            valor_ajudante: Decimal::from(pay_a),
            status_financeiro: Default::default(),
            admin_financeiro_id: None,
            created_at: Utc.with_ymd_and_hms(2024, 3, day, 7, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_collaborator_scenario() {
        // Dos abastecimientos (100, 150) y una rota como ajudante (200) en
        // tres días distintos: 3 actividades, 3 días, ganhos 450
        let fuelings = vec![fueling("u8", 100, 5), fueling("u8", 150, 6)];
        let daily_routes = vec![daily("u3", Some("u8"), 300, 200, 7)];

        let activities =
            collaborator_activities("u8", &daily_routes, &[], &fuelings, &[], &march());
        let stats = activity_stats(&activities);

        assert_eq!(stats.total_atividades, 3);
        assert_eq!(stats.dias_trabalhados, 3);
        assert_eq!(stats.total_ganhos, Decimal::from(450));
        assert_eq!(stats.total_frete, Decimal::from(2000));
    }

    #[test]
    fn test_driver_gets_driver_pay_helper_gets_helper_pay() {
        let daily_routes = vec![daily("u3", Some("u8"), 300, 200, 7)];

        let as_driver = collaborator_activities("u3", &daily_routes, &[], &[], &[], &march());
        assert_eq!(as_driver[0].ganho_pessoal(), Decimal::from(300));

        let as_helper = collaborator_activities("u8", &daily_routes, &[], &[], &[], &march());
        assert_eq!(as_helper[0].ganho_pessoal(), Decimal::from(200));
    }

    #[test]
    fn test_sorted_by_date_descending() {
        let daily_routes = vec![
            daily("u3", None, 300, 0, 5),
            daily("u3", None, 300, 0, 20),
            daily("u3", None, 300, 0, 12),
        ];

        let activities = collaborator_activities("u3", &daily_routes, &[], &[], &[], &march());
        let days: Vec<u32> = activities
            .iter()
            .map(|a| chrono::Datelike::day(&a.data().date_naive()))
            .collect();
        assert_eq!(days, vec![20, 12, 5]);
    }

    #[test]
    fn test_incomplete_period_yields_empty_report() {
        let daily_routes = vec![daily("u3", None, 300, 0, 5)];

        let open = ReportPeriod::new(NaiveDate::from_ymd_opt(2024, 3, 1), None);
        assert!(collaborator_activities("u3", &daily_routes, &[], &[], &[], &open).is_empty());
        assert!(collaborator_activities("u3", &daily_routes, &[], &[], &[], &ReportPeriod::all_time())
            .is_empty());
    }

    #[test]
    fn test_repeated_days_count_once() {
        let daily_routes = vec![daily("u3", None, 300, 0, 5)];
        let fuelings = vec![fueling("u3", 100, 5)];

        let activities =
            collaborator_activities("u3", &daily_routes, &[], &fuelings, &[], &march());
        let stats = activity_stats(&activities);
        assert_eq!(stats.total_atividades, 2);
        assert_eq!(stats.dias_trabalhados, 1);
    }

    #[test]
    fn test_other_users_records_excluded() {
        let daily_routes = vec![daily("u3", Some("u8"), 300, 200, 7)];
        let fuelings = vec![fueling("u3", 100, 5)];

        let activities =
            collaborator_activities("u5", &daily_routes, &[], &fuelings, &[], &march());
        assert!(activities.is_empty());
    }

    #[test]
    fn test_edit_field_validity_per_origin() {
        assert!(ActivityEditField::ValorFrete.is_valid_for(ActivityOrigin::Daily));
        assert!(ActivityEditField::ValorMotorista.is_valid_for(ActivityOrigin::Route));
        assert!(ActivityEditField::ValorAjudante.is_valid_for(ActivityOrigin::Daily));
        assert!(!ActivityEditField::Valor.is_valid_for(ActivityOrigin::Route));

        assert!(ActivityEditField::Valor.is_valid_for(ActivityOrigin::Fuel));
        assert!(ActivityEditField::Valor.is_valid_for(ActivityOrigin::Maintenance));
        assert!(!ActivityEditField::ValorFrete.is_valid_for(ActivityOrigin::Fuel));
        assert!(!ActivityEditField::ValorAjudante.is_valid_for(ActivityOrigin::Maintenance));
    }
}
