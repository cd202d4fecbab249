//! Controller de reportes financieros
//!
//! Orquesta: clona el snapshot, aplica el período y llama a los agregadores
//! puros. Toda la lógica de negocio vive en services.

use crate::dto::activity_dto::{ActivityEntryDto, ActivityReportResponse, CollaboratorDto};
use crate::dto::ledger_dto::ConsolidatedReportResponse;
use crate::dto::report_dto::{AgregadoReportResponse, PeriodQuery, VehicleReportResponse};
use crate::services::activity_report_service::{activity_stats, collaborator_activities};
use crate::services::agregado_report_service::{agregado_freights, agregado_totals};
use crate::services::dashboard_service::{dashboard_summary, DashboardSummary};
use crate::services::ledger_service::{build_ledger, summarize};
use crate::services::vehicle_report_service::{fleet_totals, total_fixed_expenses, vehicle_stats};
use crate::store::FleetStore;
use crate::utils::errors::{not_found_error, AppError};

pub struct ReportController {
    store: FleetStore,
}

impl ReportController {
    pub fn new(store: FleetStore) -> Self {
        Self { store }
    }

    /// Reporte de desempeño por vehículo más totales de flota
    pub async fn vehicle_report(
        &self,
        query: PeriodQuery,
    ) -> Result<VehicleReportResponse, AppError> {
        let period = query.parse()?;
        let snapshot = self.store.snapshot().await;

        let veiculos = vehicle_stats(
            &snapshot.vehicles,
            &snapshot.fuelings,
            &snapshot.maintenances,
            &snapshot.daily_routes,
            &snapshot.routes,
            &snapshot.tolls,
            &period,
        );
        let totais = fleet_totals(&veiculos);
        let total_despesas_fixas = total_fixed_expenses(&snapshot.fixed_expenses, &period);
        let lucro_liquido = totais.lucro_operacional - total_despesas_fixas;

        Ok(VehicleReportResponse {
            periodo: period,
            veiculos,
            totais,
            total_despesas_fixas,
            lucro_liquido,
        })
    }

    /// Reporte de actividad y ganhos de un colaborador
    pub async fn activity_report(
        &self,
        user_id: &str,
        query: PeriodQuery,
    ) -> Result<ActivityReportResponse, AppError> {
        let period = query.parse()?;
        let snapshot = self.store.snapshot().await;

        let user = snapshot
            .users
            .iter()
            .find(|u| u.id == user_id)
            .ok_or_else(|| not_found_error("User", user_id))?;

        let activities = collaborator_activities(
            user_id,
            &snapshot.daily_routes,
            &snapshot.routes,
            &snapshot.fuelings,
            &snapshot.maintenances,
            &period,
        );

        Ok(ActivityReportResponse {
            colaborador: CollaboratorDto::from(user),
            periodo: period,
            atividades: activities.iter().map(ActivityEntryDto::from).collect(),
            stats: activity_stats(&activities),
        })
    }

    /// Libro consolidado: el número de lucro autoritativo de la empresa
    pub async fn consolidated_report(
        &self,
        query: PeriodQuery,
    ) -> Result<ConsolidatedReportResponse, AppError> {
        let period = query.parse()?;
        let snapshot = self.store.snapshot().await;

        let lancamentos = build_ledger(
            &snapshot.daily_routes,
            &snapshot.routes,
            &snapshot.fuelings,
            &snapshot.maintenances,
            &snapshot.tolls,
            &snapshot.agregado_freights,
            &snapshot.fixed_expenses,
            &period,
        );
        let resumo = summarize(&lancamentos);

        Ok(ConsolidatedReportResponse {
            periodo: period,
            lancamentos,
            resumo,
        })
    }

    /// Reporte de fletes con conductores agregados
    pub async fn agregado_report(
        &self,
        query: PeriodQuery,
    ) -> Result<AgregadoReportResponse, AppError> {
        let period = query.parse()?;
        let snapshot = self.store.snapshot().await;

        let fretes = agregado_freights(&snapshot.agregado_freights, &period);
        let totais = agregado_totals(&fretes);

        Ok(AgregadoReportResponse {
            periodo: period,
            fretes,
            totais,
        })
    }

    /// Resumen operativo del dashboard (sin filtro de fechas)
    pub async fn dashboard(&self) -> Result<DashboardSummary, AppError> {
        let snapshot = self.store.snapshot().await;
        Ok(dashboard_summary(
            &snapshot.vehicles,
            &snapshot.fuelings,
            &snapshot.maintenances,
            &snapshot.fixed_expenses,
        ))
    }
}
