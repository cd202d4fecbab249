//! Store en memoria del snapshot de flota
//!
//! Lectura: cada reporte clona el snapshot fuera del lock, así la agregación
//! nunca corre con el lock tomado. Escritura: los updates parciales de la
//! edición financiera toman el write lock solo durante la mutación puntual.

use std::sync::Arc;

use chrono::Utc;
use rust_decimal::Decimal;
use tokio::sync::RwLock;

use crate::models::{
    DailyRoute, FinanceStatus, Fueling, FuelingStatus, MaintenanceRequest, MaintenanceStatus,
    RouteDeparture,
};
use crate::store::snapshot::{FleetSnapshot, SnapshotStats};
use crate::utils::errors::{not_found_error, AppResult};

#[derive(Clone, Default)]
pub struct FleetStore {
    inner: Arc<RwLock<FleetSnapshot>>,
}

impl FleetStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_snapshot(snapshot: FleetSnapshot) -> Self {
        Self {
            inner: Arc::new(RwLock::new(snapshot)),
        }
    }

    /// Clon del snapshot actual; entradas inmutables para una invocación
    pub async fn snapshot(&self) -> FleetSnapshot {
        self.inner.read().await.clone()
    }

    /// Reemplazar el snapshot completo de forma atómica
    pub async fn replace(&self, snapshot: FleetSnapshot) -> SnapshotStats {
        let stats = snapshot.stats();
        *self.inner.write().await = snapshot;
        stats
    }

    pub async fn stats(&self) -> SnapshotStats {
        self.inner.read().await.stats()
    }

    /// Update parcial financiero de una rota diaria, con sello de auditoría
    pub async fn update_daily_route_finance(
        &self,
        id: &str,
        valor_frete: Option<Decimal>,
        valor_motorista: Option<Decimal>,
        valor_ajudante: Option<Decimal>,
        status_financeiro: Option<FinanceStatus>,
        admin_id: &str,
    ) -> AppResult<DailyRoute> {
        let mut snapshot = self.inner.write().await;
        let route = snapshot
            .daily_routes
            .iter_mut()
            .find(|d| d.id == id)
            .ok_or_else(|| not_found_error("Daily route", id))?;

        if let Some(valor) = valor_frete {
            route.valor_frete = valor;
        }
        if let Some(valor) = valor_motorista {
            route.valor_motorista = valor;
        }
        if let Some(valor) = valor_ajudante {
            route.valor_ajudante = valor;
        }
        if let Some(status) = status_financeiro {
            route.status_financeiro = status;
        }
        route.admin_financeiro_id = Some(admin_id.to_string());

        Ok(route.clone())
    }

    /// Update parcial financiero de una saída OC, con sello de auditoría
    pub async fn update_route_finance(
        &self,
        id: &str,
        valor_frete: Option<Decimal>,
        valor_motorista: Option<Decimal>,
        valor_ajudante: Option<Decimal>,
        status_financeiro: Option<FinanceStatus>,
        admin_id: &str,
    ) -> AppResult<RouteDeparture> {
        let mut snapshot = self.inner.write().await;
        let route = snapshot
            .routes
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| not_found_error("Route departure", id))?;

        if let Some(valor) = valor_frete {
            route.valor_frete = valor;
        }
        if let Some(valor) = valor_motorista {
            route.valor_motorista = valor;
        }
        if let Some(valor) = valor_ajudante {
            route.valor_ajudante = valor;
        }
        if let Some(status) = status_financeiro {
            route.status_financeiro = status;
        }
        route.admin_financeiro_id = Some(admin_id.to_string());

        Ok(route.clone())
    }

    /// Update parcial de un abastecimiento (valor, aprobación/rechazo)
    pub async fn update_fueling_finance(
        &self,
        id: &str,
        valor: Option<Decimal>,
        status: Option<FuelingStatus>,
        motivo_rejeicao: Option<String>,
        admin_id: &str,
    ) -> AppResult<Fueling> {
        let mut snapshot = self.inner.write().await;
        let fueling = snapshot
            .fuelings
            .iter_mut()
            .find(|f| f.id == id)
            .ok_or_else(|| not_found_error("Fueling", id))?;

        if let Some(valor) = valor {
            fueling.valor = valor;
        }
        if let Some(status) = status {
            fueling.status = status;
            if status == FuelingStatus::Aprovado {
                fueling.approved_at = Some(Utc::now());
            }
        }
        if let Some(motivo) = motivo_rejeicao {
            fueling.motivo_rejeicao = Some(motivo);
        }
        fueling.admin_aprovador_id = Some(admin_id.to_string());

        Ok(fueling.clone())
    }

    /// Update parcial de un mantenimiento (valor, estado, oficina)
    pub async fn update_maintenance_finance(
        &self,
        id: &str,
        valor: Option<Decimal>,
        status: Option<MaintenanceStatus>,
        oficina: Option<String>,
        observacao_admin: Option<String>,
        admin_id: &str,
    ) -> AppResult<MaintenanceRequest> {
        let mut snapshot = self.inner.write().await;
        let maintenance = snapshot
            .maintenances
            .iter_mut()
            .find(|m| m.id == id)
            .ok_or_else(|| not_found_error("Maintenance", id))?;

        if let Some(valor) = valor {
            maintenance.valor = valor;
        }
        if let Some(status) = status {
            maintenance.status = status;
            if status == MaintenanceStatus::Feita {
                maintenance.done_at = Some(Utc::now());
            }
        }
        if let Some(oficina) = oficina {
            maintenance.oficina = Some(oficina);
        }
        if let Some(observacao) = observacao_admin {
            maintenance.observacao_admin = Some(observacao);
        }
        maintenance.admin_responsavel_id = Some(admin_id.to_string());

        Ok(maintenance.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::errors::AppError;
    use chrono::TimeZone;

    fn snapshot_with_daily_route() -> FleetSnapshot {
        FleetSnapshot {
            daily_routes: vec![DailyRoute {
                id: "dr1".to_string(),
                vehicle_id: "v1".to_string(),
                placa: "LQB2B76".to_string(),
                motorista_id: "u3".to_string(),
                ajudante_id: None,
                ajudante_nome: None,
                cliente_id: None,
                cliente_nome: None,
                destino: "Frigocopa".to_string(),
                oc: None,
                valor_frete: Decimal::from(2000),
                valor_motorista: Decimal::from(300),
                valor_ajudante: Decimal::ZERO,
                status_financeiro: FinanceStatus::Pendente,
                admin_financeiro_id: None,
                created_at: Utc.with_ymd_and_hms(2024, 3, 12, 7, 30, 0).unwrap(),
            }],
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_update_daily_route_touches_only_given_fields() {
        let store = FleetStore::from_snapshot(snapshot_with_daily_route());

        let updated = store
            .update_daily_route_finance("dr1", Some(Decimal::from(2500)), None, None, None, "u1")
            .await
            .unwrap();

        assert_eq!(updated.valor_frete, Decimal::from(2500));
        // Los campos no enviados quedan intactos
        assert_eq!(updated.valor_motorista, Decimal::from(300));
        assert_eq!(updated.status_financeiro, FinanceStatus::Pendente);
        // Sello de auditoría del admin que editó
        assert_eq!(updated.admin_financeiro_id.as_deref(), Some("u1"));
    }

    #[tokio::test]
    async fn test_update_unknown_record_is_not_found() {
        let store = FleetStore::from_snapshot(snapshot_with_daily_route());

        let err = store
            .update_daily_route_finance("nope", None, None, None, None, "u1")
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_fueling_approval_stamps_audit_trail() {
        let snapshot = FleetSnapshot {
            fuelings: vec![Fueling {
                id: "f1".to_string(),
                vehicle_id: "v1".to_string(),
                placa: "LQB2B76".to_string(),
                motorista_id: "u3".to_string(),
                km_no_momento: Decimal::ZERO,
                valor: Decimal::from(500),
                foto_nota: None,
                status: FuelingStatus::Pendente,
                motivo_rejeicao: None,
                admin_aprovador_id: None,
                approved_at: None,
                created_at: Utc.with_ymd_and_hms(2024, 3, 10, 8, 0, 0).unwrap(),
            }],
            ..Default::default()
        };
        let store = FleetStore::from_snapshot(snapshot);

        let updated = store
            .update_fueling_finance("f1", None, Some(FuelingStatus::Aprovado), None, "u2")
            .await
            .unwrap();

        assert_eq!(updated.status, FuelingStatus::Aprovado);
        assert_eq!(updated.admin_aprovador_id.as_deref(), Some("u2"));
        assert!(updated.approved_at.is_some());
    }

    #[tokio::test]
    async fn test_replace_swaps_the_whole_snapshot() {
        let store = FleetStore::from_snapshot(snapshot_with_daily_route());
        assert_eq!(store.stats().await.daily_routes, 1);

        let stats = store.replace(FleetSnapshot::default()).await;
        assert_eq!(stats.total, 0);
        assert_eq!(store.stats().await.daily_routes, 0);
    }
}
