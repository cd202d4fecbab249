//! Controller de ingesta de snapshot
//!
//! La persistencia real es de la capa CRUD upstream; este borde recibe el
//! snapshot completo y lo reemplaza de forma atómica.

use crate::dto::common_dto::ApiResponse;
use crate::store::{FleetSnapshot, FleetStore, SnapshotStats};
use crate::utils::errors::AppError;

pub struct SnapshotController {
    store: FleetStore,
}

impl SnapshotController {
    pub fn new(store: FleetStore) -> Self {
        Self { store }
    }

    pub async fn ingest(
        &self,
        snapshot: FleetSnapshot,
    ) -> Result<ApiResponse<SnapshotStats>, AppError> {
        let stats = self.store.replace(snapshot).await;
        tracing::info!("📥 Snapshot reemplazado: {} registros", stats.total);

        Ok(ApiResponse::success_with_message(
            stats,
            "Snapshot actualizado exitosamente".to_string(),
        ))
    }

    pub async fn stats(&self) -> Result<SnapshotStats, AppError> {
        Ok(self.store.stats().await)
    }
}
