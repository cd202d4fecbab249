//! Snapshot de registros operativos
//!
//! Copia completa de las colecciones que entrega la capa de datos upstream.
//! Cada invocación de reporte trabaja sobre un clon inmutable del snapshot.

use serde::{Deserialize, Serialize};

use crate::models::{
    AgregadoFreight, Customer, DailyRoute, FixedExpense, Fueling, MaintenanceRequest,
    RouteDeparture, Toll, User, Vehicle,
};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FleetSnapshot {
    #[serde(default)]
    pub fuelings: Vec<Fueling>,
    #[serde(default)]
    pub maintenances: Vec<MaintenanceRequest>,
    #[serde(default)]
    pub daily_routes: Vec<DailyRoute>,
    #[serde(default)]
    pub routes: Vec<RouteDeparture>,
    #[serde(default)]
    pub tolls: Vec<Toll>,
    #[serde(default)]
    pub fixed_expenses: Vec<FixedExpense>,
    #[serde(default)]
    pub agregado_freights: Vec<AgregadoFreight>,
    #[serde(default)]
    pub vehicles: Vec<Vehicle>,
    #[serde(default)]
    pub users: Vec<User>,
    #[serde(default)]
    pub customers: Vec<Customer>,
}

/// Conteo de registros por colección
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotStats {
    pub fuelings: usize,
    pub maintenances: usize,
    pub daily_routes: usize,
    pub routes: usize,
    pub tolls: usize,
    pub fixed_expenses: usize,
    pub agregado_freights: usize,
    pub vehicles: usize,
    pub users: usize,
    pub customers: usize,
    pub total: usize,
}

impl FleetSnapshot {
    /// Cargar un snapshot desde un archivo JSON de seed
    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        let snapshot = serde_json::from_str(&raw)?;
        Ok(snapshot)
    }

    pub fn stats(&self) -> SnapshotStats {
        let mut stats = SnapshotStats {
            fuelings: self.fuelings.len(),
            maintenances: self.maintenances.len(),
            daily_routes: self.daily_routes.len(),
            routes: self.routes.len(),
            tolls: self.tolls.len(),
            fixed_expenses: self.fixed_expenses.len(),
            agregado_freights: self.agregado_freights.len(),
            vehicles: self.vehicles.len(),
            users: self.users.len(),
            customers: self.customers.len(),
            total: 0,
        };
        stats.total = stats.fuelings
            + stats.maintenances
            + stats.daily_routes
            + stats.routes
            + stats.tolls
            + stats.fixed_expenses
            + stats.agregado_freights
            + stats.vehicles
            + stats.users
            + stats.customers;
        stats
    }
}
