//! Shared application state
//!
//! Este módulo define el estado compartido de la aplicación que se pasa
//! a través del router de Axum.

use crate::config::environment::EnvironmentConfig;
use crate::store::FleetStore;

#[derive(Clone)]
pub struct AppState {
    pub store: FleetStore,
    pub config: EnvironmentConfig,
}

impl AppState {
    pub fn new(store: FleetStore, config: EnvironmentConfig) -> Self {
        Self { store, config }
    }
}
