//! Controllers de la aplicación
//!
//! Capa de orquestación entre las rutas y los services/store.

pub mod finance_controller;
pub mod report_controller;
pub mod snapshot_controller;
