//! Services module
//!
//! Este módulo contiene la lógica de negocio de la aplicación: el filtro de
//! período y los agregadores financieros. Todos son funciones puras sobre el
//! snapshot; nunca mutan sus entradas ni guardan estado entre invocaciones.

pub mod activity_report_service;
pub mod agregado_report_service;
pub mod dashboard_service;
pub mod ledger_service;
pub mod period;
pub mod vehicle_report_service;

pub use activity_report_service::*;
pub use agregado_report_service::*;
pub use dashboard_service::*;
pub use ledger_service::*;
pub use period::*;
pub use vehicle_report_service::*;
