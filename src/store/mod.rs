//! Store de registros
//!
//! La persistencia real vive en la capa CRUD upstream; este módulo mantiene
//! el snapshot en memoria que alimenta los reportes y aplica los updates
//! parciales de la edición financiera.

pub mod fleet_store;
pub mod snapshot;

pub use fleet_store::*;
pub use snapshot::*;
