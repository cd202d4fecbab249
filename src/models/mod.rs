//! Modelos del sistema
//!
//! Este módulo contiene los registros operativos tal como los entrega la capa
//! de datos upstream: nombres de campo camelCase, campos monetarios en
//! `Decimal`. Los campos desconocidos del JSON de ingesta se ignoran.

pub mod agregado;
pub mod customer;
pub mod expense;
pub mod fueling;
pub mod maintenance;
pub mod route;
pub mod toll;
pub mod user;
pub mod vehicle;

pub use agregado::*;
pub use customer::*;
pub use expense::*;
pub use fueling::*;
pub use maintenance::*;
pub use route::*;
pub use toll::*;
pub use user::*;
pub use vehicle::*;

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};

/// Deserializar un campo monetario opcional como cero.
///
/// La capa upstream persiste `null` para valores nunca informados; ningún
/// valor ausente debe propagarse como null dentro de las sumas.
pub fn decimal_or_zero<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Decimal>::deserialize(deserializer)?.unwrap_or(Decimal::ZERO))
}
