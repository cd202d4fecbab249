//! Modelo de Toll (peaje)

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::decimal_or_zero;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Toll {
    pub id: String,
    pub vehicle_id: String,
    pub placa: String,
    #[serde(default, deserialize_with = "decimal_or_zero")]
    pub valor: Decimal,
    /// Fecha del peaje (día calendario, no timestamp)
    pub data: NaiveDate,
    pub created_at: DateTime<Utc>,
}
