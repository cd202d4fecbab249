//! Modelo de AgregadoFreight (flete con conductor agregado)
//!
//! Viaje realizado por un conductor tercerizado: `valorFrete` es lo facturado
//! al cliente, `valorAgregado` lo pagado al agregado.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::decimal_or_zero;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgregadoFreight {
    pub id: String,
    pub agregado_id: String,
    pub nome_agregado: String,
    pub placa: String,
    #[serde(default, deserialize_with = "decimal_or_zero")]
    pub valor_frete: Decimal,
    #[serde(default, deserialize_with = "decimal_or_zero")]
    pub valor_agregado: Decimal,
    #[serde(default)]
    pub oc: Option<String>,
    /// Fecha del flete (día calendario)
    pub data: NaiveDate,
    pub created_at: DateTime<Utc>,
}

impl AgregadoFreight {
    /// Participación de la empresa: facturado menos pagado al agregado
    pub fn company_share(&self) -> Decimal {
        self.valor_frete - self.valor_agregado
    }
}
