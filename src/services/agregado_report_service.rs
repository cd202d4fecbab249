//! Agregador de fletes con conductores agregados
//!
//! Fletes tercerizados del período, más recientes primero, con los totales de
//! facturación y pago al agregado.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::AgregadoFreight;
use crate::services::period::ReportPeriod;

/// Totales del reporte de agregados
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AgregadoTotals {
    pub total_frete: Decimal,
    pub total_pago: Decimal,
    /// Facturado menos pagado: participación de la empresa
    pub saldo: Decimal,
}

/// Fletes de agregado dentro del período, más recientes primero
pub fn agregado_freights(
    freights: &[AgregadoFreight],
    period: &ReportPeriod,
) -> Vec<AgregadoFreight> {
    let mut filtered: Vec<AgregadoFreight> = freights
        .iter()
        .filter(|f| period.contains_day(f.data))
        .cloned()
        .collect();
    filtered.sort_by(|a, b| b.data.cmp(&a.data));
    filtered
}

/// Totales sobre los fletes ya filtrados
pub fn agregado_totals(freights: &[AgregadoFreight]) -> AgregadoTotals {
    freights.iter().fold(AgregadoTotals::default(), |acc, f| AgregadoTotals {
        total_frete: acc.total_frete + f.valor_frete,
        total_pago: acc.total_pago + f.valor_agregado,
        saldo: acc.saldo + f.company_share(),
    })
}
