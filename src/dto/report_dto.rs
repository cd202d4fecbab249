//! DTOs de los reportes financieros

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::ValidationErrors;

use crate::models::AgregadoFreight;
use crate::services::agregado_report_service::AgregadoTotals;
use crate::services::period::ReportPeriod;
use crate::services::vehicle_report_service::{FleetTotals, VehicleStats};
use crate::utils::errors::AppResult;
use crate::utils::validation::validate_date;

/// Query string de período: fechas `YYYY-MM-DD`, ambas opcionales.
/// Un límite ausente (o vacío, como manda un input de fecha sin llenar)
/// significa "todo el histórico".
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodQuery {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

impl PeriodQuery {
    /// Validar y convertir a un período; fechas malformadas son 400
    pub fn parse(&self) -> AppResult<ReportPeriod> {
        let start = parse_bound(&self.start_date, "startDate")?;
        let end = parse_bound(&self.end_date, "endDate")?;
        Ok(ReportPeriod::new(start, end))
    }
}

fn parse_bound(
    value: &Option<String>,
    field: &'static str,
) -> Result<Option<chrono::NaiveDate>, ValidationErrors> {
    match value.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(raw) => match validate_date(raw) {
            Ok(date) => Ok(Some(date)),
            Err(error) => {
                let mut errors = ValidationErrors::new();
                errors.add(field, error);
                Err(errors)
            }
        },
    }
}

/// Response del reporte por vehículo
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleReportResponse {
    pub periodo: ReportPeriod,
    pub veiculos: Vec<VehicleStats>,
    pub totais: FleetTotals,
    pub total_despesas_fixas: Decimal,
    /// Lucro operativo de flota menos despesas fijas del período
    pub lucro_liquido: Decimal,
}

/// Response del reporte de agregados
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AgregadoReportResponse {
    pub periodo: ReportPeriod,
    pub fretes: Vec<AgregadoFreight>,
    pub totais: AgregadoTotals,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_parse_full_period() {
        let query = PeriodQuery {
            start_date: Some("2024-03-01".to_string()),
            end_date: Some("2024-03-31".to_string()),
        };
        let period = query.parse().unwrap();
        assert_eq!(period.start, NaiveDate::from_ymd_opt(2024, 3, 1));
        assert_eq!(period.end, NaiveDate::from_ymd_opt(2024, 3, 31));
    }

    #[test]
    fn test_empty_strings_mean_all_time() {
        let query = PeriodQuery {
            start_date: Some("".to_string()),
            end_date: None,
        };
        let period = query.parse().unwrap();
        assert_eq!(period, ReportPeriod::all_time());
    }

    #[test]
    fn test_malformed_date_is_rejected() {
        let query = PeriodQuery {
            start_date: Some("31/03/2024".to_string()),
            end_date: None,
        };
        assert!(query.parse().is_err());
    }
}
