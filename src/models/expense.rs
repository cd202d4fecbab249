//! Modelo de FixedExpense (despesa fija mensual)
//!
//! Las despesas fijas se imputan a un mes de competencia (`YYYY-MM`), nunca a
//! un día. El matching con un período de reporte es por igualdad de mes, no
//! por contención de rango.

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::decimal_or_zero;

/// Mes de competencia en formato `YYYY-MM`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct Competencia(pub String);

impl Competencia {
    pub fn from_date(date: NaiveDate) -> Self {
        Self(format!("{:04}-{:02}", date.year(), date.month()))
    }

    /// Primer día del mes de competencia; None si el formato no es `YYYY-MM`
    pub fn first_day(&self) -> Option<NaiveDate> {
        let (year, month) = self.0.split_once('-')?;
        NaiveDate::from_ymd_opt(year.parse().ok()?, month.parse().ok()?, 1)
    }
}

impl fmt::Display for Competencia {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FixedExpense {
    pub id: String,
    pub categoria: String,
    pub descricao: String,
    #[serde(default, deserialize_with = "decimal_or_zero")]
    pub valor: Decimal,
    pub data_competencia: Competencia,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_competencia_from_date() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 31).unwrap();
        assert_eq!(Competencia::from_date(date).0, "2024-03");
    }

    #[test]
    fn test_competencia_first_day() {
        let comp = Competencia("2024-03".to_string());
        assert_eq!(
            comp.first_day(),
            NaiveDate::from_ymd_opt(2024, 3, 1)
        );
        assert_eq!(Competencia("garbage".to_string()).first_day(), None);
    }
}
