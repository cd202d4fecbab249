//! Filtro de rango de fechas de los reportes
//!
//! Un período es un par de fechas calendario inclusivas. Un límite ausente
//! significa "sin filtro" (todo el histórico). Las despesas fijas no usan el
//! rango: se comparan por igualdad de mes de competencia.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

use crate::models::Competencia;

/// Período de reporte con límites inclusivos
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ReportPeriod {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl ReportPeriod {
    pub fn new(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        Self { start, end }
    }

    pub fn all_time() -> Self {
        Self::default()
    }

    /// Ambos límites presentes
    pub fn is_complete(&self) -> bool {
        self.start.is_some() && self.end.is_some()
    }

    /// ¿El timestamp cae dentro de [start 00:00:00, end 23:59:59.999]?
    ///
    /// Con cualquier límite ausente el período pasa todos los registros,
    /// igual que el filtro "todo el histórico" de los reportes.
    pub fn contains(&self, ts: DateTime<Utc>) -> bool {
        let (Some(start), Some(end)) = (self.start, self.end) else {
            return true;
        };
        let naive = ts.naive_utc();
        // and_hms_*_opt solo falla con valores fuera de rango; estos son fijos
        let lower = match start.and_hms_opt(0, 0, 0) {
            Some(v) => v,
            None => return false,
        };
        let upper = match end.and_hms_milli_opt(23, 59, 59, 999) {
            Some(v) => v,
            None => return false,
        };
        naive >= lower && naive <= upper
    }

    /// Misma regla para campos con fecha calendario (peajes, fletes agregado)
    pub fn contains_day(&self, day: NaiveDate) -> bool {
        let (Some(start), Some(end)) = (self.start, self.end) else {
            return true;
        };
        day >= start && day <= end
    }

    /// Mes de competencia del período: el mes de la fecha inicial.
    /// Las despesas fijas matchean solo por igualdad contra este mes.
    pub fn competencia(&self) -> Option<Competencia> {
        self.start.map(Competencia::from_date)
    }

    /// ¿La despesa fija pertenece al período? Igualdad de mes, nunca rango.
    pub fn matches_competencia(&self, competencia: &Competencia) -> bool {
        match self.competencia() {
            Some(ref selected) => selected == competencia,
            None => false,
        }
    }
}

/// Inicio del día en UTC, para ordenar registros con fecha calendario junto a
/// registros con timestamp
pub fn day_start_utc(day: NaiveDate) -> DateTime<Utc> {
    DateTime::from_naive_utc_and_offset(
        day.and_hms_opt(0, 0, 0).unwrap_or_default(),
        Utc,
    )
}
