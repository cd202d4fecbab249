//! DTOs del reporte consolidado

use serde::Serialize;

use crate::services::ledger_service::{LedgerEntry, LedgerSummary};
use crate::services::period::ReportPeriod;

/// Response del reporte financiero consolidado
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsolidatedReportResponse {
    pub periodo: ReportPeriod,
    pub lancamentos: Vec<LedgerEntry>,
    pub resumo: LedgerSummary,
}
