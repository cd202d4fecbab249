//! Constructor del libro consolidado
//!
//! Fusiona todas las receitas y despesas del período en un libro cronológico
//! único y deriva el resumen (facturación, despesas por categoría, lucro
//! líquido). Este es el número de lucro autoritativo de la empresa.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::BTreeMap;

use crate::models::{
    AgregadoFreight, DailyRoute, FixedExpense, Fueling, MaintenanceRequest, RouteDeparture, Toll,
};
use crate::services::period::{day_start_utc, ReportPeriod};

/// Naturaleza del lanzamiento
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum LedgerKind {
    Receita,
    Despesa,
}

/// Categoría del lanzamiento. El orden de declaración fija el orden de los
/// subtotales en el resumen.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, PartialOrd, Ord)]
pub enum LedgerCategory {
    Rota,
    #[serde(rename = "OC")]
    Oc,
    Agregado,
    Equipe,
    #[serde(rename = "Combustível")]
    Combustivel,
    #[serde(rename = "Manutenção")]
    Manutencao,
    #[serde(rename = "Pedágio")]
    Pedagio,
    Fixo,
}

/// Lanzamiento individual del libro consolidado
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LedgerEntry {
    pub data: DateTime<Utc>,
    #[serde(rename = "tipo")]
    pub kind: LedgerKind,
    pub categoria: LedgerCategory,
    pub descricao: String,
    pub valor: Decimal,
}

/// Resumen del libro: facturación, despesas (total y por categoría) y lucro
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LedgerSummary {
    pub total_receitas: Decimal,
    pub total_despesas: Decimal,
    pub despesas_por_categoria: BTreeMap<LedgerCategory, Decimal>,
    pub lucro_liquido: Decimal,
}

/// Construir el libro consolidado del período, más reciente primero
pub fn build_ledger(
    daily_routes: &[DailyRoute],
    routes: &[RouteDeparture],
    fuelings: &[Fueling],
    maintenances: &[MaintenanceRequest],
    tolls: &[Toll],
    agregado_freights: &[AgregadoFreight],
    fixed_expenses: &[FixedExpense],
    period: &ReportPeriod,
) -> Vec<LedgerEntry> {
    let mut entries: Vec<LedgerEntry> = Vec::new();

    // Receitas: una por viaje y por flete de agregado
    for d in daily_routes.iter().filter(|d| period.contains(d.created_at)) {
        entries.push(LedgerEntry {
            data: d.created_at,
            kind: LedgerKind::Receita,
            categoria: LedgerCategory::Rota,
            descricao: d.oc.clone().unwrap_or_else(|| d.destino.clone()),
            valor: d.valor_frete,
        });
    }
    for r in routes.iter().filter(|r| period.contains(r.created_at)) {
        entries.push(LedgerEntry {
            data: r.created_at,
            kind: LedgerKind::Receita,
            categoria: LedgerCategory::Oc,
            descricao: r.oc.clone().unwrap_or_else(|| r.destino.clone()),
            valor: r.valor_frete,
        });
    }
    for a in agregado_freights.iter().filter(|a| period.contains_day(a.data)) {
        entries.push(LedgerEntry {
            data: day_start_utc(a.data),
            kind: LedgerKind::Receita,
            categoria: LedgerCategory::Agregado,
            descricao: a.oc.clone().unwrap_or_else(|| a.nome_agregado.clone()),
            valor: a.valor_frete,
        });
    }

    // Despesas de equipo: línea separada por motorista y ajudante cuando
    // el valor es distinto de cero
    for d in daily_routes.iter().filter(|d| period.contains(d.created_at)) {
        push_team_expenses(&mut entries, d.created_at, d.valor_motorista, d.valor_ajudante);
    }
    for r in routes.iter().filter(|r| period.contains(r.created_at)) {
        push_team_expenses(&mut entries, r.created_at, r.valor_motorista, r.valor_ajudante);
    }

    for a in agregado_freights.iter().filter(|a| period.contains_day(a.data)) {
        entries.push(LedgerEntry {
            data: day_start_utc(a.data),
            kind: LedgerKind::Despesa,
            categoria: LedgerCategory::Agregado,
            descricao: format!("Pagto Agregado {}", a.nome_agregado),
            valor: a.valor_agregado,
        });
    }

    for f in fuelings
        .iter()
        .filter(|f| f.is_realized_cost() && period.contains(f.created_at))
    {
        entries.push(LedgerEntry {
            data: f.created_at,
            kind: LedgerKind::Despesa,
            categoria: LedgerCategory::Combustivel,
            descricao: f.placa.clone(),
            valor: f.valor,
        });
    }

    for m in maintenances
        .iter()
        .filter(|m| m.is_realized_cost() && period.contains(m.created_at))
    {
        entries.push(LedgerEntry {
            data: m.created_at,
            kind: LedgerKind::Despesa,
            categoria: LedgerCategory::Manutencao,
            descricao: m.placa.clone(),
            valor: m.valor,
        });
    }

    for t in tolls.iter().filter(|t| period.contains_day(t.data)) {
        entries.push(LedgerEntry {
            data: day_start_utc(t.data),
            kind: LedgerKind::Despesa,
            categoria: LedgerCategory::Pedagio,
            descricao: t.placa.clone(),
            valor: t.valor,
        });
    }

    // Despesas fijas: matching por mes de competencia, nunca por rango.
    // La fecha del lanzamiento es el primer día del mes de competencia.
    for e in fixed_expenses
        .iter()
        .filter(|e| period.matches_competencia(&e.data_competencia))
    {
        let data = e
            .data_competencia
            .first_day()
            .map(day_start_utc)
            .unwrap_or(e.created_at);
        entries.push(LedgerEntry {
            data,
            kind: LedgerKind::Despesa,
            categoria: LedgerCategory::Fixo,
            descricao: e.descricao.clone(),
            valor: e.valor,
        });
    }

    entries.sort_by(|a, b| b.data.cmp(&a.data));
    entries
}

fn push_team_expenses(
    entries: &mut Vec<LedgerEntry>,
    data: DateTime<Utc>,
    valor_motorista: Decimal,
    valor_ajudante: Decimal,
) {
    if valor_motorista > Decimal::ZERO {
        entries.push(LedgerEntry {
            data,
            kind: LedgerKind::Despesa,
            categoria: LedgerCategory::Equipe,
            descricao: "Pagto Motorista".to_string(),
            valor: valor_motorista,
        });
    }
    if valor_ajudante > Decimal::ZERO {
        entries.push(LedgerEntry {
            data,
            kind: LedgerKind::Despesa,
            categoria: LedgerCategory::Equipe,
            descricao: "Pagto Ajudante".to_string(),
            valor: valor_ajudante,
        });
    }
}

/// Derivar el resumen del libro
pub fn summarize(entries: &[LedgerEntry]) -> LedgerSummary {
    let mut summary = LedgerSummary::default();

    for entry in entries {
        match entry.kind {
            LedgerKind::Receita => summary.total_receitas += entry.valor,
            LedgerKind::Despesa => {
                summary.total_despesas += entry.valor;
                *summary
                    .despesas_por_categoria
                    .entry(entry.categoria)
                    .or_insert(Decimal::ZERO) += entry.valor;
            }
        }
    }

    summary.lucro_liquido = summary.total_receitas - summary.total_despesas;
    summary
}
