//! Plain-text rendering of a cost report.

use std::collections::BTreeMap;
use std::fmt::{self, Write as _};

use creperia_core::costing::format::{format_amount, format_coefficient, format_units, period_label};
use creperia_core::costing::{AdjustmentTable, CostElementId, CostReport, ProductionTable};
use creperia_shared::config::ReportConfig;
use creperia_shared::types::Currency;
use rust_decimal::Decimal;

/// A titled table; the first column is left-aligned, the rest right-aligned.
#[derive(Debug, Default)]
struct Table {
    title: String,
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
    footer: Option<Vec<String>>,
}

impl Table {
    fn new(title: impl Into<String>, headers: &[&str]) -> Self {
        Self {
            title: title.into(),
            headers: headers.iter().map(ToString::to_string).collect(),
            ..Self::default()
        }
    }

    fn row(&mut self, cells: Vec<String>) {
        self.rows.push(cells);
    }

    fn footer(mut self, cells: Vec<String>) -> Self {
        self.footer = Some(cells);
        self
    }

    fn render(&self, out: &mut String) -> fmt::Result {
        let lines: Vec<&Vec<String>> = std::iter::once(&self.headers)
            .chain(&self.rows)
            .chain(&self.footer)
            .collect();
        let columns = lines.iter().map(|cells| cells.len()).max().unwrap_or(0);
        let widths: Vec<usize> = (0..columns)
            .map(|col| {
                lines
                    .iter()
                    .filter_map(|cells| cells.get(col))
                    .map(|cell| cell.chars().count())
                    .max()
                    .unwrap_or(0)
            })
            .collect();
        let rule = widths
            .iter()
            .map(|width| "-".repeat(*width))
            .collect::<Vec<_>>()
            .join("-+-");

        writeln!(out, "{}", self.title)?;
        write_line(out, &self.headers, &widths)?;
        writeln!(out, "{rule}")?;
        for row in &self.rows {
            write_line(out, row, &widths)?;
        }
        if let Some(footer) = &self.footer {
            writeln!(out, "{rule}")?;
            write_line(out, footer, &widths)?;
        }
        writeln!(out)
    }
}

fn write_line(out: &mut String, cells: &[String], widths: &[usize]) -> fmt::Result {
    let line = widths
        .iter()
        .enumerate()
        .map(|(col, width)| {
            let cell = cells.get(col).map_or("", String::as_str);
            if col == 0 {
                format!("{cell:<width$}")
            } else {
                format!("{cell:>width$}")
            }
        })
        .collect::<Vec<_>>()
        .join(" | ");
    writeln!(out, "{}", line.trim_end())
}

/// Renders every table of `report` in reading order.
pub fn render_text(report: &CostReport, config: &ReportConfig) -> Result<String, fmt::Error> {
    let currency = config.currency;
    let money = |value: Decimal| format_amount(value, currency);
    let mut out = String::new();

    writeln!(
        out,
        "COSTOS ESTIMADOS - {}\n",
        period_label(report.period.as_deref())
    )?;

    if report.flags.exceeds_production {
        writeln!(
            out,
            "ADVERTENCIA: la producción terminada excede la producción iniciada; \
             la producción en proceso se toma como 0.\n"
        )?;
    }

    let mut actual = Table::new("Costos del mes", &["Elemento", "Costo real"]);
    for row in &report.actual_cost_summary.rows {
        actual.row(vec![row.label.clone(), money(row.amount)]);
    }
    actual
        .footer(vec!["Total".into(), money(report.actual_cost_summary.total)])
        .render(&mut out)?;

    for table in [
        &report.production_tables.finished,
        &report.production_tables.in_process,
        &report.production_tables.sold,
    ] {
        production_table(table, currency).render(&mut out)?;
    }

    let mut variance = Table::new(
        "Variaciones",
        &["Elemento", "Costo estimado", "Costo real", "Variación", "Tipo"],
    );
    for row in &report.variance_rows {
        variance.row(vec![
            row.label.clone(),
            money(row.estimated_total),
            money(row.actual_total),
            money(row.variance),
            row.status.label().to_string(),
        ]);
    }
    variance
        .footer(vec![
            "Total".into(),
            money(report.totals.estimated),
            money(report.totals.real),
            money(report.totals.diff),
            report.totals.status.label().to_string(),
        ])
        .render(&mut out)?;

    let mut coefficients = Table::new(
        "Coeficiente de rectificación",
        &["Elemento", "Variación", "Costo estimado", "Coeficiente", "Tipo"],
    );
    for (variance_row, coefficient_row) in report.variance_rows.iter().zip(&report.coefficient_rows) {
        coefficients.row(vec![
            variance_row.label.clone(),
            money(variance_row.variance),
            money(variance_row.estimated_total),
            format_coefficient(coefficient_row.coefficient),
            variance_row.status.label().to_string(),
        ]);
    }
    coefficients.render(&mut out)?;

    let mut rectification = Table::new(
        "Rectificación del costo unitario",
        &[
            "Elemento",
            "Costo unitario estimado",
            "Coeficiente",
            "Cifra de corrección",
            "Costo unitario rectificado",
        ],
    );
    for row in &report.coefficient_rows {
        rectification.row(vec![
            row.label.clone(),
            money(row.unit_cost),
            format_coefficient(row.coefficient),
            money(row.correction_amount),
            money(row.corrected_unit_cost),
        ]);
    }
    rectification.render(&mut out)?;

    for table in [
        &report.adjustment_tables.finished_inventory,
        &report.adjustment_tables.in_process,
        &report.adjustment_tables.sold,
    ] {
        adjustment_table(table, currency).render(&mut out)?;
    }

    summary_table(report, currency).render(&mut out)?;

    let unit_label = &config.unit_label;
    let stats = &report.unit_stats;
    for (name, value) in [
        ("Unidades iniciadas", stats.started),
        ("Unidades terminadas", stats.finished),
        ("Unidades en proceso", stats.in_process),
        ("Unidades vendidas", stats.sold),
    ] {
        writeln!(out, "{name}: {} {unit_label}", format_units(value))?;
    }

    Ok(out)
}

fn production_table(table: &ProductionTable, currency: Currency) -> Table {
    let mut out = Table::new(
        table.stage.label(),
        &["Elemento", "Unidades", "Costo unitario", "Costo total"],
    );
    for row in &table.rows {
        out.row(vec![
            row.label.clone(),
            format_units(row.units),
            format_amount(row.unit_cost, currency),
            format_amount(row.total, currency),
        ]);
    }
    out.footer(vec![
        "Total".into(),
        String::new(),
        String::new(),
        format_amount(table.total, currency),
    ])
}

fn adjustment_table(table: &AdjustmentTable, currency: Currency) -> Table {
    let mut out = Table::new(
        table.stage.label(),
        &[
            "Elemento",
            "Unidades",
            "C. unitario estimado",
            "Costo estimado",
            "C. unitario rectificado",
            "Costo rectificado",
            "Ajuste",
        ],
    );
    for row in &table.rows {
        out.row(vec![
            row.label.clone(),
            format_units(row.units),
            format_amount(row.estimated_unit_cost, currency),
            format_amount(row.estimated_total, currency),
            format_amount(row.corrected_unit_cost, currency),
            format_amount(row.corrected_total, currency),
            format_amount(row.adjustment, currency),
        ]);
    }
    out.footer(vec![
        "Total".into(),
        String::new(),
        String::new(),
        format_amount(table.totals.estimated, currency),
        String::new(),
        format_amount(table.totals.corrected, currency),
        format_amount(table.totals.adjustment, currency),
    ])
}

fn summary_table(report: &CostReport, currency: Currency) -> Table {
    let labels: BTreeMap<CostElementId, &str> = report
        .variance_rows
        .iter()
        .map(|row| (row.element, row.label.as_str()))
        .collect();
    let columns: Vec<CostElementId> = report.summary.column_totals.keys().copied().collect();

    let mut headers = vec!["Concepto"];
    headers.extend(columns.iter().map(|id| labels.get(id).copied().unwrap_or("")));
    headers.push("Total");
    let mut out = Table::new("Resumen de ajustes", &headers);

    for row in &report.summary.rows {
        let mut cells = vec![row.label.clone()];
        cells.extend(columns.iter().map(|id| {
            format_amount(row.adjustments.get(id).copied().unwrap_or_default(), currency)
        }));
        cells.push(format_amount(row.total, currency));
        out.row(cells);
    }

    let mut footer = vec!["Total".to_string()];
    footer.extend(
        report
            .summary
            .column_totals
            .values()
            .map(|value| format_amount(*value, currency)),
    );
    footer.push(format_amount(report.summary.grand_total, currency));
    out.footer(footer)
}
