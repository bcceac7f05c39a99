//! Standard cost variance engine.

use std::sync::Arc;

use tracing::{debug, warn};

use super::adjustment::build_adjustment;
use super::normalize::{add, sub, sum};
use super::production::{build_production_rows, work_in_process};
use super::summary::build_summary;
use super::types::{
    ActualCostRow, ActualCostSummary, AdjustmentTables, CostElementCatalog, CostInputs,
    CostReport, ElementAmounts, InventoryStage, ProductionStage, ProductionTables,
    RawCostInputs, ReportFlags, UnitStats,
};
use super::variance::build_variance;

/// Engine computing cost reports for a fixed cost-element catalog.
///
/// Holds no mutable state: the same inputs always produce the same report.
#[derive(Debug, Clone)]
pub struct CostingEngine {
    catalog: Arc<CostElementCatalog>,
}

impl CostingEngine {
    /// Creates an engine over `catalog`.
    #[must_use]
    pub fn new(catalog: impl Into<Arc<CostElementCatalog>>) -> Self {
        Self {
            catalog: catalog.into(),
        }
    }

    /// The catalog every report is laid out by.
    #[must_use]
    pub fn catalog(&self) -> &CostElementCatalog {
        &self.catalog
    }

    /// Normalizes raw field values, then computes the report.
    #[must_use]
    pub fn compute_raw(&self, raw: &RawCostInputs) -> CostReport {
        self.compute(&CostInputs::from_raw(&self.catalog, raw))
    }

    /// Derives every table and total from one input snapshot.
    #[must_use]
    pub fn compute(&self, inputs: &CostInputs) -> CostReport {
        let catalog = self.catalog.as_ref();
        let units = inputs.units;
        debug!(
            elements = catalog.len(),
            started = %units.started,
            finished = %units.finished,
            sold = %units.sold,
            "computing cost report"
        );

        let unit_costs: ElementAmounts = catalog
            .ids()
            .map(|id| (id, inputs.element(id).unit_cost))
            .collect();
        let actual_costs: ElementAmounts = catalog
            .ids()
            .map(|id| (id, inputs.element(id).actual_cost))
            .collect();

        let wip = work_in_process(&units);
        if wip.exceeds_production {
            warn!(
                started = %units.started,
                finished = %units.finished,
                "finished units exceed units started; work in process set to zero"
            );
        }

        let production_tables = ProductionTables {
            finished: build_production_rows(
                ProductionStage::Finished,
                units.finished,
                catalog,
                &unit_costs,
            ),
            in_process: build_production_rows(
                ProductionStage::InProcess,
                wip.units,
                catalog,
                &unit_costs,
            ),
            sold: build_production_rows(ProductionStage::Sold, units.sold, catalog, &unit_costs),
        };

        let estimated_totals: ElementAmounts = catalog
            .ids()
            .map(|id| {
                let total = add(
                    production_tables.finished.total_for(id),
                    production_tables.in_process.total_for(id),
                );
                (id, total)
            })
            .collect();

        let variance = build_variance(catalog, &estimated_totals, &actual_costs, &unit_costs);
        let corrected_unit_costs = variance.corrected_unit_costs();

        let adjustment_tables = AdjustmentTables {
            finished_inventory: build_adjustment(
                InventoryStage::FinishedInventory,
                sub(units.finished, units.sold),
                catalog,
                &unit_costs,
                &corrected_unit_costs,
            ),
            in_process: build_adjustment(
                InventoryStage::InProcess,
                wip.units,
                catalog,
                &unit_costs,
                &corrected_unit_costs,
            ),
            sold: build_adjustment(
                InventoryStage::Sold,
                units.sold,
                catalog,
                &unit_costs,
                &corrected_unit_costs,
            ),
        };

        let summary = build_summary(&[
            adjustment_tables.finished_inventory.stage_adjustments(),
            adjustment_tables.in_process.stage_adjustments(),
            adjustment_tables.sold.stage_adjustments(),
        ]);

        let actual_rows: Vec<ActualCostRow> = catalog
            .iter()
            .map(|element| ActualCostRow {
                element: element.id,
                label: element.label.clone(),
                amount: actual_costs.get(&element.id).copied().unwrap_or_default(),
            })
            .collect();
        let actual_cost_summary = ActualCostSummary {
            total: sum(actual_rows.iter().map(|row| row.amount)),
            rows: actual_rows,
        };

        CostReport {
            period: inputs.period.clone(),
            actual_cost_summary,
            production_tables,
            variance_rows: variance.variance_rows,
            coefficient_rows: variance.coefficient_rows,
            adjustment_tables,
            summary,
            totals: variance.totals,
            flags: ReportFlags {
                exceeds_production: wip.exceeds_production,
            },
            unit_stats: UnitStats {
                started: units.started,
                finished: units.finished,
                in_process: wip.units,
                sold: units.sold,
            },
        }
    }
}

impl Default for CostingEngine {
    fn default() -> Self {
        Self::new(CostElementCatalog::standard())
    }
}
