//! Standard cost variance: estimated vs actual unit costs, correction
//! coefficients and inventory adjustments.

pub mod adjustment;
pub mod engine;
pub mod error;
pub mod format;
pub mod normalize;
pub mod production;
pub mod summary;
pub mod types;
pub mod variance;


pub use adjustment::build_adjustment;
pub use engine::CostingEngine;
pub use error::CostingError;
pub use normalize::{RawNumber, normalize};
pub use production::{build_production_rows, work_in_process};
pub use summary::build_summary;
pub use types::{
    ActualCostRow, ActualCostSummary, AdjustmentRow, AdjustmentSummary, AdjustmentTable,
    AdjustmentTables, AdjustmentTotals, CoefficientRow, CostElement, CostElementCatalog,
    CostElementId, CostInputs, CostReport, ElementAmounts, ElementCosts, InventoryStage,
    ProductionRow, ProductionStage, ProductionTable, ProductionTables, ProductionUnits,
    RawCostInputs, ReportFlags, StageAdjustments, SummaryRow, UnitStats, VarianceResult,
    VarianceRow, VarianceStatus, VarianceTotals, WorkInProcess,
};
pub use variance::build_variance;
