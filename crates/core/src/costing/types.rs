//! Costing data types.

use std::collections::BTreeMap;

use creperia_shared::config::STANDARD_ELEMENTS;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::CostingError;
use super::normalize::{RawNumber, normalize};

/// Per-element amounts keyed by cost element.
pub type ElementAmounts = BTreeMap<CostElementId, Decimal>;

/// Opaque identifier of a cost element.
///
/// Ids are minted by a [`CostElementCatalog`] and order elements the same
/// way the catalog does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct CostElementId(u16);

impl std::fmt::Display for CostElementId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A named cost category (raw material, direct labor, overhead...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CostElement {
    /// Element ID.
    pub id: CostElementId,
    /// Short code used by input snapshots (e.g., "MP").
    pub code: String,
    /// Display label.
    pub label: String,
}

/// Immutable, ordered set of cost elements shared by every computation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CostElementCatalog {
    elements: Vec<CostElement>,
}

impl CostElementCatalog {
    /// Builds a catalog from `(code, label)` pairs, preserving their order.
    ///
    /// # Errors
    ///
    /// Returns `CostingError::EmptyCatalog` for an empty list,
    /// `CostingError::BlankCode` for a blank code and
    /// `CostingError::DuplicateCode` when two codes match ignoring case.
    pub fn new<I, C, L>(entries: I) -> Result<Self, CostingError>
    where
        I: IntoIterator<Item = (C, L)>,
        C: Into<String>,
        L: Into<String>,
    {
        let mut elements: Vec<CostElement> = Vec::new();

        for (code, label) in entries {
            let code = code.into().trim().to_string();
            if code.is_empty() {
                return Err(CostingError::BlankCode);
            }
            if elements
                .iter()
                .any(|existing| existing.code.to_lowercase() == code.to_lowercase())
            {
                return Err(CostingError::DuplicateCode(code));
            }
            let index = u16::try_from(elements.len())
                .map_err(|_| CostingError::TooManyElements(elements.len() + 1))?;
            elements.push(CostElement {
                id: CostElementId(index),
                code,
                label: label.into(),
            });
        }

        if elements.is_empty() {
            return Err(CostingError::EmptyCatalog);
        }

        Ok(Self { elements })
    }

    /// The three elements of the crepe shop: raw material, labor, overhead.
    #[must_use]
    pub fn standard() -> Self {
        let elements = STANDARD_ELEMENTS
            .into_iter()
            .zip(0u16..)
            .map(|((code, label), index)| CostElement {
                id: CostElementId(index),
                code: code.to_string(),
                label: label.to_string(),
            })
            .collect();

        Self { elements }
    }

    /// Number of elements (K).
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Always false: a catalog holds at least one element.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Iterates elements in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &CostElement> {
        self.elements.iter()
    }

    /// Iterates element ids in catalog order.
    pub fn ids(&self) -> impl Iterator<Item = CostElementId> + '_ {
        self.elements.iter().map(|element| element.id)
    }

    /// Looks up an element by id.
    #[must_use]
    pub fn get(&self, id: CostElementId) -> Option<&CostElement> {
        self.elements.get(usize::from(id.0)).filter(|e| e.id == id)
    }

    /// Looks up an element by code, ignoring case and surrounding whitespace.
    #[must_use]
    pub fn find(&self, code: &str) -> Option<&CostElement> {
        let wanted = code.trim().to_lowercase();
        self.elements
            .iter()
            .find(|element| element.code.to_lowercase() == wanted)
    }

    /// Label for `id`, or an empty string for ids from another catalog.
    #[must_use]
    pub fn label(&self, id: CostElementId) -> &str {
        self.get(id).map_or("", |element| element.label.as_str())
    }
}

/// Standard and actual cost of one element.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementCosts {
    /// Estimated (standard) cost per unit.
    pub unit_cost: Decimal,
    /// Actual total cost incurred in the period.
    pub actual_cost: Decimal,
}

/// Units moving through production in the period.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductionUnits {
    /// Units put into production.
    pub started: Decimal,
    /// Units finished.
    pub finished: Decimal,
    /// Units sold.
    pub sold: Decimal,
}

/// Normalized snapshot consumed by one computation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CostInputs {
    /// Per-element costs. Missing elements count as zero.
    pub elements: BTreeMap<CostElementId, ElementCosts>,
    /// Production quantities.
    pub units: ProductionUnits,
    /// Month the report covers, as typed by the user.
    pub period: Option<String>,
}

impl CostInputs {
    /// Creates inputs with the given quantities and no element costs.
    #[must_use]
    pub fn new(units: ProductionUnits) -> Self {
        Self {
            elements: BTreeMap::new(),
            units,
            period: None,
        }
    }

    /// Sets the costs of one element.
    #[must_use]
    pub fn with_element(mut self, id: CostElementId, unit_cost: Decimal, actual_cost: Decimal) -> Self {
        self.elements.insert(
            id,
            ElementCosts {
                unit_cost,
                actual_cost,
            },
        );
        self
    }

    /// Sets the period name.
    #[must_use]
    pub fn with_period(mut self, period: impl Into<String>) -> Self {
        self.period = Some(period.into());
        self
    }

    /// Costs of `id`, zero when absent.
    #[must_use]
    pub fn element(&self, id: CostElementId) -> ElementCosts {
        self.elements.get(&id).copied().unwrap_or_default()
    }

    /// Normalizes a raw snapshot against `catalog`.
    ///
    /// Every scalar goes through [`normalize`]; codes that the catalog does
    /// not know are skipped.
    #[must_use]
    pub fn from_raw(catalog: &CostElementCatalog, raw: &RawCostInputs) -> Self {
        let mut elements = BTreeMap::new();

        for element in catalog.iter() {
            let unit_cost = lookup(&raw.unit_costs, &element.code);
            let actual_cost = lookup(&raw.actual_costs, &element.code);
            elements.insert(
                element.id,
                ElementCosts {
                    unit_cost,
                    actual_cost,
                },
            );
        }

        for code in raw.unit_costs.keys().chain(raw.actual_costs.keys()) {
            if catalog.find(code).is_none() {
                tracing::debug!(code = %code, "ignoring unknown cost element");
            }
        }

        Self {
            elements,
            units: ProductionUnits {
                started: normalize(&raw.units_started),
                finished: normalize(&raw.units_finished),
                sold: normalize(&raw.units_sold),
            },
            period: raw
                .period
                .as_deref()
                .map(str::trim)
                .filter(|p| !p.is_empty())
                .map(ToString::to_string),
        }
    }
}

fn lookup(values: &BTreeMap<String, RawNumber>, code: &str) -> Decimal {
    values
        .iter()
        .find(|(key, _)| key.trim().to_lowercase() == code.to_lowercase())
        .map_or(Decimal::ZERO, |(_, raw)| normalize(raw))
}

/// Raw field values as read from the cost form, keyed by element code.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawCostInputs {
    /// Estimated unit cost per element code.
    #[serde(default)]
    pub unit_costs: BTreeMap<String, RawNumber>,
    /// Actual monthly cost per element code.
    #[serde(default)]
    pub actual_costs: BTreeMap<String, RawNumber>,
    /// Units started.
    #[serde(default)]
    pub units_started: RawNumber,
    /// Units finished.
    #[serde(default)]
    pub units_finished: RawNumber,
    /// Units sold.
    #[serde(default)]
    pub units_sold: RawNumber,
    /// Month name.
    #[serde(default)]
    pub period: Option<String>,
}

/// Production stage valued at estimated unit cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductionStage {
    /// Finished goods.
    Finished,
    /// Work in process.
    InProcess,
    /// Goods sold.
    Sold,
}

impl ProductionStage {
    /// Display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Finished => "Producción terminada",
            Self::InProcess => "Producción en proceso",
            Self::Sold => "Producción vendida",
        }
    }
}

/// Inventory stage receiving a cost adjustment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InventoryStage {
    /// Finished goods still in stock (finished minus sold).
    FinishedInventory,
    /// Work in process.
    InProcess,
    /// Goods sold.
    Sold,
}

impl InventoryStage {
    /// Display label, used as the row name in the adjustment summary.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::FinishedInventory => "Ajuste del costo de existencia de la producción terminada",
            Self::InProcess => "Ajuste del costo de la producción en proceso",
            Self::Sold => "Ajuste del costo de la producción vendida",
        }
    }
}

/// One cost element of a production table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductionRow {
    /// Element ID.
    pub element: CostElementId,
    /// Element label.
    pub label: String,
    /// Units in the stage.
    pub units: Decimal,
    /// Estimated unit cost.
    pub unit_cost: Decimal,
    /// `units * unit_cost`.
    pub total: Decimal,
}

/// Production stage valued at estimated cost.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductionTable {
    /// Stage.
    pub stage: ProductionStage,
    /// One row per element, in catalog order.
    pub rows: Vec<ProductionRow>,
    /// Sum of row totals.
    pub total: Decimal,
}

impl ProductionTable {
    /// Row total for `id`, zero when absent.
    #[must_use]
    pub fn total_for(&self, id: CostElementId) -> Decimal {
        self.rows
            .iter()
            .find(|row| row.element == id)
            .map_or(Decimal::ZERO, |row| row.total)
    }
}

/// Work-in-process units and the consistency flag that goes with them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WorkInProcess {
    /// Units started but not finished; zero when flagged.
    pub units: Decimal,
    /// More units finished than started.
    pub exceeds_production: bool,
}

/// Sign of a variance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VarianceStatus {
    /// Actual below estimate.
    Favorable,
    /// Actual above estimate.
    Unfavorable,
    /// Actual equals estimate.
    NoVariation,
}

impl VarianceStatus {
    /// Classifies `actual - estimated`. Exact zero only, no tolerance.
    #[must_use]
    pub fn from_amount(variance: Decimal) -> Self {
        match variance.cmp(&Decimal::ZERO) {
            std::cmp::Ordering::Less => Self::Favorable,
            std::cmp::Ordering::Greater => Self::Unfavorable,
            std::cmp::Ordering::Equal => Self::NoVariation,
        }
    }

    /// Display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Favorable => "Favorable",
            Self::Unfavorable => "Desfavorable",
            Self::NoVariation => "Sin variación",
        }
    }
}

/// Estimated vs actual comparison for one element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VarianceRow {
    /// Element ID.
    pub element: CostElementId,
    /// Element label.
    pub label: String,
    /// Finished plus in-process cost at standard.
    pub estimated_total: Decimal,
    /// Actual cost of the period.
    pub actual_total: Decimal,
    /// `actual_total - estimated_total`.
    pub variance: Decimal,
    /// Variance status.
    pub status: VarianceStatus,
}

/// Correction coefficient and rectified unit cost for one element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CoefficientRow {
    /// Element ID.
    pub element: CostElementId,
    /// Element label.
    pub label: String,
    /// Estimated unit cost.
    pub unit_cost: Decimal,
    /// `variance / estimated_total`, zero when the estimate is zero.
    pub coefficient: Decimal,
    /// `unit_cost * coefficient`.
    pub correction_amount: Decimal,
    /// `unit_cost + correction_amount`.
    pub corrected_unit_cost: Decimal,
}

/// Variance totals across all elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VarianceTotals {
    /// Sum of estimated totals.
    pub estimated: Decimal,
    /// Sum of actual totals.
    pub real: Decimal,
    /// Sum of variances.
    pub diff: Decimal,
    /// Status of `diff`.
    pub status: VarianceStatus,
}

/// Output of the variance and correction step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VarianceResult {
    /// One row per element.
    pub variance_rows: Vec<VarianceRow>,
    /// One row per element.
    pub coefficient_rows: Vec<CoefficientRow>,
    /// Totals.
    pub totals: VarianceTotals,
}

impl VarianceResult {
    /// Corrected unit cost per element.
    #[must_use]
    pub fn corrected_unit_costs(&self) -> ElementAmounts {
        self.coefficient_rows
            .iter()
            .map(|row| (row.element, row.corrected_unit_cost))
            .collect()
    }
}

/// Estimated vs corrected valuation of one element in one stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdjustmentRow {
    /// Element ID.
    pub element: CostElementId,
    /// Element label.
    pub label: String,
    /// Units in the stage.
    pub units: Decimal,
    /// Estimated unit cost.
    pub estimated_unit_cost: Decimal,
    /// Corrected unit cost.
    pub corrected_unit_cost: Decimal,
    /// `units * estimated_unit_cost`.
    pub estimated_total: Decimal,
    /// `units * corrected_unit_cost`.
    pub corrected_total: Decimal,
    /// `corrected_total - estimated_total`.
    pub adjustment: Decimal,
}

/// Totals of an adjustment table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct AdjustmentTotals {
    /// Sum of estimated totals.
    pub estimated: Decimal,
    /// Sum of corrected totals.
    pub corrected: Decimal,
    /// Sum of adjustments.
    pub adjustment: Decimal,
}

/// Inventory adjustment for one stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdjustmentTable {
    /// Stage.
    pub stage: InventoryStage,
    /// Units valued, possibly negative for finished inventory.
    pub units: Decimal,
    /// One row per element.
    pub rows: Vec<AdjustmentRow>,
    /// Adjustment per element.
    pub adjustments: ElementAmounts,
    /// Totals.
    pub totals: AdjustmentTotals,
}

impl AdjustmentTable {
    /// Summary input row for this stage.
    #[must_use]
    pub fn stage_adjustments(&self) -> StageAdjustments {
        StageAdjustments {
            label: self.stage.label().to_string(),
            adjustments: self.adjustments.clone(),
        }
    }
}

/// Input row of the adjustment summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StageAdjustments {
    /// Row label.
    pub label: String,
    /// Adjustment per element.
    pub adjustments: ElementAmounts,
}

/// Output row of the adjustment summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryRow {
    /// Row label.
    pub label: String,
    /// Adjustment per element.
    pub adjustments: ElementAmounts,
    /// Sum of the row.
    pub total: Decimal,
}

/// Stages × elements pivot of adjustments.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AdjustmentSummary {
    /// One row per stage, in input order.
    pub rows: Vec<SummaryRow>,
    /// Per-element sums across rows.
    pub column_totals: ElementAmounts,
    /// Sum of all row totals.
    pub grand_total: Decimal,
}

impl AdjustmentSummary {
    /// Row totals in row order.
    #[must_use]
    pub fn row_totals(&self) -> Vec<Decimal> {
        self.rows.iter().map(|row| row.total).collect()
    }
}

/// Actual monthly cost of one element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActualCostRow {
    /// Element ID.
    pub element: CostElementId,
    /// Element label.
    pub label: String,
    /// Actual cost.
    pub amount: Decimal,
}

/// Actual costs of the month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActualCostSummary {
    /// One row per element.
    pub rows: Vec<ActualCostRow>,
    /// Sum of all rows.
    pub total: Decimal,
}

/// Unit counts shown under the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct UnitStats {
    /// Units started.
    pub started: Decimal,
    /// Units finished.
    pub finished: Decimal,
    /// Units in process.
    pub in_process: Decimal,
    /// Units sold.
    pub sold: Decimal,
}

/// The three production tables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductionTables {
    /// Finished goods.
    pub finished: ProductionTable,
    /// Work in process.
    pub in_process: ProductionTable,
    /// Goods sold.
    pub sold: ProductionTable,
}

/// The three adjustment tables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdjustmentTables {
    /// Finished goods still in stock.
    pub finished_inventory: AdjustmentTable,
    /// Work in process.
    pub in_process: AdjustmentTable,
    /// Goods sold.
    pub sold: AdjustmentTable,
}

/// Advisory flags. None of them stops the computation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ReportFlags {
    /// Finished units exceed started units.
    pub exceeds_production: bool,
}

/// Fully derived cost report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CostReport {
    /// Month the report covers.
    pub period: Option<String>,
    /// Actual costs of the month.
    pub actual_cost_summary: ActualCostSummary,
    /// Production valued at estimated cost.
    pub production_tables: ProductionTables,
    /// Estimated vs actual per element.
    pub variance_rows: Vec<VarianceRow>,
    /// Coefficients and corrected unit costs.
    pub coefficient_rows: Vec<CoefficientRow>,
    /// Inventory adjustments per stage.
    pub adjustment_tables: AdjustmentTables,
    /// Adjustment pivot.
    pub summary: AdjustmentSummary,
    /// Variance totals.
    pub totals: VarianceTotals,
    /// Advisory flags.
    pub flags: ReportFlags,
    /// Unit counts.
    pub unit_stats: UnitStats,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_standard_catalog_order() {
        let catalog = CostElementCatalog::standard();
        let codes: Vec<&str> = catalog.iter().map(|e| e.code.as_str()).collect();

        assert_eq!(codes, vec!["MP", "MO", "GF"]);
        assert_eq!(catalog.len(), 3);
        assert!(!catalog.is_empty());
    }

    #[test]
    fn test_default_config_builds_standard_catalog() {
        let pairs = creperia_shared::config::ReportConfig::default().element_pairs();
        let catalog = CostElementCatalog::new(pairs).unwrap();

        assert_eq!(catalog, CostElementCatalog::standard());
    }

    #[test]
    fn test_catalog_matches_standard_when_built_from_pairs() {
        let catalog = CostElementCatalog::new([
            ("MP", "Materia prima"),
            ("MO", "Mano de obra"),
            ("GF", "Gastos de fabricación"),
        ])
        .unwrap();

        assert_eq!(catalog, CostElementCatalog::standard());
    }

    #[test]
    fn test_catalog_rejects_empty() {
        let result = CostElementCatalog::new(Vec::<(String, String)>::new());
        assert_eq!(result, Err(CostingError::EmptyCatalog));
    }

    #[test]
    fn test_catalog_rejects_blank_code() {
        let result = CostElementCatalog::new([("MP", "Materia prima"), ("  ", "Nada")]);
        assert_eq!(result, Err(CostingError::BlankCode));
    }

    #[test]
    fn test_catalog_rejects_duplicate_code_ignoring_case() {
        let result = CostElementCatalog::new([("MP", "Materia prima"), ("mp", "Otra")]);
        assert_eq!(result, Err(CostingError::DuplicateCode("mp".to_string())));
    }

    #[test]
    fn test_catalog_supports_single_element() {
        let catalog = CostElementCatalog::new([("X", "Único")]).unwrap();
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_catalog_find_and_get() {
        let catalog = CostElementCatalog::standard();
        let labor = catalog.find(" mo ").unwrap();

        assert_eq!(labor.label, "Mano de obra");
        assert_eq!(catalog.get(labor.id), Some(labor));
        assert_eq!(catalog.label(labor.id), "Mano de obra");
        assert!(catalog.find("XX").is_none());
    }

    #[test]
    fn test_foreign_id_is_not_resolved() {
        let big = CostElementCatalog::new([("A", "a"), ("B", "b"), ("C", "c"), ("D", "d")]).unwrap();
        let last = big.find("D").unwrap().id;

        assert!(CostElementCatalog::standard().get(last).is_none());
        assert_eq!(CostElementCatalog::standard().label(last), "");
    }

    #[test]
    fn test_variance_status_from_amount() {
        assert_eq!(VarianceStatus::from_amount(dec!(-0.01)), VarianceStatus::Favorable);
        assert_eq!(VarianceStatus::from_amount(dec!(0.01)), VarianceStatus::Unfavorable);
        assert_eq!(VarianceStatus::from_amount(dec!(0)), VarianceStatus::NoVariation);
        assert_eq!(VarianceStatus::from_amount(dec!(-0.00)), VarianceStatus::NoVariation);
    }

    #[test]
    fn test_inputs_missing_element_is_zero() {
        let catalog = CostElementCatalog::standard();
        let mp = catalog.find("MP").unwrap().id;
        let gf = catalog.find("GF").unwrap().id;
        let inputs = CostInputs::new(ProductionUnits::default()).with_element(mp, dec!(2), dec!(210));

        assert_eq!(inputs.element(mp).unit_cost, dec!(2));
        assert_eq!(inputs.element(gf), ElementCosts::default());
    }

    #[test]
    fn test_inputs_from_raw_normalizes_every_field() {
        let catalog = CostElementCatalog::standard();
        let raw: RawCostInputs = serde_json::from_value(serde_json::json!({
            "unit_costs": { "mp": "2.5", "MO": 3, "GF": "abc", "XX": 9 },
            "actual_costs": { "MP": null, "MO": "330" },
            "units_started": "120",
            "units_finished": 100,
            "period": "  enero "
        }))
        .unwrap();

        let inputs = CostInputs::from_raw(&catalog, &raw);
        let id = |code: &str| catalog.find(code).unwrap().id;

        assert_eq!(inputs.element(id("MP")).unit_cost, dec!(2.5));
        assert_eq!(inputs.element(id("MO")).unit_cost, dec!(3));
        assert_eq!(inputs.element(id("GF")).unit_cost, dec!(0));
        assert_eq!(inputs.element(id("MP")).actual_cost, dec!(0));
        assert_eq!(inputs.element(id("MO")).actual_cost, dec!(330));
        assert_eq!(inputs.element(id("GF")).actual_cost, dec!(0));
        assert_eq!(inputs.units.started, dec!(120));
        assert_eq!(inputs.units.finished, dec!(100));
        assert_eq!(inputs.units.sold, dec!(0));
        assert_eq!(inputs.period.as_deref(), Some("enero"));
        assert_eq!(inputs.elements.len(), 3);
    }

    #[test]
    fn test_blank_period_is_dropped() {
        let raw = RawCostInputs {
            period: Some("   ".to_string()),
            ..RawCostInputs::default()
        };
        let inputs = CostInputs::from_raw(&CostElementCatalog::standard(), &raw);
        assert_eq!(inputs.period, None);
    }
}
