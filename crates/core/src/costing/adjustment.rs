//! Inventory adjustments from estimated to corrected unit costs.

use rust_decimal::Decimal;

use super::normalize::{mul, sub, sum};
use super::types::{
    AdjustmentRow, AdjustmentTable, AdjustmentTotals, CostElementCatalog, ElementAmounts,
    InventoryStage,
};

/// Revalues `stage_units` at corrected unit costs.
///
/// `stage_units` is used as given; finished inventory may be negative when
/// more units were sold than finished.
#[must_use]
pub fn build_adjustment(
    stage: InventoryStage,
    stage_units: Decimal,
    catalog: &CostElementCatalog,
    estimated_unit_costs: &ElementAmounts,
    corrected_unit_costs: &ElementAmounts,
) -> AdjustmentTable {
    let rows: Vec<AdjustmentRow> = catalog
        .iter()
        .map(|element| {
            let estimated_unit_cost = estimated_unit_costs
                .get(&element.id)
                .copied()
                .unwrap_or_default();
            let corrected_unit_cost = corrected_unit_costs
                .get(&element.id)
                .copied()
                .unwrap_or_default();
            let estimated_total = mul(stage_units, estimated_unit_cost);
            let corrected_total = mul(stage_units, corrected_unit_cost);

            AdjustmentRow {
                element: element.id,
                label: element.label.clone(),
                units: stage_units,
                estimated_unit_cost,
                corrected_unit_cost,
                estimated_total,
                corrected_total,
                adjustment: sub(corrected_total, estimated_total),
            }
        })
        .collect();

    let totals = AdjustmentTotals {
        estimated: sum(rows.iter().map(|row| row.estimated_total)),
        corrected: sum(rows.iter().map(|row| row.corrected_total)),
        adjustment: sum(rows.iter().map(|row| row.adjustment)),
    };
    let adjustments = rows.iter().map(|row| (row.element, row.adjustment)).collect();

    AdjustmentTable {
        stage,
        units: stage_units,
        rows,
        adjustments,
        totals,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn amounts(catalog: &CostElementCatalog, values: [Decimal; 3]) -> ElementAmounts {
        catalog.ids().zip(values).collect()
    }

    #[test]
    fn test_adjustment_is_corrected_minus_estimated() {
        let catalog = CostElementCatalog::standard();
        let table = build_adjustment(
            InventoryStage::FinishedInventory,
            dec!(20),
            &catalog,
            &amounts(&catalog, [dec!(2), dec!(3), dec!(1)]),
            &amounts(&catalog, [dec!(1.75), dec!(3.5), dec!(1)]),
        );

        let adjustments: Vec<Decimal> = table.rows.iter().map(|r| r.adjustment).collect();
        assert_eq!(adjustments, vec![dec!(-5), dec!(10), dec!(0)]);
        assert_eq!(table.rows[0].estimated_total, dec!(40));
        assert_eq!(table.rows[0].corrected_total, dec!(35));
        assert_eq!(table.totals.estimated, dec!(120));
        assert_eq!(table.totals.corrected, dec!(125));
        assert_eq!(table.totals.adjustment, dec!(5));
        assert_eq!(table.adjustments.values().copied().collect::<Vec<_>>(), adjustments);
    }

    #[test]
    fn test_negative_units_are_not_clamped() {
        let catalog = CostElementCatalog::standard();
        let table = build_adjustment(
            InventoryStage::FinishedInventory,
            dec!(-10),
            &catalog,
            &amounts(&catalog, [dec!(2), dec!(0), dec!(0)]),
            &amounts(&catalog, [dec!(3), dec!(0), dec!(0)]),
        );

        assert_eq!(table.units, dec!(-10));
        assert_eq!(table.rows[0].estimated_total, dec!(-20));
        assert_eq!(table.rows[0].corrected_total, dec!(-30));
        assert_eq!(table.totals.adjustment, dec!(-10));
    }

    #[test]
    fn test_zero_units_give_zero_adjustment() {
        let catalog = CostElementCatalog::standard();
        let table = build_adjustment(
            InventoryStage::InProcess,
            dec!(0),
            &catalog,
            &amounts(&catalog, [dec!(2), dec!(3), dec!(1)]),
            &amounts(&catalog, [dec!(9), dec!(9), dec!(9)]),
        );

        assert_eq!(table.totals, AdjustmentTotals::default());
    }

    #[test]
    fn test_stage_adjustments_carry_stage_label() {
        let catalog = CostElementCatalog::standard();
        let table = build_adjustment(
            InventoryStage::Sold,
            dec!(1),
            &catalog,
            &amounts(&catalog, [dec!(1), dec!(1), dec!(1)]),
            &amounts(&catalog, [dec!(2), dec!(2), dec!(2)]),
        );

        let stage = table.stage_adjustments();
        assert_eq!(stage.label, "Ajuste del costo de la producción vendida");
        assert_eq!(stage.adjustments, table.adjustments);
    }
}
