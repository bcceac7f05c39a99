//! Work-in-process derivation and production tables at estimated cost.

use rust_decimal::Decimal;

use super::normalize::{mul, sub, sum};
use super::types::{
    CostElementCatalog, ElementAmounts, ProductionRow, ProductionStage, ProductionTable,
    ProductionUnits, WorkInProcess,
};

/// Units started but not finished.
///
/// Finishing more than was started is inconsistent input: WIP is then zero
/// and `exceeds_production` is raised, but the caller still gets a value.
#[must_use]
pub fn work_in_process(units: &ProductionUnits) -> WorkInProcess {
    let exceeds_production = units.finished > units.started;
    let wip = if exceeds_production {
        Decimal::ZERO
    } else {
        sub(units.started, units.finished).max(Decimal::ZERO)
    };

    WorkInProcess {
        units: wip,
        exceeds_production,
    }
}

/// Values `stage_units` of every element at its estimated unit cost.
///
/// Negative inputs are valued as given; elements without a unit cost are
/// valued at zero.
#[must_use]
pub fn build_production_rows(
    stage: ProductionStage,
    stage_units: Decimal,
    catalog: &CostElementCatalog,
    unit_costs: &ElementAmounts,
) -> ProductionTable {
    let rows: Vec<ProductionRow> = catalog
        .iter()
        .map(|element| {
            let unit_cost = unit_costs.get(&element.id).copied().unwrap_or_default();
            ProductionRow {
                element: element.id,
                label: element.label.clone(),
                units: stage_units,
                unit_cost,
                total: mul(stage_units, unit_cost),
            }
        })
        .collect();
    let total = sum(rows.iter().map(|row| row.total));

    ProductionTable { stage, rows, total }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn units(started: Decimal, finished: Decimal) -> ProductionUnits {
        ProductionUnits {
            started,
            finished,
            sold: Decimal::ZERO,
        }
    }

    fn unit_costs(catalog: &CostElementCatalog, values: [Decimal; 3]) -> ElementAmounts {
        catalog.ids().zip(values).collect()
    }

    #[test]
    fn test_wip_is_started_minus_finished() {
        let wip = work_in_process(&units(dec!(120), dec!(100)));
        assert_eq!(wip.units, dec!(20));
        assert!(!wip.exceeds_production);
    }

    #[test]
    fn test_wip_zero_when_all_finished() {
        let wip = work_in_process(&units(dec!(100), dec!(100)));
        assert_eq!(wip.units, dec!(0));
        assert!(!wip.exceeds_production);
    }

    #[test]
    fn test_wip_flags_finished_above_started() {
        let wip = work_in_process(&units(dec!(100), dec!(150)));
        assert_eq!(wip.units, dec!(0));
        assert!(wip.exceeds_production);
    }

    #[test]
    fn test_wip_clamps_negative_started() {
        let wip = work_in_process(&units(dec!(-5), dec!(-10)));
        assert_eq!(wip.units, dec!(5));

        let wip = work_in_process(&units(dec!(-10), dec!(-10)));
        assert_eq!(wip.units, dec!(0));
    }

    #[test]
    fn test_production_rows_multiply_units_by_unit_cost() {
        let catalog = CostElementCatalog::standard();
        let costs = unit_costs(&catalog, [dec!(2), dec!(3), dec!(1)]);

        let table = build_production_rows(ProductionStage::Finished, dec!(100), &catalog, &costs);

        let totals: Vec<Decimal> = table.rows.iter().map(|r| r.total).collect();
        assert_eq!(totals, vec![dec!(200), dec!(300), dec!(100)]);
        assert_eq!(table.total, dec!(600));
        assert_eq!(table.stage, ProductionStage::Finished);
        assert_eq!(table.rows[1].label, "Mano de obra");
        assert!(table.rows.iter().all(|r| r.units == dec!(100)));
    }

    #[test]
    fn test_production_rows_accept_negative_values() {
        let catalog = CostElementCatalog::standard();
        let costs = unit_costs(&catalog, [dec!(2), dec!(-3), dec!(0)]);

        let table = build_production_rows(ProductionStage::Sold, dec!(-4), &catalog, &costs);

        assert_eq!(table.total, dec!(4));
        assert_eq!(table.total_for(catalog.find("MO").unwrap().id), dec!(12));
    }

    #[test]
    fn test_missing_unit_cost_values_at_zero() {
        let catalog = CostElementCatalog::standard();
        let table = build_production_rows(
            ProductionStage::InProcess,
            dec!(20),
            &catalog,
            &ElementAmounts::new(),
        );

        assert_eq!(table.rows.len(), 3);
        assert_eq!(table.total, dec!(0));
    }
}
