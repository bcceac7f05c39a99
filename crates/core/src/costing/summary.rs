//! Cross-stage adjustment summary.

use std::collections::BTreeSet;

use super::normalize::sum;
use super::types::{
    AdjustmentSummary, CostElementId, ElementAmounts, StageAdjustments, SummaryRow,
};

/// Pivots stage adjustments into rows with per-element column totals.
///
/// Columns are the union of the elements present in any row. An element a
/// row does not mention counts as zero in that row.
#[must_use]
pub fn build_summary(stages: &[StageAdjustments]) -> AdjustmentSummary {
    let elements: BTreeSet<CostElementId> = stages
        .iter()
        .flat_map(|stage| stage.adjustments.keys().copied())
        .collect();
    let column_totals: ElementAmounts = elements
        .into_iter()
        .map(|element| {
            let column = stages
                .iter()
                .map(|stage| stage.adjustments.get(&element).copied().unwrap_or_default());
            (element, sum(column))
        })
        .collect();

    let rows: Vec<SummaryRow> = stages
        .iter()
        .map(|stage| {
            let adjustments: ElementAmounts = column_totals
                .keys()
                .map(|element| {
                    let amount = stage.adjustments.get(element).copied().unwrap_or_default();
                    (*element, amount)
                })
                .collect();
            SummaryRow {
                label: stage.label.clone(),
                total: sum(adjustments.values().copied()),
                adjustments,
            }
        })
        .collect();

    let grand_total = sum(rows.iter().flat_map(|row| row.adjustments.values().copied()));

    AdjustmentSummary {
        rows,
        column_totals,
        grand_total,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::costing::types::CostElementCatalog;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn stage(label: &str, catalog: &CostElementCatalog, values: [Decimal; 3]) -> StageAdjustments {
        StageAdjustments {
            label: label.to_string(),
            adjustments: catalog.ids().zip(values).collect(),
        }
    }

    #[test]
    fn test_empty_summary() {
        let summary = build_summary(&[]);

        assert!(summary.rows.is_empty());
        assert!(summary.column_totals.is_empty());
        assert!(summary.row_totals().is_empty());
        assert_eq!(summary.grand_total, Decimal::ZERO);
    }

    #[test]
    fn test_rows_columns_and_grand_total() {
        let catalog = CostElementCatalog::standard();
        let summary = build_summary(&[
            stage("terminada", &catalog, [dec!(-5), dec!(10), dec!(0)]),
            stage("proceso", &catalog, [dec!(-2.5), dec!(-1), dec!(3)]),
            stage("vendida", &catalog, [dec!(1), dec!(1), dec!(1)]),
        ]);

        assert_eq!(summary.row_totals(), vec![dec!(5), dec!(-0.5), dec!(3)]);
        assert_eq!(
            summary.column_totals.values().copied().collect::<Vec<_>>(),
            vec![dec!(-6.5), dec!(10), dec!(4)]
        );
        assert_eq!(summary.grand_total, dec!(7.5));
        assert_eq!(summary.rows[1].label, "proceso");
    }

    #[test]
    fn test_missing_element_counts_as_zero() {
        let catalog = CostElementCatalog::standard();
        let mp = catalog.find("MP").unwrap().id;
        let gf = catalog.find("GF").unwrap().id;
        let summary = build_summary(&[
            StageAdjustments {
                label: "a".to_string(),
                adjustments: [(mp, dec!(2))].into_iter().collect(),
            },
            StageAdjustments {
                label: "b".to_string(),
                adjustments: [(gf, dec!(3))].into_iter().collect(),
            },
        ]);

        assert_eq!(summary.column_totals.len(), 2);
        assert_eq!(summary.rows[0].adjustments[&gf], dec!(0));
        assert_eq!(summary.rows[1].adjustments[&mp], dec!(0));
        assert_eq!(summary.grand_total, dec!(5));
    }

    #[test]
    fn test_overflowing_column_total_is_zero() {
        let catalog = CostElementCatalog::standard();
        let summary = build_summary(&[
            stage("a", &catalog, [Decimal::MAX, dec!(1), dec!(0)]),
            stage("b", &catalog, [Decimal::MAX, dec!(1), dec!(0)]),
            stage("c", &catalog, [dec!(5), dec!(1), dec!(0)]),
        ]);

        assert_eq!(
            summary.column_totals.values().copied().collect::<Vec<_>>(),
            vec![dec!(0), dec!(3), dec!(0)]
        );
        assert_eq!(summary.grand_total, dec!(0));
    }
}
