//! Estimated vs actual variance, correction coefficients and rectified
//! unit costs.

use rust_decimal::Decimal;

use super::normalize::{add, mul, ratio, sub, sum};
use super::types::{
    CoefficientRow, CostElementCatalog, CostElementId, ElementAmounts, VarianceResult, VarianceRow,
    VarianceStatus, VarianceTotals,
};

/// Compares estimated and actual totals element by element.
///
/// `estimated_totals` is the finished plus in-process valuation; goods sold
/// are not part of the comparison. The coefficient is
/// `variance / estimated_total` and is exactly zero when the estimate is
/// zero.
#[must_use]
pub fn build_variance(
    catalog: &CostElementCatalog,
    estimated_totals: &ElementAmounts,
    actual_totals: &ElementAmounts,
    unit_costs: &ElementAmounts,
) -> VarianceResult {
    let amount = |values: &ElementAmounts, id: CostElementId| -> Decimal {
        values.get(&id).copied().unwrap_or_default()
    };

    let mut variance_rows = Vec::with_capacity(catalog.len());
    let mut coefficient_rows = Vec::with_capacity(catalog.len());

    for element in catalog.iter() {
        let estimated = amount(estimated_totals, element.id);
        let actual = amount(actual_totals, element.id);
        let unit_cost = amount(unit_costs, element.id);

        let variance = sub(actual, estimated);
        let coefficient = ratio(variance, estimated);
        let correction_amount = mul(unit_cost, coefficient);

        variance_rows.push(VarianceRow {
            element: element.id,
            label: element.label.clone(),
            estimated_total: estimated,
            actual_total: actual,
            variance,
            status: VarianceStatus::from_amount(variance),
        });
        coefficient_rows.push(CoefficientRow {
            element: element.id,
            label: element.label.clone(),
            unit_cost,
            coefficient,
            correction_amount,
            corrected_unit_cost: add(unit_cost, correction_amount),
        });
    }

    let estimated = sum(variance_rows.iter().map(|row| row.estimated_total));
    let real = sum(variance_rows.iter().map(|row| row.actual_total));
    let diff = sum(variance_rows.iter().map(|row| row.variance));

    VarianceResult {
        variance_rows,
        coefficient_rows,
        totals: VarianceTotals {
            estimated,
            real,
            diff,
            status: VarianceStatus::from_amount(diff),
        },
    }
}
