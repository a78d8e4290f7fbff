//! Compound-growth projection for recurring contributions.
//!
//! Models a lump sum plus monthly deposits compounding at a fixed annual
//! return. The contributed-to-date series is a pure running sum and is never
//! touched by the return rate, so callers can chart value against cost basis.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::error::InvestCalcError;
use crate::rates::{self, MONTHS_PER_YEAR};
use crate::types::{with_metadata, ComputationOutput, Money, Percent};
use crate::InvestCalcResult;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Input parameters for a growth projection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GrowthInput {
    /// Starting lump sum. Zero is valid.
    pub initial_amount: Money,
    /// Deposit added at the end of each month. Zero is valid.
    pub monthly_contribution: Money,
    /// Assumed annual return as a percentage. Negative markets are valid.
    pub annual_return_pct: Percent,
    /// Projection horizon in whole years.
    pub horizon_years: u32,
}

/// One month of the projection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectionPoint {
    /// Month number (1-indexed).
    pub month: u32,
    /// Initial amount plus contributions to date; independent of returns.
    pub contributed: Money,
    /// Projected portfolio value at the end of the month.
    pub value: Money,
}

/// The computed monthly sequence with sampling views.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GrowthProjection {
    pub points: Vec<ProjectionPoint>,
}

impl GrowthProjection {
    /// Full monthly granularity.
    pub fn monthly(&self) -> &[ProjectionPoint] {
        &self.points
    }

    /// Year-aligned samples: every 12th month plus the final point. A view
    /// over the already-computed sequence; nothing is recomputed.
    pub fn yearly(&self) -> Vec<&ProjectionPoint> {
        let last = self.points.len();
        self.points
            .iter()
            .enumerate()
            .filter(|(i, p)| p.month % MONTHS_PER_YEAR == 0 || i + 1 == last)
            .map(|(_, p)| p)
            .collect()
    }

    /// The last point of the projection, if any.
    pub fn final_point(&self) -> Option<&ProjectionPoint> {
        self.points.last()
    }
}

/// Derived totals for the projection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GrowthSummary {
    pub final_value: Money,
    pub total_contributed: Money,
    /// Final value minus contributions; negative when returns are negative.
    pub total_growth: Money,
}

/// Full projection result: the sequence plus its summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GrowthOutput {
    pub projection: GrowthProjection,
    pub summary: GrowthSummary,
}

// ---------------------------------------------------------------------------
// Core function
// ---------------------------------------------------------------------------

/// Project compound growth of a lump sum plus monthly contributions.
pub fn build_growth_projection(
    input: &GrowthInput,
) -> InvestCalcResult<ComputationOutput<GrowthOutput>> {
    let start = Instant::now();
    let warnings: Vec<String> = Vec::new();

    // --- Validation ---
    if input.initial_amount < Decimal::ZERO {
        return Err(InvestCalcError::InvalidInput {
            field: "initial_amount".into(),
            reason: "initial amount cannot be negative".into(),
        });
    }
    if input.monthly_contribution < Decimal::ZERO {
        return Err(InvestCalcError::InvalidInput {
            field: "monthly_contribution".into(),
            reason: "monthly contribution cannot be negative".into(),
        });
    }
    if input.horizon_years == 0 {
        return Err(InvestCalcError::InvalidInput {
            field: "horizon_years".into(),
            reason: "horizon must be at least 1 year".into(),
        });
    }

    let n = input.horizon_years * MONTHS_PER_YEAR;
    let monthly_rate = rates::monthly_rate_from_annual_pct(input.annual_return_pct);
    let one_plus_r = Decimal::ONE + monthly_rate;

    let mut points: Vec<ProjectionPoint> = Vec::with_capacity(n as usize);
    let mut value = input.initial_amount;
    let mut contributed = input.initial_amount;

    for month in 1..=n {
        // Ordering is load-bearing: compound the existing balance first, then
        // land the contribution.
        value = value * one_plus_r + input.monthly_contribution;
        contributed += input.monthly_contribution;

        points.push(ProjectionPoint {
            month,
            contributed,
            value,
        });
    }

    let summary = GrowthSummary {
        final_value: value,
        total_contributed: contributed,
        total_growth: value - contributed,
    };

    let output = GrowthOutput {
        projection: GrowthProjection { points },
        summary,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Monthly Compound-Growth Projection",
        &serde_json::json!({
            "initial_amount": input.initial_amount.to_string(),
            "monthly_contribution": input.monthly_contribution.to_string(),
            "annual_return_pct": input.annual_return_pct.to_string(),
            "horizon_years": input.horizon_years,
            "monthly_rate": monthly_rate.to_string(),
        }),
        warnings,
        elapsed,
        output,
    ))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rates;
    use rust_decimal_macros::dec;

    fn standard_input() -> GrowthInput {
        GrowthInput {
            initial_amount: dec!(10_000),
            monthly_contribution: dec!(500),
            annual_return_pct: dec!(7),
            horizon_years: 10,
        }
    }

    // ---------------------------------------------------------------
    // 1. Point count and indexing
    // ---------------------------------------------------------------
    #[test]
    fn test_point_count_and_indexing() {
        let result = build_growth_projection(&standard_input()).unwrap();
        let points = &result.result.projection.points;

        assert_eq!(points.len(), 120);
        assert_eq!(points[0].month, 1);
        assert_eq!(points[119].month, 120);
    }

    // ---------------------------------------------------------------
    // 2. Contributed-to-date is a pure running sum
    // ---------------------------------------------------------------
    #[test]
    fn test_contributed_is_pure_sum() {
        let input = standard_input();
        let result = build_growth_projection(&input).unwrap();

        for point in &result.result.projection.points {
            let expected = input.initial_amount
                + input.monthly_contribution * Decimal::from(point.month);
            assert_eq!(point.contributed, expected, "month {}", point.month);
        }
    }

    // ---------------------------------------------------------------
    // 3. Flat projection: zero contribution, zero return
    // ---------------------------------------------------------------
    #[test]
    fn test_flat_projection_stays_at_initial() {
        let input = GrowthInput {
            initial_amount: dec!(25_000),
            monthly_contribution: Decimal::ZERO,
            annual_return_pct: Decimal::ZERO,
            horizon_years: 5,
        };
        let result = build_growth_projection(&input).unwrap();

        for point in &result.result.projection.points {
            assert_eq!(point.value, dec!(25_000));
            assert_eq!(point.contributed, dec!(25_000));
        }
        assert_eq!(result.result.summary.total_growth, Decimal::ZERO);
    }

    // ---------------------------------------------------------------
    // 4. Ordering: compound first, then contribute
    // ---------------------------------------------------------------
    #[test]
    fn test_compound_before_contribution_ordering() {
        // With contributions landing after compounding, the closed form is
        // the ordinary annuity: FV = P*(1+r)^n + c*((1+r)^n - 1)/r
        let input = GrowthInput {
            initial_amount: dec!(1_000),
            monthly_contribution: dec!(100),
            annual_return_pct: dec!(12),
            horizon_years: 2,
        };
        let result = build_growth_projection(&input).unwrap();

        let r = dec!(0.01);
        let factor = rates::compound(r, 24);
        let expected = dec!(1_000) * factor + dec!(100) * (factor - Decimal::ONE) / r;

        let diff = (result.result.summary.final_value - expected).abs();
        assert!(diff < dec!(0.000001), "diff {}", diff);
    }

    // ---------------------------------------------------------------
    // 5. Negative returns are computed, not rejected
    // ---------------------------------------------------------------
    #[test]
    fn test_negative_return_valid() {
        let input = GrowthInput {
            initial_amount: dec!(50_000),
            monthly_contribution: dec!(200),
            annual_return_pct: dec!(-6),
            horizon_years: 3,
        };
        let result = build_growth_projection(&input).unwrap();
        let summary = &result.result.summary;

        // Value falls below cost basis when the market loses money
        assert!(summary.final_value < summary.total_contributed);
        assert!(summary.total_growth < Decimal::ZERO);
    }

    // ---------------------------------------------------------------
    // 6. Boundary: 5k/month at 8% for 20 years
    // ---------------------------------------------------------------
    #[test]
    fn test_boundary_contribution_compounding() {
        let input = GrowthInput {
            initial_amount: Decimal::ZERO,
            monthly_contribution: dec!(5_000),
            annual_return_pct: dec!(8),
            horizon_years: 20,
        };
        let result = build_growth_projection(&input).unwrap();
        let summary = &result.result.summary;

        assert_eq!(summary.total_contributed, dec!(1_200_000));
        // Compounding materially beats straight-line contribution (~2.9M)
        assert!(
            summary.final_value > dec!(2_500_000),
            "final value {}",
            summary.final_value
        );
    }

    // ---------------------------------------------------------------
    // 7. Yearly sampling is a view over the computed points
    // ---------------------------------------------------------------
    #[test]
    fn test_yearly_sampling() {
        let result = build_growth_projection(&standard_input()).unwrap();
        let projection = &result.result.projection;

        let yearly = projection.yearly();
        assert_eq!(yearly.len(), 10);
        for (i, point) in yearly.iter().enumerate() {
            assert_eq!(point.month, (i as u32 + 1) * 12);
        }

        // Samples are the same points as the monthly series
        let monthly = projection.monthly();
        assert_eq!(yearly[0].value, monthly[11].value);
        assert_eq!(yearly[9].value, monthly[119].value);
    }

    // ---------------------------------------------------------------
    // 8. Final point accessor
    // ---------------------------------------------------------------
    #[test]
    fn test_final_point() {
        let result = build_growth_projection(&standard_input()).unwrap();
        let projection = &result.result.projection;

        let last = projection.final_point().unwrap();
        assert_eq!(last.month, 120);
        assert_eq!(last.value, result.result.summary.final_value);
    }

    // ---------------------------------------------------------------
    // 9. Determinism: identical inputs, identical sequences
    // ---------------------------------------------------------------
    #[test]
    fn test_deterministic() {
        let input = standard_input();
        let a = build_growth_projection(&input).unwrap();
        let b = build_growth_projection(&input).unwrap();

        let json_a = serde_json::to_string(&a.result).unwrap();
        let json_b = serde_json::to_string(&b.result).unwrap();
        assert_eq!(json_a, json_b);
    }

    // ---------------------------------------------------------------
    // Validation errors
    // ---------------------------------------------------------------
    #[test]
    fn test_rejects_negative_amounts() {
        let mut input = standard_input();
        input.initial_amount = dec!(-1);
        assert!(build_growth_projection(&input).is_err());

        let mut input = standard_input();
        input.monthly_contribution = dec!(-1);
        assert!(build_growth_projection(&input).is_err());
    }

    #[test]
    fn test_rejects_zero_horizon() {
        let mut input = standard_input();
        input.horizon_years = 0;
        assert!(build_growth_projection(&input).is_err());
    }
}
