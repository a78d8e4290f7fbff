//! Profile-to-portfolio matching.
//!
//! A deterministic classifier over the fixed catalog: each template is scored
//! against the profile in one pass with fixed per-dimension weights, and the
//! strictly highest score wins. Ties go to the earlier catalog entry. The
//! winner's allocation lines and narrative are returned verbatim from the
//! template, never recomputed.

use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::advisor::catalog::{catalog, AllocationLine, PortfolioTemplate};
use crate::advisor::profile::InvestorProfile;
use crate::error::InvestCalcError;
use crate::types::{with_metadata, ComputationOutput, Rate};
use crate::InvestCalcResult;

// ---------------------------------------------------------------------------
// Scoring weights
// ---------------------------------------------------------------------------

// Dimension ordering is fixed: risk tolerance dominates, then time horizon,
// age band, experience, goal overlap.
const WEIGHT_RISK: u32 = 40;
const WEIGHT_HORIZON: u32 = 25;
const WEIGHT_AGE: u32 = 15;
const WEIGHT_EXPERIENCE: u32 = 10;
const WEIGHT_GOALS: u32 = 10;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Per-dimension scoring trace for one catalog template.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateScore {
    pub name: String,
    pub score: u32,
    pub risk_points: u32,
    pub horizon_points: u32,
    pub age_points: u32,
    pub experience_points: u32,
    pub goal_points: u32,
}

/// The selected model portfolio with its narrative, returned to callers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortfolioRecommendation {
    pub name: String,
    pub description: String,
    /// Expected annual return band, fractional (0.05 = 5%).
    pub expected_return_low: Rate,
    pub expected_return_high: Rate,
    /// 1 (capital preservation) to 10 (maximum drawdown risk).
    pub risk_level: u8,
    pub allocations: Vec<AllocationLine>,
    pub strategy_summary: String,
    pub pros: Vec<String>,
    pub cons: Vec<String>,
    /// The winning template's match score against this profile.
    pub match_score: u32,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Score every catalog template against the profile. The audit view of the
/// rule table; `recommend` selects from exactly these scores.
pub fn score_candidates(profile: &InvestorProfile) -> InvestCalcResult<Vec<CandidateScore>> {
    profile.validate()?;
    Ok(catalog()
        .iter()
        .map(|template| score_template(template, profile))
        .collect())
}

/// Select the model portfolio that best matches the profile.
pub fn recommend(
    profile: &InvestorProfile,
) -> InvestCalcResult<ComputationOutput<PortfolioRecommendation>> {
    let start = Instant::now();
    let warnings: Vec<String> = Vec::new();

    profile.validate()?;

    let mut best: Option<(&PortfolioTemplate, CandidateScore)> = None;
    for template in catalog() {
        let score = score_template(template, profile);
        // Strict comparison: on a tie the earlier catalog entry stands.
        let better = match &best {
            Some((_, incumbent)) => score.score > incumbent.score,
            None => true,
        };
        if better {
            best = Some((template, score));
        }
    }

    // Unreachable with a non-empty catalog; a validated profile always
    // scores >= 0 against every template.
    let (template, score) = best.ok_or_else(|| {
        InvestCalcError::InternalInconsistency("portfolio catalog is empty".into())
    })?;

    let recommendation = PortfolioRecommendation {
        name: template.name.to_string(),
        description: template.description.to_string(),
        expected_return_low: template.expected_return_low,
        expected_return_high: template.expected_return_high,
        risk_level: template.risk_level,
        allocations: template.allocations.iter().map(AllocationLine::from).collect(),
        strategy_summary: template.strategy_summary.to_string(),
        pros: template.pros.iter().map(|s| s.to_string()).collect(),
        cons: template.cons.iter().map(|s| s.to_string()).collect(),
        match_score: score.score,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Scored Rule-Table Portfolio Selection",
        &serde_json::json!({
            "weights": {
                "risk_tolerance": WEIGHT_RISK,
                "time_horizon": WEIGHT_HORIZON,
                "age_band": WEIGHT_AGE,
                "experience": WEIGHT_EXPERIENCE,
                "goal_overlap": WEIGHT_GOALS,
            },
            "tie_break": "earlier catalog entry wins",
            "candidates": catalog().len(),
        }),
        warnings,
        elapsed,
        recommendation,
    ))
}

// ---------------------------------------------------------------------------
// Scoring
// ---------------------------------------------------------------------------

fn score_template(template: &PortfolioTemplate, profile: &InvestorProfile) -> CandidateScore {
    let risk_points = if template.risk_tolerances.contains(&profile.risk_tolerance) {
        WEIGHT_RISK
    } else {
        0
    };
    let horizon_points = if template.horizons.contains(&profile.time_horizon) {
        WEIGHT_HORIZON
    } else {
        0
    };
    let age_points = if profile.age >= template.age_min && profile.age <= template.age_max {
        WEIGHT_AGE
    } else {
        0
    };
    let experience_points = if template.experience.contains(&profile.experience) {
        WEIGHT_EXPERIENCE
    } else {
        0
    };
    // All-or-nothing: any shared goal scores the full weight, so goal count
    // cannot outrank the experience dimension.
    let goal_points = if profile.goals.iter().any(|g| template.goals.contains(g)) {
        WEIGHT_GOALS
    } else {
        0
    };

    CandidateScore {
        name: template.name.to_string(),
        score: risk_points + horizon_points + age_points + experience_points + goal_points,
        risk_points,
        horizon_points,
        age_points,
        experience_points,
        goal_points,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::advisor::profile::{Experience, Goal, RiskTolerance, TimeHorizon};
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn profile(
        age: u32,
        risk: RiskTolerance,
        horizon: TimeHorizon,
        experience: Experience,
        goals: Vec<Goal>,
    ) -> InvestorProfile {
        InvestorProfile {
            age,
            risk_tolerance: risk,
            time_horizon: horizon,
            experience,
            goals,
            initial_amount: dec!(10_000),
            monthly_amount: dec!(500),
        }
    }

    // ---------------------------------------------------------------
    // 1. Conservative senior lands on Conservative Income
    // ---------------------------------------------------------------
    #[test]
    fn test_conservative_senior() {
        let p = profile(
            68,
            RiskTolerance::Conservative,
            TimeHorizon::Short,
            Experience::Beginner,
            vec![Goal::PassiveIncome],
        );
        let result = recommend(&p).unwrap();
        assert_eq!(result.result.name, "Conservative Income");
    }

    // ---------------------------------------------------------------
    // 2. Young aggressive investor lands on Aggressive Growth
    // ---------------------------------------------------------------
    #[test]
    fn test_young_aggressive() {
        let p = profile(
            25,
            RiskTolerance::Aggressive,
            TimeHorizon::Long,
            Experience::Intermediate,
            vec![Goal::WealthBuilding],
        );
        let result = recommend(&p).unwrap();
        assert_eq!(result.result.name, "Aggressive Growth");
    }

    // ---------------------------------------------------------------
    // 3. Older balanced saver lands on All-Weather
    // ---------------------------------------------------------------
    #[test]
    fn test_risk_balanced_preserver() {
        let p = profile(
            75,
            RiskTolerance::Moderate,
            TimeHorizon::Medium,
            Experience::Advanced,
            vec![Goal::CapitalPreservation],
        );
        let result = recommend(&p).unwrap();
        assert_eq!(result.result.name, "All-Weather");
    }

    // ---------------------------------------------------------------
    // 4. Aggressive home saver lands on Growth Focus
    // ---------------------------------------------------------------
    #[test]
    fn test_growth_focus_home_purchase() {
        let p = profile(
            30,
            RiskTolerance::Aggressive,
            TimeHorizon::Long,
            Experience::Advanced,
            vec![Goal::HomePurchase],
        );
        let result = recommend(&p).unwrap();
        assert_eq!(result.result.name, "Growth Focus");
    }

    // ---------------------------------------------------------------
    // 5. Tie-break: equal scores resolve to the earlier catalog entry
    // ---------------------------------------------------------------
    #[test]
    fn test_tie_break_earlier_entry_wins() {
        // Balanced Growth and Growth Focus both score a full 100 here:
        // Moderate risk, Long horizon, age 40, Intermediate experience all
        // match both, and Education appears in both goal lists (and in no
        // other template's).
        let p = profile(
            40,
            RiskTolerance::Moderate,
            TimeHorizon::Long,
            Experience::Intermediate,
            vec![Goal::Education],
        );

        let scores = score_candidates(&p).unwrap();
        let balanced = scores.iter().find(|s| s.name == "Balanced Growth").unwrap();
        let growth = scores.iter().find(|s| s.name == "Growth Focus").unwrap();
        assert_eq!(balanced.score, growth.score, "tie is by construction");

        let result = recommend(&p).unwrap();
        assert_eq!(result.result.name, "Balanced Growth");
    }

    // ---------------------------------------------------------------
    // 6. Second deliberate tie with a different profile, same winner rule
    // ---------------------------------------------------------------
    #[test]
    fn test_tie_break_second_profile() {
        let p = profile(
            52,
            RiskTolerance::Moderate,
            TimeHorizon::Long,
            Experience::Intermediate,
            vec![Goal::Education],
        );

        let scores = score_candidates(&p).unwrap();
        let balanced = scores.iter().find(|s| s.name == "Balanced Growth").unwrap();
        let growth = scores.iter().find(|s| s.name == "Growth Focus").unwrap();
        assert_eq!(balanced.score, growth.score, "tie is by construction");

        let result = recommend(&p).unwrap();
        assert_eq!(result.result.name, "Balanced Growth");
    }

    // ---------------------------------------------------------------
    // 7. Allocation lines come back verbatim and reconcile to 100
    // ---------------------------------------------------------------
    #[test]
    fn test_allocations_verbatim_and_complete() {
        let p = profile(
            25,
            RiskTolerance::Aggressive,
            TimeHorizon::Long,
            Experience::Intermediate,
            vec![Goal::WealthBuilding],
        );
        let result = recommend(&p).unwrap();
        let rec = &result.result;

        let template = catalog()
            .iter()
            .find(|t| t.name == rec.name)
            .expect("winner exists in catalog");

        assert_eq!(rec.allocations.len(), template.allocations.len());
        for (line, template_line) in rec.allocations.iter().zip(template.allocations) {
            assert_eq!(line.instrument_id, template_line.instrument_id);
            assert_eq!(line.allocation_pct, template_line.allocation_pct);
        }

        let total: Decimal = rec.allocations.iter().map(|l| l.allocation_pct).sum();
        assert_eq!(total, dec!(100));
    }

    // ---------------------------------------------------------------
    // 8. Determinism: same profile, byte-identical recommendation
    // ---------------------------------------------------------------
    #[test]
    fn test_deterministic() {
        let p = profile(
            40,
            RiskTolerance::Moderate,
            TimeHorizon::Medium,
            Experience::Beginner,
            vec![Goal::Retirement, Goal::Education],
        );

        let a = recommend(&p).unwrap();
        let b = recommend(&p).unwrap();

        assert_eq!(a.result.name, b.result.name);
        let json_a = serde_json::to_string(&a.result).unwrap();
        let json_b = serde_json::to_string(&b.result).unwrap();
        assert_eq!(json_a, json_b);
    }

    // ---------------------------------------------------------------
    // 9. Every valid enum combination produces a recommendation
    // ---------------------------------------------------------------
    #[test]
    fn test_total_coverage_over_enum_space() {
        let risks = [
            RiskTolerance::Conservative,
            RiskTolerance::Moderate,
            RiskTolerance::Aggressive,
        ];
        let horizons = [TimeHorizon::Short, TimeHorizon::Medium, TimeHorizon::Long];
        let levels = [
            Experience::Beginner,
            Experience::Intermediate,
            Experience::Advanced,
        ];
        let goals = [
            Goal::Retirement,
            Goal::WealthBuilding,
            Goal::PassiveIncome,
            Goal::CapitalPreservation,
            Goal::Education,
            Goal::HomePurchase,
        ];

        for risk in risks {
            for horizon in horizons {
                for level in levels {
                    for goal in goals {
                        for age in [18, 35, 60, 100] {
                            let p = profile(age, risk, horizon, level, vec![goal]);
                            let result = recommend(&p);
                            assert!(
                                result.is_ok(),
                                "no recommendation for {:?}/{:?}/{:?}/{:?}/age {}",
                                risk,
                                horizon,
                                level,
                                goal,
                                age
                            );
                        }
                    }
                }
            }
        }
    }

    // ---------------------------------------------------------------
    // 10. Scoring trace reconciles with the recommendation
    // ---------------------------------------------------------------
    #[test]
    fn test_score_trace_matches_recommendation() {
        let p = profile(
            68,
            RiskTolerance::Conservative,
            TimeHorizon::Short,
            Experience::Beginner,
            vec![Goal::PassiveIncome],
        );

        let scores = score_candidates(&p).unwrap();
        assert_eq!(scores.len(), catalog().len());

        let result = recommend(&p).unwrap();
        let winner = scores.iter().find(|s| s.name == result.result.name).unwrap();

        assert_eq!(winner.score, result.result.match_score);
        let max = scores.iter().map(|s| s.score).max().unwrap();
        assert_eq!(winner.score, max);

        // Dimension points add up
        for s in &scores {
            assert_eq!(
                s.score,
                s.risk_points + s.horizon_points + s.age_points
                    + s.experience_points + s.goal_points
            );
        }
    }

    // ---------------------------------------------------------------
    // 11. Duplicate goals do not inflate the score
    // ---------------------------------------------------------------
    #[test]
    fn test_duplicate_goals_do_not_inflate() {
        let single = profile(
            40,
            RiskTolerance::Moderate,
            TimeHorizon::Long,
            Experience::Intermediate,
            vec![Goal::Retirement],
        );
        let duplicated = profile(
            40,
            RiskTolerance::Moderate,
            TimeHorizon::Long,
            Experience::Intermediate,
            vec![Goal::Retirement, Goal::Retirement, Goal::Retirement],
        );

        let a = score_candidates(&single).unwrap();
        let b = score_candidates(&duplicated).unwrap();
        for (x, y) in a.iter().zip(&b) {
            assert_eq!(x.score, y.score, "template '{}'", x.name);
        }
    }

    // ---------------------------------------------------------------
    // Validation errors propagate
    // ---------------------------------------------------------------
    #[test]
    fn test_invalid_profile_rejected() {
        let mut p = profile(
            40,
            RiskTolerance::Moderate,
            TimeHorizon::Long,
            Experience::Intermediate,
            vec![Goal::Retirement],
        );
        p.goals.clear();
        assert!(recommend(&p).is_err());
        assert!(score_candidates(&p).is_err());

        let p2 = profile(
            17,
            RiskTolerance::Moderate,
            TimeHorizon::Long,
            Experience::Intermediate,
            vec![Goal::Retirement],
        );
        assert!(recommend(&p2).is_err());
    }
}
