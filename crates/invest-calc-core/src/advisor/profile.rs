//! Investor questionnaire types.
//!
//! Every field is required. None of these types carries a default, so a
//! profile with a missing field fails at the deserialization boundary instead
//! of silently falling back — a wrong default portfolio is worse than a
//! visible error.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::InvestCalcError;
use crate::types::Money;
use crate::InvestCalcResult;

/// Self-assessed appetite for drawdown risk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskTolerance {
    Conservative,
    Moderate,
    Aggressive,
}

/// How long the money stays invested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeHorizon {
    /// Under ~3 years.
    Short,
    /// Roughly 3 to 10 years.
    Medium,
    /// Over 10 years.
    Long,
}

/// Prior investing experience.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Experience {
    Beginner,
    Intermediate,
    Advanced,
}

/// What the investor is investing for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Goal {
    Retirement,
    WealthBuilding,
    PassiveIncome,
    CapitalPreservation,
    Education,
    HomePurchase,
}

/// A completed investor questionnaire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvestorProfile {
    /// Age in years, 18 to 100.
    pub age: u32,
    pub risk_tolerance: RiskTolerance,
    pub time_horizon: TimeHorizon,
    pub experience: Experience,
    /// At least one goal is required. Duplicates do not change scoring.
    pub goals: Vec<Goal>,
    /// Lump sum available to invest now.
    pub initial_amount: Money,
    /// Planned monthly contribution.
    pub monthly_amount: Money,
}

impl InvestorProfile {
    pub const MIN_AGE: u32 = 18;
    pub const MAX_AGE: u32 = 100;

    /// Check the range and emptiness rules the type system cannot express.
    pub fn validate(&self) -> InvestCalcResult<()> {
        if self.age < Self::MIN_AGE || self.age > Self::MAX_AGE {
            return Err(InvestCalcError::InvalidInput {
                field: "age".into(),
                reason: format!(
                    "age must be between {} and {}",
                    Self::MIN_AGE,
                    Self::MAX_AGE
                ),
            });
        }
        if self.goals.is_empty() {
            return Err(InvestCalcError::InvalidInput {
                field: "goals".into(),
                reason: "at least one goal is required".into(),
            });
        }
        if self.initial_amount < Decimal::ZERO {
            return Err(InvestCalcError::InvalidInput {
                field: "initial_amount".into(),
                reason: "initial amount cannot be negative".into(),
            });
        }
        if self.monthly_amount < Decimal::ZERO {
            return Err(InvestCalcError::InvalidInput {
                field: "monthly_amount".into(),
                reason: "monthly amount cannot be negative".into(),
            });
        }
        Ok(())
    }
}
