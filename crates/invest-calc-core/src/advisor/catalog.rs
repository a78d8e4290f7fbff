//! The fixed catalog of model portfolios.
//!
//! Templates are authored records, not computed output: allocation weights,
//! narratives, and ideal-profile conditions live here as plain data so the
//! rule table can be audited and tested without touching control flow.
//! Catalog order matters — the scoring engine breaks ties in favour of the
//! earlier entry.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::advisor::profile::{Experience, Goal, RiskTolerance, TimeHorizon};
use crate::types::Rate;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Asset class of an allocation line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AssetCategory {
    Stocks,
    Bonds,
    Commodities,
    Reits,
}

/// A single instrument weight inside a template.
///
/// `instrument_id` is an opaque fund-store key. The engine never dereferences
/// it; callers resolve it against the fund database after recommendation.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct TemplateAllocation {
    pub instrument_id: &'static str,
    pub display_name: &'static str,
    pub category: AssetCategory,
    pub allocation_pct: Decimal,
    pub rationale: &'static str,
}

/// An allocation line as returned to callers (owned, round-trippable).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllocationLine {
    pub instrument_id: String,
    pub display_name: String,
    pub category: AssetCategory,
    pub allocation_pct: Decimal,
    pub rationale: String,
}

impl From<&TemplateAllocation> for AllocationLine {
    fn from(line: &TemplateAllocation) -> Self {
        AllocationLine {
            instrument_id: line.instrument_id.to_string(),
            display_name: line.display_name.to_string(),
            category: line.category,
            allocation_pct: line.allocation_pct,
            rationale: line.rationale.to_string(),
        }
    }
}

/// One model portfolio: the profile it is ideal for, its fixed allocation,
/// and its narrative.
#[derive(Debug, Clone, Serialize)]
pub struct PortfolioTemplate {
    pub name: &'static str,
    pub description: &'static str,
    /// Expected annual return band, fractional (0.05 = 5%).
    pub expected_return_low: Rate,
    pub expected_return_high: Rate,
    /// 1 (capital preservation) to 10 (maximum drawdown risk).
    pub risk_level: u8,
    /// Profile conditions this template is ideal for.
    pub risk_tolerances: &'static [RiskTolerance],
    pub horizons: &'static [TimeHorizon],
    pub age_min: u32,
    pub age_max: u32,
    pub experience: &'static [Experience],
    pub goals: &'static [Goal],
    /// Fixed weights; always sum to exactly 100.
    pub allocations: &'static [TemplateAllocation],
    pub strategy_summary: &'static str,
    pub pros: &'static [&'static str],
    pub cons: &'static [&'static str],
}

// ---------------------------------------------------------------------------
// Catalog data
// ---------------------------------------------------------------------------

/// The model-portfolio catalog in tie-break order.
pub const CATALOG: &[PortfolioTemplate] = &[
    PortfolioTemplate {
        name: "Conservative Income",
        description: "Bond-heavy portfolio built around steady distributions \
                      and low drawdowns, for investors who value sleeping well \
                      over maximum growth.",
        expected_return_low: dec!(0.03),
        expected_return_high: dec!(0.05),
        risk_level: 2,
        risk_tolerances: &[RiskTolerance::Conservative],
        horizons: &[TimeHorizon::Short, TimeHorizon::Medium],
        age_min: 55,
        age_max: 100,
        experience: &[Experience::Beginner, Experience::Intermediate],
        goals: &[Goal::PassiveIncome, Goal::CapitalPreservation],
        allocations: &[
            TemplateAllocation {
                instrument_id: "AGG",
                display_name: "Core U.S. Aggregate Bond",
                category: AssetCategory::Bonds,
                allocation_pct: dec!(40),
                rationale: "Broad investment-grade ballast for the whole portfolio",
            },
            TemplateAllocation {
                instrument_id: "SHY",
                display_name: "1-3 Year Treasury Bond",
                category: AssetCategory::Bonds,
                allocation_pct: dec!(20),
                rationale: "Short duration dampens rate sensitivity",
            },
            TemplateAllocation {
                instrument_id: "LQD",
                display_name: "Investment Grade Corporate Bond",
                category: AssetCategory::Bonds,
                allocation_pct: dec!(10),
                rationale: "Modest yield pickup over treasuries",
            },
            TemplateAllocation {
                instrument_id: "VYM",
                display_name: "High Dividend Yield Equity",
                category: AssetCategory::Stocks,
                allocation_pct: dec!(20),
                rationale: "Equity income with below-market volatility",
            },
            TemplateAllocation {
                instrument_id: "GLD",
                display_name: "Gold Trust",
                category: AssetCategory::Commodities,
                allocation_pct: dec!(5),
                rationale: "Inflation hedge uncorrelated with bonds",
            },
            TemplateAllocation {
                instrument_id: "VNQ",
                display_name: "Real Estate Index",
                category: AssetCategory::Reits,
                allocation_pct: dec!(5),
                rationale: "Property income stream diversifies the bond core",
            },
        ],
        strategy_summary: "Preserve capital first, generate income second. \
                           Seventy percent sits in high-grade bonds, with a \
                           dividend-equity sleeve for yield and small real-asset \
                           hedges.",
        pros: &[
            "Low drawdowns in equity bear markets",
            "Predictable income from bond coupons and dividends",
            "Short overall duration limits rate shock",
        ],
        cons: &[
            "Growth is unlikely to outpace inflation by much",
            "Large bond weight lags badly in strong bull markets",
        ],
    },
    PortfolioTemplate {
        name: "Balanced Growth",
        description: "The classic middle path: a diversified equity core with \
                      a meaningful bond cushion, for investors who want growth \
                      without white-knuckle volatility.",
        expected_return_low: dec!(0.05),
        expected_return_high: dec!(0.07),
        risk_level: 5,
        risk_tolerances: &[RiskTolerance::Moderate],
        horizons: &[TimeHorizon::Medium, TimeHorizon::Long],
        age_min: 30,
        age_max: 70,
        experience: &[Experience::Beginner, Experience::Intermediate],
        goals: &[Goal::Retirement, Goal::WealthBuilding, Goal::Education],
        allocations: &[
            TemplateAllocation {
                instrument_id: "VTI",
                display_name: "Total U.S. Stock Market",
                category: AssetCategory::Stocks,
                allocation_pct: dec!(35),
                rationale: "One-fund exposure to the entire U.S. equity market",
            },
            TemplateAllocation {
                instrument_id: "VXUS",
                display_name: "Total International Stock",
                category: AssetCategory::Stocks,
                allocation_pct: dec!(20),
                rationale: "Non-U.S. developed and emerging equity diversification",
            },
            TemplateAllocation {
                instrument_id: "BND",
                display_name: "Total Bond Market",
                category: AssetCategory::Bonds,
                allocation_pct: dec!(30),
                rationale: "Cushions equity drawdowns and funds rebalancing",
            },
            TemplateAllocation {
                instrument_id: "VNQ",
                display_name: "Real Estate Index",
                category: AssetCategory::Reits,
                allocation_pct: dec!(10),
                rationale: "Real-asset income with equity-like long-run returns",
            },
            TemplateAllocation {
                instrument_id: "GLD",
                display_name: "Gold Trust",
                category: AssetCategory::Commodities,
                allocation_pct: dec!(5),
                rationale: "Crisis hedge with low correlation to both cores",
            },
        ],
        strategy_summary: "A 55/30 global equity and bond core with real-asset \
                           satellites. Broad enough to hold through cycles, \
                           conservative enough to stay invested during \
                           corrections.",
        pros: &[
            "Well diversified across regions and asset classes",
            "Bond cushion softens bear markets",
            "Simple to maintain with annual rebalancing",
        ],
        cons: &[
            "Will trail an all-equity portfolio in long bull runs",
            "Bond sleeve is exposed to rising-rate environments",
        ],
    },
    PortfolioTemplate {
        name: "Growth Focus",
        description: "Equity-led portfolio for investors a decade or more from \
                      their goal who can tolerate full market cycles in \
                      exchange for higher expected returns.",
        expected_return_low: dec!(0.07),
        expected_return_high: dec!(0.09),
        risk_level: 7,
        risk_tolerances: &[RiskTolerance::Moderate, RiskTolerance::Aggressive],
        horizons: &[TimeHorizon::Long],
        age_min: 25,
        age_max: 55,
        experience: &[Experience::Intermediate, Experience::Advanced],
        goals: &[Goal::Retirement, Goal::HomePurchase, Goal::Education],
        allocations: &[
            TemplateAllocation {
                instrument_id: "VTI",
                display_name: "Total U.S. Stock Market",
                category: AssetCategory::Stocks,
                allocation_pct: dec!(45),
                rationale: "Core engine of long-run growth",
            },
            TemplateAllocation {
                instrument_id: "VXUS",
                display_name: "Total International Stock",
                category: AssetCategory::Stocks,
                allocation_pct: dec!(20),
                rationale: "Global breadth reduces single-market concentration",
            },
            TemplateAllocation {
                instrument_id: "QQQ",
                display_name: "Nasdaq-100 Index",
                category: AssetCategory::Stocks,
                allocation_pct: dec!(10),
                rationale: "Tilt toward large-cap growth and technology",
            },
            TemplateAllocation {
                instrument_id: "BND",
                display_name: "Total Bond Market",
                category: AssetCategory::Bonds,
                allocation_pct: dec!(15),
                rationale: "Dry powder and a brake on portfolio volatility",
            },
            TemplateAllocation {
                instrument_id: "VNQ",
                display_name: "Real Estate Index",
                category: AssetCategory::Reits,
                allocation_pct: dec!(5),
                rationale: "Inflation-linked income outside the equity core",
            },
            TemplateAllocation {
                instrument_id: "GLD",
                display_name: "Gold Trust",
                category: AssetCategory::Commodities,
                allocation_pct: dec!(5),
                rationale: "Tail hedge for equity-heavy allocations",
            },
        ],
        strategy_summary: "Seventy-five percent global equities with a growth \
                           tilt, held up by a slim bond and real-asset sleeve. \
                           Designed to be left alone for ten or more years.",
        pros: &[
            "High expected long-run return",
            "Still diversified across four asset classes",
            "Growth tilt benefits from innovation cycles",
        ],
        cons: &[
            "Deep drawdowns in equity bear markets",
            "Requires discipline to hold through volatility",
            "Thin bond sleeve gives little rebalancing ammunition",
        ],
    },
    PortfolioTemplate {
        name: "Aggressive Growth",
        description: "Nearly all-equity portfolio for young investors with \
                      long horizons and the stomach for serious drawdowns in \
                      pursuit of maximum compounding.",
        expected_return_low: dec!(0.09),
        expected_return_high: dec!(0.12),
        risk_level: 9,
        risk_tolerances: &[RiskTolerance::Aggressive],
        horizons: &[TimeHorizon::Long],
        age_min: 18,
        age_max: 45,
        experience: &[Experience::Intermediate, Experience::Advanced],
        goals: &[Goal::WealthBuilding],
        allocations: &[
            TemplateAllocation {
                instrument_id: "VTI",
                display_name: "Total U.S. Stock Market",
                category: AssetCategory::Stocks,
                allocation_pct: dec!(50),
                rationale: "Maximum exposure to the broad equity engine",
            },
            TemplateAllocation {
                instrument_id: "QQQ",
                display_name: "Nasdaq-100 Index",
                category: AssetCategory::Stocks,
                allocation_pct: dec!(25),
                rationale: "Concentrated growth and technology tilt",
            },
            TemplateAllocation {
                instrument_id: "VWO",
                display_name: "Emerging Markets Stock",
                category: AssetCategory::Stocks,
                allocation_pct: dec!(15),
                rationale: "Higher-risk markets with higher growth ceilings",
            },
            TemplateAllocation {
                instrument_id: "VNQ",
                display_name: "Real Estate Index",
                category: AssetCategory::Reits,
                allocation_pct: dec!(5),
                rationale: "A sliver of real-asset diversification",
            },
            TemplateAllocation {
                instrument_id: "DBC",
                display_name: "Commodity Index",
                category: AssetCategory::Commodities,
                allocation_pct: dec!(5),
                rationale: "Inflation exposure the equity sleeve lacks",
            },
        ],
        strategy_summary: "Ninety percent equities tilted toward growth and \
                           emerging markets. Every percentage point of expected \
                           return is bought with volatility; time in the market \
                           does the rest.",
        pros: &[
            "Highest expected compounding over long horizons",
            "Monthly contributions buy more shares in drawdowns",
        ],
        cons: &[
            "Drawdowns of 40% or more are a feature, not a bug",
            "Unsuitable for money needed within a decade",
            "No meaningful income generation",
        ],
    },
    PortfolioTemplate {
        name: "All-Weather",
        description: "Risk-balanced portfolio designed to muddle through any \
                      economic season (growth, recession, inflation or \
                      deflation) without depending on one of them.",
        expected_return_low: dec!(0.05),
        expected_return_high: dec!(0.08),
        risk_level: 4,
        risk_tolerances: &[RiskTolerance::Conservative, RiskTolerance::Moderate],
        horizons: &[TimeHorizon::Medium, TimeHorizon::Long],
        age_min: 30,
        age_max: 100,
        experience: &[Experience::Intermediate, Experience::Advanced],
        goals: &[Goal::CapitalPreservation, Goal::Retirement],
        allocations: &[
            TemplateAllocation {
                instrument_id: "VTI",
                display_name: "Total U.S. Stock Market",
                category: AssetCategory::Stocks,
                allocation_pct: dec!(30),
                rationale: "Equity engine sized for balance, not dominance",
            },
            TemplateAllocation {
                instrument_id: "TLT",
                display_name: "20+ Year Treasury Bond",
                category: AssetCategory::Bonds,
                allocation_pct: dec!(40),
                rationale: "Long duration offsets equity risk in recessions",
            },
            TemplateAllocation {
                instrument_id: "IEF",
                display_name: "7-10 Year Treasury Bond",
                category: AssetCategory::Bonds,
                allocation_pct: dec!(15),
                rationale: "Intermediate duration smooths the bond sleeve",
            },
            TemplateAllocation {
                instrument_id: "GLD",
                display_name: "Gold Trust",
                category: AssetCategory::Commodities,
                allocation_pct: dec!(7.5),
                rationale: "Store of value for inflationary seasons",
            },
            TemplateAllocation {
                instrument_id: "DBC",
                display_name: "Commodity Index",
                category: AssetCategory::Commodities,
                allocation_pct: dec!(7.5),
                rationale: "Broad commodity exposure for rising-price regimes",
            },
        ],
        strategy_summary: "Balances exposure across economic regimes rather \
                           than across asset names: equities for growth, long \
                           treasuries for deflationary recessions, gold and \
                           commodities for inflation.",
        pros: &[
            "Historically shallow drawdowns across regimes",
            "Does not require forecasting the economy",
            "Rebalancing premium from uncorrelated sleeves",
        ],
        cons: &[
            "Heavy duration suffers when rates rise sharply",
            "Lags equity portfolios in sustained bull markets",
        ],
    },
];

/// The fixed catalog, in declaration (tie-break) order.
pub fn catalog() -> &'static [PortfolioTemplate] {
    CATALOG
}
