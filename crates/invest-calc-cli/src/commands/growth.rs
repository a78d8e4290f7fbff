use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use invest_calc_core::growth::projection::{self, GrowthInput, ProjectionPoint};

/// Arguments for the growth projection calculator
#[derive(Args)]
pub struct GrowthArgs {
    /// Starting lump sum
    #[arg(long, default_value = "0")]
    pub initial: Decimal,

    /// Contribution added each month
    #[arg(long, default_value = "0")]
    pub monthly: Decimal,

    /// Assumed annual return as a percentage (negative is valid)
    #[arg(long, allow_hyphen_values = true)]
    pub rate: Decimal,

    /// Projection horizon in whole years
    #[arg(long)]
    pub years: u32,

    /// Sampling granularity: monthly or yearly
    #[arg(long, default_value = "monthly")]
    pub granularity: String,
}

pub fn run_growth(args: GrowthArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let input = GrowthInput {
        initial_amount: args.initial,
        monthly_contribution: args.monthly,
        annual_return_pct: args.rate,
        horizon_years: args.years,
    };
    let result = projection::build_growth_projection(&input)?;

    let mut value = serde_json::to_value(&result)?;
    match args.granularity.to_lowercase().as_str() {
        "monthly" => {}
        "yearly" => {
            let samples: Vec<ProjectionPoint> = result
                .result
                .projection
                .yearly()
                .into_iter()
                .cloned()
                .collect();
            value["result"]["projection"]["points"] = serde_json::to_value(samples)?;
        }
        other => {
            return Err(
                format!("Unknown granularity '{}'. Use: monthly, yearly", other).into(),
            )
        }
    }
    Ok(value)
}
