use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use invest_calc_core::loan::amortization::{self, LoanInput};

/// Arguments for the amortization calculator
#[derive(Args)]
pub struct AmortizeArgs {
    /// Amount borrowed
    #[arg(long)]
    pub principal: Decimal,

    /// Annual interest rate as a percentage (5.5 = 5.5%)
    #[arg(long)]
    pub rate: Decimal,

    /// Loan term in whole years
    #[arg(long)]
    pub years: u32,

    /// Append a yearly roll-up of the schedule
    #[arg(long)]
    pub yearly: bool,

    /// Keep only the first N schedule rows in the output
    #[arg(long)]
    pub schedule_limit: Option<usize>,
}

pub fn run_amortize(args: AmortizeArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let input = LoanInput {
        principal: args.principal,
        annual_rate_pct: args.rate,
        term_years: args.years,
    };
    let result = amortization::build_amortization_schedule(&input)?;

    let rollup = args
        .yearly
        .then(|| amortization::yearly_rollup(&result.result.schedule));

    let mut value = serde_json::to_value(&result)?;
    if let Some(rows) = rollup {
        value["result"]["yearly"] = serde_json::to_value(rows)?;
    }
    if let Some(limit) = args.schedule_limit {
        if let Some(Value::Array(schedule)) = value["result"].get_mut("schedule") {
            schedule.truncate(limit);
        }
    }
    Ok(value)
}
