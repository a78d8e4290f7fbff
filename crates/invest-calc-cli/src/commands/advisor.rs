use clap::Args;
use serde_json::Value;

use invest_calc_core::advisor::{self, InvestorProfile};

use crate::input;

/// Arguments for portfolio recommendation
#[derive(Args)]
pub struct RecommendArgs {
    /// Path to JSON profile file
    #[arg(long)]
    pub input: Option<String>,

    /// Include the per-template scoring trace
    #[arg(long)]
    pub scores: bool,
}

/// Arguments for printing the model-portfolio catalog
#[derive(Args)]
pub struct CatalogArgs {}

pub fn run_recommend(args: RecommendArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let profile: InvestorProfile = if let Some(ref path) = args.input {
        input::file::read_json(path)?
    } else if let Some(data) = input::stdin::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        return Err("--input <profile.json> or stdin required for recommendation".into());
    };

    let result = advisor::recommend(&profile)?;
    let mut value = serde_json::to_value(&result)?;
    if args.scores {
        let scores = advisor::score_candidates(&profile)?;
        value["scores"] = serde_json::to_value(scores)?;
    }
    Ok(value)
}

pub fn run_catalog(_args: CatalogArgs) -> Result<Value, Box<dyn std::error::Error>> {
    Ok(serde_json::to_value(advisor::catalog())?)
}
