//! Node bindings for the invest-calc engine.
//!
//! The calculator pages call these functions in-process with JSON strings;
//! instrument identifiers in recommendation output are resolved against the
//! fund database by the page layer afterwards.

use napi::Result as NapiResult;
use napi_derive::napi;

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

// ---------------------------------------------------------------------------
// Amortization
// ---------------------------------------------------------------------------

#[napi]
pub fn build_amortization_schedule(input_json: String) -> NapiResult<String> {
    let input: invest_calc_core::loan::amortization::LoanInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = invest_calc_core::loan::amortization::build_amortization_schedule(&input)
        .map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Growth projection
// ---------------------------------------------------------------------------

#[napi]
pub fn build_growth_projection(input_json: String) -> NapiResult<String> {
    let input: invest_calc_core::growth::projection::GrowthInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = invest_calc_core::growth::projection::build_growth_projection(&input)
        .map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Portfolio recommendation
// ---------------------------------------------------------------------------

#[napi]
pub fn recommend_portfolio(profile_json: String) -> NapiResult<String> {
    let profile: invest_calc_core::advisor::InvestorProfile =
        serde_json::from_str(&profile_json).map_err(to_napi_error)?;
    let output = invest_calc_core::advisor::recommend(&profile).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn score_portfolio_candidates(profile_json: String) -> NapiResult<String> {
    let profile: invest_calc_core::advisor::InvestorProfile =
        serde_json::from_str(&profile_json).map_err(to_napi_error)?;
    let scores =
        invest_calc_core::advisor::score_candidates(&profile).map_err(to_napi_error)?;
    serde_json::to_string(&scores).map_err(to_napi_error)
}

#[napi]
pub fn portfolio_catalog() -> NapiResult<String> {
    serde_json::to_string(invest_calc_core::advisor::catalog()).map_err(to_napi_error)
}
