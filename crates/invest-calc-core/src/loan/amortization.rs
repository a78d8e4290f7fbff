//! Fixed-payment loan amortization.
//!
//! Produces a full monthly schedule (payment split into interest and
//! principal, running balance, cumulative interest) plus derived totals.
//! All math in `rust_decimal::Decimal`; the schedule is generated in one
//! pure call and never mutated afterwards.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::error::InvestCalcError;
use crate::rates::{self, MONTHS_PER_YEAR};
use crate::types::{with_metadata, ComputationOutput, Money, Percent, Rate};
use crate::InvestCalcResult;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Input parameters for a fixed-payment loan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanInput {
    /// Amount borrowed.
    pub principal: Money,
    /// Annual interest rate as a percentage (5.5 = 5.5%). Zero is valid.
    pub annual_rate_pct: Percent,
    /// Loan term in whole years.
    pub term_years: u32,
}

/// One month of an amortization schedule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleEntry {
    /// Month number (1-indexed).
    pub month: u32,
    /// Scheduled payment for the month.
    pub payment: Money,
    /// Interest portion of the payment.
    pub interest: Money,
    /// Principal portion of the payment.
    pub principal: Money,
    /// Balance outstanding after this month.
    pub remaining_balance: Money,
    /// Interest paid to date.
    pub cumulative_interest: Money,
}

/// Derived totals for the full schedule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanSummary {
    pub monthly_payment: Money,
    pub total_paid: Money,
    pub total_interest: Money,
    /// Interest paid per unit of principal borrowed.
    pub interest_to_principal: Decimal,
    pub payoff_months: u32,
}

/// Full amortization result: the schedule plus its summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AmortizationOutput {
    pub schedule: Vec<ScheduleEntry>,
    pub summary: LoanSummary,
}

/// One year of the schedule, aggregated for annual charts and tables.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct YearlyLoanRow {
    pub year: u32,
    pub payment: Money,
    pub interest: Money,
    pub principal: Money,
    pub ending_balance: Money,
}

// ---------------------------------------------------------------------------
// Core function
// ---------------------------------------------------------------------------

/// Build a full monthly amortization schedule for a fixed-payment loan.
pub fn build_amortization_schedule(
    input: &LoanInput,
) -> InvestCalcResult<ComputationOutput<AmortizationOutput>> {
    let start = Instant::now();
    let warnings: Vec<String> = Vec::new();

    // --- Validation ---
    if input.principal <= Decimal::ZERO {
        return Err(InvestCalcError::InvalidInput {
            field: "principal".into(),
            reason: "principal must be > 0".into(),
        });
    }
    if input.term_years == 0 {
        return Err(InvestCalcError::InvalidInput {
            field: "term_years".into(),
            reason: "term must be at least 1 year".into(),
        });
    }
    if input.annual_rate_pct < Decimal::ZERO {
        return Err(InvestCalcError::InvalidInput {
            field: "annual_rate_pct".into(),
            reason: "annual rate cannot be negative".into(),
        });
    }

    let n = input.term_years * MONTHS_PER_YEAR;
    let monthly_rate = rates::monthly_rate_from_annual_pct(input.annual_rate_pct);
    let payment = monthly_payment(input.principal, monthly_rate, n)?;

    let mut schedule: Vec<ScheduleEntry> = Vec::with_capacity(n as usize);
    let mut balance = input.principal;
    let mut cumulative_interest = Decimal::ZERO;

    for month in 1..=n {
        let interest = balance * monthly_rate;
        // The principal portion can never exceed the outstanding balance, and
        // the last month retires whatever is left, so the final balance lands
        // on exactly zero instead of drifting past it.
        let principal_portion = if month == n {
            balance
        } else {
            (payment - interest).min(balance)
        };
        balance -= principal_portion;
        cumulative_interest += interest;

        schedule.push(ScheduleEntry {
            month,
            payment,
            interest,
            principal: principal_portion,
            remaining_balance: balance,
            cumulative_interest,
        });
    }

    let total_interest = cumulative_interest;
    let total_paid = payment * Decimal::from(n);

    let summary = LoanSummary {
        monthly_payment: payment,
        total_paid,
        total_interest,
        interest_to_principal: total_interest / input.principal,
        payoff_months: n,
    };

    let output = AmortizationOutput { schedule, summary };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Fixed-Payment Amortization Schedule",
        &serde_json::json!({
            "principal": input.principal.to_string(),
            "annual_rate_pct": input.annual_rate_pct.to_string(),
            "term_years": input.term_years,
            "monthly_rate": monthly_rate.to_string(),
            "periods": n,
        }),
        warnings,
        elapsed,
        output,
    ))
}

/// Aggregate a monthly schedule into yearly rows. A pure view over the
/// already-computed schedule; nothing is recomputed.
pub fn yearly_rollup(schedule: &[ScheduleEntry]) -> Vec<YearlyLoanRow> {
    let mut rows: Vec<YearlyLoanRow> = Vec::new();

    for entry in schedule {
        let year = (entry.month + MONTHS_PER_YEAR - 1) / MONTHS_PER_YEAR;
        match rows.last_mut() {
            Some(row) if row.year == year => {
                row.payment += entry.payment;
                row.interest += entry.interest;
                row.principal += entry.principal;
                row.ending_balance = entry.remaining_balance;
            }
            _ => rows.push(YearlyLoanRow {
                year,
                payment: entry.payment,
                interest: entry.interest,
                principal: entry.principal,
                ending_balance: entry.remaining_balance,
            }),
        }
    }

    rows
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Fixed annuity payment: P * r * (1+r)^n / ((1+r)^n - 1).
fn monthly_payment(principal: Money, monthly_rate: Rate, n: u32) -> InvestCalcResult<Money> {
    if monthly_rate.is_zero() {
        // Interest-free: straight division, the annuity formula would divide
        // by zero.
        return Ok(principal / Decimal::from(n));
    }

    let factor = rates::compound(monthly_rate, n);
    let denom = factor - Decimal::ONE;
    if denom.is_zero() {
        return Err(InvestCalcError::DivisionByZero {
            context: "annuity payment denominator".into(),
        });
    }

    Ok(principal * monthly_rate * factor / denom)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
