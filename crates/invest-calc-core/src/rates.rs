//! Shared rate and rounding primitives.
//!
//! Every percent-to-fraction and annual-to-periodic conversion in the engine
//! goes through this module so the two calculators cannot drift apart.

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

use crate::types::{Percent, Rate};

/// Months per compounding year. Both calculators compound monthly.
pub const MONTHS_PER_YEAR: u32 = 12;

/// Acceptable rounding drift across a full schedule: one minor currency unit.
pub const MINOR_UNIT: Decimal = dec!(0.01);

/// Convert a user-facing percentage (5.5 = 5.5%) to a fractional rate.
pub fn fraction_from_pct(pct: Percent) -> Rate {
    pct / dec!(100)
}

/// Convert an annual percentage to a monthly periodic rate.
pub fn monthly_rate_from_annual_pct(pct: Percent) -> Rate {
    fraction_from_pct(pct) / Decimal::from(MONTHS_PER_YEAR)
}

/// Compute (1 + r)^n via iterative multiplication (avoids Decimal::powd drift).
pub fn compound(rate: Rate, n: u32) -> Decimal {
    let mut result = Decimal::ONE;
    let factor = Decimal::ONE + rate;
    for _ in 0..n {
        result *= factor;
    }
    result
}

/// Round to minor-currency-unit precision (2 dp, midpoint away from zero).
pub fn round_minor(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}
