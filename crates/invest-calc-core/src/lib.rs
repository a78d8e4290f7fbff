pub mod error;
pub mod rates;
pub mod types;

#[cfg(feature = "loan")]
pub mod loan;

#[cfg(feature = "growth")]
pub mod growth;

#[cfg(feature = "advisor")]
pub mod advisor;

pub use error::InvestCalcError;
pub use types::*;

/// Standard result type for all invest-calc operations
pub type InvestCalcResult<T> = Result<T, InvestCalcError>;
