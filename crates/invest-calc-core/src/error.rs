use thiserror::Error;

#[derive(Debug, Error)]
pub enum InvestCalcError {
    #[error("Invalid input: {field} — {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("Internal consistency failure: {0}")]
    InternalInconsistency(String),

    #[error("Division by zero in {context}")]
    DivisionByZero { context: String },

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for InvestCalcError {
    fn from(e: serde_json::Error) -> Self {
        InvestCalcError::SerializationError(e.to_string())
    }
}
