use thiserror::Error;

use crate::advisory::Advisory;

#[derive(Error, Debug)]
pub enum SpectraError {
    #[error("Invalid {kind}: {value:?} (expected one of {expected})")]
    InvalidCategoricalInput {
        kind: &'static str,
        value: String,
        expected: &'static str,
    },

    #[error("Invalid {selector} selector: {value:?} (expected one of {expected})")]
    InvalidUnitSelector {
        selector: &'static str,
        value: String,
        expected: &'static str,
    },

    #[error("Advisory treated as fatal: {0}")]
    OutOfRangeAdvisory(Advisory),

    #[error("Numeric domain error: {0}")]
    NumericDomain(String),

    #[error("Invalid period axis: {0}")]
    InvalidPeriodAxis(String),

    #[error("Linear fit error: {0}")]
    LinearFit(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type SpectraResult<T> = Result<T, SpectraError>;
