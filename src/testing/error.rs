//! Error types raised by the statistical engine

use thiserror::Error;

/// Failures raised while running unit-root and cointegration tests
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CointError {
    /// The two series do not have the same number of observations
    #[error("Length mismatch: series have {left} and {right} observations")]
    LengthMismatch { left: usize, right: usize },

    /// Too few observations for the requested regression
    #[error("Insufficient data: expected at least {expected} observations, got {actual}")]
    InsufficientData { expected: usize, actual: usize },

    /// A series takes a single value everywhere
    #[error("Invalid input, {0} is constant")]
    ConstantSeries(&'static str),

    /// NaN or infinite value in the input
    #[error("Non-finite value in {series} at index {index}")]
    NonFiniteValue { series: &'static str, index: usize },

    /// User-supplied lag order leaves no degrees of freedom
    #[error("max_lag must be at most {limit} for {nobs} observations, got {max_lag}")]
    MaxLagTooLarge {
        max_lag: usize,
        limit: usize,
        nobs: usize,
    },

    /// No MacKinnon table for this number of variables
    #[error("No MacKinnon table for {n_vars} variables with trend '{trend}'")]
    UnsupportedVariables { n_vars: usize, trend: &'static str },

    /// Invalid tester configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Least squares could not be solved
    #[error("Regression failed: {0}")]
    Regression(String),
}
