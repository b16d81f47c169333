use serde::{Deserialize, Serialize};
use single_utilities::traits::FloatOps;
use std::collections::HashMap;

pub mod error;
pub mod inference;
pub mod mackinnon;
pub mod regression;

pub mod utils;

pub use error::CointError;

/// Deterministic terms included in a unit-root or cointegrating regression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Trend {
    /// No constant, no trend
    #[serde(rename = "n", alias = "none")]
    None,
    /// Constant only
    #[default]
    #[serde(rename = "c", alias = "constant")]
    Constant,
    /// Constant and linear trend
    #[serde(rename = "ct", alias = "constant_trend")]
    ConstantTrend,
    /// Constant, linear and quadratic trend
    #[serde(rename = "ctt", alias = "constant_quadratic_trend")]
    ConstantQuadraticTrend,
}

impl Trend {
    /// Number of deterministic columns this trend adds to a design matrix
    pub fn n_terms(self) -> usize {
        match self {
            Trend::None => 0,
            Trend::Constant => 1,
            Trend::ConstantTrend => 2,
            Trend::ConstantQuadraticTrend => 3,
        }
    }

    /// Short code used in MacKinnon's tables
    pub fn code(self) -> &'static str {
        match self {
            Trend::None => "n",
            Trend::Constant => "c",
            Trend::ConstantTrend => "ct",
            Trend::ConstantQuadraticTrend => "ctt",
        }
    }

    pub fn has_constant(self) -> bool {
        self != Trend::None
    }
}

/// Information criterion used to pick the ADF lag length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AutoLag {
    #[default]
    #[serde(rename = "aic", alias = "AIC")]
    Aic,
    #[serde(rename = "bic", alias = "BIC")]
    Bic,
    /// Sequential testing from the maximum lag down
    #[serde(rename = "t-stat", alias = "tstat")]
    TStat,
}

/// Critical values of a test statistic at the conventional levels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CriticalValues<T> {
    pub one_pct: T,
    pub five_pct: T,
    pub ten_pct: T,
}

impl<T> CriticalValues<T>
where
    T: FloatOps,
{
    pub fn new(one_pct: T, five_pct: T, ten_pct: T) -> Self {
        CriticalValues {
            one_pct,
            five_pct,
            ten_pct,
        }
    }

    /// Values ordered 1%, 5%, 10%
    pub fn as_array(&self) -> [T; 3] {
        [self.one_pct, self.five_pct, self.ten_pct]
    }
}

#[derive(Debug, Clone)]
pub struct TestResult<T> {
    /// The test statistic value (e.g., ADF t-statistic)
    pub statistic: T,
    /// The p-value of the test
    pub p_value: T,
    /// Critical values at 1%, 5% and 10% (if tabulated)
    pub critical_values: Option<CriticalValues<T>>,
    /// Number of lagged differences in the final ADF regression
    pub used_lag: Option<usize>,
    /// Observations in the final regression
    pub nobs: Option<usize>,
    /// Best information criterion found during lag selection
    pub ic_best: Option<T>,
    /// Additional test-specific information
    pub metadata: HashMap<String, T>,
}

impl<T> TestResult<T>
where
    T: FloatOps,
{
    /// Create a new test result with minimal information
    pub fn new(statistic: T, p_value: T) -> Self {
        TestResult {
            statistic,
            p_value,
            critical_values: None,
            used_lag: None,
            nobs: None,
            ic_best: None,
            metadata: HashMap::new(),
        }
    }

    /// Add critical values to the result
    pub fn with_critical_values(mut self, critical_values: Option<CriticalValues<T>>) -> Self {
        self.critical_values = critical_values;
        self
    }

    /// Record the lag order and sample size of the final regression
    pub fn with_lag(mut self, used_lag: usize, nobs: usize) -> Self {
        self.used_lag = Some(used_lag);
        self.nobs = Some(nobs);
        self
    }

    pub fn with_ic_best(mut self, ic_best: Option<T>) -> Self {
        self.ic_best = ic_best;
        self
    }

    /// Add additional metadata
    pub fn with_metadata(mut self, key: &str, value: T) -> Self {
        self.metadata.insert(key.to_string(), value);
        self
    }

    /// Check if the result is statistically significant at the given threshold
    pub fn is_significant(&self, alpha: T) -> bool {
        self.p_value < alpha
    }

    /// The (statistic, p-value, critical values) triple
    pub fn into_triple(self) -> (T, T, Option<CriticalValues<T>>) {
        (self.statistic, self.p_value, self.critical_values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trend_terms() {
        assert_eq!(Trend::None.n_terms(), 0);
        assert_eq!(Trend::Constant.n_terms(), 1);
        assert_eq!(Trend::ConstantTrend.n_terms(), 2);
        assert_eq!(Trend::ConstantQuadraticTrend.n_terms(), 3);
        assert!(!Trend::None.has_constant());
        assert_eq!(Trend::default(), Trend::Constant);
    }

    #[test]
    fn test_significance_is_strict() {
        let result = TestResult::new(-3.0, 0.05);
        assert!(!result.is_significant(0.05));
        assert!(result.is_significant(0.051));
    }

    #[test]
    fn test_nan_p_value_is_never_significant() {
        let result = TestResult::new(f64::NAN, f64::NAN);
        assert!(!result.is_significant(0.05));
    }
}
