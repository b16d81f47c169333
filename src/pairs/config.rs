//! Configuration for the cointegration tester

use crate::testing::{AutoLag, CointError, Trend};
use serde::{Deserialize, Serialize};

/// Settings shared by every pair a tester screens.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CointegrationConfig {
    /// A pair qualifies when its p-value is strictly below this level
    #[serde(default = "default_significance")]
    pub significance: f64,

    /// Deterministic terms in the cointegrating regression
    #[serde(default)]
    pub trend: Trend,

    /// Largest lag for the residual ADF test (None = Schwert's rule)
    #[serde(default)]
    pub max_lag: Option<usize>,

    /// Lag selection for the residual ADF test (None = always use max_lag)
    #[serde(default = "default_autolag")]
    pub autolag: Option<AutoLag>,
}

// Default value functions for serde
fn default_significance() -> f64 {
    0.05
}
fn default_autolag() -> Option<AutoLag> {
    Some(AutoLag::Aic)
}

impl Default for CointegrationConfig {
    fn default() -> Self {
        Self {
            significance: default_significance(),
            trend: Trend::default(),
            max_lag: None,
            autolag: default_autolag(),
        }
    }
}

impl CointegrationConfig {
    /// Default config with a different significance level
    pub fn with_significance(significance: f64) -> Self {
        Self {
            significance,
            ..Default::default()
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        if !self.significance.is_finite() || self.significance <= 0.0 || self.significance >= 1.0 {
            return Err(CointError::InvalidConfig(format!(
                "significance must be strictly between 0.0 and 1.0, got {}",
                self.significance
            ))
            .into());
        }
        Ok(())
    }
}
