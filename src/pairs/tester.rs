//! Worker task that screens a single pair for cointegration.

use crate::pairs::config::CointegrationConfig;
use crate::testing::inference::SeriesStatTests;
use serde::Serialize;
use single_utilities::traits::FloatOps;
use tracing::debug;

/// One unit of work: two pre-aligned series and the labels identifying them.
#[derive(Debug, Clone, Copy)]
pub struct PairTask<'a, T, L> {
    pub series_a: &'a [T],
    pub series_b: &'a [T],
    pub label_a: L,
    pub label_b: L,
}

impl<'a, T, L> PairTask<'a, T, L> {
    pub fn new(series_a: &'a [T], series_b: &'a [T], label_a: L, label_b: L) -> Self {
        PairTask {
            series_a,
            series_b,
            label_a,
            label_b,
        }
    }
}

/// A pair whose Engle-Granger p-value fell below the significance level.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CointegratedPair<L> {
    pub label_a: L,
    pub label_b: L,
    pub p_value: f64,
}

/// Stateless Engle-Granger screen.
///
/// `test` borrows `self` immutably and holds no interior state, so a single
/// tester can be shared by reference across worker threads.
#[derive(Debug, Clone, Default)]
pub struct CointegrationTester {
    config: CointegrationConfig,
}

impl CointegrationTester {
    /// Create a tester after validating `config`.
    pub fn new(config: CointegrationConfig) -> anyhow::Result<Self> {
        config.validate()?;
        Ok(CointegrationTester { config })
    }

    /// The validated configuration this tester screens with
    pub fn config(&self) -> &CointegrationConfig {
        &self.config
    }

    /// Run the Engle-Granger test with `series_a` as the dependent series.
    ///
    /// Returns `Ok(Some(..))` when the p-value is below the configured
    /// significance, `Ok(None)` otherwise (including a NaN p-value). Failures
    /// of the underlying test are returned unchanged. Labels are moved into
    /// the result without being inspected.
    pub fn test<T, L>(&self, task: PairTask<'_, T, L>) -> anyhow::Result<Option<CointegratedPair<L>>>
    where
        T: FloatOps,
    {
        let result = task.series_a.coint_test(
            task.series_b,
            self.config.trend,
            self.config.max_lag,
            self.config.autolag,
        )?;
        let p_value = result.p_value;
        let qualifies = result.is_significant(self.config.significance);

        debug!(
            nobs = task.series_a.len(),
            p_value,
            significance = self.config.significance,
            qualifies,
            "Pair screened"
        );

        Ok(qualifies.then(|| CointegratedPair {
            label_a: task.label_a,
            label_b: task.label_b,
            p_value,
        }))
    }
}

/// Screen one pair with the default configuration (5% significance).
pub fn run_coint_test<T, L>(task: PairTask<'_, T, L>) -> anyhow::Result<Option<CointegratedPair<L>>>
where
    T: FloatOps,
{
    CointegrationTester::default().test(task)
}
