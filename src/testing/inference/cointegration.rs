//! Engle-Granger two-step cointegration test.
//!
//! Step one regresses `y0` on `y1` (plus deterministic terms). Step two runs an
//! ADF test without deterministic terms on the residuals of that regression.
//! The residual statistic follows a different distribution than a plain ADF
//! statistic, so the p-value comes from MacKinnon's two-variable surfaces.
//!
//! The test is not symmetric: `engle_granger(a, b)` and `engle_granger(b, a)`
//! use different cointegrating regressions and usually report slightly
//! different statistics.

use crate::testing::inference::unit_root::{adfuller, min_adf_observations};
use crate::testing::mackinnon::{mackinnoncrit, mackinnonp};
use crate::testing::regression::ols;
use crate::testing::utils::{ensure_finite, is_constant, power_of_two_scale, trend_columns};
use crate::testing::{AutoLag, CointError, TestResult, Trend};
use nalgebra::{DMatrix, DVector};
use tracing::{debug, warn};

/// Variables in the cointegrating system (`y0` and `y1`)
const N_VARS: usize = 2;

/// R² above which the two series count as perfectly collinear
fn collinearity_threshold() -> f64 {
    1.0 - 100.0 * f64::EPSILON.sqrt()
}

/// Fewest observations accepted by [`engle_granger`] for a given trend.
///
/// The cointegrating regression needs one residual degree of freedom and the
/// residual ADF regression needs at least three points.
pub fn min_observations(trend: Trend) -> usize {
    (trend.n_terms() + 2).max(min_adf_observations(Trend::None))
}

/// Test the null hypothesis of no cointegration between `y0` and `y1`.
///
/// # Arguments
///
/// * `y0` - Dependent series of the cointegrating regression
/// * `y1` - Regressor series, same length as `y0`
/// * `trend` - Deterministic terms in the cointegrating regression
/// * `max_lag` - Largest lag for the residual ADF test; `None` uses Schwert's rule
/// * `autolag` - Lag selection for the residual ADF test
///
/// # Returns
///
/// `TestResult` whose `statistic`, `p_value` and `critical_values` form the
/// classic (t-statistic, p-value, critical values) triple. Critical values are
/// `None` for [`Trend::None`], which has no 2010 table. The slope of the
/// cointegrating regression is stored under the `hedge_ratio` metadata key and
/// its R² under `rsquared`.
pub fn engle_granger(
    y0: &[f64],
    y1: &[f64],
    trend: Trend,
    max_lag: Option<usize>,
    autolag: Option<AutoLag>,
) -> anyhow::Result<TestResult<f64>> {
    if y0.len() != y1.len() {
        return Err(CointError::LengthMismatch {
            left: y0.len(),
            right: y1.len(),
        }
        .into());
    }
    let nobs = y0.len();
    let required = min_observations(trend);
    if nobs < required {
        return Err(CointError::InsufficientData {
            expected: required,
            actual: nobs,
        }
        .into());
    }
    ensure_finite(y0, "y0")?;
    ensure_finite(y1, "y1")?;
    if is_constant(y0) {
        return Err(CointError::ConstantSeries("y0").into());
    }
    if is_constant(y1) {
        return Err(CointError::ConstantSeries("y1").into());
    }

    // Exact power-of-two rescaling keeps sums of squares representable for
    // very large or very small magnitudes
    let scale0 = power_of_two_scale(y0);
    let scale1 = power_of_two_scale(y1);

    let det = trend_columns(nobs, trend);
    let exog = DMatrix::from_fn(nobs, 1 + det.ncols(), |row, col| {
        if col == 0 { y1[row] * scale1 } else { det[(row, col - 1)] }
    });
    let endog = DVector::from_fn(nobs, |row, _| y0[row] * scale0);
    let first_stage = ols(&endog, &exog, trend.has_constant())?;
    if !first_stage.ssr.is_finite() || !first_stage.rsquared.is_finite() {
        return Err(CointError::Regression(format!(
            "cointegrating regression is not finite (ssr = {}, R² = {})",
            first_stage.ssr, first_stage.rsquared
        ))
        .into());
    }
    let hedge_ratio = first_stage.params[0] * scale1 / scale0;

    let mut result = if first_stage.rsquared >= collinearity_threshold() {
        warn!(
            rsquared = first_stage.rsquared,
            "Series are (almost) perfectly collinear; cointegration test is not reliable"
        );
        let statistic = f64::NEG_INFINITY;
        TestResult::new(statistic, mackinnonp(statistic, trend, N_VARS)?)
    } else {
        let resid: Vec<f64> = first_stage.resid.iter().map(|r| r / scale0).collect();
        let adf = adfuller(&resid, Trend::None, max_lag, autolag)?;
        let statistic = adf.statistic;
        let mut result = TestResult::new(statistic, mackinnonp(statistic, trend, N_VARS)?)
            .with_ic_best(adf.ic_best);
        if let (Some(lag), Some(adf_nobs)) = (adf.used_lag, adf.nobs) {
            result = result.with_lag(lag, adf_nobs);
        }
        result
    };

    let critical_values = match trend {
        Trend::None => None,
        _ => Some(mackinnoncrit(N_VARS, trend, Some(nobs - 1))?),
    };
    result = result
        .with_critical_values(critical_values)
        .with_metadata("hedge_ratio", hedge_ratio)
        .with_metadata("rsquared", first_stage.rsquared);

    debug!(
        nobs,
        trend = trend.code(),
        statistic = result.statistic,
        p_value = result.p_value,
        "Engle-Granger test complete"
    );
    Ok(result)
}
