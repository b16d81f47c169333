//! Augmented Dickey-Fuller unit-root test.
//!
//! The test regresses the first difference of a series on its lagged level,
//! a number of lagged differences and optional deterministic terms. The
//! t-statistic of the lagged level is compared against MacKinnon's
//! distribution: large negative values reject the unit root.

use crate::testing::mackinnon::{mackinnoncrit, mackinnonp};
use crate::testing::regression::{ols, OlsResults};
use crate::testing::utils::{adf_design, ensure_finite, is_constant, power_of_two_scale};
use crate::testing::{AutoLag, CointError, TestResult, Trend};
use tracing::trace;

/// One-sided 5% normal quantile used by the sequential t-stat lag search
const TSTAT_STOP: f64 = 1.6448536269514722;

/// Default maximum lag, Schwert's rule `ceil(12 * (n / 100)^(1/4))`
fn schwert_max_lag(nobs: usize) -> usize {
    (12.0 * (nobs as f64 / 100.0).powf(0.25)).ceil() as usize
}

/// Largest admissible lag for `nobs` observations.
///
/// Caps at `nobs / 2 - ntrend - 1` and additionally keeps one residual
/// degree of freedom in every regression of the lag search.
fn lag_limit(nobs: usize, trend: Trend) -> Option<usize> {
    let ntrend = trend.n_terms() as isize;
    let n = nobs as isize;
    let half_cap = n / 2 - ntrend - 1;
    let df_cap = (n - 3 - ntrend).div_euclid(2);
    let limit = half_cap.min(df_cap);
    (limit >= 0).then_some(limit as usize)
}

/// Fewest observations for which [`adfuller`] can run with this trend
pub fn min_adf_observations(trend: Trend) -> usize {
    let ntrend = trend.n_terms();
    (2 * ntrend + 2).max(ntrend + 3)
}

fn resolve_max_lag(nobs: usize, trend: Trend, max_lag: Option<usize>) -> anyhow::Result<usize> {
    let limit = lag_limit(nobs, trend).ok_or(CointError::InsufficientData {
        expected: min_adf_observations(trend),
        actual: nobs,
    })?;

    match max_lag {
        Some(requested) if requested > limit => Err(CointError::MaxLagTooLarge {
            max_lag: requested,
            limit,
            nobs,
        }
        .into()),
        Some(requested) => Ok(requested),
        None => Ok(schwert_max_lag(nobs).min(limit)),
    }
}

/// Pick the lag order by fitting every candidate on a common sample.
///
/// Returns `(best_lag, best_ic)`.
fn select_lag(
    x: &[f64],
    trend: Trend,
    max_lag: usize,
    method: AutoLag,
) -> anyhow::Result<(usize, f64)> {
    let common_nobs = x.len() - 1 - max_lag;
    let fits: Vec<OlsResults> = (0..=max_lag)
        .map(|lag| {
            let (endog, exog) = adf_design(x, lag, common_nobs, trend);
            ols(&endog, &exog, trend.has_constant())
        })
        .collect::<anyhow::Result<_>>()?;

    let selected = match method {
        AutoLag::Aic | AutoLag::Bic => {
            let ic = |fit: &OlsResults| match method {
                AutoLag::Bic => fit.bic(),
                _ => fit.aic(),
            };
            let mut best = (0, ic(&fits[0]));
            for (lag, fit) in fits.iter().enumerate().skip(1) {
                let value = ic(fit);
                if value < best.1 {
                    best = (lag, value);
                }
            }
            best
        }
        AutoLag::TStat => {
            let mut best = (max_lag, 0.0);
            for lag in (0..=max_lag).rev() {
                let fit = &fits[lag];
                let last = fit.tvalues[fit.tvalues.len() - 1].abs();
                best = (lag, last);
                if last >= TSTAT_STOP {
                    break;
                }
            }
            best
        }
    };

    trace!(
        method = ?method,
        max_lag,
        best_lag = selected.0,
        ic = selected.1,
        "ADF lag selection"
    );
    Ok(selected)
}

/// Augmented Dickey-Fuller test for a unit root in `x`.
///
/// # Arguments
///
/// * `x` - The series to test
/// * `trend` - Deterministic terms in the test regression
/// * `max_lag` - Largest number of lagged differences; `None` uses Schwert's rule
/// * `autolag` - Lag selection method; `None` uses exactly `max_lag` lags
///
/// # Returns
///
/// `TestResult` with the ADF statistic, the MacKinnon p-value (one variable),
/// 1%/5%/10% critical values, the lag order used and the regression size.
pub fn adfuller(
    x: &[f64],
    trend: Trend,
    max_lag: Option<usize>,
    autolag: Option<AutoLag>,
) -> anyhow::Result<TestResult<f64>> {
    ensure_finite(x, "x")?;
    if x.is_empty() {
        return Err(CointError::InsufficientData {
            expected: min_adf_observations(trend),
            actual: 0,
        }
        .into());
    }
    if is_constant(x) {
        return Err(CointError::ConstantSeries("x").into());
    }

    let max_lag = resolve_max_lag(x.len(), trend, max_lag)?;

    let scale = power_of_two_scale(x);
    let x: Vec<f64> = x.iter().map(|v| v * scale).collect();

    let (used_lag, ic_best) = match autolag {
        Some(method) => {
            let (lag, ic) = select_lag(&x, trend, max_lag, method)?;
            let ic = match method {
                // Rescaling by `scale` shifts every log-likelihood by `nobs * ln(scale)`
                AutoLag::Aic | AutoLag::Bic => {
                    ic - 2.0 * (x.len() - 1 - max_lag) as f64 * scale.ln()
                }
                AutoLag::TStat => ic,
            };
            (lag, Some(ic))
        }
        None => (max_lag, None),
    };

    let nobs = x.len() - 1 - used_lag;
    let (endog, exog) = adf_design(&x, used_lag, nobs, trend);
    let fit = ols(&endog, &exog, trend.has_constant())?;

    let statistic = fit.tvalues[trend.n_terms()];
    let p_value = mackinnonp(statistic, trend, 1)?;
    let critical_values = mackinnoncrit(1, trend, Some(nobs))?;

    Ok(TestResult::new(statistic, p_value)
        .with_critical_values(Some(critical_values))
        .with_lag(used_lag, nobs)
        .with_ic_best(ic_best))
}
