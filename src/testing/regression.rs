//! Ordinary least squares for the unit-root and cointegrating regressions.
//!
//! Parameters are solved through the SVD pseudo-inverse so that rank-deficient
//! designs (e.g. a constant regressor next to the intercept) still produce a
//! minimum-norm solution instead of failing.

use crate::testing::CointError;
use nalgebra::{DMatrix, DVector};
use std::f64::consts::PI;

/// Relative cut-off below which singular values are treated as zero
const PINV_RCOND: f64 = 1e-15;

/// Fitted OLS model.
#[derive(Debug, Clone)]
pub struct OlsResults {
    pub params: DVector<f64>,
    /// Standard errors of the parameters
    pub bse: DVector<f64>,
    pub tvalues: DVector<f64>,
    pub resid: DVector<f64>,
    /// Sum of squared residuals
    pub ssr: f64,
    pub nobs: usize,
    /// Numerical rank of the design matrix
    pub rank: usize,
    pub df_resid: f64,
    /// Centred R² when the design carries a constant, uncentred otherwise
    pub rsquared: f64,
    /// Gaussian log-likelihood
    pub llf: f64,
}

impl OlsResults {
    /// Akaike information criterion
    pub fn aic(&self) -> f64 {
        -2.0 * self.llf + 2.0 * self.rank as f64
    }

    /// Bayesian information criterion
    pub fn bic(&self) -> f64 {
        -2.0 * self.llf + (self.nobs as f64).ln() * self.rank as f64
    }
}

/// Fit `endog = exog * params + e` by least squares.
///
/// # Arguments
///
/// * `endog` - Dependent variable, one entry per row of `exog`
/// * `exog` - Design matrix (observations × regressors)
/// * `has_constant` - Whether `exog` contains an intercept column, which
///   selects the centred R²
pub fn ols(
    endog: &DVector<f64>,
    exog: &DMatrix<f64>,
    has_constant: bool,
) -> anyhow::Result<OlsResults> {
    let nobs = exog.nrows();
    if nobs == 0 || exog.ncols() == 0 {
        return Err(CointError::Regression("design matrix is empty".to_string()).into());
    }
    if endog.len() != nobs {
        return Err(CointError::Regression(format!(
            "endog has {} rows but exog has {}",
            endog.len(),
            nobs
        ))
        .into());
    }

    let svd = exog.clone().svd(true, true);
    let s_max = svd.singular_values.iter().cloned().fold(0.0_f64, f64::max);
    let rank_tol = s_max * nobs.max(exog.ncols()) as f64 * f64::EPSILON;
    let rank = svd
        .singular_values
        .iter()
        .filter(|&&s| s > rank_tol)
        .count();

    let pinv = svd
        .pseudo_inverse(PINV_RCOND * s_max)
        .map_err(|e| CointError::Regression(e.to_string()))?;

    let params = &pinv * endog;
    let resid = endog - exog * &params;
    let ssr = resid.norm_squared();
    let df_resid = nobs as f64 - rank as f64;
    let scale = ssr / df_resid;

    let normalized_cov = &pinv * pinv.transpose();
    let bse = DVector::from_iterator(
        params.len(),
        (0..params.len()).map(|i| (normalized_cov[(i, i)] * scale).sqrt()),
    );
    let tvalues = params.component_div(&bse);

    let tss = if has_constant {
        let mean = endog.mean();
        endog.iter().map(|y| (y - mean).powi(2)).sum::<f64>()
    } else {
        endog.norm_squared()
    };
    let rsquared = 1.0 - ssr / tss;

    let n = nobs as f64;
    let llf = -n / 2.0 * ((2.0 * PI).ln() + (ssr / n).ln() + 1.0);

    Ok(OlsResults {
        params,
        bse,
        tvalues,
        resid,
        ssr,
        nobs,
        rank,
        df_resid,
        rsquared,
        llf,
    })
}
