use crate::testing::{CointError, Trend};
use nalgebra::{DMatrix, DVector};
use single_utilities::traits::FloatOps;

/// Convert a series of any float type to `f64`, mapping failed casts to NaN
pub fn to_f64_vec<T, I>(values: I) -> Vec<f64>
where
    T: FloatOps,
    I: IntoIterator<Item = T>,
{
    values
        .into_iter()
        .map(|v| num_traits::cast::<T, f64>(v).unwrap_or(f64::NAN))
        .collect()
}

/// Power of two that brings the largest magnitude in `values` into `[1, 2)`.
///
/// Multiplying by a power of two is exact, so rescaled data keeps every bit
/// of precision while squares and cross products stay far from overflow and
/// underflow. Returns 1 for empty, all-zero or non-finite input.
pub fn power_of_two_scale(values: &[f64]) -> f64 {
    let largest = values.iter().fold(0.0_f64, |acc, v| acc.max(v.abs()));
    if largest == 0.0 || !largest.is_finite() {
        return 1.0;
    }
    let exponent = (largest.log2().floor() as i32).clamp(-1020, 1020);
    2.0_f64.powi(-exponent)
}

/// Reject NaN and infinite entries, naming the offending series
pub fn ensure_finite(values: &[f64], series: &'static str) -> anyhow::Result<()> {
    match values.iter().position(|v| !v.is_finite()) {
        Some(index) => Err(CointError::NonFiniteValue { series, index }.into()),
        None => Ok(()),
    }
}

pub fn is_constant(values: &[f64]) -> bool {
    match values.first() {
        Some(&first) => values.iter().all(|&v| v == first),
        None => true,
    }
}

/// First differences: `out[t] = x[t + 1] - x[t]`
pub fn diff(x: &[f64]) -> Vec<f64> {
    x.windows(2).map(|w| w[1] - w[0]).collect()
}

/// Deterministic regressors for `nobs` rows: constant, time trend `1..=nobs`
/// and its square, as far as `trend` asks for them.
pub fn trend_columns(nobs: usize, trend: Trend) -> DMatrix<f64> {
    DMatrix::from_fn(nobs, trend.n_terms(), |row, col| {
        let t = (row + 1) as f64;
        t.powi(col as i32)
    })
}

/// Build the Dickey-Fuller regression on the last `nobs` usable observations.
///
/// Returns `(Δx_t, [deterministic..., x_{t-1}, Δx_{t-1}, ..., Δx_{t-lags}])`.
/// The level column therefore sits at index `trend.n_terms()`.
pub fn adf_design(x: &[f64], lags: usize, nobs: usize, trend: Trend) -> (DVector<f64>, DMatrix<f64>) {
    let xdiff = diff(x);
    debug_assert!(nobs + lags <= xdiff.len());

    let first = xdiff.len() - nobs;
    let n_det = trend.n_terms();
    let det = trend_columns(nobs, trend);

    let endog = DVector::from_fn(nobs, |row, _| xdiff[first + row]);
    let exog = DMatrix::from_fn(nobs, n_det + 1 + lags, |row, col| {
        let t = first + row;
        if col < n_det {
            det[(row, col)]
        } else if col == n_det {
            x[t]
        } else {
            xdiff[t - (col - n_det)]
        }
    });
    (endog, exog)
}
