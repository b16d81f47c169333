use crate::testing::utils::to_f64_vec;
use crate::testing::{AutoLag, TestResult, Trend};
use ndarray::{ArrayBase, Data, Ix1};
use single_utilities::traits::FloatOps;

pub mod cointegration;

pub mod unit_root;

/// Time-series tests available on any one-dimensional float sequence.
///
/// Values are converted to `f64` before testing, so `f32` series are
/// accepted as well. The two sides of [`coint_test`](Self::coint_test) may
/// use different containers, e.g. a slice against an `ndarray` view.
pub trait SeriesStatTests<T>
where
    T: FloatOps,
{
    /// Copy of the series as `f64` values
    fn to_f64_series(&self) -> Vec<f64>;

    /// Augmented Dickey-Fuller test on this series.
    fn adf_test(
        &self,
        trend: Trend,
        max_lag: Option<usize>,
        autolag: Option<AutoLag>,
    ) -> anyhow::Result<TestResult<f64>> {
        unit_root::adfuller(&self.to_f64_series(), trend, max_lag, autolag)
    }

    /// Engle-Granger test with this series as the dependent variable.
    fn coint_test<O>(
        &self,
        other: &O,
        trend: Trend,
        max_lag: Option<usize>,
        autolag: Option<AutoLag>,
    ) -> anyhow::Result<TestResult<f64>>
    where
        O: SeriesStatTests<T> + ?Sized,
    {
        let y0 = self.to_f64_series();
        let y1 = other.to_f64_series();
        cointegration::engle_granger(&y0, &y1, trend, max_lag, autolag)
    }
}

impl<T> SeriesStatTests<T> for [T]
where
    T: FloatOps,
{
    fn to_f64_series(&self) -> Vec<f64> {
        to_f64_vec(self.iter().copied())
    }
}

impl<T, S> SeriesStatTests<T> for ArrayBase<S, Ix1>
where
    T: FloatOps,
    S: Data<Elem = T>,
{
    fn to_f64_series(&self) -> Vec<f64> {
        to_f64_vec(self.iter().copied())
    }
}
