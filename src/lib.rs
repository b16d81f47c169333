//! # coint-screen
//!
//! Engle-Granger cointegration screening for pairs of time series, written as a
//! stateless worker task that a parallel pool can call once per candidate pair.
//!
//! The crate carries its own statistical engine: least squares, the Augmented
//! Dickey-Fuller test with automatic lag selection, and MacKinnon's p-values
//! and critical values. On top of it sits a small tester that keeps a pair only
//! when its p-value falls below a significance level.
//!
//! ## Core Features
//!
//! - **Pair screening**: `PairTask` in, `Option<CointegratedPair>` out
//! - **Engle-Granger test**: (statistic, p-value, critical values) for two series
//! - **ADF test**: AIC, BIC or sequential t-stat lag selection
//! - **Generic inputs**: slices and `ndarray` arrays of `f32` or `f64`
//!
//! ## Module Organization
//!
//! - **[`pairs`]**: Configuration and the cointegration tester
//! - **[`testing`]**: Regression, unit-root and cointegration tests, MacKinnon tables

pub mod pairs;
pub mod testing;
