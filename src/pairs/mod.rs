//! Pair screening built on the Engle-Granger test.
//!
//! A [`CointegrationTester`] turns one [`PairTask`] into either a
//! [`CointegratedPair`] or nothing. It holds only its configuration, so the
//! caller is free to fan tasks out over any worker pool and collect the
//! non-empty results.
//!
//! ## Quick Example
//!
//! ```rust
//! use coint_screen::pairs::{CointegrationTester, PairTask};
//!
//! let a: Vec<f64> = (0..100).map(|i| i as f64 + (i % 7) as f64 * 0.3).collect();
//! let b: Vec<f64> = (0..100).map(|i| 2.0 * i as f64 + (i % 5) as f64 * 0.4).collect();
//!
//! let tester = CointegrationTester::default();
//! match tester.test(PairTask::new(&a, &b, "A", "B")) {
//!     Ok(Some(pair)) => println!("{}-{} p={:.4}", pair.label_a, pair.label_b, pair.p_value),
//!     Ok(None) => println!("not cointegrated"),
//!     Err(e) => eprintln!("test failed: {e}"),
//! }
//! ```

mod config;
mod tester;

pub use config::CointegrationConfig;
pub use tester::{run_coint_test, CointegratedPair, CointegrationTester, PairTask};
