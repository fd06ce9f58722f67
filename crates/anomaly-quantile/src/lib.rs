//! Percentile estimation for amplitude samples
//!
//! Two estimators are provided:
//!
//! - [`LinearInterpolation`]: interpolates between closest ranks, `h = (n - 1) p`.
//!   This is the conventional definition and the default everywhere.
//! - [`NearestRank`]: picks the order statistic at rank `ceil(n p)`.
//!
//! [`QuantileMethod`] selects between them at runtime (e.g. from configuration)
//! and implements [`QuantileEstimator`] itself.
//!
//! Missing (`NaN`) entries are dropped before ranking.
//!
//! # Example
//!
//! ```rust
//! use anomaly_quantile::{QuantileEstimator, LinearInterpolation};
//!
//! let data = [1.0, 2.0, 3.0, 4.0, 5.0, 20.0, 6.0, 7.0, 8.0, 30.0];
//! let q = LinearInterpolation.quartiles(&data).unwrap();
//! assert_eq!(q, (3.25, 7.75));
//! ```

pub mod estimators;
pub mod traits;

pub use estimators::{LinearInterpolation, NearestRank, QuantileMethod};
pub use traits::QuantileEstimator;
