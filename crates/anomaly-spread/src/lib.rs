//! Outlier handling and spread measurements for amplitude samples
//!
//! The centerpiece is Tukey's IQR fence:
//!
//! ```text
//! lower = q1 - k * (q3 - q1)
//! upper = q3 + k * (q3 - q1)
//! ```
//!
//! with `k = 1.5` by default. Values strictly outside the fence are outliers.
//! Missing values (`NaN`) are never outliers; they get their own
//! [`SampleTag::Missing`] tag and are dropped by [`filter_outliers`] alongside
//! the outliers.
//!
//! # Examples
//!
//! ```rust
//! use anomaly_spread::{classify_outliers, compute_bounds, filter_outliers};
//!
//! let sample = [1.0, 2.0, 3.0, 4.0, 5.0, 20.0, 6.0, 7.0, 8.0, 30.0];
//!
//! let bounds = compute_bounds(&sample, 1.5).unwrap();
//! assert_eq!(bounds.as_tuple(), (-3.5, 14.5));
//!
//! let flags = classify_outliers(&sample, 1.5).unwrap();
//! assert_eq!(flags.iter().filter(|f| **f).count(), 2);
//!
//! let cleaned = filter_outliers(&sample, 1.5).unwrap();
//! assert_eq!(cleaned, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0]);
//! ```

pub mod iqr;
pub mod moments;
pub mod outliers;

pub use iqr::{compute_bounds, IqrBounds, DEFAULT_IQR_MULTIPLIER};
pub use moments::{excess_kurtosis, skewness};
pub use outliers::{classify_outliers, filter_outliers, FilteredSample, OutlierFilter, SampleTag};
