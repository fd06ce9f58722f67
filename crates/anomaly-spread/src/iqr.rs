//! Interquartile Range (IQR) fences

use anomaly_core::{utils, Error, Result};
use anomaly_quantile::{LinearInterpolation, QuantileEstimator};

/// Conventional Tukey multiplier
pub const DEFAULT_IQR_MULTIPLIER: f64 = 1.5;

/// Tukey fences derived from the quartiles of a sample
///
/// Invariant: `lower <= upper`. Fences saturate to `±inf` when the
/// spread of a finite sample exceeds the `f64` range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IqrBounds {
    q1: f64,
    q3: f64,
    k: f64,
    lower: f64,
    upper: f64,
}

impl IqrBounds {
    /// Build fences from already computed quartiles
    pub fn from_quartiles(q1: f64, q3: f64, k: f64) -> Result<Self> {
        Error::check_multiplier("IQR multiplier", k)?;
        if !q1.is_finite() || !q3.is_finite() {
            return Err(Error::non_finite("quartiles"));
        }
        if q1 > q3 {
            return Err(Error::InvalidInput(format!(
                "first quartile {q1} exceeds third quartile {q3}"
            )));
        }

        // inf * 0 would poison both fences
        let cutoff = if k == 0.0 { 0.0 } else { (q3 - q1) * k };
        Ok(Self {
            q1,
            q3,
            k,
            lower: q1 - cutoff,
            upper: q3 + cutoff,
        })
    }

    /// Estimate fences from a sample with the given quantile estimator
    ///
    /// Missing entries are skipped. Fails with [`Error::InvalidInput`] when no
    /// finite value is left.
    pub fn estimate<Q: QuantileEstimator>(sample: &[f64], k: f64, estimator: &Q) -> Result<Self> {
        Error::check_multiplier("IQR multiplier", k)?;
        let sorted = utils::sorted_finite(sample);
        if sorted.is_empty() {
            return Err(Error::no_finite_values("IQR bounds"));
        }

        let q1 = estimator.quantile_sorted(&sorted, 0.25)?;
        let q3 = estimator.quantile_sorted(&sorted, 0.75)?;
        let bounds = Self::from_quartiles(q1, q3, k)?;

        tracing::debug!(
            estimator = estimator.name(),
            n = sorted.len(),
            q1,
            q3,
            lower = bounds.lower,
            upper = bounds.upper,
            "computed IQR fences"
        );
        Ok(bounds)
    }

    /// Lower fence
    pub fn lower(&self) -> f64 {
        self.lower
    }

    /// Upper fence
    pub fn upper(&self) -> f64 {
        self.upper
    }

    /// First quartile
    pub fn q1(&self) -> f64 {
        self.q1
    }

    /// Third quartile
    pub fn q3(&self) -> f64 {
        self.q3
    }

    /// Interquartile range
    pub fn iqr(&self) -> f64 {
        self.q3 - self.q1
    }

    /// Multiplier the fences were built with
    pub fn multiplier(&self) -> f64 {
        self.k
    }

    /// `(lower, upper)`
    pub fn as_tuple(&self) -> (f64, f64) {
        (self.lower, self.upper)
    }

    /// Whether a finite value lies strictly outside the fences
    ///
    /// Missing values are never outliers.
    pub fn is_outlier(&self, x: f64) -> bool {
        !utils::is_missing(x) && (x < self.lower || x > self.upper)
    }

    /// Whether a value is finite and within the closed fence interval
    pub fn contains(&self, x: f64) -> bool {
        !utils::is_missing(x) && self.lower <= x && x <= self.upper
    }
}

/// Tukey fences using linear-interpolation quartiles
///
/// # Examples
///
/// ```rust
/// use anomaly_spread::compute_bounds;
///
/// let b = compute_bounds(&[42.0], 1.5).unwrap();
/// assert_eq!(b.as_tuple(), (42.0, 42.0));
/// ```
pub fn compute_bounds(sample: &[f64], k: f64) -> Result<IqrBounds> {
    IqrBounds::estimate(sample, k, &LinearInterpolation)
}
