//! Mean/threshold anomaly model
//!
//! A value is anomalous when it leaves the symmetric band
//! `[mean - threshold, mean + threshold]`. How anomalous is reported as a
//! two-tailed normal p-value of its z-score.

use anomaly_core::{utils, Error, Result};
use statrs::distribution::{ContinuousCDF, Normal};

/// Frozen anomaly model
///
/// The threshold is taken as given; how it was chosen (e.g. three standard
/// deviations) is the caller's policy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnomalyModel {
    mean: f64,
    std_dev: f64,
    threshold: f64,
}

impl AnomalyModel {
    /// Create a model
    ///
    /// All parameters must be finite; `std_dev` and `threshold` must be
    /// non-negative. A zero `std_dev` is accepted, but
    /// [`anomaly_report`](Self::anomaly_report) will refuse to standardize by it.
    pub fn new(mean: f64, std_dev: f64, threshold: f64) -> Result<Self> {
        if !mean.is_finite() {
            return Err(Error::InvalidParameter(format!("mean must be finite, got {mean}")));
        }
        Error::check_multiplier("standard deviation", std_dev)?;
        Error::check_multiplier("threshold", threshold)?;
        Ok(Self {
            mean,
            std_dev,
            threshold,
        })
    }

    pub fn mean(&self) -> f64 {
        self.mean
    }

    pub fn std_dev(&self) -> f64 {
        self.std_dev
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// `mean - threshold`
    pub fn lower_limit(&self) -> f64 {
        self.mean - self.threshold
    }

    /// `mean + threshold`
    pub fn upper_limit(&self) -> f64 {
        self.mean + self.threshold
    }

    /// Whether `value` lies strictly outside `mean ± threshold`
    ///
    /// Values exactly on a limit are not anomalous. NaN is never anomalous.
    pub fn is_anomaly(&self, value: f64) -> bool {
        value > self.upper_limit() || value < self.lower_limit()
    }

    /// Standardized distance from the mean
    pub fn z_score(&self, value: f64) -> Result<f64> {
        if utils::is_missing(value) {
            return Err(Error::non_finite("observed value"));
        }
        if self.std_dev == 0.0 {
            return Err(Error::zero_std_dev("z-score"));
        }
        Ok((value - self.mean) / self.std_dev)
    }

    /// Two-tailed p-value `2 (1 - Φ(|z|))`
    ///
    /// Does not consult [`is_anomaly`](Self::is_anomaly). Fails with
    /// [`Error::DivisionByZero`] when the standard deviation is zero.
    pub fn anomaly_report(&self, value: f64) -> Result<f64> {
        let z = self.z_score(value)?;
        let normal = Normal::new(0.0, 1.0).map_err(|e| {
            Error::Computation(format!("Failed to create normal distribution: {}", e))
        })?;
        let p_value = 2.0 * (1.0 - normal.cdf(z.abs()));
        Ok(p_value.clamp(0.0, 1.0))
    }

    /// Like [`anomaly_report`](Self::anomaly_report), but a zero standard
    /// deviation yields 1.0 at the mean and 0.0 anywhere else
    pub fn anomaly_report_saturating(&self, value: f64) -> Result<f64> {
        if self.std_dev == 0.0 && !utils::is_missing(value) {
            return Ok(if value == self.mean { 1.0 } else { 0.0 });
        }
        self.anomaly_report(value)
    }
}
