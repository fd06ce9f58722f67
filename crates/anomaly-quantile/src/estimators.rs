//! Quantile estimators

use crate::traits::{check_probability, check_sorted_input, QuantileEstimator};
use anomaly_core::Result;
use serde::{Deserialize, Serialize};

/// Linear interpolation between closest ranks
///
/// With `n` sorted values the quantile at `p` sits at fractional index
/// `h = (n - 1) p`; the result interpolates between `x[floor(h)]` and
/// `x[floor(h) + 1]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LinearInterpolation;

impl QuantileEstimator for LinearInterpolation {
    fn name(&self) -> &'static str {
        "linear"
    }

    fn quantile_sorted(&self, sorted_data: &[f64], p: f64) -> Result<f64> {
        check_probability(p)?;
        check_sorted_input(sorted_data)?;

        let n = sorted_data.len();
        if n == 1 {
            return Ok(sorted_data[0]);
        }

        let h = (n - 1) as f64 * p;
        let lo = h.floor() as usize;
        let hi = (lo + 1).min(n - 1);
        let frac = h - lo as f64;

        let (a, b) = (sorted_data[lo], sorted_data[hi]);
        if a == b {
            return Ok(a);
        }
        let gap = b - a;
        if gap.is_finite() {
            Ok(a + frac * gap)
        } else {
            // neighbours straddle more than f64::MAX
            Ok(a * (1.0 - frac) + b * frac)
        }
    }
}

/// Nearest-rank quantile: the smallest value with at least `p` of the
/// sample at or below it
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NearestRank;

impl QuantileEstimator for NearestRank {
    fn name(&self) -> &'static str {
        "nearest-rank"
    }

    fn quantile_sorted(&self, sorted_data: &[f64], p: f64) -> Result<f64> {
        check_probability(p)?;
        check_sorted_input(sorted_data)?;

        let n = sorted_data.len();
        let rank = ((n as f64 * p).ceil() as usize).clamp(1, n);
        Ok(sorted_data[rank - 1])
    }
}

/// Runtime selection of a quantile estimator
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuantileMethod {
    /// [`LinearInterpolation`]
    #[default]
    Linear,
    /// [`NearestRank`]
    NearestRank,
}

impl QuantileEstimator for QuantileMethod {
    fn name(&self) -> &'static str {
        match self {
            Self::Linear => LinearInterpolation.name(),
            Self::NearestRank => NearestRank.name(),
        }
    }

    fn quantile_sorted(&self, sorted_data: &[f64], p: f64) -> Result<f64> {
        match self {
            Self::Linear => LinearInterpolation.quantile_sorted(sorted_data, p),
            Self::NearestRank => NearestRank.quantile_sorted(sorted_data, p),
        }
    }
}
