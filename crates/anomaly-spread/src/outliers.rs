//! Outlier classification and removal
//!
//! [`OutlierFilter`] keeps the missing/outlier distinction explicit: every
//! position of a sample gets a [`SampleTag`], and filtering is a separate step
//! on top of classification.

use crate::iqr::{IqrBounds, DEFAULT_IQR_MULTIPLIER};
use anomaly_core::{utils, Error, Result};
use anomaly_quantile::{QuantileEstimator, QuantileMethod};

/// Role of one sample position with respect to a set of fences
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SampleTag {
    /// Finite and within the fences
    Inlier,
    /// Finite and strictly outside the fences
    Outlier,
    /// Not usable (NaN or infinite)
    Missing,
}

impl SampleTag {
    /// Tag a single value against fences
    pub fn of(x: f64, bounds: &IqrBounds) -> Self {
        if utils::is_missing(x) {
            Self::Missing
        } else if bounds.is_outlier(x) {
            Self::Outlier
        } else {
            Self::Inlier
        }
    }

    pub fn is_outlier(self) -> bool {
        self == Self::Outlier
    }

    pub fn is_usable(self) -> bool {
        self == Self::Inlier
    }
}

/// Result of running a filter over a sample
#[derive(Debug, Clone, PartialEq)]
pub struct FilteredSample {
    /// Fences used for classification
    pub bounds: IqrBounds,
    /// One tag per input position
    pub tags: Vec<SampleTag>,
    /// Inliers in input order
    pub cleaned: Vec<f64>,
}

impl FilteredSample {
    pub fn outlier_count(&self) -> usize {
        self.tags.iter().filter(|t| t.is_outlier()).count()
    }

    pub fn missing_count(&self) -> usize {
        self.tags.iter().filter(|t| **t == SampleTag::Missing).count()
    }

    /// Positions (into the original sample) flagged as outliers
    pub fn outlier_positions(&self) -> Vec<usize> {
        self.tags
            .iter()
            .enumerate()
            .filter_map(|(i, t)| t.is_outlier().then_some(i))
            .collect()
    }
}

/// Tukey IQR outlier filter
///
/// Stateless after construction: the same filter can be applied to any number
/// of samples.
#[derive(Debug, Clone, Copy)]
pub struct OutlierFilter<Q = QuantileMethod> {
    k: f64,
    estimator: Q,
}

impl OutlierFilter<QuantileMethod> {
    /// Filter with multiplier `k` and linear-interpolation quartiles
    pub fn new(k: f64) -> Result<Self> {
        Self::with_estimator(k, QuantileMethod::Linear)
    }
}

impl Default for OutlierFilter<QuantileMethod> {
    fn default() -> Self {
        Self {
            k: DEFAULT_IQR_MULTIPLIER,
            estimator: QuantileMethod::Linear,
        }
    }
}

impl<Q: QuantileEstimator> OutlierFilter<Q> {
    /// Filter with multiplier `k` and a custom quartile estimator
    pub fn with_estimator(k: f64, estimator: Q) -> Result<Self> {
        Error::check_multiplier("IQR multiplier", k)?;
        Ok(Self { k, estimator })
    }

    pub fn multiplier(&self) -> f64 {
        self.k
    }

    pub fn estimator(&self) -> &Q {
        &self.estimator
    }

    /// Fences for a sample
    pub fn compute_bounds(&self, sample: &[f64]) -> Result<IqrBounds> {
        IqrBounds::estimate(sample, self.k, &self.estimator)
    }

    /// Per-position tags
    pub fn tag(&self, sample: &[f64]) -> Result<Vec<SampleTag>> {
        let bounds = self.compute_bounds(sample)?;
        Ok(tag_with(sample, &bounds))
    }

    /// Positional outlier flags; missing entries are always `false`
    pub fn classify_outliers(&self, sample: &[f64]) -> Result<Vec<bool>> {
        let bounds = self.compute_bounds(sample)?;
        Ok(sample.iter().map(|&x| bounds.is_outlier(x)).collect())
    }

    /// Drop outliers and missing entries, preserving order
    ///
    /// The result may be empty.
    pub fn filter_outliers(&self, sample: &[f64]) -> Result<Vec<f64>> {
        Ok(self.apply(sample)?.cleaned)
    }

    /// Classify and filter in one pass, keeping the fences and tags around
    pub fn apply(&self, sample: &[f64]) -> Result<FilteredSample> {
        let bounds = self.compute_bounds(sample)?;
        let tags = tag_with(sample, &bounds);
        let cleaned = sample
            .iter()
            .zip(&tags)
            .filter_map(|(&x, t)| t.is_usable().then_some(x))
            .collect::<Vec<_>>();

        let filtered = FilteredSample {
            bounds,
            tags,
            cleaned,
        };
        tracing::debug!(
            total = sample.len(),
            kept = filtered.cleaned.len(),
            outliers = filtered.outlier_count(),
            missing = filtered.missing_count(),
            "filtered sample"
        );
        Ok(filtered)
    }
}

fn tag_with(sample: &[f64], bounds: &IqrBounds) -> Vec<SampleTag> {
    sample.iter().map(|&x| SampleTag::of(x, bounds)).collect()
}

/// Positional outlier flags for multiplier `k`
pub fn classify_outliers(sample: &[f64], k: f64) -> Result<Vec<bool>> {
    OutlierFilter::new(k)?.classify_outliers(sample)
}

/// Remove outliers and missing entries for multiplier `k`
pub fn filter_outliers(sample: &[f64], k: f64) -> Result<Vec<f64>> {
    OutlierFilter::new(k)?.filter_outliers(sample)
}
