//! Distribution summary of a cleaned sample

use crate::config::ThresholdPolicy;
use crate::model::AnomalyModel;
use anomaly_core::{utils, Error, Result};

/// Mean, population standard deviation and threshold of a cleaned sample
///
/// Computed once per run and frozen afterwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DistributionSummary {
    count: usize,
    mean: f64,
    std_dev: f64,
    threshold: f64,
}

impl DistributionSummary {
    /// Summarize a cleaned sample
    ///
    /// An empty sample is [`Error::InsufficientData`] rather than a NaN mean.
    /// The sample must not contain missing values.
    pub fn from_sample(cleaned: &[f64], policy: &ThresholdPolicy) -> Result<Self> {
        if cleaned.is_empty() {
            return Err(Error::InsufficientData {
                expected: 1,
                actual: 0,
            });
        }
        if cleaned.iter().any(|x| utils::is_missing(*x)) {
            return Err(Error::non_finite("cleaned sample"));
        }

        let mean = utils::mean(cleaned);
        let std_dev = utils::population_std_dev(cleaned);
        if !mean.is_finite() || !std_dev.is_finite() {
            return Err(Error::Computation(format!(
                "summary overflowed: mean {mean}, std {std_dev}"
            )));
        }

        Ok(Self {
            count: cleaned.len(),
            mean,
            std_dev,
            threshold: policy.threshold(std_dev),
        })
    }

    /// Number of values summarized
    pub fn count(&self) -> usize {
        self.count
    }

    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// Population standard deviation
    pub fn std_dev(&self) -> f64 {
        self.std_dev
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Whether the sample had no spread at all
    pub fn is_degenerate(&self) -> bool {
        self.std_dev == 0.0
    }

    /// Anomaly model over this summary
    pub fn model(&self) -> Result<AnomalyModel> {
        AnomalyModel::new(self.mean, self.std_dev, self.threshold)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_summary_of_uniform_run() {
        let data: Vec<f64> = (1..=10).map(f64::from).collect();
        let policy = ThresholdPolicy::default();
        let summary = DistributionSummary::from_sample(&data, &policy).unwrap();
        assert_eq!(summary.count(), 10);
        assert_relative_eq!(summary.mean(), 5.5);
        assert_relative_eq!(summary.std_dev(), 2.8722813232690143, epsilon = 1e-12);
        assert_relative_eq!(
            summary.threshold(),
            3.0 * 2.8722813232690143,
            epsilon = 1e-12
        );
        assert!(!summary.is_degenerate());
    }

    #[test]
    fn test_custom_policy() {
        let data = [2.0, 4.0];
        let policy = ThresholdPolicy::new(2.0).unwrap();
        let summary = DistributionSummary::from_sample(&data, &policy).unwrap();
        assert_eq!(summary.std_dev(), 1.0);
        assert_eq!(summary.threshold(), 2.0);
    }

    #[test]
    fn test_empty_sample_is_insufficient() {
        assert!(matches!(
            DistributionSummary::from_sample(&[], &ThresholdPolicy::default()),
            Err(Error::InsufficientData {
                expected: 1,
                actual: 0,
            })
        ));
    }

    #[test]
    fn test_missing_values_rejected() {
        let policy = ThresholdPolicy::default();
        assert!(DistributionSummary::from_sample(&[1.0, f64::NAN], &policy).is_err());
    }

    #[test]
    fn test_constant_sample_is_degenerate() {
        let policy = ThresholdPolicy::default();
        let summary = DistributionSummary::from_sample(&[7.0; 5], &policy).unwrap();
        assert!(summary.is_degenerate());
        assert_eq!(summary.threshold(), 0.0);
        assert!(summary.model().is_ok());
    }
}
