//! Normality diagnostic for cleaned samples
//!
//! The z-score p-value is only meaningful if the cleaned history is roughly
//! normal. The Jarque-Bera test checks that from skewness and excess kurtosis:
//!
//! ```text
//! JB = n / 6 * (S^2 + K^2 / 4)  ~  chi^2(2)
//! ```

use anomaly_core::{Error, Result};
use anomaly_spread::{excess_kurtosis, skewness};
use statrs::distribution::{ChiSquared, ContinuousCDF};

/// Outcome of a Jarque-Bera test
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalityTest {
    pub sample_size: usize,
    pub skewness: f64,
    pub excess_kurtosis: f64,
    pub statistic: f64,
    pub p_value: f64,
}

impl NormalityTest {
    /// Run the test; needs at least four finite values
    pub fn jarque_bera(sample: &[f64]) -> Result<Self> {
        let s = skewness(sample)?;
        let k = excess_kurtosis(sample)?;
        let n = sample.len() as f64;
        let statistic = n / 6.0 * (s * s + k * k / 4.0);

        let chi2 = ChiSquared::new(2.0).map_err(|e| {
            Error::Computation(format!("Failed to create chi-squared distribution: {}", e))
        })?;
        let p_value = (1.0 - chi2.cdf(statistic)).clamp(0.0, 1.0);

        Ok(Self {
            sample_size: sample.len(),
            skewness: s,
            excess_kurtosis: k,
            statistic,
            p_value,
        })
    }

    /// Whether normality is not rejected at significance `alpha`
    pub fn is_normal(&self, alpha: f64) -> bool {
        self.p_value > alpha
    }
}
