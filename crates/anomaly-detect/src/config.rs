//! Detection configuration

use anomaly_core::{Error, Result};
use anomaly_quantile::QuantileMethod;
use anomaly_spread::DEFAULT_IQR_MULTIPLIER;
use serde::{Deserialize, Serialize};

/// Conventional "three sigma" threshold multiplier
pub const DEFAULT_SIGMA_MULTIPLIER: f64 = 3.0;

/// Significance level for the normality diagnostic
pub const DEFAULT_NORMALITY_ALPHA: f64 = 0.05;

/// How the anomaly threshold is derived from the standard deviation
///
/// `threshold = sigma_multiplier * std_dev`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThresholdPolicy {
    pub sigma_multiplier: f64,
}

impl ThresholdPolicy {
    pub fn new(sigma_multiplier: f64) -> Result<Self> {
        Error::check_multiplier("sigma multiplier", sigma_multiplier)?;
        Ok(Self { sigma_multiplier })
    }

    pub fn threshold(&self, std_dev: f64) -> f64 {
        self.sigma_multiplier * std_dev
    }
}

impl Default for ThresholdPolicy {
    fn default() -> Self {
        Self {
            sigma_multiplier: DEFAULT_SIGMA_MULTIPLIER,
        }
    }
}

/// What a detection run does when the cleaned history has zero spread
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DegeneratePolicy {
    /// p-value 1 at the mean, 0 anywhere else
    #[default]
    Saturate,
    /// Fail with [`Error::DivisionByZero`]
    Reject,
}

/// Parameters of a detection run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectionConfig {
    /// Tukey fence multiplier `k`
    pub iqr_multiplier: f64,
    /// Threshold in standard deviations
    pub sigma_multiplier: f64,
    /// Quartile estimator used for the fences
    pub quantile_method: QuantileMethod,
    /// Minimum number of values left after filtering
    pub min_samples: usize,
    /// Behaviour for a zero standard deviation
    pub degenerate: DegeneratePolicy,
    /// Significance level of the normality diagnostic
    pub normality_alpha: f64,
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            iqr_multiplier: DEFAULT_IQR_MULTIPLIER,
            sigma_multiplier: DEFAULT_SIGMA_MULTIPLIER,
            quantile_method: QuantileMethod::Linear,
            min_samples: 1,
            degenerate: DegeneratePolicy::Saturate,
            normality_alpha: DEFAULT_NORMALITY_ALPHA,
        }
    }
}

impl DetectionConfig {
    /// Check every field, returning the first problem found
    pub fn validate(&self) -> Result<()> {
        Error::check_multiplier("IQR multiplier", self.iqr_multiplier)?;
        Error::check_multiplier("sigma multiplier", self.sigma_multiplier)?;
        if self.min_samples == 0 {
            return Err(Error::InvalidParameter(
                "min_samples must be at least 1".to_string(),
            ));
        }
        if !(self.normality_alpha > 0.0 && self.normality_alpha < 1.0) {
            return Err(Error::InvalidParameter(format!(
                "normality_alpha must be in (0, 1), got {}",
                self.normality_alpha
            )));
        }
        Ok(())
    }

    pub fn threshold_policy(&self) -> ThresholdPolicy {
        ThresholdPolicy {
            sigma_multiplier: self.sigma_multiplier,
        }
    }

    /// Parse and validate a JSON document; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| Error::InvalidInput(format!("detection config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| Error::Computation(format!("serializing detection config: {e}")))
    }
}
