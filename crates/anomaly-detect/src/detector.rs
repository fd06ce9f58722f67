//! One detection run: filter the history, summarize it, judge the latest value

use crate::config::{DegeneratePolicy, DetectionConfig};
use crate::model::AnomalyModel;
use crate::normality::NormalityTest;
use crate::summary::DistributionSummary;
use anomaly_core::{utils, Error, Result};
use anomaly_quantile::QuantileMethod;
use anomaly_spread::{FilteredSample, IqrBounds, OutlierFilter};
use tracing::{debug, info, instrument, warn};

/// Decision for a single observation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnomalyVerdict {
    pub value: f64,
    pub is_anomaly: bool,
    /// Present only for anomalous values
    pub p_value: Option<f64>,
}

/// Model fitted on a cleaned history
#[derive(Debug, Clone)]
pub struct FittedModel {
    filtered: FilteredSample,
    summary: DistributionSummary,
    model: AnomalyModel,
    degenerate: DegeneratePolicy,
}

impl FittedModel {
    pub fn filtered(&self) -> &FilteredSample {
        &self.filtered
    }

    pub fn summary(&self) -> &DistributionSummary {
        &self.summary
    }

    pub fn model(&self) -> &AnomalyModel {
        &self.model
    }

    /// Judge one observation; the p-value is only computed when it is anomalous
    pub fn evaluate(&self, value: f64) -> Result<AnomalyVerdict> {
        if utils::is_missing(value) {
            return Err(Error::InvalidInput(format!(
                "observed value must be finite, got {value}"
            )));
        }

        let is_anomaly = self.model.is_anomaly(value);
        let p_value = if is_anomaly {
            Some(match self.degenerate {
                DegeneratePolicy::Saturate => self.model.anomaly_report_saturating(value)?,
                DegeneratePolicy::Reject => self.model.anomaly_report(value)?,
            })
        } else {
            None
        };

        Ok(AnomalyVerdict {
            value,
            is_anomaly,
            p_value,
        })
    }
}

/// Full record of a detection run
#[derive(Debug, Clone)]
pub struct Detection {
    pub verdict: AnomalyVerdict,
    pub summary: DistributionSummary,
    pub bounds: IqrBounds,
    /// Length of the raw history
    pub history_len: usize,
    pub outliers_removed: usize,
    pub missing_removed: usize,
    /// Jarque-Bera test of the cleaned history, when it has enough values
    pub normality: Option<NormalityTest>,
}

impl Detection {
    pub fn is_anomaly(&self) -> bool {
        self.verdict.is_anomaly
    }

    pub fn p_value(&self) -> Option<f64> {
        self.verdict.p_value
    }
}

/// Detection pipeline
///
/// Holds only configuration; every call to [`detect`](Self::detect) builds
/// fresh filter, summary and model values.
#[derive(Debug, Clone, Default)]
pub struct Detector {
    config: DetectionConfig,
}

impl Detector {
    pub fn new(config: DetectionConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn builder() -> DetectorBuilder {
        DetectorBuilder::new()
    }

    pub fn config(&self) -> &DetectionConfig {
        &self.config
    }

    /// Filter the history and freeze its summary into a model
    #[instrument(skip(self, history), fields(n = history.len()))]
    pub fn fit(&self, history: &[f64]) -> Result<FittedModel> {
        let filter = OutlierFilter::with_estimator(
            self.config.iqr_multiplier,
            self.config.quantile_method,
        )?;
        let filtered = filter.apply(history)?;

        let kept = filtered.cleaned.len();
        if kept < self.config.min_samples {
            warn!(
                kept,
                required = self.config.min_samples,
                "not enough data after filtering"
            );
            return Err(Error::InsufficientData {
                expected: self.config.min_samples,
                actual: kept,
            });
        }

        let summary =
            DistributionSummary::from_sample(&filtered.cleaned, &self.config.threshold_policy())?;
        if summary.is_degenerate() && self.config.degenerate == DegeneratePolicy::Reject {
            // Fail before evaluation so the caller learns about it even for inliers.
            return Err(Error::zero_std_dev("cleaned history"));
        }
        let model = summary.model()?;

        debug!(
            mean = summary.mean(),
            std_dev = summary.std_dev(),
            threshold = summary.threshold(),
            "fitted anomaly model"
        );

        Ok(FittedModel {
            filtered,
            summary,
            model,
            degenerate: self.config.degenerate,
        })
    }

    /// Judge `latest` against the cleaned `history`
    #[instrument(skip(self, history), fields(n = history.len()))]
    pub fn detect(&self, history: &[f64], latest: f64) -> Result<Detection> {
        let fitted = self.fit(history)?;
        let verdict = fitted.evaluate(latest)?;

        let normality = match NormalityTest::jarque_bera(&fitted.filtered.cleaned) {
            Ok(test) => {
                if !test.is_normal(self.config.normality_alpha) {
                    warn!(
                        p_value = test.p_value,
                        alpha = self.config.normality_alpha,
                        "cleaned history does not look normal; p-values are approximate"
                    );
                }
                Some(test)
            }
            Err(e) => {
                debug!(error = %e, "skipping normality check");
                None
            }
        };

        if verdict.is_anomaly {
            info!(value = latest, p_value = ?verdict.p_value, "anomaly detected");
        } else {
            debug!(value = latest, "value within threshold");
        }

        Ok(Detection {
            verdict,
            summary: fitted.summary,
            bounds: fitted.filtered.bounds,
            history_len: history.len(),
            outliers_removed: fitted.filtered.outlier_count(),
            missing_removed: fitted.filtered.missing_count(),
            normality,
        })
    }
}

/// Builder for [`Detector`]
#[derive(Debug, Clone, Default)]
pub struct DetectorBuilder {
    config: DetectionConfig,
}

impl DetectorBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing configuration
    pub fn from_config(config: DetectionConfig) -> Self {
        Self { config }
    }

    /// Sets the Tukey fence multiplier (default 1.5)
    pub fn iqr_multiplier(mut self, k: f64) -> Self {
        self.config.iqr_multiplier = k;
        self
    }

    /// Sets the threshold in standard deviations (default 3)
    pub fn sigma_multiplier(mut self, sigmas: f64) -> Self {
        self.config.sigma_multiplier = sigmas;
        self
    }

    pub fn quantile_method(mut self, method: QuantileMethod) -> Self {
        self.config.quantile_method = method;
        self
    }

    pub fn min_samples(mut self, min_samples: usize) -> Self {
        self.config.min_samples = min_samples;
        self
    }

    pub fn degenerate(mut self, policy: DegeneratePolicy) -> Self {
        self.config.degenerate = policy;
        self
    }

    pub fn normality_alpha(mut self, alpha: f64) -> Self {
        self.config.normality_alpha = alpha;
        self
    }

    /// Validates the configuration and builds the detector
    pub fn build(self) -> Result<Detector> {
        Detector::new(self.config)
    }
}
