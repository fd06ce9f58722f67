//! Independent detection runs over many instruments
//!
//! Runs share nothing but the detector configuration, so with the `parallel`
//! feature they are spread over the rayon thread pool.

use crate::detector::{Detection, Detector};
use anomaly_core::Result;
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::{info, instrument};

/// Input of one run
#[derive(Debug, Clone, PartialEq)]
pub struct DetectionRequest {
    pub ticker: String,
    pub history: Vec<f64>,
    pub latest: f64,
}

impl DetectionRequest {
    pub fn new(ticker: impl Into<String>, history: Vec<f64>, latest: f64) -> Self {
        Self {
            ticker: ticker.into(),
            history,
            latest,
        }
    }
}

/// Result of one run; a failure never affects the other runs
#[derive(Debug)]
pub struct BatchOutcome {
    pub ticker: String,
    pub result: Result<Detection>,
}

impl Detector {
    /// Run every request, preserving input order in the output
    #[instrument(skip_all, fields(runs = requests.len()))]
    pub fn detect_batch(&self, requests: &[DetectionRequest]) -> Vec<BatchOutcome> {
        let run = |request: &DetectionRequest| BatchOutcome {
            ticker: request.ticker.clone(),
            result: self.detect(&request.history, request.latest),
        };

        #[cfg(feature = "parallel")]
        let outcomes: Vec<BatchOutcome> = requests.par_iter().map(run).collect();
        #[cfg(not(feature = "parallel"))]
        let outcomes: Vec<BatchOutcome> = requests.iter().map(run).collect();

        let anomalies = outcomes
            .iter()
            .filter(|o| matches!(&o.result, Ok(d) if d.is_anomaly()))
            .count();
        let failures = outcomes.iter().filter(|o| o.result.is_err()).count();
        info!(anomalies, failures, "batch finished");

        outcomes
    }
}
