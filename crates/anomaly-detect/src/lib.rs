//! Anomaly detection over cleaned amplitude samples
//!
//! A run has three stages:
//!
//! 1. the history goes through an IQR [`OutlierFilter`](anomaly_spread::OutlierFilter),
//! 2. the cleaned values are frozen into a [`DistributionSummary`]
//!    (mean, population std, `threshold = sigma_multiplier * std`),
//! 3. an [`AnomalyModel`] judges the latest value and, when it is anomalous,
//!    reports a two-tailed p-value.
//!
//! [`Detector`] wires the stages together from a [`DetectionConfig`]; the
//! pieces can also be used on their own.
//!
//! # Example
//!
//! ```rust
//! use anomaly_detect::{AnomalyModel, Detector};
//!
//! // direct use of the model
//! let model = AnomalyModel::new(5.5, 2.87, 8.61).unwrap();
//! assert!(!model.is_anomaly(1.5));
//! assert!(model.is_anomaly(15.3));
//! let p = model.anomaly_report(15.3).unwrap();
//! assert!(p < 0.01);
//!
//! // full run
//! let history = [1.0, 2.0, 3.0, 4.0, 5.0, 20.0, 6.0, 7.0, 8.0, 30.0];
//! let detection = Detector::default().detect(&history, 25.0).unwrap();
//! assert!(detection.is_anomaly());
//! assert_eq!(detection.outliers_removed, 2);
//! ```

pub mod alert;
pub mod batch;
pub mod config;
pub mod detector;
pub mod model;
pub mod normality;
pub mod summary;

pub use alert::AlertMessage;
pub use batch::{BatchOutcome, DetectionRequest};
pub use config::{
    DegeneratePolicy, DetectionConfig, ThresholdPolicy, DEFAULT_NORMALITY_ALPHA,
    DEFAULT_SIGMA_MULTIPLIER,
};
pub use detector::{AnomalyVerdict, Detection, Detector, DetectorBuilder, FittedModel};
pub use model::AnomalyModel;
pub use normality::NormalityTest;
pub use summary::DistributionSummary;
