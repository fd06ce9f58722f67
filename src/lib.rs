//! IQR outlier filtering and z-score anomaly detection for daily price amplitudes
//!
//! This crate re-exports the workspace crates:
//!
//! - [`anomaly_core`]: error type and sample utilities
//! - [`anomaly_quantile`]: percentile estimators
//! - [`anomaly_spread`]: Tukey fences and outlier filtering
//! - [`anomaly_detect`]: anomaly model, detection runs, alerts
//! - [`anomaly_series`]: price-bar ingestion and amplitude series
//!
//! The two-call API most callers need is re-exported at the top level:
//!
//! ```rust
//! use amplitude_anomaly::{filter_outliers, AnomalyModel};
//! use amplitude_anomaly::anomaly_core::utils::{mean, population_std_dev};
//!
//! let history = [1.0, 2.0, 3.0, 4.0, 5.0, 20.0, 6.0, 7.0, 8.0, 30.0];
//! let cleaned = filter_outliers(&history, 1.5).unwrap();
//!
//! let (m, s) = (mean(&cleaned), population_std_dev(&cleaned));
//! let model = AnomalyModel::new(m, s, 3.0 * s).unwrap();
//! assert!(model.is_anomaly(20.0));
//! assert!(model.anomaly_report(20.0).unwrap() < 1e-6);
//! ```

pub use anomaly_core;
pub use anomaly_detect;
pub use anomaly_quantile;
pub use anomaly_series;
pub use anomaly_spread;

pub use anomaly_core::{Error, Result};
pub use anomaly_detect::{
    AlertMessage, AnomalyModel, AnomalyVerdict, DegeneratePolicy, Detection, DetectionConfig,
    Detector, DistributionSummary, ThresholdPolicy,
};
pub use anomaly_quantile::QuantileMethod;
pub use anomaly_series::AmplitudeSeries;
pub use anomaly_spread::{
    classify_outliers, compute_bounds, filter_outliers, IqrBounds, OutlierFilter, SampleTag,
};
