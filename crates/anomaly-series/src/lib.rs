//! Price-amplitude series for anomaly detection
//!
//! Turns raw daily price bars into the `close - open` amplitude series the
//! detector works on, keeping each value tied to its date.
//!
//! # Example
//!
//! ```rust
//! use anomaly_series::AmplitudeSeries;
//! use anomaly_detect::Detector;
//!
//! let csv = "\
//! Date,Open,Close
//! 2023-07-01,10,11
//! 2023-07-02,10,12
//! 2023-07-03,10,11
//! 2023-07-04,10,13
//! 2023-07-05,10,10
//! ";
//! let series = AmplitudeSeries::read_bars_csv(csv.as_bytes()).unwrap();
//! assert_eq!(series.values(), vec![1.0, 2.0, 1.0, 3.0, 0.0]);
//!
//! let latest = series.detect_latest(&Detector::default()).unwrap();
//! assert_eq!(latest.date, "2023-07-05");
//! assert!(!latest.detection.is_anomaly());
//! ```

mod bar;
mod error;
mod series;

pub use bar::PriceBar;
pub use error::{Error, Result};
pub use series::{AmplitudePoint, AmplitudeSeries, LatestDetection};
