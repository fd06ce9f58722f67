//! Shared fixtures for integration tests

#![allow(dead_code)]

pub use approx::assert_relative_eq;

use amplitude_anomaly::anomaly_core::utils::{mean, population_std_dev};
use amplitude_anomaly::AnomalyModel;

/// `[1, 2, ..., 10]`
pub fn uniform_run() -> Vec<f64> {
    (1..=10).map(f64::from).collect()
}

/// `[1..=8]` with two large values mixed in
pub const WITH_OUTLIERS: [f64; 10] = [1.0, 2.0, 3.0, 4.0, 5.0, 20.0, 6.0, 7.0, 8.0, 30.0];

/// Model with `threshold = 3 * std` over a sample
pub fn three_sigma_model(data: &[f64]) -> AnomalyModel {
    let m = mean(data);
    let s = population_std_dev(data);
    AnomalyModel::new(m, s, 3.0 * s).unwrap()
}

/// Installs a test subscriber once; honours RUST_LOG
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
