//! Core types for amplitude anomaly detection
//!
//! This crate holds the pieces every other crate in the workspace leans on:
//!
//! - [`Error`] / [`Result`]: the unified error type
//! - [`utils`]: helpers for samples that may carry missing (`NaN`) entries
//!
//! # Example
//!
//! ```rust
//! use anomaly_core::utils::{finite_values, mean, population_std_dev};
//!
//! let sample = [1.0, f64::NAN, 3.0];
//! let finite = finite_values(&sample);
//! assert_eq!(finite, vec![1.0, 3.0]);
//! assert_eq!(mean(&finite), 2.0);
//! assert_eq!(population_std_dev(&finite), 1.0);
//! ```

pub mod error;
pub mod utils;

pub use error::{Error, Result};
