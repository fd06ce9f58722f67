//! Error types for amplitude anomaly detection
//!
//! Provides a unified error type for all anomaly-* crates.

use thiserror::Error;

/// Core error type for anomaly detection operations
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid parameter provided to a function
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Invalid input data
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Insufficient data for the requested operation
    #[error("Insufficient data: expected at least {expected} samples, got {actual}")]
    InsufficientData { expected: usize, actual: usize },

    /// Standardizing by a zero spread
    #[error("Division by zero: {0}")]
    DivisionByZero(String),

    /// Numerical computation error
    #[error("Computation error: {0}")]
    Computation(String),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

// Helper functions for common error patterns

impl Error {
    /// Create an error for a sample without a single usable (finite) value
    pub fn no_finite_values(operation: &str) -> Self {
        Self::InvalidInput(format!("{operation} requires at least one finite value"))
    }

    /// Create an error for invalid quantile
    pub fn invalid_quantile(p: f64) -> Self {
        Self::InvalidParameter(format!("Quantile {p} must be in [0, 1]"))
    }

    /// Create an error for a multiplier that must be finite and non-negative
    pub fn invalid_multiplier(name: &str, value: f64) -> Self {
        Self::InvalidParameter(format!("{name} must be finite and non-negative, got {value}"))
    }

    /// Create an error for a zero standard deviation
    pub fn zero_std_dev(context: &str) -> Self {
        Self::DivisionByZero(format!("{context}: standard deviation is zero"))
    }

    /// Create an error for NaN/Inf values
    pub fn non_finite(context: &str) -> Self {
        Self::Computation(format!("{context} contains NaN or infinite values"))
    }

    /// Check that a multiplier is usable as a fence or threshold width
    pub fn check_multiplier(name: &str, value: f64) -> Result<()> {
        if !value.is_finite() || value < 0.0 {
            return Err(Self::invalid_multiplier(name, value));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidParameter("k must be positive".to_string());
        assert_eq!(err.to_string(), "Invalid parameter: k must be positive");

        let err = Error::InvalidInput("empty sample".to_string());
        assert_eq!(err.to_string(), "Invalid input: empty sample");

        let err = Error::InsufficientData {
            expected: 10,
            actual: 5,
        };
        assert_eq!(
            err.to_string(),
            "Insufficient data: expected at least 10 samples, got 5"
        );

        let err = Error::DivisionByZero("z-score".to_string());
        assert_eq!(err.to_string(), "Division by zero: z-score");

        let err = Error::Computation("convergence failed".to_string());
        assert_eq!(err.to_string(), "Computation error: convergence failed");
    }

    #[test]
    fn test_error_helper_functions() {
        let err = Error::no_finite_values("IQR bounds");
        assert_eq!(
            err.to_string(),
            "Invalid input: IQR bounds requires at least one finite value"
        );

        let err = Error::invalid_quantile(1.5);
        assert_eq!(
            err.to_string(),
            "Invalid parameter: Quantile 1.5 must be in [0, 1]"
        );

        let err = Error::zero_std_dev("anomaly report");
        assert!(matches!(err, Error::DivisionByZero(_)));
        assert_eq!(
            err.to_string(),
            "Division by zero: anomaly report: standard deviation is zero"
        );

        let err = Error::non_finite("input data");
        assert_eq!(
            err.to_string(),
            "Computation error: input data contains NaN or infinite values"
        );
    }

    #[test]
    fn test_check_multiplier() {
        assert!(Error::check_multiplier("k", 0.0).is_ok());
        assert!(Error::check_multiplier("k", 1.5).is_ok());
        assert!(matches!(
            Error::check_multiplier("k", -0.1),
            Err(Error::InvalidParameter(_))
        ));
        assert!(Error::check_multiplier("k", f64::NAN).is_err());
        assert!(Error::check_multiplier("k", f64::INFINITY).is_err());
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Error>();
    }
}
