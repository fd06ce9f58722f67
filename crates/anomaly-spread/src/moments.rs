//! Classical sample moments
//!
//! Both estimators use population (divisor `n`) central moments, which is
//! what the Jarque-Bera statistic is defined on.

use anomaly_core::{utils, Error, Result};

/// Classical (moment) skewness
///
/// Returns 0.0 for a sample without spread.
pub fn skewness(sample: &[f64]) -> Result<f64> {
    if sample.len() < 3 {
        return Err(Error::InsufficientData {
            expected: 3,
            actual: sample.len(),
        });
    }
    if sample.iter().any(|x| utils::is_missing(*x)) {
        return Err(Error::non_finite("skewness input"));
    }

    let (m2, m3, _) = central_moments(sample);
    if m2.abs() < f64::EPSILON {
        return Ok(0.0);
    }
    Ok(m3 / m2.powf(1.5))
}

/// Classical excess kurtosis (0 for a normal distribution)
///
/// Returns 0.0 for a sample without spread.
pub fn excess_kurtosis(sample: &[f64]) -> Result<f64> {
    if sample.len() < 4 {
        return Err(Error::InsufficientData {
            expected: 4,
            actual: sample.len(),
        });
    }
    if sample.iter().any(|x| utils::is_missing(*x)) {
        return Err(Error::non_finite("kurtosis input"));
    }

    let (m2, _, m4) = central_moments(sample);
    if m2.abs() < f64::EPSILON {
        return Ok(0.0);
    }
    Ok(m4 / (m2 * m2) - 3.0) // Excess kurtosis
}

/// Second, third and fourth central moments
fn central_moments(sample: &[f64]) -> (f64, f64, f64) {
    let n = sample.len() as f64;
    let mean = utils::mean(sample);

    let (s2, s3, s4) = sample.iter().fold((0.0, 0.0, 0.0), |(s2, s3, s4), &x| {
        let d = x - mean;
        let d2 = d * d;
        (s2 + d2, s3 + d2 * d, s4 + d2 * d2)
    });
    (s2 / n, s3 / n, s4 / n)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_symmetric_sample_has_zero_skew() {
        let data: Vec<f64> = (1..=10).map(f64::from).collect();
        assert_relative_eq!(skewness(&data).unwrap(), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_uniform_run_kurtosis() {
        // discrete uniform on 1..=10: m4 / m2^2 = 3 (3n^2 - 7) / (5 (n^2 - 1))
        let data: Vec<f64> = (1..=10).map(f64::from).collect();
        let expected = 3.0 * (3.0 * 100.0 - 7.0) / (5.0 * 99.0) - 3.0;
        assert_relative_eq!(excess_kurtosis(&data).unwrap(), expected, epsilon = 1e-12);
    }

    #[test]
    fn test_right_skew_is_positive() {
        let data = [1.0, 1.0, 1.0, 2.0, 10.0];
        assert!(skewness(&data).unwrap() > 0.0);
    }

    #[test]
    fn test_constant_sample() {
        let data = [3.0; 8];
        assert_eq!(skewness(&data).unwrap(), 0.0);
        assert_eq!(excess_kurtosis(&data).unwrap(), 0.0);
    }

    #[test]
    fn test_insufficient_and_missing() {
        assert!(matches!(
            skewness(&[1.0, 2.0]),
            Err(Error::InsufficientData {
                expected: 3,
                actual: 2,
            })
        ));
        assert!(matches!(
            excess_kurtosis(&[1.0, 2.0, 3.0]),
            Err(Error::InsufficientData {
                expected: 4,
                actual: 3,
            })
        ));
        assert!(skewness(&[1.0, f64::NAN, 3.0]).is_err());
    }
}
