//! Utility functions for working with data slices
//!
//! Missing observations are carried as `NaN`. Anything that is not finite
//! is treated as missing: it never takes part in a statistic.

/// Whether a value counts as a missing observation
#[inline]
pub fn is_missing(x: f64) -> bool {
    !x.is_finite()
}

/// Copy the finite values of a sample, preserving order
///
/// # Examples
///
/// ```rust
/// use anomaly_core::utils::finite_values;
///
/// let data = [2.0, f64::NAN, 1.0, f64::INFINITY];
/// assert_eq!(finite_values(&data), vec![2.0, 1.0]);
/// ```
pub fn finite_values(data: &[f64]) -> Vec<f64> {
    data.iter().copied().filter(|x| !is_missing(*x)).collect()
}

/// Number of missing entries in a sample
pub fn count_missing(data: &[f64]) -> usize {
    data.iter().filter(|x| is_missing(**x)).count()
}

/// Sort data and return a new vector
///
/// Handles NaN values by placing them at the end.
///
/// # Examples
///
/// ```rust
/// use anomaly_core::utils::sorted;
///
/// let data = vec![3.0, 1.0, 5.0, 2.0, 4.0];
/// assert_eq!(sorted(&data), vec![1.0, 2.0, 3.0, 4.0, 5.0]);
/// ```
pub fn sorted(data: &[f64]) -> Vec<f64> {
    let mut sorted = data.to_vec();
    sorted.sort_by(|a, b| {
        match (a.is_nan(), b.is_nan()) {
            (true, true) => std::cmp::Ordering::Equal,
            (true, false) => std::cmp::Ordering::Greater, // NaN goes after non-NaN
            (false, true) => std::cmp::Ordering::Less,    // non-NaN goes before NaN
            (false, false) => a.total_cmp(b),
        }
    });
    sorted
}

/// Sorted copy of the finite values of a sample
pub fn sorted_finite(data: &[f64]) -> Vec<f64> {
    let mut values = finite_values(data);
    values.sort_by(f64::total_cmp);
    values
}

/// Calculate the mean of a slice
///
/// Returns NaN for empty slices so that callers cannot mistake "no data"
/// for a real location.
///
/// # Examples
///
/// ```rust
/// use anomaly_core::utils::mean;
///
/// assert_eq!(mean(&[1.0, 2.0, 3.0]), 2.0);
/// assert!(mean(&[]).is_nan());
/// ```
pub fn mean(data: &[f64]) -> f64 {
    if data.is_empty() {
        return f64::NAN;
    }
    let sum: f64 = data.iter().sum();
    sum / data.len() as f64
}

/// Calculate the population standard deviation (divisor `n`)
///
/// Returns NaN for empty slices and 0.0 for a single element.
///
/// # Examples
///
/// ```rust
/// use anomaly_core::utils::population_std_dev;
///
/// let data: Vec<f64> = (1..=10).map(f64::from).collect();
/// assert!((population_std_dev(&data) - 2.8722813232690143).abs() < 1e-12);
/// ```
pub fn population_std_dev(data: &[f64]) -> f64 {
    if data.is_empty() {
        return f64::NAN;
    }
    variance_with_divisor(data, data.len() as f64).sqrt()
}

/// Calculate the sample standard deviation (divisor `n - 1`)
///
/// Returns 0.0 for slices with less than 2 elements.
///
/// # Examples
///
/// ```rust
/// use anomaly_core::utils::std_dev;
///
/// let data = [1.0, 2.0, 3.0, 4.0, 5.0];
/// let sd = std_dev(&data);
/// assert!((sd - 1.58113883).abs() < 1e-6);
/// ```
pub fn std_dev(data: &[f64]) -> f64 {
    if data.len() < 2 {
        return 0.0;
    }
    variance_with_divisor(data, (data.len() - 1) as f64).sqrt()
}

fn variance_with_divisor(data: &[f64], divisor: f64) -> f64 {
    let m = mean(data);
    data.iter()
        .map(|&x| {
            let diff = x - m;
            diff * diff
        })
        .sum::<f64>()
        / divisor
}
