//! Core traits for quantile estimation

use anomaly_core::{utils, Error, Result};

/// Main trait for quantile estimation
///
/// Implementors only need [`quantile_sorted`](Self::quantile_sorted); the
/// remaining methods take care of dropping missing values and sorting.
pub trait QuantileEstimator {
    /// Short name used in logs and reports
    fn name(&self) -> &'static str;

    /// Estimate a single quantile from pre-sorted, finite data
    ///
    /// # Arguments
    /// * `sorted_data` - The data sample, already sorted, without NaN
    /// * `p` - The probability (0.0 to 1.0)
    fn quantile_sorted(&self, sorted_data: &[f64], p: f64) -> Result<f64>;

    /// Estimate a single quantile
    ///
    /// The input is left untouched; missing values are skipped.
    fn quantile(&self, data: &[f64], p: f64) -> Result<f64> {
        let sorted = prepare(data, "quantile")?;
        self.quantile_sorted(&sorted, p)
    }

    /// Estimate multiple quantiles from pre-sorted, finite data
    fn quantiles_sorted(&self, sorted_data: &[f64], ps: &[f64]) -> Result<Vec<f64>> {
        ps.iter()
            .map(|&p| self.quantile_sorted(sorted_data, p))
            .collect()
    }

    /// Estimate multiple quantiles, sorting only once
    fn quantiles(&self, data: &[f64], ps: &[f64]) -> Result<Vec<f64>> {
        let sorted = prepare(data, "quantiles")?;
        self.quantiles_sorted(&sorted, ps)
    }

    /// First and third quartiles
    fn quartiles(&self, data: &[f64]) -> Result<(f64, f64)> {
        let sorted = prepare(data, "quartiles")?;
        Ok((
            self.quantile_sorted(&sorted, 0.25)?,
            self.quantile_sorted(&sorted, 0.75)?,
        ))
    }
}

/// Validate a probability argument
pub(crate) fn check_probability(p: f64) -> Result<()> {
    if !(0.0..=1.0).contains(&p) {
        return Err(Error::invalid_quantile(p));
    }
    Ok(())
}

/// Validate a pre-sorted sample
pub(crate) fn check_sorted_input(sorted_data: &[f64]) -> Result<()> {
    if sorted_data.is_empty() {
        return Err(Error::no_finite_values("quantile estimation"));
    }
    if sorted_data.iter().any(|x| utils::is_missing(*x)) {
        return Err(Error::non_finite("sorted quantile input"));
    }
    Ok(())
}

fn prepare(data: &[f64], operation: &str) -> Result<Vec<f64>> {
    let sorted = utils::sorted_finite(data);
    if sorted.is_empty() {
        return Err(Error::no_finite_values(operation));
    }
    Ok(sorted)
}
