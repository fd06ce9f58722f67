//! Daily price bars

use serde::{Deserialize, Serialize};

/// One trading period as exported by the price API
///
/// Only the date, open and close columns are read; any other column
/// (High, Low, Adj Close, Volume, ...) is ignored. Empty cells are missing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceBar {
    #[serde(rename = "Date", alias = "date")]
    pub date: String,
    #[serde(rename = "Open", alias = "open")]
    pub open: Option<f64>,
    #[serde(rename = "Close", alias = "close")]
    pub close: Option<f64>,
}

impl PriceBar {
    pub fn new(date: impl Into<String>, open: f64, close: f64) -> Self {
        Self {
            date: date.into(),
            open: Some(open),
            close: Some(close),
        }
    }

    /// Close minus open; NaN when either price is missing
    pub fn amplitude(&self) -> f64 {
        match (self.open, self.close) {
            (Some(open), Some(close)) => close - open,
            _ => f64::NAN,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_amplitude() {
        assert_eq!(PriceBar::new("2023-01-01", 100.0, 101.0).amplitude(), 1.0);
        assert_eq!(PriceBar::new("2023-01-02", 106.0, 104.5).amplitude(), -1.5);
    }

    #[test]
    fn test_missing_price_gives_nan() {
        let bar = PriceBar {
            date: "2023-01-03".to_string(),
            open: None,
            close: Some(3.0),
        };
        assert!(bar.amplitude().is_nan());
    }
}
