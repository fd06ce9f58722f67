//! Alert messages for anomalous detections
//!
//! Only composition lives here; delivering the message is somebody else's job.

use crate::detector::Detection;
use std::fmt;

/// Subject and body of an alert
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertMessage {
    pub subject: String,
    pub body: String,
}

impl AlertMessage {
    /// Compose an alert for `ticker` on `date`, or `None` when the detection
    /// is not anomalous
    pub fn for_detection(ticker: &str, date: &str, detection: &Detection) -> Option<Self> {
        if !detection.is_anomaly() {
            return None;
        }

        let verdict = &detection.verdict;
        let summary = &detection.summary;
        let direction = if verdict.value > summary.mean() {
            "above"
        } else {
            "below"
        };
        let p_value = verdict
            .p_value
            .map(|p| format!("{p:.6}"))
            .unwrap_or_else(|| "n/a".to_string());

        let subject = format!("Price amplitude anomaly for {ticker} on {date}");
        let mut body = format!(
            "The price amplitude of {ticker} on {date} was {value:.4}, {direction} the \
             expected range [{lower:.4}, {upper:.4}].\n\n",
            value = verdict.value,
            lower = summary.mean() - summary.threshold(),
            upper = summary.mean() + summary.threshold(),
        );
        body.push_str(&format!("p-value: {p_value}\n"));
        body.push_str(&format!(
            "history: mean {:.4}, std {:.4}, threshold {:.4} over {} values\n",
            summary.mean(),
            summary.std_dev(),
            summary.threshold(),
            summary.count(),
        ));
        body.push_str(&format!(
            "filtering: {} outliers and {} missing values removed from {} observations \
             (IQR fences [{:.4}, {:.4}])\n",
            detection.outliers_removed,
            detection.missing_removed,
            detection.history_len,
            detection.bounds.lower(),
            detection.bounds.upper(),
        ));
        if let Some(test) = detection.normality {
            body.push_str(&format!(
                "normality: Jarque-Bera p-value {:.4}\n",
                test.p_value
            ));
        }

        Some(Self { subject, body })
    }
}

impl fmt::Display for AlertMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Subject: {}\n\n{}", self.subject, self.body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detector::Detector;

    const WITH_OUTLIERS: [f64; 10] = [1.0, 2.0, 3.0, 4.0, 5.0, 20.0, 6.0, 7.0, 8.0, 30.0];

    #[test]
    fn test_no_alert_for_normal_value() {
        let detection = Detector::default().detect(&WITH_OUTLIERS, 5.0).unwrap();
        let alert = AlertMessage::for_detection("ETH-USD", "2023-08-01", &detection);
        assert!(alert.is_none());
    }

    #[test]
    fn test_alert_contents() {
        let detection = Detector::default().detect(&WITH_OUTLIERS, 25.0).unwrap();
        let alert = AlertMessage::for_detection("ETH-USD", "2023-08-01", &detection).unwrap();

        assert_eq!(alert.subject, "Price amplitude anomaly for ETH-USD on 2023-08-01");
        assert!(alert.body.contains("25.0000, above the expected range"));
        let counts = "2 outliers and 0 missing values removed from 10 observations";
        assert!(alert.body.contains(counts));
        assert!(alert.body.contains("IQR fences [-3.5000, 14.5000]"));
        assert!(alert.body.contains("p-value: 0.0"));

        let rendered = alert.to_string();
        assert!(rendered.starts_with("Subject: Price amplitude anomaly for ETH-USD"));
        assert!(rendered.contains("\n\nThe price amplitude of ETH-USD"));
    }

    #[test]
    fn test_alert_below_mean() {
        let detection = Detector::default().detect(&WITH_OUTLIERS, -10.0).unwrap();
        let alert = AlertMessage::for_detection("BTC-USD", "2023-08-02", &detection).unwrap();
        assert!(alert.body.contains("below the expected range"));
    }
}
