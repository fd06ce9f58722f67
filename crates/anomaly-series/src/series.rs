//! Date-ordered price-amplitude series

use crate::bar::PriceBar;
use crate::error::{Error, Result};
use anomaly_detect::{AlertMessage, Detection, Detector};
use serde::{Deserialize, Serialize};
use std::io;
use std::path::Path;
use tracing::{debug, instrument};

/// Amplitude of one trading day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AmplitudePoint {
    pub date: String,
    #[serde(rename = "price_amplitude")]
    pub amplitude: f64,
}

/// Amplitudes sorted by date
///
/// Dates are compared as strings, which orders ISO-8601 (`YYYY-MM-DD`) dates
/// chronologically. Equal dates keep their input order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AmplitudeSeries {
    points: Vec<AmplitudePoint>,
}

/// Detection of the most recent day against everything before it
#[derive(Debug, Clone)]
pub struct LatestDetection {
    pub date: String,
    pub detection: Detection,
}

impl LatestDetection {
    /// Alert for `ticker`, if the latest day was anomalous
    pub fn alert(&self, ticker: &str) -> Option<AlertMessage> {
        AlertMessage::for_detection(ticker, &self.date, &self.detection)
    }
}

impl AmplitudeSeries {
    pub fn from_points(mut points: Vec<AmplitudePoint>) -> Self {
        points.sort_by(|a, b| a.date.cmp(&b.date));
        Self { points }
    }

    /// Derive `close - open` for every bar
    pub fn from_bars<I>(bars: I) -> Self
    where
        I: IntoIterator<Item = PriceBar>,
    {
        Self::from_points(
            bars.into_iter()
                .map(|bar| AmplitudePoint {
                    amplitude: bar.amplitude(),
                    date: bar.date,
                })
                .collect(),
        )
    }

    /// Read raw price bars (`Date,Open,...,Close,...`) and derive amplitudes
    pub fn read_bars_csv<R: io::Read>(reader: R) -> Result<Self> {
        let mut rdr = csv::Reader::from_reader(reader);
        let bars = rdr
            .deserialize::<PriceBar>()
            .collect::<std::result::Result<Vec<_>, _>>()?;
        debug!(rows = bars.len(), "read price bars");
        Ok(Self::from_bars(bars))
    }

    /// Read already processed amplitudes (`date,price_amplitude`)
    ///
    /// Empty amplitude cells are read as missing.
    pub fn read_amplitudes_csv<R: io::Read>(reader: R) -> Result<Self> {
        #[derive(Deserialize)]
        struct Row {
            date: String,
            price_amplitude: Option<f64>,
        }

        let mut rdr = csv::Reader::from_reader(reader);
        let points = rdr
            .deserialize::<Row>()
            .map(|row| {
                row.map(|r| AmplitudePoint {
                    date: r.date,
                    amplitude: r.price_amplitude.unwrap_or(f64::NAN),
                })
            })
            .collect::<std::result::Result<Vec<_>, _>>()?;
        debug!(rows = points.len(), "read amplitudes");
        Ok(Self::from_points(points))
    }

    pub fn bars_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let file = std::fs::File::open(path)?;
        Self::read_bars_csv(io::BufReader::new(file))
    }

    pub fn amplitudes_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let file = std::fs::File::open(path)?;
        Self::read_amplitudes_csv(io::BufReader::new(file))
    }

    /// Write as `date,price_amplitude`
    pub fn write_amplitudes_csv<W: io::Write>(&self, writer: W) -> Result<()> {
        let mut wtr = csv::Writer::from_writer(writer);
        for point in &self.points {
            wtr.serialize(point)?;
        }
        wtr.flush()?;
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[AmplitudePoint] {
        &self.points
    }

    /// Amplitudes in date order; missing days are NaN
    pub fn values(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.amplitude).collect()
    }

    pub fn dates(&self) -> Vec<&str> {
        self.points.iter().map(|p| p.date.as_str()).collect()
    }

    /// Everything before the most recent day, and the most recent day
    pub fn split_latest(&self) -> Result<(&[AmplitudePoint], &AmplitudePoint)> {
        self.points
            .split_last()
            .map(|(latest, history)| (history, latest))
            .ok_or_else(|| Error::EmptySeries("no observations to split".to_string()))
    }

    /// Judge the most recent amplitude against the earlier ones
    #[instrument(skip_all, fields(len = self.points.len()))]
    pub fn detect_latest(&self, detector: &Detector) -> Result<LatestDetection> {
        let (history, latest) = self.split_latest()?;
        let values: Vec<f64> = history.iter().map(|p| p.amplitude).collect();
        let detection = detector.detect(&values, latest.amplitude)?;
        Ok(LatestDetection {
            date: latest.date.clone(),
            detection,
        })
    }
}
