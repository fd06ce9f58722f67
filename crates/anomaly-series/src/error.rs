//! Error types for anomaly-series

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Anomaly core error: {0}")]
    Core(#[from] anomaly_core::Error),

    #[error("Empty series: {0}")]
    EmptySeries(String),
}

pub type Result<T> = std::result::Result<T, Error>;
