//! Error types for the Garmin stats exporter

use chrono::NaiveDate;
use thiserror::Error;


pub type Result<T> = std::result::Result<T, GarminError>;

#[derive(Error, Debug)]
pub enum GarminError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    #[error("Not a valid date: {input}. Use format YYYY-MM-DD.")]
    InvalidDate { input: String },

    #[error("Start date {start} is after end date {end}")]
    InvalidDateRange { start: NaiveDate, end: NaiveDate },

    #[error("--fileout is required in merged mode")]
    MissingFileout,
}
