//! CLI argument definitions and parsing.

pub mod types;


use clap::Parser;
use std::path::PathBuf;
use types::{CalendarDate, OutputMode};

use crate::core::Credentials;

#[derive(Debug, Parser)]
#[clap(
    name = "garmin-stats",
    about = "Retrieve Garmin Connect data and write them to a CSV file."
)]
pub struct GarminStats {
    /// Start date in the format YYYY-MM-DD (e.g., 2024-08-01).
    #[clap(long)]
    pub start_date: CalendarDate,

    /// End date in the format YYYY-MM-DD (e.g., 2024-08-01). Defaults to today.
    #[clap(long)]
    pub end_date: Option<CalendarDate>,

    /// File path for the CSV output file (merged mode).
    #[clap(long)]
    pub fileout: Option<PathBuf>,

    /// Write one merged file, or one file per metric.
    #[clap(long, value_enum, default_value_t = OutputMode::Merged)]
    pub mode: OutputMode,

    /// Directory for `rest_heart_rate.csv` and `hrv.csv` (split mode).
    #[clap(long)]
    pub out_dir: Option<PathBuf>,

    /// Authorization header taken from the web app.
    #[clap(long)]
    pub auth_header: String,

    /// Cookie header taken from the web app.
    #[clap(long)]
    pub cookie_header: String,

    /// Log each request URL.
    #[clap(long, short)]
    pub verbose: bool,
}

impl GarminStats {
    pub fn credentials(&self) -> Credentials {
        Credentials::new(self.auth_header.clone(), self.cookie_header.clone())
    }
}
