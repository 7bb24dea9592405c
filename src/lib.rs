//! Garmin Connect stats exporter
//!
//! Pulls daily resting heart rate and heart-rate variability (HRV) from
//! Garmin Connect for a date range and writes them to CSV.
//!
//! ## Features
//!
//! - **Session reuse**: Authorization and Cookie headers copied from a logged-in browser
//! - **Paged retrieval**: Ranges are fetched in windows of at most 25 days
//! - **Two layouts**: One merged file, or one file per metric
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use garmin_stats::{
//!     commands::{handle_export, ExportParams, OutputTarget},
//!     core::Credentials,
//!     garmin::{ClientConfig, DateRange, GarminClient},
//! };
//! use chrono::NaiveDate;
//!
//! # async fn example() -> garmin_stats::Result<()> {
//! let credentials = Credentials::new("Bearer ...", "SESSIONID=...");
//! let client = GarminClient::new(ClientConfig::default(), &credentials)?;
//!
//! let params = ExportParams {
//!     range: DateRange::new(
//!         NaiveDate::from_ymd_opt(2024, 8, 1).unwrap(),
//!         NaiveDate::from_ymd_opt(2024, 9, 1).unwrap(),
//!     )?,
//!     target: OutputTarget::Merged { fileout: "stats.csv".into() },
//! };
//!
//! handle_export(&client, params).await?;
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod commands;
pub mod core;
pub mod error;
pub mod garmin;
pub mod output;

// Re-export commonly used types
pub use cli::types::{CalendarDate, OutputMode};
pub use error::{GarminError, Result};
pub use garmin::{GarminClient, PAGE_DAYS};
