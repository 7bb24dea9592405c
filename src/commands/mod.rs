//! Command implementations for the Garmin stats CLI

pub mod export;


pub use export::{handle_export, resolve_end_date, ExportParams, ExportSummary, OutputTarget};
