//! Export command: fetch both metrics over a date range and write CSV.

use chrono::NaiveDate;
use log::debug;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use crate::{
    cli::{
        types::{CalendarDate, OutputMode},
        GarminStats,
    },
    garmin::{collect_metrics, DailyMetricsSource, DateRange},
    output::{
        merged_rows, write_merged_file, write_split_files, HRV_FILE, REST_HEART_RATE_FILE,
    },
    GarminError, Result,
};

/// Where the collected series end up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    Merged {
        fileout: PathBuf,
    },
    Split {
        rest_heart_rate: PathBuf,
        hrv: PathBuf,
    },
}

impl OutputTarget {
    pub fn split_in(dir: &Path) -> Self {
        OutputTarget::Split {
            rest_heart_rate: dir.join(REST_HEART_RATE_FILE),
            hrv: dir.join(HRV_FILE),
        }
    }
}

/// Validated inputs for [`handle_export`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportParams {
    pub range: DateRange,
    pub target: OutputTarget,
}

/// Missing end date means "up to today".
pub fn resolve_end_date(end_date: Option<CalendarDate>, today: NaiveDate) -> NaiveDate {
    end_date.map_or(today, |d| d.as_naive_date())
}

impl ExportParams {
    /// Validate parsed arguments; `today` stands in for the missing end date.
    pub fn from_args(args: &GarminStats, today: NaiveDate) -> Result<Self> {
        let range = DateRange::new(
            args.start_date.as_naive_date(),
            resolve_end_date(args.end_date, today),
        )?;

        let target = match args.mode {
            OutputMode::Merged => OutputTarget::Merged {
                fileout: args.fileout.clone().ok_or(GarminError::MissingFileout)?,
            },
            OutputMode::Split => {
                OutputTarget::split_in(args.out_dir.as_deref().unwrap_or_else(|| Path::new(".")))
            }
        };

        Ok(Self { range, target })
    }
}

/// What a finished export wrote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    pub days: usize,
    pub files: Vec<PathBuf>,
}

/// Handle the export command
pub async fn handle_export<S: DailyMetricsSource>(
    source: &S,
    params: ExportParams,
) -> Result<ExportSummary> {
    let collected = collect_metrics(source, params.range).await?;

    let summary = match params.target {
        OutputTarget::Merged { fileout } => {
            let rows = merged_rows(&collected.heart_rates, &collected.hrv);
            debug!("{:?}", rows);
            write_merged_file(&fileout, &rows)?;

            ExportSummary {
                days: rows.len(),
                files: vec![fileout],
            }
        }
        OutputTarget::Split {
            rest_heart_rate,
            hrv,
        } => {
            write_split_files(&rest_heart_rate, &hrv, &collected.heart_rates, &collected.hrv)?;

            let days: BTreeSet<_> = collected
                .heart_rates
                .keys()
                .chain(collected.hrv.keys())
                .collect();

            ExportSummary {
                days: days.len(),
                files: vec![rest_heart_rate, hrv],
            }
        }
    };

    for file in &summary.files {
        println!("✓ Wrote {}", file.display());
    }
    println!(
        "{} days between {} and {}",
        summary.days,
        params.range.start(),
        params.range.end()
    );

    Ok(summary)
}
