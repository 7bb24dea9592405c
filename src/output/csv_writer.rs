//! CSV serialization of collected series.

use chrono::NaiveDate;
use csv::Writer;
use std::fmt::Display;
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use crate::garmin::{HrvSeries, MetricSeries, RestHeartRates};
use crate::Result;

pub const MERGED_HEADERS: [&str; 3] = ["date", "rest heart rate", "HRV"];
pub const REST_HEART_RATE_HEADERS: [&str; 2] = ["date", "rest heart rate"];
pub const HRV_HEADERS: [&str; 2] = ["date", "HRV"];

pub const REST_HEART_RATE_FILE: &str = "rest_heart_rate.csv";
pub const HRV_FILE: &str = "hrv.csv";

/// One line of the merged file.
#[derive(Debug, Clone, PartialEq)]
pub struct OutputRow {
    pub date: NaiveDate,
    pub rest_heart_rate: Option<u32>,
    pub hrv: Option<f64>,
}

/// Join both series on the heart-rate dates, ascending.
///
/// Dates that only appear in `hrv` are not emitted.
pub fn merged_rows(heart_rates: &RestHeartRates, hrv: &HrvSeries) -> Vec<OutputRow> {
    heart_rates
        .iter()
        .map(|(date, bpm)| OutputRow {
            date: *date,
            rest_heart_rate: *bpm,
            hrv: hrv.get(date).copied().flatten(),
        })
        .collect()
}

fn cell<V: Display>(value: &Option<V>) -> String {
    value.as_ref().map(ToString::to_string).unwrap_or_default()
}

/// Write `date,value` rows for a single metric after a header row.
pub fn write_series<W: Write, V: Display>(
    writer: W,
    headers: &[&str],
    series: &MetricSeries<V>,
) -> Result<()> {
    let mut w = Writer::from_writer(writer);
    w.write_record(headers)?;

    for (date, value) in series {
        w.write_record([date.to_string(), cell(value)])?;
    }

    w.flush()?;
    Ok(())
}

/// Write merged rows after the `date,rest heart rate,HRV` header.
pub fn write_merged<W: Write>(writer: W, rows: &[OutputRow]) -> Result<()> {
    let mut w = Writer::from_writer(writer);
    w.write_record(MERGED_HEADERS)?;

    for row in rows {
        w.write_record([
            row.date.to_string(),
            cell(&row.rest_heart_rate),
            cell(&row.hrv),
        ])?;
    }

    w.flush()?;
    Ok(())
}

pub fn write_merged_file(path: &Path, rows: &[OutputRow]) -> Result<()> {
    write_merged(File::create(path)?, rows)
}

/// Write the per-metric files of split mode.
///
/// Both files are rendered up front; if the second one cannot be written the
/// first is removed again so a failed run leaves nothing behind.
pub fn write_split_files(
    rest_heart_rate_path: &Path,
    hrv_path: &Path,
    heart_rates: &RestHeartRates,
    hrv: &HrvSeries,
) -> Result<()> {
    let mut rest_heart_rate_csv = Vec::new();
    write_series(&mut rest_heart_rate_csv, &REST_HEART_RATE_HEADERS, heart_rates)?;
    let mut hrv_csv = Vec::new();
    write_series(&mut hrv_csv, &HRV_HEADERS, hrv)?;

    fs::write(rest_heart_rate_path, rest_heart_rate_csv)?;
    if let Err(e) = fs::write(hrv_path, hrv_csv) {
        let _ = fs::remove_file(rest_heart_rate_path);
        return Err(e.into());
    }
    Ok(())
}
