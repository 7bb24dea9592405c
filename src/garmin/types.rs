use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Daily values keyed by calendar date.
///
/// A day the service reports without a value is kept with `None` so it
/// still produces an output row.
pub type MetricSeries<V> = BTreeMap<NaiveDate, Option<V>>;

/// Resting heart rate in beats per minute.
pub type RestHeartRates = MetricSeries<u32>;

/// Nightly average heart-rate variability.
pub type HrvSeries = MetricSeries<f64>;

/// One element of the `stats/heartRate/daily` response list.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DailyHeartRate {
    #[serde(rename = "calendarDate")]
    pub calendar_date: NaiveDate,
    pub values: HeartRateValues,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct HeartRateValues {
    #[serde(rename = "restingHR", default)]
    pub resting_hr: Option<u32>,
}

/// Top-level envelope of the `hrv/daily` response
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HrvEnvelope {
    #[serde(rename = "hrvSummaries")]
    pub hrv_summaries: Vec<HrvSummary>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HrvSummary {
    #[serde(rename = "calendarDate")]
    pub calendar_date: NaiveDate,
    #[serde(rename = "lastNightAvg", default)]
    pub last_night_avg: Option<f64>,
}

pub fn rest_heart_rates_from(days: Vec<DailyHeartRate>) -> RestHeartRates {
    days.into_iter()
        .map(|d| (d.calendar_date, d.values.resting_hr))
        .collect()
}

pub fn hrv_from(envelope: HrvEnvelope) -> HrvSeries {
    envelope
        .hrv_summaries
        .into_iter()
        .map(|s| (s.calendar_date, s.last_night_avg))
        .collect()
}
