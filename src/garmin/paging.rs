//! Date-range pagination for the daily stats endpoints.
//!
//! Garmin Connect caps how many days one request may span, so a requested
//! range is walked in consecutive windows of at most [`PAGE_DAYS`] days and
//! each page is merged into a cumulative series per metric.

use chrono::{Duration, NaiveDate};
use log::info;
use std::fmt;

use super::types::{HrvSeries, RestHeartRates};
use crate::{GarminError, Result};

/// Largest span requested in a single call.
pub const PAGE_DAYS: i64 = 25;

/// Requested span, `start <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self> {
        if start > end {
            return Err(GarminError::InvalidDateRange { start, end });
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Split the range into consecutive windows of at most `days` days.
    ///
    /// Each window begins where the previous one ended; the last one is
    /// clamped to `end`. An empty range yields nothing.
    pub fn windows(&self, days: i64) -> Windows {
        Windows {
            next: self.start,
            end: self.end,
            step: Duration::days(days.max(1)),
        }
    }
}

/// One page of a [`DateRange`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateWindow {
    pub begin: NaiveDate,
    pub end: NaiveDate,
}

impl fmt::Display for DateWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} : {}", self.begin, self.end)
    }
}

#[derive(Debug, Clone)]
pub struct Windows {
    next: NaiveDate,
    end: NaiveDate,
    step: Duration,
}

impl Iterator for Windows {
    type Item = DateWindow;

    fn next(&mut self) -> Option<DateWindow> {
        if self.next >= self.end {
            return None;
        }
        let begin = self.next;
        let end = begin
            .checked_add_signed(self.step)
            .map_or(self.end, |d| d.min(self.end));
        self.next = end;
        Some(DateWindow { begin, end })
    }
}

/// Anything that can answer the two per-window queries.
#[allow(async_fn_in_trait)]
pub trait DailyMetricsSource {
    async fn rest_heart_rate(&self, window: DateWindow) -> Result<RestHeartRates>;
    async fn hrv(&self, window: DateWindow) -> Result<HrvSeries>;
}

/// Cumulative result of walking a whole range.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CollectedMetrics {
    pub heart_rates: RestHeartRates,
    pub hrv: HrvSeries,
}

/// Fetch both metrics for every window of `range`, one request at a time.
///
/// Later pages overwrite earlier ones on duplicate dates.
pub async fn collect_metrics<S: DailyMetricsSource>(
    source: &S,
    range: DateRange,
) -> Result<CollectedMetrics> {
    let mut collected = CollectedMetrics::default();

    for window in range.windows(PAGE_DAYS) {
        info!("Getting data for {}", window);
        collected
            .heart_rates
            .extend(source.rest_heart_rate(window).await?);
        collected.hrv.extend(source.hrv(window).await?);
    }

    Ok(collected)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    /// Serves one heart-rate and one HRV value for each window begin date.
    #[derive(Default)]
    struct FakeSource {
        calls: RefCell<Vec<(&'static str, DateWindow)>>,
        fail_hrv_at: Option<NaiveDate>,
    }

    impl DailyMetricsSource for FakeSource {
        async fn rest_heart_rate(&self, window: DateWindow) -> Result<RestHeartRates> {
            self.calls.borrow_mut().push(("rhr", window));
            let bpm = 50 + (window.begin - date("2024-01-01")).num_days() as u32;
            Ok(RestHeartRates::from([(window.begin, Some(bpm))]))
        }

        async fn hrv(&self, window: DateWindow) -> Result<HrvSeries> {
            self.calls.borrow_mut().push(("hrv", window));
            if self.fail_hrv_at == Some(window.begin) {
                return Err(GarminError::Io(std::io::Error::new(
                    std::io::ErrorKind::ConnectionReset,
                    "reset",
                )));
            }
            Ok(HrvSeries::from([(window.begin, Some(40.0))]))
        }
    }

    #[test]
    fn test_date_range_rejects_inverted_bounds() {
        match DateRange::new(date("2024-02-01"), date("2024-01-01")).unwrap_err() {
            GarminError::InvalidDateRange { start, end } => {
                assert_eq!(start, date("2024-02-01"));
                assert_eq!(end, date("2024-01-01"));
            }
            other => panic!("Expected InvalidDateRange, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_range_has_no_windows() {
        let range = DateRange::new(date("2024-01-01"), date("2024-01-01")).unwrap();
        assert_eq!(range.windows(PAGE_DAYS).count(), 0);
    }

    #[test]
    fn test_short_range_is_single_clamped_window() {
        let range = DateRange::new(date("2024-01-01"), date("2024-01-10")).unwrap();
        let windows: Vec<_> = range.windows(PAGE_DAYS).collect();

        assert_eq!(
            windows,
            vec![DateWindow {
                begin: date("2024-01-01"),
                end: date("2024-01-10"),
            }]
        );
    }

    #[test]
    fn test_windows_advance_by_page_days() {
        let range = DateRange::new(date("2024-01-01"), date("2024-03-01")).unwrap();
        let windows: Vec<_> = range.windows(PAGE_DAYS).collect();

        assert_eq!(windows.len(), 3);
        assert_eq!(windows[0].begin, date("2024-01-01"));
        assert_eq!(windows[0].end, date("2024-01-26"));
        assert_eq!(windows[1].begin, date("2024-01-26"));
        assert_eq!(windows[1].end, date("2024-02-20"));
        assert_eq!(windows[2].begin, date("2024-02-20"));
        assert_eq!(windows[2].end, date("2024-03-01"));
    }

    #[test]
    fn test_windows_cover_range_without_gaps() {
        let start = date("2023-11-15");
        for span in 0..200 {
            let end = start + Duration::days(span);
            let range = DateRange::new(start, end).unwrap();
            let windows: Vec<_> = range.windows(PAGE_DAYS).collect();

            if span == 0 {
                assert!(windows.is_empty());
                continue;
            }

            assert_eq!(windows.first().unwrap().begin, start);
            assert_eq!(windows.last().unwrap().end, end);
            for w in &windows {
                assert!(w.begin < w.end);
                assert!((w.end - w.begin).num_days() <= PAGE_DAYS);
            }
            for pair in windows.windows(2) {
                assert_eq!(pair[0].end, pair[1].begin);
            }
        }
    }

    #[test]
    fn test_windows_near_max_date_clamp_instead_of_overflowing() {
        let end = NaiveDate::MAX;
        let start = end - Duration::days(10);
        let range = DateRange::new(start, end).unwrap();
        let windows: Vec<_> = range.windows(PAGE_DAYS).collect();

        assert_eq!(windows, vec![DateWindow { begin: start, end }]);
    }

    #[test]
    fn test_window_display() {
        let window = DateWindow {
            begin: date("2024-01-01"),
            end: date("2024-01-26"),
        };
        assert_eq!(window.to_string(), "2024-01-01 : 2024-01-26");
    }

    #[tokio::test]
    async fn test_collect_metrics_merges_pages() {
        let source = FakeSource::default();
        let range = DateRange::new(date("2024-01-01"), date("2024-02-15")).unwrap();

        let collected = collect_metrics(&source, range).await.unwrap();

        assert_eq!(collected.heart_rates.len(), 2);
        assert_eq!(collected.heart_rates[&date("2024-01-01")], Some(50));
        assert_eq!(collected.heart_rates[&date("2024-01-26")], Some(75));
        assert_eq!(collected.hrv.len(), 2);

        let calls = source.calls.borrow();
        let kinds: Vec<_> = calls.iter().map(|(k, _)| *k).collect();
        assert_eq!(kinds, vec!["rhr", "hrv", "rhr", "hrv"]);
    }

    #[tokio::test]
    async fn test_collect_metrics_empty_range_makes_no_calls() {
        let source = FakeSource::default();
        let range = DateRange::new(date("2024-01-01"), date("2024-01-01")).unwrap();

        let collected = collect_metrics(&source, range).await.unwrap();

        assert_eq!(collected, CollectedMetrics::default());
        assert!(source.calls.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_collect_metrics_stops_on_first_error() {
        let source = FakeSource {
            fail_hrv_at: Some(date("2024-01-26")),
            ..Default::default()
        };
        let range = DateRange::new(date("2024-01-01"), date("2024-03-01")).unwrap();

        assert!(collect_metrics(&source, range).await.is_err());
        // Third window is never requested
        assert_eq!(source.calls.borrow().len(), 4);
    }
}
