//! Garmin Connect access: endpoint client, response types and pagination.

pub mod http;
pub mod paging;
pub mod types;

pub use http::{ClientConfig, GarminClient};
pub use paging::{
    collect_metrics, CollectedMetrics, DailyMetricsSource, DateRange, DateWindow, PAGE_DAYS,
};
pub use types::{HrvSeries, MetricSeries, RestHeartRates};
