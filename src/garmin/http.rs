use log::debug;
use reqwest::{header::HeaderMap, Client};
use serde_json::Value;

use super::paging::{DailyMetricsSource, DateWindow};
use super::types::{
    hrv_from, rest_heart_rates_from, DailyHeartRate, HrvEnvelope, HrvSeries, RestHeartRates,
};
use crate::core::{build_header_map, Credentials};
use crate::Result;


/// Public Garmin Connect web host.
pub const CONNECT_BASE_URL: &str = "https://connect.garmin.com";

pub const REST_HEART_RATE_PATH: &str = "/usersummary-service/stats/heartRate/daily/{begin}/{end}";
pub const HRV_PATH: &str = "/hrv-service/hrv/daily/{begin}/{end}";
pub const DEFAULT_BACKEND: &str = "connectapi.garmin.com";

/// Endpoint layout for [`GarminClient`].
///
/// Paths carry `{begin}` and `{end}` placeholders that are replaced by the
/// window bounds in `YYYY-MM-DD` form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    pub rest_heart_rate_path: String,
    pub hrv_path: String,
    pub backend: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: CONNECT_BASE_URL.to_string(),
            rest_heart_rate_path: REST_HEART_RATE_PATH.to_string(),
            hrv_path: HRV_PATH.to_string(),
            backend: DEFAULT_BACKEND.to_string(),
        }
    }
}

impl ClientConfig {
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    pub fn rest_heart_rate_url(&self, window: DateWindow) -> String {
        self.expand(&self.rest_heart_rate_path, window)
    }

    pub fn hrv_url(&self, window: DateWindow) -> String {
        self.expand(&self.hrv_path, window)
    }

    fn expand(&self, template: &str, window: DateWindow) -> String {
        let path = template
            .replace("{begin}", &window.begin.to_string())
            .replace("{end}", &window.end.to_string());
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }
}

/// Client for the two daily wellness endpoints.
#[derive(Debug, Clone)]
pub struct GarminClient {
    client: Client,
    config: ClientConfig,
    headers: HeaderMap,
}

impl GarminClient {
    pub fn new(config: ClientConfig, credentials: &Credentials) -> Result<Self> {
        let headers = build_header_map(credentials, &config.backend)?;
        let client = Client::builder().user_agent("garmin-stats/0.1").build()?;

        Ok(Self {
            client,
            config,
            headers,
        })
    }

    async fn get_json(&self, url: &str) -> Result<Value> {
        debug!("GET {}", url);

        let v = self
            .client
            .get(url)
            .headers(self.headers.clone())
            .send()
            .await?
            .error_for_status()?
            .json::<Value>()
            .await?;
        Ok(v)
    }

    /// Resting heart rate per day for `window`.
    pub async fn get_rest_heart_rate(&self, window: DateWindow) -> Result<RestHeartRates> {
        let url = self.config.rest_heart_rate_url(window);
        let days: Vec<DailyHeartRate> = serde_json::from_value(self.get_json(&url).await?)?;
        Ok(rest_heart_rates_from(days))
    }

    /// Last-night HRV average per day for `window`.
    pub async fn get_hrv(&self, window: DateWindow) -> Result<HrvSeries> {
        let url = self.config.hrv_url(window);
        let envelope: HrvEnvelope = serde_json::from_value(self.get_json(&url).await?)?;
        Ok(hrv_from(envelope))
    }
}

impl DailyMetricsSource for GarminClient {
    async fn rest_heart_rate(&self, window: DateWindow) -> Result<RestHeartRates> {
        self.get_rest_heart_rate(window).await
    }

    async fn hrv(&self, window: DateWindow) -> Result<HrvSeries> {
        self.get_hrv(window).await
    }
}
