//! Digitraffic rata HTTP client.
//!
//! Provides async methods for fetching the station catalog and the
//! live-trains feed for a single station.

use crate::domain::ShortCode;

use super::convert::convert_trains;
use super::error::DigitrafficError;
use super::types::{StationDto, TrainDto};
use crate::domain::TrainRun;

/// Default base URL for the Digitraffic rata API.
const DEFAULT_BASE_URL: &str = "https://rata.digitraffic.fi/api/v1";

/// Configuration for the Digitraffic client.
#[derive(Debug, Clone)]
pub struct DigitrafficConfig {
    /// Base URL for the API (defaults to production Digitraffic)
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl DigitrafficConfig {
    /// Create a config with production defaults.
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 30,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

impl Default for DigitrafficConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Digitraffic rata API client.
///
/// The API is open data and requires no authentication.
#[derive(Debug, Clone)]
pub struct DigitrafficClient {
    http: reqwest::Client,
    base_url: String,
}

impl DigitrafficClient {
    /// Create a new Digitraffic client with the given configuration.
    pub fn new(config: DigitrafficConfig) -> Result<Self, DigitrafficError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
        })
    }

    /// Fetch the station catalog.
    ///
    /// Returns every station in the metadata feed, passenger-serving or
    /// not; filtering happens at index load time.
    pub async fn fetch_stations(&self) -> Result<Vec<StationDto>, DigitrafficError> {
        let url = format!("{}/metadata/stations", self.base_url);

        let response = self.http.get(&url).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(DigitrafficError::ApiError {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        serde_json::from_str(&body).map_err(|e| DigitrafficError::Json {
            message: e.to_string(),
            body: Some(body.chars().take(500).collect()),
        })
    }

    /// Fetch live trains for a station.
    ///
    /// The station short code is passed as the `station` query
    /// parameter. Trains that fail domain conversion are dropped.
    pub async fn fetch_live_trains(
        &self,
        station: &ShortCode,
    ) -> Result<Vec<TrainRun>, DigitrafficError> {
        let url = format!("{}/live-trains", self.base_url);

        let response = self
            .http
            .get(&url)
            .query(&[("station", station.as_str())])
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(DigitrafficError::ApiError {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        let trains: Vec<TrainDto> =
            serde_json::from_str(&body).map_err(|e| DigitrafficError::Json {
                message: e.to_string(),
                body: Some(body.chars().take(500).collect()),
            })?;

        Ok(convert_trains(trains))
    }
}
