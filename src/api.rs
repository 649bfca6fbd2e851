//! HTTP client for the Poltava air monitoring API
//!
//! The city administration publishes air quality data as static JSON files:
//! - `/posts/posts.json`: summary of all monitoring posts
//! - `/posts/post-{id}.json`: detail payload for one post, wrapped in a
//!   one-element array
//!
//! No API key is required. The client performs plain GETs with a fixed
//! request timeout; scheduling and retry cadence belong to the coordinator
//! layer, not here.

use serde::de::DeserializeOwned;

use crate::reading::RawStationReading;
use crate::stations::{nearest_station, Station};
use crate::types::{AirMonitorError, Result};

/// Client for the Poltava air monitoring endpoints
pub struct AirMonitorClient {
    client: reqwest::Client,
}

impl AirMonitorClient {
    pub const BASE_URL: &'static str = "https://improvement-pl.gov.ua";

    const REQUEST_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(30);

    /// Create a client with its own connection pool
    pub fn new() -> Self {
        let client = reqwest::Client::builder()
            .timeout(Self::REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self { client }
    }

    /// Create a client on top of a shared session
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }

    /// Fetch the station directory.
    ///
    /// Fails with `NoStationsAvailable` when the provider returns an empty
    /// list.
    pub async fn list_stations(&self) -> Result<Vec<Station>> {
        let url = format!("{}/posts/posts.json", Self::BASE_URL);
        let stations: Vec<Station> = self.get_json(&url).await?;

        if stations.is_empty() {
            return Err(AirMonitorError::NoStationsAvailable);
        }

        log::debug!("Fetched {} monitoring stations", stations.len());
        Ok(stations)
    }

    /// Fetch the raw detail payload for one station.
    ///
    /// The provider wraps the detail object in a JSON array, usually a single
    /// element without an `id` field. `reading::normalize` matches by id when
    /// one is present and otherwise accepts the sole element as the requested
    /// station.
    pub async fn fetch_raw_reading(&self, station_id: i64) -> Result<Vec<RawStationReading>> {
        let url = format!("{}/posts/post-{}.json", Self::BASE_URL, station_id);
        self.get_json(&url).await
    }

    /// Fetch the directory and resolve the station nearest to (lat, lon).
    pub async fn find_nearest_station(&self, lat: f64, lon: f64) -> Result<Station> {
        let stations = self.list_stations().await?;
        let nearest = nearest_station(lat, lon, &stations)?;
        log::debug!(
            "Nearest station to ({}, {}): {} (id={})",
            lat,
            lon,
            nearest.name,
            nearest.id
        );
        Ok(nearest.clone())
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        log::debug!("GET {}", url);

        let response = self.client.get(url).send().await?;

        if !response.status().is_success() {
            return Err(AirMonitorError::InvalidData(format!(
                "API returned status {}",
                response.status()
            )));
        }

        Ok(response.json().await?)
    }
}

impl Default for AirMonitorClient {
    fn default() -> Self {
        Self::new()
    }
}
