//! Monitor configuration and station selection
//!
//! The two mutually exclusive selection modes (pick by id, nearest to
//! coordinates) are a tagged variant resolved once at setup time into a
//! concrete `Station`; nothing downstream branches on the mode again.

use std::time::Duration;

use crate::api::AirMonitorClient;
use crate::aqi::Language;
use crate::stations::{nearest_station, Station};
use crate::types::{AirMonitorError, Result};

pub const DEFAULT_NAME: &str = "Poltava Air Monitor";
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(600);

/// How the monitored station is chosen
#[derive(Debug, Clone, PartialEq)]
pub enum StationSelection {
    /// A station id from the provider's directory
    ById(i64),
    /// The station nearest to the given WGS84 coordinates
    ByCoordinates { lat: f64, lon: f64 },
}

impl StationSelection {
    /// Resolve the selection against a fetched directory.
    pub fn select<'a>(&self, stations: &'a [Station]) -> Result<&'a Station> {
        match *self {
            StationSelection::ById(id) => stations
                .iter()
                .find(|s| s.id == id)
                .ok_or(AirMonitorError::StationNotFound(id)),
            StationSelection::ByCoordinates { lat, lon } => nearest_station(lat, lon, stations),
        }
    }

    /// Fetch the directory and resolve the selection into a concrete station.
    pub async fn resolve(&self, client: &AirMonitorClient) -> Result<Station> {
        let stations = client.list_stations().await?;
        Ok(self.select(&stations)?.clone())
    }
}

/// Configuration for one monitor instance
#[derive(Debug, Clone)]
pub struct MonitorConfig {
    /// Friendly instance name
    pub name: String,
    pub selection: StationSelection,
    pub poll_interval: Duration,
    pub language: Language,
}

impl MonitorConfig {
    pub fn new(selection: StationSelection) -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
            selection,
            poll_interval: DEFAULT_POLL_INTERVAL,
            language: Language::English,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn station(id: i64, lat: f64, lon: f64) -> Station {
        Station {
            id,
            name: format!("Post {}", id),
            address: String::new(),
            station_type: String::new(),
            lat,
            lon,
        }
    }

    #[test]
    fn test_select_by_id() {
        let stations = vec![station(1, 49.58, 34.54), station(5, 49.60, 34.56)];
        let selected = StationSelection::ById(5).select(&stations).unwrap();
        assert_eq!(selected.id, 5);
    }

    #[test]
    fn test_select_by_missing_id() {
        let stations = vec![station(1, 49.58, 34.54)];
        let result = StationSelection::ById(9).select(&stations);
        assert!(matches!(result, Err(AirMonitorError::StationNotFound(9))));
    }

    #[test]
    fn test_select_by_coordinates() {
        let stations = vec![station(1, 49.58, 34.54), station(5, 49.60, 34.56)];
        let selection = StationSelection::ByCoordinates {
            lat: 49.581,
            lon: 34.541,
        };
        let selected = selection.select(&stations).unwrap();
        assert_eq!(selected.id, 1);
    }

    #[test]
    fn test_select_by_coordinates_empty_directory() {
        let selection = StationSelection::ByCoordinates {
            lat: 49.58,
            lon: 34.54,
        };
        let result = selection.select(&[]);
        assert!(matches!(result, Err(AirMonitorError::NoStationsAvailable)));
    }

    #[test]
    fn test_config_defaults() {
        let config = MonitorConfig::new(StationSelection::ById(1));
        assert_eq!(config.name, DEFAULT_NAME);
        assert_eq!(config.poll_interval, Duration::from_secs(600));
        assert_eq!(config.language, Language::English);
    }
}
