//! Monitoring Station Directory
//!
//! Models the fixed physical monitoring posts published by the Poltava city
//! administration and resolves the station closest to a target coordinate.
//!
//! # Data Sources
//! - Station list: `/posts/posts.json` on the provider
//! - Format: JSON array of post summaries
//!
//! # Location Mapping
//! The provider reports station coordinates in WGS84 degrees. Nearest-station
//! resolution uses the haversine great-circle distance with the mean Earth
//! radius; ties are broken by list order, first station wins.

use serde::{Deserialize, Serialize};

use crate::types::{AirMonitorError, Result};

/// Mean Earth radius in kilometers
const EARTH_RADIUS_KM: f64 = 6371.0;

/// A fixed air quality monitoring post
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Station {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub address: String,
    /// Station type as reported by the provider, e.g. "transport" or "background"
    #[serde(rename = "description", default)]
    pub station_type: String,
    pub lat: f64,
    #[serde(rename = "lng")]
    pub lon: f64,
}

/// Great-circle distance between two WGS84 coordinates in kilometers
pub fn haversine_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let phi1 = lat1.to_radians();
    let phi2 = lat2.to_radians();
    let dphi = (lat2 - lat1).to_radians();
    let dlambda = (lon2 - lon1).to_radians();

    let a = (dphi / 2.0).sin().powi(2) + phi1.cos() * phi2.cos() * (dlambda / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_KM * a.sqrt().asin()
}

/// Find the station closest to the given coordinates.
///
/// Ties are broken deterministically: the first station in list order wins.
/// Returns `NoStationsAvailable` when the candidate list is empty.
pub fn nearest_station(lat: f64, lon: f64, stations: &[Station]) -> Result<&Station> {
    let mut closest: Option<(&Station, f64)> = None;

    for station in stations {
        let distance = haversine_km(lat, lon, station.lat, station.lon);
        match closest {
            // Strictly smaller keeps the first candidate on ties
            Some((_, best)) if distance >= best => {}
            _ => closest = Some((station, distance)),
        }
    }

    closest
        .map(|(station, _)| station)
        .ok_or(AirMonitorError::NoStationsAvailable)
}
