//! Reading Normalizer
//!
//! Turns the raw per-station payload from the provider into an immutable
//! `StationReading` snapshot: typed measurements per parameter plus a derived
//! overall AQI classification.
//!
//! # Invariants
//! - A parameter with no current value is dropped from the snapshot rather
//!   than represented as zero or null.
//! - The overall AQI is always derived as the worst per-parameter quality
//!   index; it is absent when no parameter is classified, never zero.
//! - Snapshots are rebuilt from scratch on every poll and never mutated.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::aqi::{classify, AqiClassification, Language};
use crate::params::ParameterKind;
use crate::types::{AirMonitorError, Result};

/// Raw per-parameter record as published by the provider
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RawParameter {
    pub name: String,
    pub current_value: Option<f64>,
    pub avg_daily_value: Option<f64>,
    pub quality_index: Option<i64>,
}

/// Raw station detail payload; all value fields are nullable
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RawStationReading {
    /// Not always present in detail payloads; the provider serves one object
    /// per `post-{id}.json` file
    pub id: Option<i64>,
    pub name: Option<String>,
    pub address: Option<String>,
    pub description: Option<String>,
    pub updated: Option<String>,
    pub quality_desc: Option<String>,
    pub quality_recommendation: Option<String>,
    #[serde(default)]
    pub params: Vec<RawParameter>,
}

/// One normalized measurement; present only when the station reported a value
#[derive(Debug, Clone, Serialize)]
pub struct Measurement {
    pub kind: ParameterKind,
    pub value: f64,
    pub daily_average: Option<f64>,
    /// Provider-assigned severity level; only pollutants carry one
    pub quality_index: Option<i64>,
}

/// Immutable snapshot of one station's latest readings
#[derive(Debug, Clone)]
pub struct StationReading {
    pub station_id: i64,
    pub station_name: String,
    pub station_address: String,
    pub station_type: String,
    /// Provider-reported last-updated string, passed through verbatim
    pub updated: Option<String>,
    pub fetched_at: DateTime<Utc>,
    pub measurements: Vec<Measurement>,
    /// Absent when no parameter carries a quality index
    pub aqi: Option<AqiClassification>,
}

impl StationReading {
    /// Look up a measurement by parameter kind
    pub fn measurement(&self, kind: ParameterKind) -> Option<&Measurement> {
        self.measurements.iter().find(|m| m.kind == kind)
    }
}

/// Parameters where the provider reports an all-zero row instead of null
/// when the sensor is offline.
fn zero_means_absent(kind: ParameterKind) -> bool {
    matches!(
        kind,
        ParameterKind::WindSpeed | ParameterKind::WindDirection | ParameterKind::Ozone
    )
}

/// Normalize the raw detail payload for `station_id` into a snapshot.
///
/// The provider wraps the detail object in a JSON array. The station is
/// looked up by id within it; since `post-{id}.json` carries a single object
/// that often omits the `id` field, a one-element payload without an id is
/// accepted as the requested station. Fails with `StationNotFound` when the
/// payload is empty or no element matches.
pub fn normalize(
    payload: &[RawStationReading],
    station_id: i64,
    language: Language,
) -> Result<StationReading> {
    let raw = payload
        .iter()
        .find(|r| r.id == Some(station_id))
        .or_else(|| match payload {
            [only] if only.id.is_none() => Some(only),
            _ => None,
        })
        .ok_or(AirMonitorError::StationNotFound(station_id))?;

    let mut measurements = Vec::with_capacity(raw.params.len());
    let mut worst_index: Option<i64> = None;

    for param in &raw.params {
        let Some(kind) = ParameterKind::from_provider_name(&param.name) else {
            log::warn!("Unknown parameter from provider: {}", param.name);
            continue;
        };

        let Some(value) = param.current_value else {
            continue;
        };

        if zero_means_absent(kind)
            && value == 0.0
            && param.avg_daily_value.unwrap_or(0.0) == 0.0
            && param.quality_index.unwrap_or(0) == 0
        {
            continue;
        }

        // Index 0 means "not classified" in the provider's data
        let quality_index = param.quality_index.filter(|&i| i > 0);
        if let Some(index) = quality_index {
            worst_index = Some(worst_index.map_or(index, |w| w.max(index)));
        }

        measurements.push(Measurement {
            kind,
            value,
            daily_average: param.avg_daily_value,
            quality_index,
        });
    }

    let aqi = worst_index.map(|level| {
        classify(
            level,
            language,
            raw.quality_desc.as_deref(),
            raw.quality_recommendation.as_deref(),
        )
    });

    Ok(StationReading {
        station_id,
        station_name: raw.name.clone().unwrap_or_default(),
        station_address: raw.address.clone().unwrap_or_default(),
        station_type: raw.description.clone().unwrap_or_default(),
        updated: raw.updated.clone(),
        fetched_at: Utc::now(),
        measurements,
        aqi,
    })
}
