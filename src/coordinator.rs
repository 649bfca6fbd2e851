//! Update coordinator
//!
//! Drives the periodic poll cycle for one configured station and holds the
//! latest immutable `StationReading` snapshot. Each successful refresh
//! atomically replaces the snapshot; a failed refresh clears it so consumers
//! see the data as unavailable until the next successful poll rather than
//! reading stale values.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;

use crate::api::AirMonitorClient;
use crate::aqi::Language;
use crate::config::MonitorConfig;
use crate::reading::{normalize, StationReading};
use crate::stations::Station;
use crate::types::Result;

/// Periodic fetch-and-normalize loop for one station
pub struct UpdateCoordinator {
    client: AirMonitorClient,
    station: Station,
    language: Language,
    poll_interval: Duration,
    latest: Arc<RwLock<Option<Arc<StationReading>>>>,
}

impl UpdateCoordinator {
    /// Resolve the configured selection and build a coordinator for it.
    pub async fn new(client: AirMonitorClient, config: MonitorConfig) -> Result<Self> {
        let station = config.selection.resolve(&client).await?;
        log::info!(
            "Monitoring station {} (id={}, {})",
            station.name,
            station.id,
            station.address
        );
        Ok(Self::for_station(
            client,
            station,
            config.language,
            config.poll_interval,
        ))
    }

    /// Build a coordinator for an already-resolved station.
    pub fn for_station(
        client: AirMonitorClient,
        station: Station,
        language: Language,
        poll_interval: Duration,
    ) -> Self {
        Self {
            client,
            station,
            language,
            poll_interval,
            latest: Arc::new(RwLock::new(None)),
        }
    }

    /// The station this coordinator polls
    pub fn station(&self) -> &Station {
        &self.station
    }

    /// The latest snapshot, if the last poll succeeded
    pub async fn latest(&self) -> Option<Arc<StationReading>> {
        self.latest.read().await.clone()
    }

    /// Perform one poll cycle.
    ///
    /// On success the new snapshot replaces the previous one; on failure the
    /// stored snapshot is cleared and the error propagated.
    pub async fn refresh(&self) -> Result<Arc<StationReading>> {
        match self.try_refresh().await {
            Ok(snapshot) => {
                self.publish(Some(snapshot.clone())).await;
                Ok(snapshot)
            }
            Err(err) => {
                self.publish(None).await;
                Err(err)
            }
        }
    }

    async fn try_refresh(&self) -> Result<Arc<StationReading>> {
        let payload = self.client.fetch_raw_reading(self.station.id).await?;
        let reading = normalize(&payload, self.station.id, self.language)?;
        log::debug!(
            "Fetched {} measurements for station {}",
            reading.measurements.len(),
            self.station.id
        );
        Ok(Arc::new(reading))
    }

    async fn publish(&self, snapshot: Option<Arc<StationReading>>) {
        *self.latest.write().await = snapshot;
    }

    /// Poll forever on the configured interval.
    ///
    /// Cancellation is the caller's responsibility: drop the task running
    /// this future to stop polling.
    pub async fn run(&self) {
        let mut ticker = tokio::time::interval(self.poll_interval);
        loop {
            ticker.tick().await;
            match self.refresh().await {
                Ok(reading) => {
                    let aqi = reading
                        .aqi
                        .as_ref()
                        .map_or("n/a".to_string(), |a| format!("{} ({})", a.level, a.name));
                    log::info!(
                        "Station {}: {} measurements, AQI {}",
                        reading.station_name,
                        reading.measurements.len(),
                        aqi
                    );
                }
                Err(err) => {
                    log::error!("Poll failed for station {}: {}", self.station.id, err);
                }
            }
        }
    }
}
