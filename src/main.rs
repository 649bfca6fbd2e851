//! Poltava air monitor daemon
//!
//! Resolves a monitoring station (by id or nearest to coordinates), then
//! polls the provider on a fixed interval and logs each normalized snapshot.

use clap::Parser;
use log::info;

use poltava_air_monitor::{
    AirMonitorClient, Language, MonitorConfig, StationSelection, UpdateCoordinator,
};

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "poltava-airmon")]
#[command(about = "Poll the Poltava municipal air quality API and log station readings")]
struct Args {
    /// Monitoring station id (see --list-stations)
    #[arg(long, conflicts_with_all = ["latitude", "longitude"])]
    station_id: Option<i64>,

    /// Latitude for nearest-station lookup (WGS84 degrees)
    #[arg(long, requires = "longitude", allow_hyphen_values = true)]
    latitude: Option<f64>,

    /// Longitude for nearest-station lookup (WGS84 degrees)
    #[arg(long, requires = "latitude", allow_hyphen_values = true)]
    longitude: Option<f64>,

    /// Poll interval in seconds
    #[arg(long, default_value = "600")]
    interval: u64,

    /// Language for AQI classification strings (en, uk)
    #[arg(long, default_value = "en")]
    language: String,

    /// List available stations and exit
    #[arg(long)]
    list_stations: bool,
}

fn build_selection(args: &Args) -> Result<StationSelection, String> {
    if let Some(id) = args.station_id {
        return Ok(StationSelection::ById(id));
    }

    match (args.latitude, args.longitude) {
        (Some(lat), Some(lon)) => {
            if !(-90.0..=90.0).contains(&lat) {
                return Err(format!("latitude {} is outside [-90, 90]", lat));
            }
            if !(-180.0..=180.0).contains(&lon) {
                return Err(format!("longitude {} is outside [-180, 180]", lon));
            }
            Ok(StationSelection::ByCoordinates { lat, lon })
        }
        _ => Err("either --station-id or --latitude/--longitude is required".to_string()),
    }
}

#[tokio::main]
async fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let client = AirMonitorClient::new();

    if args.list_stations {
        let stations = client.list_stations().await?;
        for station in stations {
            println!(
                "{:>4}  {} ({}) - {}",
                station.id, station.name, station.station_type, station.address
            );
        }
        return Ok(());
    }

    let selection = build_selection(&args).map_err(std::io::Error::other)?;

    let language = Language::from_str(&args.language)
        .ok_or_else(|| std::io::Error::other(format!("unsupported language: {}", args.language)))?;

    let mut config = MonitorConfig::new(selection);
    config.poll_interval = std::time::Duration::from_secs(args.interval);
    config.language = language;

    let coordinator = UpdateCoordinator::new(client, config).await?;
    info!(
        "Polling every {}s, press Ctrl-C to stop",
        args.interval
    );

    coordinator.run().await;

    Ok(())
}
