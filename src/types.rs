//! Common types and error definitions for the Poltava air monitor client

use thiserror::Error;

/// Result type alias for air monitor operations
pub type Result<T> = std::result::Result<T, AirMonitorError>;

/// Error types for the Poltava air monitoring API
#[derive(Error, Debug)]
pub enum AirMonitorError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Provider returned invalid data: {0}")]
    InvalidData(String),

    #[error("Provider returned no monitoring stations")]
    NoStationsAvailable,

    #[error("Station {0} not found in provider data")]
    StationNotFound(i64),
}

impl AirMonitorError {
    /// True when the failure is on the provider side and a later poll may
    /// succeed without any configuration change.
    pub fn is_provider_unavailable(&self) -> bool {
        matches!(
            self,
            AirMonitorError::Http(_) | AirMonitorError::Json(_) | AirMonitorError::InvalidData(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_unavailable_classification() {
        assert!(AirMonitorError::InvalidData("truncated".to_string()).is_provider_unavailable());
        assert!(!AirMonitorError::NoStationsAvailable.is_provider_unavailable());
        assert!(!AirMonitorError::StationNotFound(7).is_provider_unavailable());
    }

    #[test]
    fn test_error_display() {
        let err = AirMonitorError::StationNotFound(12);
        assert_eq!(err.to_string(), "Station 12 not found in provider data");
    }
}
