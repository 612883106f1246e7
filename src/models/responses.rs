use serde::{Deserialize, Serialize};
use crate::models::domain::{Destination, RankedDestination};

/// A destination as returned by the query endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DestinationView {
    #[serde(flatten)]
    pub destination: Destination,
    /// Whole kilometers from the query origin
    #[serde(rename = "distanceKm")]
    pub distance_km: Option<i64>,
}

impl From<RankedDestination> for DestinationView {
    fn from(ranked: RankedDestination) -> Self {
        let distance_km = ranked.display_distance_km();
        Self {
            destination: ranked.destination,
            distance_km,
        }
    }
}

/// Response for the destination query endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryDestinationsResponse {
    pub destinations: Vec<DestinationView>,
    pub total_results: usize,
    pub origin_available: bool,
    pub catalog_available: bool,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, message: impl Into<String>, status_code: u16) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
            status_code,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssistantResponse {
    pub reply: String,
}
