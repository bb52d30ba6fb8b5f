//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::{ArrivalEntry, Station};

/// Request to search stations by name fragment.
#[derive(Debug, Deserialize)]
pub struct StationSearchRequest {
    /// Free-text query
    pub q: String,
}

/// A station in search results.
#[derive(Debug, Serialize)]
pub struct StationResult {
    /// Display name
    pub name: String,

    /// Short code, e.g. "HKI"
    pub short_code: String,
}

impl StationResult {
    pub fn from_station(station: &Station) -> Self {
        Self {
            name: station.name.clone(),
            short_code: station.short_code.as_str().to_string(),
        }
    }
}

/// Response for station search. An empty list means the suggestion
/// dropdown must be hidden.
#[derive(Debug, Serialize)]
pub struct StationSearchResponse {
    pub stations: Vec<StationResult>,
}

/// Request for a direct board lookup.
#[derive(Debug, Deserialize)]
pub struct BoardQueryRequest {
    /// Station short code
    pub station: String,
}

/// Request to select a station for the board.
#[derive(Debug, Deserialize)]
pub struct SelectStationRequest {
    /// Station short code picked from the suggestions
    pub code: String,
}

/// One row of the arrival board.
#[derive(Debug, Serialize)]
pub struct ArrivalResult {
    /// Commuter line identifier (may be empty)
    pub line_id: String,

    /// Train type, e.g. "HL"
    pub train_type: String,

    /// Scheduled arrival time (RFC 3339, UTC)
    pub scheduled_time: String,

    /// Delay in whole minutes (0 when no live estimate)
    pub delay_minutes: i64,

    /// Whether the train is running late
    pub is_delayed: bool,
}

impl ArrivalResult {
    pub fn from_entry(entry: &ArrivalEntry) -> Self {
        Self {
            line_id: entry.line_id.clone(),
            train_type: entry.train_type.clone(),
            scheduled_time: entry.scheduled_time.to_rfc3339(),
            delay_minutes: entry.delay_minutes,
            is_delayed: entry.is_delayed,
        }
    }
}

/// Response for a board fetch.
#[derive(Debug, Serialize)]
pub struct BoardResponse {
    /// The station the board is for
    pub station: StationResult,

    /// Arrival rows in feed order; empty means "no trains found"
    pub entries: Vec<ArrivalResult>,
}

/// Error payload for JSON clients.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
