//! Digitraffic API response DTOs.
//!
//! These types map directly to the rata.digitraffic.fi JSON responses.
//! Field names follow the wire contract exactly; unknown fields are
//! ignored so upstream additions do not break deserialization.

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// One station from `GET /api/v1/metadata/stations`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StationDto {
    /// Human-readable name, e.g. "Helsinki asema".
    pub station_name: String,

    /// Compact unique identifier, e.g. "HKI".
    pub station_short_code: String,

    /// Whether the station handles passenger traffic. Freight-only
    /// stops are filtered out at load time.
    pub passenger_traffic: bool,
}

/// One train from `GET /api/v1/live-trains?station={code}`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainDto {
    /// Commuter line identifier. Empty for long-distance services.
    #[serde(rename = "commuterLineID", default)]
    pub commuter_line_id: String,

    /// Train type, e.g. "HL", "IC".
    pub train_type: String,

    /// The train's full timetable, in journey order.
    #[serde(default)]
    pub time_table_rows: Vec<TimetableRowDto>,
}

/// One timetable row within a train.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimetableRowDto {
    /// Station this row refers to.
    pub station_short_code: String,

    /// "ARRIVAL" or "DEPARTURE".
    #[serde(rename = "type")]
    pub row_type: String,

    /// Scheduled time (RFC 3339, UTC).
    pub scheduled_time: DateTime<Utc>,

    /// Live estimate, omitted when the feed has none.
    pub live_estimate_time: Option<DateTime<Utc>>,
}
