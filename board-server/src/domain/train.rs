//! Train run and arrival board entry types.

use chrono::{DateTime, Utc};

use super::ShortCode;

/// Whether a timetable row describes an arrival or a departure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowType {
    Arrival,
    Departure,
}

/// One stop in a train's timetable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimetableRow {
    /// Station this row refers to.
    pub station_short_code: ShortCode,

    /// Arrival or departure at that station.
    pub row_type: RowType,

    /// Scheduled time of the event.
    pub scheduled_time: DateTime<Utc>,

    /// Live estimate, when the upstream feed has one.
    pub live_estimate_time: Option<DateTime<Utc>>,
}

/// A single train in a live-trains response.
///
/// Produced fresh per query and discarded after the board is built;
/// never mutated after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrainRun {
    /// Commuter line identifier, e.g. "A", "P". May be empty for
    /// long-distance services.
    pub line_id: String,

    /// Train type, e.g. "HL", "IC", "S".
    pub train_type: String,

    /// Timetable rows in journey order.
    pub timetable_rows: Vec<TimetableRow>,
}

/// One row of a rendered arrival board.
///
/// Derived per render cycle from a [`TrainRun`] and a target station;
/// not persisted anywhere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArrivalEntry {
    /// Commuter line identifier of the train.
    pub line_id: String,

    /// Train type of the train.
    pub train_type: String,

    /// Scheduled arrival time at the target station.
    pub scheduled_time: DateTime<Utc>,

    /// Whole minutes of delay against the live estimate. Zero when
    /// there is no live estimate; may be negative for early running.
    pub delay_minutes: i64,

    /// True only for a strictly positive delay. Early and on-time
    /// arrivals both display as "On time".
    pub is_delayed: bool,
}
