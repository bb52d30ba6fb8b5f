//! Arrival board derivation.
//!
//! Turns a live-trains response into the rows an arrival board
//! displays: which trains actually arrive at the target station, and
//! how late each one is running.

use chrono::{DateTime, Utc};

use crate::domain::{ArrivalEntry, RowType, ShortCode, TimetableRow, TrainRun};

/// Build the arrival board for a station.
///
/// For each train, the first timetable row that is an arrival at the
/// target station supplies the entry; trains without one (departure-only
/// records, or a different station's train) are silently dropped.
/// Output preserves input train order; there is no re-sorting by time
/// or delay.
pub fn build_arrivals(trains: &[TrainRun], target: &ShortCode) -> Vec<ArrivalEntry> {
    trains
        .iter()
        .filter_map(|train| {
            let row = arrival_row_at(train, target)?;
            let delay = delay_minutes(row.scheduled_time, row.live_estimate_time);

            Some(ArrivalEntry {
                line_id: train.line_id.clone(),
                train_type: train.train_type.clone(),
                scheduled_time: row.scheduled_time,
                delay_minutes: delay,
                is_delayed: delay > 0,
            })
        })
        .collect()
}

/// The first arrival row at `target`, if the train has one.
fn arrival_row_at<'a>(train: &'a TrainRun, target: &ShortCode) -> Option<&'a TimetableRow> {
    train
        .timetable_rows
        .iter()
        .find(|r| r.row_type == RowType::Arrival && &r.station_short_code == target)
}

/// Delay in whole minutes, rounded half away from zero.
///
/// Zero when there is no live estimate. Negative values (early running)
/// are kept as computed; display normalization to "On time" happens via
/// the `is_delayed` flag, which only a strictly positive delay sets.
fn delay_minutes(scheduled: DateTime<Utc>, live_estimate: Option<DateTime<Utc>>) -> i64 {
    match live_estimate {
        Some(live) => {
            let secs = (live - scheduled).num_seconds();
            (secs as f64 / 60.0).round() as i64
        }
        None => 0,
    }
}
