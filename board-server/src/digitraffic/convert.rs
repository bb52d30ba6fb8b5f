//! Conversion from Digitraffic DTOs to domain types.
//!
//! Raw live-trains responses become validated [`TrainRun`]s here. Rows
//! with an unknown type or an unparseable short code invalidate only
//! the train they belong to, never the whole response.

use tracing::warn;

use crate::domain::{RowType, ShortCode, TimetableRow, TrainRun};

use super::types::{TimetableRowDto, TrainDto};

/// Error during DTO to domain conversion.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ConversionError {
    /// Failed to parse a station short code
    #[error("invalid short code: {0}")]
    InvalidShortCode(String),

    /// Timetable row type was neither ARRIVAL nor DEPARTURE
    #[error("unknown row type: {0}")]
    UnknownRowType(String),
}

/// Convert a live-trains response to domain types.
///
/// Trains that fail conversion are skipped with a warning; train order
/// is otherwise preserved.
pub fn convert_trains(trains: Vec<TrainDto>) -> Vec<TrainRun> {
    let mut results = Vec::with_capacity(trains.len());

    for train in trains {
        match convert_train(train) {
            Ok(run) => results.push(run),
            Err(e) => warn!(error = %e, "skipping unconvertible train"),
        }
    }

    results
}

/// Convert a single train.
pub fn convert_train(train: TrainDto) -> Result<TrainRun, ConversionError> {
    let timetable_rows = train
        .time_table_rows
        .into_iter()
        .map(convert_row)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(TrainRun {
        line_id: train.commuter_line_id,
        train_type: train.train_type,
        timetable_rows,
    })
}

fn convert_row(row: TimetableRowDto) -> Result<TimetableRow, ConversionError> {
    let station_short_code = ShortCode::parse(&row.station_short_code)
        .map_err(|_| ConversionError::InvalidShortCode(row.station_short_code.clone()))?;

    let row_type = match row.row_type.as_str() {
        "ARRIVAL" => RowType::Arrival,
        "DEPARTURE" => RowType::Departure,
        other => return Err(ConversionError::UnknownRowType(other.to_string())),
    };

    Ok(TimetableRow {
        station_short_code,
        row_type,
        scheduled_time: row.scheduled_time,
        live_estimate_time: row.live_estimate_time,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn row_dto(code: &str, row_type: &str) -> TimetableRowDto {
        TimetableRowDto {
            station_short_code: code.to_string(),
            row_type: row_type.to_string(),
            scheduled_time: Utc.with_ymd_and_hms(2026, 8, 26, 10, 0, 0).unwrap(),
            live_estimate_time: None,
        }
    }

    #[test]
    fn converts_valid_train() {
        let dto = TrainDto {
            commuter_line_id: "A".to_string(),
            train_type: "HL".to_string(),
            time_table_rows: vec![row_dto("PSL", "DEPARTURE"), row_dto("HKI", "ARRIVAL")],
        };

        let run = convert_train(dto).unwrap();
        assert_eq!(run.line_id, "A");
        assert_eq!(run.timetable_rows.len(), 2);
        assert_eq!(run.timetable_rows[0].row_type, RowType::Departure);
        assert_eq!(run.timetable_rows[1].row_type, RowType::Arrival);
    }

    #[test]
    fn rejects_unknown_row_type() {
        let dto = TrainDto {
            commuter_line_id: String::new(),
            train_type: "IC".to_string(),
            time_table_rows: vec![row_dto("HKI", "PASSING")],
        };

        assert!(matches!(
            convert_train(dto),
            Err(ConversionError::UnknownRowType(_))
        ));
    }

    #[test]
    fn rejects_invalid_short_code() {
        let dto = TrainDto {
            commuter_line_id: String::new(),
            train_type: "IC".to_string(),
            time_table_rows: vec![row_dto("h k i", "ARRIVAL")],
        };

        assert!(matches!(
            convert_train(dto),
            Err(ConversionError::InvalidShortCode(_))
        ));
    }

    #[test]
    fn bad_train_is_skipped_without_dropping_others() {
        let good = TrainDto {
            commuter_line_id: "P".to_string(),
            train_type: "HL".to_string(),
            time_table_rows: vec![row_dto("HKI", "ARRIVAL")],
        };
        let bad = TrainDto {
            commuter_line_id: String::new(),
            train_type: "IC".to_string(),
            time_table_rows: vec![row_dto("HKI", "PASSING")],
        };

        let runs = convert_trains(vec![bad, good]);
        assert_eq!(runs.len(), 1);
        assert_eq!(runs[0].line_id, "P");
    }
}
