//! Domain types for stations and trains.

mod station;
mod train;

pub use station::{InvalidShortCode, ShortCode, Station};
pub use train::{ArrivalEntry, RowType, TimetableRow, TrainRun};
