//! Digitraffic rata API client.
//!
//! This module provides an HTTP client for the Finnish Transport
//! Infrastructure Agency's open rail data API (rata.digitraffic.fi),
//! which serves station metadata and real-time train information.
//!
//! Key characteristics of the API:
//! - No authentication required (open data)
//! - Timestamps are RFC 3339 instants in UTC
//! - `live-trains?station={code}` returns each train's full timetable,
//!   so arrival rows for the queried station must be picked out locally

mod client;
mod convert;
mod error;
mod types;

pub use client::{DigitrafficClient, DigitrafficConfig};
pub use convert::{ConversionError, convert_train, convert_trains};
pub use error::DigitrafficError;
pub use types::{StationDto, TimetableRowDto, TrainDto};
