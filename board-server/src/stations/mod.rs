//! Station catalog: load, suggestion queries, short-code resolution.
//!
//! The pure lookup logic lives in [`StationIndex`]; [`StationCatalog`]
//! wraps it for shared use from the web layer, with fetch-at-startup
//! and periodic background refresh.

mod catalog;
mod index;

pub use catalog::StationCatalog;
pub use index::StationIndex;
