//! Live arrival board server.
//!
//! A web application that answers: "which trains are about to arrive
//! at this station, and how late are they?" Station data and live
//! trains come from the Finnish Digitraffic open rail API.

pub mod board;
pub mod cache;
pub mod digitraffic;
pub mod domain;
pub mod session;
pub mod stations;
pub mod web;
