//! Drift Server Library
//!
//! Exposes the router and API types so integration tests can drive
//! the HTTP surface in-process.

pub mod api;

pub use api::{compute_deviation, router, DeviationResponse, ScoreRequest};
