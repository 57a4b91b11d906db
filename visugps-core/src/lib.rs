//! Core shared library for the VisuGps track tools.
//!
//! This crate carries the ambient pieces every consumer of the protocol
//! types relies on: the canonical error type, configuration loading
//! (including the time validation policy), logging setup and JSON helpers.

pub mod config;
pub mod errors;
pub mod logging;
pub mod serde_utils;

pub use config::{load_time_config, TimeConfig, ValidationMode};
pub use errors::{Result as CoreResult, VisuGpsError};
