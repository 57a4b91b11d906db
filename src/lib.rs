//! VisuGps: time-of-day values carried by GPS track points
//!
//! The workspace is split in two crates re-exported here:
//!
//! * `visugps-protocol`: the [`TimeValue`] record shared with track readers and renderers
//! * `visugps-core`: errors, configuration (time validation mode), logging and JSON helpers

pub use visugps_core::logging::init_tracing;
pub use visugps_core::serde_utils;
pub use visugps_core::{load_time_config, TimeConfig, ValidationMode, VisuGpsError};
pub use visugps_protocol::time::{TimeError, TimeField, TimeValue};

pub mod prelude {
    pub use visugps_core::config::{TimeConfig, ValidationMode};
    pub use visugps_core::errors::{Result, VisuGpsError};
    pub use visugps_protocol::prelude::*;
}
