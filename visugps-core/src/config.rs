use std::env;
use std::str::FromStr;

use tracing::{debug, warn};
use visugps_protocol::time::TimeValue;

use crate::errors::{ConfigError, Result, VisuGpsError};

const VALIDATION_SUFFIX: &str = "TIME_VALIDATION";
const DEFAULT_PREFIX: &str = "VISUGPS_";

/// How time values coming from a track are admitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValidationMode {
    /// Store any triple as-is; the timestamp formula runs on raw fields.
    #[default]
    Lenient,
    /// Reject fields outside 0-23 / 0-59 / 0-59.
    Strict,
}

impl ValidationMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ValidationMode::Lenient => "lenient",
            ValidationMode::Strict => "strict",
        }
    }
}

impl FromStr for ValidationMode {
    type Err = ConfigError;

    fn from_str(value: &str) -> std::result::Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "strict" | "validated" => Ok(ValidationMode::Strict),
            "lenient" | "permissive" => Ok(ValidationMode::Lenient),
            other => Err(ConfigError::UnknownValidationMode(other.to_string())),
        }
    }
}

/// Time handling options shared by the VisuGps tools.
#[derive(Debug, Clone, Default)]
pub struct TimeConfig {
    pub validation: ValidationMode,
}

impl TimeConfig {
    pub fn new(validation: ValidationMode) -> Self {
        Self { validation }
    }

    /// Loads configuration from the process environment (`VISUGPS_TIME_VALIDATION`).
    pub fn from_env() -> std::result::Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_env_with_prefix(DEFAULT_PREFIX)
    }

    /// Loads configuration from env vars prefixed with the provided value (e.g. `TRACK_`).
    pub fn from_env_with_prefix(prefix: &str) -> std::result::Result<Self, ConfigError> {
        let key = format!("{}{}", prefix, VALIDATION_SUFFIX);

        let validation = match env::var(&key) {
            Ok(raw) => raw.parse::<ValidationMode>().map_err(|_| ConfigError::InvalidEnvVar {
                key: key.clone(),
                value: raw,
            })?,
            Err(env::VarError::NotPresent) => ValidationMode::default(),
            Err(env::VarError::NotUnicode(raw)) => {
                return Err(ConfigError::InvalidEnvVar {
                    key,
                    value: raw.to_string_lossy().into_owned(),
                })
            }
        };

        debug!(%key, mode = validation.as_str(), "loaded time configuration");
        Ok(Self { validation })
    }

    pub fn is_strict(&self) -> bool {
        matches!(self.validation, ValidationMode::Strict)
    }

    /// Builds a time value from a raw triple according to the validation mode.
    pub fn build(&self, hour: u8, minute: u8, second: u8) -> Result<TimeValue> {
        self.admit(TimeValue::new(hour, minute, second))
    }

    /// Applies the validation mode to an existing value.
    pub fn admit(&self, value: TimeValue) -> Result<TimeValue> {
        match self.validation {
            ValidationMode::Strict => {
                value.validate()?;
                Ok(value)
            }
            ValidationMode::Lenient => {
                if let Err(err) = value.validate() {
                    warn!(time = %value, error = %err, "accepting out-of-range time of day");
                }
                Ok(value)
            }
        }
    }
}

/// Helper that loads config and converts to the canonical VisuGps error type.
pub fn load_time_config() -> std::result::Result<TimeConfig, VisuGpsError> {
    Ok(TimeConfig::from_env()?)
}
