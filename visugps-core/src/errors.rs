use thiserror::Error;
use visugps_protocol::time::TimeError;

/// Result type used across the VisuGps core crate.
pub type Result<T> = std::result::Result<T, VisuGpsError>;

/// Canonical error representation shared by all VisuGps crates.
#[derive(Debug, Error)]
pub enum VisuGpsError {
    #[error("time error: {0}")]
    Time(#[from] TimeError),

    #[error("serialization error: {0}")]
    SerializationError(String),

    #[error("deserialization error: {0}")]
    DeserializationError(String),

    #[error("configuration error: {0}")]
    ConfigError(String),

    #[error("general error: {0}")]
    GeneralError(String),
}

impl From<serde_json::Error> for VisuGpsError {
    fn from(err: serde_json::Error) -> Self {
        VisuGpsError::DeserializationError(err.to_string())
    }
}

/// Dedicated configuration error used by the configuration module.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for environment variable {key}: {value:?}")]
    InvalidEnvVar { key: String, value: String },

    #[error("unknown validation mode: {0:?}")]
    UnknownValidationMode(String),
}

impl From<ConfigError> for VisuGpsError {
    fn from(value: ConfigError) -> Self {
        VisuGpsError::ConfigError(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use visugps_protocol::time::TimeField;

    #[test]
    fn wraps_time_errors() {
        let err: VisuGpsError = TimeError::OutOfRange {
            field: TimeField::Second,
            value: 61,
            max: 59,
        }
        .into();
        assert!(matches!(err, VisuGpsError::Time(_)));
        assert_eq!(err.to_string(), "time error: second out of range: 61 (max 59)");
    }

    #[test]
    fn config_error_message_is_preserved() {
        let err: VisuGpsError = ConfigError::UnknownValidationMode("maybe".into()).into();
        assert!(err.to_string().contains("\"maybe\""));
    }
}
