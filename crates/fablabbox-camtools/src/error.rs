//! Error types for the box generator crate.
//!
//! Geometry errors abort the current box request; configuration errors are
//! raised while loading and validating a request file.

use std::io;
use thiserror::Error;

/// Errors that can occur while generating a box.
#[derive(Error, Debug)]
pub enum BoxError {
    /// The tab width derived for an edge is too narrow for the material.
    #[error(
        "Resulting tabs ({computed:.3} mm) are too narrow for the material thickness \
         (must exceed {limit:.3} mm); increase the tab size or reduce the material thickness"
    )]
    InsufficientTabWidth { computed: f32, limit: f32 },

    /// The edge is shorter than a single tab.
    #[error("Edge of {length:.3} mm cannot hold a single {tab_width:.3} mm tab")]
    EdgeTooShort { length: f32, tab_width: f32 },

    /// The box variant selector is not recognized.
    #[error("Unknown box variant: {0}")]
    UnknownVariant(String),

    /// A box request could not be loaded or is invalid.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

/// Errors related to loading and validating box requests.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Dimensions are invalid (zero or negative).
    #[error("Invalid dimensions: {0}")]
    InvalidDimensions(String),

    /// A parameter value is out of the valid range.
    #[error("Parameter '{name}' out of range: {value} (valid: {min}..{max})")]
    OutOfRange {
        name: String,
        value: f32,
        min: f32,
        max: f32,
    },

    /// The request file format is not supported.
    #[error("Unsupported config format: {0}")]
    UnsupportedFormat(String),

    /// I/O error during file operations.
    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// TOML parse error.
    #[error("TOML error: {0}")]
    TomlError(#[from] toml::de::Error),

    /// TOML serialization error.
    #[error("TOML serialization error: {0}")]
    TomlSerError(#[from] toml::ser::Error),
}

/// Result type alias for box generation.
pub type BoxResult<T> = Result<T, BoxError>;

/// Result type alias for request loading.
pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_box_error_display() {
        let err = BoxError::InsufficientTabWidth {
            computed: 4.0,
            limit: 4.5,
        };
        let msg = err.to_string();
        assert!(msg.contains("4.000 mm"));
        assert!(msg.contains("4.500 mm"));
        assert!(msg.contains("increase the tab size"));

        let err = BoxError::UnknownVariant("round".to_string());
        assert_eq!(err.to_string(), "Unknown box variant: round");
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::OutOfRange {
            name: "backlash".to_string(),
            value: -1.0,
            min: 0.0,
            max: 5.0,
        };
        assert_eq!(
            err.to_string(),
            "Parameter 'backlash' out of range: -1 (valid: 0..5)"
        );

        let err = ConfigError::UnsupportedFormat("box.yaml".to_string());
        assert_eq!(err.to_string(), "Unsupported config format: box.yaml");
    }

    #[test]
    fn test_error_conversion() {
        let cfg_err = ConfigError::InvalidDimensions("width must be positive".to_string());
        let box_err: BoxError = cfg_err.into();
        assert!(matches!(box_err, BoxError::Config(_)));

        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let cfg_err: ConfigError = io_err.into();
        assert!(matches!(cfg_err, ConfigError::IoError(_)));
    }
}
