//! Error types for configuration loading and validation.

/// Errors that can occur when loading, validating or resolving a `mosaic.toml` configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// An I/O error occurred while reading the configuration file.
    #[error("failed to read configuration: {0}")]
    IoError(#[from] std::io::Error),

    /// The TOML content could not be parsed.
    #[error("failed to parse configuration: {0}")]
    ParseError(String),

    /// The device variant named in the configuration or on the command line is not known.
    #[error("unknown device '{0}'")]
    UnknownDevice(String),

    /// A value needed to run is set neither in the file nor on the command line.
    #[error("missing required field: {0}")]
    MissingField(String),

    /// A configuration value failed validation.
    #[error("validation error: {0}")]
    ValidationError(String),
}
