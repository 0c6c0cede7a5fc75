//! Fatal errors raised while generating a configuration.

use mosaic_arch::DeviceVariant;
use mosaic_common::InternalError;

/// Errors that abort configuration generation.
///
/// Non-fatal conditions (unplaced cells, unhandled primitive kinds) are
/// reported through the diagnostic sink instead.
#[derive(Debug, thiserror::Error)]
pub enum BitstreamError {
    /// No base configuration is registered for the device variant.
    #[error("unsupported device type {0}: no base configuration registered")]
    UnsupportedDevice(DeviceVariant),

    /// A bit-string parameter could not be decoded.
    #[error("error parsing value '{value}': {reason}")]
    MalformedLiteral {
        /// The offending parameter value.
        value: String,
        /// What was wrong with it.
        reason: String,
    },

    /// A cell was placed on a BEL whose name does not fit its primitive kind.
    #[error("site '{site}' is not a valid site name (expected prefix '{expected_prefix}')")]
    InvalidSiteName {
        /// The BEL name.
        site: String,
        /// The prefix the primitive kind requires.
        expected_prefix: &'static str,
    },

    /// The letter after the site prefix is outside `A..=D`.
    #[error("site '{site}' has out-of-range index {index}")]
    SiteIndexOutOfRange {
        /// The BEL name.
        site: String,
        /// The decoded index.
        index: i32,
    },

    /// A device database lookup failed.
    #[error(transparent)]
    Internal(#[from] InternalError),

    /// Writing the text configuration failed.
    #[error("failed to write text configuration: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for configuration generation.
pub type BitstreamResult<T> = Result<T, BitstreamError>;
