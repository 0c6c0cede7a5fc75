//! Common result and error types for the Mosaic toolchain.

/// The standard result type for operations that can only fail on a bug.
///
/// `Err` indicates an internal inconsistency (for example a device database
/// that does not contain a tile the design refers to), not a user-facing
/// warning. Warnings are reported through
/// [`DiagnosticSink`](mosaic_diagnostics) and the operation still returns `Ok`.
pub type MosaicResult<T> = Result<T, InternalError>;

/// An internal error indicating an inconsistency between pipeline stages.
///
/// These errors should never occur when placement, routing and the device
/// database agree with each other. If one does occur, an upstream stage
/// produced data this stage cannot encode.
#[derive(Debug, thiserror::Error)]
#[error("internal error: {message}")]
pub struct InternalError {
    /// Description of the internal error.
    pub message: String,
}

impl InternalError {
    /// Creates a new internal error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl From<String> for InternalError {
    fn from(message: String) -> Self {
        Self { message }
    }
}
