//! Diagnostic codes emitted during configuration generation.

use mosaic_diagnostics::{Category, DiagnosticCode};

/// A cell has no BEL assignment.
pub const UNPLACED_CELL: DiagnosticCode = DiagnosticCode::new(Category::Bitstream, 501);
/// The device variant has no registered base configuration.
pub const UNSUPPORTED_DEVICE: DiagnosticCode = DiagnosticCode::new(Category::Bitstream, 502);
/// No encoder handles a cell's primitive kind.
pub const UNHANDLED_PRIMITIVE: DiagnosticCode = DiagnosticCode::new(Category::Bitstream, 503);
/// Counts of what was emitted.
pub const GENERATION_SUMMARY: DiagnosticCode = DiagnosticCode::new(Category::Bitstream, 504);
/// Generation or writing aborted on a fatal error.
pub const GENERATION_FAILED: DiagnosticCode = DiagnosticCode::new(Category::Bitstream, 505);
