//! Diagnostic codes for input loading failures reported by the CLI.

use mosaic_diagnostics::{Category, DiagnosticCode};

/// `mosaic.toml` could not be loaded, or required inputs are missing.
pub const INVALID_CONFIG: DiagnosticCode = DiagnosticCode::new(Category::Config, 101);
/// The device database could not be read or is inconsistent.
pub const CHIPDB_LOAD_FAILED: DiagnosticCode = DiagnosticCode::new(Category::Device, 201);
/// The device database describes a different variant than requested.
pub const DEVICE_MISMATCH: DiagnosticCode = DiagnosticCode::new(Category::Device, 202);
/// The routed design could not be read or refers to unknown resources.
pub const DESIGN_LOAD_FAILED: DiagnosticCode = DiagnosticCode::new(Category::Design, 301);
