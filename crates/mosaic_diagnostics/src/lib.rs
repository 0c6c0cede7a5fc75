//! Structured diagnostics for the bitstream toolchain.
//!
//! Every stage reports non-fatal conditions (unplaced cells, skipped
//! primitives, summaries) as [`Diagnostic`]s pushed into a thread-safe
//! [`DiagnosticSink`]. Fatal conditions are returned as errors, and the
//! command line turns them into error diagnostics before rendering.
//! [`DiagnosticRenderer`] implementations format the accumulated diagnostics
//! for a terminal or as JSON lines.

#![warn(missing_docs)]

pub mod code;
pub mod diagnostic;
pub mod renderer;
pub mod sink;

pub use code::{Category, DiagnosticCode};
pub use diagnostic::{Diagnostic, Severity};
pub use renderer::{DiagnosticRenderer, JsonRenderer, TerminalRenderer};
pub use sink::DiagnosticSink;
