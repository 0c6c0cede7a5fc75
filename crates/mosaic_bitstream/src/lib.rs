//! Configuration generation for Lattice MachXO2 devices.
//!
//! This crate turns a placed-and-routed [`PnrDesign`] into a [`ChipConfig`]:
//! the per-tile routing arcs, words and enums that the bitstream packer
//! consumes as a text configuration. Generation runs in a fixed order:
//!
//! 1. the device's base configuration is seeded ([`base_config`]),
//! 2. every bound, non-fixed PIP becomes an arc ([`pips`]),
//! 3. every placed primitive of a supported kind becomes settings ([`primitive`]).
//!
//! The main entry points are [`generate_config`], which builds the document,
//! and [`write_bitstream`], which also writes it out.

#![warn(missing_docs)]

pub mod base_config;
pub mod bits;
pub mod chip_config;
pub mod codes;
pub mod error;
pub mod params;
pub mod pips;
pub mod primitive;
pub mod textcfg;
pub mod wire_name;

#[cfg(test)]
mod fixtures;

pub use chip_config::{ChipConfig, TileConfig, UnknownBit};
pub use error::{BitstreamError, BitstreamResult};
pub use textcfg::TextConfigError;

use mosaic_arch::{Architecture, DeviceVariant};
use mosaic_diagnostics::{Diagnostic, DiagnosticSink};
use mosaic_pnr::PnrDesign;
use std::path::Path;

/// Builds the configuration document for `design` on `arch`.
///
/// Unplaced cells and unsupported primitive kinds are reported to `sink` and
/// skipped. An unsupported device, a malformed parameter or a misnamed site
/// aborts generation.
pub fn generate_config(
    arch: &dyn Architecture,
    design: &PnrDesign,
    sink: &DiagnosticSink,
) -> BitstreamResult<ChipConfig> {
    let mut config = ChipConfig::new();

    let variant = arch.variant();
    if let Err(err) = base_config::seed(variant, &mut config) {
        let supported: Vec<&str> = DeviceVariant::ALL
            .into_iter()
            .filter(|v| base_config::is_supported(*v))
            .map(DeviceVariant::name)
            .collect();
        sink.emit(
            Diagnostic::error(
                codes::UNSUPPORTED_DEVICE,
                format!("unsupported device type {variant}"),
            )
            .with_help(format!("supported devices: {}", supported.join(", "))),
        );
        return Err(err);
    }

    config.metadata.push(format!("Part: {}", arch.full_chip_name()));

    let arcs = pips::encode_pips(arch, design, &mut config)?;
    let stats = primitive::encode_primitives(arch, design, &mut config, sink)?;

    sink.emit(Diagnostic::note(
        codes::GENERATION_SUMMARY,
        format!(
            "configured {} tiles: {arcs} arcs from {} bound pips, {} of {} placed primitives, {} settings",
            config.tile_count(),
            design.bound_pip_count(),
            stats.encoded,
            design.placed_count(),
            config.setting_count()
        ),
    ));

    Ok(config)
}

/// Writes `config` as a text configuration to `path`.
///
/// An empty path writes nothing and returns `Ok(false)`.
pub fn write_text_config(config: &ChipConfig, path: &str) -> BitstreamResult<bool> {
    if path.is_empty() {
        return Ok(false);
    }
    std::fs::write(Path::new(path), config.to_text())?;
    Ok(true)
}

/// Generates the configuration and writes it to `text_config_file` unless that is empty.
pub fn write_bitstream(
    arch: &dyn Architecture,
    design: &PnrDesign,
    text_config_file: &str,
    sink: &DiagnosticSink,
) -> BitstreamResult<ChipConfig> {
    let config = generate_config(arch, design, sink)?;
    write_text_config(&config, text_config_file)?;
    Ok(config)
}
