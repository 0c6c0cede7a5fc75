//! Job resolution: merging the configuration file with command-line overrides.

use crate::error::ConfigError;
use crate::loader::{validate_package, validate_speed};
use crate::types::ProjectConfig;
use mosaic_arch::DeviceVariant;
use std::path::PathBuf;

/// Values given on the command line. Any `Some` replaces the file's value.
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    /// `--chipdb`
    pub chipdb: Option<PathBuf>,
    /// `--design`
    pub design: Option<PathBuf>,
    /// `--device`
    pub device: Option<String>,
    /// `--package`
    pub package: Option<String>,
    /// `--speed`
    pub speed: Option<String>,
    /// `--textcfg`
    pub textcfg: Option<String>,
}

/// Everything the bitstream stage needs, with file and command-line settings merged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedJob {
    /// The variant the user expects. The device database's own variant is used when `None`.
    pub variant: Option<DeviceVariant>,
    /// Package override for the full chip name.
    pub package: Option<String>,
    /// Speed grade override for the full chip name.
    pub speed: Option<String>,
    /// Device database path.
    pub chipdb: PathBuf,
    /// Placed-and-routed design path.
    pub design: PathBuf,
    /// Text configuration output path; empty means no file is written.
    pub textcfg: String,
    /// Extra metadata comment lines.
    pub metadata: Vec<String>,
}

/// Merges `overrides` on top of `config`.
///
/// The device database and design paths are required; everything else has a default.
pub fn resolve_job(config: &ProjectConfig, overrides: &Overrides) -> Result<ResolvedJob, ConfigError> {
    let chipdb = overrides
        .chipdb
        .clone()
        .or_else(|| config.inputs.chipdb.as_ref().map(PathBuf::from))
        .ok_or_else(|| ConfigError::MissingField("inputs.chipdb".to_string()))?;
    let design = overrides
        .design
        .clone()
        .or_else(|| config.inputs.design.as_ref().map(PathBuf::from))
        .ok_or_else(|| ConfigError::MissingField("inputs.design".to_string()))?;

    let variant = overrides
        .device
        .as_ref()
        .or(config.device.variant.as_ref())
        .map(|name| {
            name.parse::<DeviceVariant>()
                .map_err(|_| ConfigError::UnknownDevice(name.clone()))
        })
        .transpose()?;

    let package = overrides
        .package
        .clone()
        .or_else(|| config.device.package.clone());
    if let Some(package) = &package {
        validate_package(package)?;
    }
    let speed = overrides.speed.clone().or_else(|| config.device.speed.clone());
    if let Some(speed) = &speed {
        validate_speed(speed)?;
    }

    let textcfg = overrides
        .textcfg
        .clone()
        .or_else(|| config.bitstream.textcfg.clone())
        .unwrap_or_default();

    Ok(ResolvedJob {
        variant,
        package,
        speed,
        chipdb,
        design,
        textcfg,
        metadata: config.bitstream.metadata.clone(),
    })
}
