//! Configuration types deserialized from `mosaic.toml`.

use serde::Deserialize;

/// The top-level configuration parsed from `mosaic.toml`.
///
/// Every section is optional; an empty file is a valid configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectConfig {
    /// Which device the design targets.
    #[serde(default)]
    pub device: DeviceSection,
    /// Input files produced by earlier stages.
    #[serde(default)]
    pub inputs: InputsSection,
    /// Output settings for configuration generation.
    #[serde(default)]
    pub bitstream: BitstreamSection,
}

/// The `[device]` section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DeviceSection {
    /// Device variant name, e.g. `LCMXO2-1200HC`.
    pub variant: Option<String>,
    /// Package code, e.g. `TG100`.
    pub package: Option<String>,
    /// Speed grade, e.g. `4`.
    pub speed: Option<String>,
}

/// The `[inputs]` section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InputsSection {
    /// Path to the JSON device database.
    pub chipdb: Option<String>,
    /// Path to the placed-and-routed design JSON.
    pub design: Option<String>,
}

/// The `[bitstream]` section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BitstreamSection {
    /// Output path for the text configuration. Empty means generate without writing.
    pub textcfg: Option<String>,
    /// Extra `.comment` lines written after the part line.
    #[serde(default)]
    pub metadata: Vec<String>,
}
