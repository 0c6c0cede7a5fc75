//! Per-device base configurations.
//!
//! Every supported variant needs a handful of bits set regardless of the
//! design. Each variant registers a builder that writes the device name and
//! those bits into an empty document; adding a device means adding an entry
//! to [`BASE_CONFIGS`].

use crate::chip_config::ChipConfig;
use crate::error::{BitstreamError, BitstreamResult};
use mosaic_arch::DeviceVariant;

/// Fills an empty document with a variant's fixed content.
pub type BaseConfigFn = fn(&mut ChipConfig);

/// A registered base configuration.
#[derive(Debug, Clone, Copy)]
pub struct BaseConfig {
    /// The variant this entry applies to.
    pub variant: DeviceVariant,
    /// Writes the fixed content.
    pub build: BaseConfigFn,
}

/// All registered base configurations.
pub static BASE_CONFIGS: &[BaseConfig] = &[BaseConfig {
    variant: DeviceVariant::Lcmxo2_1200hc,
    build: empty_lcmxo2_1200hc,
}];

/// `(tile, frame, bit)` triples always set on an LCMXO2-1200HC.
const LCMXO2_1200HC_UNKNOWNS: &[(&str, u32, u32)] = &[
    ("EBR_R6C11:EBR1", 0, 12),
    ("EBR_R6C15:EBR1", 0, 12),
    ("EBR_R6C18:EBR1", 0, 12),
    ("EBR_R6C21:EBR1", 0, 12),
    ("EBR_R6C2:EBR1", 0, 12),
    ("EBR_R6C5:EBR1", 0, 12),
    ("EBR_R6C8:EBR1", 0, 12),
    ("PT4:CFG0", 5, 30),
    ("PT4:CFG0", 5, 32),
    ("PT4:CFG0", 5, 36),
    ("PT7:CFG3", 5, 18),
];

fn empty_lcmxo2_1200hc(config: &mut ChipConfig) {
    config.device_name = DeviceVariant::Lcmxo2_1200hc.name().to_string();
    for &(tile, frame, bit) in LCMXO2_1200HC_UNKNOWNS {
        config.tile_mut(tile).add_unknown(frame, bit);
    }
}

/// Returns the registered entry for `variant`.
pub fn lookup(variant: DeviceVariant) -> Option<&'static BaseConfig> {
    BASE_CONFIGS.iter().find(|entry| entry.variant == variant)
}

/// Returns `true` if configurations can be generated for `variant`.
pub fn is_supported(variant: DeviceVariant) -> bool {
    lookup(variant).is_some()
}

/// Writes `variant`'s base configuration into `config`.
pub fn seed(variant: DeviceVariant, config: &mut ChipConfig) -> BitstreamResult<()> {
    let entry = lookup(variant).ok_or(BitstreamError::UnsupportedDevice(variant))?;
    (entry.build)(config);
    Ok(())
}
