//! `mosaic devices`: lists device variants.

use mosaic_arch::DeviceVariant;
use mosaic_bitstream::base_config;

use crate::GlobalArgs;

/// One line per variant: name, default package, and whether it is supported.
pub fn device_table() -> Vec<String> {
    DeviceVariant::ALL
        .into_iter()
        .map(|variant| {
            let status = if base_config::is_supported(variant) {
                "supported"
            } else {
                "no base configuration"
            };
            format!("{:<16}{:<8}{status}", variant.name(), variant.default_package())
        })
        .collect()
}

/// Runs the `mosaic devices` command.
pub fn run(global: &GlobalArgs) -> i32 {
    if !global.quiet {
        println!("{:<16}{:<8}STATUS", "DEVICE", "PACKAGE");
    }
    for line in device_table() {
        println!("{line}");
    }
    0
}
