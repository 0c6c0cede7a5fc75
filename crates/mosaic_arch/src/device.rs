//! MachXO2 device variants.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A member of the MachXO2 family.
///
/// Every variant that can be targeted needs a hand-authored base
/// configuration, so the set of variants known here is larger than the set
/// that can actually be generated for.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
pub enum DeviceVariant {
    /// LCMXO2-256HC.
    #[serde(rename = "LCMXO2-256HC")]
    Lcmxo2_256hc,
    /// LCMXO2-640HC.
    #[serde(rename = "LCMXO2-640HC")]
    Lcmxo2_640hc,
    /// LCMXO2-1200HC.
    #[serde(rename = "LCMXO2-1200HC")]
    Lcmxo2_1200hc,
    /// LCMXO2-2000HC.
    #[serde(rename = "LCMXO2-2000HC")]
    Lcmxo2_2000hc,
    /// LCMXO2-4000HC.
    #[serde(rename = "LCMXO2-4000HC")]
    Lcmxo2_4000hc,
    /// LCMXO2-7000HC.
    #[serde(rename = "LCMXO2-7000HC")]
    Lcmxo2_7000hc,
}

impl DeviceVariant {
    /// All known variants, smallest first.
    pub const ALL: [DeviceVariant; 6] = [
        DeviceVariant::Lcmxo2_256hc,
        DeviceVariant::Lcmxo2_640hc,
        DeviceVariant::Lcmxo2_1200hc,
        DeviceVariant::Lcmxo2_2000hc,
        DeviceVariant::Lcmxo2_4000hc,
        DeviceVariant::Lcmxo2_7000hc,
    ];

    /// Returns the chip name used in `.device` lines, e.g. `LCMXO2-1200HC`.
    pub fn name(self) -> &'static str {
        match self {
            DeviceVariant::Lcmxo2_256hc => "LCMXO2-256HC",
            DeviceVariant::Lcmxo2_640hc => "LCMXO2-640HC",
            DeviceVariant::Lcmxo2_1200hc => "LCMXO2-1200HC",
            DeviceVariant::Lcmxo2_2000hc => "LCMXO2-2000HC",
            DeviceVariant::Lcmxo2_4000hc => "LCMXO2-4000HC",
            DeviceVariant::Lcmxo2_7000hc => "LCMXO2-7000HC",
        }
    }

    /// Returns the package used when none is specified.
    pub fn default_package(self) -> &'static str {
        match self {
            DeviceVariant::Lcmxo2_256hc => "SG32",
            DeviceVariant::Lcmxo2_640hc => "TG100",
            DeviceVariant::Lcmxo2_1200hc => "TG100",
            DeviceVariant::Lcmxo2_2000hc
            | DeviceVariant::Lcmxo2_4000hc
            | DeviceVariant::Lcmxo2_7000hc => "TG144",
        }
    }

    /// Builds the full orderable part name, e.g. `LCMXO2-1200HC-4TG100C`.
    pub fn full_chip_name(self, speed: &str, package: &str) -> String {
        format!("{}-{speed}{package}C", self.name())
    }
}

impl fmt::Display for DeviceVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a string does not name a known device variant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown device variant '{0}'")]
pub struct UnknownDeviceError(pub String);

impl FromStr for DeviceVariant {
    type Err = UnknownDeviceError;

    /// Accepts `LCMXO2-1200HC`, `lcmxo2_1200hc` or `1200HC`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .collect::<String>()
            .to_ascii_uppercase();
        let short = normalized.strip_prefix("LCMXO2").unwrap_or(&normalized);
        DeviceVariant::ALL
            .into_iter()
            .find(|v| v.name().trim_start_matches("LCMXO2-") == short)
            .ok_or_else(|| UnknownDeviceError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_canonical_names() {
        for variant in DeviceVariant::ALL {
            assert_eq!(variant.name().parse::<DeviceVariant>().unwrap(), variant);
        }
    }

    #[test]
    fn parse_loose_spellings() {
        assert_eq!(
            "lcmxo2_1200hc".parse::<DeviceVariant>().unwrap(),
            DeviceVariant::Lcmxo2_1200hc
        );
        assert_eq!(
            "7000HC".parse::<DeviceVariant>().unwrap(),
            DeviceVariant::Lcmxo2_7000hc
        );
    }

    #[test]
    fn parse_unknown() {
        let err = "LFE5U-25F".parse::<DeviceVariant>().unwrap_err();
        assert_eq!(err.to_string(), "unknown device variant 'LFE5U-25F'");
    }

    #[test]
    fn full_chip_name() {
        let v = DeviceVariant::Lcmxo2_1200hc;
        assert_eq!(
            v.full_chip_name("4", v.default_package()),
            "LCMXO2-1200HC-4TG100C"
        );
    }

    #[test]
    fn serde_uses_chip_name() {
        let json = serde_json::to_string(&DeviceVariant::Lcmxo2_640hc).unwrap();
        assert_eq!(json, "\"LCMXO2-640HC\"");
        let back: DeviceVariant = serde_json::from_str(&json).unwrap();
        assert_eq!(back, DeviceVariant::Lcmxo2_640hc);
    }
}
