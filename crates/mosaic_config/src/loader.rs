//! Configuration file loading and validation.

use crate::error::ConfigError;
use crate::types::ProjectConfig;
use mosaic_arch::DeviceVariant;
use std::path::{Path, PathBuf};

/// The file name looked up in the working directory when `--config` is not given.
pub const CONFIG_FILE_NAME: &str = "mosaic.toml";

/// Returns `<dir>/mosaic.toml` if it exists.
pub fn find_config(dir: &Path) -> Option<PathBuf> {
    let path = dir.join(CONFIG_FILE_NAME);
    path.is_file().then_some(path)
}

/// Loads and validates a configuration file.
pub fn load_config(path: &Path) -> Result<ProjectConfig, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    load_config_from_str(&content)
}

/// Parses and validates a configuration from a string.
///
/// Useful for testing without filesystem dependencies.
pub fn load_config_from_str(content: &str) -> Result<ProjectConfig, ConfigError> {
    let config: ProjectConfig =
        toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
    validate_config(&config)?;
    Ok(config)
}

/// Checks the values that can be checked without the device database.
fn validate_config(config: &ProjectConfig) -> Result<(), ConfigError> {
    if let Some(variant) = &config.device.variant {
        variant
            .parse::<DeviceVariant>()
            .map_err(|_| ConfigError::UnknownDevice(variant.clone()))?;
    }
    if let Some(speed) = &config.device.speed {
        validate_speed(speed)?;
    }
    if let Some(package) = &config.device.package {
        validate_package(package)?;
    }
    Ok(())
}

pub(crate) fn validate_speed(speed: &str) -> Result<(), ConfigError> {
    if speed.is_empty() || !speed.chars().all(|c| c.is_ascii_digit()) {
        return Err(ConfigError::ValidationError(format!(
            "speed grade '{speed}' must be numeric"
        )));
    }
    Ok(())
}

pub(crate) fn validate_package(package: &str) -> Result<(), ConfigError> {
    if package.is_empty() || !package.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(ConfigError::ValidationError(format!(
            "package '{package}' must be a non-empty alphanumeric code"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_full_config() {
        let toml = r#"
[device]
variant = "LCMXO2-1200HC"
package = "TG100"
speed = "5"

[inputs]
chipdb = "chipdb/lcmxo2-1200hc.json"
design = "build/top_routed.json"

[bitstream]
textcfg = "build/top.config"
metadata = ["Built by mosaic"]
"#;
        let config = load_config_from_str(toml).unwrap();
        assert_eq!(config.device.variant.as_deref(), Some("LCMXO2-1200HC"));
        assert_eq!(config.device.speed.as_deref(), Some("5"));
        assert_eq!(
            config.inputs.design.as_deref(),
            Some("build/top_routed.json")
        );
        assert_eq!(config.bitstream.textcfg.as_deref(), Some("build/top.config"));
        assert_eq!(config.bitstream.metadata, vec!["Built by mosaic"]);
    }

    #[test]
    fn parse_empty_config() {
        let config = load_config_from_str("").unwrap();
        assert!(config.device.variant.is_none());
    }

    #[test]
    fn unknown_variant_errors() {
        let err = load_config_from_str("[device]\nvariant = \"LFE5U-25F\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::UnknownDevice(ref v) if v == "LFE5U-25F"));
    }

    #[test]
    fn non_numeric_speed_errors() {
        let err = load_config_from_str("[device]\nspeed = \"fast\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn bad_package_errors() {
        let err = load_config_from_str("[device]\npackage = \"TG 100\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn malformed_toml_errors() {
        let err = load_config_from_str("[device\nvariant = ").unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn load_missing_file_errors() {
        let err = load_config(Path::new("/nonexistent/mosaic.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::IoError(_)));
    }

    #[test]
    fn find_config_in_empty_dir() {
        assert!(find_config(Path::new("/nonexistent-dir")).is_none());
    }
}
