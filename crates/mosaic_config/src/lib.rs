//! Parsing and validation of `mosaic.toml` project configuration files.
//!
//! The configuration names the device, the input files and where the text
//! configuration is written. Every value is optional in the file; command-line
//! overrides are merged on top by [`resolve_job`], which produces a
//! [`ResolvedJob`] with everything the bitstream stage needs.

#![warn(missing_docs)]

pub mod error;
pub mod loader;
pub mod resolve;
pub mod types;

pub use error::ConfigError;
pub use loader::{find_config, load_config, load_config_from_str, CONFIG_FILE_NAME};
pub use resolve::{resolve_job, Overrides, ResolvedJob};
pub use types::*;
