//! Mosaic CLI, the command-line front end for MachXO2 configuration generation.
//!
//! Provides `mosaic bitstream` to turn a placed-and-routed design into a text
//! configuration, and `mosaic devices` to list the known device variants.

#![warn(missing_docs)]

mod bitstream;
mod codes;
mod devices;
mod pipeline;

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand, ValueEnum};

/// Mosaic: configuration generation for Lattice MachXO2 FPGAs.
#[derive(Parser, Debug)]
#[command(name = "mosaic", version, about = "MachXO2 configuration generator")]
pub struct Cli {
    /// Suppress all output except errors.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Also show informational notes.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Control colored output.
    #[arg(long, global = true, value_enum, default_value_t = ColorChoice::Auto)]
    pub color: ColorChoice,

    /// Path to a `mosaic.toml` configuration file.
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// The subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate the text configuration for a routed design.
    Bitstream(BitstreamArgs),
    /// List device variants and whether they can be configured.
    Devices,
}

/// Arguments for the `mosaic bitstream` subcommand.
#[derive(Parser, Debug)]
pub struct BitstreamArgs {
    /// Device database JSON.
    #[arg(long)]
    pub chipdb: Option<PathBuf>,

    /// Placed-and-routed design JSON.
    #[arg(long)]
    pub design: Option<PathBuf>,

    /// Expected device variant (e.g. `LCMXO2-1200HC`); must match the database.
    #[arg(long)]
    pub device: Option<String>,

    /// Package code used in the part name (e.g. `TG100`).
    #[arg(long)]
    pub package: Option<String>,

    /// Speed grade used in the part name.
    #[arg(long)]
    pub speed: Option<String>,

    /// Output path for the text configuration. Empty to only validate.
    #[arg(long)]
    pub textcfg: Option<String>,

    /// Output format for diagnostics.
    #[arg(short, long, value_enum, default_value_t = ReportFormat::Text)]
    pub format: ReportFormat,
}

/// Controls whether colored output is produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Color when stderr is a terminal.
    Auto,
    /// Always produce colored output.
    Always,
    /// Never produce colored output.
    Never,
}

/// Diagnostic output format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Human-readable terminal output.
    Text,
    /// One JSON object per line.
    Json,
}

/// Global settings derived from CLI flags.
pub struct GlobalArgs {
    /// Whether to suppress non-error output.
    pub quiet: bool,
    /// Whether to show notes.
    pub verbose: bool,
    /// Whether to use colored output.
    pub color: bool,
    /// Optional path to a config file.
    pub config: Option<String>,
}

fn main() {
    let cli = Cli::parse();

    let color = match cli.color {
        ColorChoice::Auto => std::io::stderr().is_terminal(),
        ColorChoice::Always => true,
        ColorChoice::Never => false,
    };

    let global = GlobalArgs {
        quiet: cli.quiet,
        verbose: cli.verbose,
        color,
        config: cli.config,
    };

    let code = match cli.command {
        Command::Bitstream(ref args) => bitstream::run(args, &global),
        Command::Devices => devices::run(&global),
    };
    process::exit(code);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_bitstream_default() {
        let cli = Cli::parse_from(["mosaic", "bitstream"]);
        match cli.command {
            Command::Bitstream(ref args) => {
                assert!(args.chipdb.is_none());
                assert!(args.design.is_none());
                assert!(args.device.is_none());
                assert!(args.textcfg.is_none());
                assert_eq!(args.format, ReportFormat::Text);
            }
            _ => panic!("expected Bitstream command"),
        }
    }

    #[test]
    fn parse_bitstream_with_args() {
        let cli = Cli::parse_from([
            "mosaic",
            "bitstream",
            "--chipdb",
            "db.json",
            "--design",
            "top.json",
            "--device",
            "LCMXO2-1200HC",
            "--package",
            "TG144",
            "--speed",
            "6",
            "--textcfg",
            "top.config",
            "--format",
            "json",
        ]);
        match cli.command {
            Command::Bitstream(ref args) => {
                assert_eq!(args.chipdb, Some(PathBuf::from("db.json")));
                assert_eq!(args.design, Some(PathBuf::from("top.json")));
                assert_eq!(args.device.as_deref(), Some("LCMXO2-1200HC"));
                assert_eq!(args.package.as_deref(), Some("TG144"));
                assert_eq!(args.speed.as_deref(), Some("6"));
                assert_eq!(args.textcfg.as_deref(), Some("top.config"));
                assert_eq!(args.format, ReportFormat::Json);
            }
            _ => panic!("expected Bitstream command"),
        }
    }

    #[test]
    fn parse_empty_textcfg() {
        let cli = Cli::parse_from(["mosaic", "bitstream", "--textcfg", ""]);
        match cli.command {
            Command::Bitstream(ref args) => assert_eq!(args.textcfg.as_deref(), Some("")),
            _ => panic!("expected Bitstream command"),
        }
    }

    #[test]
    fn parse_devices() {
        let cli = Cli::parse_from(["mosaic", "devices"]);
        assert!(matches!(cli.command, Command::Devices));
    }

    #[test]
    fn parse_global_flags() {
        let cli = Cli::parse_from(["mosaic", "--quiet", "--color", "never", "devices"]);
        assert!(cli.quiet);
        assert!(!cli.verbose);
        assert_eq!(cli.color, ColorChoice::Never);
    }

    #[test]
    fn parse_global_flags_after_subcommand() {
        let cli = Cli::parse_from(["mosaic", "bitstream", "--verbose", "--color", "always"]);
        assert!(cli.verbose);
        assert_eq!(cli.color, ColorChoice::Always);
    }

    #[test]
    fn parse_config_path() {
        let cli = Cli::parse_from(["mosaic", "--config", "/path/to/mosaic.toml", "devices"]);
        assert_eq!(cli.config.as_deref(), Some("/path/to/mosaic.toml"));
    }

    #[test]
    fn reject_unknown_format() {
        assert!(Cli::try_parse_from(["mosaic", "bitstream", "--format", "xml"]).is_err());
    }

    #[test]
    fn subcommand_required() {
        assert!(Cli::try_parse_from(["mosaic"]).is_err());
    }
}
