//! Helpers shared by the subcommands: locating the configuration file and
//! rendering diagnostics.

use std::path::{Path, PathBuf};

use mosaic_config::{find_config, load_config, ProjectConfig};
use mosaic_diagnostics::{
    DiagnosticRenderer, DiagnosticSink, JsonRenderer, Severity, TerminalRenderer,
};

use crate::{GlobalArgs, ReportFormat};

/// Returns the configuration file to use, if any.
///
/// `--config` may name a file or a directory containing `mosaic.toml`;
/// otherwise the current directory is searched.
pub fn resolve_config_path(global: &GlobalArgs) -> Result<Option<PathBuf>, Box<dyn std::error::Error>> {
    match global.config {
        Some(ref config_path) => {
            let p = PathBuf::from(config_path);
            if p.is_dir() {
                find_config(&p)
                    .map(Some)
                    .ok_or_else(|| format!("no mosaic.toml in {}", p.display()).into())
            } else {
                Ok(Some(p))
            }
        }
        None => Ok(find_config(&std::env::current_dir()?)),
    }
}

/// Loads the configuration file, or an empty configuration if there is none.
pub fn load_project_config(global: &GlobalArgs) -> Result<ProjectConfig, Box<dyn std::error::Error>> {
    match resolve_config_path(global)? {
        Some(path) => Ok(load_config(Path::new(&path))?),
        None => Ok(ProjectConfig::default()),
    }
}

/// The least severe diagnostic shown for the given flags.
pub fn min_severity(global: &GlobalArgs) -> Severity {
    if global.verbose {
        Severity::Note
    } else if global.quiet {
        Severity::Error
    } else {
        Severity::Warning
    }
}

/// Renders the sink's diagnostics that pass the verbosity filter.
///
/// Text goes to stderr, JSON lines to stdout.
pub fn render_diagnostics(sink: &DiagnosticSink, format: ReportFormat, global: &GlobalArgs) {
    let diagnostics = sink.diagnostics_at_least(min_severity(global));
    match format {
        ReportFormat::Text => {
            let renderer = TerminalRenderer::new(global.color);
            for diag in &diagnostics {
                eprintln!("{}", renderer.render(diag));
            }
        }
        ReportFormat::Json => {
            for diag in &diagnostics {
                println!("{}", JsonRenderer.render(diag));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn global_with(config: Option<String>, quiet: bool, verbose: bool) -> GlobalArgs {
        GlobalArgs {
            quiet,
            verbose,
            color: false,
            config,
        }
    }

    #[test]
    fn config_from_file_path() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("custom.toml");
        fs::write(&path, "[device]\nvariant = \"LCMXO2-1200HC\"\n").unwrap();

        let global = global_with(Some(path.to_str().unwrap().to_string()), false, false);
        assert_eq!(resolve_config_path(&global).unwrap(), Some(path));
        let config = load_project_config(&global).unwrap();
        assert_eq!(config.device.variant.as_deref(), Some("LCMXO2-1200HC"));
    }

    #[test]
    fn config_from_directory() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("mosaic.toml"), "").unwrap();
        let global = global_with(Some(tmp.path().to_str().unwrap().to_string()), false, false);
        assert_eq!(
            resolve_config_path(&global).unwrap(),
            Some(tmp.path().join("mosaic.toml"))
        );
    }

    #[test]
    fn directory_without_config_errors() {
        let tmp = TempDir::new().unwrap();
        let global = global_with(Some(tmp.path().to_str().unwrap().to_string()), false, false);
        assert!(resolve_config_path(&global).is_err());
    }

    #[test]
    fn missing_config_file_errors() {
        let global = global_with(Some("/nonexistent/mosaic.toml".to_string()), false, false);
        assert!(load_project_config(&global).is_err());
    }

    #[test]
    fn severity_filter() {
        assert_eq!(min_severity(&global_with(None, false, false)), Severity::Warning);
        assert_eq!(min_severity(&global_with(None, true, false)), Severity::Error);
        assert_eq!(min_severity(&global_with(None, false, true)), Severity::Note);
        assert_eq!(min_severity(&global_with(None, true, true)), Severity::Note);
    }
}
