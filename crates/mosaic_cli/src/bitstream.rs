//! `mosaic bitstream`: configuration generation.
//!
//! 1. Load `mosaic.toml` (if any) and merge command-line overrides
//! 2. Load the device database and check it against `--device`
//! 3. Load the routed design
//! 4. Generate the configuration and render diagnostics
//! 5. Write the text configuration unless the output path is empty
//!
//! Every failure is reported as an error diagnostic, so it is rendered once
//! in the selected format.

use mosaic_arch::{Architecture, ChipDb};
use mosaic_bitstream::{codes as bitstream_codes, generate_config, write_text_config};
use mosaic_bitstream::{BitstreamError, ChipConfig};
use mosaic_config::{resolve_job, Overrides, ResolvedJob};
use mosaic_diagnostics::{Diagnostic, DiagnosticSink};
use mosaic_pnr::PnrDesign;

use crate::codes;
use crate::pipeline::{load_project_config, render_diagnostics};
use crate::{BitstreamArgs, GlobalArgs, ReportFormat};

/// What a successful run produced.
struct Outcome {
    config: ChipConfig,
    written: bool,
}

/// Runs the `mosaic bitstream` command.
///
/// Returns exit code 0 on success, 1 if any error diagnostic was emitted.
pub fn run(args: &BitstreamArgs, global: &GlobalArgs) -> i32 {
    let sink = DiagnosticSink::new();
    let job = resolve(args, global, &sink);
    let outcome = job.as_ref().and_then(|job| generate(job, &sink));
    render_diagnostics(&sink, args.format, global);

    let (Some(job), Some(outcome)) = (job, outcome) else {
        return 1;
    };
    if !global.quiet && args.format == ReportFormat::Text {
        let target = if outcome.written { job.textcfg.as_str() } else { "(not written)" };
        eprintln!(
            "   Generated {} for {}: {} tiles, {} arcs, hash {}",
            target,
            outcome.config.device_name,
            outcome.config.tile_count(),
            outcome.config.arc_count(),
            outcome.config.content_hash()
        );
    }

    if sink.has_errors() {
        1
    } else {
        0
    }
}

fn overrides(args: &BitstreamArgs) -> Overrides {
    Overrides {
        chipdb: args.chipdb.clone(),
        design: args.design.clone(),
        device: args.device.clone(),
        package: args.package.clone(),
        speed: args.speed.clone(),
        textcfg: args.textcfg.clone(),
    }
}

/// Loads `mosaic.toml` and merges the command-line overrides into a job.
fn resolve(args: &BitstreamArgs, global: &GlobalArgs, sink: &DiagnosticSink) -> Option<ResolvedJob> {
    let job = load_project_config(global)
        .and_then(|config| resolve_job(&config, &overrides(args)).map_err(Into::into));
    match job {
        Ok(job) => Some(job),
        Err(err) => {
            sink.emit(Diagnostic::error(codes::INVALID_CONFIG, err.to_string()));
            None
        }
    }
}

/// Loads the inputs, generates the configuration and writes it out.
fn generate(job: &ResolvedJob, sink: &DiagnosticSink) -> Option<Outcome> {
    let db = load_chipdb(job, sink)?;
    let design = match PnrDesign::load(&job.design, &db) {
        Ok(design) => design,
        Err(err) => {
            sink.emit(
                Diagnostic::error(codes::DESIGN_LOAD_FAILED, format!("cannot load design: {err}"))
                    .with_subject(job.design.display().to_string()),
            );
            return None;
        }
    };

    let result = generate_config(&db, &design, sink).and_then(|mut config| {
        config.metadata.extend(job.metadata.iter().cloned());
        let written = write_text_config(&config, &job.textcfg)?;
        Ok(Outcome { config, written })
    });
    match result {
        Ok(outcome) => Some(outcome),
        // B502 was already emitted by the generator.
        Err(BitstreamError::UnsupportedDevice(_)) => None,
        Err(err) => {
            sink.emit(Diagnostic::error(bitstream_codes::GENERATION_FAILED, err.to_string()));
            None
        }
    }
}

fn load_chipdb(job: &ResolvedJob, sink: &DiagnosticSink) -> Option<ChipDb> {
    let mut db = match ChipDb::load(&job.chipdb) {
        Ok(db) => db,
        Err(err) => {
            sink.emit(
                Diagnostic::error(
                    codes::CHIPDB_LOAD_FAILED,
                    format!("cannot load device database: {err}"),
                )
                .with_subject(job.chipdb.display().to_string()),
            );
            return None;
        }
    };
    if let Some(expected) = job.variant {
        if db.variant() != expected {
            sink.emit(
                Diagnostic::error(
                    codes::DEVICE_MISMATCH,
                    format!("device database describes {}, but {expected} was requested", db.variant()),
                )
                .with_subject(job.chipdb.display().to_string())
                .with_note("the device variant is taken from the database")
                .with_help(format!("use a database for {expected}, or pass --device {}", db.variant())),
            );
            return None;
        }
    }
    if let Some(package) = &job.package {
        db.set_package(package.clone());
    }
    if let Some(speed) = &job.speed {
        db.set_speed(speed.clone());
    }
    Some(db)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mosaic_diagnostics::Severity;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    const CHIPDB: &str = r#"{
        "variant": "LCMXO2-1200HC", "rows": 3, "cols": 3,
        "locations": [
            { "row": 1, "col": 1,
              "tiles": [{ "name": "R1C1:PLC", "type": "PLC" }],
              "wires": [{ "name": "A0" }, { "name": "F0" }],
              "bels": [{ "name": "SLICEA", "type": "FACADE_SLICE" }],
              "pips": [{ "src": { "rel_row": 1, "rel_col": 0, "index": 0 },
                         "dst": { "rel_row": 0, "rel_col": 0, "index": 0 },
                         "tile_type": "PLC" }] },
            { "row": 2, "col": 1,
              "tiles": [{ "name": "R2C1:PLC", "type": "PLC" }],
              "wires": [{ "name": "H02S0101" }] }
        ]
    }"#;

    const DESIGN: &str = r#"{
        "cells": [
            { "name": "lut", "type": "FACADE_SLICE",
              "bel": { "row": 1, "col": 1, "name": "SLICEA" },
              "params": { "LUT0_INITVAL": 1, "MODE": "LOGIC" } },
            { "name": "floating", "type": "FACADE_SLICE" }
        ],
        "nets": [{ "name": "n", "pips": [{ "row": 1, "col": 1, "index": 0 }] }]
    }"#;

    struct Project {
        dir: TempDir,
    }

    impl Project {
        fn new() -> Self {
            let dir = TempDir::new().unwrap();
            fs::write(dir.path().join("db.json"), CHIPDB).unwrap();
            fs::write(dir.path().join("top.json"), DESIGN).unwrap();
            Self { dir }
        }

        fn path(&self, name: &str) -> PathBuf {
            self.dir.path().join(name)
        }

        fn args(&self, textcfg: &str) -> BitstreamArgs {
            BitstreamArgs {
                chipdb: Some(self.path("db.json")),
                design: Some(self.path("top.json")),
                device: None,
                package: None,
                speed: None,
                textcfg: Some(textcfg.to_string()),
                format: ReportFormat::Text,
            }
        }

        /// Points `--config` at an empty `mosaic.toml` so the working directory is not searched.
        fn global(&self) -> GlobalArgs {
            let config = self.path("mosaic.toml");
            if !config.exists() {
                fs::write(&config, "").unwrap();
            }
            GlobalArgs {
                quiet: true,
                verbose: false,
                color: false,
                config: Some(config.to_str().unwrap().to_string()),
            }
        }
    }

    /// Runs the command body against a fresh sink and returns its errors.
    fn errors_of(args: &BitstreamArgs, global: &GlobalArgs) -> (bool, Vec<Diagnostic>) {
        let sink = DiagnosticSink::new();
        let ok = resolve(args, global, &sink)
            .and_then(|job| generate(&job, &sink))
            .is_some();
        (ok, sink.diagnostics_at_least(Severity::Error))
    }

    #[test]
    fn writes_text_config() {
        let project = Project::new();
        let out = project.path("top.config");
        let code = run(&project.args(out.to_str().unwrap()), &project.global());
        assert_eq!(code, 0);

        let text = fs::read_to_string(&out).unwrap();
        assert!(text.starts_with(".device LCMXO2-1200HC\n\n.comment Part: LCMXO2-1200HC-4TG100C\n"));
        assert!(text.contains(".tile R1C1:PLC\narc: A0 N1_H02S0101\n"));
        assert!(text.contains("word: SLICEA.K0.INIT 0000000000000001\n"));
        assert!(text.contains("enum: SLICEA.MODE LOGIC\n"));
        assert!(text.contains(".tile PT4:CFG0\nunknown: F5B30\nunknown: F5B32\nunknown: F5B36\n"));
    }

    #[test]
    fn empty_textcfg_writes_nothing() {
        let project = Project::new();
        let code = run(&project.args(""), &project.global());
        assert_eq!(code, 0);
        assert!(!project.path("top.config").exists());
    }

    #[test]
    fn config_file_supplies_inputs_and_metadata() {
        let project = Project::new();
        let out = project.path("from_config.config");
        fs::write(
            project.path("mosaic.toml"),
            format!(
                "[device]\nvariant = \"LCMXO2-1200HC\"\npackage = \"TG144\"\nspeed = \"6\"\n\n\
                 [inputs]\nchipdb = {:?}\ndesign = {:?}\n\n\
                 [bitstream]\ntextcfg = {:?}\nmetadata = [\"rev B\"]\n",
                project.path("db.json").to_str().unwrap(),
                project.path("top.json").to_str().unwrap(),
                out.to_str().unwrap(),
            ),
        )
        .unwrap();
        let args = BitstreamArgs {
            chipdb: None,
            design: None,
            device: None,
            package: None,
            speed: None,
            textcfg: None,
            format: ReportFormat::Text,
        };
        assert_eq!(run(&args, &project.global()), 0);

        let text = fs::read_to_string(&out).unwrap();
        assert!(text.contains(".comment Part: LCMXO2-1200HC-6TG144C\n.comment rev B\n"));
    }

    #[test]
    fn device_mismatch_errors() {
        let project = Project::new();
        let mut args = project.args("");
        args.device = Some("LCMXO2-7000HC".to_string());
        assert_eq!(run(&args, &project.global()), 1);

        let (ok, errors) = errors_of(&args, &project.global());
        assert!(!ok);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].code, codes::DEVICE_MISMATCH);
        assert_eq!(errors[0].code.to_string(), "D202");
        assert!(errors[0].message.contains("LCMXO2-7000HC was requested"));
    }

    #[test]
    fn unsupported_device_is_reported_once() {
        let project = Project::new();
        fs::write(
            project.path("db.json"),
            CHIPDB.replace("LCMXO2-1200HC", "LCMXO2-640HC"),
        )
        .unwrap();
        assert_eq!(run(&project.args(""), &project.global()), 1);

        let (ok, errors) = errors_of(&project.args(""), &project.global());
        assert!(!ok);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].code, bitstream_codes::UNSUPPORTED_DEVICE);
    }

    #[test]
    fn missing_design_file_is_a_design_error() {
        let project = Project::new();
        let mut args = project.args("");
        args.design = Some(project.path("missing.json"));
        assert_eq!(run(&args, &project.global()), 1);

        let (_, errors) = errors_of(&args, &project.global());
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].code.to_string(), "N301");
        assert!(errors[0].subject.as_deref().unwrap().ends_with("missing.json"));
    }

    #[test]
    fn malformed_chipdb_is_a_device_error() {
        let project = Project::new();
        fs::write(project.path("db.json"), "{ not json").unwrap();
        let (_, errors) = errors_of(&project.args(""), &project.global());
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].code, codes::CHIPDB_LOAD_FAILED);
        assert!(errors[0].message.contains("malformed JSON"));
    }

    #[test]
    fn missing_inputs_are_a_config_error() {
        let project = Project::new();
        let mut args = project.args("");
        args.chipdb = None;
        let (_, errors) = errors_of(&args, &project.global());
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].code.to_string(), "C101");
        assert!(errors[0].message.contains("inputs.chipdb"));
    }

    #[test]
    fn malformed_literal_is_fatal() {
        let project = Project::new();
        fs::write(
            project.path("top.json"),
            DESIGN.replace("\"LUT0_INITVAL\": 1", "\"LUT0_INITVAL\": \"0001\""),
        )
        .unwrap();
        assert_eq!(run(&project.args(""), &project.global()), 1);

        let (_, errors) = errors_of(&project.args(""), &project.global());
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].code, bitstream_codes::GENERATION_FAILED);
        assert!(errors[0].message.contains("expected 0b prefix"));
    }
}
