//! Settings for placed primitives.
//!
//! Each supported primitive kind has a [`PrimitiveEncoder`] that turns a placed
//! cell's parameters into word and enum features on the tile holding its BEL.
//! Cells of kinds with no encoder are skipped; cells without a BEL are
//! reported and skipped.

pub mod io;
pub mod osc;
pub mod slice;

use crate::chip_config::ChipConfig;
use crate::codes;
use crate::error::{BitstreamError, BitstreamResult};
use mosaic_arch::{Architecture, BelId};
use mosaic_diagnostics::{Diagnostic, DiagnosticSink};
use mosaic_pnr::{PnrCell, PnrDesign};
use std::collections::BTreeMap;

pub use io::IoEncoder;
pub use osc::OscillatorEncoder;
pub use slice::SliceEncoder;

/// Number of sites of one kind sharing a tile.
pub const SITES_PER_TILE: i32 = 4;

/// Read-only inputs shared by every encoder.
pub struct EncodeContext<'a> {
    /// The device being configured.
    pub arch: &'a dyn Architecture,
    /// The design being encoded; owns the interner parameter keys resolve through.
    pub design: &'a PnrDesign,
}

/// Encodes one primitive kind.
pub trait PrimitiveEncoder: Sync {
    /// The cell type this encoder handles, e.g. `FACADE_SLICE`.
    fn cell_type(&self) -> &'static str;

    /// Writes the features for `cell`, which is placed on `bel`.
    fn encode(
        &self,
        ctx: &EncodeContext<'_>,
        cell: &PnrCell,
        bel: BelId,
        config: &mut ChipConfig,
    ) -> BitstreamResult<()>;
}

static ENCODERS: [&dyn PrimitiveEncoder; 3] = [&SliceEncoder, &IoEncoder, &OscillatorEncoder];

/// All registered encoders.
pub fn encoders() -> &'static [&'static dyn PrimitiveEncoder] {
    &ENCODERS
}

/// Returns the encoder for `cell_type`, if one is registered.
pub fn encoder_for(cell_type: &str) -> Option<&'static dyn PrimitiveEncoder> {
    ENCODERS.iter().copied().find(|e| e.cell_type() == cell_type)
}

/// Decodes the site letter following `prefix` in a BEL name (`SLICEC` -> 2).
pub fn site_index(site: &str, prefix: &'static str) -> BitstreamResult<usize> {
    let letter = site
        .strip_prefix(prefix)
        .and_then(|rest| rest.chars().next())
        .ok_or_else(|| BitstreamError::InvalidSiteName {
            site: site.to_string(),
            expected_prefix: prefix,
        })?;
    let index = letter as i32 - 'A' as i32;
    if !(0..SITES_PER_TILE).contains(&index) {
        return Err(BitstreamError::SiteIndexOutOfRange {
            site: site.to_string(),
            index,
        });
    }
    Ok(index as usize)
}

/// What [`encode_primitives`] did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PrimitiveStats {
    /// Cells whose features were written.
    pub encoded: usize,
    /// Cells skipped because they have no BEL.
    pub unplaced: usize,
    /// Placed cells skipped because no encoder handles their kind.
    pub unhandled: usize,
}

/// Encodes every placed cell of a supported kind, in design order.
pub fn encode_primitives(
    arch: &dyn Architecture,
    design: &PnrDesign,
    config: &mut ChipConfig,
    sink: &DiagnosticSink,
) -> BitstreamResult<PrimitiveStats> {
    let ctx = EncodeContext { arch, design };
    let mut stats = PrimitiveStats::default();
    let mut unhandled: BTreeMap<&str, usize> = BTreeMap::new();

    for cell in design.cells() {
        let bel = match cell.bel {
            Some(bel) => bel,
            None => {
                sink.emit(
                    Diagnostic::warning(
                        codes::UNPLACED_CELL,
                        format!(
                            "found unplaced cell '{}' during bitstream generation",
                            design.name(cell.name)
                        ),
                    )
                    .with_subject(design.name(cell.name))
                    .with_help("the cell contributes no settings; place it before generating"),
                );
                stats.unplaced += 1;
                continue;
            }
        };

        let cell_type = design.name(cell.cell_type);
        match encoder_for(cell_type) {
            Some(encoder) => {
                encoder.encode(&ctx, cell, bel, config)?;
                stats.encoded += 1;
            }
            None => {
                *unhandled.entry(cell_type).or_default() += 1;
                stats.unhandled += 1;
            }
        }
    }

    for (cell_type, count) in unhandled {
        sink.emit(Diagnostic::note(
            codes::UNHANDLED_PRIMITIVE,
            format!("skipped {count} cell(s) of kind '{cell_type}' with no configuration encoder"),
        ));
    }

    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::TestChip;
    use mosaic_arch::Location;
    use mosaic_diagnostics::Severity;

    #[test]
    fn site_index_letters() {
        assert_eq!(site_index("SLICEA", "SLICE").unwrap(), 0);
        assert_eq!(site_index("SLICED", "SLICE").unwrap(), 3);
        assert_eq!(site_index("PIOC", "PIO").unwrap(), 2);
    }

    #[test]
    fn site_index_wrong_prefix() {
        let err = site_index("LUT4", "SLICE").unwrap_err();
        assert!(matches!(
            err,
            BitstreamError::InvalidSiteName { ref site, expected_prefix: "SLICE" } if site == "LUT4"
        ));
    }

    #[test]
    fn site_index_missing_letter() {
        assert!(matches!(
            site_index("SLICE", "SLICE"),
            Err(BitstreamError::InvalidSiteName { .. })
        ));
    }

    #[test]
    fn site_index_out_of_range() {
        assert!(matches!(
            site_index("SLICEE", "SLICE"),
            Err(BitstreamError::SiteIndexOutOfRange { index: 4, .. })
        ));
        assert!(matches!(
            site_index("SLICE0", "SLICE"),
            Err(BitstreamError::SiteIndexOutOfRange { .. })
        ));
    }

    #[test]
    fn registry_lookup() {
        assert_eq!(encoders().len(), 3);
        assert!(encoder_for("FACADE_SLICE").is_some());
        assert!(encoder_for("FACADE_IO").is_some());
        assert!(encoder_for("OSCH").is_some());
        assert!(encoder_for("EHXPLLJ").is_none());
    }

    #[test]
    fn unplaced_cell_warns_and_continues() {
        let chip = TestChip::new();
        let mut design = PnrDesign::new();
        design.add_cell("floating", "FACADE_SLICE");
        let placed = design.add_cell("placed", "FACADE_SLICE");
        let bel = chip.db.bel_by_name(Location::new(1, 1), "SLICEB").unwrap();
        design.place(placed, bel);

        let sink = DiagnosticSink::new();
        let mut cc = ChipConfig::new();
        let stats = encode_primitives(&chip.db, &design, &mut cc, &sink).unwrap();
        assert_eq!(stats.unplaced, 1);
        assert_eq!(stats.encoded, 1);
        assert_eq!(sink.warning_count(), 1);
        let diags = sink.diagnostics();
        assert_eq!(diags[0].code, codes::UNPLACED_CELL);
        assert!(diags[0].message.contains("'floating'"));
        assert!(cc.tile("R1C1:PLC").unwrap().enums.contains_key("SLICEB.MODE"));
    }

    #[test]
    fn unknown_kind_contributes_nothing() {
        let chip = TestChip::new();
        let mut design = PnrDesign::new();
        let cell = design.add_cell("pll", "EHXPLLJ");
        design.set_param(cell, "MODE", "LOGIC");
        let bel = chip.db.bel_by_name(Location::new(1, 1), "SLICEA").unwrap();
        design.place(cell, bel);

        let sink = DiagnosticSink::new();
        let mut cc = ChipConfig::new();
        let stats = encode_primitives(&chip.db, &design, &mut cc, &sink).unwrap();
        assert_eq!(stats.unhandled, 1);
        assert!(cc.tiles.is_empty());
        assert!(!sink.has_errors());
        assert_eq!(sink.warning_count(), 0);
        let notes = sink.diagnostics();
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].severity, Severity::Note);
        assert_eq!(notes[0].code, codes::UNHANDLED_PRIMITIVE);
    }

    #[test]
    fn bad_site_name_aborts() {
        let chip = TestChip::new();
        let mut design = PnrDesign::new();
        let cell = design.add_cell("lut", "FACADE_SLICE");
        let bel = chip.db.bel_by_name(Location::new(1, 1), "LUT4").unwrap();
        design.place(cell, bel);

        let sink = DiagnosticSink::new();
        let mut cc = ChipConfig::new();
        let err = encode_primitives(&chip.db, &design, &mut cc, &sink).unwrap_err();
        assert!(matches!(err, BitstreamError::InvalidSiteName { .. }));
    }
}
