//! `FACADE_IO`: programmable I/O buffers on the device edge.

use super::{site_index, EncodeContext, PrimitiveEncoder};
use crate::chip_config::ChipConfig;
use crate::error::BitstreamResult;
use crate::params::str_or;
use mosaic_arch::{Architecture, BelId, Location};
use mosaic_common::InternalError;
use mosaic_pnr::PnrCell;

/// Encodes `FACADE_IO` cells into the `PIC` tile on their edge.
///
/// Sets `<site>.BASE_TYPE` to `<DIR>_<IO_TYPE>`, e.g. `OUTPUT_LVCMOS33`.
#[derive(Debug, Clone, Copy, Default)]
pub struct IoEncoder;

/// The PIC tile type for an edge location. Left and right take precedence at corners.
fn edge_tile_type(arch: &dyn Architecture, loc: Location) -> Option<&'static str> {
    let (rows, cols) = arch.grid_dimensions();
    if loc.col == 0 {
        Some("PIC_L0")
    } else if loc.col + 1 == cols {
        Some("PIC_R0")
    } else if loc.row == 0 {
        Some("PIC_B0")
    } else if loc.row + 1 == rows {
        Some("PIC_T0")
    } else {
        None
    }
}

impl PrimitiveEncoder for IoEncoder {
    fn cell_type(&self) -> &'static str {
        "FACADE_IO"
    }

    fn encode(
        &self,
        ctx: &EncodeContext<'_>,
        cell: &PnrCell,
        bel: BelId,
        config: &mut ChipConfig,
    ) -> BitstreamResult<()> {
        let site = ctx.arch.bel_name(bel);
        site_index(site, "PIO")?;
        let loc = bel.location;
        let tile_type = edge_tile_type(ctx.arch, loc).ok_or_else(|| {
            InternalError::new(format!("I/O site {site} at {loc} is not on the device edge"))
        })?;
        let tile_name = ctx.arch.tile_by_type_and_location(loc.row, loc.col, tile_type)?;

        let dir = str_or(ctx.design, &cell.params, "DIR", "INPUT")?;
        let io_type = str_or(ctx.design, &cell.attrs, "IO_TYPE", "LVCMOS33")?;
        config
            .tile_mut(tile_name)
            .add_enum(format!("{site}.BASE_TYPE"), format!("{dir}_{io_type}"));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::TestChip;
    use crate::BitstreamError;
    use mosaic_pnr::PnrDesign;

    fn encode_at(loc: Location, site: &str, dir: Option<&str>, io_type: Option<&str>) -> BitstreamResult<ChipConfig> {
        let chip = TestChip::new();
        let mut design = PnrDesign::new();
        let cell = design.add_cell("pad", "FACADE_IO");
        if let Some(dir) = dir {
            design.set_param(cell, "DIR", dir);
        }
        if let Some(io_type) = io_type {
            design.set_attr(cell, "IO_TYPE", io_type);
        }
        let bel = chip.db.bel_by_name(loc, site).unwrap();
        design.place(cell, bel);

        let mut cc = ChipConfig::new();
        let ctx = EncodeContext {
            arch: &chip.db,
            design: &design,
        };
        IoEncoder.encode(&ctx, design.cell(cell), bel, &mut cc)?;
        Ok(cc)
    }

    #[test]
    fn defaults_to_lvcmos33_input() {
        let cc = encode_at(Location::new(1, 0), "PIOB", None, None).unwrap();
        assert_eq!(
            cc.tile("PL1:PIC_L0").unwrap().enums["PIOB.BASE_TYPE"],
            "INPUT_LVCMOS33"
        );
    }

    #[test]
    fn direction_and_standard_from_cell() {
        let cc = encode_at(Location::new(1, 3), "PIOC", Some("OUTPUT"), Some("LVCMOS25")).unwrap();
        assert_eq!(
            cc.tile("PR1:PIC_R0").unwrap().enums["PIOC.BASE_TYPE"],
            "OUTPUT_LVCMOS25"
        );
    }

    #[test]
    fn bottom_and_top_edges() {
        let cc = encode_at(Location::new(0, 2), "PIOA", None, None).unwrap();
        assert!(cc.tile("PB2:PIC_B0").is_some());
        let cc = encode_at(Location::new(3, 2), "PIOD", Some("BIDIR"), None).unwrap();
        assert_eq!(
            cc.tile("PT2:PIC_T0").unwrap().enums["PIOD.BASE_TYPE"],
            "BIDIR_LVCMOS33"
        );
    }

    #[test]
    fn interior_site_is_internal_error() {
        let err = encode_at(Location::new(2, 2), "PIOA", None, None).unwrap_err();
        assert!(matches!(err, BitstreamError::Internal(_)));
        assert!(err.to_string().contains("not on the device edge"));
    }
}
