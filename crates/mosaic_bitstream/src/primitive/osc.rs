//! `OSCH`: the internal oscillator.

use super::{EncodeContext, PrimitiveEncoder};
use crate::chip_config::ChipConfig;
use crate::error::BitstreamResult;
use crate::params::str_or;
use mosaic_arch::BelId;
use mosaic_pnr::PnrCell;

/// Encodes the `OSCH` cell into the device's `CFG1` tile.
#[derive(Debug, Clone, Copy, Default)]
pub struct OscillatorEncoder;

impl PrimitiveEncoder for OscillatorEncoder {
    fn cell_type(&self) -> &'static str {
        "OSCH"
    }

    fn encode(
        &self,
        ctx: &EncodeContext<'_>,
        cell: &PnrCell,
        _bel: BelId,
        config: &mut ChipConfig,
    ) -> BitstreamResult<()> {
        let tile_name = ctx.arch.tile_by_type("CFG1")?;
        let freq = str_or(ctx.design, &cell.params, "NOM_FREQ", "2.08")?;
        let tile = config.tile_mut(tile_name);
        tile.add_enum("OSCH.MODE", "OSCH");
        tile.add_enum("OSCH.NOM_FREQ", freq);
        Ok(())
    }
}
