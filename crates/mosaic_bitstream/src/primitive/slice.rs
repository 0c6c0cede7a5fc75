//! `FACADE_SLICE`: two LUT4s and two flip-flops.

use super::{site_index, EncodeContext, PrimitiveEncoder};
use crate::chip_config::ChipConfig;
use crate::error::BitstreamResult;
use crate::params::{get, str_or, Word};
use mosaic_arch::BelId;
use mosaic_pnr::PnrCell;

/// How a feature name is formed from the slice.
#[derive(Debug, Clone, Copy)]
enum FeatureName {
    /// `<site><suffix>`, e.g. `SLICEA.MODE`.
    Site(&'static str),
    /// `<group><index><suffix>`, e.g. `LSR0.SRMODE`, for settings shared per slice index.
    Indexed(&'static str, &'static str),
}

impl FeatureName {
    fn render(self, site: &str, index: usize) -> String {
        match self {
            FeatureName::Site(suffix) => format!("{site}{suffix}"),
            FeatureName::Indexed(group, suffix) => format!("{group}{index}{suffix}"),
        }
    }
}

struct EnumSetting {
    param: &'static str,
    feature: FeatureName,
    default: &'static str,
}

const fn setting(param: &'static str, feature: FeatureName, default: &'static str) -> EnumSetting {
    EnumSetting {
        param,
        feature,
        default,
    }
}

const LUT_WIDTH: usize = 16;

type LutInit = Word<LUT_WIDTH>;

/// LUT initializers: parameter and feature suffix.
const WORDS: [(&str, &str); 2] = [("LUT0_INITVAL", ".K0.INIT"), ("LUT1_INITVAL", ".K1.INIT")];

const ENUMS: [EnumSetting; 12] = [
    setting("MODE", FeatureName::Site(".MODE"), "LOGIC"),
    setting("GSR", FeatureName::Site(".GSR"), "ENABLED"),
    setting("SRMODE", FeatureName::Indexed("LSR", ".SRMODE"), "LSR_OVER_CE"),
    setting("CEMUX", FeatureName::Site(".CEMUX"), "1"),
    setting("CLKMUX", FeatureName::Indexed("CLK", ".CLKMUX"), "0"),
    setting("LSRMUX", FeatureName::Indexed("LSR", ".LSRMUX"), "LSR"),
    setting("LSRONMUX", FeatureName::Indexed("LSR", ".LSRONMUX"), "LSRMUX"),
    setting("REGMODE", FeatureName::Site(".REGMODE"), "FF"),
    setting("REG0_SD", FeatureName::Site(".REG0.SD"), "0"),
    setting("REG1_SD", FeatureName::Site(".REG1.SD"), "0"),
    setting("REG0_REGSET", FeatureName::Site(".REG0.REGSET"), "RESET"),
    setting("REG1_REGSET", FeatureName::Site(".REG1.REGSET"), "RESET"),
];

/// Encodes `FACADE_SLICE` cells into their `PLC` tile.
#[derive(Debug, Clone, Copy, Default)]
pub struct SliceEncoder;

impl PrimitiveEncoder for SliceEncoder {
    fn cell_type(&self) -> &'static str {
        "FACADE_SLICE"
    }

    fn encode(
        &self,
        ctx: &EncodeContext<'_>,
        cell: &PnrCell,
        bel: BelId,
        config: &mut ChipConfig,
    ) -> BitstreamResult<()> {
        let tile_name = ctx
            .arch
            .tile_by_type_and_location(bel.location.row, bel.location.col, "PLC")?;
        let site = ctx.arch.bel_name(bel);
        let index = site_index(site, "SLICE")?;
        let tile = config.tile_mut(tile_name);

        for (param, suffix) in WORDS {
            let Word(init) = get(ctx.design, &cell.params, param, LutInit::zero())?;
            tile.add_word(format!("{site}{suffix}"), init);
        }
        for entry in &ENUMS {
            let value = str_or(ctx.design, &cell.params, entry.param, entry.default)?;
            tile.add_enum(entry.feature.render(site, index), value);
        }
        Ok(())
    }
}
