//! Routing arcs from bound PIPs.

use crate::chip_config::ChipConfig;
use crate::error::BitstreamResult;
use crate::wire_name::arch_wire_name;
use mosaic_arch::{Architecture, PipClass};
use mosaic_pnr::PnrDesign;

/// Adds an arc for every PIP bound to a net, skipping fixed connections.
///
/// Both wires are named relative to the PIP's own location. Returns the number
/// of arcs written.
pub fn encode_pips(
    arch: &dyn Architecture,
    design: &PnrDesign,
    config: &mut ChipConfig,
) -> BitstreamResult<usize> {
    let mut count = 0;
    for pip in arch.pips() {
        if design.bound_pip_net(pip).is_none() || arch.pip_class(pip) == PipClass::Fixed {
            continue;
        }
        let tile = arch.pip_tilename(pip)?;
        let source = arch_wire_name(arch, pip.location, arch.pip_src_wire(pip));
        let sink = arch_wire_name(arch, pip.location, arch.pip_dst_wire(pip));
        config.tile_mut(tile).add_arc(sink, source);
        count += 1;
    }
    Ok(count)
}
