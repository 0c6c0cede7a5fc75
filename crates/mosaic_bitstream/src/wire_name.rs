//! Tile-relative wire naming.
//!
//! Arcs name their wires relative to the tile that holds the switch: a wire in
//! the same tile keeps its bare name, one two rows north becomes `N2_<name>`,
//! one three rows north and two columns east becomes `N3E2_<name>`. Globally
//! routed resources keep their bare name everywhere.
//!
//! Rows are numbered south to north and columns west to east, so a wire with a
//! larger row than the reference tile lies north of it.

use mosaic_arch::{Architecture, Location, WireId};

/// Prefixes of wires whose names do not depend on the referencing tile.
const GLOBAL_PREFIXES: [&str; 6] = ["G_", "L_", "R_", "U_", "D_", "BRANCH_"];

/// Names `base` (a wire at `wire_loc`) as seen from the tile at `reference`.
pub fn relative_wire_name(reference: Location, wire_loc: Location, base: &str) -> String {
    if GLOBAL_PREFIXES.iter().any(|p| base.starts_with(p)) || wire_loc == reference {
        return base.to_string();
    }

    let mut prefix = String::new();
    if wire_loc.row > reference.row {
        prefix.push_str(&format!("N{}", wire_loc.row - reference.row));
    } else if wire_loc.row < reference.row {
        prefix.push_str(&format!("S{}", reference.row - wire_loc.row));
    }
    if wire_loc.col > reference.col {
        prefix.push_str(&format!("E{}", wire_loc.col - reference.col));
    } else if wire_loc.col < reference.col {
        prefix.push_str(&format!("W{}", reference.col - wire_loc.col));
    }
    format!("{prefix}_{base}")
}

/// Looks up `wire` in the device and names it as seen from `reference`.
pub fn arch_wire_name(arch: &dyn Architecture, reference: Location, wire: WireId) -> String {
    relative_wire_name(reference, wire.location, arch.wire_name(wire))
}
