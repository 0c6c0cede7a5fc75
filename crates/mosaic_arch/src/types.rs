//! Per-location data tables of the device database.
//!
//! The grid is stored as one [`LocationData`] per location. A location holds
//! the named tiles that cover it, plus tables of wires, BELs and PIPs that
//! the location-qualified IDs in [`crate::ids`] index into.

use serde::{Deserialize, Serialize};

/// Whether a PIP needs a configuration bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PipClass {
    /// A switch that is programmed by an arc in the configuration.
    #[default]
    Configurable,
    /// A permanent connection. Always present, never configured.
    Fixed,
}

/// A wire reference relative to the location that mentions it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RelWire {
    /// Row offset from the referencing location (negative = south).
    pub rel_row: i32,
    /// Column offset from the referencing location (negative = west).
    pub rel_col: i32,
    /// Index into the wire table of the target location.
    pub index: u32,
}

/// A named tile covering a location, e.g. `R6C11:PLC` with type `PLC`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileInfo {
    /// The tile name used as the key in the configuration document.
    pub name: String,
    /// The tile type tag (`PLC`, `PIC_L0`, `CFG1`, ...).
    #[serde(rename = "type")]
    pub tile_type: String,
}

/// A routing wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireData {
    /// The local wire name, e.g. `H02W0701` or `G_HPBX0000`.
    pub name: String,
}

/// A BEL, the site one primitive can be placed on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BelData {
    /// The local site name, e.g. `SLICEA` or `PIOC`.
    pub name: String,
    /// The BEL type, e.g. `FACADE_SLICE`.
    #[serde(rename = "type")]
    pub bel_type: String,
}

/// A PIP between two wires.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipData {
    /// The driving wire.
    pub src: RelWire,
    /// The driven wire.
    pub dst: RelWire,
    /// Type of the tile at the PIP's location whose configuration holds the arc.
    pub tile_type: String,
    /// Whether the PIP is configurable or a fixed connection.
    #[serde(default)]
    pub class: PipClass,
}

/// All data stored for one grid location.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationData {
    /// Tiles covering this location.
    #[serde(default)]
    pub tiles: Vec<TileInfo>,
    /// Wires owned by this location.
    #[serde(default)]
    pub wires: Vec<WireData>,
    /// BELs at this location.
    #[serde(default)]
    pub bels: Vec<BelData>,
    /// PIPs at this location.
    #[serde(default)]
    pub pips: Vec<PipData>,
}

impl LocationData {
    /// Returns the tile of the given type covering this location, if any.
    pub fn tile_of_type(&self, tile_type: &str) -> Option<&TileInfo> {
        self.tiles.iter().find(|t| t.tile_type == tile_type)
    }
}
