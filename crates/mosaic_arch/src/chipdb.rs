//! In-memory device database, loadable from JSON.
//!
//! The JSON layout lists only the locations that hold something:
//!
//! ```text
//! {
//!   "variant": "LCMXO2-1200HC", "rows": 22, "cols": 26,
//!   "locations": [
//!     { "row": 6, "col": 11,
//!       "tiles": [{ "name": "R6C11:PLC", "type": "PLC" }],
//!       "wires": [{ "name": "A0" }, { "name": "H02W0701" }],
//!       "bels":  [{ "name": "SLICEA", "type": "FACADE_SLICE" }],
//!       "pips":  [{ "src": { "rel_row": 0, "rel_col": 0, "index": 1 },
//!                   "dst": { "rel_row": 0, "rel_col": 0, "index": 0 },
//!                   "tile_type": "PLC" }] }
//!   ]
//! }
//! ```

use crate::device::{DeviceVariant, UnknownDeviceError};
use crate::ids::{BelId, Location, PipId, WireId};
use crate::types::{BelData, LocationData, PipClass, PipData, RelWire, TileInfo, WireData};
use crate::Architecture;
use mosaic_common::{InternalError, MosaicResult};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Errors raised while loading a device database or a design that refers to one.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        /// The path that failed.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The JSON was not well-formed or did not match the expected shape.
    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),
    /// The variant string did not name a known device.
    #[error(transparent)]
    UnknownDevice(#[from] UnknownDeviceError),
    /// The content parsed but is inconsistent.
    #[error("invalid data: {0}")]
    Invalid(String),
}

impl LoadError {
    /// Reads a whole file, attaching the path to any I/O error.
    pub fn read_file(path: &Path) -> Result<String, LoadError> {
        std::fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[derive(Deserialize)]
struct RawChipDb {
    variant: String,
    #[serde(default)]
    package: Option<String>,
    #[serde(default)]
    speed: Option<String>,
    rows: u32,
    cols: u32,
    #[serde(default)]
    locations: Vec<RawLocation>,
}

#[derive(Deserialize)]
struct RawLocation {
    row: u32,
    col: u32,
    #[serde(flatten)]
    data: LocationData,
}

/// Upper bound on `rows * cols` accepted from a JSON database.
pub const MAX_GRID_LOCATIONS: usize = 1 << 16;

/// The device database for one MachXO2 variant.
#[derive(Debug, Clone)]
pub struct ChipDb {
    variant: DeviceVariant,
    package: String,
    speed: String,
    rows: u32,
    cols: u32,
    /// Row-major, `rows * cols` entries.
    locations: Vec<LocationData>,
}

impl ChipDb {
    /// Creates an empty grid for the given variant.
    pub fn new(variant: DeviceVariant, rows: u32, cols: u32) -> Self {
        Self {
            variant,
            package: variant.default_package().to_string(),
            speed: "4".to_string(),
            rows,
            cols,
            locations: vec![LocationData::default(); rows as usize * cols as usize],
        }
    }

    /// Reads and parses a JSON device database from disk.
    pub fn load(path: &Path) -> Result<Self, LoadError> {
        Self::from_json(&LoadError::read_file(path)?)
    }

    /// Parses a JSON device database and checks that every PIP refers to an
    /// existing wire.
    pub fn from_json(json: &str) -> Result<Self, LoadError> {
        let raw: RawChipDb = serde_json::from_str(json)?;
        let variant: DeviceVariant = raw.variant.parse()?;
        let size = (raw.rows as usize).checked_mul(raw.cols as usize);
        if !size.is_some_and(|size| size <= MAX_GRID_LOCATIONS) {
            return Err(LoadError::Invalid(format!(
                "grid of {} x {} exceeds {MAX_GRID_LOCATIONS} locations",
                raw.rows, raw.cols
            )));
        }
        let mut db = ChipDb::new(variant, raw.rows, raw.cols);
        if let Some(package) = raw.package {
            db.package = package;
        }
        if let Some(speed) = raw.speed {
            db.speed = speed;
        }

        for entry in raw.locations {
            let loc = Location::new(entry.row, entry.col);
            let slot = db
                .slot(loc)
                .ok_or_else(|| LoadError::Invalid(format!("location {loc} is outside the grid")))?;
            db.locations[slot] = entry.data;
        }

        for row in 0..db.rows {
            for col in 0..db.cols {
                let loc = Location::new(row, col);
                for (index, pip) in db.location(loc).pips.iter().enumerate() {
                    for rel in [pip.src, pip.dst] {
                        if db.try_resolve(loc, rel).is_none() {
                            return Err(LoadError::Invalid(format!(
                                "pip {index} at {loc} refers to missing wire {rel:?}"
                            )));
                        }
                    }
                }
            }
        }

        Ok(db)
    }

    /// Overrides the package used in the full chip name.
    pub fn set_package(&mut self, package: impl Into<String>) {
        self.package = package.into();
    }

    /// Overrides the speed grade used in the full chip name.
    pub fn set_speed(&mut self, speed: impl Into<String>) {
        self.speed = speed.into();
    }

    fn slot(&self, loc: Location) -> Option<usize> {
        (loc.row < self.rows && loc.col < self.cols)
            .then(|| loc.row as usize * self.cols as usize + loc.col as usize)
    }

    /// Returns the data stored at a location.
    ///
    /// # Panics
    ///
    /// Panics if `loc` is outside the grid.
    pub fn location(&self, loc: Location) -> &LocationData {
        let slot = self.slot(loc).unwrap_or_else(|| panic!("{loc} is outside the grid"));
        &self.locations[slot]
    }

    fn location_mut(&mut self, loc: Location) -> &mut LocationData {
        let slot = self.slot(loc).unwrap_or_else(|| panic!("{loc} is outside the grid"));
        &mut self.locations[slot]
    }

    /// Adds a named tile covering `loc`.
    pub fn add_tile(&mut self, loc: Location, name: &str, tile_type: &str) {
        self.location_mut(loc).tiles.push(TileInfo {
            name: name.to_string(),
            tile_type: tile_type.to_string(),
        });
    }

    /// Adds a wire owned by `loc`.
    pub fn add_wire(&mut self, loc: Location, name: &str) -> WireId {
        let wires = &mut self.location_mut(loc).wires;
        wires.push(WireData {
            name: name.to_string(),
        });
        WireId::new(loc, (wires.len() - 1) as u32)
    }

    /// Adds a BEL at `loc`.
    pub fn add_bel(&mut self, loc: Location, name: &str, bel_type: &str) -> BelId {
        let bels = &mut self.location_mut(loc).bels;
        bels.push(BelData {
            name: name.to_string(),
            bel_type: bel_type.to_string(),
        });
        BelId::new(loc, (bels.len() - 1) as u32)
    }

    /// Adds a PIP at `loc` whose arc is stored in the `tile_type` tile there.
    pub fn add_pip(
        &mut self,
        loc: Location,
        src: WireId,
        dst: WireId,
        tile_type: &str,
        class: PipClass,
    ) -> PipId {
        let rel = |wire: WireId| RelWire {
            rel_row: wire.location.row as i32 - loc.row as i32,
            rel_col: wire.location.col as i32 - loc.col as i32,
            index: wire.index,
        };
        let data = PipData {
            src: rel(src),
            dst: rel(dst),
            tile_type: tile_type.to_string(),
            class,
        };
        let pips = &mut self.location_mut(loc).pips;
        pips.push(data);
        PipId::new(loc, (pips.len() - 1) as u32)
    }

    fn try_resolve(&self, loc: Location, rel: RelWire) -> Option<WireId> {
        let target = loc.offset(rel.rel_row, rel.rel_col)?;
        let slot = self.slot(target)?;
        ((rel.index as usize) < self.locations[slot].wires.len())
            .then(|| WireId::new(target, rel.index))
    }

    fn pip_data(&self, pip: PipId) -> &PipData {
        &self.location(pip.location).pips[pip.index as usize]
    }

    fn resolve(&self, loc: Location, rel: RelWire) -> WireId {
        // Checked when the database was built.
        WireId::new(
            Location::new(
                (loc.row as i64 + rel.rel_row as i64) as u32,
                (loc.col as i64 + rel.rel_col as i64) as u32,
            ),
            rel.index,
        )
    }
}

impl Architecture for ChipDb {
    fn variant(&self) -> DeviceVariant {
        self.variant
    }

    fn full_chip_name(&self) -> String {
        self.variant.full_chip_name(&self.speed, &self.package)
    }

    fn grid_dimensions(&self) -> (u32, u32) {
        (self.rows, self.cols)
    }

    fn pips(&self) -> Box<dyn Iterator<Item = PipId> + '_> {
        let cols = self.cols;
        Box::new(self.locations.iter().enumerate().flat_map(move |(slot, data)| {
            let loc = Location::new(slot as u32 / cols, slot as u32 % cols);
            (0..data.pips.len() as u32).map(move |index| PipId::new(loc, index))
        }))
    }

    fn pip_exists(&self, pip: PipId) -> bool {
        self.slot(pip.location)
            .is_some_and(|slot| (pip.index as usize) < self.locations[slot].pips.len())
    }

    fn pip_src_wire(&self, pip: PipId) -> WireId {
        self.resolve(pip.location, self.pip_data(pip).src)
    }

    fn pip_dst_wire(&self, pip: PipId) -> WireId {
        self.resolve(pip.location, self.pip_data(pip).dst)
    }

    fn pip_class(&self, pip: PipId) -> PipClass {
        self.pip_data(pip).class
    }

    fn pip_tilename(&self, pip: PipId) -> MosaicResult<&str> {
        let tile_type = &self.pip_data(pip).tile_type;
        self.tile_by_type_and_location(pip.location.row, pip.location.col, tile_type)
    }

    fn tile_by_type_and_location(&self, row: u32, col: u32, tile_type: &str) -> MosaicResult<&str> {
        let loc = Location::new(row, col);
        self.slot(loc)
            .and_then(|slot| self.locations[slot].tile_of_type(tile_type))
            .map(|tile| tile.name.as_str())
            .ok_or_else(|| InternalError::new(format!("no {tile_type} tile at {loc}")))
    }

    fn tile_by_type(&self, tile_type: &str) -> MosaicResult<&str> {
        self.locations
            .iter()
            .find_map(|data| data.tile_of_type(tile_type))
            .map(|tile| tile.name.as_str())
            .ok_or_else(|| InternalError::new(format!("device has no {tile_type} tile")))
    }

    fn wire_name(&self, wire: WireId) -> &str {
        &self.location(wire.location).wires[wire.index as usize].name
    }

    fn bel_name(&self, bel: BelId) -> &str {
        &self.location(bel.location).bels[bel.index as usize].name
    }

    fn bel_by_name(&self, loc: Location, name: &str) -> Option<BelId> {
        let slot = self.slot(loc)?;
        self.locations[slot]
            .bels
            .iter()
            .position(|b| b.name == name)
            .map(|index| BelId::new(loc, index as u32))
    }
}
