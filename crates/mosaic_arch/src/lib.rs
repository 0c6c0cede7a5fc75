//! Device database model for MachXO2-family FPGAs.
//!
//! This crate provides the [`Architecture`] trait, through which the
//! bitstream generator queries device geometry (tiles, wires, BELs, PIPs),
//! and [`ChipDb`], an in-memory implementation loadable from JSON.
//!
//! ```
//! use mosaic_arch::{Architecture, ChipDb, DeviceVariant, Location};
//!
//! let mut db = ChipDb::new(DeviceVariant::Lcmxo2_1200hc, 4, 4);
//! db.add_tile(Location::new(2, 3), "R2C3:PLC", "PLC");
//! assert_eq!(db.tile_by_type_and_location(2, 3, "PLC").unwrap(), "R2C3:PLC");
//! ```

#![warn(missing_docs)]

pub mod chipdb;
pub mod device;
pub mod ids;
pub mod types;

pub use chipdb::{ChipDb, LoadError};
pub use device::{DeviceVariant, UnknownDeviceError};
pub use ids::{BelId, Location, PipId, WireId};
pub use types::{BelData, LocationData, PipClass, PipData, RelWire, TileInfo, WireData};

use mosaic_common::MosaicResult;

/// Read-only queries against a device database.
///
/// IDs passed to these methods must come from the same database; lookups
/// with foreign IDs may panic. Lookups that depend on names the design
/// supplies (tile types) return [`MosaicResult`] instead.
pub trait Architecture: std::fmt::Debug {
    /// Returns the selected device variant.
    fn variant(&self) -> DeviceVariant;

    /// Returns the full part name, e.g. `LCMXO2-1200HC-4TG100C`.
    fn full_chip_name(&self) -> String;

    /// Returns the grid size as `(rows, cols)`.
    fn grid_dimensions(&self) -> (u32, u32);

    /// Iterates over every PIP in the device, in row-major location order
    /// and then by index.
    fn pips(&self) -> Box<dyn Iterator<Item = PipId> + '_>;

    /// Returns whether `pip` names a PIP of this device.
    fn pip_exists(&self, pip: PipId) -> bool;

    /// Returns the wire driving `pip`.
    fn pip_src_wire(&self, pip: PipId) -> WireId;

    /// Returns the wire driven by `pip`.
    fn pip_dst_wire(&self, pip: PipId) -> WireId;

    /// Returns whether `pip` is configurable or fixed.
    fn pip_class(&self, pip: PipId) -> PipClass;

    /// Returns the name of the tile whose configuration holds the arc for `pip`.
    fn pip_tilename(&self, pip: PipId) -> MosaicResult<&str>;

    /// Returns the name of the tile of type `tile_type` at `(row, col)`.
    fn tile_by_type_and_location(&self, row: u32, col: u32, tile_type: &str) -> MosaicResult<&str>;

    /// Returns the name of the first tile of type `tile_type`, scanning in
    /// row-major order. Used for device-unique tiles such as `CFG1`.
    fn tile_by_type(&self, tile_type: &str) -> MosaicResult<&str>;

    /// Returns the local name of a wire.
    fn wire_name(&self, wire: WireId) -> &str;

    /// Returns the local site name of a BEL, e.g. `SLICEB`.
    fn bel_name(&self, bel: BelId) -> &str;

    /// Finds a BEL at `loc` by its local name.
    fn bel_by_name(&self, loc: Location, name: &str) -> Option<BelId>;
}
