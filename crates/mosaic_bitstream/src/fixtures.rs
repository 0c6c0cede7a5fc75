//! A small device shared by the unit tests.

use mosaic_arch::{ChipDb, DeviceVariant, Location, PipClass, PipId};

/// A 4x4 LCMXO2-1200HC-shaped grid.
///
/// - R1C1 is a `PLC` tile with `SLICEA`..`SLICED`, a misnamed `LUT4` slice BEL
///   and wires `A0`, `B0`, `C0`, `F0`, `G_HPBX0000`.
/// - R2C1 holds wire `H02S0101`, R1C2 holds `H02W0101`.
/// - Edge I/O: `PIOB` on R1C0 (`PIC_L0`), `PIOC` on R1C3 (`PIC_R0`),
///   `PIOA` on R0C2 (`PIC_B0`), `PIOD` on R3C2 (`PIC_T0`), and a stray
///   `PIOA` in the interior at R2C2.
/// - R3C3 is the `CFG1` tile holding `OSCH`.
pub(crate) struct TestChip {
    pub db: ChipDb,
    /// `F0 -> A0` in R1C1.
    pub local_pip: PipId,
    /// `N1_H02S0101 -> B0`.
    pub north_pip: PipId,
    /// `G_HPBX0000 -> C0`.
    pub global_pip: PipId,
    /// `F0 -> E1_H02W0101`.
    pub east_pip: PipId,
    /// A fixed `F0 -> C0` connection.
    pub fixed_pip: PipId,
    /// A PIP at R2C2, which has no tile to hold it.
    pub orphan_pip: PipId,
}

impl TestChip {
    pub fn new() -> Self {
        let mut db = ChipDb::new(DeviceVariant::Lcmxo2_1200hc, 4, 4);
        let plc = Location::new(1, 1);
        db.add_tile(plc, "R1C1:PLC", "PLC");
        for name in ["SLICEA", "SLICEB", "SLICEC", "SLICED", "LUT4"] {
            db.add_bel(plc, name, "FACADE_SLICE");
        }
        let a0 = db.add_wire(plc, "A0");
        let b0 = db.add_wire(plc, "B0");
        let c0 = db.add_wire(plc, "C0");
        let f0 = db.add_wire(plc, "F0");
        let global = db.add_wire(plc, "G_HPBX0000");

        let north = Location::new(2, 1);
        db.add_tile(north, "R2C1:PLC", "PLC");
        let h02s = db.add_wire(north, "H02S0101");
        let east = Location::new(1, 2);
        db.add_tile(east, "R1C2:PLC", "PLC");
        let h02w = db.add_wire(east, "H02W0101");

        let local_pip = db.add_pip(plc, f0, a0, "PLC", PipClass::Configurable);
        let north_pip = db.add_pip(plc, h02s, b0, "PLC", PipClass::Configurable);
        let global_pip = db.add_pip(plc, global, c0, "PLC", PipClass::Configurable);
        let east_pip = db.add_pip(plc, f0, h02w, "PLC", PipClass::Configurable);
        let fixed_pip = db.add_pip(plc, f0, c0, "PLC", PipClass::Fixed);

        let interior = Location::new(2, 2);
        db.add_bel(interior, "PIOA", "FACADE_IO");
        let stray = db.add_wire(interior, "X0");
        let orphan_pip = db.add_pip(interior, stray, stray, "PLC", PipClass::Configurable);

        for (loc, tile, tile_type, bel) in [
            (Location::new(1, 0), "PL1:PIC_L0", "PIC_L0", "PIOB"),
            (Location::new(1, 3), "PR1:PIC_R0", "PIC_R0", "PIOC"),
            (Location::new(0, 2), "PB2:PIC_B0", "PIC_B0", "PIOA"),
            (Location::new(3, 2), "PT2:PIC_T0", "PIC_T0", "PIOD"),
        ] {
            db.add_tile(loc, tile, tile_type);
            db.add_bel(loc, bel, "FACADE_IO");
        }

        let cfg = Location::new(3, 3);
        db.add_tile(cfg, "PT3:CFG1", "CFG1");
        db.add_bel(cfg, "OSCH", "OSCH");

        Self {
            db,
            local_pip,
            north_pip,
            global_pip,
            east_pip,
            fixed_pip,
            orphan_pip,
        }
    }
}
