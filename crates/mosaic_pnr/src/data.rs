//! Core design data structures.
//!
//! The [`PnrDesign`] is the result of placement and routing: cells with an
//! optional BEL assignment and their parameters, and nets with the PIPs
//! routing has bound to them. Bitstream generation only reads it.

use crate::ids::{PnrCellId, PnrNetId};
use crate::property::Property;
use mosaic_arch::{BelId, PipId};
use mosaic_common::{Ident, Interner};
use std::collections::{BTreeMap, HashMap};

/// Parameters or attributes of a cell, keyed by interned name.
pub type Params = BTreeMap<Ident, Property>;

/// A placed (or not yet placed) primitive.
#[derive(Debug, Clone)]
pub struct PnrCell {
    /// The index of this cell in its design.
    pub id: PnrCellId,
    /// The instance name.
    pub name: Ident,
    /// The primitive kind, e.g. `FACADE_SLICE`.
    pub cell_type: Ident,
    /// The BEL this cell is placed on (`None` = unplaced).
    pub bel: Option<BelId>,
    /// Primitive parameters (`LUT0_INITVAL`, `MODE`, ...).
    pub params: Params,
    /// Attributes carried through from synthesis (`IO_TYPE`, ...).
    pub attrs: Params,
}

/// A routed net.
#[derive(Debug, Clone)]
pub struct PnrNet {
    /// The index of this net in its design.
    pub id: PnrNetId,
    /// The net name.
    pub name: Ident,
    /// The PIPs bound to this net, in binding order.
    pub pips: Vec<PipId>,
}

/// A placed-and-routed design.
///
/// Cells and nets are kept in insertion order, which is the order bitstream
/// generation visits them in.
#[derive(Debug, Default)]
pub struct PnrDesign {
    interner: Interner,
    cells: Vec<PnrCell>,
    nets: Vec<PnrNet>,
    cell_by_name: HashMap<Ident, PnrCellId>,
    pip_binding: HashMap<PipId, PnrNetId>,
}

impl PnrDesign {
    /// Creates an empty design.
    pub fn new() -> Self {
        Self::default()
    }

    /// Interns a name in this design's interner.
    pub fn id(&self, name: &str) -> Ident {
        self.interner.get_or_intern(name)
    }

    /// Resolves an interned name.
    pub fn name(&self, ident: Ident) -> &str {
        self.interner.resolve(ident)
    }

    /// Returns the design's interner.
    pub fn interner(&self) -> &Interner {
        &self.interner
    }

    /// Adds an unplaced cell with no parameters and returns its ID.
    pub fn add_cell(&mut self, name: &str, cell_type: &str) -> PnrCellId {
        let id = PnrCellId::from_raw(self.cells.len() as u32);
        let name = self.id(name);
        let cell_type = self.id(cell_type);
        self.cell_by_name.insert(name, id);
        self.cells.push(PnrCell {
            id,
            name,
            cell_type,
            bel: None,
            params: Params::new(),
            attrs: Params::new(),
        });
        id
    }

    /// Places a cell on a BEL.
    pub fn place(&mut self, cell: PnrCellId, bel: BelId) {
        self.cell_mut(cell).bel = Some(bel);
    }

    /// Sets a cell parameter, replacing any previous value.
    pub fn set_param(&mut self, cell: PnrCellId, key: &str, value: impl Into<Property>) {
        let key = self.id(key);
        self.cell_mut(cell).params.insert(key, value.into());
    }

    /// Sets a cell attribute, replacing any previous value.
    pub fn set_attr(&mut self, cell: PnrCellId, key: &str, value: impl Into<Property>) {
        let key = self.id(key);
        self.cell_mut(cell).attrs.insert(key, value.into());
    }

    /// Adds a net with no bound PIPs and returns its ID.
    pub fn add_net(&mut self, name: &str) -> PnrNetId {
        let id = PnrNetId::from_raw(self.nets.len() as u32);
        let name = self.id(name);
        self.nets.push(PnrNet {
            id,
            name,
            pips: Vec::new(),
        });
        id
    }

    /// Binds a PIP to a net.
    ///
    /// Returns the net the PIP was previously bound to, if any; that binding
    /// is replaced.
    pub fn bind_pip(&mut self, net: PnrNetId, pip: PipId) -> Option<PnrNetId> {
        let previous = self.pip_binding.insert(pip, net);
        if let Some(old) = previous {
            self.nets[old.as_raw() as usize].pips.retain(|p| *p != pip);
        }
        self.nets[net.as_raw() as usize].pips.push(pip);
        previous
    }

    /// Returns the net a PIP is bound to, or `None` if routing left it unused.
    pub fn bound_pip_net(&self, pip: PipId) -> Option<PnrNetId> {
        self.pip_binding.get(&pip).copied()
    }

    /// Returns the cell with the given ID.
    pub fn cell(&self, id: PnrCellId) -> &PnrCell {
        &self.cells[id.as_raw() as usize]
    }

    /// Returns a mutable reference to the cell with the given ID.
    pub fn cell_mut(&mut self, id: PnrCellId) -> &mut PnrCell {
        &mut self.cells[id.as_raw() as usize]
    }

    /// Looks up a cell by instance name.
    pub fn cell_by_name(&self, name: &str) -> Option<PnrCellId> {
        let ident = self.interner.get(name)?;
        self.cell_by_name.get(&ident).copied()
    }

    /// Returns the net with the given ID.
    pub fn net(&self, id: PnrNetId) -> &PnrNet {
        &self.nets[id.as_raw() as usize]
    }

    /// Returns all cells in insertion order.
    pub fn cells(&self) -> &[PnrCell] {
        &self.cells
    }

    /// Returns the number of cells.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Returns the number of placed cells.
    pub fn placed_count(&self) -> usize {
        self.cells.iter().filter(|c| c.bel.is_some()).count()
    }

    /// Returns the number of bound PIPs across all nets.
    pub fn bound_pip_count(&self) -> usize {
        self.pip_binding.len()
    }
}
