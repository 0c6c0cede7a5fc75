//! Location-qualified ID types for device database entities.
//!
//! Every wire, BEL and PIP lives at a grid [`Location`] and is addressed by an
//! index into that location's data tables, so an ID is always a
//! `(location, index)` pair. All IDs are `Copy`, `Ord` and serializable.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A position in the device grid.
///
/// Rows grow towards the north, columns towards the east. Ordering is
/// row-major, which is also the order the database is scanned in.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default, Serialize, Deserialize)]
pub struct Location {
    /// Row index (0 = south edge).
    pub row: u32,
    /// Column index (0 = west edge).
    pub col: u32,
}

impl Location {
    /// Creates a location from a row and column.
    pub fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }

    /// Applies a signed offset, returning `None` if it leaves the grid's
    /// non-negative quadrant.
    pub fn offset(self, rel_row: i32, rel_col: i32) -> Option<Self> {
        let row = self.row.checked_add_signed(rel_row)?;
        let col = self.col.checked_add_signed(rel_col)?;
        Some(Self { row, col })
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "R{}C{}", self.row, self.col)
    }
}

macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
        pub struct $name {
            /// The grid location owning this entity.
            pub location: Location,
            /// Index into the location's table for this entity kind.
            pub index: u32,
        }

        impl $name {
            /// Creates an ID from a location and a per-location index.
            pub fn new(location: Location, index: u32) -> Self {
                Self { location, index }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}/{}", self.location, self.index)
            }
        }
    };
}

define_id!(
    /// A routing wire, identified by its owning tile location and local index.
    WireId
);

define_id!(
    /// A BEL (placement site for one primitive).
    BelId
);

define_id!(
    /// A programmable interconnect point connecting two wires.
    PipId
);
