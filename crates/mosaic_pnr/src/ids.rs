//! Arena index newtypes for design cells and nets.

use serde::{Deserialize, Serialize};

macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
        pub struct $name(u32);

        impl $name {
            /// Creates an ID from a raw `u32` index.
            pub fn from_raw(index: u32) -> Self {
                Self(index)
            }

            /// Returns the raw `u32` index.
            pub fn as_raw(self) -> u32 {
                self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

define_id!(
    /// Index of a cell in a [`PnrDesign`](crate::PnrDesign).
    PnrCellId
);

define_id!(
    /// Index of a net in a [`PnrDesign`](crate::PnrDesign).
    PnrNetId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrip_and_display() {
        let id = PnrCellId::from_raw(42);
        assert_eq!(id.as_raw(), 42);
        assert_eq!(PnrNetId::from_raw(7).to_string(), "7");
    }
}
