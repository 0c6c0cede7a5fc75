//! Diagnostic codes with category prefixes for structured identification.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The pipeline area a diagnostic originates from, determining its prefix letter.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Category {
    /// Project configuration and command-line input, prefixed with `C`.
    Config,
    /// Device database loading and lookups, prefixed with `D`.
    Device,
    /// Design (placed and routed netlist) loading, prefixed with `N`.
    Design,
    /// Configuration document generation, prefixed with `B`.
    Bitstream,
}

impl Category {
    /// Returns the single-character prefix for this category.
    pub fn prefix(self) -> char {
        match self {
            Category::Config => 'C',
            Category::Device => 'D',
            Category::Design => 'N',
            Category::Bitstream => 'B',
        }
    }
}

/// A category prefix plus a numeric identifier, displayed as e.g. `B501`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct DiagnosticCode {
    /// The category of this diagnostic.
    pub category: Category,
    /// The numeric identifier within the category.
    pub number: u16,
}

impl DiagnosticCode {
    /// Creates a new diagnostic code.
    pub const fn new(category: Category, number: u16) -> Self {
        Self { category, number }
    }
}

impl fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{:03}", self.category.prefix(), self.number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_prefixes() {
        assert_eq!(Category::Config.prefix(), 'C');
        assert_eq!(Category::Device.prefix(), 'D');
        assert_eq!(Category::Design.prefix(), 'N');
        assert_eq!(Category::Bitstream.prefix(), 'B');
    }

    #[test]
    fn display_is_zero_padded() {
        assert_eq!(DiagnosticCode::new(Category::Bitstream, 501).to_string(), "B501");
        assert_eq!(DiagnosticCode::new(Category::Device, 7).to_string(), "D007");
    }
}
