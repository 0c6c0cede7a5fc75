//! The in-memory configuration document.
//!
//! A [`ChipConfig`] is filled in by base seeding, the PIP encoder and the
//! primitive encoders, then rendered as text (see [`crate::textcfg`]). All
//! collections are ordered so that rendering is deterministic regardless of
//! the order features were added in.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// A fixed always-set bit, addressed by frame and bit within a tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct UnknownBit {
    /// Frame (row) within the tile.
    pub frame: u32,
    /// Bit (column) within the frame.
    pub bit: u32,
}

/// The features configured in one tile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileConfig {
    /// Enabled routing arcs, keyed by sink wire name.
    pub arcs: BTreeMap<String, String>,
    /// Multi-bit words, least-significant bit first.
    pub words: BTreeMap<String, Vec<bool>>,
    /// Enumerated settings.
    pub enums: BTreeMap<String, String>,
    /// Raw bits with no symbolic name.
    pub unknowns: BTreeSet<UnknownBit>,
}

impl TileConfig {
    /// Marks a raw bit as set.
    pub fn add_unknown(&mut self, frame: u32, bit: u32) {
        self.unknowns.insert(UnknownBit { frame, bit });
    }

    /// Enables the arc driving `sink` from `source`.
    pub fn add_arc(&mut self, sink: impl Into<String>, source: impl Into<String>) {
        self.arcs.insert(sink.into(), source.into());
    }

    /// Sets a word feature.
    pub fn add_word(&mut self, name: impl Into<String>, bits: Vec<bool>) {
        self.words.insert(name.into(), bits);
    }

    /// Sets an enum feature.
    pub fn add_enum(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.enums.insert(name.into(), value.into());
    }

    /// Returns `true` if no feature of any kind is set.
    pub fn is_empty(&self) -> bool {
        self.arcs.is_empty() && self.words.is_empty() && self.enums.is_empty() && self.unknowns.is_empty()
    }
}

/// A complete configuration document for one device.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChipConfig {
    /// Device name written on the `.device` line.
    pub device_name: String,
    /// Free-form `.comment` lines, in insertion order.
    pub metadata: Vec<String>,
    /// Per-tile features keyed by tile name.
    pub tiles: BTreeMap<String, TileConfig>,
}

impl ChipConfig {
    /// Creates an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the tile's feature set, creating it if needed.
    pub fn tile_mut(&mut self, name: &str) -> &mut TileConfig {
        self.tiles.entry(name.to_string()).or_default()
    }

    /// Returns the tile's feature set if anything was recorded for it.
    pub fn tile(&self, name: &str) -> Option<&TileConfig> {
        self.tiles.get(name)
    }

    /// Number of tiles with at least one feature.
    pub fn tile_count(&self) -> usize {
        self.tiles.values().filter(|t| !t.is_empty()).count()
    }

    /// Total number of arcs across all tiles.
    pub fn arc_count(&self) -> usize {
        self.tiles.values().map(|t| t.arcs.len()).sum()
    }

    /// Total number of word and enum features across all tiles.
    pub fn setting_count(&self) -> usize {
        self.tiles.values().map(|t| t.words.len() + t.enums.len()).sum()
    }
}
